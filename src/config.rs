use alloc::vec::Vec;

/// Ship lengths placed on each grid, in placement order.
pub const STANDARD_FLEET: [usize; 5] = [5, 3, 2, 2, 1];

/// Random draws tried per ship before placement gives up on it.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Outstanding neighbour candidates kept by the reactive AI.
pub const MAX_CANDIDATES: usize = 4;

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "GRIDSTRIKE_LOG";

/// Supported grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum))]
pub enum BoardSize {
    /// 8×8
    Small,
    /// 10×10
    #[default]
    Standard,
}

impl BoardSize {
    pub const fn dimension(self) -> usize {
        match self {
            BoardSize::Small => 8,
            BoardSize::Standard => 10,
        }
    }
}

/// Number of ship segments a fully placed fleet occupies.
pub fn total_segments(fleet: &[usize]) -> usize {
    fleet.iter().sum()
}

/// Parse a comma separated list of ship lengths such as `5,3,2,2,1`.
pub fn parse_fleet(input: &str) -> Result<Vec<usize>, &'static str> {
    let fleet = input
        .split(',')
        .map(|part| part.trim().parse::<usize>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| "fleet must be a comma separated list of ship lengths")?;
    if fleet.is_empty() || fleet.contains(&0) {
        return Err("every ship needs a length of at least 1");
    }
    Ok(fleet)
}
