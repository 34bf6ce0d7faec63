#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};

use anyhow::bail;
use rand::rngs::SmallRng;

use crate::{
    ai::{adjacent_target, best_target, density_map, normalize},
    common::{AttackResult, Coord, Shot},
    grid::Grid,
    knowledge::KnowledgeGrid,
    placement::{random_placement, PlacementReport},
    player::Player,
    ship::Orientation,
    ui::{coord_to_string, parse_coord, render_grid, render_probability},
};

/// Where a [`CliPlayer`] reads its answers from.
///
/// Stdin is read without holding its lock between prompts, so two hot-seat
/// players can share the terminal.
pub trait LineSource {
    /// Read one line into `buf`, returning the bytes read (0 at end of input).
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineSource for io::Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineSource for io::Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Human player driven by line-oriented text input.
pub struct CliPlayer<I = io::Stdin, O = io::Stdout> {
    name: String,
    input: I,
    output: O,
    hint_fleet: Option<Vec<usize>>,
}

impl CliPlayer {
    /// Player reading from stdin and writing to stdout.
    pub fn new(name: &str) -> Self {
        Self::with_io(name, io::stdin(), io::stdout())
    }
}

impl<I: LineSource, O: Write> CliPlayer<I, O> {
    pub fn with_io(name: &str, input: I, output: O) -> Self {
        Self {
            name: name.to_string(),
            input,
            output,
            hint_fleet: None,
        }
    }

    /// Show a probability board before each shot and offer the densest
    /// cell as the default guess, assuming the opponent carries `fleet`.
    pub fn with_hints(mut self, fleet: &[usize]) -> Self {
        self.hint_fleet = Some(fleet.to_vec());
        self
    }

    /// Borrow the output sink, e.g. to inspect what was printed.
    pub fn output(&self) -> &O {
        &self.output
    }

    fn prompt(&mut self, text: &str) -> anyhow::Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed while waiting for {}", self.name);
        }
        Ok(line.trim().to_string())
    }

    fn suggestion<const N: usize>(&mut self, opponent: &Grid<N>) -> anyhow::Result<Option<Coord>> {
        let Some(fleet) = &self.hint_fleet else {
            return Ok(None);
        };
        let knowledge = KnowledgeGrid::observed(opponent);
        let density = density_map(&knowledge, fleet);
        writeln!(self.output, "{}", render_probability(&normalize(&knowledge, &density)))?;
        Ok(adjacent_target(&knowledge).or_else(|| best_target(&knowledge, &density)))
    }
}

fn parse_orientation(input: &str) -> Option<Orientation> {
    match input.chars().next()?.to_ascii_uppercase() {
        'H' => Some(Orientation::Horizontal),
        'V' => Some(Orientation::Vertical),
        _ => None,
    }
}

impl<const N: usize, I: LineSource, O: Write> Player<N> for CliPlayer<I, O> {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(
        &mut self,
        rng: &mut SmallRng,
        grid: &mut Grid<N>,
        fleet: &[usize],
    ) -> anyhow::Result<PlacementReport> {
        writeln!(self.output, "\n{}, place your ships on the board.", self.name)?;
        let mut report = PlacementReport::default();
        for &length in fleet {
            loop {
                write!(self.output, "{}", render_grid(grid, true))?;
                let line = self.prompt(&format!(
                    "Place your ship of size {} (e.g. A1 H, empty line for random): ",
                    length
                ))?;
                if line.is_empty() {
                    match random_placement(grid, length, rng) {
                        Ok(((r, c), o)) => {
                            grid.place_ship(length, o, r, c)
                                .map_err(|e| anyhow::anyhow!(e))?;
                            report.record(length, true);
                        }
                        Err(e) => {
                            writeln!(self.output, "{}", e)?;
                            report.record(length, false);
                        }
                    }
                    break;
                }
                let mut parts = line.split_whitespace();
                let coord = match parts.next().map(parse_coord::<N>) {
                    Some(Ok(coord)) => coord,
                    Some(Err(msg)) => {
                        writeln!(self.output, "{}", msg)?;
                        continue;
                    }
                    None => continue,
                };
                let Some(orientation) = parts.next().and_then(parse_orientation) else {
                    writeln!(self.output, "Invalid orientation. Use H or V.")?;
                    continue;
                };
                match grid.place_ship(length, orientation, coord.0, coord.1) {
                    Ok(()) => {
                        report.record(length, true);
                        break;
                    }
                    Err(e) => writeln!(self.output, "Invalid placement: {}. Try again.", e)?,
                }
            }
        }
        Ok(report)
    }

    fn take_shot(&mut self, _rng: &mut SmallRng, opponent: &mut Grid<N>) -> anyhow::Result<Shot> {
        let suggested = self.suggestion(opponent)?;
        loop {
            let hint = suggested
                .map(|c| format!(" [{}]", coord_to_string(c)))
                .unwrap_or_default();
            let line = self.prompt(&format!(
                "{}, enter attack coordinates (e.g. A1){}: ",
                self.name, hint
            ))?;
            let parsed = match (line.is_empty(), suggested) {
                (true, Some(coord)) => Ok(coord),
                _ => parse_coord::<N>(&line),
            };
            let (r, c) = match parsed {
                Ok(coord) => coord,
                Err(msg) => {
                    writeln!(self.output, "{}", msg)?;
                    continue;
                }
            };
            if opponent.is_attacked(r, c).map_err(|e| anyhow::anyhow!(e))? {
                writeln!(self.output, "Already attacked this position. Try again.")?;
                continue;
            }
            let result = opponent
                .resolve_attack(r, c)
                .map_err(|e| anyhow::anyhow!(e))?;
            let verb = match result {
                AttackResult::Hit => "HIT",
                AttackResult::Miss => "MISSED",
            };
            writeln!(self.output, "You {} at {}!", verb, coord_to_string((r, c)))?;
            return Ok(Shot {
                coord: (r, c),
                result,
            });
        }
    }
}
