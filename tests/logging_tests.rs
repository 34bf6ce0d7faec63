#![cfg(feature = "std")]

use gridstrike::level_from;
use log::LevelFilter;

#[test]
fn defaults_to_warn() {
    assert_eq!(level_from(None), LevelFilter::Warn);
    assert_eq!(level_from(Some("nonsense")), LevelFilter::Warn);
}

#[test]
fn parses_level_names() {
    assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
    assert_eq!(level_from(Some("TRACE")), LevelFilter::Trace);
    assert_eq!(level_from(Some("off")), LevelFilter::Off);
}
