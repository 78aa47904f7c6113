//! In-range command implementation

use anyhow::Result;
use fmnn::RangeMembership;

use crate::utils;

pub fn run(value: &str, start: i64, stop: Option<i64>, step: i64) -> Result<()> {
    println!("{}", in_range(value, start, stop, step)?);
    Ok(())
}

pub fn in_range(value: &str, start: i64, stop: Option<i64>, step: i64) -> Result<bool> {
    let range = RangeMembership::new(start, stop, step)?;
    let value = utils::parse_value(value);
    log::debug!("testing {} ({}) against {}", value, value.type_name(), range);
    Ok(range.contains(&value))
}
