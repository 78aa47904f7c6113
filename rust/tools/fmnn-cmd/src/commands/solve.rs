//! Solve command implementation

use anyhow::{Result, bail};
use fmnn::{StrategyKind, Value};

use crate::utils;

pub fn run(strategy: Option<StrategyKind>, file: Option<String>) -> Result<()> {
    let text = utils::read_input(file.as_deref())?;
    let values = utils::parse_values(&text)?;
    log::debug!("solving for {} values", values.len());

    for (kind, answer) in solve(&values, strategy)? {
        println!("{kind}: {answer}");
    }
    Ok(())
}

/// Runs the requested strategy, or all of them, on a copy of `values`.
///
/// Fails if the strategies do not all return the same answer.
pub fn solve(
    values: &[Value],
    strategy: Option<StrategyKind>,
) -> Result<Vec<(StrategyKind, usize)>> {
    let kinds = match strategy {
        Some(kind) => vec![kind],
        None => StrategyKind::ALL.to_vec(),
    };
    let answers: Vec<(StrategyKind, usize)> = kinds
        .into_iter()
        .map(|kind| (kind, kind.first_missing_preserving(values)))
        .collect();

    if let Some(&(_, first)) = answers.first() {
        if answers.iter().any(|&(_, answer)| answer != first) {
            bail!("Strategies disagree: {:?}", answers);
        }
    }
    Ok(answers)
}
