//! Generate command implementation

use anyhow::{Context, Result};
use fmnn_testkit::data_gen::{ValueMix, generate_values};
use std::fs;

pub fn run(len: usize, seed: Option<u64>, output_path: Option<String>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let values = generate_values(len, ValueMix::default(), &mut rng);
    log::debug!("generated {} values", values.len());

    let json = serde_json::to_string(&fmnn_value::values_to_json_array(&values))
        .context("Failed to serialize values to JSON")?;

    match output_path {
        Some(output_file) => {
            fs::write(&output_file, &json)
                .with_context(|| format!("Failed to write values to file: {}", output_file))?;
            println!("Values written to: {}", output_file);
        }
        None => {
            println!("{}", json);
        }
    }
    Ok(())
}
