use schemars::schema_for;

use crate::model::Shaped;

/// Generate and print the JSON Schema for the shaped output contract.
pub fn run() -> anyhow::Result<()> {
    let schema = schema_for!(Shaped);
    let json = serde_json::to_string_pretty(&schema)?;
    println!("{json}");
    Ok(())
}
