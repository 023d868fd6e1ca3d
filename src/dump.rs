use std::path::Path;

use anyhow::Result;

use crate::pipeline::{self, schema::{AbsPolicy, SheetSchema}};
use crate::source::CsvWorkbook;

/// Print the shaped pipeline output as JSON, for inspection or piping
/// into other tooling.
pub fn run(workbook_dir: &Path, pretty: bool, abs: AbsPolicy) -> Result<()> {
    let workbook = CsvWorkbook::open(workbook_dir)?;
    let schema = SheetSchema::default().with_abs_policy(abs);
    let shaped = pipeline::shape(&workbook, &schema)?;

    let json = if pretty {
        serde_json::to_string_pretty(&shaped)?
    } else {
        serde_json::to_string(&shaped)?
    };
    println!("{json}");
    Ok(())
}
