use std::path::Path;

use anyhow::{Context, Result};

use crate::pipeline::{self, schema::{AbsPolicy, SheetSchema}};
use crate::render;
use crate::source::CsvWorkbook;

/// Entry point for the `chart` command: shape one workbook snapshot and
/// write a self-contained HTML chart page.
pub fn run(workbook_dir: &Path, out: Option<&Path>, pie: bool, abs: AbsPolicy) -> Result<()> {
    let workbook = CsvWorkbook::open(workbook_dir)?;
    let schema = SheetSchema::default().with_abs_policy(abs);
    let shaped = pipeline::shape(&workbook, &schema)?;

    if shaped.is_empty() {
        eprintln!("Warning: no strike rows found; the chart will be empty");
    }

    let html = if pie {
        render::pie::render_page(&shaped)
    } else {
        render::chart::render_page(&shaped)
    };

    write_output(&html, out)
}

/// Write the page to a file, or stdout when no path was given.
fn write_output(content: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("writing {}", path.display()))?;
            eprintln!("HTML chart generated: {}", path.display());
        }
        None => print!("{content}"),
    }
    Ok(())
}
