use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::{Cell, Sheet, Workbook};

/// A workbook backed by a directory of CSV files, one file per sheet.
/// `ChartData.csv` becomes the sheet named `ChartData`, and so on. The
/// header row is kept as row 0 so cell addresses line up with the
/// spreadsheet the files were exported from.
pub struct CsvWorkbook {
    sheets: HashMap<String, Sheet>,
}

impl CsvWorkbook {
    /// Load every `.csv` file in `dir`. A missing or unreadable directory
    /// is fatal; per-cell content is never validated here.
    pub fn open(dir: &Path) -> Result<Self> {
        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("reading workbook directory {}", dir.display()))?;

        let mut sheets = HashMap::new();
        for entry in entries {
            let path = entry
                .with_context(|| format!("listing workbook directory {}", dir.display()))?
                .path();
            if path.extension().and_then(|e| e.to_str()) != Some("csv") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let sheet = load_sheet(&path)
                .with_context(|| format!("parsing CSV sheet {}", path.display()))?;
            sheets.insert(name.to_string(), sheet);
        }

        if sheets.is_empty() {
            bail!("no .csv sheets found in {}", dir.display());
        }

        Ok(Self { sheets })
    }

    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.keys().map(|s| s.as_str())
    }
}

impl Workbook for CsvWorkbook {
    fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.get(name)
    }
}

fn load_sheet(path: &Path) -> Result<Sheet> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(parse_cell).collect());
    }
    Ok(Sheet::from_rows(rows))
}

/// CSV fields are untyped text; numbers are recognized by parsing.
fn parse_cell(field: &str) -> Cell {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        Cell::Empty
    } else if let Ok(n) = trimmed.parse::<f64>() {
        Cell::Number(n)
    } else {
        Cell::Text(trimmed.to_string())
    }
}
