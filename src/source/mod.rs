pub mod csv;

pub use csv::CsvWorkbook;

/// A single spreadsheet cell. Numeric coercion is lossy by design: anything
/// that does not parse as a number reads as `None`, and the pipeline turns
/// that into 0.0 rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

const EMPTY_CELL: Cell = Cell::Empty;

impl Cell {
    /// Numeric view of the cell. Text cells parse if they hold a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Text(s) => s.trim().parse().ok(),
            Cell::Empty => None,
        }
    }

    /// Text view of the cell; blank text reads as `None`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then_some(trimmed)
            }
            _ => None,
        }
    }

    /// True for the missing-value sentinel: an absent cell or blank text.
    pub fn is_missing(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }
}

/// A rectangular-ish grid of cells. Rows may have ragged lengths; any
/// out-of-bounds read returns an empty cell instead of panicking.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Cell at (row, col), 0-indexed with row 0 being the header row.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY_CELL)
    }

    /// Place a cell, growing the grid with empty cells as needed.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if self.rows.len() <= row {
            self.rows.resize(row + 1, Vec::new());
        }
        let r = &mut self.rows[row];
        if r.len() <= col {
            r.resize(col + 1, Cell::Empty);
        }
        r[col] = cell;
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Column index of a header cell in row 0 matching `name` exactly.
    pub fn header_col(&self, name: &str) -> Option<usize> {
        let header = self.rows.first()?;
        header.iter().position(|c| c.as_text() == Some(name))
    }
}

/// A tabular data source: named sheets of cells. The shaping pipeline only
/// sees this trait, so spreadsheet format and parsing stay at the boundary.
pub trait Workbook {
    fn sheet(&self, name: &str) -> Option<&Sheet>;
}
