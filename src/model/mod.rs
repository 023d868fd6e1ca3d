pub mod shaped;
pub mod summary;

pub use shaped::Shaped;
pub use summary::{Category, SummaryRow};
