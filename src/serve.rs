use std::path::Path;

use anyhow::{Context, Result};

use crate::api;
use crate::pipeline::schema::{AbsPolicy, SheetSchema};

/// Entry point for the `serve` command.
pub fn run(
    workbook_dir: &Path,
    host: &str,
    port: u16,
    ttl_secs: u64,
    abs: AbsPolicy,
) -> Result<()> {
    let schema = SheetSchema::default().with_abs_policy(abs);

    let rt = tokio::runtime::Runtime::new().context("creating tokio runtime")?;
    rt.block_on(api::serve(host, port, workbook_dir, schema, ttl_secs))
}
