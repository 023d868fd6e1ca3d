use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::pipeline::schema::AbsPolicy;

/// Options-positioning dashboards — shape GEX/OI spreadsheet exports into
/// standalone HTML charts and a live web view.
#[derive(Parser)]
#[command(name = "gexboard", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a standalone HTML chart page from a workbook directory
    Chart {
        /// Directory of CSV sheets (ChartData.csv, optionally Volume.csv)
        workbook: PathBuf,

        /// Output file (default: options_chart.html; use --stdout to print)
        #[arg(long, short = 'o', default_value = "options_chart.html")]
        out: PathBuf,

        /// Print the page to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,

        /// Include the call/put volume doughnut and gauge bar
        #[arg(long)]
        pie: bool,

        /// Summary rows whose label contains "ABS": keep as highlight, or drop
        #[arg(long, value_enum, default_value = "highlight")]
        abs: AbsPolicy,
    },

    /// Serve the live-refreshing dashboard
    Serve {
        /// Directory of CSV sheets, re-read on every refresh
        workbook: PathBuf,

        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(long, default_value = "3000")]
        port: u16,

        /// Seconds a shaped snapshot stays cached before re-reading
        #[arg(long, default_value = "30")]
        ttl_secs: u64,

        /// Summary rows whose label contains "ABS": keep as highlight, or drop
        #[arg(long, value_enum, default_value = "exclude")]
        abs: AbsPolicy,
    },

    /// Print the shaped pipeline output as JSON
    Dump {
        /// Directory of CSV sheets
        workbook: PathBuf,

        #[arg(long)]
        pretty: bool,

        /// Summary rows whose label contains "ABS": keep as highlight, or drop
        #[arg(long, value_enum, default_value = "highlight")]
        abs: AbsPolicy,
    },

    /// Output the JSON Schema of the shaped data contract
    Schema,
}
