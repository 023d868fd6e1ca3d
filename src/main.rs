use clap::Parser;

use gexboard::cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Chart {
            workbook,
            out,
            stdout,
            pie,
            abs,
        } => {
            let out = if stdout { None } else { Some(out.as_path()) };
            gexboard::chart::run(&workbook, out, pie, abs)
        }
        Command::Serve {
            workbook,
            host,
            port,
            ttl_secs,
            abs,
        } => gexboard::serve::run(&workbook, &host, port, ttl_secs, abs),
        Command::Dump {
            workbook,
            pretty,
            abs,
        } => gexboard::dump::run(&workbook, pretty, abs),
        Command::Schema => gexboard::schema::run(),
    }
}
