use clap::Parser;
use libman::{cli::app::Cli, Result};

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(libman::cli::tui::run())
}
