use clap::Parser;

/// Libman: terminal library catalog manager
///
/// The catalog lives in memory only and resets to the demonstration
/// seed on every start, so there is nothing to configure: the binary
/// takes no flags beyond --help and --version.
#[derive(Parser)]
#[command(name = "libman")]
#[command(version)]
#[command(about = "Manage a small library catalog from the terminal")]
pub struct Cli {}
