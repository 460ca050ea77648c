//! mockdrift CLI
//!
//! Compares recorded API fixtures with freshly captured ones and walks the
//! operator through bringing the recordings up to date.

use clap::Parser;
use mockdrift_core::logging_facility::{init, Profile};
use std::ffi::OsString;
use std::io::IsTerminal;

mod commands;
mod terminal;

#[derive(Debug, Parser)]
#[command(name = "mockdrift")]
#[command(about = "Reconcile mock API fixtures with real API captures", long_about = None)]
struct Cli {
    #[command(flatten)]
    reconcile: commands::reconcile::ReconcileArgs,

    /// Emit JSON logs on stderr
    #[arg(long)]
    log_json: bool,
}

/// `-mock`/`-real` are accepted as spellings of `--mock`/`--real`
fn legacy_flag(arg: OsString) -> OsString {
    match arg.to_str() {
        Some("-mock") => OsString::from("--mock"),
        Some("-real") => OsString::from("--real"),
        _ => arg,
    }
}

fn main() {
    let cli = Cli::parse_from(std::env::args_os().map(legacy_flag));

    init(if cli.log_json {
        Profile::Production
    } else {
        Profile::Development
    });
    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    if let Err(e) = commands::reconcile::execute(cli.reconcile) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
