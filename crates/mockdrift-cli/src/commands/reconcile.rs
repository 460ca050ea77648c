//! Reconcile command
//!
//! Usage: mockdrift <MOCK_DIR> <REAL_DIR> [--ignore <FIELD>]... [--apply-all] [--create-missing]
//!        mockdrift --mock <DIR> --real <DIR> [--config <FILE>]

use crate::terminal::{TerminalPrompt, TerminalView};
use clap::Args;
use mockdrift_core::DriftConfig;
use mockdrift_engine::{run, Mode, SessionConfig};
use std::io;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReconcileArgs {
    /// Directory holding the mock fixtures
    #[arg(value_name = "MOCK_DIR", required_unless_present = "mock")]
    pub mock_dir: Option<PathBuf>,

    /// Directory holding the real API captures
    #[arg(value_name = "REAL_DIR", required_unless_present = "real")]
    pub real_dir: Option<PathBuf>,

    /// Directory holding the mock fixtures
    #[arg(long, value_name = "DIR", conflicts_with = "mock_dir")]
    pub mock: Option<PathBuf>,

    /// Directory holding the real API captures
    #[arg(long, value_name = "DIR", conflicts_with = "real_dir")]
    pub real: Option<PathBuf>,

    /// Settings file (TOML, JSON or YAML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Additional field name to leave out of the comparison (repeatable)
    #[arg(long = "ignore", value_name = "FIELD")]
    pub ignore: Vec<String>,

    /// Replace every differing mock fixture with its real counterpart, without prompting
    #[arg(long)]
    pub apply_all: bool,

    /// Copy real fixtures missing from the mock directory, without prompting
    #[arg(long)]
    pub create_missing: bool,
}

impl ReconcileArgs {
    fn directories(&self) -> Result<(PathBuf, PathBuf), Box<dyn std::error::Error>> {
        let mock = self
            .mock
            .clone()
            .or_else(|| self.mock_dir.clone())
            .ok_or("missing mock directory")?;
        let real = self
            .real
            .clone()
            .or_else(|| self.real_dir.clone())
            .ok_or("missing real directory")?;
        Ok((mock, real))
    }

    fn mode(&self) -> Mode {
        if self.apply_all || self.create_missing {
            Mode::Bulk {
                apply_all: self.apply_all,
                create_missing: self.create_missing,
            }
        } else {
            Mode::Interactive
        }
    }
}

/// Execute reconcile command
pub fn execute(args: ReconcileArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (mock_dir, real_dir) = args.directories()?;
    let settings = DriftConfig::load(args.config.as_deref())?;

    let config = SessionConfig {
        mock_dir,
        real_dir,
        filter: settings.exception_filter(&args.ignore),
        indent: settings.indent,
    };
    let mode = args.mode();

    let stdin = io::stdin();
    let mut prompt = TerminalPrompt::new(stdin.lock(), io::stdout());
    let mut view = TerminalView::new(io::stdout());

    let report = run(config, mode, &mut prompt, &mut view)?;
    view.bulk_summary(&report);

    Ok(())
}
