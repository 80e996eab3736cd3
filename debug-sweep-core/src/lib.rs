// debug-sweep-core/src/lib.rs

// declare modules
pub mod config;
pub mod stripper;
pub mod sweep;
pub mod utils;
pub mod walker;

// re-export key structs/functions for external use by other crates
pub use anyhow::{Context, Result}; // re-export for convenience
pub use clap::Parser; // re-export Parser for CLI crate
pub use console::style; // re-export for CLI crate printing
pub use indicatif::{ProgressBar, ProgressStyle};
pub use std::path::PathBuf;
pub use std::time::Duration;

pub use crate::config::{FileConfig, SweepConfig, DEFAULT_EXTENSION, DEFAULT_MARKER};
pub use crate::stripper::{StripOutcome, Stripper};
pub use crate::sweep::{sweep, sweep_with, SweepSummary};
pub use crate::walker::walk;

// argument parsing struct - shared with the CLI crate.
// running with no flags sweeps the current directory with the defaults.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "debug-sweep")]
#[command(version)]
#[command(about = "strip debug logging statements from a source tree", long_about = None)]
pub struct SweepArgs {
    /// root directory to sweep (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// file name suffix to process (defaults to .dart)
    #[arg(short, long)]
    pub extension: Option<String>,

    /// logger call to strip (defaults to EVLogger.debug)
    #[arg(short, long)]
    pub marker: Option<String>,

    /// toml file with root, extension and marker keys
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// list every file changed and print a summary
    #[arg(short, long)]
    pub verbose: bool,
}

// resolve settings, sweep the tree and report
pub fn execute_sweep_flow(args: SweepArgs) -> Result<SweepSummary> {
    let config = SweepConfig::resolve(&args)?;

    if config.verbose {
        println!("{}", style("\ndebug-sweep 🧹").cyan().bold());
        println!(
            "{}\n",
            style(format!(
                "removing {}(...); from *{} under {}",
                config.marker,
                config.extension,
                config.root.display()
            ))
            .dim()
        );

        let summary = sweep_with(&config, |outcome| {
            if outcome.removed > 0 {
                println!(
                    "{} {}",
                    style(format!("  - {}", outcome.path.display())).green(),
                    style(format!("({} removed)", outcome.removed)).dim()
                );
            }
        })
        .with_context(|| format!("sweep of {} failed", config.root.display()))?;

        println!("\n{}", style(format!("✅ {}", summary.describe())).green().bold());
        return Ok(summary);
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("🧹 sweeping {}...", config.root.display()));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = sweep(&config);
    spinner.finish_and_clear();

    result.with_context(|| format!("sweep of {} failed", config.root.display()))
}
