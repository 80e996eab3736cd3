use clap::Parser;
use debug_sweep_core::{execute_sweep_flow, style, SweepArgs};

fn main() {
    let cli_args = SweepArgs::parse();
    if let Err(e) = execute_sweep_flow(cli_args) {
        eprintln!(
            "{} {} {}",
            style("❌"),
            style("debug-sweep failed:").red().bold(),
            style(format!("{e:#}")).red()
        );
        std::process::exit(1);
    }
}
