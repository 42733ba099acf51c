use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "kpanes",
    version,
    about = "Keyboard-driven terminal dashboard for pods, services and deployments."
)]
pub struct CliArgs {
    /// YAML file with the context, lists and info text to show
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// tracing filter (for example: info,debug,trace)
    #[arg(long, default_value = "info")]
    pub log_filter: String,

    /// Append logs to this file instead of discarding them
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
