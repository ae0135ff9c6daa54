use anyhow::Result;
use clap::Parser;
use pants_classpath::cli::{Cli, Commands};
use pants_classpath::commands::{classpath_command, excludes_command, scan_command};

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Classpath {
            module,
            metadata,
            export_dir,
            manifest_jar_only,
            json,
            quiet,
        } => classpath_command(
            &module,
            &metadata,
            export_dir.as_deref(),
            manifest_jar_only,
            json,
            quiet,
        ),
        Commands::Excludes { module, metadata } => excludes_command(&module, &metadata),
        Commands::Scan { export_dir, json } => scan_command(export_dir.as_deref(), json),
    }
}
