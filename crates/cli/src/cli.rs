use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pants-classpath")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the runtime classpath for a module
    #[command(visible_alias = "cp")]
    Classpath {
        /// Module name as imported from the Pants build graph
        module: String,

        /// Path to the project-metadata JSON file
        #[arg(short, long)]
        metadata: PathBuf,

        /// Export-classpath directory (defaults to dist/export-classpath
        /// under the discovered buildroot)
        #[arg(short, long)]
        export_dir: Option<PathBuf>,

        /// The export was run with --export-classpath-manifest-jar-only
        #[arg(long)]
        manifest_jar_only: bool,

        /// Print the resolution as JSON
        #[arg(short, long)]
        json: bool,

        /// Print one classpath path per line, nothing else
        #[arg(short, long)]
        quiet: bool,
    },
    /// Show which modules on the runtime closure declare library exclusions
    Excludes {
        /// Module name as imported from the Pants build graph
        module: String,

        /// Path to the project-metadata JSON file
        #[arg(short, long)]
        metadata: PathBuf,
    },
    /// List the target ids published in the export-classpath directory
    Scan {
        /// Export-classpath directory (defaults to dist/export-classpath
        /// under the discovered buildroot)
        #[arg(short, long)]
        export_dir: Option<PathBuf>,

        /// Print the scan result as JSON
        #[arg(short, long)]
        json: bool,
    },
}
