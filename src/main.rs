use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use dsm::{AppError, PlatformProcess};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dsm")]
#[command(version)]
#[command(
    about = "Discover and run extension deployment scripts",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List pending deployment scripts in run order
    #[clap(visible_alias = "ls")]
    List {
        /// Extension to inspect
        extension: String,
        /// Extensions root containing deployment.toml
        #[arg(long, default_value = ".")]
        root: PathBuf,
        /// Lifecycle signal of the host platform
        #[arg(long, value_enum, default_value_t = ProcessArg::All)]
        process: ProcessArg,
    },
    /// Run pending deployment scripts and record their outcomes
    #[clap(visible_alias = "r")]
    Run {
        /// Extension to run
        extension: String,
        /// Extensions root containing deployment.toml
        #[arg(long, default_value = ".")]
        root: PathBuf,
        /// Lifecycle signal of the host platform
        #[arg(long, value_enum, default_value_t = ProcessArg::All)]
        process: ProcessArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ProcessArg {
    Init,
    Update,
    All,
}

impl From<ProcessArg> for PlatformProcess {
    fn from(process: ProcessArg) -> Self {
        match process {
            ProcessArg::Init => PlatformProcess::Init,
            ProcessArg::Update => PlatformProcess::Update,
            ProcessArg::All => PlatformProcess::All,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::List { extension, root, process } => list(&root, &extension, process.into()),
        Commands::Run { extension, root, process } => run(&root, &extension, process.into()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn list(root: &Path, extension: &str, process: PlatformProcess) -> Result<(), AppError> {
    let scripts = dsm::pending_scripts(root, extension, process)?;

    if scripts.is_empty() {
        println!("No pending deployment scripts for '{}'", extension);
        return Ok(());
    }
    for script in &scripts {
        println!("{}  ({} step(s))", script.name(), script.ordered_steps().len());
    }
    Ok(())
}

fn run(root: &Path, extension: &str, process: PlatformProcess) -> Result<(), AppError> {
    let report = dsm::run_pending(root, extension, process)?;

    match report.failed {
        None => {
            println!(
                "✅ Executed {} deployment script(s) for '{}'",
                report.executed.len(),
                extension
            );
            Ok(())
        }
        Some(failed) => {
            eprintln!("Deployment of '{}' stopped at script '{}'", extension, failed);
            std::process::exit(1);
        }
    }
}
