//! Print the exposed surface of `libE2EBindings`.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "e2e-listing")]
#[command(about = "List the symbols exposed by the libE2EBindings module", long_about = None)]
#[command(version)]
struct Cli {
    /// Write the listing to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Log registration and sealing at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let bindings = match exposer_e2e::bindings() {
        Ok(bindings) => bindings,
        Err(err) => {
            for cause in err.into_errors() {
                eprintln!("error: {cause}");
            }
            eprintln!("error: failed to build {}", exposer_e2e::MODULE_NAME);
            return ExitCode::FAILURE;
        }
    };
    let listing = bindings.listing();

    match cli.output {
        Some(path) => {
            if let Err(err) = fs::write(&path, &listing) {
                eprintln!("error: cannot write {}: {err}", path.display());
                return ExitCode::FAILURE;
            }
            tracing::info!(path = %path.display(), "listing written");
        }
        None => print!("{listing}"),
    }
    ExitCode::SUCCESS
}
