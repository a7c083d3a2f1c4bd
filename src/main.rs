//! nbfix - main entry point
//!
//! Dispatches the fix-data / fix-images / verify subcommands. Output is
//! informational: commands return normally whatever the outcome, so nothing
//! here sets a failing exit code for a failed check or a zero-change run.

use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use nbfix::cli::{Cli, Commands};
use nbfix::layout::NOTEBOOK_PATH;
use nbfix::{run_fix_data, run_fix_images, run_verify};

/// Initialize tracing with RUST_LOG override support
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    match cli.command {
        Some(Commands::FixData { notebook }) => {
            if !precheck(&notebook) {
                return Ok(());
            }
            info!(notebook = %notebook.display(), "fixing data paths");
            let changes = run_fix_data(&notebook)?;
            println!("\n📊 Total changes made: {}", changes);
        }
        Some(Commands::FixImages { notebook }) => {
            if !precheck(&notebook) {
                return Ok(());
            }
            info!(notebook = %notebook.display(), "fixing image paths");
            let changes = run_fix_images(&notebook)?;
            println!("\n📊 Total changes made: {}", changes);
        }
        Some(Commands::Verify { root, notebook }) => {
            let notebook = notebook.unwrap_or_else(|| root.join(NOTEBOOK_PATH));
            info!(notebook = %notebook.display(), "verifying layout");
            run_verify(&root, &notebook);
        }
        None => {
            // Read-only default: report the current state.
            info!("no command specified, running verify");
            let root = Path::new(".");
            run_verify(root, &root.join(NOTEBOOK_PATH));
        }
    }

    Ok(())
}

/// Existence check before a fixer runs. A missing notebook is reported and
/// skipped, not treated as an error.
fn precheck(notebook: &Path) -> bool {
    if notebook.exists() {
        true
    } else {
        println!("❌ Notebook not found: {}", notebook.display());
        false
    }
}
