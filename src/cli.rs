use crate::layout::NOTEBOOK_PATH;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// nbfix - notebook path maintenance after the folder reorganization
#[derive(Parser)]
#[command(name = "nbfix")]
#[command(about = "Fix and verify Code_Labelling notebook paths after the folder reorganization")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rewrite dataset paths ('../data/raw/ -> '../../data/raw/) in code cells
    FixData {
        /// Notebook to patch
        #[arg(long, default_value = NOTEBOOK_PATH)]
        notebook: PathBuf,
    },
    /// Prefix bare image filenames with ../images/ in code cells
    FixImages {
        /// Notebook to patch
        #[arg(long, default_value = NOTEBOOK_PATH)]
        notebook: PathBuf,
    },
    /// Check the notebook and the on-disk layout for leftover old paths
    Verify {
        /// Repository root the expected folder structure is probed from
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Notebook to scan (defaults to the standard path under the root)
        #[arg(long)]
        notebook: Option<PathBuf>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
