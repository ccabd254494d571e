//! CLI definitions and command dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use fontcss_core::{
    GenerateOptions, clean,
    config::{DEFAULT_BASE_URL, DEFAULT_OUTPUT_DIR},
    generate,
};

#[derive(Parser)]
#[command(name = "fontcss")]
#[command(about = "Generate CDN-backed @font-face stylesheets from font family folders")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DirArgs {
    /// Root directory holding one subdirectory per font family.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
    /// Output directory name; excluded from family scanning.
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub out_dir: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan font folders and write one stylesheet per family.
    Generate {
        #[command(flatten)]
        args: DirArgs,
        /// CDN root prefixed to every generated font URL.
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,
        /// Skip the trailing `git add .`.
        #[arg(long)]
        no_stage: bool,
    },
    /// Remove the generated output directory.
    Clean {
        #[command(flatten)]
        args: DirArgs,
    },
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Commands::Generate { args, base_url, no_stage } => {
                generate(&GenerateOptions {
                    root: args.root,
                    out_dir: args.out_dir,
                    base_url,
                    stage: !no_stage,
                })?;
            }
            Commands::Clean { args } => {
                clean(&args.root, &args.out_dir)?;
            }
        }
        Ok(())
    }
}
