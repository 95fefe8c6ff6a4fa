//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Category and tag page generator for a link-directory site
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: linkpages.toml)
    #[arg(short = 'C', long, default_value = "linkpages.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Query content and register every category and tag page
    Build {
        /// Documents query response (relative to project root)
        #[arg(long)]
        documents: Option<PathBuf>,

        /// Links query response (relative to project root)
        #[arg(long)]
        links: Option<PathBuf>,

        /// Output directory for the page manifest (relative to project root)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the schema type definitions the site declares
    Schema,
}
