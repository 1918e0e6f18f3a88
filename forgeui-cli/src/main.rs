//! forgeui CLI tool

#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use forgeui_cli_lib::commands::{AddCommand, DiffCommand, InitCommand};

#[derive(Parser)]
#[command(name = "forgeui")]
#[command(version)]
#[command(about = "Add forgeui components to your project", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Wire up theming in an existing project
    Init {
        /// Working directory of the target project
        #[arg(long, default_value = ".")]
        cwd: PathBuf,
        /// Skip confirmation prompts
        #[arg(short, long)]
        yes: bool,
        /// Do not install npm packages
        #[arg(long)]
        skip_install: bool,
    },
    /// Add components from the registry
    Add {
        /// Component names (e.g. button, card)
        #[arg(required = true)]
        components: Vec<String>,
        /// Working directory of the target project
        #[arg(long, default_value = ".")]
        cwd: PathBuf,
        /// Skip confirmation prompts
        #[arg(short, long)]
        yes: bool,
        /// Overwrite existing files without prompting
        #[arg(long)]
        overwrite: bool,
        /// Do not install npm packages
        #[arg(long)]
        skip_install: bool,
    },
    /// Show differences between local components and the registry
    Diff {
        /// Component name
        component: String,
        /// Working directory of the target project
        #[arg(long, default_value = ".")]
        cwd: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init {
            cwd,
            yes,
            skip_install,
        } => {
            InitCommand::new(cwd, yes, skip_install).execute()?;
        }
        Commands::Add {
            components,
            cwd,
            yes,
            overwrite,
            skip_install,
        } => {
            AddCommand::new(components, cwd, yes, overwrite, skip_install)?.execute()?;
        }
        Commands::Diff { component, cwd } => {
            DiffCommand::new(component, cwd).execute()?;
        }
    }

    Ok(())
}
