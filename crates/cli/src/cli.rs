use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use script_runner_core::{ColorMode, RuntimeFamily};
use std::path::PathBuf;

use crate::commands::{detect_command, doctor_command, init_command, select_command};
use crate::context::Context;

#[derive(Parser, Debug)]
#[command(name = "script-runner")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Override the log filter")]
pub struct Runner {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by every subcommand; they take precedence over the config file
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Search these directories for runtimes instead of PATH
    #[arg(long, global = true, value_name = "PATHS")]
    pub search_path: Option<String>,

    /// When to use colors: auto, always or never
    #[arg(long, global = true, value_name = "WHEN")]
    pub color: Option<ColorMode>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show which runtimes for a file are installed
    #[command(visible_alias = "d")]
    Detect {
        /// Path to the script (e.g., src/main.ts)
        filepath: PathBuf,

        /// Print the resolution as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the runtime that would execute a file
    #[command(visible_alias = "s")]
    Select {
        /// Path to the script (e.g., src/main.ts)
        filepath: PathBuf,
    },
    /// Report runtime availability per family
    Doctor {
        /// Family to report (script, typed-script, binary-module); repeatable
        #[arg(short, long = "family", value_name = "FAMILY")]
        families: Vec<RuntimeFamily>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a default .script-runner.json
    Init {
        /// Specify the directory to write the config to
        #[arg(short, long)]
        cwd: Option<String>,

        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Whether the command runs against the discovered config file.
    ///
    /// `init` writes that file, so it must still work when the existing one
    /// is missing or malformed.
    pub fn reads_config(&self) -> bool {
        !matches!(self, Commands::Init { .. })
    }

    /// Execute the command
    pub fn execute(self, context: &Context) -> Result<()> {
        tracing::debug!("Executing command: {:?}", self);

        match self {
            Commands::Detect { filepath, json } => detect_command(context, &filepath, json),
            Commands::Select { filepath } => select_command(context, &filepath),
            Commands::Doctor { families, json } => doctor_command(context, &families, json),
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
        }
    }
}
