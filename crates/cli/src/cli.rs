use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Default location of the service catalog, relative to the working
/// directory.
pub const DEFAULT_CONFIG_PATH: &str = "conf/config.toml";

#[derive(Parser, Debug)]
#[command(name = "uichat")]
#[command(about = "Drive chat web UIs from the command line")]
#[command(version)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List chat services declared in the config file
    ListServices {
        /// Path to the TOML config file
        #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },

    /// Run a prompt against a chat service and print the raw response
    RunPrompt {
        /// Chat service name; defaults to the config's default_service
        #[arg(long, value_name = "NAME")]
        service: Option<String>,

        /// Prompt text to submit (mutually exclusive with --prompt-file)
        #[arg(long, value_name = "TEXT")]
        prompt: Option<String>,

        /// Path to a markdown file containing the prompt
        #[arg(long, value_name = "PATH")]
        prompt_file: Option<PathBuf>,

        /// Path to the TOML config file
        #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },
}
