mod list_services;
mod run_prompt;

use uichat::Result;

use crate::cli::{Cli, Commands};

pub async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::ListServices { config } => list_services::execute(&config),
        Commands::RunPrompt {
            service,
            prompt,
            prompt_file,
            config,
        } => run_prompt::execute(&config, service.as_deref(), prompt, prompt_file).await,
    }
}
