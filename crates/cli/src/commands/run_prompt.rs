//! Submit one prompt to a chat service and print the raw response.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;
use uichat::{AutomationSession, Error, Result, ServiceCatalog};

/// Extensions accepted for `--prompt-file`.
const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

pub async fn execute(
    config: &Path,
    service: Option<&str>,
    prompt: Option<String>,
    prompt_file: Option<PathBuf>,
) -> Result<()> {
    // Prompt input validation comes first: usage errors should not depend on
    // whether the config file is in shape.
    let prompt = resolve_prompt(prompt, prompt_file)?;

    let catalog = ServiceCatalog::load(config)?;
    if catalog.is_empty() {
        return Err(Error::InvalidUsage(
            "no services defined in config file".into(),
        ));
    }

    let descriptor = catalog.resolve(service.unwrap_or_default())?;
    info!(service = %descriptor.name(), "running prompt");

    let response = AutomationSession::run(descriptor, &prompt).await?;
    println!("Response from {}:\n{}", descriptor.name(), response.raw_text);
    Ok(())
}

/// Enforce the `--prompt` / `--prompt-file` exclusivity and turn whichever
/// was given into a non-empty prompt string. Inline text is submitted
/// verbatim; only file content is trimmed.
fn resolve_prompt(prompt: Option<String>, prompt_file: Option<PathBuf>) -> Result<String> {
    let text = match (prompt, prompt_file) {
        (Some(_), Some(_)) => {
            return Err(Error::InvalidUsage(
                "provide either --prompt or --prompt-file, not both".into(),
            ));
        }
        (None, None) => {
            return Err(Error::InvalidUsage(
                "provide either --prompt or --prompt-file".into(),
            ));
        }
        (Some(text), None) => text,
        (None, Some(path)) => {
            if !has_markdown_extension(&path) {
                return Err(Error::InvalidUsage(format!(
                    "prompt file '{}' must have a markdown extension (.md or .markdown)",
                    path.display()
                )));
            }
            let content = fs::read_to_string(&path).map_err(|err| {
                Error::InvalidUsage(format!(
                    "cannot read prompt file '{}': {err}",
                    path.display()
                ))
            })?;
            content.trim().to_string()
        }
    };

    if text.is_empty() {
        return Err(Error::InvalidUsage("prompt must not be empty".into()));
    }
    Ok(text)
}

fn has_markdown_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            MARKDOWN_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}
