//! Black-box tests against the built binary: catalog listing and the
//! run-prompt validation surface. None of these reach a browser.

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

const TWO_SERVICES: &str = r##"
[services.alpha]
ui_url = "https://alpha.test/chat"
input_selector = "textarea"
submit_selector = "button[type=submit]"
response_selector = ".answer"

[services.beta]
ui_url = "https://beta.test/chat"
input_selector = "#prompt"
submit_selector = "#send"
response_selector = "#reply"
"##;

fn uichat_binary() -> PathBuf {
	let mut path = std::env::current_exe().unwrap();
	path.pop();
	path.pop();
	path.push("uichat");
	path
}

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
	let path = dir.path().join("config.toml");
	std::fs::write(&path, contents).unwrap();
	path
}

fn run(args: &[&str]) -> Output {
	Command::new(uichat_binary())
		.args(args)
		.output()
		.expect("failed to execute uichat")
}

fn stdout(output: &Output) -> String {
	String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
	String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn list_services_empty_catalog_is_benign() {
	let dir = TempDir::new().unwrap();
	let config = write_config(&dir, "");

	let output = run(&["list-services", "--config", config.to_str().unwrap()]);
	assert!(output.status.success(), "expected exit 0");
	assert!(stdout(&output).contains("No services found in config file."));
}

#[test]
fn list_services_missing_config_still_exits_zero() {
	let output = run(&["list-services", "--config", "/nonexistent/uichat.toml"]);
	assert!(output.status.success(), "expected exit 0");
	assert!(stderr(&output).contains("config file not found"));
}

#[test]
fn list_services_marks_configured_default() {
	let dir = TempDir::new().unwrap();
	let config = write_config(&dir, &format!("default_service = \"beta\"\n{TWO_SERVICES}"));

	let output = run(&["list-services", "--config", config.to_str().unwrap()]);
	assert!(output.status.success());
	let out = stdout(&output);
	assert!(out.contains("Available chat services (default: beta):"));
	assert!(out.contains("- alpha"));
	assert!(out.contains("- beta"));
}

#[test]
fn list_services_defaults_to_first_declared() {
	let dir = TempDir::new().unwrap();
	let config = write_config(&dir, TWO_SERVICES);

	let output = run(&["list-services", "--config", config.to_str().unwrap()]);
	assert!(output.status.success());
	assert!(stdout(&output).contains("(default: alpha)"));
}

#[test]
fn run_prompt_rejects_both_prompt_inputs() {
	let output = run(&[
		"run-prompt",
		"--prompt",
		"hi",
		"--prompt-file",
		"prompt.md",
	]);
	assert!(!output.status.success());
	let err = stderr(&output);
	assert!(err.contains("Error:"), "stderr was: {err}");
	assert!(err.contains("not both"));
}

#[test]
fn run_prompt_requires_a_prompt_input() {
	let output = run(&["run-prompt"]);
	assert!(!output.status.success());
	assert!(stderr(&output).contains("--prompt or --prompt-file"));
}

#[test]
fn run_prompt_rejects_non_markdown_prompt_file() {
	let dir = TempDir::new().unwrap();
	let prompt = dir.path().join("prompt.txt");
	std::fs::write(&prompt, "hello").unwrap();

	let output = run(&["run-prompt", "--prompt-file", prompt.to_str().unwrap()]);
	assert!(!output.status.success());
	assert!(stderr(&output).contains("markdown"));
}

#[test]
fn run_prompt_rejects_whitespace_only_prompt_file() {
	let dir = TempDir::new().unwrap();
	let prompt = dir.path().join("prompt.md");
	std::fs::write(&prompt, "  \n\t\n").unwrap();

	let output = run(&["run-prompt", "--prompt-file", prompt.to_str().unwrap()]);
	assert!(!output.status.success());
	assert!(stderr(&output).contains("empty"));
}

#[test]
fn run_prompt_missing_config_fails() {
	let output = run(&[
		"run-prompt",
		"--prompt",
		"hi",
		"--config",
		"/nonexistent/uichat.toml",
	]);
	assert!(!output.status.success());
	assert!(stderr(&output).contains("config file not found"));
}

#[test]
fn run_prompt_empty_catalog_is_usage_error() {
	let dir = TempDir::new().unwrap();
	let config = write_config(&dir, "");

	let output = run(&[
		"run-prompt",
		"--prompt",
		"hi",
		"--config",
		config.to_str().unwrap(),
	]);
	assert!(!output.status.success());
	assert!(stderr(&output).contains("no services defined"));
}

#[test]
fn run_prompt_unknown_service_is_reported() {
	let dir = TempDir::new().unwrap();
	let config = write_config(&dir, TWO_SERVICES);

	let output = run(&[
		"run-prompt",
		"--service",
		"gamma",
		"--prompt",
		"hi",
		"--config",
		config.to_str().unwrap(),
	]);
	assert!(!output.status.success());
	assert!(stderr(&output).contains("service 'gamma' not found"));
}
