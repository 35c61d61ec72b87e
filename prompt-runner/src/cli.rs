//! CLI argument parsing for the prompt dispatcher

use clap::Parser;
use std::path::PathBuf;

/// Prompt Runner CLI Arguments
///
/// Every flag is optional; unset options fall back to the matching
/// environment variable, then to a built-in default (see `config`).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "prompt-runner",
    about = "Send .txt prompts from a directory to a local Ollama model and save the replies"
)]
pub struct Args {
    /// Model name hosted on Ollama (env: MODEL_NAME)
    #[arg(long)]
    pub model: Option<String>,

    /// Directory with .txt prompt files (env: INPUT_DIR)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Directory to save responses (env: OUTPUT_DIR)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Ollama host, e.g. http://localhost:11434 (env: OLLAMA_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Seconds to wait between requests (env: REQUEST_DELAY)
    #[arg(long)]
    pub delay: Option<f64>,
}
