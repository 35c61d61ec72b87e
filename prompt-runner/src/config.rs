//! Run configuration resolved from CLI flags, environment variables, and defaults

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::cli::Args;

pub const DEFAULT_MODEL: &str = "llama2";
pub const DEFAULT_INPUT_DIR: &str = "prompts_directory";
pub const DEFAULT_OUTPUT_DIR: &str = "output_directory";
pub const DEFAULT_HOST: &str = "http://localhost:11434";
pub const DEFAULT_DELAY: f64 = 1.0;

/// Resolved settings for one batch run
#[derive(Debug, Clone)]
pub struct Config {
    pub model: String,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub host: String,
    /// Pause between requests, in seconds. Zero disables the pause.
    pub delay: f64,
}

impl Config {
    /// Resolve each option as: CLI flag, else environment variable, else default.
    ///
    /// A `REQUEST_DELAY` value that does not parse as a float is a fatal
    /// setup error rather than a silent fallback.
    pub fn resolve(args: &Args) -> Result<Self> {
        Self::resolve_with(args, |name| std::env::var(name).ok())
    }

    fn resolve_with(args: &Args, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let delay = match (args.delay, env("REQUEST_DELAY")) {
            (Some(delay), _) => delay,
            (None, Some(raw)) => raw
                .parse()
                .with_context(|| format!("Invalid REQUEST_DELAY value: {:?}", raw))?,
            (None, None) => DEFAULT_DELAY,
        };

        Ok(Self {
            model: args
                .model
                .clone()
                .or_else(|| env("MODEL_NAME"))
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            input_dir: args
                .input_dir
                .clone()
                .or_else(|| env("INPUT_DIR").map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR)),
            output_dir: args
                .output_dir
                .clone()
                .or_else(|| env("OUTPUT_DIR").map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            host: args
                .host
                .clone()
                .or_else(|| env("OLLAMA_HOST"))
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            delay,
        })
    }
}
