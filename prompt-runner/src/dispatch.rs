//! Sequential prompt dispatch: read .txt prompts, query the model, save replies

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;

use crate::config::Config;
use crate::ollama::OllamaClient;

/// Outcome counts for one batch run
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Prompt files found at scan time
    pub total: usize,
    /// Responses written to the output directory
    pub written: usize,
    /// Prompts that failed (service or I/O error); no output file is produced
    pub failed: usize,
    /// Empty prompt files skipped without a request
    pub skipped: usize,
}

enum Outcome {
    Written,
    EmptyPrompt,
}

/// Process every `.txt` file in the input directory, one at a time.
///
/// A missing input directory or an uncreatable output directory is fatal
/// before any prompt is processed. A failure on one prompt is logged and
/// the batch continues; the run as a whole still succeeds.
pub async fn run(config: &Config) -> Result<RunSummary> {
    if !config.input_dir.is_dir() {
        bail!(
            "Input directory {} does not exist or is not a directory",
            config.input_dir.display()
        );
    }
    fs::create_dir_all(&config.output_dir)
        .await
        .with_context(|| {
            format!(
                "Failed to create output directory {}",
                config.output_dir.display()
            )
        })?;

    let prompt_files = scan_prompt_files(&config.input_dir).await?;
    if prompt_files.is_empty() {
        println!("No .txt files found in {}", config.input_dir.display());
        return Ok(RunSummary::default());
    }

    let client = OllamaClient::new(&config.host);
    let total = prompt_files.len();
    let mut summary = RunSummary {
        total,
        ..Default::default()
    };

    println!("{}", "=".repeat(80));
    println!("Processing {} prompt files (model: {})", total, config.model);
    println!("{}", "=".repeat(80));

    for (i, path) in prompt_files.iter().enumerate() {
        let number = i + 1;
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        println!("[{}/{}] {}", number, total, name);

        match process_one(&client, &config.model, path, &config.output_dir).await {
            Ok(Outcome::Written) => {
                summary.written += 1;
                println!("  Response saved");
            }
            Ok(Outcome::EmptyPrompt) => {
                summary.skipped += 1;
                println!("  (empty prompt, skipping)");
            }
            Err(e) => {
                summary.failed += 1;
                eprintln!("  Error processing {}: {:#}", name, e);
            }
        }

        if config.delay > 0.0 && number < total {
            tokio::time::sleep(Duration::from_secs_f64(config.delay)).await;
        }
    }

    println!();
    println!(
        "Complete! {} of {} responses saved to {}",
        summary.written,
        summary.total,
        config.output_dir.display()
    );
    Ok(summary)
}

/// Read one prompt, query the model, and write the reply next to its name.
///
/// The output file reuses the input file name, so re-runs overwrite the
/// previous reply.
async fn process_one(
    client: &OllamaClient,
    model: &str,
    src: &Path,
    output_dir: &Path,
) -> Result<Outcome> {
    let prompt = fs::read_to_string(src)
        .await
        .with_context(|| format!("Failed to read {}", src.display()))?;
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Ok(Outcome::EmptyPrompt);
    }

    let completion = client.generate(model, prompt).await?;

    let dst = output_dir.join(src.file_name().unwrap_or_default());
    fs::write(&dst, completion)
        .await
        .with_context(|| format!("Failed to write {}", dst.display()))?;
    Ok(Outcome::Written)
}

/// Collect `*.txt` files from the input directory, sorted by name.
///
/// Enumeration order is not semantically significant; sorting just makes
/// progress output and logs stable across runs.
async fn scan_prompt_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)
        .await
        .with_context(|| format!("Failed to read input directory {}", dir.display()))?;

    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.is_file() && path.extension().map_or(false, |ext| ext == "txt") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
