use clap::Parser;
use prompt_runner::prompts::write_prompt_files;
use std::path::PathBuf;

/// Generate hypernym-elicitation prompt files from the adjective dataset CSV
#[derive(Parser, Debug)]
#[command(name = "generate-prompts")]
struct Args {
    /// CSV with hyponym/definition columns
    #[arg(long, default_value = "./data/adj_def_disambig.csv")]
    input_csv: PathBuf,

    /// Directory to write prompt .txt files
    #[arg(long, default_value = "prompts_directory")]
    output_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let written = write_prompt_files(&args.input_csv, &args.output_dir)?;
    println!(
        "Generated {} prompt files in {}",
        written,
        args.output_dir.display()
    );
    Ok(())
}
