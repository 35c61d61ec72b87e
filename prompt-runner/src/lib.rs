// CLI argument parsing
pub mod cli;

// Run configuration (CLI > env > defaults)
pub mod config;

// Sequential prompt dispatch loop
pub mod dispatch;

// Ollama HTTP client
pub mod ollama;

// Prompt templating and generation
pub mod prompts;
