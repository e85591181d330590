//! `resume`: structure a candidate form into a resume record from the command line.
//!
//! Reads a JSON form (`{"name": ..., "experience": ...}` or `{"form": {...}}`),
//! prints the resulting record as JSON on stdout. With `--enhance` the record is
//! rewritten through the proxy or a directly configured provider, falling back
//! to local structuring on any failure.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use resume_api::config::ClientConfig;
use resume_api::{generate_resume, CandidateForm, EnhancementClient, Enhancer, LocalOnly};

#[derive(Debug, Parser)]
#[command(name = "resume", version, about = "Build an ATS resume record from form JSON")]
struct Cli {
    /// Form JSON file, or `-` for stdin
    form: PathBuf,

    /// Rewrite the record with the AI provider
    #[arg(long)]
    enhance: bool,

    /// Enhancement proxy base URL
    #[arg(long, env = "SERVER_URL", default_value = "http://localhost:3000")]
    server_url: String,

    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    openai_api_key: Option<String>,

    #[arg(long, env = "OPENROUTER_API_KEY", hide_env_values = true)]
    openrouter_api_key: Option<String>,

    /// Completion model for direct provider calls
    #[arg(long, env = "OPENROUTER_MODEL")]
    model: Option<String>,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        ClientConfig {
            server_url: self.server_url.clone(),
            openai_api_key: self.openai_api_key.clone(),
            openrouter_api_key: self.openrouter_api_key.clone(),
            model: self.model.clone(),
            provider_url: None,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // stdout carries the record; logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("resume_api=warn")),
        )
        .init();

    let cli = Cli::parse();
    let form = load_form(&cli.form)?;

    let enhancer: Box<dyn Enhancer> = if cli.enhance {
        Box::new(EnhancementClient::new(&cli.client_config()))
    } else {
        Box::new(LocalOnly)
    };

    let record = generate_resume(&form, enhancer.as_ref()).await;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };
    println!("{output}");

    Ok(())
}

/// Reads a form from `path` (or stdin for `-`). Accepts either the bare form
/// object or the proxy request shape `{"form": {...}}`.
fn load_form(path: &Path) -> Result<CandidateForm> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read form from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read form file '{}'", path.display()))?
    };

    let value: Value = serde_json::from_str(&raw).context("Form is not valid JSON")?;
    let form = match value.get("form") {
        Some(inner) if inner.is_object() => inner,
        _ => &value,
    };
    Ok(CandidateForm::from_value(form))
}
