//! CLI argument definitions.

use clap::Parser;

/// Top-level CLI parser for `goweight`.
#[derive(Debug, Parser)]
#[command(
    name = "goweight",
    version,
    about = "Break down the size contribution of every module in a Go build"
)]
pub struct Cli {
    /// Packages to build (passed through to `go build`).
    pub packages: Option<String>,

    /// Build tags.
    #[arg(short, long)]
    pub tags: Option<String>,

    /// Environment variables to pass to the build, as KEY=VALUE.
    #[arg(short, long = "env", value_name = "KEY=VALUE", value_parser = parse_env_var)]
    pub env: Vec<(String, String)>,

    /// Output JSON.
    #[arg(short, long)]
    pub json: bool,

    /// Turn on debug output, including the build environment.
    #[arg(long)]
    pub debug: bool,
}

fn parse_env_var(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got `{raw}`")),
    }
}
