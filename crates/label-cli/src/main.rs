//! label-router: tag meeting-transcript passages from the command line.
//!
//! Passages come from positional arguments, from `--input` (one passage per
//! line), or from stdin when neither is given. One passage prints a single
//! `TagResponse`; several print a JSON array in input order.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use label_core::{LabelRouterConfig, TagRequest};
use label_fusion::FusionEngine;
use label_observability::init_tracing;
use tracing::info;

/// Command-line arguments for label-router
#[derive(Parser, Debug)]
#[command(name = "label-router")]
#[command(about = "Tag construction-meeting passages with rule and similarity labels")]
#[command(version)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, env = "LABEL_ROUTER_CONFIG")]
    config: Option<PathBuf>,

    /// Skip the similarity classifier (no embedding provider is contacted)
    #[arg(long)]
    no_ml: bool,

    /// Skip the rule engine
    #[arg(long)]
    no_rules: bool,

    /// File with one passage per line
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Print the engine health report and exit
    #[arg(long)]
    health: bool,

    /// Override the configured log filter
    #[arg(long)]
    log_level: Option<String>,

    /// Passages to tag
    text: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;
    init_tracing(&config.observability);

    let engine = FusionEngine::from_config(&config).context("Failed to build fusion engine")?;
    info!(
        classifier = engine.has_classifier(),
        provider = engine.active_provider().unwrap_or("none"),
        "fusion engine ready"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.health {
        serde_json::to_writer_pretty(&mut out, &engine.health())?;
        writeln!(out)?;
        return Ok(());
    }

    let passages = collect_passages(&args)?;
    let enable_ml = !args.no_ml;
    let enable_rules = !args.no_rules;

    match passages.as_slice() {
        [] => bail!("no passages to tag"),
        [single] => {
            let request = TagRequest::new(single.as_str())
                .with_ml(enable_ml)
                .with_rules(enable_rules);
            serde_json::to_writer_pretty(&mut out, &engine.tag(&request))?;
        }
        many => {
            let responses = engine.batch_tag(many, enable_ml, enable_rules);
            serde_json::to_writer_pretty(&mut out, &responses)?;
        }
    }
    writeln!(out)?;
    Ok(())
}

fn load_config(args: &Args) -> Result<LabelRouterConfig> {
    let mut config = match &args.config {
        Some(path) => LabelRouterConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => LabelRouterConfig::default(),
    };
    if args.no_ml {
        config.fusion.enable_ml = false;
    }
    if let Some(level) = &args.log_level {
        config.observability.log_level = level.clone();
    }
    Ok(config)
}

fn collect_passages(args: &Args) -> Result<Vec<String>> {
    let mut passages: Vec<String> = args.text.clone();
    if let Some(path) = &args.input {
        passages.extend(read_passages(path)?);
    } else if passages.is_empty() {
        passages.extend(non_empty_lines(io::stdin().lock())?);
    }
    Ok(passages)
}

fn read_passages(path: &Path) -> Result<Vec<String>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open input {}", path.display()))?;
    non_empty_lines(io::BufReader::new(file))
        .with_context(|| format!("Failed to read input {}", path.display()))
}

fn non_empty_lines(reader: impl BufRead) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags_and_passages() {
        let args = Args::try_parse_from([
            "label-router",
            "--no-ml",
            "--log-level",
            "debug",
            "至急確認してください",
            "参考までに",
        ])
        .unwrap();
        assert!(args.no_ml);
        assert!(!args.no_rules);
        assert_eq!(args.text.len(), 2);

        let config = load_config(&args).unwrap();
        assert!(!config.fusion.enable_ml);
        assert_eq!(config.observability.log_level, "debug");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let input = "基礎工事は確定した。\n\n   \n  課題が残る  \n";
        let lines = non_empty_lines(input.as_bytes()).unwrap();
        assert_eq!(lines, vec!["基礎工事は確定した。", "  課題が残る  "]);
    }

    #[test]
    fn file_lines_are_tagged_as_given() {
        // Offsets of extracted tags must not depend on how the passage arrived.
        let line = "  3月15日に着工";
        let from_file = non_empty_lines(format!("{line}\n").as_bytes()).unwrap();
        let args = Args::try_parse_from(["label-router", line]).unwrap();
        assert_eq!(from_file, args.text);
    }

    #[test]
    fn missing_config_file_is_reported() {
        let args =
            Args::try_parse_from(["label-router", "--config", "/nonexistent/label.toml", "x"])
                .unwrap();
        let err = load_config(&args).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/label.toml"));
    }

    #[test]
    fn positional_text_comes_before_file_lines() {
        let dir = std::env::temp_dir().join(format!("label-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("passages.txt");
        std::fs::write(&path, "二行目\n三行目\n").unwrap();

        let argv: Vec<std::ffi::OsString> = vec![
            "label-router".into(),
            "--input".into(),
            path.clone().into_os_string(),
            "一行目".into(),
        ];
        let args = Args::try_parse_from(argv).unwrap();
        let passages = collect_passages(&args).unwrap();
        assert_eq!(passages, vec!["一行目", "二行目", "三行目"]);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
