// Inherit lint configuration from lib.rs for consistency
#![allow(clippy::missing_errors_doc, clippy::needless_pass_by_value)]

use std::path::Path;

use clap::Parser;

use resume_parse::cli::commands::{Cli, Command};
use resume_parse::cli::output;
use resume_parse::config::{Config, DuplicatePolicy, OutputFormat};
use resume_parse::pipeline::Pipeline;

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout carries only the result.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::fmt::Display>> {
    let config = get_config(cli.config.as_deref())?;
    match cli.command {
        Command::Parse {
            path,
            links,
            format,
            duplicates,
        } => cmd_parse(config, &path, links, format, duplicates),
        Command::Text { path, links } => cmd_text(config, &path, links),
    }
}

type CmdResult = Result<(), Box<dyn std::fmt::Display>>;

fn map_err(e: impl std::fmt::Display + 'static) -> Box<dyn std::fmt::Display> {
    Box::new(e.to_string())
}

fn get_config(path: Option<&str>) -> Result<Config, Box<dyn std::fmt::Display>> {
    match path {
        Some(p) => Ok(Config::new(p)),
        None => Config::from_cwd().map_err(map_err),
    }
}

fn cmd_parse(
    mut config: Config,
    path: &str,
    links: Option<String>,
    format: Option<OutputFormat>,
    duplicates: Option<DuplicatePolicy>,
) -> CmdResult {
    if links.is_some() {
        config.settings.links.map_file = links;
    }
    if let Some(policy) = duplicates {
        config.settings.parser.duplicates = policy;
    }
    let format = format.unwrap_or(config.settings.output.format);

    let pipeline = Pipeline::from_config(&config);
    let doc = pipeline.parse_file(Path::new(path)).map_err(map_err)?;
    let rendered = output::format_document(&doc, format).map_err(map_err)?;
    println!("{}", rendered.trim_end());
    Ok(())
}

fn cmd_text(mut config: Config, path: &str, links: Option<String>) -> CmdResult {
    if links.is_some() {
        config.settings.links.map_file = links;
    }
    let pipeline = Pipeline::from_config(&config);
    let text = pipeline.normalized_text(Path::new(path)).map_err(map_err)?;
    println!("{text}");
    Ok(())
}
