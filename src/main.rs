//! codeblock - highlight and run fenced code blocks from the terminal

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use crossterm::style::Stylize;
use tracing_subscriber::EnvFilter;

use codeblock::exec::{self, LogEntry, LogLevel};
use codeblock::syntax::{custom, registry, render_ansi, tokenize, Registry};
use codeblock::{fence, Config, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Html,
    Ansi,
    Run,
    Languages,
}

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut mode = Mode::Html;
    let mut path: Option<String> = None;

    for arg in &args {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                print_version();
                return Ok(());
            }
            "--html" => mode = Mode::Html,
            "--ansi" => mode = Mode::Ansi,
            "--run" => mode = Mode::Run,
            "--languages" => mode = Mode::Languages,
            "-" => path = None,
            other if other.starts_with('-') => {
                eprintln!("Unknown option: {}", other);
                print_usage();
                process::exit(2);
            }
            other => path = Some(other.to_string()),
        }
    }

    let config = Config::load();
    install_languages(&config)?;

    if mode == Mode::Languages {
        print_languages(registry::global());
        return Ok(());
    }

    let raw = read_input(path.as_deref())?;
    let block = fence::parse(&raw);
    if !fence::should_use(&raw) {
        tracing::debug!("input is not fenced, treating it as plain text");
    }

    match mode {
        Mode::Html => println!("{}", codeblock::highlight(&block.body, &block.alias)),
        Mode::Ansi => match registry::resolve(&block.alias) {
            Some(lang) => println!("{}", render_ansi(&tokenize(&block.body, lang))),
            None => println!("{}", block.body),
        },
        Mode::Run => {
            for entry in exec::execute(&block.body, &block.alias) {
                print_entry(&entry);
            }
        }
        Mode::Languages => {}
    }

    Ok(())
}

/// Merge the configured custom languages into the global registry
fn install_languages(config: &Config) -> Result<()> {
    let Some(path) = &config.languages_file else {
        return Ok(());
    };
    let extra = custom::load_file(path)?;
    tracing::debug!(path = %path.display(), count = extra.len(), "loaded custom languages");
    registry::install(Registry::builtin_with(extra)?)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn print_entry(entry: &LogEntry) {
    let text = entry.to_string();
    match entry.level {
        LogLevel::Log => println!("{}", text),
        LogLevel::Info => println!("{}", text.cyan()),
        LogLevel::Warn => println!("{}", text.yellow()),
        LogLevel::Error => println!("{}", text.red()),
    }
}

fn print_languages(registry: &Registry) {
    for lang in registry.languages() {
        let marker = if lang.runnable { " (runnable)" } else { "" };
        println!("{:<12} {}{}", lang.name, lang.aliases.join(", "), marker);
    }
}

fn print_usage() {
    println!("codeblock {} - highlight and run fenced code blocks", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: codeblock [OPTIONS] [FILE]");
    println!();
    println!("Reads a fenced block (```lang ... ```) from FILE, or stdin when FILE");
    println!("is absent or -.");
    println!();
    println!("Options:");
    println!("  --html         Print highlighted markup (default)");
    println!("  --ansi         Print with terminal colours");
    println!("  --run          Execute the block and print its console output");
    println!("  --languages    List supported languages and aliases");
    println!("  -h, --help     Show this help message");
    println!("  -V, --version  Show version information");
    println!();
    println!("Settings are read from ~/.codeblock.conf; RUST_LOG controls logging.");
}

fn print_version() {
    println!("codeblock {}", env!("CARGO_PKG_VERSION"));
}
