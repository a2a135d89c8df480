//! Command-line interface for spriter
//! Combines the background images of a stylesheet into a sprite and writes the rewritten stylesheet.
//!
//! Usage:
//!   spriter `<stylesheet>` [--config `<file>`] [--output `<file>`]      - Build the sprite, rewrite the stylesheet
//!   spriter `<stylesheet>` --format urls                             - List local background images
//!   spriter `<stylesheet>` --format tokens-json                      - Dump the token stream
//!   spriter `<stylesheet>` --format treeviz                          - Dump the parsed tree

use clap::{Arg, ArgAction, ArgMatches, Command};
use spriter::config::{Loader, SpriterConfig, PROJECT_FILE};
use spriter::css::formats::to_treeviz_str;
use spriter::css::lexing::tokenize;
use spriter::css::{extract_urls, parse};
use spriter::processor::{read_stylesheet, write_stylesheet, SpriteProcessor};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("spriter")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Combine stylesheet background images into a sprite")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the stylesheet")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults [default: spriter.toml next to the stylesheet, if present]"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write the rewritten stylesheet here instead of stdout"),
        )
        .arg(
            Arg::new("sprite-image")
                .long("sprite-image")
                .help("Sprite image path, relative to the stylesheet's directory"),
        )
        .arg(
            Arg::new("sprite-url")
                .long("sprite-url")
                .help("Text written into rewritten url(...) values"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("What to print")
                .value_parser(["css", "urls", "tokens-json", "treeviz"])
                .default_value("css"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log more (repeat for trace output)")
                .action(ArgAction::Count),
        )
        .get_matches();

    init_tracing(matches.get_count("verbose"));

    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");
    let format = matches
        .get_one::<String>("format")
        .expect("format has a default value");

    match format.as_str() {
        "urls" => handle_urls_command(path),
        "tokens-json" => handle_tokens_command(path),
        "treeviz" => handle_treeviz_command(path),
        _ => handle_css_command(path, load_config(&matches, path)),
    }
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn load_config(matches: &ArgMatches, stylesheet: &str) -> SpriterConfig {
    let mut loader = Loader::new();
    match matches.get_one::<String>("config") {
        Some(file) => loader = loader.with_file(file),
        None => {
            let project_file = Path::new(stylesheet)
                .parent()
                .unwrap_or_else(|| Path::new(""))
                .join(PROJECT_FILE);
            loader = loader.with_optional_file(project_file);
        }
    }

    for (flag, key) in [
        ("output", "output.path"),
        ("sprite-image", "sprite.image"),
        ("sprite-url", "sprite.url"),
    ] {
        if let Some(value) = matches.get_one::<String>(flag) {
            loader = loader
                .set_override(key, value.as_str())
                .unwrap_or_else(|e| fail(e));
        }
    }

    loader.build().unwrap_or_else(|e| fail(e))
}

fn read_source(path: &str) -> String {
    read_stylesheet(path).unwrap_or_else(|e| fail(e))
}

/// Handle the default command: build the sprite and emit the rewritten stylesheet
fn handle_css_command(path: &str, config: SpriterConfig) {
    let output = config.output.file().map(|file| file.to_path_buf());
    let processor = SpriteProcessor::new(config);
    let processed = processor.process_file(path).unwrap_or_else(|e| fail(e));

    match output {
        Some(file) => write_stylesheet(&file, &processed.stylesheet).unwrap_or_else(|e| fail(e)),
        None => print!("{}", processed.stylesheet),
    }

    if let Some(sprite) = processed.sprite {
        eprintln!(
            "Rewrote {} declaration(s) to use {}",
            processed.rewritten,
            sprite.display()
        );
    }
}

/// Handle the urls command
fn handle_urls_command(path: &str) {
    let source = read_source(path);
    let tree = parse(&source).unwrap_or_else(|e| fail(e));
    for url in extract_urls(&tree).unwrap_or_else(|e| fail(e)) {
        println!("{}", url);
    }
}

/// Handle the tokens-json command
fn handle_tokens_command(path: &str) {
    let source = read_source(path);
    let tokens = tokenize(&source);
    let json = serde_json::to_string_pretty(&tokens).unwrap_or_else(|e| fail(e));
    println!("{}", json);
}

/// Handle the treeviz command
fn handle_treeviz_command(path: &str) {
    let source = read_source(path);
    let tree = parse(&source).unwrap_or_else(|e| fail(e));
    print!("{}", to_treeviz_str(&tree));
}
