//! snippet-highlight - print code snippets with syntax highlighting

use std::env;
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process;

use snippet_highlight::render;
use snippet_highlight::{logging, BlockState, Engine, Language, Result, Theme};

/// Options for a highlighting run
#[derive(Debug, Default, PartialEq)]
struct Options {
    language: Option<String>,
    theme: Option<PathBuf>,
    spans: bool,
    file: Option<PathBuf>,
}

#[derive(Debug, PartialEq)]
enum Command {
    Run(Options),
    Help,
    Version,
    List,
}

fn main() {
    logging::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            eprintln!("Try 'snippet-highlight --help' for more information.");
            process::exit(2);
        }
    };

    let result = match command {
        Command::Help => {
            print_usage();
            Ok(())
        }
        Command::Version => {
            println!("snippet-highlight {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::List => {
            for language in Language::ALL {
                println!("{}", language);
            }
            Ok(())
        }
        Command::Run(options) => run(options),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn parse_args(args: &[String]) -> std::result::Result<Command, String> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-V" => return Ok(Command::Version),
            "--list" => return Ok(Command::List),
            "--spans" | "-s" => options.spans = true,
            "--language" | "-l" => {
                let value = iter.next().ok_or("--language requires a value")?;
                options.language = Some(value.clone());
            }
            "--theme" | "-t" => {
                let value = iter.next().ok_or("--theme requires a value")?;
                options.theme = Some(PathBuf::from(value));
            }
            "-" => options.file = None,
            other if other.starts_with('-') => return Err(format!("unknown option '{}'", other)),
            other => {
                if options.file.is_some() {
                    return Err("only one input file may be given".to_string());
                }
                options.file = Some(PathBuf::from(other));
            }
        }
    }

    Ok(Command::Run(options))
}

fn run(options: Options) -> Result<()> {
    let contents = match &options.file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let engine = Engine::with_language(options.language.as_deref().unwrap_or("text"))?;
    let theme = match &options.theme {
        Some(path) => Theme::load_from(path)?,
        None => Theme::load()?,
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut state = BlockState::Normal;

    for (index, line) in contents.lines().enumerate() {
        let highlight = engine.highlight_block(line, state);
        if options.spans {
            render::write_span_dump(&mut out, index, line, &highlight)?;
        } else {
            render::write_block(&mut out, line, &highlight, &theme)?;
        }
        state = highlight.state;
    }

    out.flush()?;
    Ok(())
}

fn print_usage() {
    println!("snippet-highlight {} - syntax highlighting for code snippets", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: snippet-highlight [OPTIONS] [FILE]");
    println!();
    println!("Reads FILE (or standard input) and prints it highlighted.");
    println!();
    println!("Options:");
    println!("  -l, --language NAME  Language to highlight as (default: Text)");
    println!("  -t, --theme FILE     Theme file (default: ~/.snippet-highlight.toml)");
    println!("  -s, --spans          List classified spans instead of coloring");
    println!("      --list           List supported languages");
    println!("  -h, --help           Show this help message");
    println!("  -V, --version        Show version information");
    println!();
    println!("Set RUST_LOG=snippet_highlight=debug for diagnostics.");
}
