// Command-line interface for md2ssml
//
// This binary converts authored content to SSML for speech synthesis. The heavy lifting is done
// by the ssml-babel crate; this crate only reads files, loads configuration and prints results.
//
// Converting:
//
// Markdown and HTML are both accepted, HTML being detected from the content itself. The output
// is the SSML fragment, or with --json the fragment together with the links and HTML previews
// of everything that was replaced while speaking.
//
// Usage:
//  md2ssml <input> [--json] [--output <file>]                  - Convert content (default)
//  md2ssml convert <input> [--json] [--output <file>]          - Same as above (explicit)
//  md2ssml podcast <episode.json> [--json] [--output <file>]   - Compose a podcast episode
//
// <input> may be "-" to read stdin.
//
// Configuration:
//
// Defaults are embedded (see ssml-config). An ssml.toml in the working directory is layered on
// top when present, then the file given with --config.

mod telemetry;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use ssml_babel::{compose_podcast, Converter, ConversionResult, PodcastContent, RandomMediaIds};
use ssml_config::{Loader, SsmlConfig};
use std::fs;
use std::io::{self, Read};
use tracing::debug;

const SUBCOMMANDS: &[&str] = &["convert", "podcast", "help"];

fn input_arg(help: &'static str) -> Arg {
    Arg::new("input")
        .help(help)
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn output_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("output")
            .long("output")
            .short('o')
            .help("Output file path (defaults to stdout)")
            .value_hint(ValueHint::FilePath),
    )
    .arg(
        Arg::new("json")
            .long("json")
            .help("Print the SSML together with links and previews as JSON")
            .action(ArgAction::SetTrue),
    )
}

fn build_cli() -> Command {
    Command::new("md2ssml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown and HTML to SSML")
        .long_about(
            "md2ssml turns Markdown or HTML into SSML for text-to-speech engines.\n\n\
            Commands:\n  \
            - convert: Convert a Markdown or HTML document (default command)\n  \
            - podcast: Compose a full podcast episode from a JSON description\n\n\
            Examples:\n  \
            md2ssml post.md                      # SSML to stdout\n  \
            md2ssml post.html --json             # SSML plus links and previews\n  \
            md2ssml podcast episode.json -o ep.ssml",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an ssml.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug events to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(output_args(
            Command::new("convert")
                .about("Convert Markdown or HTML to SSML (default command)")
                .long_about(
                    "Convert a Markdown or HTML document to an SSML fragment.\n\n\
                    HTML is detected from the content and normalized to Markdown first.\n\
                    Links and images are spoken as labels; use --json to also get the\n\
                    list of links and the HTML previews of what was replaced.\n\n\
                    Empty input produces no output.",
                )
                .arg(input_arg("Markdown or HTML file, or - for stdin")),
        ))
        .subcommand(output_args(
            Command::new("podcast")
                .about("Compose a podcast episode")
                .long_about(
                    "Compose a full <speak> document from an episode description.\n\n\
                    The JSON input has the fields title, descMdOrHtmlOrText, publishDate\n\
                    (RFC 3339) and an optional channel {title, description, endingMd}.\n\
                    Background tracks and the spoken date format come from configuration.",
                )
                .arg(input_arg("Episode JSON file, or - for stdin")),
        ))
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // First, try normal parsing. If no subcommand is given but a path is, inject "convert"
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => match with_default_command(&args) {
            Some(new_args) => match cli.try_get_matches_from(&new_args) {
                Ok(m) => m,
                Err(e2) => e2.exit(),
            },
            None => e.exit(),
        },
    };

    telemetry::init(matches.get_flag("verbose"));

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => handle_convert_command(sub_matches, &config),
        Some(("podcast", sub_matches)) => handle_podcast_command(sub_matches, &config),
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Insert "convert" after the program name when the first positional argument is not a
/// subcommand. Global flags may come before the path.
fn with_default_command(args: &[String]) -> Option<Vec<String>> {
    let first_positional = first_positional(args)?;
    if SUBCOMMANDS.contains(&first_positional) {
        return None;
    }
    let mut new_args = vec![args.first()?.clone(), "convert".to_string()];
    new_args.extend_from_slice(&args[1..]);
    Some(new_args)
}

fn first_positional(args: &[String]) -> Option<&str> {
    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        if arg == "--config" {
            // skip its value
            rest.next();
        } else if arg == "-" || !arg.starts_with('-') {
            return Some(arg.as_str());
        }
    }
    None
}

/// Handle the convert command
fn handle_convert_command(matches: &ArgMatches, config: &SsmlConfig) {
    let input = required(matches, "input");
    let source = read_input(input);

    let converter = Converter::with_phrases(config.phrases());
    let result = converter.convert(Some(&source)).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    match result {
        Some(result) => write_result(&result, matches),
        None => debug!(input, "empty input, nothing to convert"),
    }
}

/// Handle the podcast command
fn handle_podcast_command(matches: &ArgMatches, config: &SsmlConfig) {
    let input = required(matches, "input");
    let source = read_input(input);

    let content: PodcastContent = serde_json::from_str(&source).unwrap_or_else(|e| {
        eprintln!("Error: invalid episode '{input}': {e}");
        std::process::exit(1);
    });

    let options = config.podcast_options();
    let result = compose_podcast(&content, &options, &mut RandomMediaIds).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    write_result(&result, matches);
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(|s| s.as_str())
        .unwrap_or_else(|| {
            eprintln!("Error: missing <{name}>");
            std::process::exit(1);
        })
}

fn read_input(input: &str) -> String {
    if input == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source).unwrap_or_else(|e| {
            eprintln!("Error reading stdin: {e}");
            std::process::exit(1);
        });
        source
    } else {
        fs::read_to_string(input).unwrap_or_else(|e| {
            eprintln!("Error reading file '{input}': {e}");
            std::process::exit(1);
        })
    }
}

fn write_result(result: &ConversionResult, matches: &ArgMatches) {
    let rendered = if matches.get_flag("json") {
        serde_json::to_string_pretty(result).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        })
    } else {
        result.ssml.clone()
    };

    match matches.get_one::<String>("output") {
        Some(path) => {
            fs::write(path, rendered).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => println!("{rendered}"),
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> SsmlConfig {
    let loader = Loader::new().with_optional_file("ssml.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}
