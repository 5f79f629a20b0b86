use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of build_cli() in src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
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

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("md2ssml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown and HTML to SSML")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(output_args(
            Command::new("convert").arg(input_arg("Markdown or HTML file, or - for stdin")),
        ))
        .subcommand(output_args(
            Command::new("podcast").arg(input_arg("Episode JSON file, or - for stdin")),
        ));

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "md2ssml", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "md2ssml", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "md2ssml", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
