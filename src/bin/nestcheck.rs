//! Command-line interface for nestcheck
//! This binary validates comment-delimiter nesting in files, stdin text, or
//! the built-in sample inputs.
//!
//! Usage:
//!   nestcheck file `<path>` [--format `<format>`]  - Validate a file
//!   nestcheck text [--format `<format>`]           - Validate text read from stdin
//!   nestcheck samples [--format `<format>`]        - Run the built-in sample inputs
//!   nestcheck list-formats                        - List available report formats

use clap::{Arg, Command};
use nestcheck::nestcheck::formats::default_registry;
use nestcheck::nestcheck::processor::{self, samples};

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .help("Report format (e.g., 'simple', 'json')")
        .default_value("simple")
}

fn main() {
    let matches = Command::new("nestcheck")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A nesting validator for comment delimiters")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("file")
                .about("Validate a file")
                .arg(
                    Arg::new("path")
                        .help("Path to the file to validate")
                        .required(true)
                        .index(1),
                )
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("text")
                .about("Validate text read from stdin")
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("samples")
                .about("Run the built-in sample inputs")
                .arg(format_arg()),
        )
        .subcommand(Command::new("list-formats").about("List available report formats"))
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("file", file_matches)) => {
            let path = file_matches.get_one::<String>("path").unwrap();
            let format = file_matches.get_one::<String>("format").unwrap();
            handle_file_command(path, format);
        }
        Some(("text", text_matches)) => {
            let format = text_matches.get_one::<String>("format").unwrap();
            handle_text_command(format);
        }
        Some(("samples", samples_matches)) => {
            let format = samples_matches.get_one::<String>("format").unwrap();
            handle_samples_command(format);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

/// Handle the file command
fn handle_file_command(path: &str, format: &str) {
    match processor::process_file(path, format) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the text command
fn handle_text_command(format: &str) {
    let source = std::io::read_to_string(std::io::stdin()).unwrap_or_else(|e| {
        eprintln!("Error reading stdin: {}", e);
        std::process::exit(1);
    });

    match processor::process_source(&source, format) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the samples command
fn handle_samples_command(format: &str) {
    for (name, source) in samples::all() {
        println!("=== SAMPLE: {} ===", name);
        match processor::process_source(source, format) {
            Ok(output) => println!("{}", output),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available report formats:\n");
    let registry = default_registry();
    for name in registry.list_formats() {
        match registry.get(&name) {
            Some(formatter) => println!("  {}\n    {}", name, formatter.description()),
            None => println!("  {}", name),
        }
    }
}
