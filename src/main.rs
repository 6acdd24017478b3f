use clap::{Parser, Subcommand};
use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use loxc::config::Config;
use loxc::error::{Diagnostics, FrontendError};
use loxc::scanner::Scanner;

#[derive(Parser)]
#[command(author, version, about = "Lox front end: scans source into a token stream")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize a Lox source file and echo the token stream
    Tokenize {
        /// Path to the .lox script
        script: PathBuf,
    },
    /// Start an interactive prompt; each line is tokenized and echoed
    Repl,
    /// Manage loxc configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Write a default configuration file
    Init,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::load();

    match run_command(cli.command, &config) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run_command(command: Commands, config: &Config) -> Result<ExitCode, Box<dyn Error>> {
    match command {
        Commands::Tokenize { script } => {
            let had_error = tokenize_file(&script)?;
            // Sysexits data-error code, so build tooling can tell a bad
            // script from a broken invocation.
            if had_error {
                Ok(ExitCode::from(65))
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
        Commands::Repl => {
            run_repl(config)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Config { command } => {
            run_config_command(command, config)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Scans the file at `path`, echoing tokens and diagnostics. Returns whether
/// any lexical error was reported.
fn tokenize_file(path: &Path) -> Result<bool, FrontendError> {
    if !path.exists() {
        return Err(FrontendError::FileNotFound(path.to_path_buf()));
    }
    let source = fs::read_to_string(path).map_err(FrontendError::Io)?;

    let mut diags = Diagnostics::new();
    run(&source, &mut diags);
    Ok(diags.had_error())
}

fn run_repl(config: &Config) -> io::Result<()> {
    // One collector for the whole session; cleared per line unless the
    // configuration asks for the latching behavior.
    let mut diags = Diagnostics::new();
    let stdin = io::stdin();

    loop {
        print!("{}", config.prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            // EOF ends the session.
            break;
        }

        if !config.persist_errors {
            diags.clear();
        }
        run(&line, &mut diags);
    }

    Ok(())
}

/// Scans one unit of source, printing each token to stdout and draining the
/// collector's reports to stderr.
fn run(source: &str, diags: &mut Diagnostics) {
    // When the collector latches across prompt iterations, only the reports
    // this scan added are new.
    let already_reported = diags.reports().len();
    let mut scanner = Scanner::new(source);
    let tokens = scanner.scan_tokens(diags);

    for report in &diags.reports()[already_reported..] {
        eprintln!("{}", report);
    }
    for token in &tokens {
        println!("{}", token);
    }
}

fn run_config_command(command: ConfigCommands, config: &Config) -> Result<(), Box<dyn Error>> {
    match command {
        ConfigCommands::Show => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        ConfigCommands::Init => {
            let config_path = Config::config_path();
            if config_path.exists() {
                println!("Configuration already exists at: {}", config_path.display());
            } else {
                Config::default().save()?;
                println!("Initialized configuration at: {}", config_path.display());
            }
        }
    }
    Ok(())
}
