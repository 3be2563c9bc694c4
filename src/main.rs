// TyC front end: command-line harness over the lexer and parser

use std::fs;
use std::path::PathBuf;

use clap::Parser as ArgParser;

use tyc::parser::{parse_outcome, tokenize_outcome};

#[derive(Debug, ArgParser)]
#[clap(version, about = "TyC front end: tokenizer and recursive-descent parser")]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Parse a source file and print `success` or the first error
    Parse {
        /// TyC source file
        file: PathBuf,
    },
    /// Print the token stream of a source file as KIND,LEXEME pairs
    Tokens {
        /// TyC source file
        file: PathBuf,
    },
}

fn read_source(path: &PathBuf) -> String {
    match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Error: cannot read '{}': {}", path.display(), err);
            std::process::exit(2);
        }
    }
}

fn main() {
    let args = Args::parse();

    match args.command {
        Command::Parse { file } => {
            let source = read_source(&file);
            let outcome = parse_outcome(&source);
            println!("{}", outcome);
            if outcome != "success" {
                std::process::exit(1);
            }
        }
        Command::Tokens { file } => {
            let source = read_source(&file);
            let outcome = tokenize_outcome(&source);
            println!("{}", outcome);
            if outcome.starts_with("lexererr.") {
                std::process::exit(1);
            }
        }
    }
}
