use std::{
    io::Write,
    path::{Path, PathBuf},
};

use clap::{Args, Parser, Subcommand};
use kirascript::{build_catalog, text, Executor, MatchPolicy};

#[derive(Debug, Parser)]
#[command(about = "KiraScript interpreter")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn command(&self) -> &Command {
        self.command.as_ref().unwrap_or(&Command::Repl)
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the execution trace of a script
    Run(RunArgs),
    /// Print the symbol table of a script
    Symbols(FileArgs),
    /// Report whether a script contains some text
    Find(FindArgs),
    /// Replace every occurrence of some text in a script
    Replace(ReplaceArgs),
    /// Print the demonstration program
    Sample,
    /// Run lines read from stdin until EOF
    Repl,
}

#[derive(Debug, Args)]
struct FileArgs {
    /// Script path, `-` for stdin
    file: PathBuf,
}

#[derive(Debug, Args)]
struct RunArgs {
    #[command(flatten)]
    source: FileArgs,
    /// Only match keywords followed by whitespace or the end of the line
    #[arg(long)]
    whole_word: bool,
    /// Also print the declared variables
    #[arg(long)]
    variables: bool,
}

#[derive(Debug, Args)]
struct FindArgs {
    #[command(flatten)]
    source: FileArgs,
    needle: String,
}

#[derive(Debug, Args)]
struct ReplaceArgs {
    #[command(flatten)]
    source: FileArgs,
    needle: String,
    replacement: String,
    /// Save the result back to the file instead of printing it
    #[arg(long)]
    in_place: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot save in place when reading from stdin")]
    InPlaceStdin,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn main() {
    let args = Cli::parse();

    // `Ok(false)` is a command that ran but reports failure through its exit code.
    let result = match args.command() {
        Command::Run(args) => run_command(args).map(|()| true),
        Command::Symbols(args) => symbols_command(args).map(|()| true),
        Command::Find(args) => find_command(args),
        Command::Replace(args) => replace_command(args).map(|()| true),
        Command::Sample => {
            println!("{}", kirascript::sample::SAMPLE);
            Ok(true)
        }
        Command::Repl => repl_command().map(|()| true),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn read_source(args: &FileArgs) -> Result<String, CliError> {
    let read = if is_stdin(&args.file) {
        std::io::read_to_string(std::io::stdin())
    } else {
        std::fs::read_to_string(&args.file)
    };
    read.map_err(|source| CliError::Read {
        path: args.file.clone(),
        source,
    })
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn run_command(args: &RunArgs) -> Result<(), CliError> {
    let source = read_source(&args.source)?;
    let policy = if args.whole_word {
        MatchPolicy::WholeWord
    } else {
        MatchPolicy::Prefix
    };

    let execution = Executor::new(policy).execute(&source);
    for entry in &execution.trace {
        println!("{entry}");
    }

    if args.variables {
        println!();
        print!("{}", execution.variables);
    }

    Ok(())
}

fn symbols_command(args: &FileArgs) -> Result<(), CliError> {
    let source = read_source(args)?;

    println!("{:<10} {}", "Símbolo", "Descripción");
    for entry in build_catalog(&source) {
        println!("{entry}");
    }

    Ok(())
}

fn find_command(args: &FindArgs) -> Result<bool, CliError> {
    let source = read_source(&args.source)?;
    let found = text::search(&source, &args.needle);
    if found {
        println!("Texto encontrado.");
    } else {
        println!("Texto no encontrado.");
    }
    Ok(found)
}

fn replace_command(args: &ReplaceArgs) -> Result<(), CliError> {
    let source = read_source(&args.source)?;
    let replaced = text::replace(&source, &args.needle, &args.replacement);

    if !args.in_place {
        print!("{replaced}");
        return Ok(());
    }

    if is_stdin(&args.source.file) {
        return Err(CliError::InPlaceStdin);
    }

    std::fs::write(&args.source.file, replaced).map_err(|source| CliError::Write {
        path: args.source.file.clone(),
        source,
    })
}

fn repl_command() -> Result<(), CliError> {
    println!("Welcome to the KiraScript REPL!");
    println!("EOF to exit. (Ctrl+D on *nix, Ctrl+Z on Windows)");

    let executor = Executor::default();
    let mut input = String::new();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let read = std::io::stdin().read_line(&mut input)?;
        if read == 0 {
            break;
        }

        for entry in executor.execute(input.trim()).trace {
            println!("{entry}");
        }

        input.clear();
    }

    Ok(())
}
