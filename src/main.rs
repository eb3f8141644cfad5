use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use bridging_course::{Calculator, Lesson, OnInvalidInput, TokenReader};
use clap::{Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[clap(name = "bridging", version, about = "Bridging course exercises")]
struct Cli {
    #[clap(subcommand)]
    command: Option<Commands>,

    #[clap(long, short, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add or subtract two numbers from a menu (default command)
    Calculator {
        #[clap(long, value_enum, default_value_t = OnInvalidInput::Fail)]
        on_invalid_input: OnInvalidInput,
    },
    /// Run one of the day-by-day lessons
    Lesson {
        #[clap(value_enum)]
        name: Lesson,
    },
    /// List the available lessons
    List,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .init();

    match run(cli.command.unwrap_or(Commands::Calculator {
        on_invalid_input: OnInvalidInput::Fail,
    })) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    match command {
        Commands::Calculator { on_invalid_input } => {
            Calculator::new(TokenReader::new(stdin.lock()), stdout.lock())
                .on_invalid_input(on_invalid_input)
                .run()
                .context("calculator stopped")?;
        }
        Commands::Lesson { name } => {
            let mut input = TokenReader::new(stdin.lock());
            name.run(&mut input, &mut stdout.lock())
                .with_context(|| format!("lesson {} failed", name.name()))?;
        }
        Commands::List => {
            let mut out = stdout.lock();
            for lesson in Lesson::ALL {
                writeln!(out, "{:<18}{}", lesson.name(), lesson.description())?;
            }
        }
    }
    Ok(())
}
