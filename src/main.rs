//! ucmd - a tiny command dispatcher console.

mod cli;

use std::io::{self, IsTerminal, Write};

use cli::Cli;
use tracing::{error, info};
use ucmd::commands::{generate_help_text, Dispatcher, DEMO_COMMANDS};
use ucmd::config::Config;
use ucmd::console::{Console, ConsoleSummary};
use ucmd::error::Result;
use ucmd::logging;

/// Exit status when at least one line named an unknown command.
const EXIT_NOT_FOUND: i32 = 1;
/// Exit status for configuration or I/O failures.
const EXIT_FAILURE: i32 = 2;

fn main() {
    logging::init_stderr_logging();

    match run() {
        Ok(summary) if summary.all_found() => {}
        Ok(_) => std::process::exit(EXIT_NOT_FOUND),
        Err(e) => {
            error!("{}: {}", e.category(), e);
            std::process::exit(EXIT_FAILURE);
        }
    }
}

fn run() -> Result<ConsoleSummary> {
    let cli = Cli::parse_args();

    if cli.list {
        let mut stdout = io::stdout().lock();
        stdout.write_all(generate_help_text(DEMO_COMMANDS).as_bytes())?;
        stdout.flush()?;
        return Ok(ConsoleSummary::default());
    }

    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let config = Config::load_from_file(&config_path)?;
    let settings = config.resolve(&cli.overrides());

    let dispatcher = Dispatcher::new(DEMO_COMMANDS).with_delimiters(settings.delimiters);
    let console = Console::new(dispatcher)
        .with_prompt(settings.prompt)
        .with_show_results(settings.show_results);

    let mut stdout = io::stdout();

    if cli.has_exec() {
        return console.run_all(&cli.exec, &mut stdout);
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    console.run_lines(stdin.lock(), &mut stdout, interactive)
}
