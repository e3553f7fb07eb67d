// brainfpp: BrainF++ interpreter

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as CliParser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info, Level};

use brainfpp::ui::App;
use brainfpp::{execute as run_program, Config, Snapshot};

#[derive(CliParser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Program to run
    file: PathBuf,

    /// Text consumed by `,`
    #[arg(short, long, conflicts_with = "stdin")]
    input: Option<String>,

    /// Read the program input from standard input
    #[arg(long)]
    stdin: bool,

    /// Addressable cells (1-99)
    #[arg(long, default_value_t = brainfpp::interpreter::constants::DEFAULT_LIMIT)]
    limit: usize,

    /// Size of the global region (0-99)
    #[arg(long, default_value_t = brainfpp::interpreter::constants::DEFAULT_GLOBAL)]
    global: usize,

    /// Commands allowed before the run is aborted
    #[arg(long, default_value_t = brainfpp::interpreter::constants::MAX_STEPS)]
    max_steps: u64,

    /// Show the finished run in a terminal viewer
    #[arg(long)]
    tui: bool,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn show_viewer(snapshot: Snapshot, source: String) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(snapshot, source);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match Config::new(cli.limit, cli.global)
        .and_then(|config| config.with_max_steps(cli.max_steps))
    {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let source = match fs::read_to_string(&cli.file) {
        Ok(source) => source,
        Err(e) => {
            error!("cannot read '{}': {}", cli.file.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let input = if cli.stdin {
        let mut buffer = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buffer) {
            error!("cannot read standard input: {}", e);
            return ExitCode::FAILURE;
        }
        buffer
    } else {
        cli.input.unwrap_or_default()
    };

    info!(file = %cli.file.display(), "running");
    let snapshot = match run_program(&source, &input, &config) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("{}: parse error at {}", cli.file.display(), e.location);
            print!("ERROR: {}", e);
            let _ = io::stdout().flush();
            return ExitCode::FAILURE;
        }
    };

    let code = match snapshot.error() {
        None => ExitCode::SUCCESS,
        Some(err) => {
            error!("runtime error: {}", err);
            ExitCode::from(2)
        }
    };

    if cli.tui {
        if let Err(e) = show_viewer(snapshot, source) {
            error!("viewer failed: {}", e);
            return ExitCode::FAILURE;
        }
    } else {
        print!("{}", snapshot.render());
        let _ = io::stdout().flush();
    }

    code
}
