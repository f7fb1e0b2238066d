use anyhow::{Context, Result};
use boardnav::{
    config::ConfigValidator, get_default_home_dir, monitoring::LogSubscriber, Board,
    BoardnavConfig, FileKind, Session,
};
use clap::{Parser, Subcommand, ValueHint};
use env_logger::Env;
use log::LevelFilter;
use std::path::{Path, PathBuf};
#[derive(Parser, Debug)]
#[command(
    name = "board",
    author,
    version,
    about = "Board history navigation for directory browsing",
    long_about = r#"
Boardnav - Directory Boards with History

Every directory you open becomes a board: a snapshot of its path and the
files it held. Boards are kept in the order they were opened and one of
them is current; you can step back and forth through the history or jump
straight to any board.

EXAMPLES:
  board ls /var/log                      # Print one directory as a board
  board ls . --all --json                # Include dot-files, emit JSON
  board trail /etc /var /tmp --current 1 # Show history and neighbours of board 2
  board browse ~/src ~/docs              # Interactive board browser
  board settings show                    # Display current configuration

For more information on any command, use: board <command> --help
    "#
)]
struct Opt {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    #[arg(
        long,
        global = true,
        value_name = "DIR",
        value_hint = ValueHint::DirPath,
        help = "Configuration directory (default: ~/.boardnav)"
    )]
    home: Option<PathBuf>,
}
#[derive(Subcommand, Debug)]
enum Commands {
    Ls {
        #[arg(
            value_name = "PATH",
            value_hint = ValueHint::DirPath,
            default_value = ".",
            help = "Directory to list"
        )]
        path: PathBuf,
        #[arg(short, long, help = "Include hidden entries")]
        all: bool,
        #[arg(long, help = "Print the board as JSON")]
        json: bool,
    },
    Trail {
        #[arg(
            value_name = "PATH",
            num_args = 1..,
            value_hint = ValueHint::DirPath,
            help = "Directories to open, in history order"
        )]
        paths: Vec<PathBuf>,
        #[arg(
            short,
            long,
            value_name = "INDEX",
            help = "Zero-based board to make current (default: last opened)"
        )]
        current: Option<usize>,
    },
    Browse {
        #[arg(
            value_name = "PATH",
            value_hint = ValueHint::DirPath,
            help = "Directories to open before the browser starts"
        )]
        paths: Vec<PathBuf>,
    },
    Settings { #[command(subcommand)] action: SettingsCommand },
}
#[derive(Subcommand, Debug)]
enum SettingsCommand {
    Show,
    Listing {
        #[arg(long)]
        show_hidden: Option<bool>,
        #[arg(long)]
        dirs_first: Option<bool>,
        #[arg(long)]
        sort_by: Option<String>,
    },
    Browser {
        #[arg(long)]
        tick_rate_ms: Option<u64>,
        #[arg(long)]
        page_size: Option<usize>,
    },
    Init,
}
fn main() -> Result<()> {
    let opt = Opt::parse();
    let log_level = match opt.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_env(
            Env::default().default_filter_or(log_level.to_string()),
        )
        .init();
    let home = opt.home.unwrap_or_else(get_default_home_dir);
    match opt.command {
        Commands::Ls { path, all, json } => {
            handle_ls(&home, path, all, json)?;
        }
        Commands::Trail { paths, current } => {
            handle_trail(&home, paths, current)?;
        }
        Commands::Browse { paths } => {
            handle_browse(&home, paths)?;
        }
        Commands::Settings { action } => {
            handle_settings(&home, action)?;
        }
    }
    Ok(())
}
fn load_config(home: &Path) -> Result<BoardnavConfig> {
    let mut config = BoardnavConfig::load(home)?;
    let result = ConfigValidator::new().validate_and_fix_config(&mut config)?;
    for warning in &result.warnings {
        log::warn!("{}: {}", warning.field, warning.message);
    }
    for error in &result.errors {
        if result.fixed.contains(&error.field) {
            log::warn!("{}: {} (using default)", error.field, error.message);
        } else {
            log::warn!("{}: {}", error.field, error.message);
        }
    }
    Ok(config)
}
fn print_board(board: &Board) {
    println!("{}", board.pwd().display());
    println!("{}", "=".repeat(board.pwd().display().to_string().len().max(4)));
    for file in board.files() {
        match file.kind() {
            FileKind::Directory => println!("  {}/", file.name()),
            FileKind::Symlink => println!("  {} @", file.name()),
            FileKind::File => println!("  {:<40} {:>10} bytes", file.name(), file.size()),
        }
    }
    println!("{} entries", board.len());
}
fn handle_ls(home: &Path, path: PathBuf, all: bool, json: bool) -> Result<()> {
    let mut config = load_config(home)?;
    if all {
        config.listing.show_hidden = true;
    }
    let mut session = Session::new(config);
    session.open(&path).with_context(|| format!("cannot open {}", path.display()))?;
    let board = session.current()?;
    if json {
        println!("{}", serde_json::to_string_pretty(board) ?);
    } else {
        print_board(board);
    }
    Ok(())
}
fn handle_trail(home: &Path, paths: Vec<PathBuf>, current: Option<usize>) -> Result<()> {
    let mut session = Session::new(load_config(home)?);
    session.notifier_mut().subscribe(Box::new(LogSubscriber));
    for path in &paths {
        session.open(path).with_context(|| format!("cannot open {}", path.display()))?;
    }
    if let Some(index) = current {
        session.jump_to(index)?;
    }
    let manager = session.manager();
    println!("Board history:");
    println!("==============");
    for (i, board) in manager.boards().iter().enumerate() {
        let marker = if Some(i) == manager.current_index() { ">" } else { " " };
        println!("{} {}. {} ({} entries)", marker, i, board.pwd().display(), board.len());
    }
    println!("");
    match manager.prev_board() {
        Ok(board) => println!("Previous: {}", board.pwd().display()),
        Err(e) => println!("Previous: none ({})", e),
    }
    match manager.next_board() {
        Ok(board) => println!("Next:     {}", board.pwd().display()),
        Err(e) => println!("Next:     none ({})", e),
    }
    Ok(())
}
fn handle_browse(home: &Path, paths: Vec<PathBuf>) -> Result<()> {
    let mut session = Session::new(load_config(home)?);
    let paths = if paths.is_empty() {
        vec![std::env::current_dir().context("cannot determine current directory")?]
    } else {
        paths
    };
    for path in &paths {
        session.open(path).with_context(|| format!("cannot open {}", path.display()))?;
    }
    let mut tui = boardnav::tui::BoardTui::new(session)?;
    tui.run()?;
    tui.shutdown()?;
    Ok(())
}
fn handle_settings(home: &Path, action: SettingsCommand) -> Result<()> {
    let mut config = BoardnavConfig::load(home)?;
    match action {
        SettingsCommand::Show => {
            println!("Current settings:");
            println!("Home directory: {:?}", config.home_dir);
            println!("Listing:");
            println!("  Show hidden: {}", config.listing.show_hidden);
            println!("  Directories first: {}", config.listing.dirs_first);
            println!("  Sort by: {}", config.listing.sort_by);
            println!("Browser:");
            println!("  Tick rate: {} ms", config.browser.tick_rate_ms);
            println!("  Page size: {}", config.browser.page_size);
            let result = ConfigValidator::new().validate_config(&config);
            for error in &result.errors {
                println!("  ✗ {}: {}", error.field, error.message);
                if let Some(suggestion) = &error.suggestion {
                    println!("    {}", suggestion);
                }
            }
            for warning in &result.warnings {
                println!("  ! {}: {}", warning.field, warning.message);
            }
        }
        SettingsCommand::Listing { show_hidden, dirs_first, sort_by } => {
            if let Some(h) = show_hidden {
                config.listing.show_hidden = h;
            }
            if let Some(d) = dirs_first {
                config.listing.dirs_first = d;
            }
            if let Some(s) = sort_by {
                config.listing.sort_by = s;
            }
            save_validated(&config)?;
            println!("Listing settings updated");
        }
        SettingsCommand::Browser { tick_rate_ms, page_size } => {
            if let Some(t) = tick_rate_ms {
                config.browser.tick_rate_ms = t;
            }
            if let Some(p) = page_size {
                config.browser.page_size = p;
            }
            save_validated(&config)?;
            println!("Browser settings updated");
        }
        SettingsCommand::Init => {
            config.save()?;
            println!("Configuration written to {}", config.config_path().display());
        }
    }
    Ok(())
}
fn save_validated(config: &BoardnavConfig) -> Result<()> {
    let result = ConfigValidator::new().validate_config(config);
    if let Some(error) = result.errors.first() {
        anyhow::bail!("{}: {}", error.field, error.message);
    }
    config.save()
}
