// Terminal Sokoban with ratatui
// Controls: W/A/S/D or arrow keys (immediate response). R to restart, Q to quit.
// Tiles: '#' wall, '@' mover, 'o' crate, '.' target, '*' crate on target, '+' mover on target, ' ' floor.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use clap::Parser;
use log::info;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use sokoban_reborn::config::Cli;
use sokoban_reborn::console_interface::ConsoleInput::*;
use sokoban_reborn::console_interface::{
    cleanup_terminal, handle_input, render_game, render_win_screen, setup_terminal, win_text,
    GameRenderState,
};
use sokoban_reborn::core::Session;
use sokoban_reborn::error::AppError;
use sokoban_reborn::feedback::{EventLog, FeedbackTable, StatusLine};
use sokoban_reborn::summary::SessionSummary;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let (name, text) = cli.level_source().read()?;
    let mut session = Session::load_named(name, &text)?;
    info!("starting level {:?}", session.level_name());

    if cli.print {
        println!("{}", session.grid().to_level_string());
        return Ok(());
    }

    let mut terminal = setup_terminal()?;
    let result = run_interactive(&mut session, &mut terminal);
    cleanup_terminal()?;
    result?;

    if session.is_won() {
        println!("{}", win_text(&session));
    }
    if let Some(path) = &cli.summary_out {
        SessionSummary::from_session(&session).write_to(path)?;
        println!("Session summary written to {}", path.display());
    }

    Ok(())
}

fn init_logging(cli: &Cli) -> Result<(), AppError> {
    let log_file = std::fs::File::create(&cli.log_file)?;
    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .try_init()
        .map_err(|err| AppError::Logger(err.to_string()))
}

fn run_interactive(
    session: &mut Session,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let status = Rc::new(RefCell::new(StatusLine::default()));
    let mut feedback = FeedbackTable::new()
        .with(status.clone())
        .with(EventLog);

    render_game(terminal, &GameRenderState { session: &*session, status: &status.borrow() })?;

    loop {
        match handle_input()? {
            Quit => break,
            Restart => {
                session.restart();
                status.borrow_mut().clear();
            }
            Move(direction) => {
                let event = session.submit_move(direction)?;
                feedback.dispatch(&event, session);
            }
            Timeout | Unknown => continue,
        }

        if session.is_won() {
            render_win_screen(terminal, session)?;
            // Keep showing the win screen until user inputs
            loop {
                match handle_input()? {
                    Timeout => {}
                    _ => break,
                }
            }
            break;
        }

        render_game(terminal, &GameRenderState { session: &*session, status: &status.borrow() })?;
    }

    Ok(())
}
