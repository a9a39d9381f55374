use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Terminal,
};
use std::io;
use crate::config::INPUT_POLL;
use crate::core::{count_uncovered_targets, Cell, Direction, Grid, Session};
use crate::feedback::{StatusLine, Tone};

pub struct GameRenderState<'a> {
    pub session: &'a Session,
    pub status: &'a StatusLine,
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn cell_style(cell: Cell) -> Style {
    match cell {
        Cell::Wall => Style::default().fg(Color::Magenta),
        Cell::Crate | Cell::CrateOnTarget | Cell::Target => Style::default().fg(Color::Yellow),
        _ => Style::default(),
    }
}

pub fn render_grid_to_text(grid: &Grid) -> Text<'static> {
    let lines: Vec<Line> = grid
        .rows()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|&c| Span::styled(c.symbol().to_string(), cell_style(c)))
                .collect();
            Line::from(spans)
        })
        .collect();
    Text::from(lines)
}

pub fn footer_text(state: &GameRenderState) -> String {
    let session = state.session;
    let instructions = "WASD or Arrow keys to move, R to restart, Q to quit";
    let progress = format!(
        "Moves: {} | Targets left: {}",
        session.move_count(),
        count_uncovered_targets(session.grid())
    );
    if state.status.message().is_empty() {
        format!("{} | {}", progress, instructions)
    } else {
        format!("{} | {} | {}", progress, state.status.message(), instructions)
    }
}

pub fn win_text(session: &Session) -> String {
    format!(
        "You win!! Completed in {} moves! You're kickin' rad!",
        session.move_count()
    )
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let title = state.session.level_name().unwrap_or("Sokoban Reborn");
        let game_paragraph = Paragraph::new(render_grid_to_text(state.session.grid()))
            .block(Block::default().borders(Borders::ALL).title(title))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let footer_color = match state.status.tone() {
            Tone::Neutral => Color::Cyan,
            Tone::Bump => Color::Red,
            Tone::Success => Color::Green,
        };
        let footer = Paragraph::new(footer_text(state))
            .block(Block::default().borders(Borders::ALL).title("Wrath of the Warehouse"))
            .style(Style::default().fg(footer_color))
            .alignment(Alignment::Center);
        f.render_widget(footer, chunks[1]);
    })?;
    Ok(())
}

pub fn render_win_screen(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &Session,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let text = format!("{}\n\nPress any key to quit.", win_text(session));
        let paragraph = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title("Warehouse cleared"))
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, f.area());
    })?;
    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ConsoleInput {
    Move(Direction),
    Restart,
    Quit,
    Timeout,
    Unknown,
}

pub fn input_from_key(code: KeyCode) -> ConsoleInput {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::Restart,
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => ConsoleInput::Move(Direction::Up),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => ConsoleInput::Move(Direction::Down),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => ConsoleInput::Move(Direction::Left),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => ConsoleInput::Move(Direction::Right),
        _ => ConsoleInput::Unknown,
    }
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(INPUT_POLL)? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(input_from_key(code));
        }
    }
    Ok(ConsoleInput::Timeout)
}
