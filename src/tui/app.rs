use super::handlers::{action_for, BrowserAction, SelectionHandler};
use super::views::{BoardView, HelpView, HistoryView, LogsView};
use crate::Session;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use log::debug;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::Duration};
const MAX_LOG_LINES: usize = 200;
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewType {
    Board,
    Help,
}
#[derive(Debug, Clone)]
pub struct AppState {
    pub current_view: ViewType,
    pub logs: Vec<String>,
    pub running: bool,
}
/// Terminal-free part of the browser: applies actions to the session.
pub struct BrowserApp {
    session: Session,
    state: AppState,
    selection: SelectionHandler,
}
impl BrowserApp {
    pub fn new(session: Session) -> Self {
        let page_size = session.config().browser.page_size;
        let mut app = Self {
            session,
            state: AppState {
                current_view: ViewType::Board,
                logs: Vec::new(),
                running: true,
            },
            selection: SelectionHandler::new(page_size),
        };
        app.collect_notices();
        app
    }
    pub fn apply(&mut self, action: BrowserAction) {
        debug!("browser action {:?}", action);
        let file_count = self.session.current().map(|b| b.len()).unwrap_or(0);
        match action {
            BrowserAction::Quit => self.state.running = false,
            BrowserAction::Help => {
                self.state.current_view = match self.state.current_view {
                    ViewType::Help => ViewType::Board,
                    ViewType::Board => ViewType::Help,
                };
            }
            BrowserAction::SelectUp => self.selection.previous(),
            BrowserAction::SelectDown => self.selection.next(file_count),
            BrowserAction::PageUp => self.selection.page_up(file_count),
            BrowserAction::PageDown => self.selection.page_down(file_count),
            BrowserAction::Open => self.open_selected(),
            BrowserAction::Back => {
                if self.session.go_back().is_ok() {
                    self.selection.reset();
                }
            }
            BrowserAction::Forward => {
                if self.session.go_forward().is_ok() {
                    self.selection.reset();
                }
            }
            BrowserAction::Jump(index) => {
                if self.session.jump_to(index).is_ok() {
                    self.selection.reset();
                }
            }
            BrowserAction::Ignore => {}
        }
        self.session.pump();
        self.collect_notices();
    }
    fn open_selected(&mut self) {
        let target = match self.session.current() {
            Ok(board) => {
                match board.files().get(self.selection.current_index) {
                    Some(file) if file.is_dir() => Some(board.pwd().join(file.name())),
                    Some(file) => {
                        self.session
                            .notifier()
                            .info(format!("{} is not a directory", file.name()));
                        None
                    }
                    None => None,
                }
            }
            Err(_) => None,
        };
        if let Some(path) = target {
            if self.session.open(&path).is_ok() {
                self.selection.reset();
            }
        }
    }
    fn collect_notices(&mut self) {
        for notice in self.session.notifier().drain() {
            self.state.logs.push(format!("[{:?}] {}", notice.level, notice.message));
        }
        if self.state.logs.len() > MAX_LOG_LINES {
            let excess = self.state.logs.len() - MAX_LOG_LINES;
            self.state.logs.drain(0..excess);
        }
    }
    pub fn session(&self) -> &Session {
        &self.session
    }
    pub fn state(&self) -> &AppState {
        &self.state
    }
    pub fn selected(&self) -> usize {
        self.selection.current_index
    }
}
pub struct BoardTui {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: BrowserApp,
    tick_rate: Duration,
}
impl BoardTui {
    pub fn new(session: Session) -> Result<Self> {
        let tick_rate = Duration::from_millis(session.config().browser.tick_rate_ms.max(1));
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            app: BrowserApp::new(session),
            tick_rate,
        })
    }
    pub fn run(&mut self) -> Result<()> {
        while self.app.state.running {
            self.draw()?;
            self.handle_events()?;
        }
        Ok(())
    }
    fn draw(&mut self) -> Result<()> {
        let app = &self.app;
        self.terminal
            .draw(|f| {
                use ratatui::layout::{Constraint, Direction, Layout};
                let size = f.size();
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(3),
                        Constraint::Min(1),
                        Constraint::Length(6),
                        Constraint::Length(1),
                    ])
                    .split(size);
                let manager = app.session.manager();
                let position = match manager.current_index() {
                    Some(i) => format!("{}/{}", i + 1, manager.len()),
                    None => format!("-/{}", manager.len()),
                };
                let pwd = app
                    .session
                    .current()
                    .map(|b| b.pwd().display().to_string())
                    .unwrap_or_default();
                let header = ratatui::widgets::Paragraph::new(pwd)
                    .style(
                        ratatui::style::Style::default()
                            .fg(ratatui::style::Color::Cyan)
                            .add_modifier(ratatui::style::Modifier::BOLD),
                    )
                    .block(
                        ratatui::widgets::Block::default()
                            .borders(ratatui::widgets::Borders::ALL)
                            .title(format!("Board {}", position)),
                    );
                f.render_widget(header, chunks[0]);
                match app.state.current_view {
                    ViewType::Board => {
                        let body = Layout::default()
                            .direction(Direction::Horizontal)
                            .constraints([
                                Constraint::Percentage(70),
                                Constraint::Percentage(30),
                            ])
                            .split(chunks[1]);
                        BoardView
                            .render(f, body[0], app.session.current().ok(), app.selected());
                        HistoryView.render(f, body[1], manager);
                    }
                    ViewType::Help => HelpView.render(f, chunks[1]),
                }
                LogsView.render(f, chunks[2], &app.state.logs);
                let mut footer_text = String::from("↑↓ Select | Enter Open");
                if manager.has_prev() {
                    footer_text.push_str(" | ← Back");
                }
                if manager.has_next() {
                    footer_text.push_str(" | → Forward");
                }
                footer_text.push_str(" | h Help | q Quit");
                let footer = ratatui::widgets::Paragraph::new(footer_text)
                    .style(
                        ratatui::style::Style::default().fg(ratatui::style::Color::White),
                    );
                f.render_widget(footer, chunks[3]);
            })?;
        Ok(())
    }
    fn handle_events(&mut self) -> Result<()> {
        if event::poll(self.tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.app.apply(action_for(key.code));
                }
            }
        } else {
            self.app.apply(BrowserAction::Ignore);
        }
        Ok(())
    }
    pub fn shutdown(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}
impl Drop for BoardTui {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoardnavConfig;
    use std::fs;
    use tempfile::tempdir;
    fn app_with_tree() -> (tempfile::TempDir, BrowserApp) {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("docs")).unwrap();
        fs::create_dir(root.join("src")).unwrap();
        fs::write(root.join("src").join("main.rs"), "fn main() {}").unwrap();
        fs::write(root.join("notes.txt"), "n").unwrap();
        let config = BoardnavConfig {
            home_dir: root.join(".home"),
            ..BoardnavConfig::default()
        };
        let mut session = Session::new(config);
        session.open(root).unwrap();
        (temp_dir, BrowserApp::new(session))
    }
    #[test]
    fn test_open_back_forward() {
        let (_dir, mut app) = app_with_tree();
        app.apply(BrowserAction::SelectDown);
        assert_eq!(app.selected(), 1);
        app.apply(BrowserAction::Open);
        let manager = app.session().manager();
        assert_eq!(manager.len(), 2);
        assert_eq!(manager.current_index(), Some(1));
        assert_eq!(app.session().current().unwrap().label(), "src");
        assert_eq!(app.selected(), 0);
        app.apply(BrowserAction::Back);
        assert_eq!(app.session().manager().current_index(), Some(0));
        app.apply(BrowserAction::Forward);
        assert_eq!(app.session().manager().current_index(), Some(1));
        app.apply(BrowserAction::Forward);
        assert_eq!(app.session().manager().current_index(), Some(1));
        assert!(app.state().logs.iter().any(| l | l.contains("no next board")));
    }
    #[test]
    fn test_open_plain_file_is_refused() {
        let (_dir, mut app) = app_with_tree();
        app.apply(BrowserAction::PageDown);
        assert_eq!(app.selected(), 2);
        app.apply(BrowserAction::Open);
        assert_eq!(app.session().manager().len(), 1);
        assert!(app.state().logs.iter().any(| l | l.contains("notes.txt is not a directory")));
    }
    #[test]
    fn test_help_toggle_and_quit() {
        let (_dir, mut app) = app_with_tree();
        app.apply(BrowserAction::Help);
        assert_eq!(app.state().current_view, ViewType::Help);
        app.apply(BrowserAction::Help);
        assert_eq!(app.state().current_view, ViewType::Board);
        app.apply(BrowserAction::Jump(4));
        assert_eq!(app.session().manager().current_index(), Some(0));
        app.apply(BrowserAction::Quit);
        assert!(! app.state().running);
    }
}
