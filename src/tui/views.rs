use crate::board::{Board, BoardManager, FileKind};
use ratatui::{
    layout::Rect, style::{Color, Modifier, Style},
    text::Span, widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
pub struct BoardView;
impl BoardView {
    pub fn render(&self, f: &mut Frame, area: Rect, board: Option<&Board>, selected: usize) {
        let Some(board) = board else {
            let empty = Paragraph::new("No board selected")
                .block(Block::default().borders(Borders::ALL).title("Files"));
            f.render_widget(empty, area);
            return;
        };
        let items: Vec<ListItem> = board
            .files()
            .iter()
            .enumerate()
            .map(|(i, file)| {
                let style = if i == selected {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else if file.is_dir() {
                    Style::default().fg(Color::Blue)
                } else {
                    Style::default()
                };
                let text = match file.kind() {
                    FileKind::Directory => format!("{}/", file.name()),
                    FileKind::Symlink => format!("{} @", file.name()),
                    FileKind::File => format!("{}  {} bytes", file.name(), file.size()),
                };
                ListItem::new(Span::styled(text, style))
            })
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("{} ({} entries)", board.label(), board.len())),
            );
        f.render_widget(list, area);
    }
}
pub struct HistoryView;
impl HistoryView {
    pub fn render(&self, f: &mut Frame, area: Rect, manager: &BoardManager) {
        let current = manager.current_index();
        let items: Vec<ListItem> = manager
            .boards()
            .iter()
            .enumerate()
            .map(|(i, board)| {
                let (marker, style) = if Some(i) == current {
                    ("> ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                } else {
                    ("  ", Style::default())
                };
                ListItem::new(
                    Span::styled(format!("{}{}: {}", marker, i + 1, board.label()), style),
                )
            })
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("History"));
        f.render_widget(list, area);
    }
}
pub struct LogsView;
impl LogsView {
    pub fn render(&self, f: &mut Frame, area: Rect, logs: &[String]) {
        let start = logs.len().saturating_sub(area.height.saturating_sub(2) as usize);
        let items: Vec<ListItem> = logs[start..]
            .iter()
            .map(|log| ListItem::new(log.as_str()))
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Log"));
        f.render_widget(list, area);
    }
}
pub struct HelpView;
impl HelpView {
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let help_text = "Board Browser Help\n\
                        ==================\n\
                        \n\
                        Up/Down, j/k   - Select file\n\
                        PgUp/PgDn      - Page through files\n\
                        Enter          - Open selected directory as a new board\n\
                        Left/Backspace - Previous board\n\
                        Right          - Next board\n\
                        1-9            - Jump to board\n\
                        h, ?           - Toggle help\n\
                        q, Esc         - Quit";
        let paragraph = Paragraph::new(help_text)
            .block(Block::default().borders(Borders::ALL).title("Help"));
        f.render_widget(paragraph, area);
    }
}
