use crossterm::event::KeyCode;
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserAction {
    Quit,
    Help,
    SelectUp,
    SelectDown,
    PageUp,
    PageDown,
    Open,
    Back,
    Forward,
    /// Zero-based board index, from the 1-9 keys.
    Jump(usize),
    Ignore,
}
pub fn action_for(code: KeyCode) -> BrowserAction {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => BrowserAction::Quit,
        KeyCode::Char('h') | KeyCode::Char('?') => BrowserAction::Help,
        KeyCode::Up | KeyCode::Char('k') => BrowserAction::SelectUp,
        KeyCode::Down | KeyCode::Char('j') => BrowserAction::SelectDown,
        KeyCode::PageUp => BrowserAction::PageUp,
        KeyCode::PageDown => BrowserAction::PageDown,
        KeyCode::Enter => BrowserAction::Open,
        KeyCode::Left | KeyCode::Backspace => BrowserAction::Back,
        KeyCode::Right => BrowserAction::Forward,
        KeyCode::Char(c @ '1'..='9') => BrowserAction::Jump(c as usize - '1' as usize),
        _ => BrowserAction::Ignore,
    }
}
/// Selection within the file list of the current board.
pub struct SelectionHandler {
    pub current_index: usize,
    pub page_size: usize,
}
impl SelectionHandler {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_index: 0,
            page_size: page_size.max(1),
        }
    }
    pub fn next(&mut self, max_items: usize) {
        if self.current_index < max_items.saturating_sub(1) {
            self.current_index += 1;
        }
    }
    pub fn previous(&mut self) {
        if self.current_index > 0 {
            self.current_index -= 1;
        }
    }
    pub fn page_up(&mut self, max_items: usize) {
        self.current_index = self
            .current_index
            .saturating_sub(self.page_size)
            .min(max_items.saturating_sub(1));
    }
    pub fn page_down(&mut self, max_items: usize) {
        self.current_index = (self.current_index + self.page_size)
            .min(max_items.saturating_sub(1));
    }
    pub fn reset(&mut self) {
        self.current_index = 0;
    }
}
