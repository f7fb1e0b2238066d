pub mod app;
pub mod views;
pub mod handlers;
pub use app::{AppState, BoardTui, BrowserApp, ViewType};
pub use views::{BoardView, HelpView, HistoryView, LogsView};
pub use handlers::{action_for, BrowserAction, SelectionHandler};
