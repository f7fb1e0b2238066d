pub mod manager;
pub mod model;
pub use manager::BoardManager;
pub use model::{Board, File, FileKind};
