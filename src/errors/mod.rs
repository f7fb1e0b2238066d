pub mod types;
pub use types::{BoardError, ErrorCode, Result};
