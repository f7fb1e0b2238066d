pub mod loader;
pub mod worker;
pub use loader::DirectoryLoader;
pub use worker::{ListingRequest, ListingResult, ListingWorker};
