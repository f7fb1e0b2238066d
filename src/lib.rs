use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::{fs, path::{Path, PathBuf}};
pub mod board;
pub mod config;
pub mod errors;
pub mod listing;
pub mod monitoring;
pub mod tui;
#[cfg(test)]
mod tests;
pub use board::{Board, BoardManager, File, FileKind};
pub use errors::{BoardError, ErrorCode};
use listing::{DirectoryLoader, ListingResult, ListingWorker};
use monitoring::NotificationSystem;
pub const CONFIG_FILE: &str = "config.json";
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardnavConfig {
    pub home_dir: PathBuf,
    pub listing: ListingConfig,
    pub browser: BrowserConfig,
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    pub show_hidden: bool,
    pub dirs_first: bool,
    pub sort_by: String,
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    pub tick_rate_ms: u64,
    pub page_size: usize,
}
impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            show_hidden: false,
            dirs_first: true,
            sort_by: "name".to_string(),
        }
    }
}
impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            page_size: 10,
        }
    }
}
impl Default for BoardnavConfig {
    fn default() -> Self {
        Self {
            home_dir: get_default_home_dir(),
            listing: ListingConfig::default(),
            browser: BrowserConfig::default(),
        }
    }
}
pub fn get_default_home_dir() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".boardnav")
    } else if let Ok(user) = std::env::var("USERPROFILE") {
        PathBuf::from(user).join(".boardnav")
    } else {
        PathBuf::from("/tmp/.boardnav")
    }
}
impl BoardnavConfig {
    /// Loads `<home_dir>/config.json`, falling back to defaults rooted at
    /// `home_dir` when the file does not exist yet.
    pub fn load(home_dir: &Path) -> Result<Self> {
        let config_path = home_dir.join(CONFIG_FILE);
        if !config_path.exists() {
            debug!("no config at {:?}, using defaults", config_path);
            return Ok(Self {
                home_dir: home_dir.to_path_buf(),
                ..Self::default()
            });
        }
        let config_data = fs::read_to_string(&config_path)
            .with_context(|| format!("cannot read config {:?}", config_path))?;
        let mut config: BoardnavConfig = serde_json::from_str(&config_data)
            .with_context(|| format!("cannot parse config {:?}", config_path))?;
        config.home_dir = home_dir.to_path_buf();
        Ok(config)
    }
    pub fn save(&self) -> Result<()> {
        fs::create_dir_all(&self.home_dir)
            .with_context(|| format!("cannot create directory {:?}", self.home_dir))?;
        let config_path = self.config_path();
        let config_data = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, config_data)
            .with_context(|| format!("cannot write config {:?}", config_path))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&config_path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&config_path, perms)?;
        }
        info!("Saved configuration to {:?}", config_path);
        Ok(())
    }
    pub fn config_path(&self) -> PathBuf {
        self.home_dir.join(CONFIG_FILE)
    }
}
/// One browsing session: the board history plus the collaborators that feed
/// it. Newly opened boards become current; back, forward and jump go through
/// `BoardManager::set_current_board`.
pub struct Session {
    config: BoardnavConfig,
    manager: BoardManager,
    loader: DirectoryLoader,
    worker: Option<ListingWorker>,
    notifier: NotificationSystem,
}
impl Session {
    pub fn new(config: BoardnavConfig) -> Self {
        let loader = DirectoryLoader::new(config.listing.clone());
        Self {
            config,
            manager: BoardManager::new(),
            loader,
            worker: None,
            notifier: NotificationSystem::new(),
        }
    }
    /// Lists `path`, appends it to the history and makes it current.
    pub fn open(&mut self, path: impl AsRef<Path>) -> errors::Result<usize> {
        let path = path.as_ref();
        let board = match self.loader.load(path) {
            Ok(board) => board,
            Err(e) => {
                self.notifier.error(e.to_string());
                return Err(e);
            }
        };
        Ok(self.push_current(board))
    }
    /// Queues `path` on the background worker; results land on `pump`.
    pub fn request(&mut self, path: impl Into<PathBuf>) -> bool {
        let loader = self.loader.clone();
        self.worker.get_or_insert_with(|| ListingWorker::spawn(loader)).request(path)
    }
    /// Appends every finished background listing. Returns how many boards
    /// were added.
    pub fn pump(&mut self) -> usize {
        let results = match &self.worker {
            Some(worker) => worker.poll(),
            None => return 0,
        };
        let mut added = 0;
        for result in results {
            match result {
                ListingResult::Loaded(board) => {
                    self.push_current(board);
                    added += 1;
                }
                ListingResult::Failed { path, error } => {
                    self.notifier.error(format!("{}: {}", path.display(), error));
                }
            }
        }
        added
    }
    pub fn go_forward(&mut self) -> errors::Result<&Board> {
        let target = match self.manager.next_board() {
            Ok(_) => self.manager.current_index().map_or(0, |c| c + 1),
            Err(e) => return Err(self.report(e)),
        };
        self.jump_to(target)
    }
    pub fn go_back(&mut self) -> errors::Result<&Board> {
        let target = match (self.manager.prev_board(), self.manager.current_index()) {
            (Ok(_), Some(current)) => current - 1,
            (Ok(_), None) => return Err(self.report(BoardError::NoPreviousBoard)),
            (Err(e), _) => return Err(self.report(e)),
        };
        self.jump_to(target)
    }
    pub fn jump_to(&mut self, index: usize) -> errors::Result<&Board> {
        if let Err(e) = self.manager.set_current_board(index) {
            return Err(self.report(e));
        }
        self.manager.get_current_board()
    }
    pub fn current(&self) -> errors::Result<&Board> {
        self.manager.get_current_board()
    }
    pub fn manager(&self) -> &BoardManager {
        &self.manager
    }
    pub fn config(&self) -> &BoardnavConfig {
        &self.config
    }
    pub fn notifier(&self) -> &NotificationSystem {
        &self.notifier
    }
    pub fn notifier_mut(&mut self) -> &mut NotificationSystem {
        &mut self.notifier
    }
    fn push_current(&mut self, board: Board) -> usize {
        let label = board.pwd().display().to_string();
        let index = self.manager.push_current(board);
        self.notifier.info(format!("opened {}", label));
        index
    }
    fn report(&self, error: BoardError) -> BoardError {
        self.notifier.warning(error.to_string());
        error
    }
}
