use crate::board::{Board, File, FileKind};
use crate::errors::{BoardError, Result};
use crate::ListingConfig;
use log::{debug, warn};
use std::fs;
use std::path::Path;
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    config: ListingConfig,
}
impl DirectoryLoader {
    pub fn new(config: ListingConfig) -> Self {
        Self { config }
    }
    pub fn config(&self) -> &ListingConfig {
        &self.config
    }
    /// Reads `path` into a board. Entries whose metadata cannot be read are
    /// skipped rather than failing the whole listing.
    pub fn load(&self, path: &Path) -> Result<Board> {
        let meta = fs::metadata(path)
            .map_err(|source| BoardError::Listing {
                path: path.to_path_buf(),
                source,
            })?;
        if !meta.is_dir() {
            return Err(BoardError::NotADirectory {
                path: path.to_path_buf(),
            });
        }
        let read_dir = fs::read_dir(path)
            .map_err(|source| BoardError::Listing {
                path: path.to_path_buf(),
                source,
            })?;
        let mut files = Vec::new();
        for entry in read_dir {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("skipping unreadable entry in {:?}: {}", path, e);
                    continue;
                }
            };
            let name = entry.file_name().to_string_lossy().to_string();
            if !self.config.show_hidden && name.starts_with('.') {
                continue;
            }
            if let Some(file) = Self::describe(&entry.path(), name) {
                files.push(file);
            }
        }
        self.sort(&mut files);
        debug!("listed {:?}: {} entries", path, files.len());
        Ok(Board::new(path, files))
    }
    fn describe(path: &Path, name: String) -> Option<File> {
        let link_meta = fs::symlink_metadata(path).ok()?;
        if link_meta.file_type().is_symlink() {
            let target_is_dir = fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false);
            let kind = if target_is_dir { FileKind::Directory } else { FileKind::Symlink };
            return Some(File::with_meta(name, kind, link_meta.len()));
        }
        let kind = if link_meta.is_dir() { FileKind::Directory } else { FileKind::File };
        Some(File::with_meta(name, kind, link_meta.len()))
    }
    fn sort(&self, files: &mut [File]) {
        let by_size = self.config.sort_by == "size";
        let dirs_first = self.config.dirs_first;
        files
            .sort_by(|a, b| {
                if dirs_first && a.is_dir() != b.is_dir() {
                    return b.is_dir().cmp(&a.is_dir());
                }
                if by_size {
                    b.size()
                        .cmp(&a.size())
                        .then_with(|| a.name().to_lowercase().cmp(&b.name().to_lowercase()))
                } else {
                    a.name().to_lowercase().cmp(&b.name().to_lowercase())
                }
            });
    }
}
