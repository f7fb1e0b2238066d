use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileKind {
    File,
    Directory,
    Symlink,
}
/// A single entry of a directory listing. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    name: String,
    kind: FileKind,
    size: u64,
}
impl File {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_meta(name, FileKind::File, 0)
    }
    pub fn with_meta(name: impl Into<String>, kind: FileKind, size: u64) -> Self {
        Self { name: name.into(), kind, size }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn kind(&self) -> FileKind {
        self.kind
    }
    pub fn size(&self) -> u64 {
        self.size
    }
    pub fn is_dir(&self) -> bool {
        self.kind == FileKind::Directory
    }
}
/// Snapshot of one directory: the working directory it was taken in and the
/// files it contained at that moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pwd: PathBuf,
    files: Vec<File>,
}
impl Board {
    pub fn new(pwd: impl Into<PathBuf>, files: Vec<File>) -> Self {
        Self { pwd: pwd.into(), files }
    }
    pub fn pwd(&self) -> &Path {
        &self.pwd
    }
    pub fn files(&self) -> &[File] {
        &self.files
    }
    pub fn len(&self) -> usize {
        self.files.len()
    }
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
    pub fn find(&self, name: &str) -> Option<&File> {
        self.files.iter().find(|f| f.name == name)
    }
    /// Last path component. Roots give "/"; paths ending in `.` or `..`
    /// have no component to show and are labelled with the path as given.
    pub fn label(&self) -> String {
        if let Some(name) = self.pwd.file_name() {
            return name.to_string_lossy().to_string();
        }
        let root_only = self.pwd.has_root()
            && self
                .pwd
                .components()
                .all(|c| matches!(c, Component::RootDir | Component::Prefix(_)));
        if root_only {
            "/".to_string()
        } else if self.pwd.as_os_str().is_empty() {
            ".".to_string()
        } else {
            self.pwd.display().to_string()
        }
    }
}
