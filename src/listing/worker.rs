use super::loader::DirectoryLoader;
use crate::board::Board;
use crate::errors::Result;
use log::debug;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
#[derive(Debug, Clone)]
pub struct ListingRequest(pub PathBuf);
#[derive(Debug)]
pub enum ListingResult {
    Loaded(Board),
    Failed { path: PathBuf, error: String },
}
/// Background directory listing. Requests are served in order on a single
/// detached thread. Dropping the worker closes the request channel and
/// returns at once; the thread exits after the listing it is running.
pub struct ListingWorker {
    sender: Sender<ListingRequest>,
    receiver: Receiver<ListingResult>,
}
impl ListingWorker {
    pub fn spawn(loader: DirectoryLoader) -> Self {
        Self::spawn_with(move |path| loader.load(path))
    }
    pub fn spawn_with<F>(load: F) -> Self
    where
        F: Fn(&Path) -> Result<Board> + Send + 'static,
    {
        let (req_tx, req_rx) = mpsc::channel::<ListingRequest>();
        let (res_tx, res_rx) = mpsc::channel();
        thread::spawn(move || {
            while let Ok(ListingRequest(path)) = req_rx.recv() {
                debug!("worker listing {:?}", path);
                let result = match load(&path) {
                    Ok(board) => ListingResult::Loaded(board),
                    Err(e) => {
                        ListingResult::Failed {
                            path,
                            error: e.to_string(),
                        }
                    }
                };
                if res_tx.send(result).is_err() {
                    break;
                }
            }
            debug!("listing worker stopped");
        });
        Self {
            sender: req_tx,
            receiver: res_rx,
        }
    }
    pub fn request(&self, path: impl Into<PathBuf>) -> bool {
        self.sender.send(ListingRequest(path.into())).is_ok()
    }
    /// Non-blocking: returns every result that has arrived so far.
    pub fn poll(&self) -> Vec<ListingResult> {
        self.receiver.try_iter().collect()
    }
    pub fn wait(&self, timeout: Duration) -> Option<ListingResult> {
        self.receiver.recv_timeout(timeout).ok()
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::ListingConfig;
    use std::fs;
    use std::time::Instant;
    use tempfile::tempdir;
    #[test]
    fn test_worker_loads_in_request_order() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        fs::write(second.path().join("note.md"), "x").unwrap();
        let worker = ListingWorker::spawn(DirectoryLoader::new(ListingConfig::default()));
        assert!(worker.request(first.path()));
        assert!(worker.request(second.path()));
        let a = worker.wait(Duration::from_secs(5)).unwrap();
        let b = worker.wait(Duration::from_secs(5)).unwrap();
        match (a, b) {
            (ListingResult::Loaded(a), ListingResult::Loaded(b)) => {
                assert_eq!(a.pwd(), first.path());
                assert!(a.is_empty());
                assert_eq!(b.files()[0].name(), "note.md");
            }
            other => panic!("unexpected results: {:?}", other),
        }
    }
    #[test]
    fn test_worker_reports_failures() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("gone");
        let worker = ListingWorker::spawn(DirectoryLoader::new(ListingConfig::default()));
        worker.request(&missing);
        match worker.wait(Duration::from_secs(5)) {
            Some(ListingResult::Failed { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected failure, got {:?}", other),
        }
        assert!(worker.poll().is_empty());
    }
    #[test]
    fn test_drop_does_not_wait_for_slow_listing() {
        let (started_tx, started_rx) = mpsc::channel();
        let worker = ListingWorker::spawn_with(move |path| {
            started_tx.send(()).ok();
            thread::sleep(Duration::from_secs(2));
            Ok(Board::new(path, Vec::new()))
        });
        assert!(worker.request("/slow"));
        started_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        let start = Instant::now();
        drop(worker);
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
