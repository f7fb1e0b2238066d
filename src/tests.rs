#[cfg(test)]
mod tests {
    use crate::monitoring::NoticeLevel;
    use crate::{BoardError, BoardnavConfig, Session};
    use std::fs;
    use std::path::Path;
    use std::time::{Duration, Instant};
    use tempfile::tempdir;
    fn session_in(home: &Path) -> Session {
        let config = BoardnavConfig {
            home_dir: home.to_path_buf(),
            ..BoardnavConfig::default()
        };
        Session::new(config)
    }
    #[test]
    fn test_open_appends_and_selects() {
        let temp_dir = tempdir().unwrap();
        let a = temp_dir.path().join("a");
        let b = temp_dir.path().join("b");
        fs::create_dir(&a).unwrap();
        fs::create_dir(&b).unwrap();
        fs::write(b.join("readme.md"), "hi").unwrap();
        let mut session = session_in(temp_dir.path());
        assert_eq!(session.open(&a).unwrap(), 0);
        assert_eq!(session.open(&b).unwrap(), 1);
        assert_eq!(session.manager().current_index(), Some(1));
        assert_eq!(session.current().unwrap().files()[0].name(), "readme.md");
        let notices = session.notifier().drain();
        assert_eq!(notices.len(), 2);
        assert!(notices.iter().all(| n | n.level == NoticeLevel::Info));
    }
    #[test]
    fn test_back_and_forward_move_cursor() {
        let temp_dir = tempdir().unwrap();
        let mut session = session_in(temp_dir.path());
        for name in ["one", "two", "three"] {
            let dir = temp_dir.path().join(name);
            fs::create_dir(&dir).unwrap();
            session.open(&dir).unwrap();
        }
        assert_eq!(session.go_back().unwrap().label(), "two");
        assert_eq!(session.go_back().unwrap().label(), "one");
        assert!(matches!(session.go_back(), Err(BoardError::NoPreviousBoard)));
        assert_eq!(session.manager().current_index(), Some(0));
        assert_eq!(session.go_forward().unwrap().label(), "two");
        assert_eq!(session.jump_to(2).unwrap().label(), "three");
        assert!(matches!(session.go_forward(), Err(BoardError::NoNextBoard)));
        assert!(matches!(session.jump_to(9), Err(BoardError::OutOfRange { .. })));
        let warnings = session
            .notifier()
            .drain()
            .into_iter()
            .filter(|n| n.level == NoticeLevel::Warning)
            .count();
        assert_eq!(warnings, 3);
    }
    #[test]
    fn test_empty_session_navigation() {
        let temp_dir = tempdir().unwrap();
        let mut session = session_in(temp_dir.path());
        assert!(matches!(session.go_forward(), Err(BoardError::NoBoards)));
        assert!(matches!(session.go_back(), Err(BoardError::NoBoards)));
        assert!(matches!(session.current(), Err(BoardError::NoCurrentBoard)));
    }
    #[test]
    fn test_open_failure_leaves_history_untouched() {
        let temp_dir = tempdir().unwrap();
        let mut session = session_in(temp_dir.path());
        assert!(session.open(temp_dir.path().join("missing")).is_err());
        assert!(session.manager().is_empty());
        assert_eq!(session.notifier().drain()[0].level, NoticeLevel::Error);
    }
    #[test]
    fn test_background_listing_is_appended_on_pump() {
        let temp_dir = tempdir().unwrap();
        let target = temp_dir.path().join("async");
        fs::create_dir(&target).unwrap();
        let mut session = session_in(temp_dir.path());
        assert_eq!(session.pump(), 0);
        assert!(session.request(&target));
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut added = 0;
        while added == 0 && Instant::now() < deadline {
            added = session.pump();
            std::thread::sleep(Duration::from_millis(10));
        }
        assert_eq!(added, 1);
        assert_eq!(session.current().unwrap().pwd(), target.as_path());
    }
    #[test]
    fn test_config_round_trip_on_disk() {
        let temp_dir = tempdir().unwrap();
        let home = temp_dir.path().join("home");
        let loaded = BoardnavConfig::load(&home).unwrap();
        assert_eq!(loaded.home_dir, home);
        assert!(! loaded.listing.show_hidden);
        let mut config = loaded.clone();
        config.listing.show_hidden = true;
        config.browser.page_size = 25;
        config.save().unwrap();
        let reloaded = BoardnavConfig::load(&home).unwrap();
        assert!(reloaded.listing.show_hidden);
        assert_eq!(reloaded.browser.page_size, 25);
    }
}
