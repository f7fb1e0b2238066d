use log::{error, info, warn};
use std::{
    sync::mpsc::{self, Receiver, SyncSender, TrySendError},
    time::SystemTime,
};
/// Notices kept for `drain`. When full, the oldest is dropped.
pub const MAX_QUEUED_NOTICES: usize = 256;
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub timestamp: SystemTime,
}
impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: SystemTime::now(),
        }
    }
}
pub struct NotificationSystem {
    sender: SyncSender<Notice>,
    receiver: Receiver<Notice>,
    subscribers: Vec<Box<dyn NoticeSubscriber>>,
    enabled: bool,
}
impl NotificationSystem {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::sync_channel(MAX_QUEUED_NOTICES);
        Self {
            sender,
            receiver,
            subscribers: Vec::new(),
            enabled: true,
        }
    }
    pub fn subscribe(&mut self, subscriber: Box<dyn NoticeSubscriber>) {
        self.subscribers.push(subscriber);
    }
    pub fn notify(&self, notice: Notice) {
        if !self.enabled {
            return;
        }
        for subscriber in &self.subscribers {
            subscriber.on_notice(&notice);
        }
        let mut notice = notice;
        loop {
            match self.sender.try_send(notice) {
                Err(TrySendError::Full(back)) => {
                    self.receiver.try_recv().ok();
                    notice = back;
                }
                _ => break,
            }
        }
    }
    pub fn info(&self, message: impl Into<String>) {
        self.notify(Notice::new(NoticeLevel::Info, message));
    }
    pub fn success(&self, message: impl Into<String>) {
        self.notify(Notice::new(NoticeLevel::Success, message));
    }
    pub fn warning(&self, message: impl Into<String>) {
        self.notify(Notice::new(NoticeLevel::Warning, message));
    }
    pub fn error(&self, message: impl Into<String>) {
        self.notify(Notice::new(NoticeLevel::Error, message));
    }
    /// Takes every queued notice, oldest first. At most
    /// `MAX_QUEUED_NOTICES` of the most recent are kept between drains.
    pub fn drain(&self) -> Vec<Notice> {
        self.receiver.try_iter().collect()
    }
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
impl Default for NotificationSystem {
    fn default() -> Self {
        Self::new()
    }
}
pub trait NoticeSubscriber: Send + Sync {
    fn on_notice(&self, notice: &Notice);
}
pub struct LogSubscriber;
impl NoticeSubscriber for LogSubscriber {
    fn on_notice(&self, notice: &Notice) {
        match notice.level {
            NoticeLevel::Info | NoticeLevel::Success => info!("{}", notice.message),
            NoticeLevel::Warning => warn!("{}", notice.message),
            NoticeLevel::Error => error!("{}", notice.message),
        }
    }
}
