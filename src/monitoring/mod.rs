pub mod notifications;
pub use notifications::{LogSubscriber, Notice, NoticeLevel, NoticeSubscriber, NotificationSystem};
