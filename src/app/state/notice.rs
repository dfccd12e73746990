use chrono::{DateTime, Duration, Local};

/// How long a notice stays in the status line.
pub const NOTICE_TTL_SECS: i64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// Transient message shown to the user (the "toast").
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: Local::now(),
            kind,
        }
    }

    pub fn is_expired(&self, now: DateTime<Local>) -> bool {
        now - self.timestamp >= Duration::seconds(NOTICE_TTL_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_expiry() {
        let notice = Notice::new(NoticeKind::Success, "Applied");
        assert!(!notice.is_expired(notice.timestamp));
        assert!(notice.is_expired(notice.timestamp + Duration::seconds(NOTICE_TTL_SECS)));
    }
}
