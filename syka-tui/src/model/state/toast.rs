//! 提示消息（toast）
//!
//! 同一时刻最多一条：新消息直接替换旧消息，并从自己的调用时刻开始计时。

use std::time::{Duration, Instant};

/// 严重程度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

/// 一条提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    /// 到期时刻
    pub deadline: Instant,
}

/// 提示状态
#[derive(Debug, Clone)]
pub struct ToastState {
    current: Option<Toast>,
    duration: Duration,
}

impl ToastState {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    /// 显示一条提示，替换当前提示
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        let message = message.into();
        log::info!("toast [{severity:?}] {message}");
        self.current = Some(Toast {
            message,
            severity,
            deadline: now + self.duration,
        });
    }

    /// 隐藏已到期的提示，可重复调用
    pub fn expire(&mut self, now: Instant) {
        if self.current.as_ref().is_some_and(|toast| toast.deadline <= now) {
            self.current = None;
        }
    }

    /// 当前可见的提示
    pub fn visible(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new(Duration::from_millis(3000))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn hides_after_duration() {
        let start = Instant::now();
        let mut toast = ToastState::default();
        toast.notify("X", Severity::Success, start);

        toast.expire(start + ms(2999));
        assert_eq!(toast.visible().map(|t| t.message.as_str()), Some("X"));

        toast.expire(start + ms(3000));
        assert!(toast.visible().is_none());
        toast.expire(start + ms(5000));
        assert!(toast.visible().is_none());
    }

    #[test]
    fn newest_replaces_and_restarts_timer() {
        let start = Instant::now();
        let mut toast = ToastState::default();
        toast.notify("X", Severity::Info, start);
        toast.notify("Y", Severity::Danger, start + ms(1000));

        let visible = toast.visible().unwrap();
        assert_eq!(visible.message, "Y");
        assert_eq!(visible.severity, Severity::Danger);

        // X's deadline has passed, Y's has not
        toast.expire(start + ms(3500));
        assert_eq!(toast.visible().map(|t| t.message.as_str()), Some("Y"));

        toast.expire(start + ms(4000));
        assert!(toast.visible().is_none());
    }

    #[test]
    fn configurable_duration() {
        let start = Instant::now();
        let mut toast = ToastState::new(ms(500));
        toast.notify("short", Severity::Warning, start);
        toast.expire(start + ms(500));
        assert!(toast.visible().is_none());
    }
}
