//! 确认对话框
//!
//! `request` 立即返回一个 `oneshot::Receiver`，调用方在异步任务中等待结果，
//! 界面保持可响应。同时到来的多个请求按 FIFO 排队：
//! 显示的总是队首，解决后把结果交给它自己的调用方，再显示下一个。
//!
//! ```text
//!   idle ──request──▶ awaiting ──resolve──▶ idle (队列为空)
//!                        ▲  │
//!                        └──┘ resolve (队列非空，显示下一个)
//! ```

use std::collections::VecDeque;

use tokio::sync::oneshot;

/// 确认结果
///
/// `Declined` 与 `Dismissed` 在行为上等价，只是来源不同。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// 点击了 OK
    Accepted,
    /// 点击了取消
    Declined,
    /// 通过关闭按钮、Esc 或点击背景关闭
    Dismissed,
}

impl ConfirmOutcome {
    pub fn is_accepted(self) -> bool {
        matches!(self, ConfirmOutcome::Accepted)
    }
}

/// 对话框中获得焦点的按钮
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmButton {
    #[default]
    Cancel,
    Ok,
}

/// 一个等待中的确认请求
#[derive(Debug)]
pub struct ConfirmRequest {
    pub title: String,
    pub body: String,
    reply: oneshot::Sender<ConfirmOutcome>,
}

/// 确认对话框状态
#[derive(Debug, Default)]
pub struct ConfirmState {
    queue: VecDeque<ConfirmRequest>,
    pub focus: ConfirmButton,
}

impl ConfirmState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 请求确认
    pub fn request(
        &mut self,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> oneshot::Receiver<ConfirmOutcome> {
        let (reply, receiver) = oneshot::channel();
        let request = ConfirmRequest {
            title: title.into(),
            body: body.into(),
            reply,
        };
        if !self.queue.is_empty() {
            log::debug!("confirmation '{}' queued behind {}", request.title, self.queue.len());
        }
        self.queue.push_back(request);
        receiver
    }

    /// 当前显示的请求
    pub fn current(&self) -> Option<&ConfirmRequest> {
        self.queue.front()
    }

    pub fn is_open(&self) -> bool {
        !self.queue.is_empty()
    }

    /// 排队中（包括正在显示）的请求数
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            ConfirmButton::Cancel => ConfirmButton::Ok,
            ConfirmButton::Ok => ConfirmButton::Cancel,
        };
    }

    /// 以获得焦点的按钮作答
    pub fn press(&mut self) -> bool {
        let outcome = match self.focus {
            ConfirmButton::Ok => ConfirmOutcome::Accepted,
            ConfirmButton::Cancel => ConfirmOutcome::Declined,
        };
        self.resolve(outcome)
    }

    /// 解决当前请求
    ///
    /// 没有显示中的请求时返回 `false`。调用方已放弃等待时结果被丢弃。
    pub fn resolve(&mut self, outcome: ConfirmOutcome) -> bool {
        let Some(request) = self.queue.pop_front() else {
            return false;
        };
        self.focus = ConfirmButton::default();
        if request.reply.send(outcome).is_err() {
            log::debug!("confirmation '{}' resolved after its caller went away", request.title);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_until_requested() {
        let mut state = ConfirmState::new();
        assert!(!state.is_open());
        assert!(!state.resolve(ConfirmOutcome::Accepted));
    }

    #[test]
    fn every_exit_path_hides_the_dialog() {
        for outcome in [ConfirmOutcome::Accepted, ConfirmOutcome::Declined, ConfirmOutcome::Dismissed] {
            let mut state = ConfirmState::new();
            let mut rx = state.request("Delete?", "Sure?");
            assert!(state.is_open());
            assert!(state.resolve(outcome));
            assert!(!state.is_open());
            assert_eq!(rx.try_recv(), Ok(outcome));
        }
    }

    #[test]
    fn queued_requests_resolve_in_order_to_their_own_callers() {
        let mut state = ConfirmState::new();
        let first = state.request("first", "");
        let second = state.request("second", "");
        assert_eq!(state.pending(), 2);
        assert_eq!(state.current().map(|r| r.title.as_str()), Some("first"));

        state.resolve(ConfirmOutcome::Declined);
        assert_eq!(state.current().map(|r| r.title.as_str()), Some("second"));
        state.resolve(ConfirmOutcome::Accepted);
        assert!(!state.is_open());

        assert_eq!(tokio_test::block_on(first), Ok(ConfirmOutcome::Declined));
        assert_eq!(tokio_test::block_on(second), Ok(ConfirmOutcome::Accepted));
    }

    #[test]
    fn press_uses_focused_button() {
        let mut state = ConfirmState::new();
        let mut rx = state.request("t", "b");
        assert_eq!(state.focus, ConfirmButton::Cancel);
        state.toggle_focus();
        state.press();
        assert_eq!(rx.try_recv(), Ok(ConfirmOutcome::Accepted));

        let mut rx = state.request("t", "b");
        assert_eq!(state.focus, ConfirmButton::Cancel);
        state.press();
        assert_eq!(rx.try_recv(), Ok(ConfirmOutcome::Declined));
    }

    #[test]
    fn dropped_caller_does_not_block_the_queue() {
        let mut state = ConfirmState::new();
        drop(state.request("gone", ""));
        let mut rx = state.request("next", "");
        assert!(state.resolve(ConfirmOutcome::Accepted));
        assert!(state.resolve(ConfirmOutcome::Dismissed));
        assert_eq!(rx.try_recv(), Ok(ConfirmOutcome::Dismissed));
    }
}
