//! 异步副作用
//!
//! update 层只修改本地状态，需要等待或访问数据源的工作交给这里：
//! 每个方法都在 tokio 上启动一个任务，结果（如果需要）以 `AppMessage`
//! 的形式发回主循环。数据源失败只记录日志并显示提示，不影响界面。

use std::sync::Arc;

use syka_core::types::{Proxy, ProxyAddr, RecordKey};
use syka_core::{CoreError, DataProvider};
use tokio::sync::{mpsc, oneshot};

use crate::i18n::t;
use crate::message::{AppMessage, ContentMessage};
use crate::model::state::{ConfirmOutcome, Severity};

/// 副作用句柄
#[derive(Clone)]
pub struct Effects {
    provider: Arc<dyn DataProvider>,
    tx: mpsc::UnboundedSender<AppMessage>,
}

impl Effects {
    pub fn new(provider: Arc<dyn DataProvider>, tx: mpsc::UnboundedSender<AppMessage>) -> Self {
        Self { provider, tx }
    }

    /// 等待确认结果，再交回主循环
    ///
    /// 对话框在没有作答的情况下被丢弃时视为 `Dismissed`。
    pub fn await_confirmation<F>(&self, reply: oneshot::Receiver<ConfirmOutcome>, on_resolve: F)
    where
        F: FnOnce(ConfirmOutcome) -> AppMessage + Send + 'static,
    {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = reply.await.unwrap_or(ConfirmOutcome::Dismissed);
            // 主循环已退出时无需处理
            let _ = tx.send(on_resolve(outcome));
        });
    }

    /// 通知数据源删除记录
    pub fn delete(&self, key: RecordKey) {
        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            match provider.delete(&key).await {
                Ok(()) => log::debug!("{key} deleted from data source"),
                Err(e) => report_failure(&tx, &format!("delete {key}"), &e),
            }
        });
    }

    /// 通知数据源新增代理
    pub fn create_proxies(&self, proxies: Vec<Proxy>) {
        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            match provider.create_proxies(&proxies).await {
                Ok(()) => log::debug!("{} proxies stored", proxies.len()),
                Err(e) => report_failure(&tx, "create proxies", &e),
            }
        });
    }

    /// 检测代理，结果以 `ProxyChecked` 返回
    pub fn test_proxy(&self, addr: ProxyAddr) {
        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = provider.test_proxy(&addr).await.map_err(|e| {
                log_failure(&format!("test {addr}"), &e);
                e.to_string()
            });
            let _ = tx.send(AppMessage::Content(ContentMessage::ProxyChecked { addr, result }));
        });
    }
}

fn log_failure(action: &str, error: &CoreError) {
    if error.is_expected() {
        log::warn!("{action} failed: {error}");
    } else {
        log::error!("{action} failed: {error}");
    }
}

fn report_failure(tx: &mpsc::UnboundedSender<AppMessage>, action: &str, error: &CoreError) {
    log_failure(action, error);
    let _ = tx.send(AppMessage::Notify {
        message: format!("{}: {error}", t().status_bar.provider_failed),
        severity: Severity::Danger,
    });
}
