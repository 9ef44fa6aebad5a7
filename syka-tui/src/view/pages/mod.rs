//! 区块页面

pub mod accounts;
pub mod dashboard;
pub mod proxies;

use syka_core::types::{AccountStatus, ProxyStatus};

use crate::i18n::t;

/// 账号状态的显示文字
pub fn account_status_label(status: AccountStatus) -> &'static str {
    let texts = &t().status;
    match status {
        AccountStatus::Active => texts.active,
        AccountStatus::Banned => texts.banned,
        AccountStatus::Checking => texts.checking,
        AccountStatus::Unknown => texts.unknown,
    }
}

/// 代理状态的显示文字
pub fn proxy_status_label(status: ProxyStatus) -> &'static str {
    let texts = &t().status;
    match status {
        ProxyStatus::Working => texts.working,
        ProxyStatus::Dead => texts.dead,
        ProxyStatus::Checking => texts.checking,
        ProxyStatus::Unknown => texts.unknown,
    }
}
