//! 测试辅助模块

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use syka_core::types::{Account, AccountStatus, Proxy, ProxyAddr, ProxyKind, ProxyStatus};
use syka_core::InMemoryDataProvider;
use tokio::sync::mpsc;

use crate::backend::{AppConfig, Effects};
use crate::message::AppMessage;
use crate::model::App;

/// 固定的时间戳
pub fn ts() -> NaiveDateTime {
    syka_core::utils::datetime::parse("2024-05-20 10:00").unwrap_or_default()
}

pub fn account(id: u64, status: AccountStatus) -> Account {
    Account {
        id,
        phone: format!("+7926{id:07}"),
        username: format!("user_{id}"),
        status,
        last_activity: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap_or_default(),
    }
}

/// `n` 个活跃账号，id 从 1 开始
pub fn numbered_accounts(n: usize) -> Vec<Account> {
    (1..=n as u64).map(|id| account(id, AccountStatus::Active)).collect()
}

pub fn proxy(ip: &str, port: u16, status: ProxyStatus) -> Proxy {
    let mut proxy = Proxy::new(ProxyAddr::new(ip, port), ProxyKind::Socks5, ts());
    proxy.status = status;
    proxy
}

/// 带 12 个账号、2 个代理的应用，以及接收副作用结果的通道
///
/// 数据源中保存同样的记录。创建副作用的操作需要在 tokio 运行时中执行。
pub fn test_app() -> (App, mpsc::UnboundedReceiver<AppMessage>) {
    let accounts = numbered_accounts(12);
    let proxies = vec![
        proxy("192.168.1.1", 8080, ProxyStatus::Working),
        proxy("10.0.0.5", 3128, ProxyStatus::Dead),
    ];
    let provider = InMemoryDataProvider::with_data(accounts.clone(), proxies.clone());

    let (tx, rx) = mpsc::unbounded_channel();
    let mut app = App::new(&AppConfig::default(), Effects::new(Arc::new(provider), tx));
    app.accounts.set_records(accounts);
    app.proxies.set_records(proxies);
    (app, rx)
}
