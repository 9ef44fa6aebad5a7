//! 测试辅助模块
//!
//! 提供便捷的测试数据工厂方法。

use chrono::{NaiveDate, NaiveDateTime};

use crate::types::{Account, AccountStatus, Proxy, ProxyAddr, ProxyKind, ProxyStatus};

/// 固定的时间戳，保证测试可重复
pub fn ts() -> NaiveDateTime {
    crate::utils::datetime::parse("2024-05-20 10:00").unwrap_or_default()
}

pub fn account(id: u64, phone: &str, username: &str, status: AccountStatus) -> Account {
    Account {
        id,
        phone: phone.to_string(),
        username: username.to_string(),
        status,
        last_activity: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap_or_default(),
    }
}

/// `n` 个账号，id 从 1 开始
pub fn numbered_accounts(n: usize) -> Vec<Account> {
    (1..=n as u64)
        .map(|id| account(id, &format!("+7900{id:07}"), &format!("user_{id}"), AccountStatus::Active))
        .collect()
}

/// 一组用于过滤测试的账号
pub fn accounts() -> Vec<Account> {
    vec![
        account(1, "+79261234567", "alice_w", AccountStatus::Active),
        account(2, "+79031112233", "bob", AccountStatus::Banned),
        account(3, "+79267654321", "carol", AccountStatus::Checking),
        account(4, "+79165550000", "dmitry", AccountStatus::Active),
        account(5, "+79997770000", "oleg", AccountStatus::Unknown),
    ]
}

pub fn proxy(ip: &str, port: u16, status: ProxyStatus) -> Proxy {
    let mut proxy = Proxy::new(ProxyAddr::new(ip, port), ProxyKind::Http, ts());
    proxy.status = status;
    if status == ProxyStatus::Working {
        proxy.speed = Some(100);
    }
    proxy
}
