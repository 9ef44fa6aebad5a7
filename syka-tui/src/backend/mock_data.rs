//! 模拟数据
//!
//! 在接入真实数据源之前，用于填充内存数据源。

use chrono::{Days, Local, NaiveDate};
use rand::seq::IndexedRandom;
use rand::Rng;
use syka_core::types::{Account, AccountStatus, Proxy, ProxyAddr, ProxyKind, ProxyStatus};
use syka_core::utils::datetime;

/// 生成 `count` 个随机账号，id 从 1 开始
pub fn accounts(count: usize) -> Vec<Account> {
    let mut rng = rand::rng();
    let today = Local::now().date_naive();

    (1..=count as u64)
        .map(|id| Account {
            id,
            phone: format!("+7926{}", rng.random_range(1_000_000..10_000_000)),
            username: format!("user_{}", random_suffix(&mut rng)),
            status: [AccountStatus::Active, AccountStatus::Banned, AccountStatus::Checking]
                .choose(&mut rng)
                .copied()
                .unwrap_or_default(),
            last_activity: random_recent_date(&mut rng, today),
        })
        .collect()
}

/// 四个固定的演示代理
pub fn proxies() -> Vec<Proxy> {
    [
        ("192.168.1.1", 8080, ProxyKind::Http, ProxyStatus::Working, Some(120), "2024-05-20 10:00"),
        ("10.0.0.5", 3128, ProxyKind::Socks5, ProxyStatus::Dead, None, "2024-05-20 09:45"),
        ("172.16.0.10", 1080, ProxyKind::Socks5, ProxyStatus::Working, Some(85), "2024-05-20 10:02"),
        ("203.0.113.25", 8000, ProxyKind::Http, ProxyStatus::Checking, None, "2024-05-19 18:00"),
    ]
    .into_iter()
    .map(|(ip, port, kind, status, speed, last_check)| {
        let mut proxy = Proxy::new(
            ProxyAddr::new(ip, port),
            kind,
            datetime::parse(last_check).unwrap_or_default(),
        );
        proxy.status = status;
        proxy.speed = speed;
        proxy
    })
    .collect()
}

/// 6 位小写字母数字
fn random_suffix(rng: &mut impl Rng) -> String {
    (0..6)
        .filter_map(|_| char::from_digit(rng.random_range(0..36), 36))
        .collect()
}

/// 最近约 115 天内的某一天
fn random_recent_date(rng: &mut impl Rng, today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_days(Days::new(rng.random_range(0..=115)))
        .unwrap_or(today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn accounts_have_sequential_ids_and_known_statuses() {
        let list = accounts(53);
        assert_eq!(list.len(), 53);
        assert_eq!(list.first().map(|a| a.id), Some(1));
        assert_eq!(list.last().map(|a| a.id), Some(53));
        for account in &list {
            assert!(account.phone.starts_with("+7926"));
            assert_eq!(account.phone.len(), 12);
            assert!(account.username.starts_with("user_"));
            assert_ne!(account.status, AccountStatus::Unknown);
        }
    }

    #[test]
    fn demo_proxies_are_unique() {
        let list = proxies();
        let addrs: HashSet<_> = list.iter().map(|p| p.addr.clone()).collect();
        assert_eq!(addrs.len(), 4);
        assert_eq!(list[1].status, ProxyStatus::Dead);
        assert_eq!(list[0].speed, Some(120));
        assert_eq!(list[3].last_check.format(datetime::FORMAT).to_string(), "2024-05-19 18:00");
    }
}
