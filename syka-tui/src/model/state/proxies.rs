//! 代理表格状态

use std::collections::HashSet;

use syka_core::types::{Proxy, ProxyAddr, ProxyCheck, ProxyStatus, RecordKey};

use super::TableState;

/// 代理页面状态
pub type ProxiesState = TableState<Proxy>;

impl TableState<Proxy> {
    /// 各状态的代理数量
    pub fn status_counts(&self) -> Vec<(ProxyStatus, usize)> {
        let mut counts: Vec<(ProxyStatus, usize)> =
            ProxyStatus::all().iter().map(|status| (*status, 0)).collect();
        let mut unknown = 0;

        for proxy in self.records() {
            match counts.iter_mut().find(|(status, _)| *status == proxy.status) {
                Some((_, count)) => *count += 1,
                None => unknown += 1,
            }
        }

        if unknown > 0 {
            counts.push((ProxyStatus::Unknown, unknown));
        }
        counts
    }

    /// 追加候选代理
    ///
    /// 与已有代理或同批候选地址相同的条目被跳过。返回实际追加的代理。
    pub fn add_candidates(&mut self, candidates: Vec<Proxy>) -> Vec<Proxy> {
        let mut seen: HashSet<ProxyAddr> = self.records().iter().map(|p| p.addr.clone()).collect();
        let added: Vec<Proxy> = candidates
            .into_iter()
            .filter(|proxy| {
                let fresh = seen.insert(proxy.addr.clone());
                if !fresh {
                    log::debug!("skipping duplicate proxy {}", proxy.addr);
                }
                fresh
            })
            .collect();

        self.extend(added.iter().cloned());
        added
    }

    /// 标记为检测中
    pub fn mark_checking(&mut self, addr: &ProxyAddr) -> bool {
        match self.find_mut(&RecordKey::Proxy(addr.clone())) {
            Some(proxy) => {
                proxy.status = ProxyStatus::Checking;
                proxy.speed = None;
                true
            }
            None => false,
        }
    }

    /// 写入检测结果
    pub fn apply_check(&mut self, addr: &ProxyAddr, check: &ProxyCheck) -> bool {
        match self.find_mut(&RecordKey::Proxy(addr.clone())) {
            Some(proxy) => {
                proxy.apply_check(check);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{proxy, ts};
    use syka_core::types::parse_proxy_list;

    fn state() -> ProxiesState {
        let mut state = ProxiesState::new(10);
        state.set_records(vec![
            proxy("192.168.1.1", 8080, ProxyStatus::Working),
            proxy("10.0.0.5", 3128, ProxyStatus::Dead),
        ]);
        state
    }

    #[test]
    fn add_skips_existing_and_repeated_addresses() {
        let mut state = state();
        let candidates = parse_proxy_list(
            "http://192.168.1.1:8080\n1.2.3.4:80\nsocks5://1.2.3.4:80\n5.6.7.8:1080",
            ts(),
        );
        let added = state.add_candidates(candidates);

        let addrs: Vec<String> = added.iter().map(|p| p.addr.to_string()).collect();
        assert_eq!(addrs, vec!["1.2.3.4:80", "5.6.7.8:1080"]);
        assert_eq!(state.records().len(), 4);
        assert!(added.iter().all(|p| p.status == ProxyStatus::Checking));
    }

    #[test]
    fn check_result_updates_record() {
        let mut state = state();
        let addr = ProxyAddr::new("10.0.0.5", 3128);

        assert!(state.mark_checking(&addr));
        assert_eq!(state.records()[1].status, ProxyStatus::Checking);

        let check = ProxyCheck {
            status: ProxyStatus::Working,
            speed: Some(42),
            checked_at: ts(),
            error: None,
        };
        assert!(state.apply_check(&addr, &check));
        assert_eq!(state.records()[1].speed, Some(42));

        assert!(!state.mark_checking(&ProxyAddr::new("8.8.8.8", 1)));
    }

    #[test]
    fn counts_by_status() {
        let counts = state().status_counts();
        assert!(counts.contains(&(ProxyStatus::Working, 1)));
        assert!(counts.contains(&(ProxyStatus::Dead, 1)));
        assert!(counts.contains(&(ProxyStatus::Checking, 0)));
    }
}
