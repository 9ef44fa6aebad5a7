//! 账号表格状态

use syka_core::types::{Account, AccountStatus};

use super::TableState;

/// 账号页面状态
pub type AccountsState = TableState<Account>;

impl TableState<Account> {
    /// 各状态的账号数量
    pub fn status_counts(&self) -> Vec<(AccountStatus, usize)> {
        let mut counts: Vec<(AccountStatus, usize)> =
            AccountStatus::all().iter().map(|status| (*status, 0)).collect();
        let mut unknown = 0;

        for account in self.records() {
            match counts.iter_mut().find(|(status, _)| *status == account.status) {
                Some((_, count)) => *count += 1,
                None => unknown += 1,
            }
        }

        if unknown > 0 {
            counts.push((AccountStatus::Unknown, unknown));
        }
        counts
    }
}
