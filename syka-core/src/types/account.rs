//! 账号相关类型定义

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{RecordKey, TableRecord, Tag};

/// 账号状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    /// 活跃
    #[default]
    Active,
    /// 已封禁
    Banned,
    /// 检查中
    Checking,
    /// 数据源给出的未知状态
    #[serde(other)]
    Unknown,
}

impl AccountStatus {
    /// 状态 → 标签查找表
    pub fn tag(self) -> Tag {
        match self {
            Self::Active => Tag::Success,
            Self::Banned => Tag::Danger,
            Self::Checking => Tag::Warning,
            Self::Unknown => Tag::Neutral,
        }
    }

    /// 状态的原始文本
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Banned => "banned",
            Self::Checking => "checking",
            Self::Unknown => "unknown",
        }
    }

    /// 所有已知状态（用于统计）
    pub fn all() -> &'static [AccountStatus] {
        &[Self::Active, Self::Banned, Self::Checking]
    }
}

/// 账号
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// 账号 ID（创建时分配，之后不变）
    pub id: u64,
    /// 手机号
    pub phone: String,
    /// 用户名（不含 @）
    pub username: String,
    /// 状态
    pub status: AccountStatus,
    /// 最后活跃日期
    pub last_activity: NaiveDate,
}

impl TableRecord for Account {
    fn key(&self) -> RecordKey {
        RecordKey::Account(self.id)
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(&self.phone), Cow::Borrowed(&self.username)]
    }

    fn tag(&self) -> Tag {
        self.status.tag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_tags() {
        assert_eq!(AccountStatus::Active.tag(), Tag::Success);
        assert_eq!(AccountStatus::Banned.tag(), Tag::Danger);
        assert_eq!(AccountStatus::Checking.tag(), Tag::Warning);
        assert_eq!(AccountStatus::Unknown.tag(), Tag::Neutral);
    }

    #[test]
    fn unknown_status_deserializes_to_neutral() {
        let json = r#"{"id":7,"phone":"+79261234567","username":"bob","status":"frozen","lastActivity":"2024-05-20"}"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.status, AccountStatus::Unknown);
        assert_eq!(account.tag(), Tag::Neutral);
    }

    #[test]
    fn key_is_id() {
        let account = crate::test_utils::account(42, "+7926", "alice", AccountStatus::Active);
        assert_eq!(account.key(), RecordKey::Account(42));
    }
}
