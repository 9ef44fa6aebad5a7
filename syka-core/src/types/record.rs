//! 记录通用类型：身份标识、状态标签、表格投影

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::ProxyAddr;

/// 记录身份
///
/// 行操作（删除、编辑、测试）携带的是身份而不是行号，
/// 因此在过滤、翻页或集合变化之后仍然指向同一条记录。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum RecordKey {
    /// 账号（按 id）
    Account(u64),
    /// 代理（按 ip:port）
    Proxy(ProxyAddr),
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Account(id) => write!(f, "account #{id}"),
            Self::Proxy(addr) => write!(f, "proxy {addr}"),
        }
    }
}

/// 状态视觉标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Success,
    Danger,
    Warning,
    /// 未知状态的中性标签
    Neutral,
}

/// 可被表格渲染管线处理的记录
pub trait TableRecord {
    /// 记录身份
    fn key(&self) -> RecordKey;

    /// 参与搜索的字段投影（按原样返回，大小写由过滤器处理）
    fn search_fields(&self) -> Vec<Cow<'_, str>>;

    /// 状态对应的视觉标签
    fn tag(&self) -> Tag;
}
