//! 类型定义模块

mod account;
mod proxy;
mod record;

pub use account::{Account, AccountStatus};
pub use proxy::{
    parse_proxy_line, parse_proxy_list, Proxy, ProxyAddr, ProxyCheck, ProxyKind, ProxyStatus,
    DEFAULT_PROXY_PORT,
};
pub use record::{RecordKey, TableRecord, Tag};
