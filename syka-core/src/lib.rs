//! SYKA Core Library
//!
//! Platform-independent domain logic for the SYKA operator console:
//! - Record types (accounts, proxies) and their status tags
//! - The pure table rendering pipeline (filter, paginate, describe pages)
//! - Parsing of pasted proxy lists
//! - The data provider contract, with an in-memory implementation
//!
//! Nothing here knows about terminals or widgets; front-ends bind the
//! render models produced by [`table::render`] to their own toolkit.

pub mod error;
pub mod table;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use table::{render, PageLink, Pagination, SearchFilter, TableBody, TablePage};
pub use traits::{DataProvider, InMemoryDataProvider};
pub use types::{
    Account, AccountStatus, Proxy, ProxyAddr, ProxyCheck, ProxyKind, ProxyStatus, RecordKey, Tag,
    TableRecord,
};
