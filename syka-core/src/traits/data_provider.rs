//! Data provider abstract Trait

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::types::{Account, Proxy, ProxyAddr, ProxyCheck, ProxyStatus, RecordKey};

/// Data Provider Trait
///
/// Read/write contract of the console's data source. The UI owns its own
/// copy of the collections and only forwards mutations here.
/// Provides a default memory implementation of `InMemoryDataProvider`.
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// List all accounts in display order
    async fn list_accounts(&self) -> CoreResult<Vec<Account>>;

    /// List all proxies in display order
    async fn list_proxies(&self) -> CoreResult<Vec<Proxy>>;

    /// Delete a record
    ///
    /// # Arguments
    /// * `key` - Identity of the record
    async fn delete(&self, key: &RecordKey) -> CoreResult<()>;

    /// Append proxies
    ///
    /// Proxies whose address already exists are rejected as a whole batch.
    async fn create_proxies(&self, proxies: &[Proxy]) -> CoreResult<()>;

    /// Check whether a proxy is reachable
    async fn test_proxy(&self, addr: &ProxyAddr) -> CoreResult<ProxyCheck>;
}

#[derive(Default)]
struct Store {
    accounts: Vec<Account>,
    proxies: Vec<Proxy>,
}

/// In-memory data provider
///
/// Stand-in used until a real backend is wired in. Proxy checks are
/// simulated: a proxy stored as dead stays dead, everything else answers
/// with a latency derived from its address.
#[derive(Clone)]
pub struct InMemoryDataProvider {
    store: Arc<RwLock<Store>>,
    clock: fn() -> NaiveDateTime,
}

impl InMemoryDataProvider {
    /// Create an empty provider
    #[must_use]
    pub fn new() -> Self {
        Self::with_data(Vec::new(), Vec::new())
    }

    /// Create a provider seeded with the given collections
    #[must_use]
    pub fn with_data(accounts: Vec<Account>, proxies: Vec<Proxy>) -> Self {
        Self {
            store: Arc::new(RwLock::new(Store { accounts, proxies })),
            clock: || chrono::Local::now().naive_local(),
        }
    }

    /// Replace the clock used for check timestamps
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    fn simulated_latency(addr: &ProxyAddr) -> u32 {
        let mut hasher = DefaultHasher::new();
        addr.hash(&mut hasher);
        // 40..=239 ms
        40 + u32::try_from(hasher.finish() % 200).unwrap_or_default()
    }
}

impl Default for InMemoryDataProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataProvider for InMemoryDataProvider {
    async fn list_accounts(&self) -> CoreResult<Vec<Account>> {
        Ok(self.store.read().await.accounts.clone())
    }

    async fn list_proxies(&self) -> CoreResult<Vec<Proxy>> {
        Ok(self.store.read().await.proxies.clone())
    }

    async fn delete(&self, key: &RecordKey) -> CoreResult<()> {
        let mut store = self.store.write().await;
        let before = store.accounts.len() + store.proxies.len();
        match key {
            RecordKey::Account(id) => store.accounts.retain(|a| a.id != *id),
            RecordKey::Proxy(addr) => store.proxies.retain(|p| p.addr != *addr),
        }
        if store.accounts.len() + store.proxies.len() == before {
            return Err(CoreError::RecordNotFound(key.to_string()));
        }
        Ok(())
    }

    async fn create_proxies(&self, proxies: &[Proxy]) -> CoreResult<()> {
        let mut store = self.store.write().await;
        if let Some(dup) = proxies
            .iter()
            .find(|new| store.proxies.iter().any(|p| p.addr == new.addr))
        {
            return Err(CoreError::DuplicateRecord(dup.addr.to_string()));
        }
        store.proxies.extend_from_slice(proxies);
        Ok(())
    }

    async fn test_proxy(&self, addr: &ProxyAddr) -> CoreResult<ProxyCheck> {
        let mut store = self.store.write().await;
        let checked_at = (self.clock)();
        let proxy = store
            .proxies
            .iter_mut()
            .find(|p| p.addr == *addr)
            .ok_or_else(|| CoreError::RecordNotFound(addr.to_string()))?;

        let check = if proxy.status == ProxyStatus::Dead {
            ProxyCheck {
                status: ProxyStatus::Dead,
                speed: None,
                checked_at,
                error: Some("connection refused".to_string()),
            }
        } else {
            ProxyCheck {
                status: ProxyStatus::Working,
                speed: Some(Self::simulated_latency(addr)),
                checked_at,
                error: None,
            }
        };
        proxy.apply_check(&check);
        log::debug!("proxy {addr} checked: {:?}", check.status);
        Ok(check)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{numbered_accounts, proxy, ts};

    fn provider() -> InMemoryDataProvider {
        InMemoryDataProvider::with_data(
            numbered_accounts(3),
            vec![
                proxy("192.168.1.1", 8080, ProxyStatus::Working),
                proxy("10.0.0.5", 3128, ProxyStatus::Dead),
            ],
        )
        .with_clock(ts)
    }

    #[tokio::test]
    async fn delete_removes_only_target() {
        let p = provider();
        p.delete(&RecordKey::Account(2)).await.unwrap();
        let ids: Vec<u64> = p.list_accounts().await.unwrap().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(p.list_proxies().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let p = provider();
        let result = p.delete(&RecordKey::Account(99)).await;
        assert!(matches!(result, Err(CoreError::RecordNotFound(_))));
    }

    #[tokio::test]
    async fn create_rejects_duplicates() {
        let p = provider();
        let result = p
            .create_proxies(&[proxy("192.168.1.1", 8080, ProxyStatus::Checking)])
            .await;
        assert!(matches!(result, Err(CoreError::DuplicateRecord(_))));

        p.create_proxies(&[proxy("1.1.1.1", 80, ProxyStatus::Checking)])
            .await
            .unwrap();
        assert_eq!(p.list_proxies().await.unwrap().len(), 3);
    }

    #[test]
    fn test_proxy_reports_dead_and_working() {
        let p = provider();

        let dead = tokio_test::block_on(p.test_proxy(&ProxyAddr::new("10.0.0.5", 3128))).unwrap();
        assert_eq!(dead.status, ProxyStatus::Dead);
        assert_eq!(dead.speed, None);

        let alive = tokio_test::block_on(p.test_proxy(&ProxyAddr::new("192.168.1.1", 8080))).unwrap();
        assert_eq!(alive.status, ProxyStatus::Working);
        let speed = alive.speed.unwrap();
        assert!((40..240).contains(&speed));
        assert_eq!(alive.checked_at, ts());
    }

    #[test]
    fn test_unknown_proxy_fails() {
        let p = provider();
        let result = tokio_test::block_on(p.test_proxy(&ProxyAddr::new("8.8.8.8", 1)));
        assert!(matches!(result, Err(CoreError::RecordNotFound(_))));
    }
}
