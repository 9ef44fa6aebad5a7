//! Data source abstraction trait definition

mod data_provider;

pub use data_provider::{DataProvider, InMemoryDataProvider};
