//! Catalog Domain
//!
//! Orchestration layer for the catalog of an online shop: paged listings and
//! CRUD over catalog items, brands and types.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← Orchestration, entity → DTO mapping, page envelopes
//! └──────┬──────┘
//!        │  (inside a unit-of-work scope)
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (one trait per entity kind + in-memory store)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, paging types
//! └─────────────┘
//! ```
//!
//! Callers only ever see `Some(value)` or `None`: not-found and failure are
//! both reported as absence.
//!
//! # Usage
//!
//! ```rust,no_run
//! use core_config::FromEnv;
//! use domain_catalog::{CatalogConfig, CatalogMapper, CatalogService, InMemoryCatalog};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CatalogConfig::from_env()?;
//! config.init_tracing();
//!
//! let store = InMemoryCatalog::with_seed_data();
//!
//! let service = CatalogService::new(
//!     store.clone(),
//!     store.clone(),
//!     store.clone(),
//!     store,
//!     CatalogMapper::from_config(&config),
//! );
//!
//! let first_page = service.get_catalog_items(10, 0).await;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod mapping;
pub mod memory;
pub mod models;
pub mod repository;
pub mod service;
pub mod transaction;

// Re-export commonly used types
pub use config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
pub use mapping::CatalogMapper;
pub use memory::InMemoryCatalog;
pub use models::{
    CatalogBrand, CatalogBrandDto, CatalogItem, CatalogItemDto, CatalogItemInput, CatalogType,
    CatalogTypeDto, PaginatedItems, PaginatedItemsResponse, STATUS_SUCCESS,
};
pub use repository::{CatalogBrandRepository, CatalogItemRepository, CatalogTypeRepository};
pub use service::CatalogService;
pub use transaction::{Transaction, UnitOfWork, execute_safe};
