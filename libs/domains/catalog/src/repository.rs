use async_trait::async_trait;

use crate::error::CatalogResult;
use crate::models::{CatalogBrand, CatalogItem, CatalogItemInput, CatalogType, PaginatedItems};

/// Repository trait for catalog item persistence and catalog listings
///
/// `Ok(None)` means the storage layer had nothing to report (no page, no row,
/// no identity); `Err` is reserved for failures.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogItemRepository: Send + Sync {
    /// Get one page of items ordered by id
    async fn get_by_page(
        &self,
        page_index: u32,
        page_size: u32,
    ) -> CatalogResult<Option<PaginatedItems<CatalogItem>>>;

    /// Get an item by ID
    async fn get_by_id(&self, id: i32) -> CatalogResult<Option<CatalogItem>>;

    /// Get one page of items whose brand name equals `brand`
    async fn get_by_brand(
        &self,
        page_index: u32,
        page_size: u32,
        brand: &str,
    ) -> CatalogResult<Option<PaginatedItems<CatalogItem>>>;

    /// Get one page of items whose type name equals `type_name`
    async fn get_by_type(
        &self,
        page_index: u32,
        page_size: u32,
        type_name: &str,
    ) -> CatalogResult<Option<PaginatedItems<CatalogItem>>>;

    /// Get one page of brands
    async fn get_brands(
        &self,
        page_index: u32,
        page_size: u32,
    ) -> CatalogResult<Option<PaginatedItems<CatalogBrand>>>;

    /// Get one page of types
    async fn get_types(
        &self,
        page_index: u32,
        page_size: u32,
    ) -> CatalogResult<Option<PaginatedItems<CatalogType>>>;

    /// Insert an item, returning its identity
    async fn add_item(&self, input: CatalogItemInput) -> CatalogResult<Option<i32>>;

    /// Replace an item, returning a status token
    async fn update_item(&self, id: i32, input: CatalogItemInput)
    -> CatalogResult<Option<String>>;

    /// Delete an item, returning a status token
    async fn remove_item(&self, id: i32) -> CatalogResult<Option<String>>;
}

/// Repository trait for brand mutations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogBrandRepository: Send + Sync {
    async fn add_brand(&self, brand: &str) -> CatalogResult<Option<i32>>;

    async fn update_brand(&self, id: i32, brand: &str) -> CatalogResult<Option<String>>;

    async fn remove_brand(&self, id: i32) -> CatalogResult<Option<String>>;
}

/// Repository trait for type mutations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogTypeRepository: Send + Sync {
    async fn add_type(&self, type_name: &str) -> CatalogResult<Option<i32>>;

    async fn update_type(&self, id: i32, type_name: &str) -> CatalogResult<Option<String>>;

    async fn remove_type(&self, id: i32) -> CatalogResult<Option<String>>;
}
