//! Catalog Service - orchestration layer
//!
//! Every operation runs a single repository call inside a unit-of-work scope
//! (see [`execute_safe`]). Reads map present results to DTOs and wrap pages in
//! an envelope that echoes the caller's paging parameters; writes hand the
//! repository's answer back untouched.

use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::instrument;

use crate::mapping::CatalogMapper;
use crate::models::{
    CatalogBrandDto, CatalogItemDto, CatalogItemInput, CatalogTypeDto, PaginatedItemsResponse,
};
use crate::repository::{CatalogBrandRepository, CatalogItemRepository, CatalogTypeRepository};
use crate::transaction::{UnitOfWork, execute_safe};

pub struct CatalogService<U, I, B, T>
where
    U: UnitOfWork,
    I: CatalogItemRepository,
    B: CatalogBrandRepository,
    T: CatalogTypeRepository,
{
    unit_of_work: Arc<U>,
    items: Arc<I>,
    brands: Arc<B>,
    types: Arc<T>,
    mapper: CatalogMapper,
}

impl<U, I, B, T> CatalogService<U, I, B, T>
where
    U: UnitOfWork,
    I: CatalogItemRepository,
    B: CatalogBrandRepository,
    T: CatalogTypeRepository,
{
    pub fn new(unit_of_work: U, items: I, brands: B, types: T, mapper: CatalogMapper) -> Self {
        Self {
            unit_of_work: Arc::new(unit_of_work),
            items: Arc::new(items),
            brands: Arc::new(brands),
            types: Arc::new(types),
            mapper,
        }
    }

    // ------------------------------------------------------------------------
    // Items
    // ------------------------------------------------------------------------

    /// List one page of catalog items
    #[instrument(skip(self))]
    pub async fn get_catalog_items(
        &self,
        page_size: u32,
        page_index: u32,
    ) -> Option<PaginatedItemsResponse<CatalogItemDto>> {
        let page = execute_safe(self.unit_of_work.as_ref(), "get_catalog_items", || {
            self.items.get_by_page(page_index, page_size)
        })
        .await?;

        Some(PaginatedItemsResponse::from_page(
            page,
            page_index,
            page_size,
            |item| self.mapper.item_dto(item),
        ))
    }

    /// Get a catalog item by ID
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i32) -> Option<CatalogItemDto> {
        execute_safe(self.unit_of_work.as_ref(), "get_by_id", || {
            self.items.get_by_id(id)
        })
        .await
        .map(|item| self.mapper.item_dto(item))
    }

    /// List one page of the items of a brand
    #[instrument(skip(self))]
    pub async fn get_by_brand(
        &self,
        page_size: u32,
        page_index: u32,
        brand: &str,
    ) -> Option<PaginatedItemsResponse<CatalogItemDto>> {
        let page = execute_safe(self.unit_of_work.as_ref(), "get_by_brand", || {
            self.items.get_by_brand(page_index, page_size, brand)
        })
        .await?;

        Some(PaginatedItemsResponse::from_page(
            page,
            page_index,
            page_size,
            |item| self.mapper.item_dto(item),
        ))
    }

    /// List one page of the items of a type
    #[instrument(skip(self))]
    pub async fn get_by_type(
        &self,
        page_size: u32,
        page_index: u32,
        type_name: &str,
    ) -> Option<PaginatedItemsResponse<CatalogItemDto>> {
        let page = execute_safe(self.unit_of_work.as_ref(), "get_by_type", || {
            self.items.get_by_type(page_index, page_size, type_name)
        })
        .await?;

        Some(PaginatedItemsResponse::from_page(
            page,
            page_index,
            page_size,
            |item| self.mapper.item_dto(item),
        ))
    }

    /// Create a catalog item, returning its identity
    #[allow(clippy::too_many_arguments)]
    #[instrument(skip(self, description))]
    pub async fn create_product(
        &self,
        name: &str,
        description: &str,
        price: Decimal,
        available_stock: i32,
        catalog_brand_id: i32,
        catalog_type_id: i32,
        picture_file_name: &str,
    ) -> Option<i32> {
        let input = CatalogItemInput {
            name: name.to_string(),
            description: description.to_string(),
            price,
            available_stock,
            catalog_brand_id,
            catalog_type_id,
            picture_file_name: picture_file_name.to_string(),
        };

        execute_safe(self.unit_of_work.as_ref(), "create_product", || {
            self.items.add_item(input)
        })
        .await
    }

    /// Replace a catalog item
    #[allow(clippy::too_many_arguments)]
    #[instrument(skip(self, description))]
    pub async fn update_item(
        &self,
        id: i32,
        name: &str,
        description: &str,
        price: Decimal,
        available_stock: i32,
        catalog_brand_id: i32,
        catalog_type_id: i32,
        picture_file_name: &str,
    ) -> Option<String> {
        let input = CatalogItemInput {
            name: name.to_string(),
            description: description.to_string(),
            price,
            available_stock,
            catalog_brand_id,
            catalog_type_id,
            picture_file_name: picture_file_name.to_string(),
        };

        execute_safe(self.unit_of_work.as_ref(), "update_item", || {
            self.items.update_item(id, input)
        })
        .await
    }

    /// Remove a catalog item
    #[instrument(skip(self))]
    pub async fn remove_item(&self, id: i32) -> Option<String> {
        execute_safe(self.unit_of_work.as_ref(), "remove_item", || {
            self.items.remove_item(id)
        })
        .await
    }

    // ------------------------------------------------------------------------
    // Brands
    // ------------------------------------------------------------------------

    /// List one page of brands
    #[instrument(skip(self))]
    pub async fn get_brands(
        &self,
        page_size: u32,
        page_index: u32,
    ) -> Option<PaginatedItemsResponse<CatalogBrandDto>> {
        let page = execute_safe(self.unit_of_work.as_ref(), "get_brands", || {
            self.items.get_brands(page_index, page_size)
        })
        .await?;

        Some(PaginatedItemsResponse::from_page(
            page,
            page_index,
            page_size,
            CatalogBrandDto::from,
        ))
    }

    #[instrument(skip(self))]
    pub async fn add_brand(&self, brand: &str) -> Option<i32> {
        execute_safe(self.unit_of_work.as_ref(), "add_brand", || {
            self.brands.add_brand(brand)
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn update_brand(&self, id: i32, brand: &str) -> Option<String> {
        execute_safe(self.unit_of_work.as_ref(), "update_brand", || {
            self.brands.update_brand(id, brand)
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn remove_brand(&self, id: i32) -> Option<String> {
        execute_safe(self.unit_of_work.as_ref(), "remove_brand", || {
            self.brands.remove_brand(id)
        })
        .await
    }

    // ------------------------------------------------------------------------
    // Types
    // ------------------------------------------------------------------------

    /// List one page of types
    #[instrument(skip(self))]
    pub async fn get_types(
        &self,
        page_size: u32,
        page_index: u32,
    ) -> Option<PaginatedItemsResponse<CatalogTypeDto>> {
        let page = execute_safe(self.unit_of_work.as_ref(), "get_types", || {
            self.items.get_types(page_index, page_size)
        })
        .await?;

        Some(PaginatedItemsResponse::from_page(
            page,
            page_index,
            page_size,
            CatalogTypeDto::from,
        ))
    }

    #[instrument(skip(self))]
    pub async fn add_type(&self, type_name: &str) -> Option<i32> {
        execute_safe(self.unit_of_work.as_ref(), "add_type", || {
            self.types.add_type(type_name)
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn update_type(&self, id: i32, type_name: &str) -> Option<String> {
        execute_safe(self.unit_of_work.as_ref(), "update_type", || {
            self.types.update_type(id, type_name)
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn remove_type(&self, id: i32) -> Option<String> {
        execute_safe(self.unit_of_work.as_ref(), "remove_type", || {
            self.types.remove_type(id)
        })
        .await
    }
}

impl<U, I, B, T> Clone for CatalogService<U, I, B, T>
where
    U: UnitOfWork,
    I: CatalogItemRepository,
    B: CatalogBrandRepository,
    T: CatalogTypeRepository,
{
    fn clone(&self) -> Self {
        Self {
            unit_of_work: Arc::clone(&self.unit_of_work),
            items: Arc::clone(&self.items),
            brands: Arc::clone(&self.brands),
            types: Arc::clone(&self.types),
            mapper: self.mapper.clone(),
        }
    }
}
