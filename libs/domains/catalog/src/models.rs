use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Status token repositories report for a completed update or removal
pub const STATUS_SUCCESS: &str = "Success";

// ============================================================================
// Persistence entities
// ============================================================================

/// Catalog item as stored by the persistence layer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogItem {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub available_stock: i32,
    pub catalog_brand_id: i32,
    /// Resolved brand, when the repository loaded it
    pub catalog_brand: Option<CatalogBrand>,
    pub catalog_type_id: i32,
    /// Resolved type, when the repository loaded it
    pub catalog_type: Option<CatalogType>,
    pub picture_file_name: String,
}

/// Brand an item belongs to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogBrand {
    pub id: i32,
    pub brand: String,
}

/// Category an item belongs to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogType {
    pub id: i32,
    pub r#type: String,
}

/// Input for inserting or replacing an item
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItemInput {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub available_stock: i32,
    pub catalog_brand_id: i32,
    pub catalog_type_id: i32,
    pub picture_file_name: String,
}

/// One page of entities plus the number of entities matching the query
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedItems<T> {
    pub data: Vec<T>,
    pub total_count: u64,
}

// ============================================================================
// Transport DTOs
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItemDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    #[schema(value_type = String)]
    pub price: Decimal,
    pub picture_file_name: String,
    /// Public location of the picture, derived from `picture_file_name`
    pub picture_url: String,
    pub catalog_type: Option<CatalogTypeDto>,
    pub catalog_brand: Option<CatalogBrandDto>,
    pub available_stock: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogBrandDto {
    pub id: i32,
    pub brand: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogTypeDto {
    pub id: i32,
    pub r#type: String,
}

/// Caller-facing page envelope.
///
/// `page_index` and `page_size` echo the request; `count` is the total number
/// of matching entities, not the length of `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedItemsResponse<T> {
    pub data: Vec<T>,
    pub count: u64,
    pub page_index: u32,
    pub page_size: u32,
}

impl<T> PaginatedItemsResponse<T> {
    /// Build an envelope from a repository page, converting each entity with `map`
    pub fn from_page<E>(
        page: PaginatedItems<E>,
        page_index: u32,
        page_size: u32,
        map: impl FnMut(E) -> T,
    ) -> Self {
        Self {
            data: page.data.into_iter().map(map).collect(),
            count: page.total_count,
            page_index,
            page_size,
        }
    }
}
