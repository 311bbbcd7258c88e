//! In-memory catalog store (for development/testing)
//!
//! One table set backs all three repositories and the unit of work, so a
//! single [`InMemoryCatalog`] can be cloned into every slot of
//! [`crate::CatalogService`].

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{
    CatalogBrand, CatalogItem, CatalogItemInput, CatalogType, PaginatedItems, STATUS_SUCCESS,
};
use crate::repository::{CatalogBrandRepository, CatalogItemRepository, CatalogTypeRepository};
use crate::transaction::{Transaction, UnitOfWork};

#[derive(Debug, Default)]
struct Tables {
    items: BTreeMap<i32, CatalogItem>,
    brands: BTreeMap<i32, CatalogBrand>,
    types: BTreeMap<i32, CatalogType>,
    last_item_id: i32,
    last_brand_id: i32,
    last_type_id: i32,
}

impl Tables {
    /// Attach the brand and type rows an item points at
    fn resolve(&self, item: &CatalogItem) -> CatalogItem {
        CatalogItem {
            catalog_brand: self.brands.get(&item.catalog_brand_id).cloned(),
            catalog_type: self.types.get(&item.catalog_type_id).cloned(),
            ..item.clone()
        }
    }

    fn check_references(&self, input: &CatalogItemInput) -> CatalogResult<()> {
        if !self.brands.contains_key(&input.catalog_brand_id) {
            return Err(CatalogError::NotFound {
                entity: "brand",
                id: input.catalog_brand_id,
            });
        }
        if !self.types.contains_key(&input.catalog_type_id) {
            return Err(CatalogError::NotFound {
                entity: "type",
                id: input.catalog_type_id,
            });
        }
        Ok(())
    }

    fn insert_brand(&mut self, brand: &str) -> CatalogResult<i32> {
        let id = next_id(&mut self.last_brand_id, "brand")?;
        self.brands.insert(
            id,
            CatalogBrand {
                id,
                brand: brand.to_string(),
            },
        );
        Ok(id)
    }

    fn insert_type(&mut self, type_name: &str) -> CatalogResult<i32> {
        let id = next_id(&mut self.last_type_id, "type")?;
        self.types.insert(
            id,
            CatalogType {
                id,
                r#type: type_name.to_string(),
            },
        );
        Ok(id)
    }

    fn insert_item(&mut self, input: CatalogItemInput) -> CatalogResult<i32> {
        let id = next_id(&mut self.last_item_id, "item")?;
        self.items.insert(id, item_from_input(id, input));
        Ok(id)
    }

    /// Items matching `predicate`, resolved and ordered by id
    fn select_items(&self, predicate: impl Fn(&CatalogItem) -> bool) -> Vec<CatalogItem> {
        self.items
            .values()
            .map(|item| self.resolve(item))
            .filter(|item| predicate(item))
            .collect()
    }
}

/// Advance an identity counter, refusing to wrap past `i32::MAX`
fn next_id(last: &mut i32, entity: &str) -> CatalogResult<i32> {
    let id = last
        .checked_add(1)
        .ok_or_else(|| CatalogError::Database(format!("{} identities exhausted", entity)))?;
    *last = id;
    Ok(id)
}

fn item_from_input(id: i32, input: CatalogItemInput) -> CatalogItem {
    CatalogItem {
        id,
        name: input.name,
        description: input.description,
        price: input.price,
        available_stock: input.available_stock,
        catalog_brand_id: input.catalog_brand_id,
        catalog_brand: None,
        catalog_type_id: input.catalog_type_id,
        catalog_type: None,
        picture_file_name: input.picture_file_name,
    }
}

fn paginate<T>(rows: Vec<T>, page_index: u32, page_size: u32) -> PaginatedItems<T> {
    let total_count = rows.len() as u64;
    let skip = (page_index as usize).saturating_mul(page_size as usize);

    PaginatedItems {
        data: rows.into_iter().skip(skip).take(page_size as usize).collect(),
        total_count,
    }
}

/// In-memory implementation of the catalog repositories
#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalog {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with a handful of brands, types and items
    pub fn with_seed_data() -> Self {
        let mut tables = Tables::default();

        let brands = ["Azure", ".NET", "Visual Studio", "SQL Server", "Other"];
        for (id, brand) in (1..).zip(brands) {
            tables.brands.insert(
                id,
                CatalogBrand {
                    id,
                    brand: brand.to_string(),
                },
            );
            tables.last_brand_id = id;
        }

        let types = ["Mug", "T-Shirt", "Sheet", "USB Memory Stick"];
        for (id, type_name) in (1..).zip(types) {
            tables.types.insert(
                id,
                CatalogType {
                    id,
                    r#type: type_name.to_string(),
                },
            );
            tables.last_type_id = id;
        }

        let items = [
            (".NET Bot Black Hoodie", 1950, 2, 2),
            (".NET Black & White Mug", 850, 1, 2),
            ("Prism White T-Shirt", 1200, 2, 5),
            (".NET Foundation T-shirt", 1200, 2, 2),
            ("Roslyn Red Sheet", 850, 3, 5),
            (".NET Blue Hoodie", 1200, 2, 2),
        ];
        for (id, (name, cents, type_id, brand_id)) in (1..).zip(items) {
            let input = CatalogItemInput {
                name: name.to_string(),
                description: name.to_string(),
                price: Decimal::new(cents, 2),
                available_stock: 100,
                catalog_brand_id: brand_id,
                catalog_type_id: type_id,
                picture_file_name: format!("{}.png", id),
            };
            tables.items.insert(id, item_from_input(id, input));
            tables.last_item_id = id;
        }

        Self {
            tables: Arc::new(RwLock::new(tables)),
        }
    }
}

#[async_trait]
impl CatalogItemRepository for InMemoryCatalog {
    async fn get_by_page(
        &self,
        page_index: u32,
        page_size: u32,
    ) -> CatalogResult<Option<PaginatedItems<CatalogItem>>> {
        let tables = self.tables.read().await;
        let rows = tables.select_items(|_| true);
        Ok(Some(paginate(rows, page_index, page_size)))
    }

    async fn get_by_id(&self, id: i32) -> CatalogResult<Option<CatalogItem>> {
        let tables = self.tables.read().await;
        Ok(tables.items.get(&id).map(|item| tables.resolve(item)))
    }

    async fn get_by_brand(
        &self,
        page_index: u32,
        page_size: u32,
        brand: &str,
    ) -> CatalogResult<Option<PaginatedItems<CatalogItem>>> {
        let tables = self.tables.read().await;
        let rows = tables.select_items(|item| {
            item.catalog_brand
                .as_ref()
                .is_some_and(|catalog_brand| catalog_brand.brand == brand)
        });
        Ok(Some(paginate(rows, page_index, page_size)))
    }

    async fn get_by_type(
        &self,
        page_index: u32,
        page_size: u32,
        type_name: &str,
    ) -> CatalogResult<Option<PaginatedItems<CatalogItem>>> {
        let tables = self.tables.read().await;
        let rows = tables.select_items(|item| {
            item.catalog_type
                .as_ref()
                .is_some_and(|catalog_type| catalog_type.r#type == type_name)
        });
        Ok(Some(paginate(rows, page_index, page_size)))
    }

    async fn get_brands(
        &self,
        page_index: u32,
        page_size: u32,
    ) -> CatalogResult<Option<PaginatedItems<CatalogBrand>>> {
        let tables = self.tables.read().await;
        let rows = tables.brands.values().cloned().collect();
        Ok(Some(paginate(rows, page_index, page_size)))
    }

    async fn get_types(
        &self,
        page_index: u32,
        page_size: u32,
    ) -> CatalogResult<Option<PaginatedItems<CatalogType>>> {
        let tables = self.tables.read().await;
        let rows = tables.types.values().cloned().collect();
        Ok(Some(paginate(rows, page_index, page_size)))
    }

    async fn add_item(&self, input: CatalogItemInput) -> CatalogResult<Option<i32>> {
        let mut tables = self.tables.write().await;
        tables.check_references(&input)?;

        let id = tables.insert_item(input)?;
        tracing::info!(item_id = id, "Created catalog item");
        Ok(Some(id))
    }

    async fn update_item(
        &self,
        id: i32,
        input: CatalogItemInput,
    ) -> CatalogResult<Option<String>> {
        let mut tables = self.tables.write().await;
        if !tables.items.contains_key(&id) {
            return Ok(None);
        }
        tables.check_references(&input)?;

        tables.items.insert(id, item_from_input(id, input));
        tracing::info!(item_id = id, "Updated catalog item");
        Ok(Some(STATUS_SUCCESS.to_string()))
    }

    async fn remove_item(&self, id: i32) -> CatalogResult<Option<String>> {
        let mut tables = self.tables.write().await;
        if tables.items.remove(&id).is_none() {
            return Ok(None);
        }

        tracing::info!(item_id = id, "Removed catalog item");
        Ok(Some(STATUS_SUCCESS.to_string()))
    }
}

#[async_trait]
impl CatalogBrandRepository for InMemoryCatalog {
    async fn add_brand(&self, brand: &str) -> CatalogResult<Option<i32>> {
        let id = self.tables.write().await.insert_brand(brand)?;
        tracing::info!(brand_id = id, "Created catalog brand");
        Ok(Some(id))
    }

    async fn update_brand(&self, id: i32, brand: &str) -> CatalogResult<Option<String>> {
        let mut tables = self.tables.write().await;
        let Some(row) = tables.brands.get_mut(&id) else {
            return Ok(None);
        };

        row.brand = brand.to_string();
        tracing::info!(brand_id = id, "Updated catalog brand");
        Ok(Some(STATUS_SUCCESS.to_string()))
    }

    async fn remove_brand(&self, id: i32) -> CatalogResult<Option<String>> {
        let mut tables = self.tables.write().await;
        if !tables.brands.contains_key(&id) {
            return Ok(None);
        }
        if tables.items.values().any(|item| item.catalog_brand_id == id) {
            return Err(CatalogError::Conflict(format!(
                "brand {} is still referenced by catalog items",
                id
            )));
        }

        tables.brands.remove(&id);
        tracing::info!(brand_id = id, "Removed catalog brand");
        Ok(Some(STATUS_SUCCESS.to_string()))
    }
}

#[async_trait]
impl CatalogTypeRepository for InMemoryCatalog {
    async fn add_type(&self, type_name: &str) -> CatalogResult<Option<i32>> {
        let id = self.tables.write().await.insert_type(type_name)?;
        tracing::info!(type_id = id, "Created catalog type");
        Ok(Some(id))
    }

    async fn update_type(&self, id: i32, type_name: &str) -> CatalogResult<Option<String>> {
        let mut tables = self.tables.write().await;
        let Some(row) = tables.types.get_mut(&id) else {
            return Ok(None);
        };

        row.r#type = type_name.to_string();
        tracing::info!(type_id = id, "Updated catalog type");
        Ok(Some(STATUS_SUCCESS.to_string()))
    }

    async fn remove_type(&self, id: i32) -> CatalogResult<Option<String>> {
        let mut tables = self.tables.write().await;
        if !tables.types.contains_key(&id) {
            return Ok(None);
        }
        if tables.items.values().any(|item| item.catalog_type_id == id) {
            return Err(CatalogError::Conflict(format!(
                "type {} is still referenced by catalog items",
                id
            )));
        }

        tables.types.remove(&id);
        tracing::info!(type_id = id, "Removed catalog type");
        Ok(Some(STATUS_SUCCESS.to_string()))
    }
}

/// Every repository call already holds the table lock for its whole duration,
/// so transactions here only mark scope boundaries in the logs.
#[derive(Debug)]
pub struct InMemoryTransaction;

#[async_trait]
impl Transaction for InMemoryTransaction {
    async fn commit(&mut self) -> CatalogResult<()> {
        tracing::debug!("In-memory transaction committed");
        Ok(())
    }

    async fn rollback(&mut self) -> CatalogResult<()> {
        tracing::debug!("In-memory transaction rolled back");
        Ok(())
    }
}

#[async_trait]
impl UnitOfWork for InMemoryCatalog {
    async fn begin_transaction(&self) -> CatalogResult<Box<dyn Transaction>> {
        tracing::debug!("In-memory transaction started");
        Ok(Box::new(InMemoryTransaction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mug_input(brand_id: i32, type_id: i32) -> CatalogItemInput {
        CatalogItemInput {
            name: "Mug".to_string(),
            description: "Ceramic".to_string(),
            price: Decimal::new(850, 2),
            available_stock: 10,
            catalog_brand_id: brand_id,
            catalog_type_id: type_id,
            picture_file_name: "mug.png".to_string(),
        }
    }

    #[test]
    fn test_paginate_skips_whole_pages() {
        let page = paginate((1..=10).collect(), 1, 4);
        assert_eq!(page.data, vec![5, 6, 7, 8]);
        assert_eq!(page.total_count, 10);

        let last = paginate((1..=10).collect(), 2, 4);
        assert_eq!(last.data, vec![9, 10]);

        let beyond = paginate((1..=10).collect::<Vec<i32>>(), 1000, 10000);
        assert!(beyond.data.is_empty());
        assert_eq!(beyond.total_count, 10);
    }

    #[tokio::test]
    async fn test_identities_are_sequential() {
        let repo = InMemoryCatalog::new();

        assert_eq!(repo.add_brand("Azure").await.unwrap(), Some(1));
        assert_eq!(repo.add_brand(".NET").await.unwrap(), Some(2));
        assert_eq!(repo.add_type("Mug").await.unwrap(), Some(1));
    }

    #[tokio::test]
    async fn test_get_by_id_resolves_references() {
        let repo = InMemoryCatalog::new();
        let brand_id = repo.add_brand("Azure").await.unwrap().unwrap();
        let type_id = repo.add_type("Mug").await.unwrap().unwrap();
        let id = repo
            .add_item(mug_input(brand_id, type_id))
            .await
            .unwrap()
            .unwrap();

        let item = repo.get_by_id(id).await.unwrap().unwrap();

        assert_eq!(item.catalog_brand.map(|b| b.brand), Some("Azure".to_string()));
        assert_eq!(item.catalog_type.map(|t| t.r#type), Some("Mug".to_string()));
    }

    #[tokio::test]
    async fn test_add_item_with_unknown_brand_fails() {
        let repo = InMemoryCatalog::new();
        let type_id = repo.add_type("Mug").await.unwrap().unwrap();

        let result = repo.add_item(mug_input(99, type_id)).await;

        assert!(matches!(
            result,
            Err(CatalogError::NotFound { entity: "brand", id: 99 })
        ));
    }

    #[tokio::test]
    async fn test_add_item_with_unknown_type_fails() {
        let repo = InMemoryCatalog::new();
        let brand_id = repo.add_brand("Azure").await.unwrap().unwrap();

        let result = repo.add_item(mug_input(brand_id, 42)).await;

        assert!(matches!(
            result,
            Err(CatalogError::NotFound { entity: "type", id: 42 })
        ));
        assert_eq!(repo.get_by_page(0, 10).await.unwrap().unwrap().total_count, 0);
    }

    #[tokio::test]
    async fn test_update_item_with_unknown_references_fails() {
        let repo = InMemoryCatalog::with_seed_data();

        let unknown_brand = repo.update_item(1, mug_input(99, 1)).await;
        assert!(matches!(
            unknown_brand,
            Err(CatalogError::NotFound { entity: "brand", id: 99 })
        ));

        let unknown_type = repo.update_item(1, mug_input(1, 77)).await;
        assert!(matches!(
            unknown_type,
            Err(CatalogError::NotFound { entity: "type", id: 77 })
        ));

        let item = repo.get_by_id(1).await.unwrap().unwrap();
        assert_eq!(item.name, ".NET Bot Black Hoodie");
        assert_eq!(item.catalog_brand_id, 2);
    }

    #[tokio::test]
    async fn test_exhausted_identities_fail_without_wrapping() {
        let tables = Tables {
            last_brand_id: i32::MAX,
            last_type_id: i32::MAX,
            ..Tables::default()
        };
        let repo = InMemoryCatalog {
            tables: Arc::new(RwLock::new(tables)),
        };

        assert!(matches!(
            repo.add_brand("Overflow").await,
            Err(CatalogError::Database(_))
        ));
        assert!(matches!(
            repo.add_type("Overflow").await,
            Err(CatalogError::Database(_))
        ));
        assert_eq!(repo.get_brands(0, 10).await.unwrap().unwrap().total_count, 0);
    }

    #[tokio::test]
    async fn test_seed_data_continues_identities() {
        let repo = InMemoryCatalog::with_seed_data();

        assert_eq!(repo.add_brand("Contoso").await.unwrap(), Some(6));
        assert_eq!(repo.add_type("Poster").await.unwrap(), Some(5));
        assert_eq!(repo.add_item(mug_input(1, 1)).await.unwrap(), Some(7));
    }

    #[tokio::test]
    async fn test_missing_rows_report_absence() {
        let repo = InMemoryCatalog::new();

        assert_eq!(repo.get_by_id(1).await.unwrap(), None);
        assert_eq!(repo.update_item(1, mug_input(1, 1)).await.unwrap(), None);
        assert_eq!(repo.remove_item(1).await.unwrap(), None);
        assert_eq!(repo.update_brand(1, "x").await.unwrap(), None);
        assert_eq!(repo.remove_type(1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_referenced_brand_conflicts() {
        let repo = InMemoryCatalog::with_seed_data();

        let result = repo.remove_brand(2).await;

        assert!(matches!(result, Err(CatalogError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_transaction_scope_always_closes_cleanly() {
        let repo = InMemoryCatalog::new();

        let mut committed = repo.begin_transaction().await.unwrap();
        assert!(committed.commit().await.is_ok());

        let mut rolled_back = repo.begin_transaction().await.unwrap();
        assert!(rolled_back.rollback().await.is_ok());
    }

    #[tokio::test]
    async fn test_remove_referenced_type_conflicts() {
        let repo = InMemoryCatalog::with_seed_data();

        let result = repo.remove_type(2).await;

        assert!(matches!(result, Err(CatalogError::Conflict(_))));
        assert_eq!(repo.get_types(0, 10).await.unwrap().unwrap().total_count, 4);
    }

    #[tokio::test]
    async fn test_remove_unreferenced_type_succeeds() {
        let repo = InMemoryCatalog::with_seed_data();

        let status = repo.remove_type(4).await.unwrap();

        assert_eq!(status.as_deref(), Some(STATUS_SUCCESS));
        assert_eq!(repo.get_types(0, 10).await.unwrap().unwrap().total_count, 3);
    }

    #[tokio::test]
    async fn test_get_by_type_filters_on_exact_name() {
        let repo = InMemoryCatalog::with_seed_data();

        let page = repo.get_by_type(0, 10, "T-Shirt").await.unwrap().unwrap();
        assert_eq!(page.total_count, 4);

        let none = repo.get_by_type(0, 10, "t-shirt").await.unwrap().unwrap();
        assert_eq!(none.total_count, 0);
    }
}
