//! Entity → DTO conversions

use crate::config::CatalogConfig;
use crate::models::{
    CatalogBrand, CatalogBrandDto, CatalogItem, CatalogItemDto, CatalogType, CatalogTypeDto,
};

impl From<CatalogBrand> for CatalogBrandDto {
    fn from(brand: CatalogBrand) -> Self {
        Self {
            id: brand.id,
            brand: brand.brand,
        }
    }
}

impl From<CatalogType> for CatalogTypeDto {
    fn from(catalog_type: CatalogType) -> Self {
        Self {
            id: catalog_type.id,
            r#type: catalog_type.r#type,
        }
    }
}

/// Converts items to their transport form.
///
/// Items need the picture host, so unlike brands and types they are not a
/// plain `From` conversion.
#[derive(Debug, Clone)]
pub struct CatalogMapper {
    picture_base_url: String,
}

impl CatalogMapper {
    pub fn new(picture_base_url: impl Into<String>) -> Self {
        Self {
            picture_base_url: picture_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(config.picture_base_url.as_str())
    }

    pub fn picture_url(&self, picture_file_name: &str) -> String {
        format!("{}/{}", self.picture_base_url, picture_file_name)
    }

    pub fn item_dto(&self, item: CatalogItem) -> CatalogItemDto {
        CatalogItemDto {
            id: item.id,
            picture_url: self.picture_url(&item.picture_file_name),
            name: item.name,
            description: item.description,
            price: item.price,
            picture_file_name: item.picture_file_name,
            catalog_type: item.catalog_type.map(CatalogTypeDto::from),
            catalog_brand: item.catalog_brand.map(CatalogBrandDto::from),
            available_stock: item.available_stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn sample_item() -> CatalogItem {
        CatalogItem {
            id: 42,
            name: "Roslyn Red T-Shirt".to_string(),
            description: "Cotton".to_string(),
            price: Decimal::new(1250, 2),
            available_stock: 100,
            catalog_brand_id: 2,
            catalog_brand: Some(CatalogBrand {
                id: 2,
                brand: ".NET".to_string(),
            }),
            catalog_type_id: 2,
            catalog_type: Some(CatalogType {
                id: 2,
                r#type: "T-Shirt".to_string(),
            }),
            picture_file_name: "42.png".to_string(),
        }
    }

    #[test]
    fn test_item_dto_preserves_fields() {
        let mapper = CatalogMapper::new("http://cdn.example.com/assets/images");
        let dto = mapper.item_dto(sample_item());

        assert_eq!(dto.id, 42);
        assert_eq!(dto.name, "Roslyn Red T-Shirt");
        assert_eq!(dto.description, "Cotton");
        assert_eq!(dto.price, Decimal::new(1250, 2));
        assert_eq!(dto.available_stock, 100);
        assert_eq!(dto.picture_file_name, "42.png");
        assert_eq!(
            dto.catalog_brand,
            Some(CatalogBrandDto {
                id: 2,
                brand: ".NET".to_string()
            })
        );
        assert_eq!(dto.catalog_type.map(|t| t.r#type), Some("T-Shirt".to_string()));
    }

    #[test]
    fn test_picture_url_tolerates_trailing_slash() {
        let mapper = CatalogMapper::new("http://cdn.example.com/images/");
        assert_eq!(
            mapper.picture_url("1.png"),
            "http://cdn.example.com/images/1.png"
        );
    }

    #[test]
    fn test_unresolved_references_stay_absent() {
        let item = CatalogItem {
            catalog_brand: None,
            catalog_type: None,
            ..sample_item()
        };

        let dto = CatalogMapper::new("http://localhost").item_dto(item);

        assert!(dto.catalog_brand.is_none());
        assert!(dto.catalog_type.is_none());
    }
}
