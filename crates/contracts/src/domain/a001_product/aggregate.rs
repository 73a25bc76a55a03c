use crate::domain::common::AggregateId;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор продукта
///
/// The API is not consistent about the JSON type of ids: some backends send
/// numbers, others strings. Both deserialize into the same opaque value, which
/// always serializes back as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Self(s),
            RawId::Number(n) => Self(n.to_string()),
        })
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Product id must not be empty".into());
        }
        Ok(Self(trimmed.to_string()))
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Продукт каталога, как его отдаёт API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Price in minor currency units (cents).
    pub price: i64,
    pub picture_url: String,
}

// ============================================================================
// DTO
// ============================================================================

/// Payload for `POST /products`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub name: String,
    pub price: i64,
    pub picture_url: String,
}

impl ProductDto {
    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name must not be empty".into());
        }
        if self.price < 0 {
            return Err("Price must not be negative".into());
        }
        if self.picture_url.trim().is_empty() {
            return Err("Picture URL must not be empty".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_string_ids_deserialize() {
        let products: Vec<Product> = serde_json::from_str(
            r#"[
                {"id": 7, "name": "cheese burger", "price": 1050, "picture_url": "a.png"},
                {"id": "p1", "name": "taco", "price": 300, "picture_url": "b.png"}
            ]"#,
        )
        .unwrap();

        assert_eq!(products[0].id, ProductId::new("7"));
        assert_eq!(products[1].id.as_str(), "p1");
        assert_eq!(products[0].price, 1050);
    }

    #[test]
    fn test_id_serializes_as_string() {
        let json = serde_json::to_string(&ProductId::new("42")).unwrap();
        assert_eq!(json, r#""42""#);
    }

    #[test]
    fn test_id_from_string() {
        assert_eq!(ProductId::from_string(" p1 ").unwrap().as_string(), "p1");
        assert!(ProductId::from_string("   ").is_err());
    }

    #[test]
    fn test_dto_validation() {
        let valid = ProductDto {
            name: "taco".into(),
            price: 300,
            picture_url: "https://img/taco.png".into(),
        };
        assert!(valid.validate().is_ok());

        let blank_name = ProductDto {
            name: "  ".into(),
            ..valid.clone()
        };
        assert!(blank_name.validate().is_err());

        let negative = ProductDto {
            price: -1,
            ..valid.clone()
        };
        assert!(negative.validate().is_err());

        let no_picture = ProductDto {
            picture_url: String::new(),
            ..valid
        };
        assert!(no_picture.validate().is_err());
    }
}
