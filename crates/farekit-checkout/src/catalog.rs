//! Product catalog
//!
//! Every product shares an id, a name, and a price; the kind payload holds
//! the one detail each category cares about.

use farekit_common::{CheckoutError, Describe};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Category-specific payload for a [`Product`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    Electronics { warranty_years: u8 },
    Clothing { size: String },
    Furniture { material: String },
}

/// A catalog entry: shared fields plus a category payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: Decimal,
    pub kind: ProductKind,
}

impl Product {
    /// Requires a non-negative price.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        price: Decimal,
        kind: ProductKind,
    ) -> Result<Self, CheckoutError> {
        if price < Decimal::ZERO {
            return Err(CheckoutError::NegativePrice { price });
        }
        Ok(Self {
            id,
            name: name.into(),
            price,
            kind,
        })
    }

    pub fn electronics(
        id: u64,
        name: impl Into<String>,
        price: Decimal,
        warranty_years: u8,
    ) -> Result<Self, CheckoutError> {
        Self::new(id, name, price, ProductKind::Electronics { warranty_years })
    }

    pub fn clothing(
        id: u64,
        name: impl Into<String>,
        price: Decimal,
        size: impl Into<String>,
    ) -> Result<Self, CheckoutError> {
        Self::new(id, name, price, ProductKind::Clothing { size: size.into() })
    }

    pub fn furniture(
        id: u64,
        name: impl Into<String>,
        price: Decimal,
        material: impl Into<String>,
    ) -> Result<Self, CheckoutError> {
        Self::new(
            id,
            name,
            price,
            ProductKind::Furniture {
                material: material.into(),
            },
        )
    }
}

impl Describe for Product {
    fn describe(&self) -> String {
        match &self.kind {
            ProductKind::Electronics { warranty_years } => {
                format!("{} - warranty: {} year(s)", self.name, warranty_years)
            }
            ProductKind::Clothing { size } => format!("{} - size {}", self.name, size),
            ProductKind::Furniture { material } => {
                format!("{} - material {}", self.name, material)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_describe_per_kind() {
        let laptop = Product::electronics(1, "Laptop", dec!(1000), 2).unwrap();
        assert_eq!(laptop.describe(), "Laptop - warranty: 2 year(s)");

        let shirt = Product::clothing(2, "T-Shirt", dec!(30), "M").unwrap();
        assert_eq!(shirt.describe(), "T-Shirt - size M");

        let chair = Product::furniture(3, "Chair", dec!(150), "Wood").unwrap();
        assert_eq!(chair.describe(), "Chair - material Wood");
    }

    #[test]
    fn test_negative_price_rejected() {
        assert_eq!(
            Product::clothing(4, "Socks", dec!(-1), "S"),
            Err(CheckoutError::NegativePrice { price: dec!(-1) })
        );
    }

    #[test]
    fn test_free_sample_allowed() {
        assert!(Product::clothing(5, "Sticker", dec!(0), "-").is_ok());
    }
}
