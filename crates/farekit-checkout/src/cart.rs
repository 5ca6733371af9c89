//! Shopping cart

use crate::catalog::Product;
use farekit_common::{CheckoutError, Describe};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Ordered collection of products headed for checkout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, product: Product) {
        self.items.push(product);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Described line items, in the order they were added.
    pub fn line_items(&self) -> Vec<String> {
        self.items.iter().map(Describe::describe).collect()
    }

    /// Checked sum of item prices.
    pub fn subtotal(&self) -> Result<Decimal, CheckoutError> {
        let mut total = Decimal::ZERO;
        for item in &self.items {
            total = total
                .checked_add(item.price)
                .ok_or(CheckoutError::SubtotalOverflow)?;
        }
        Ok(total)
    }
}
