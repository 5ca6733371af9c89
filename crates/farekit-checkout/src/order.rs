//! Order processing
//!
//! An order prices its cart subtotal through an adjustment pipeline and
//! settles the result: subtotal → adjustments → payment.

use crate::account::Account;
use crate::cart::Cart;
use crate::payment::{PaymentMethod, PaymentRecord};
use farekit_common::{CheckoutError, Result};
use farekit_pricing::{PricingPipeline, PricingSettings, Stage};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

/// The standard discount-then-tax adjustments.
///
/// Built with the empty-allowed policy: an adjustment pipeline with zero
/// stages is valid and charges the subtotal as-is.
pub fn standard_adjustments(settings: &PricingSettings) -> Result<PricingPipeline> {
    let pipeline = PricingPipeline::builder()
        .stage(Stage::percentage_discount(settings.discount_percent)?)
        .stage(Stage::flat_tax(settings.tax_rate)?)
        .build_allow_empty();
    Ok(pipeline)
}

/// Proof of a processed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub order_id: Uuid,
    pub customer: String,
    /// Described line items, in cart order.
    pub lines: Vec<String>,
    pub subtotal: Decimal,
    /// Subtotal after every adjustment.
    pub total: Decimal,
    pub payment: PaymentRecord,
    pub settled_at: i64,
}

/// A cart headed for settlement.
pub struct Order {
    customer: Account,
    cart: Cart,
    payment: PaymentMethod,
    adjustments: PricingPipeline,
}

impl Order {
    /// `adjustments` may be empty — an empty pipeline means the subtotal is
    /// charged unchanged.
    pub fn new(
        customer: Account,
        cart: Cart,
        payment: PaymentMethod,
        adjustments: PricingPipeline,
    ) -> Self {
        Self {
            customer,
            cart,
            payment,
            adjustments,
        }
    }

    /// Price and settle the order. An empty cart is a caller error.
    #[instrument(skip(self), fields(customer = %self.customer.name))]
    pub fn process(self) -> Result<Receipt> {
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart.into());
        }
        let subtotal = self.cart.subtotal()?;
        let total = self.adjustments.evaluate(subtotal)?;
        let payment = self.payment.settle(total);

        info!(%subtotal, %total, "order settled");
        Ok(Receipt {
            order_id: Uuid::new_v4(),
            customer: self.customer.name,
            lines: self.cart.line_items(),
            subtotal,
            total,
            payment,
            settled_at: chrono::Utc::now().timestamp_millis(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use farekit_common::FarekitError;
    use rust_decimal_macros::dec;

    fn stocked_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add(Product::electronics(1, "Laptop", dec!(1000), 2).unwrap());
        cart.add(Product::clothing(2, "T-Shirt", dec!(30), "M").unwrap());
        cart.add(Product::furniture(3, "Chair", dec!(150), "Wood").unwrap());
        cart
    }

    #[test]
    fn test_standard_adjustments_order() {
        let pipeline = standard_adjustments(&PricingSettings::default()).unwrap();
        // 10% off, then 10% tax
        assert_eq!(pipeline.evaluate(dec!(1180)).unwrap(), dec!(1168.2));
    }

    #[test]
    fn test_process_produces_receipt() {
        let order = Order::new(
            Account::customer(1, "Antony"),
            stocked_cart(),
            PaymentMethod::Card,
            standard_adjustments(&PricingSettings::default()).unwrap(),
        );
        let receipt = order.process().unwrap();

        assert_eq!(receipt.subtotal, dec!(1180));
        assert_eq!(receipt.total, dec!(1168.2));
        assert_eq!(receipt.lines.len(), 3);
        assert_eq!(receipt.payment.amount, dec!(1168.2));
        assert_eq!(receipt.customer, "Antony");
    }

    #[test]
    fn test_empty_adjustments_charge_subtotal() {
        let order = Order::new(
            Account::customer(1, "Antony"),
            stocked_cart(),
            PaymentMethod::Wallet,
            PricingPipeline::builder().build_allow_empty(),
        );
        let receipt = order.process().unwrap();
        assert_eq!(receipt.total, receipt.subtotal);
    }

    #[test]
    fn test_empty_cart_rejected() {
        let order = Order::new(
            Account::customer(1, "Antony"),
            Cart::new(),
            PaymentMethod::Card,
            PricingPipeline::builder().build_allow_empty(),
        );
        assert!(matches!(
            order.process(),
            Err(FarekitError::Checkout(CheckoutError::EmptyCart))
        ));
    }
}
