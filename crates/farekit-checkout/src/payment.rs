//! Payment methods
//!
//! Settlement produces a record, not console output: rendering belongs to
//! whoever holds the receipt.

use farekit_common::Describe;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    Wallet,
    CashOnDelivery,
}

/// Outcome of settling an amount against a method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub method: PaymentMethod,
    pub amount: Decimal,
    pub note: String,
}

impl PaymentMethod {
    /// Settle `amount` against this method.
    pub fn settle(self, amount: Decimal) -> PaymentRecord {
        let note = match self {
            PaymentMethod::Card => format!("paid {} by card", amount.normalize()),
            PaymentMethod::Wallet => format!("paid {} from wallet", amount.normalize()),
            PaymentMethod::CashOnDelivery => {
                format!("{} due at the doorstep", amount.normalize())
            }
        };
        PaymentRecord {
            method: self,
            amount,
            note,
        }
    }
}

impl Describe for PaymentMethod {
    fn describe(&self) -> String {
        match self {
            PaymentMethod::Card => "card".to_string(),
            PaymentMethod::Wallet => "wallet".to_string(),
            PaymentMethod::CashOnDelivery => "cash on delivery".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_settlement_notes() {
        let record = PaymentMethod::Card.settle(dec!(1168.20));
        assert_eq!(record.amount, dec!(1168.2));
        assert_eq!(record.note, "paid 1168.2 by card");

        let cod = PaymentMethod::CashOnDelivery.settle(dec!(99));
        assert_eq!(cod.note, "99 due at the doorstep");
    }

    #[test]
    fn test_describe() {
        assert_eq!(PaymentMethod::Wallet.describe(), "wallet");
    }
}
