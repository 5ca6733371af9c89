//! Store accounts

use farekit_common::Describe;
use serde::{Deserialize, Serialize};

/// Role payload for an [`Account`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountRole {
    Admin,
    Seller { shop_name: String },
    Customer,
}

/// A store account: shared fields plus a role payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: u64,
    pub name: String,
    pub role: AccountRole,
}

impl Account {
    pub fn admin(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            role: AccountRole::Admin,
        }
    }

    pub fn seller(id: u64, name: impl Into<String>, shop_name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            role: AccountRole::Seller {
                shop_name: shop_name.into(),
            },
        }
    }

    pub fn customer(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            role: AccountRole::Customer,
        }
    }
}

impl Describe for Account {
    fn describe(&self) -> String {
        match &self.role {
            AccountRole::Admin => format!("{} (admin)", self.name),
            AccountRole::Seller { shop_name } => format!("{} sells at {}", self.name, shop_name),
            AccountRole::Customer => format!("{} (customer)", self.name),
        }
    }
}
