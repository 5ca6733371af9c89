//! # Farekit Checkout
//!
//! E-commerce checkout built on the pricing pipeline:
//!
//! - [`catalog`]: products as a tagged union over one shared record shape
//! - [`account`]: customers, sellers, and admins
//! - [`cart`]: line items and a checked subtotal
//! - [`payment`]: settlement methods
//! - [`order`]: subtotal → adjustments (discount, tax) → settlement

pub mod account;
pub mod cart;
pub mod catalog;
pub mod order;
pub mod payment;

pub use account::{Account, AccountRole};
pub use cart::Cart;
pub use catalog::{Product, ProductKind};
pub use order::{standard_adjustments, Order, Receipt};
pub use payment::{PaymentMethod, PaymentRecord};
