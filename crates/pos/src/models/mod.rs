//! Domain records persisted by the stores or assembled at the till.

pub mod cart;
pub mod customer;
pub mod product;
pub mod sale;
pub mod shopping_list;

pub use cart::{Cart, CartLineItem};
pub use customer::{Customer, NewCustomer};
pub use product::{NewProduct, Product};
pub use sale::{Receipt, SaleLineItem};
pub use shopping_list::{ShoppingListItem, SkipReason, SkippedItem};
