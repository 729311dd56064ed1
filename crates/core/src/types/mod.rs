//! Core types for Sundry.
//!
//! This module provides the domain types shared between the cart store and
//! the web layer.

pub mod cart;
pub mod id;
pub mod product;

pub use cart::{Cart, CartItem};
pub use id::ProductId;
pub use product::Product;
