// Design Patterns Catalog
// Small, independent illustrations of classic object-oriented patterns.

//! # Design Patterns Catalog
//!
//! The core of the crate is the priceable-item chain in [`decorator`]: a
//! base item wrapped by toppings, each adding a description suffix and a
//! cost delta. The remaining modules are self-contained illustrations:
//!
//! ## Structural
//! - [`adapter`]: a `Book` exposing `title()` made to satisfy `Named`
//! - [`decorator`]: pizza toppings composed over a base item
//! - [`facade`]: one audio player front for three format-specific players
//!
//! ## Creational
//! - [`factory`]: shapes created from string keys through a registry
//! - [`singleton`]: a process-wide `Database` behind `OnceLock`
//!
//! ## Behavioral
//! - [`observer`]: weather displays attached to a measurement subject
//! - [`strategy`]: swappable shipping cost algorithms
//!
//! Run the demos with:
//! ```bash
//! cargo run --bin patterns -- all
//! cargo run --bin patterns -- decorator --menu demos/sourdough.toml
//! ```

pub mod adapter;
pub mod config;
pub mod decorator;
pub mod error;
pub mod facade;
pub mod factory;
pub mod observer;
pub mod price;
pub mod singleton;
pub mod strategy;

pub use config::MenuConfig;
pub use decorator::{BaseItem, ChainBuilder, Mozzarella, PriceableItem, Receipt, TomatoSauce, Topping};
pub use error::{Error, Result};
pub use price::Price;
