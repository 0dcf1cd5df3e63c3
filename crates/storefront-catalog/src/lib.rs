//! Catalog gateway for the storefront.
//!
//! This crate provides:
//! - `ProductSource` - Where product listings come from
//! - `FakeStoreClient` - The remote FakeStore catalog over HTTP
//! - `StaticCatalog` - Built-in fallback catalog
//! - `ProductListing` - One product list load, with manual retry
//!
//! The cart never talks to this crate. The UI loads products here and hands
//! them to the cart through actions.

mod client;
mod error;
mod fakestore;
mod fallback;
mod listing;
mod source;

pub use client::*;
pub use error::*;
pub use fakestore::*;
pub use fallback::*;
pub use listing::*;
pub use source::*;
