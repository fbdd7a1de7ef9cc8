//! Catalogue data-source boundary: models, errors, vocabularies, gateways.
//!
//! The products API is treated as an external collaborator: the full
//! collection is fetched once and every derivation (filtering, sorting,
//! windowing, vocabularies) happens locally.

pub mod error;
pub mod gateway;
pub mod intake;
pub mod models;
pub mod vocab;

pub use error::CatalogError;
pub use gateway::{HttpProductGateway, ProductGateway};
pub use intake::{CatalogIntake, CatalogSnapshot};
pub use models::{Item, ItemPatch, Status};
