//! Card data model and catalog snapshots.
//!
//! A [`Catalog`] is an immutable set of [`Card`]s plus the tribe and set name
//! tables that came with them. Catalogs are produced by the [`loader`] from the
//! raw card-list document and are never updated in place: a new document (for
//! example a different [`Language`]) means a new catalog.

pub use self::{
    card::{Card, CardKind, Faction, Rarity, UnknownVariantError},
    catalog::Catalog,
    language::Language,
    loader::{LoadError, LoaderOptions, RawCatalog},
};

pub mod card;
pub mod catalog;
pub mod language;
pub mod loader;
