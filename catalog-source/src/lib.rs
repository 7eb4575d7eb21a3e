//! Build-time side of the business catalog: the TOML source is parsed into
//! owned [`models`], validated, and indexed before `build.rs` turns it into
//! static code.

#[path = "../../src/models/mod.rs"]
pub mod models;

mod extractor;
mod index_maps;
mod source;
mod validator;

pub use self::extractor::TomlExtractor;
pub use self::index_maps::CatalogIndexMaps;
pub use self::source::{CatalogSource, SourceCatalog};
pub use self::validator::CatalogValidator;
