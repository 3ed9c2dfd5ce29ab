mod defaults;
mod persistence;
mod provider;

pub use defaults::default_catalog;
pub use persistence::{load_catalog, parse_generated_catalog, save_catalog};
pub use provider::{
    CachedCatalogProvider, CatalogProvider, CatalogRequest, FallbackCatalogProvider,
    FileCatalogProvider, StaticCatalogProvider,
};
