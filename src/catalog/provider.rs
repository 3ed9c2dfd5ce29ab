use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::cache::{CacheSettings, TtlCache};
use crate::catalog::defaults::default_catalog;
use crate::catalog::persistence::load_catalog;
use crate::error::{PlannerError, Result};
use crate::models::{Catalog, MealType};

/// What a catalog is being fetched for. Doubles as the cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CatalogRequest {
    pub meal: MealType,
    pub preferences: Vec<String>,
    pub allergies: Vec<String>,
}

impl CatalogRequest {
    pub fn new(meal: MealType, preferences: &[String], allergies: &[String]) -> Self {
        Self {
            meal,
            preferences: preferences.to_vec(),
            allergies: allergies.to_vec(),
        }
    }
}

/// Source of food catalogs.
pub trait CatalogProvider {
    fn catalog(&self, request: &CatalogRequest) -> Result<Catalog>;
}

/// Built-in catalogs.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalogProvider;

impl CatalogProvider for StaticCatalogProvider {
    fn catalog(&self, request: &CatalogRequest) -> Result<Catalog> {
        default_catalog(request.meal)
    }
}

/// Catalogs read from `<dir>/<meal>.json`.
///
/// Files may hold plain catalog JSON or raw generated text around it.
#[derive(Debug, Clone)]
pub struct FileCatalogProvider {
    dir: PathBuf,
}

impl FileCatalogProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, meal: MealType) -> PathBuf {
        self.dir.join(format!("{}.json", meal))
    }
}

impl CatalogProvider for FileCatalogProvider {
    fn catalog(&self, request: &CatalogRequest) -> Result<Catalog> {
        let path = self.path_for(request.meal);
        debug!("reading {} catalog from {}", request.meal, path.display());
        let catalog = load_catalog(&path)?;
        if catalog.is_empty() {
            return Err(PlannerError::CatalogUnavailable(format!(
                "{} has no items",
                path.display()
            )));
        }
        Ok(catalog)
    }
}

/// Tries `primary`, and on any error logs it and asks `fallback`.
#[derive(Debug, Clone)]
pub struct FallbackCatalogProvider<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> FallbackCatalogProvider<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P, F> CatalogProvider for FallbackCatalogProvider<P, F>
where
    P: CatalogProvider,
    F: CatalogProvider,
{
    fn catalog(&self, request: &CatalogRequest) -> Result<Catalog> {
        match self.primary.catalog(request) {
            Ok(catalog) => Ok(catalog),
            Err(e) => {
                warn!("{} catalog source failed, using fallback: {}", request.meal, e);
                self.fallback.catalog(request)
            }
        }
    }
}

/// Memoizes another provider per request for a fixed time.
#[derive(Debug)]
pub struct CachedCatalogProvider<P> {
    inner: P,
    cache: TtlCache<CatalogRequest, Catalog>,
}

impl<P> CachedCatalogProvider<P> {
    pub fn new(inner: P, settings: CacheSettings) -> Self {
        Self {
            inner,
            cache: TtlCache::new(settings),
        }
    }

    pub fn cache(&self) -> &TtlCache<CatalogRequest, Catalog> {
        &self.cache
    }
}

impl<P: CatalogProvider> CatalogProvider for CachedCatalogProvider<P> {
    fn catalog(&self, request: &CatalogRequest) -> Result<Catalog> {
        self.cache.get_or_try_insert_with(request.clone(), || {
            info!("fetching {} catalog", request.meal);
            self.inner.catalog(request)
        })
    }
}

impl<T: CatalogProvider + ?Sized> CatalogProvider for Box<T> {
    fn catalog(&self, request: &CatalogRequest) -> Result<Catalog> {
        (**self).catalog(request)
    }
}
