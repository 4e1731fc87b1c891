pub mod ops_classify;
pub mod ops_load;
pub mod ops_load_all;
pub mod ops_why;

use std::path::Path;

use depload_core::catalog::Catalog;
use depload_core::config::GlobalConfig;
use depload_core::framework::KnownFrameworkClassifier;
use depload_core::module::ModuleId;
use depload_resolver::catalog_resolver::CatalogResolver;
use depload_resolver::loader::DependencyLoader;

/// A loader, a catalog-backed host and a loaded root, ready for one command.
pub struct Session {
    pub loader: DependencyLoader<KnownFrameworkClassifier>,
    pub host: CatalogResolver,
    pub root: ModuleId,
}

impl Session {
    /// Read the catalog, build the classifier from config and load `root`.
    pub fn open(catalog_path: &Path, root: &str, config: &GlobalConfig) -> miette::Result<Self> {
        let catalog = Catalog::from_path(catalog_path)?;
        let classifier = KnownFrameworkClassifier::from_config(&config.framework)?;
        let mut host = CatalogResolver::new(catalog, config.resolver.version_policy);
        let root = host.load_root(root)?;
        Ok(Self {
            loader: DependencyLoader::new(classifier),
            host,
            root,
        })
    }
}

/// Load configuration from `path`, or the global location when `None`.
///
/// An explicit path must exist and parse. A broken global config is reported
/// and replaced by defaults.
pub fn load_config(path: Option<&Path>) -> miette::Result<GlobalConfig> {
    if let Some(p) = path {
        return GlobalConfig::load_from(p);
    }
    match GlobalConfig::load() {
        Ok(c) => Ok(c),
        Err(e) => {
            tracing::warn!("Failed to load config, using defaults: {e}");
            Ok(GlobalConfig::default())
        }
    }
}
