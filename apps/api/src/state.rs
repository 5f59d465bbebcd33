use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::matching::recommender::{CareerRecommender, HybridRecommender};
use crate::matching::weights::MatchWeights;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Enriched, read-only catalog snapshot shared across requests.
    pub catalog: Arc<Catalog>,
    /// Pluggable recommender. Default: HybridRecommender over `catalog`.
    pub recommender: Arc<dyn CareerRecommender>,
    pub config: Config,
}

impl AppState {
    pub fn new(catalog: Catalog, config: Config) -> Self {
        let catalog = Arc::new(catalog);
        let weights = MatchWeights {
            hybrid: config.hybrid,
            ..MatchWeights::default()
        };
        let recommender = Arc::new(HybridRecommender::new(Arc::clone(&catalog), weights));
        Self {
            catalog,
            recommender,
            config,
        }
    }
}

/// State over the built-in catalog with default configuration.
#[cfg(test)]
pub fn test_state() -> AppState {
    use crate::catalog::fallback::builtin_careers;
    use crate::matching::weights::HybridWeights;

    let config = Config {
        port: 0,
        rust_log: "info".to_string(),
        careers_path: None,
        default_top_n: 5,
        hybrid: HybridWeights::default(),
    };
    let catalog = Catalog::from_raw(builtin_careers()).expect("built-in catalog is valid");
    AppState::new(catalog, config)
}
