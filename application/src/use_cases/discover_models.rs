//! Discover Models use case
//!
//! Lists the locally available models. Failure is never fatal: it is
//! reported and the session continues with an empty list.

use crate::ports::model_catalog::ModelCatalog;
use crate::ports::session_notifier::SessionNotifier;
use gumchat_domain::ModelId;
use std::sync::Arc;
use tracing::{info, warn};

/// Use case for model discovery
pub struct DiscoverModelsUseCase {
    catalog: Arc<dyn ModelCatalog>,
}

impl DiscoverModelsUseCase {
    pub fn new(catalog: Arc<dyn ModelCatalog>) -> Self {
        Self { catalog }
    }

    pub fn execute(&self, notifier: &dyn SessionNotifier) -> Vec<ModelId> {
        match self.catalog.list_models() {
            Ok(models) => {
                info!("Discovered {} models", models.len());
                if models.is_empty() {
                    notifier.on_no_models();
                }
                models
            }
            Err(e) => {
                warn!("Model discovery failed: {}", e);
                notifier.on_discovery_failed(&e);
                Vec::new()
            }
        }
    }
}
