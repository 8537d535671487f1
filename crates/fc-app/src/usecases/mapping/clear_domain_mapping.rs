use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use fc_core::ports::MappingRepositoryPort;
use fc_core::FormClipError;

/// Forgets both directions of a domain. Idempotent.
pub struct ClearDomainMapping {
    mappings: Arc<dyn MappingRepositoryPort>,
}

impl ClearDomainMapping {
    pub fn new(mappings: Arc<dyn MappingRepositoryPort>) -> Self {
        Self { mappings }
    }

    /// Returns whether the domain had bindings.
    pub async fn execute(&self, domain: &str) -> Result<bool, FormClipError> {
        let span = info_span!("usecase.clear_domain_mapping.execute", domain);

        async {
            let mut mappings = self.mappings.load().await?;
            let removed = mappings.clear_domain(domain);
            if removed {
                self.mappings.save(&mappings).await?;
            }
            info!(removed, "Domain mapping cleared");
            Ok(removed)
        }
        .instrument(span)
        .await
    }
}
