use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use fc_core::form::{discover_inputs, MatchPolicy};
use fc_core::mapping::Direction;
use fc_core::ports::{CatalogRepositoryPort, MappingRepositoryPort, PageDomPort};
use fc_core::FormClipError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureOutcome {
    pub domain: String,
    pub direction: Direction,
    /// Codes bound in this run.
    pub matched: Vec<String>,
    /// Form controls scanned on the page.
    pub scanned: usize,
}

/// Scans the page and binds every control whose current value equals a
/// catalog code.
///
/// Bindings captured earlier for codes that did not match again are kept.
pub struct CaptureMapping {
    catalog: Arc<dyn CatalogRepositoryPort>,
    mappings: Arc<dyn MappingRepositoryPort>,
    policy: Arc<dyn MatchPolicy>,
}

impl CaptureMapping {
    pub fn new(
        catalog: Arc<dyn CatalogRepositoryPort>,
        mappings: Arc<dyn MappingRepositoryPort>,
        policy: Arc<dyn MatchPolicy>,
    ) -> Self {
        Self {
            catalog,
            mappings,
            policy,
        }
    }

    pub async fn execute(
        &self,
        dom: &dyn PageDomPort,
        direction: Direction,
    ) -> Result<CaptureOutcome, FormClipError> {
        let domain = dom.hostname();
        let span = info_span!(
            "usecase.capture_mapping.execute",
            domain = %domain,
            direction = %direction
        );

        async {
            let catalog = self.catalog.load().await?.unwrap_or_default();
            let inputs = discover_inputs(dom);

            let mut mappings = self.mappings.load().await?;
            let matched = mappings.capture_mapping(
                &domain,
                direction,
                &inputs,
                &catalog,
                self.policy.as_ref(),
            );
            self.mappings.save(&mappings).await?;

            info!(
                scanned = inputs.len(),
                matched = matched.len(),
                "Mapping captured"
            );
            Ok(CaptureOutcome {
                domain: domain.clone(),
                direction,
                matched,
                scanned: inputs.len(),
            })
        }
        .instrument(span)
        .await
    }
}
