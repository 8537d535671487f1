use std::sync::Arc;

use tracing::{info_span, Instrument};

use fc_core::catalog::FieldCatalog;
use fc_core::ports::CatalogRepositoryPort;
use fc_core::FormClipError;

/// Returns the stored catalog, empty before install.
pub struct ListFields {
    catalog: Arc<dyn CatalogRepositoryPort>,
}

impl ListFields {
    pub fn new(catalog: Arc<dyn CatalogRepositoryPort>) -> Self {
        Self { catalog }
    }

    pub async fn execute(&self) -> Result<FieldCatalog, FormClipError> {
        let span = info_span!("usecase.list_fields.execute");

        async { Ok(self.catalog.load().await?.unwrap_or_default()) }
            .instrument(span)
            .await
    }
}
