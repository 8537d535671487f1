use std::sync::Arc;

use tracing::{debug, info, info_span, Instrument};

use fc_core::catalog::{FieldCatalog, FieldCategory};
use fc_core::ports::CatalogRepositoryPort;
use fc_core::FormClipError;

/// Removes a field; deleting an unknown name is a no-op.
pub struct DeleteField {
    catalog: Arc<dyn CatalogRepositoryPort>,
}

impl DeleteField {
    pub fn new(catalog: Arc<dyn CatalogRepositoryPort>) -> Self {
        Self { catalog }
    }

    pub async fn execute(
        &self,
        category: FieldCategory,
        name: &str,
    ) -> Result<FieldCatalog, FormClipError> {
        let span = info_span!("usecase.delete_field.execute", category = %category);

        async {
            let mut catalog = self.catalog.load().await?.unwrap_or_default();
            if catalog.delete_field(category, name) {
                self.catalog.save(&catalog).await?;
                info!(name, "Field deleted");
            } else {
                debug!(name, "Field not present, nothing to delete");
            }
            Ok(catalog)
        }
        .instrument(span)
        .await
    }
}
