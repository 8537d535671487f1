use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use fc_core::catalog::{FieldCatalog, FieldCategory};
use fc_core::ports::CatalogRepositoryPort;
use fc_core::FormClipError;

/// Replaces the code of an existing field.
pub struct EditField {
    catalog: Arc<dyn CatalogRepositoryPort>,
}

impl EditField {
    pub fn new(catalog: Arc<dyn CatalogRepositoryPort>) -> Self {
        Self { catalog }
    }

    pub async fn execute(
        &self,
        category: FieldCategory,
        name: &str,
        new_code: &str,
    ) -> Result<FieldCatalog, FormClipError> {
        let span = info_span!("usecase.edit_field.execute", category = %category);

        async {
            let mut catalog = self.catalog.load().await?.unwrap_or_default();
            catalog.edit_field(category, name, new_code)?;
            self.catalog.save(&catalog).await?;

            info!(name = name.trim(), code = new_code.trim(), "Field updated");
            Ok(catalog)
        }
        .instrument(span)
        .await
    }
}
