use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use fc_core::catalog::{FieldCatalog, FieldCategory};
use fc_core::ports::CatalogRepositoryPort;
use fc_core::FormClipError;

/// Adds a named field code to a catalog category.
///
/// The whole catalog is persisted before success is returned; a rejected
/// field leaves storage untouched.
pub struct AddField {
    catalog: Arc<dyn CatalogRepositoryPort>,
}

impl AddField {
    pub fn new(catalog: Arc<dyn CatalogRepositoryPort>) -> Self {
        Self { catalog }
    }

    pub async fn execute(
        &self,
        category: FieldCategory,
        name: &str,
        code: &str,
    ) -> Result<FieldCatalog, FormClipError> {
        let span = info_span!("usecase.add_field.execute", category = %category);

        async {
            let mut catalog = self.catalog.load().await?.unwrap_or_default();
            catalog.add_field(category, name, code)?;
            self.catalog.save(&catalog).await?;

            info!(name = name.trim(), code = code.trim(), "Field added");
            Ok(catalog)
        }
        .instrument(span)
        .await
    }
}
