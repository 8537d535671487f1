mod common;

use common::Harness;
use fc_app::usecases::{
    AddField, ExportConfig, GetSettings, ImportConfig, InitializeDefaults, SettingsUpdate,
    UpdateSettings,
};
use fc_core::catalog::FieldCategory;
use fc_core::mapping::{BindingMap, Direction, FieldBinding};
use fc_core::ports::{CatalogRepositoryPort, ConfigTransferPort, MappingRepositoryPort};
use fc_core::FormClipError;
use serde_json::json;

#[tokio::test]
async fn initialize_defaults_only_fills_absent_keys() {
    let h = Harness::with_catalog().await;

    let written = InitializeDefaults::new(h.deps.transfer.clone())
        .execute()
        .await
        .unwrap();
    assert_eq!(written, vec!["settings", "mappings"]);

    // The custom catalog survives the install hook.
    let catalog = h.deps.catalog.load().await.unwrap().unwrap();
    assert_eq!(catalog.len(), 4);

    let again = InitializeDefaults::new(h.deps.transfer.clone())
        .execute()
        .await
        .unwrap();
    assert!(again.is_empty());
}

#[tokio::test]
async fn flat_export_round_trips_through_import() {
    let h = Harness::new();
    InitializeDefaults::new(h.deps.transfer.clone())
        .execute()
        .await
        .unwrap();
    AddField::new(h.deps.catalog.clone())
        .execute(FieldCategory::Text, "localidad", "loc")
        .await
        .unwrap();
    let mut mappings = h.deps.mappings.load().await.unwrap();
    mappings.merge(
        "a.example",
        Direction::Copy,
        BindingMap::from([(
            "loc".to_string(),
            FieldBinding {
                selector: "#loc".into(),
                kind: "text".into(),
                name: None,
            },
        )]),
    );
    h.deps.mappings.save(&mappings).await.unwrap();
    UpdateSettings::new(h.deps.settings.clone())
        .execute(SettingsUpdate {
            notifications: Some(false),
            commands_enabled: None,
        })
        .await
        .unwrap();

    let exported = ExportConfig::new(h.deps.transfer.clone())
        .execute()
        .await
        .unwrap();
    let json = serde_json::to_value(&exported).unwrap();
    assert_eq!(json["config_export"]["campos"]["texto"]["localidad"], "loc");

    let target = Harness::new();
    let keys = ImportConfig::new(target.deps.transfer.clone())
        .execute(&json)
        .await
        .unwrap();
    assert_eq!(keys, vec!["settings", "fields", "mappings"]);

    let original = h.deps.transfer.read_stored().await.unwrap();
    let imported = target.deps.transfer.read_stored().await.unwrap();
    assert_eq!(imported, original);

    let settings = GetSettings::new(target.deps.settings.clone())
        .execute()
        .await
        .unwrap();
    assert!(!settings.notifications);
    assert!(settings.commands_enabled);
}

#[tokio::test]
async fn invalid_import_writes_nothing() {
    let h = Harness::with_catalog().await;
    let before = h.deps.transfer.read_stored().await.unwrap();

    let err = ImportConfig::new(h.deps.transfer.clone())
        .execute(&json!({ "fields": { "texto": "nom" }, "settings": {} }))
        .await
        .unwrap_err();
    assert!(matches!(err, FormClipError::ImportFormat(_)));

    assert_eq!(h.deps.transfer.read_stored().await.unwrap(), before);
}

#[tokio::test]
async fn nested_import_keeps_keys_it_does_not_carry() {
    let h = Harness::new();
    InitializeDefaults::new(h.deps.transfer.clone())
        .execute()
        .await
        .unwrap();

    ImportConfig::new(h.deps.transfer.clone())
        .execute(&json!({
            "config_export": {
                "campos": { "números": { "legajo": 77 } },
                "extras": {}
            }
        }))
        .await
        .unwrap();

    let stored = h.deps.transfer.read_stored().await.unwrap();
    let fields = stored.fields.unwrap();
    assert_eq!(fields.numeros["legajo"], "77");
    assert_eq!(fields.len(), 1);
    assert!(stored.settings.is_some());
    assert!(stored.mappings.is_some());
}
