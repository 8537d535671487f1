mod common;

use common::TestHost;
use formclip_lib::cli::Commands;

#[tokio::test]
async fn export_then_import_into_a_fresh_store() {
    let source = TestHost::new();
    source.run(Commands::Init).await;
    source
        .run(Commands::Settings {
            notifications: Some(false),
            commands: None,
        })
        .await;

    let file = source.dir.path().join("export.json");
    let (_, out) = source
        .run(Commands::Export {
            out: Some(file.clone()),
        })
        .await;
    assert!(out.starts_with("Exported to "));

    let exported: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&file).unwrap()).unwrap();
    assert_eq!(exported["config_export"]["campos"]["numeros"]["dni"], "1");
    assert_eq!(exported["settings"]["notifications"], false);

    let target = TestHost::new();
    let (_, out) = target.run(Commands::Import { file }).await;
    assert_eq!(out, "Imported: settings, fields, mappings\n");

    let (_, source_json) = source.run(Commands::Export { out: None }).await;
    let (_, target_json) = target.run(Commands::Export { out: None }).await;
    assert_eq!(source_json, target_json);
}

#[tokio::test]
async fn invalid_import_changes_nothing() {
    let host = TestHost::new();
    host.run(Commands::Init).await;
    let (_, before) = host.run(Commands::Export { out: None }).await;

    let file = host.dir.path().join("bad.json");
    std::fs::write(&file, "[1, 2, 3]").unwrap();
    let result = formclip_lib::commands::execute(
        &host.runtime,
        Commands::Import { file },
        &mut Vec::new(),
    )
    .await;
    assert!(result.is_err());

    let (_, after) = host.run(Commands::Export { out: None }).await;
    assert_eq!(before, after);
}
