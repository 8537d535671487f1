mod common;

use common::{destination_page, source_page, Harness};
use fc_app::usecases::{CaptureMapping, CopyNow, GetClipboardStatus, InitializeDefaults, PasteNow};
use fc_core::clipboard::ClipboardData;
use fc_core::form::FieldValue;
use fc_core::mapping::{BindingMap, Direction, FieldBinding};
use fc_core::ports::{ClipboardRepositoryPort, MappingRepositoryPort, PageDomPort};
use fc_core::FormClipError;
use fc_infra::dom::{NodeFixture, PageFixture};
use fc_infra::MemoryDocument;

fn capture(h: &Harness) -> CaptureMapping {
    CaptureMapping::new(
        h.deps.catalog.clone(),
        h.deps.mappings.clone(),
        h.deps.match_policy.clone(),
    )
}

fn copy_now(h: &Harness) -> CopyNow {
    CopyNow::new(
        h.deps.mappings.clone(),
        h.deps.clipboard.clone(),
        h.deps.settings.clone(),
        h.deps.clock.clone(),
    )
}

fn paste_now(h: &Harness) -> PasteNow {
    PasteNow::new(
        h.deps.mappings.clone(),
        h.deps.clipboard.clone(),
        h.deps.clock.clone(),
    )
}

fn status(h: &Harness) -> GetClipboardStatus {
    GetClipboardStatus::new(h.deps.clipboard.clone(), h.deps.clock.clone())
}

/// Replaces the placeholders of the source form with real data.
fn fill_source(page: &mut MemoryDocument) {
    let dni = page.query_selector("#dni").unwrap();
    page.set_value(dni, "30111222").unwrap();
    let nombre = page.query_selector(r#"[name="nombre"]"#).unwrap();
    page.set_value(nombre, "Ana").unwrap();
    let female = page.query_selector(r#"input[value="F"]"#).unwrap();
    page.set_checked(female, true).unwrap();
    let date = page.query_selector(r#"input[type="date"]"#).unwrap();
    page.set_value(date, "1990-05-04").unwrap();
}

async fn captured_session(h: &Harness) -> MemoryDocument {
    let mut source = source_page();
    let outcome = capture(h).execute(&source, Direction::Copy).await.unwrap();
    assert_eq!(outcome.matched, vec!["1", "2025-09-01", "M", "nom"]);

    let destination = destination_page();
    let outcome = capture(h)
        .execute(&destination, Direction::Paste)
        .await
        .unwrap();
    assert_eq!(outcome.matched.len(), 4);

    fill_source(&mut source);
    let report = copy_now(h).execute(&source).await.unwrap();
    assert_eq!((report.copied, report.total), (4, 4));
    assert!(report.missing.is_empty());
    destination
}

#[tokio::test]
async fn copy_then_paste_across_domains() {
    let h = Harness::with_catalog().await;
    let mut destination = captured_session(&h).await;

    h.clock.advance_secs(10);
    let report = paste_now(&h).execute(&mut destination).await.unwrap();

    assert_eq!((report.pasted, report.total), (4, 4));
    assert!(report.is_complete());
    assert_eq!(report.remaining_secs, 35);
    assert_eq!(destination.value_of(r#"[name="documento"]"#), Some("30111222"));
    assert_eq!(destination.value_of("#nombre-completo"), Some("Ana"));
    assert_eq!(destination.value_of("#genero"), Some("F"));
    assert_eq!(destination.value_of("#nacimiento"), Some("1990-05-04"));
    assert_eq!(destination.events().len(), 8);
}

#[tokio::test]
async fn status_counts_down_from_ttl() {
    let h = Harness::with_catalog().await;
    captured_session(&h).await;

    let current = status(&h).execute().await.unwrap();
    assert_eq!(current.remaining_secs, 45);
    let expected = ClipboardData::from([
        ("1".to_string(), FieldValue::text("30111222")),
        ("2025-09-01".to_string(), FieldValue::text("1990-05-04")),
        ("M".to_string(), FieldValue::text("F")),
        ("nom".to_string(), FieldValue::text("Ana")),
    ]);
    assert_eq!(current.data, expected);

    h.clock.advance_ms(1_500);
    assert_eq!(status(&h).execute().await.unwrap().remaining_secs, 43);
}

#[tokio::test]
async fn expiry_deletes_the_snapshot() {
    let h = Harness::with_catalog().await;
    captured_session(&h).await;

    h.clock.advance_secs(46);
    let expired = status(&h).execute().await.unwrap();
    assert!(expired.is_empty());
    assert_eq!(expired.remaining_secs, 0);
    assert!(h.deps.clipboard.load().await.unwrap().is_none());

    let again = status(&h).execute().await.unwrap();
    assert!(again.is_empty());
}

#[tokio::test]
async fn paste_after_expiry_is_no_data_every_time() {
    let h = Harness::with_catalog().await;
    let mut destination = captured_session(&h).await;
    h.clock.advance_secs(60);

    for _ in 0..2 {
        let err = paste_now(&h).execute(&mut destination).await.unwrap_err();
        assert!(matches!(err, FormClipError::NoData));
    }
    assert!(h.deps.clipboard.load().await.unwrap().is_none());
    assert!(destination.events().is_empty());
}

#[tokio::test]
async fn copy_without_bindings_is_no_mapping() {
    let h = Harness::with_catalog().await;
    let page = destination_page();

    let err = copy_now(&h).execute(&page).await.unwrap_err();
    assert!(matches!(
        err,
        FormClipError::NoMapping {
            direction: Direction::Copy,
            ..
        }
    ));
    assert!(h.deps.clipboard.load().await.unwrap().is_none());
}

#[tokio::test]
async fn paste_checks_data_before_mappings() {
    let h = Harness::with_catalog().await;
    let mut page = destination_page();
    let err = paste_now(&h).execute(&mut page).await.unwrap_err();
    assert!(matches!(err, FormClipError::NoData));
}

#[tokio::test]
async fn paste_tallies_missing_and_failed_codes() {
    let h = Harness::with_catalog().await;
    let mut destination = captured_session(&h).await;

    let mut mappings = h.deps.mappings.load().await.unwrap();
    let mut paste = BindingMap::new();
    paste.insert(
        "1".into(),
        FieldBinding {
            selector: r#"[name="documento"]"#.into(),
            kind: "number".into(),
            name: Some("documento".into()),
        },
    );
    // Checkbox semantics on a textarea are rejected by the page.
    paste.insert(
        "nom".into(),
        FieldBinding {
            selector: "#nombre-completo".into(),
            kind: "checkbox".into(),
            name: None,
        },
    );
    paste.insert(
        "M".into(),
        FieldBinding {
            selector: "#genero".into(),
            kind: "select-one".into(),
            name: None,
        },
    );
    paste.insert(
        "unknown".into(),
        FieldBinding {
            selector: "#nacimiento".into(),
            kind: "text".into(),
            name: None,
        },
    );
    mappings.clear_domain("destino.example");
    mappings.merge("destino.example", Direction::Paste, paste);
    h.deps.mappings.save(&mappings).await.unwrap();

    let genero = destination.query_selector("#genero").unwrap();
    destination.detach(genero);

    let report = paste_now(&h).execute(&mut destination).await.unwrap();
    assert_eq!(report.total, 4);
    assert_eq!(report.pasted, 1);
    assert_eq!(report.failed, vec!["nom"]);
    assert_eq!(report.missing, vec!["M", "unknown"]);
}

#[tokio::test]
async fn default_catalog_binds_dni_placeholder() {
    let h = Harness::new();
    InitializeDefaults::new(h.deps.transfer.clone())
        .execute()
        .await
        .unwrap();

    let page = MemoryDocument::from_fixture(&PageFixture {
        hostname: "a.example".into(),
        body: vec![NodeFixture::element("form").with_children(vec![
            NodeFixture::element("label"),
            NodeFixture::input("text").with_value("1"),
        ])],
    });
    capture(&h).execute(&page, Direction::Copy).await.unwrap();

    let bindings = h
        .deps
        .mappings
        .load()
        .await
        .unwrap()
        .bindings("a.example", Direction::Copy);
    let binding = &bindings["1"];
    assert_eq!(binding.kind, "text");
    let element = page.query_selector(&binding.selector).unwrap();
    assert_eq!(page.inspect(element).unwrap().value, "1");
}
