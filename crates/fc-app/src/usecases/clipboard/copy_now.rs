use std::sync::Arc;

use tracing::{debug, info, info_span, warn, Instrument};

use fc_core::clipboard::{ClipboardData, ClipboardSnapshot, CopyReport, CLIPBOARD_TTL_SECONDS};
use fc_core::form::{read_radio_group, read_value, FieldValue};
use fc_core::mapping::{Direction, FieldBinding};
use fc_core::ports::{
    ClipboardRepositoryPort, ClockPort, ElementRef, MappingRepositoryPort, PageDomPort,
    SettingsPort,
};
use fc_core::FormClipError;

/// Captures the copy-bound values of the page into a fresh snapshot.
///
/// Codes whose control cannot be located are reported as missing and left
/// out of the snapshot. Any previous snapshot is replaced.
pub struct CopyNow {
    mappings: Arc<dyn MappingRepositoryPort>,
    clipboard: Arc<dyn ClipboardRepositoryPort>,
    settings: Arc<dyn SettingsPort>,
    clock: Arc<dyn ClockPort>,
}

impl CopyNow {
    pub fn new(
        mappings: Arc<dyn MappingRepositoryPort>,
        clipboard: Arc<dyn ClipboardRepositoryPort>,
        settings: Arc<dyn SettingsPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            mappings,
            clipboard,
            settings,
            clock,
        }
    }

    pub async fn execute(&self, dom: &dyn PageDomPort) -> Result<CopyReport, FormClipError> {
        let domain = dom.hostname();
        let span = info_span!("usecase.copy_now.execute", domain = %domain);

        async {
            let bindings = self
                .mappings
                .load()
                .await?
                .bindings(&domain, Direction::Copy);
            if bindings.is_empty() {
                return Err(FormClipError::NoMapping {
                    domain: domain.clone(),
                    direction: Direction::Copy,
                });
            }

            let mut data = ClipboardData::new();
            let mut missing = Vec::new();
            for (code, binding) in &bindings {
                let Some(element) = dom.query_selector(&binding.selector) else {
                    missing.push(code.clone());
                    continue;
                };
                match capture_value(dom, element, binding) {
                    Ok(value) => {
                        data.insert(code.clone(), value);
                    }
                    Err(err) => {
                        warn!(code = %code, error = %err, "Could not read bound control");
                        missing.push(code.clone());
                    }
                }
            }

            self.log_ttl_discrepancy().await;
            let snapshot = ClipboardSnapshot::new(data, self.clock.now_ms());
            self.clipboard.save(&snapshot).await?;

            let report = CopyReport {
                copied: snapshot.data.len(),
                total: bindings.len(),
                missing,
            };
            info!(
                copied = report.copied,
                total = report.total,
                missing = report.missing.len(),
                ttl_seconds = snapshot.ttl_seconds,
                "Clipboard captured"
            );
            Ok(report)
        }
        .instrument(span)
        .await
    }

    async fn log_ttl_discrepancy(&self) {
        match self.settings.load().await {
            Ok(Some(settings)) if settings.ttl_seconds != i64::from(CLIPBOARD_TTL_SECONDS) => {
                debug!(
                    stored_ttl = settings.ttl_seconds,
                    applied_ttl = settings.effective_clipboard_ttl(),
                    "Stored TTL differs from the clipboard TTL"
                );
            }
            Ok(_) => {}
            Err(err) => debug!(error = %err, "Settings unavailable while capturing"),
        }
    }
}

/// Radio bindings reading no value fall back to the checked radio of the
/// binding's group.
fn capture_value(
    dom: &dyn PageDomPort,
    element: ElementRef,
    binding: &FieldBinding,
) -> Result<FieldValue, fc_core::DomError> {
    let value = read_value(dom, element)?;
    if binding.kind != "radio" || !value.is_blank() {
        return Ok(value);
    }
    let group = match binding.name.as_deref().filter(|n| !n.is_empty()) {
        Some(name) => Some(name.to_string()),
        None => dom.inspect(element)?.name().map(str::to_string),
    };
    Ok(match group {
        Some(name) => read_radio_group(dom, &name),
        None => value,
    })
}
