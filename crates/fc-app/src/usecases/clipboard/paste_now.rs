use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use fc_core::clipboard::{ClipboardPhase, PasteReport};
use fc_core::form::write_value;
use fc_core::mapping::Direction;
use fc_core::ports::{ClipboardRepositoryPort, ClockPort, MappingRepositoryPort, PageDomPort};
use fc_core::FormClipError;

/// Writes the live snapshot into the paste-bound controls of the page.
///
/// An empty or expired clipboard is cleared and reported as `NoData`
/// before mappings are consulted. Per-code problems never abort the run:
/// they are tallied as missing or failed.
pub struct PasteNow {
    mappings: Arc<dyn MappingRepositoryPort>,
    clipboard: Arc<dyn ClipboardRepositoryPort>,
    clock: Arc<dyn ClockPort>,
}

impl PasteNow {
    pub fn new(
        mappings: Arc<dyn MappingRepositoryPort>,
        clipboard: Arc<dyn ClipboardRepositoryPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            mappings,
            clipboard,
            clock,
        }
    }

    pub async fn execute(&self, dom: &mut dyn PageDomPort) -> Result<PasteReport, FormClipError> {
        let domain = dom.hostname();
        let span = info_span!("usecase.paste_now.execute", domain = %domain);

        async {
            let stored = self.clipboard.load().await?;
            let (snapshot, remaining_secs) =
                match ClipboardPhase::evaluate(stored.as_ref(), self.clock.now_ms()) {
                    ClipboardPhase::Valid {
                        snapshot,
                        remaining_secs,
                    } => (snapshot.clone(), remaining_secs),
                    ClipboardPhase::Empty | ClipboardPhase::Expired => {
                        self.clipboard.clear().await?;
                        return Err(FormClipError::NoData);
                    }
                };

            let bindings = self
                .mappings
                .load()
                .await?
                .bindings(&domain, Direction::Paste);
            if bindings.is_empty() {
                return Err(FormClipError::NoMapping {
                    domain: domain.clone(),
                    direction: Direction::Paste,
                });
            }

            let today = self.clock.today();
            let mut report = PasteReport {
                total: bindings.len(),
                remaining_secs,
                ..PasteReport::default()
            };
            for (code, binding) in &bindings {
                let value = match snapshot.data.get(code) {
                    Some(value) if !value.is_blank() => value,
                    _ => {
                        report.missing.push(code.clone());
                        continue;
                    }
                };
                let Some(element) = dom.query_selector(&binding.selector) else {
                    report.missing.push(code.clone());
                    continue;
                };
                match write_value(
                    dom,
                    element,
                    &binding.kind,
                    value,
                    binding.name.as_deref(),
                    today,
                ) {
                    Ok(()) => report.pasted += 1,
                    Err(err) => {
                        warn!(code = %code, error = %err, "Could not write bound control");
                        report.failed.push(code.clone());
                    }
                }
            }

            info!(
                pasted = report.pasted,
                total = report.total,
                missing = report.missing.len(),
                failed = report.failed.len(),
                remaining_secs,
                "Clipboard pasted"
            );
            Ok(report)
        }
        .instrument(span)
        .await
    }
}
