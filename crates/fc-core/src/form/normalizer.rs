//! Bridge between field values and page controls.

use chrono::NaiveDate;

use super::date::parse_flexible_date;
use super::value::{parse_boolean_like, FieldValue};
use crate::error::DomError;
use crate::ports::{ElementInfo, ElementRef, PageDomPort};

/// A form control found while scanning the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredInput {
    pub element: ElementRef,
    pub selector: String,
    pub kind: String,
    pub name: Option<String>,
    pub value: FieldValue,
}

/// Normalizes the current value of an inspected control.
pub fn normalize_value(info: &ElementInfo) -> FieldValue {
    match info.kind().as_str() {
        "checkbox" => FieldValue::Bool(info.checked),
        "radio" if info.checked => FieldValue::Text(info.value.clone()),
        "radio" => FieldValue::Null,
        _ if info.tag == "select" => FieldValue::Text(info.value.clone()),
        _ => FieldValue::Text(info.value.trim().to_string()),
    }
}

pub fn read_value(dom: &dyn PageDomPort, element: ElementRef) -> Result<FieldValue, DomError> {
    Ok(normalize_value(&dom.inspect(element)?))
}

/// Value of the checked radio of a group, `Null` when none is checked.
pub fn read_radio_group(dom: &dyn PageDomPort, name: &str) -> FieldValue {
    dom.query_selector_all(&radio_group_selector(name))
        .into_iter()
        .filter_map(|radio| dom.inspect(radio).ok())
        .find(|info| info.checked)
        .map(|info| FieldValue::Text(info.value))
        .unwrap_or(FieldValue::Null)
}

/// Writes `value` into a control according to its binding kind and emits
/// the change notification.
///
/// Radio bindings check the radio of the group (binding name, else the
/// element's own name) whose value equals the target; without a group only
/// the element itself is considered.
pub fn write_value(
    dom: &mut dyn PageDomPort,
    element: ElementRef,
    kind: &str,
    value: &FieldValue,
    binding_name: Option<&str>,
    today: NaiveDate,
) -> Result<(), DomError> {
    let info = dom.inspect(element)?;
    let kind = if kind.trim().is_empty() {
        info.kind()
    } else {
        kind.trim().to_lowercase()
    };
    let text = value.as_text().unwrap_or_default();

    match kind.as_str() {
        "checkbox" => {
            dom.set_checked(element, parse_boolean_like(value))?;
            dom.emit_change(element)
        }
        "radio" => {
            let group = binding_name
                .filter(|name| !name.is_empty())
                .or(info.name())
                .map(str::to_string);
            match group {
                Some(name) => {
                    for radio in dom.query_selector_all(&radio_group_selector(&name)) {
                        let on = dom.inspect(radio)?.value == text;
                        dom.set_checked(radio, on)?;
                        if on {
                            dom.emit_change(radio)?;
                        }
                    }
                    Ok(())
                }
                None => {
                    let on = info.value == text;
                    dom.set_checked(element, on)?;
                    if on {
                        dom.emit_change(element)?;
                    }
                    Ok(())
                }
            }
        }
        _ if info.tag == "select" => {
            dom.set_value(element, &text)?;
            dom.emit_change(element)
        }
        "date" => {
            dom.set_value(element, &parse_flexible_date(&text, today))?;
            dom.emit_change(element)
        }
        _ => {
            dom.set_value(element, &text)?;
            dom.emit_change(element)
        }
    }
}

/// Heuristic unique selector: `#id`, then `[name="…"]`, else a
/// `tag:nth-of-type(n)` path joined with ` > `.
///
/// The path stops at the first ancestor carrying an id, or below the root
/// `html` element. It is not stable across structural DOM changes.
pub fn compute_selector(dom: &dyn PageDomPort, element: ElementRef) -> Result<String, DomError> {
    let info = dom.inspect(element)?;
    if let Some(id) = info.id() {
        return Ok(format!("#{}", escape_ident(id)));
    }
    if let Some(name) = info.name() {
        return Ok(attr_selector("name", name));
    }

    let mut path = Vec::new();
    let mut current = Some(info);
    while let Some(node) = current {
        if node.tag == "html" {
            break;
        }
        let mut segment = node.tag.clone();
        if let Some(id) = node.id() {
            segment.push('#');
            segment.push_str(&escape_ident(id));
            path.push(segment);
            break;
        }
        if node.same_tag_siblings > 1 {
            segment.push_str(&format!(":nth-of-type({})", node.nth_of_type));
        }
        path.push(segment);
        current = match node.parent {
            Some(parent) => Some(dom.inspect(parent)?),
            None => None,
        };
    }

    path.reverse();
    Ok(path.join(" > "))
}

/// Scans every form control of the page.
///
/// Controls that cannot be inspected are skipped.
pub fn discover_inputs(dom: &dyn PageDomPort) -> Vec<DiscoveredInput> {
    dom.form_inputs()
        .into_iter()
        .filter_map(|element| {
            let info = dom.inspect(element).ok()?;
            let selector = compute_selector(dom, element).ok()?;
            Some(DiscoveredInput {
                element,
                selector,
                kind: info.kind(),
                name: info.name().map(str::to_string),
                value: normalize_value(&info),
            })
        })
        .collect()
}

pub fn radio_group_selector(name: &str) -> String {
    format!(r#"input[type="radio"]{}"#, attr_selector("name", name))
}

/// Backslash-escapes every character that cannot appear bare in a CSS
/// identifier, e.g. `form:dni` → `form\:dni`.
fn escape_ident(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if !(c.is_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn attr_selector(attr: &str, value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!(r#"[{attr}="{escaped}"]"#)
}
