use crate::error::DomError;

/// Opaque handle to an element of the page document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementRef(pub usize);

/// Snapshot of the element properties the normalizer relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementInfo {
    /// Lower-case tag name.
    pub tag: String,
    /// The control's `type` property (`text`, `checkbox`, `select-one`,
    /// `textarea`, ...); `None` for non-control elements.
    pub input_type: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub value: String,
    pub checked: bool,
    pub parent: Option<ElementRef>,
    /// 1-based position among siblings sharing the tag.
    pub nth_of_type: usize,
    /// Number of siblings (self included) sharing the tag.
    pub same_tag_siblings: usize,
}

impl ElementInfo {
    /// Input kind recorded in bindings: the control type, else the tag.
    pub fn kind(&self) -> String {
        self.input_type
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.tag)
            .to_lowercase()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

/// Page document collaborator.
///
/// DOM scans and mutations run synchronously inside a single page context.
pub trait PageDomPort: Send + Sync {
    /// Hostname of the page, used as mapping domain.
    fn hostname(&self) -> String;

    /// All `input`, `select` and `textarea` elements in document order.
    fn form_inputs(&self) -> Vec<ElementRef>;

    /// Elements matching a CSS selector, in document order.
    fn query_selector_all(&self, selector: &str) -> Vec<ElementRef>;

    fn query_selector(&self, selector: &str) -> Option<ElementRef> {
        self.query_selector_all(selector).into_iter().next()
    }

    fn inspect(&self, element: ElementRef) -> Result<ElementInfo, DomError>;

    fn set_value(&mut self, element: ElementRef, value: &str) -> Result<(), DomError>;

    fn set_checked(&mut self, element: ElementRef, checked: bool) -> Result<(), DomError>;

    /// Emits the standard input + change notification so page scripts
    /// observe a programmatic update.
    fn emit_change(&mut self, element: ElementRef) -> Result<(), DomError>;
}
