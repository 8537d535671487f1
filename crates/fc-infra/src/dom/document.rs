use fc_core::error::DomError;
use fc_core::ports::{ElementInfo, ElementRef, PageDomPort};
use tracing::trace;

use super::fixture::{NodeFixture, PageFixture};
use super::selector::{Combinator, Compound, Selector, Step};

const HTML: usize = 0;
const BODY: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomEventKind {
    Input,
    Change,
}

/// Notification dispatched to page scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomEvent {
    pub element: ElementRef,
    pub kind: DomEventKind,
}

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    id: Option<String>,
    name: Option<String>,
    type_attr: Option<String>,
    value: String,
    checked: bool,
    options: Vec<String>,
    parent: Option<usize>,
    children: Vec<usize>,
    attached: bool,
}

impl Node {
    fn new(tag: &str, parent: Option<usize>) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            id: None,
            name: None,
            type_attr: None,
            value: String::new(),
            checked: false,
            options: Vec::new(),
            parent,
            children: Vec::new(),
            attached: true,
        }
    }

    fn is_control(&self) -> bool {
        matches!(self.tag.as_str(), "input" | "select" | "textarea")
    }

    /// The `type` property browsers report for form controls.
    fn type_property(&self) -> Option<String> {
        match self.tag.as_str() {
            "input" => Some(
                self.type_attr
                    .as_deref()
                    .map(|t| t.trim().to_ascii_lowercase())
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| "text".to_string()),
            ),
            "select" => Some("select-one".to_string()),
            "textarea" => Some("textarea".to_string()),
            _ => None,
        }
    }

    fn is_checkable(&self) -> bool {
        matches!(
            self.type_property().as_deref(),
            Some("checkbox") | Some("radio")
        )
    }

    fn attr(&self, name: &str) -> Option<&str> {
        match name {
            "id" => self.id.as_deref(),
            "name" => self.name.as_deref(),
            "type" => self.type_attr.as_deref(),
            "value" if self.tag == "input" => Some(&self.value),
            _ => None,
        }
    }
}

/// Mutable element tree behind [`PageDomPort`].
///
/// Node 0 is `html` and node 1 is `body`; fixture nodes hang under `body`.
/// Detached nodes keep their handles but fail every access.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    hostname: String,
    nodes: Vec<Node>,
    events: Vec<DomEvent>,
}

impl MemoryDocument {
    pub fn new(hostname: impl Into<String>) -> Self {
        let mut html = Node::new("html", None);
        html.children.push(BODY);
        Self {
            hostname: hostname.into(),
            nodes: vec![html, Node::new("body", Some(HTML))],
            events: Vec::new(),
        }
    }

    pub fn from_fixture(fixture: &PageFixture) -> Self {
        let mut doc = Self::new(fixture.hostname.clone());
        for node in &fixture.body {
            doc.append(doc.body(), node);
        }
        doc
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let fixture: PageFixture = serde_json::from_str(json)?;
        Ok(Self::from_fixture(&fixture))
    }

    /// Current state of the attached tree.
    pub fn to_fixture(&self) -> PageFixture {
        PageFixture {
            hostname: self.hostname.clone(),
            body: self.nodes[BODY]
                .children
                .iter()
                .map(|&child| self.node_fixture(child))
                .collect(),
        }
    }

    pub fn body(&self) -> ElementRef {
        ElementRef(BODY)
    }

    /// Appends `fixture` (and its subtree) as last child of `parent`.
    pub fn append(&mut self, parent: ElementRef, fixture: &NodeFixture) -> ElementRef {
        let index = self.nodes.len();
        let mut node = Node::new(&fixture.tag, Some(parent.0));
        node.id = fixture.id.clone();
        node.name = fixture.name.clone();
        node.type_attr = fixture.input_type.clone();
        node.checked = fixture.checked;
        node.options = fixture.options.clone();
        node.value = match &fixture.value {
            Some(value) => value.clone(),
            None if node.tag == "select" => node.options.first().cloned().unwrap_or_default(),
            None if node.is_checkable() => "on".to_string(),
            None => String::new(),
        };
        node.attached = self.nodes.get(parent.0).is_some_and(|p| p.attached);
        self.nodes.push(node);
        if let Some(p) = self.nodes.get_mut(parent.0) {
            p.children.push(index);
        }
        for child in &fixture.children {
            self.append(ElementRef(index), child);
        }
        ElementRef(index)
    }

    /// Removes `element` and its subtree from the document.
    pub fn detach(&mut self, element: ElementRef) {
        if element.0 <= BODY || element.0 >= self.nodes.len() {
            return;
        }
        if let Some(parent) = self.nodes[element.0].parent {
            self.nodes[parent].children.retain(|&c| c != element.0);
        }
        let mut stack = vec![element.0];
        while let Some(index) = stack.pop() {
            self.nodes[index].attached = false;
            stack.extend(self.nodes[index].children.iter().copied());
        }
    }

    pub fn events(&self) -> &[DomEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<DomEvent> {
        std::mem::take(&mut self.events)
    }

    /// Convenience lookup of the current value of the first match.
    pub fn value_of(&self, selector: &str) -> Option<&str> {
        let element = self.query_selector(selector)?;
        Some(self.nodes[element.0].value.as_str())
    }

    pub fn is_checked(&self, selector: &str) -> Option<bool> {
        let element = self.query_selector(selector)?;
        Some(self.nodes[element.0].checked)
    }

    fn node(&self, element: ElementRef) -> Result<&Node, DomError> {
        self.nodes
            .get(element.0)
            .filter(|n| n.attached)
            .ok_or(DomError::Detached)
    }

    fn node_mut(&mut self, element: ElementRef) -> Result<&mut Node, DomError> {
        self.nodes
            .get_mut(element.0)
            .filter(|n| n.attached)
            .ok_or(DomError::Detached)
    }

    fn node_fixture(&self, index: usize) -> NodeFixture {
        let node = &self.nodes[index];
        NodeFixture {
            tag: node.tag.clone(),
            id: node.id.clone(),
            name: node.name.clone(),
            input_type: node.type_attr.clone(),
            value: (node.is_control() && !node.value.is_empty()).then(|| node.value.clone()),
            checked: node.checked,
            options: node.options.clone(),
            children: node
                .children
                .iter()
                .map(|&child| self.node_fixture(child))
                .collect(),
        }
    }

    /// Attached nodes in document order.
    fn preorder(&self) -> Vec<usize> {
        let mut order = Vec::new();
        let mut stack = vec![HTML];
        while let Some(index) = stack.pop() {
            order.push(index);
            stack.extend(self.nodes[index].children.iter().rev().copied());
        }
        order
    }

    fn same_tag_position(&self, index: usize) -> (usize, usize) {
        let node = &self.nodes[index];
        let Some(parent) = node.parent else {
            return (1, 1);
        };
        let siblings: Vec<usize> = self.nodes[parent]
            .children
            .iter()
            .copied()
            .filter(|&c| self.nodes[c].tag == node.tag)
            .collect();
        let position = siblings.iter().position(|&c| c == index).unwrap_or(0) + 1;
        (position, siblings.len())
    }

    fn matches_compound(&self, index: usize, compound: &Compound) -> bool {
        let node = &self.nodes[index];
        if compound.tag.as_ref().is_some_and(|tag| *tag != node.tag) {
            return false;
        }
        if compound
            .id
            .as_ref()
            .is_some_and(|id| node.id.as_deref() != Some(id.as_str()))
        {
            return false;
        }
        let attrs_ok = compound.attrs.iter().all(|test| match node.attr(&test.name) {
            None => false,
            Some(actual) => test.value.as_deref().map_or(true, |v| v == actual),
        });
        if !attrs_ok {
            return false;
        }
        if compound.checked && !(node.is_checkable() && node.checked) {
            return false;
        }
        match compound.nth_of_type {
            Some(n) => self.same_tag_position(index).0 == n,
            None => true,
        }
    }

    fn matches_steps(&self, index: usize, steps: &[Step]) -> bool {
        let Some((last, rest)) = steps.split_last() else {
            return true;
        };
        if !self.matches_compound(index, &last.compound) {
            return false;
        }
        if rest.is_empty() {
            return true;
        }
        match last.combinator {
            Combinator::Child => self.nodes[index]
                .parent
                .is_some_and(|parent| self.matches_steps(parent, rest)),
            Combinator::Descendant => {
                let mut ancestor = self.nodes[index].parent;
                while let Some(a) = ancestor {
                    if self.matches_steps(a, rest) {
                        return true;
                    }
                    ancestor = self.nodes[a].parent;
                }
                false
            }
        }
    }
}

impl PageDomPort for MemoryDocument {
    fn hostname(&self) -> String {
        self.hostname.clone()
    }

    fn form_inputs(&self) -> Vec<ElementRef> {
        self.preorder()
            .into_iter()
            .filter(|&i| self.nodes[i].is_control())
            .map(ElementRef)
            .collect()
    }

    fn query_selector_all(&self, selector: &str) -> Vec<ElementRef> {
        let Some(parsed) = Selector::parse(selector) else {
            trace!(selector, "unsupported selector");
            return Vec::new();
        };
        self.preorder()
            .into_iter()
            .filter(|&i| self.matches_steps(i, &parsed.steps))
            .map(ElementRef)
            .collect()
    }

    fn inspect(&self, element: ElementRef) -> Result<ElementInfo, DomError> {
        let node = self.node(element)?;
        let (nth_of_type, same_tag_siblings) = self.same_tag_position(element.0);
        Ok(ElementInfo {
            tag: node.tag.clone(),
            input_type: node.type_property(),
            id: node.id.clone(),
            name: node.name.clone(),
            value: node.value.clone(),
            checked: node.checked,
            parent: node.parent.map(ElementRef),
            nth_of_type,
            same_tag_siblings,
        })
    }

    fn set_value(&mut self, element: ElementRef, value: &str) -> Result<(), DomError> {
        let node = self.node_mut(element)?;
        if node.tag == "select" {
            // Unknown options leave the select without a selection.
            node.value = if node.options.iter().any(|o| o == value) {
                value.to_string()
            } else {
                String::new()
            };
        } else {
            node.value = value.to_string();
        }
        Ok(())
    }

    fn set_checked(&mut self, element: ElementRef, checked: bool) -> Result<(), DomError> {
        let node = self.node(element)?;
        if !node.is_checkable() {
            return Err(DomError::Unsupported("checked state"));
        }
        let radio_group = (checked && node.type_property().as_deref() == Some("radio"))
            .then(|| node.name.clone())
            .flatten();

        if let Some(group) = radio_group {
            for other in self.nodes.iter_mut().filter(|n| {
                n.attached
                    && n.tag == "input"
                    && n.name.as_deref() == Some(group.as_str())
                    && n.type_property().as_deref() == Some("radio")
            }) {
                other.checked = false;
            }
        }
        self.node_mut(element)?.checked = checked;
        Ok(())
    }

    fn emit_change(&mut self, element: ElementRef) -> Result<(), DomError> {
        self.node(element)?;
        self.events.push(DomEvent {
            element,
            kind: DomEventKind::Input,
        });
        self.events.push(DomEvent {
            element,
            kind: DomEventKind::Change,
        });
        Ok(())
    }
}
