#![forbid(unsafe_code)]

//! In-memory [`Page`] implementation.
//!
//! A flat arena of nodes linked into a tree under `<html>`. Role matching
//! mirrors the selectors in [`Role::selector`] using tags, ids, classes and
//! attributes only, which is all the portfolio markup needs.
//!
//! Removed nodes stay in the arena but are unreachable from the root, so
//! handles held by the controller remain valid and can be inspected.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use retrofolio_core::page::{Page, Rect, Role, Span, Viewport};
use retrofolio_core::{Field, PageError};

/// Handle to a node in a [`FakePage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// How the fake preference storage behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageMode {
    #[default]
    Available,
    /// Reads and writes fail with [`PageError::StorageUnavailable`].
    Unavailable,
    /// Reads succeed, writes are rejected.
    ReadOnly,
}

/// Declarative description of a node to insert.
#[derive(Debug, Clone, Default)]
pub struct NodeSpec {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    html: String,
    value: String,
    offset: Span,
    rect: Rect,
}

impl NodeSpec {
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_owned(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_owned());
        self
    }

    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        self.classes.extend(class.split_whitespace().map(str::to_owned));
        self
    }

    #[must_use]
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_owned(), value.to_owned());
        self
    }

    #[must_use]
    pub fn html(mut self, html: &str) -> Self {
        self.html = html.to_owned();
        self
    }

    /// Initial value of a form control; [`Page::reset_form`] restores it.
    #[must_use]
    pub fn value(mut self, value: &str) -> Self {
        self.value = value.to_owned();
        self
    }

    #[must_use]
    pub fn offset(mut self, top: f64, height: f64) -> Self {
        self.offset = Span::new(top, height);
        self
    }

    #[must_use]
    pub fn rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }
}

#[derive(Debug, Clone, Default)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    html: String,
    value: String,
    initial_value: String,
    disabled: bool,
    offset: Span,
    rect: Rect,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn from_spec(spec: NodeSpec, parent: NodeId) -> Self {
        Self {
            tag: spec.tag,
            id: spec.id,
            classes: spec.classes,
            attrs: spec.attrs,
            html: spec.html,
            initial_value: spec.value.clone(),
            value: spec.value,
            offset: spec.offset,
            rect: spec.rect,
            parent: Some(parent),
            ..Self::default()
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn id_is(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }

    fn matches(&self, role: Role) -> bool {
        match role {
            Role::Root => self.tag == "html",
            Role::Body => self.tag == "body",
            Role::Header => self.has_class("header"),
            Role::ThemeToggle => self.id_is("themeToggle"),
            Role::MobileMenuButton => self.id_is("mobileMenuBtn"),
            Role::Nav => self.has_class("nav"),
            Role::NavLink => self.has_class("nav-link"),
            Role::Anchor => {
                self.tag == "a" && self.attrs.get("href").is_some_and(|h| h.starts_with('#'))
            }
            Role::Section => self.tag == "section" && self.id.is_some(),
            Role::Shape => self.has_class("shape"),
            Role::PixelGrid => self.has_class("pixel-grid"),
            Role::FilterButton => self.has_class("filter-btn"),
            Role::ProjectCard => self.has_class("project-card"),
            Role::SkillItem => self.has_class("skill-item"),
            Role::SkillProgress => self.has_class("skill-progress"),
            Role::ContactForm => self.id_is("contactForm"),
            Role::SubmitButton => self.has_class("submit-btn"),
            Role::FieldInput(field) => self.id_is(field.name()),
            Role::FieldError(field) => self.id_is(&error_id(field)),
            Role::HeroTitle => self.has_class("hero-title"),
            Role::TrailMarker => self.has_class("cursor-trail"),
            Role::LoadingProgress => self.has_class("loading-progress"),
            Role::RevealTarget => [
                "section-title",
                "avatar-frame",
                "about-text",
                "skill-item",
                "project-card",
                "contact-form",
                "social-links",
            ]
            .iter()
            .any(|class| self.has_class(class)),
            Role::LazyAnimated => self.has_class("computer-mascot") || self.has_class("sparkle"),
        }
    }
}

fn error_id(field: Field) -> String {
    format!("{}Error", field.name())
}

/// Parse `prop: value; prop: value` into `(prop, value)` pairs.
fn parse_declarations(css: &str) -> impl Iterator<Item = (String, String)> + '_ {
    css.split(';').filter_map(|decl| {
        let (prop, value) = decl.split_once(':')?;
        let prop = prop.trim();
        (!prop.is_empty()).then(|| (prop.to_owned(), value.trim().to_owned()))
    })
}

/// In-memory page.
#[derive(Debug)]
pub struct FakePage {
    nodes: RefCell<Vec<Node>>,
    viewport: Cell<Viewport>,
    storage: RefCell<BTreeMap<String, String>>,
    storage_mode: Cell<StorageMode>,
    scrolls: RefCell<Vec<f64>>,
}

impl Default for FakePage {
    fn default() -> Self {
        Self::new()
    }
}

impl FakePage {
    const ROOT: NodeId = NodeId(0);
    const HEAD: NodeId = NodeId(1);
    const BODY: NodeId = NodeId(2);

    /// Empty document: `<html><head/><body/></html>`, 1280x800 viewport.
    #[must_use]
    pub fn new() -> Self {
        let root = Node {
            tag: "html".into(),
            children: vec![Self::HEAD, Self::BODY],
            ..Node::default()
        };
        let head = Node {
            tag: "head".into(),
            parent: Some(Self::ROOT),
            ..Node::default()
        };
        let body = Node {
            tag: "body".into(),
            parent: Some(Self::ROOT),
            ..Node::default()
        };
        Self {
            nodes: RefCell::new(vec![root, head, body]),
            viewport: Cell::new(Viewport {
                width: 1280.0,
                height: 800.0,
                scroll_y: 0.0,
            }),
            storage: RefCell::new(BTreeMap::new()),
            storage_mode: Cell::new(StorageMode::Available),
            scrolls: RefCell::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        Self::ROOT
    }

    #[must_use]
    pub fn body(&self) -> NodeId {
        Self::BODY
    }

    /// Append a node described by `spec` under `parent`.
    pub fn insert(&self, parent: NodeId, spec: NodeSpec) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        nodes.push(Node::from_spec(spec, parent));
        nodes[parent.0].children.push(id);
        id
    }

    // --- environment -------------------------------------------------------

    pub fn set_viewport(&self, viewport: Viewport) {
        self.viewport.set(viewport);
    }

    pub fn set_width(&self, width: f64) {
        let mut viewport = self.viewport.get();
        viewport.width = width;
        self.viewport.set(viewport);
    }

    pub fn set_scroll_y(&self, scroll_y: f64) {
        let mut viewport = self.viewport.get();
        viewport.scroll_y = scroll_y;
        self.viewport.set(viewport);
    }

    pub fn set_storage_mode(&self, mode: StorageMode) {
        self.storage_mode.set(mode);
    }

    /// Seed a stored preference regardless of the storage mode.
    pub fn seed_preference(&self, key: &str, value: &str) {
        self.storage
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }

    #[must_use]
    pub fn stored(&self, key: &str) -> Option<String> {
        self.storage.borrow().get(key).cloned()
    }

    /// Every `scroll_to` target requested so far.
    #[must_use]
    pub fn scroll_log(&self) -> Vec<f64> {
        self.scrolls.borrow().clone()
    }

    // --- inspection --------------------------------------------------------

    pub fn set_value(&self, el: NodeId, value: &str) {
        self.nodes.borrow_mut()[el.0].value = value.to_owned();
    }

    pub fn set_rect(&self, el: NodeId, rect: Rect) {
        self.nodes.borrow_mut()[el.0].rect = rect;
    }

    #[must_use]
    pub fn style(&self, el: NodeId, property: &str) -> Option<String> {
        self.nodes.borrow()[el.0].styles.get(property).cloned()
    }

    #[must_use]
    pub fn text(&self, el: NodeId) -> String {
        self.nodes.borrow()[el.0].text.clone()
    }

    #[must_use]
    pub fn is_disabled(&self, el: NodeId) -> bool {
        self.nodes.borrow()[el.0].disabled
    }

    #[must_use]
    pub fn classes(&self, el: NodeId) -> Vec<String> {
        self.nodes.borrow()[el.0].classes.clone()
    }

    /// Whether `el` is still reachable from the document root.
    #[must_use]
    pub fn is_attached(&self, el: NodeId) -> bool {
        let nodes = self.nodes.borrow();
        let mut current = el;
        loop {
            if current == Self::ROOT {
                return true;
            }
            let Some(parent) = nodes[current.0].parent else {
                return false;
            };
            if !nodes[parent.0].children.contains(&current) {
                return false;
            }
            current = parent;
        }
    }

    /// Attached elements carrying `class`, in document order.
    #[must_use]
    pub fn find_by_class(&self, class: &str) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        self.descendants(Self::ROOT)
            .into_iter()
            .filter(|id| nodes[id.0].has_class(class))
            .collect()
    }

    /// Text of every attached `<style>` sheet, in document order.
    #[must_use]
    pub fn style_sheets(&self) -> Vec<String> {
        let nodes = self.nodes.borrow();
        self.descendants(Self::HEAD)
            .into_iter()
            .filter(|id| nodes[id.0].tag == "style")
            .map(|id| nodes[id.0].text.clone())
            .collect()
    }

    /// Look up by id; panics when absent, for terse test setup.
    #[must_use]
    pub fn by_id(&self, id: &str) -> NodeId {
        match self.find_by_id(id) {
            Some(node) => node,
            None => panic!("no element with id {id:?}"),
        }
    }

    fn descendants(&self, from: NodeId) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = nodes[from.0].children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(nodes[id.0].children.iter().rev().copied());
        }
        out
    }

    fn create(&self, parent: NodeId, tag: &str, class: &str) -> NodeId {
        self.insert(parent, NodeSpec::new(tag).class(class))
    }
}

impl Page for FakePage {
    type Element = NodeId;

    fn find_all(&self, role: Role) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        std::iter::once(Self::ROOT)
            .chain(self.descendants(Self::ROOT))
            .filter(|id| nodes[id.0].matches(role))
            .collect()
    }

    fn find_by_id(&self, id: &str) -> Option<NodeId> {
        let nodes = self.nodes.borrow();
        self.descendants(Self::ROOT)
            .into_iter()
            .find(|node| nodes[node.0].id_is(id))
    }

    fn find_within(&self, parent: &NodeId, role: Role) -> Option<NodeId> {
        let nodes = self.nodes.borrow();
        self.descendants(*parent)
            .into_iter()
            .find(|id| nodes[id.0].matches(role))
    }

    fn matches(&self, el: &NodeId, role: Role) -> bool {
        self.nodes.borrow()[el.0].matches(role)
    }

    fn attribute(&self, el: &NodeId, name: &str) -> Option<String> {
        let nodes = self.nodes.borrow();
        let node = &nodes[el.0];
        match name {
            "id" => node.id.clone(),
            "class" => Some(node.classes.join(" ")),
            _ => node.attrs.get(name).cloned(),
        }
    }

    fn set_attribute(&self, el: &NodeId, name: &str, value: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let node = &mut nodes[el.0];
        match name {
            "id" => node.id = Some(value.to_owned()),
            "style" => node.styles = parse_declarations(value).collect(),
            _ => {
                node.attrs.insert(name.to_owned(), value.to_owned());
            }
        }
    }

    fn has_class(&self, el: &NodeId, class: &str) -> bool {
        self.nodes.borrow()[el.0].has_class(class)
    }

    fn add_class(&self, el: &NodeId, class: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let node = &mut nodes[el.0];
        if !node.has_class(class) {
            node.classes.push(class.to_owned());
        }
    }

    fn remove_class(&self, el: &NodeId, class: &str) {
        self.nodes.borrow_mut()[el.0].classes.retain(|c| c != class);
    }

    fn set_style(&self, el: &NodeId, property: &str, value: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let styles = &mut nodes[el.0].styles;
        if value.is_empty() {
            styles.remove(property);
        } else {
            styles.insert(property.to_owned(), value.to_owned());
        }
    }

    fn set_text(&self, el: &NodeId, text: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let node = &mut nodes[el.0];
        node.text = text.to_owned();
        node.html = text.to_owned();
    }

    fn html(&self, el: &NodeId) -> String {
        self.nodes.borrow()[el.0].html.clone()
    }

    fn set_html(&self, el: &NodeId, html: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let node = &mut nodes[el.0];
        node.html = html.to_owned();
        node.text = html.to_owned();
    }

    fn value(&self, el: &NodeId) -> String {
        self.nodes.borrow()[el.0].value.clone()
    }

    fn set_disabled(&self, el: &NodeId, disabled: bool) {
        self.nodes.borrow_mut()[el.0].disabled = disabled;
    }

    fn reset_form(&self, form: &NodeId) {
        let controls = self.descendants(*form);
        let mut nodes = self.nodes.borrow_mut();
        for id in controls {
            let node = &mut nodes[id.0];
            node.value = node.initial_value.clone();
        }
    }

    fn offset(&self, el: &NodeId) -> Span {
        self.nodes.borrow()[el.0].offset
    }

    fn bounding_rect(&self, el: &NodeId) -> Rect {
        self.nodes.borrow()[el.0].rect
    }

    fn append_to_body(&self, tag: &str, class: &str) -> Option<NodeId> {
        Some(self.create(Self::BODY, tag, class))
    }

    fn append_child(&self, parent: &NodeId, tag: &str, class: &str) -> Option<NodeId> {
        Some(self.create(*parent, tag, class))
    }

    fn inject_style(&self, css: &str) -> Option<NodeId> {
        let sheet = self.insert(Self::HEAD, NodeSpec::new("style"));
        self.set_text(&sheet, css);
        Some(sheet)
    }

    fn remove(&self, el: &NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        if let Some(parent) = nodes[el.0].parent {
            nodes[parent.0].children.retain(|child| child != el);
        }
    }

    fn scroll_to(&self, top: f64) {
        self.scrolls.borrow_mut().push(top);
    }

    fn viewport(&self) -> Viewport {
        self.viewport.get()
    }

    fn load_preference(&self, key: &str) -> Result<Option<String>, PageError> {
        match self.storage_mode.get() {
            StorageMode::Unavailable => Err(PageError::StorageUnavailable),
            StorageMode::Available | StorageMode::ReadOnly => Ok(self.stored(key)),
        }
    }

    fn store_preference(&self, key: &str, value: &str) -> Result<(), PageError> {
        match self.storage_mode.get() {
            StorageMode::Available => {
                self.seed_preference(key, value);
                Ok(())
            }
            StorageMode::Unavailable => Err(PageError::StorageUnavailable),
            StorageMode::ReadOnly => Err(PageError::StorageRejected {
                key: key.to_owned(),
                reason: "quota exceeded".to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn find_all_walks_document_order() {
        let page = FakePage::new();
        let a = page.insert(page.body(), NodeSpec::new("div").class("shape"));
        let wrapper = page.insert(page.body(), NodeSpec::new("div"));
        let b = page.insert(wrapper, NodeSpec::new("div").class("shape one"));
        let c = page.insert(page.body(), NodeSpec::new("div").class("shape"));
        assert_eq!(page.find_all(Role::Shape), vec![a, b, c]);
        assert_eq!(page.find(Role::Root), Some(page.root()));
    }

    #[test]
    fn removed_nodes_are_unreachable_but_inspectable() {
        let page = FakePage::new();
        let marker = page.append_to_body("div", "cursor-trail").unwrap();
        page.set_style(&marker, "left", "4px");
        page.remove(&marker);
        assert!(page.find_all(Role::TrailMarker).is_empty());
        assert!(!page.is_attached(marker));
        assert_eq!(page.style(marker, "left").as_deref(), Some("4px"));
    }

    #[test]
    fn style_attribute_replaces_inline_styles() {
        let page = FakePage::new();
        let el = page.append_to_body("div", "x").unwrap();
        page.set_style(&el, "color", "red");
        page.set_attribute(&el, "style", "left: 0px; top: 2px; opacity: 0.5;");
        assert_eq!(page.style(el, "color"), None);
        assert_eq!(page.style(el, "top").as_deref(), Some("2px"));
        page.set_style(&el, "top", "");
        assert_eq!(page.style(el, "top"), None);
    }

    #[test]
    fn storage_modes() {
        let page = FakePage::new();
        page.store_preference("theme", "dark").unwrap();
        page.set_storage_mode(StorageMode::ReadOnly);
        assert_eq!(page.load_preference("theme"), Ok(Some("dark".into())));
        assert!(matches!(
            page.store_preference("theme", "light"),
            Err(PageError::StorageRejected { .. })
        ));
        page.set_storage_mode(StorageMode::Unavailable);
        assert_eq!(
            page.load_preference("theme"),
            Err(PageError::StorageUnavailable)
        );
    }

    #[test]
    fn reset_form_restores_initial_values() {
        let page = FakePage::new();
        let form = page.insert(page.body(), NodeSpec::new("form").id("contactForm"));
        let input = page.insert(form, NodeSpec::new("input").id("name").value(""));
        page.set_value(input, "Ada");
        page.reset_form(&form);
        assert_eq!(page.value(&input), "");
    }
}
