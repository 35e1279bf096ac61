#![forbid(unsafe_code)]

//! [`Page`] over the live DOM via `web-sys`.
//!
//! DOM exceptions are never propagated: a failed lookup reads as "missing",
//! a failed mutation is logged at `trace` and skipped.

use retrofolio_core::page::{Page, Rect, Role, Span, Viewport};
use retrofolio_core::PageError;
use tracing::trace;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement, ScrollBehavior, ScrollToOptions, Storage, Window,
};

#[derive(Debug, Clone)]
pub(crate) struct DomPage {
    window: Window,
    document: Document,
}

impl DomPage {
    pub(crate) fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    pub(crate) fn document(&self) -> &Document {
        &self.document
    }

    fn storage(&self) -> Result<Storage, PageError> {
        match self.window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) | Err(_) => Err(PageError::StorageUnavailable),
        }
    }

    fn create(&self, tag: &str, class: &str) -> Option<Element> {
        let el = self.document.create_element(tag).ok()?;
        el.set_class_name(class);
        Some(el)
    }
}

fn rejected(key: &str, err: &JsValue) -> PageError {
    PageError::StorageRejected {
        key: key.to_owned(),
        reason: err
            .as_string()
            .unwrap_or_else(|| format!("{err:?}")),
    }
}

impl Page for DomPage {
    type Element = Element;

    fn find_all(&self, role: Role) -> Vec<Element> {
        let Ok(nodes) = self.document.query_selector_all(role.selector()) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn find(&self, role: Role) -> Option<Element> {
        self.document.query_selector(role.selector()).ok().flatten()
    }

    fn find_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn find_within(&self, parent: &Element, role: Role) -> Option<Element> {
        parent.query_selector(role.selector()).ok().flatten()
    }

    fn matches(&self, el: &Element, role: Role) -> bool {
        el.matches(role.selector()).unwrap_or(false)
    }

    fn attribute(&self, el: &Element, name: &str) -> Option<String> {
        el.get_attribute(name)
    }

    fn set_attribute(&self, el: &Element, name: &str, value: &str) {
        if el.set_attribute(name, value).is_err() {
            trace!(name, "set_attribute rejected");
        }
    }

    fn has_class(&self, el: &Element, class: &str) -> bool {
        el.class_list().contains(class)
    }

    fn add_class(&self, el: &Element, class: &str) {
        let _ = el.class_list().add_1(class);
    }

    fn remove_class(&self, el: &Element, class: &str) {
        let _ = el.class_list().remove_1(class);
    }

    fn set_style(&self, el: &Element, property: &str, value: &str) {
        let Some(el) = el.dyn_ref::<HtmlElement>() else {
            return;
        };
        let style = el.style();
        let result = if value.is_empty() {
            style.remove_property(property).map(drop)
        } else {
            style.set_property(property, value)
        };
        if result.is_err() {
            trace!(property, "style update rejected");
        }
    }

    fn set_text(&self, el: &Element, text: &str) {
        el.set_text_content(Some(text));
    }

    fn html(&self, el: &Element) -> String {
        el.inner_html()
    }

    fn set_html(&self, el: &Element, html: &str) {
        el.set_inner_html(html);
    }

    fn value(&self, el: &Element) -> String {
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn set_disabled(&self, el: &Element, disabled: bool) {
        if let Some(button) = el.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
        } else if disabled {
            let _ = el.set_attribute("disabled", "");
        } else {
            let _ = el.remove_attribute("disabled");
        }
    }

    fn reset_form(&self, form: &Element) {
        if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }

    fn offset(&self, el: &Element) -> Span {
        el.dyn_ref::<HtmlElement>()
            .map(|el| Span::new(f64::from(el.offset_top()), f64::from(el.offset_height())))
            .unwrap_or_default()
    }

    fn bounding_rect(&self, el: &Element) -> Rect {
        let rect = el.get_bounding_client_rect();
        Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }

    fn append_to_body(&self, tag: &str, class: &str) -> Option<Element> {
        let body = self.document.body()?;
        let el = self.create(tag, class)?;
        body.append_child(&el).ok()?;
        Some(el)
    }

    fn append_child(&self, parent: &Element, tag: &str, class: &str) -> Option<Element> {
        let el = self.create(tag, class)?;
        parent.append_child(&el).ok()?;
        Some(el)
    }

    fn inject_style(&self, css: &str) -> Option<Element> {
        let head = self.document.head()?;
        let sheet = self.document.create_element("style").ok()?;
        sheet.set_text_content(Some(css));
        head.append_child(&sheet).ok()?;
        Some(sheet)
    }

    fn remove(&self, el: &Element) {
        el.remove();
    }

    fn scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn viewport(&self) -> Viewport {
        let metric = |value: Result<JsValue, JsValue>| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
        };
        Viewport {
            width: metric(self.window.inner_width()),
            height: metric(self.window.inner_height()),
            scroll_y: self.window.scroll_y().unwrap_or(0.0),
        }
    }

    fn load_preference(&self, key: &str) -> Result<Option<String>, PageError> {
        self.storage()?
            .get_item(key)
            .map_err(|err| rejected(key, &err))
    }

    fn store_preference(&self, key: &str, value: &str) -> Result<(), PageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| rejected(key, &err))
    }
}
