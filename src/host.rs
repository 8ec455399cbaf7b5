use js_sys::{Array, Function, Reflect};
use leptos::prelude::document;
use leptos::web_sys::{
    Document, Element, Event, HtmlElement, HtmlInputElement, HtmlTextAreaElement,
};
use wasm_bindgen::prelude::*;

use crate::bindings::EventKind;
use crate::editor::EditorOptions;
use crate::error::UiError;

/// Raw element operations the page surface and the editor bootstrap are built on.
pub trait DomHost {
    type Element: Clone;
    type Widget;

    fn element(&self, id: &str) -> Option<Self::Element>;
    fn select_all(&self, selector: &str) -> Result<Vec<Self::Element>, UiError>;
    /// `Some` for form fields, `None` for everything else.
    fn form_value(&self, el: &Self::Element) -> Option<String>;
    fn text(&self, el: &Self::Element) -> String;
    fn has_class(&self, el: &Self::Element, class: &str) -> bool;
    fn set_class(&self, el: &Self::Element, class: &str, on: bool) -> Result<(), UiError>;
    fn set_display(&self, el: &Self::Element, display: &str) -> Result<(), UiError>;
    /// Click listeners suppress the default action before `handler` runs.
    fn listen(
        &self,
        el: &Self::Element,
        event: EventKind,
        handler: Box<dyn FnMut()>,
    ) -> Result<(), UiError>;
    /// `Ok(None)` when no widget of that name is loaded.
    fn construct_widget(
        &self,
        name: &str,
        target: &Self::Element,
        options: &EditorOptions,
    ) -> Result<Option<Self::Widget>, UiError>;
}

#[derive(Clone)]
pub struct BrowserHost {
    document: Document,
}

impl BrowserHost {
    pub fn new() -> Self {
        Self {
            document: document(),
        }
    }
}

impl DomHost for BrowserHost {
    type Element = Element;
    type Widget = JsValue;

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn select_all(&self, selector: &str) -> Result<Vec<Element>, UiError> {
        let nodes = self
            .document
            .query_selector_all(selector)
            .map_err(UiError::js)?;
        Ok((0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn form_value(&self, el: &Element) -> Option<String> {
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        el.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value())
    }

    fn text(&self, el: &Element) -> String {
        el.text_content().unwrap_or_default()
    }

    fn has_class(&self, el: &Element, class: &str) -> bool {
        el.class_list().contains(class)
    }

    fn set_class(&self, el: &Element, class: &str, on: bool) -> Result<(), UiError> {
        el.class_list()
            .toggle_with_force(class, on)
            .map(|_| ())
            .map_err(UiError::js)
    }

    fn set_display(&self, el: &Element, display: &str) -> Result<(), UiError> {
        el.dyn_ref::<HtmlElement>()
            .ok_or_else(|| UiError::Js(format!("<{}> has no style", el.tag_name())))?
            .style()
            .set_property("display", display)
            .map_err(UiError::js)
    }

    fn listen(
        &self,
        el: &Element,
        event: EventKind,
        mut handler: Box<dyn FnMut()>,
    ) -> Result<(), UiError> {
        let closure = Closure::<dyn FnMut(Event)>::new(move |e: Event| {
            if event.prevents_default() {
                e.prevent_default();
            }
            handler();
        });
        el.add_event_listener_with_callback(event.as_str(), closure.as_ref().unchecked_ref())
            .map_err(UiError::js)?;
        closure.forget();
        Ok(())
    }

    fn construct_widget(
        &self,
        name: &str,
        target: &Element,
        options: &EditorOptions,
    ) -> Result<Option<JsValue>, UiError> {
        let Some(ctor) = Reflect::get(&js_sys::global(), &JsValue::from_str(name))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok())
        else {
            return Ok(None);
        };

        let js_options =
            serde_wasm_bindgen::to_value(options).map_err(|err| UiError::js(err.into()))?;
        Reflect::set(&js_options, &JsValue::from_str("element"), target).map_err(UiError::js)?;
        Reflect::construct(&ctor, &Array::of1(&js_options))
            .map(Some)
            .map_err(UiError::js)
    }
}
