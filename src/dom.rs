use std::cell::RefCell;
use std::rc::Rc;

use leptos::logging::{error, warn};
use wasm_bindgen::prelude::*;

use crate::bindings::{registration_table, Action, Binding};
use crate::config::{ElementIds, UiConfig, CONFIG_ELEMENT_ID};
use crate::controller::{Dispatcher, Outcome, PageSurface};
use crate::dialogs::{BrowserDialogs, BrowserNavigator, Navigator, UserInput};
use crate::error::UiError;
use crate::host::{BrowserHost, DomHost};
use crate::view_state::ListItem;

pub type PageDispatcher = Dispatcher<DomSurface<BrowserHost>, BrowserDialogs, BrowserNavigator>;

thread_local! {
    static MOUNTED: RefCell<Option<Rc<PageDispatcher>>> = const { RefCell::new(None) };
}

pub struct DomSurface<H> {
    host: H,
    ids: ElementIds,
    sidebar_class: String,
}

impl<H: DomHost> DomSurface<H> {
    pub fn new(host: H, config: &UiConfig) -> Self {
        Self {
            host,
            ids: config.elements.clone(),
            sidebar_class: config.sidebar_class.0.clone(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn element(&self, id: &str) -> Result<H::Element, UiError> {
        self.host.element(id).ok_or_else(|| UiError::missing(id))
    }

    fn list_items(&self) -> Result<Vec<H::Element>, UiError> {
        self.element(&self.ids.list)?;
        self.host.select_all(&self.ids.list_item_selector())
    }
}

impl<H: DomHost> PageSurface for DomSurface<H> {
    fn read_value(&self, id: &str) -> Result<String, UiError> {
        let el = self.element(id)?;
        Ok(self
            .host
            .form_value(&el)
            .unwrap_or_else(|| self.host.text(&el)))
    }

    fn list_texts(&self) -> Result<Vec<String>, UiError> {
        Ok(self
            .list_items()?
            .iter()
            .map(|item| self.host.text(item))
            .collect())
    }

    fn sidebar_marked(&self) -> Result<bool, UiError> {
        let sidebar = self.element(&self.ids.sidebar)?;
        Ok(self.host.has_class(&sidebar, &self.sidebar_class))
    }

    fn mark_sidebar(&self, toggled: bool) -> Result<(), UiError> {
        let sidebar = self.element(&self.ids.sidebar)?;
        self.host.set_class(&sidebar, &self.sidebar_class, toggled)
    }

    fn show_items(&self, items: &[ListItem]) -> Result<(), UiError> {
        for (el, item) in self.list_items()?.iter().zip(items) {
            let display = if item.visible { "" } else { "none" };
            self.host.set_display(el, display)?;
        }
        Ok(())
    }
}

/// Reads the embedded config block. Falls back to defaults when it is absent or broken.
pub fn load_config<H: DomHost>(host: &H) -> UiConfig {
    let Some(raw) = host.element(CONFIG_ELEMENT_ID).map(|el| host.text(&el)) else {
        return UiConfig::default();
    };
    UiConfig::from_json(&raw).unwrap_or_else(|err| {
        warn!("{err}; using default ui config");
        UiConfig::default()
    })
}

pub fn mount(host: BrowserHost, config: UiConfig) -> Vec<UiError> {
    let table = registration_table(&config.elements);
    let surface = DomSurface::new(host, &config);
    let dispatcher = Rc::new(Dispatcher::new(
        config,
        surface,
        BrowserDialogs,
        BrowserNavigator,
    ));
    let failures = attach_all(&dispatcher, table);
    MOUNTED.with(|slot| *slot.borrow_mut() = Some(dispatcher));
    failures
}

/// Installs every binding of the table. A binding whose element is missing is
/// skipped and reported; the rest are still installed.
pub fn attach_all<H, I, N>(
    dispatcher: &Rc<Dispatcher<DomSurface<H>, I, N>>,
    table: Vec<Binding>,
) -> Vec<UiError>
where
    H: DomHost + 'static,
    I: UserInput + 'static,
    N: Navigator + 'static,
{
    let surface = dispatcher.surface();
    let mut failures = Vec::new();
    if let Err(err) = surface.element(&surface.ids.list) {
        failures.push(err);
    }
    for binding in table {
        if let Err(err) = attach(dispatcher, binding) {
            failures.push(err);
        }
    }
    for err in &failures {
        error!("mount: {err}");
    }
    failures
}

fn attach<H, I, N>(
    dispatcher: &Rc<Dispatcher<DomSurface<H>, I, N>>,
    binding: Binding,
) -> Result<(), UiError>
where
    H: DomHost + 'static,
    I: UserInput + 'static,
    N: Navigator + 'static,
{
    let target = dispatcher.surface().element(&binding.target)?;
    let Binding { event, action, .. } = binding;
    let handler = {
        let dispatcher = Rc::clone(dispatcher);
        Box::new(move || {
            if let Err(err) = dispatcher.dispatch(action) {
                error!("{action:?} failed: {err}");
            }
        })
    };
    dispatcher.surface().host().listen(&target, event, handler)
}

/// Re-runs the list filter from script. Returns the number of visible items.
#[wasm_bindgen(js_name = filterList)]
pub fn filter_list() -> Result<usize, JsValue> {
    let dispatcher = MOUNTED
        .with(|slot| slot.borrow().clone())
        .ok_or_else(|| JsValue::from_str("page controllers are not mounted"))?;
    match dispatcher.dispatch(Action::FilterList)? {
        Outcome::Filtered { visible, .. } => Ok(visible),
        other => Err(JsValue::from_str(&format!("unexpected outcome {other:?}"))),
    }
}
