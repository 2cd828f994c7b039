// ============================================================================
// APP - Binding del widget al documento real
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, MouseEvent, Node};

use crate::config::{ElementIds, WidgetConfig};
use crate::dom::{document, require_element, EventListener};
use crate::services::HttpUserApi;
use crate::utils::{LocalTokenStore, WindowNavigator};
use crate::viewmodels::{LoadOutcome, ProfileElements, ProfileWidget};

pub type LiveProfileWidget = ProfileWidget<Element, LocalTokenStore, WindowNavigator>;

/// Mounted widget plus the listeners that drive it.
pub struct ProfileApp {
    widget: Rc<LiveProfileWidget>,
    listeners: Vec<EventListener>,
}

impl ProfileApp {
    /// Bind to the page, attach listeners and start the user load.
    pub fn mount(config: &WidgetConfig) -> Result<Self, JsValue> {
        let elements = bind_elements(&config.element_ids)?;
        let widget = Rc::new(ProfileWidget::new(
            elements,
            LocalTokenStore::new(config.token_storage_key.clone()),
            WindowNavigator,
            config,
        ));

        let listeners = attach_listeners(&widget)?;
        log::info!("✅ [APP] {} listeners registrados", listeners.len());

        let api = HttpUserApi::new(config.current_user_endpoint.clone());
        let loader = widget.clone();
        spawn_local(async move {
            match loader.load_user(&api).await {
                LoadOutcome::Rendered(_) => {}
                LoadOutcome::Redirected(reason) => log::info!("🔒 [APP] Redirect a login: {}", reason),
                LoadOutcome::Discarded => log::debug!("🔌 [APP] Carga descartada"),
            }
        });

        Ok(Self { widget, listeners })
    }
}

impl Drop for ProfileApp {
    fn drop(&mut self) {
        self.widget.teardown();
        self.listeners.clear();
        log::info!("🔌 [APP] Widget de perfil desmontado");
    }
}

fn bind_elements(ids: &ElementIds) -> Result<ProfileElements<Element>, JsValue> {
    Ok(ProfileElements {
        trigger: require_element(&ids.trigger)?,
        panel: require_element(&ids.panel)?,
        badge: require_element(&ids.badge)?,
        name: require_element(&ids.name)?,
        email: require_element(&ids.email)?,
        logout: require_element(&ids.logout)?,
    })
}

fn attach_listeners(widget: &Rc<LiveProfileWidget>) -> Result<Vec<EventListener>, JsValue> {
    let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;
    let elements = widget.elements();

    let trigger = {
        let widget = widget.clone();
        EventListener::click(elements.trigger.as_ref(), move |e: MouseEvent| {
            widget.handle_trigger_click(&e);
        })?
    };

    let outside = {
        let widget = widget.clone();
        EventListener::click(doc.as_ref(), move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            widget.handle_document_click(target.as_ref());
        })?
    };

    let logout = {
        let widget = widget.clone();
        EventListener::click(elements.logout.as_ref(), move |_e: MouseEvent| {
            widget.logout();
        })?
    };

    Ok(vec![trigger, outside, logout])
}
