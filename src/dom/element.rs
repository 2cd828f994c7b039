// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Node, Window};

use crate::errors::ProfileError;

/// What the widget needs from a display element.
pub trait ElementHandle {
    /// Event-target type `contains` is checked against.
    type Node;

    fn set_text(&self, text: &str);
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ProfileError>;
    /// Add `class` when `force` is true, remove it otherwise.
    fn toggle_class(&self, class: &str, force: bool) -> Result<(), ProfileError>;
    /// True when `node` is this element or one of its descendants.
    fn contains(&self, node: &Self::Node) -> bool;
}

impl ElementHandle for Element {
    type Node = Node;

    fn set_text(&self, text: &str) {
        set_text_content(self, text);
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ProfileError> {
        set_attribute(self, name, value).map_err(|e| ProfileError::from_js(&e))
    }

    fn toggle_class(&self, class: &str, force: bool) -> Result<(), ProfileError> {
        toggle_class(self, class, force).map_err(|e| ProfileError::from_js(&e))
    }

    fn contains(&self, node: &Node) -> bool {
        Node::contains(self, Some(node))
    }
}

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Como `get_element_by_id`, pero con error si no existe
pub fn require_element(id: &str) -> Result<Element, JsValue> {
    get_element_by_id(id).ok_or_else(|| JsValue::from_str(&format!("No #{} element found", id)))
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Agregar o quitar clase según `force`
pub fn toggle_class(element: &Element, class: &str, force: bool) -> Result<(), JsValue> {
    element.class_list().toggle_with_force(class, force).map(|_| ())
}

/// ¿El documento sigue cargando?
pub fn document_is_loading() -> bool {
    document()
        .map(|doc| is_loading_state(&doc.ready_state()))
        .unwrap_or(false)
}

/// `document.readyState` antes de DOMContentLoaded
pub fn is_loading_state(ready_state: &str) -> bool {
    ready_state == "loading"
}
