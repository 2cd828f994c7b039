// ============================================================================
// PROFILE WIDGET - Dropdown de perfil de usuario (Rust + WASM)
// ============================================================================
// - ViewModel: estado del dropdown + carga/render/logout (testeable sin DOM)
// - Services: SOLO comunicación HTTP
// - Utils: storage del token, navegación, constantes
// - App: binding al documento real
//
// Config del host: <script type="application/json" id="profile-widget-config">
// leído antes del primer mount. Con `data-manual-mount` no se monta solo y el
// host llama a `mount_profile_widget_with_config`.
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::ProfileApp;
use crate::config::{StartupPlan, WidgetConfig, CONFIG_ELEMENT_ID, MANUAL_MOUNT_ATTRIBUTE};
use crate::dom::{document, document_is_loading, get_element_by_id, on_event_once};
use crate::state::MountSchedule;

// Instancia montada; vive lo que vive la página salvo unmount explícito
thread_local! {
    static APP: RefCell<Option<ProfileApp>> = const { RefCell::new(None) };
    static SCHEDULE: MountSchedule = const { MountSchedule::new() };
}

/// Qué montar cuando el documento esté listo
enum PendingMount {
    /// Leer la config del host al montar
    FromHost,
    Config(WidgetConfig),
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(Config::default());
    log::info!("🚀 Profile widget - Rust + WASM");

    schedule_mount(PendingMount::FromHost)
}

/// Mount now, or on `DOMContentLoaded` if the document is still loading.
/// Only the most recent request runs.
fn schedule_mount(pending: PendingMount) -> Result<(), JsValue> {
    let ticket = SCHEDULE.with(MountSchedule::request);
    if !document_is_loading() {
        return run_mount(pending);
    }

    let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;
    on_event_once(doc.as_ref(), "DOMContentLoaded", move || {
        if !SCHEDULE.with(|schedule| schedule.is_current(ticket)) {
            log::debug!("🔌 [APP] Mount diferido reemplazado, ignorando");
            return;
        }
        if let Err(e) = run_mount(pending) {
            log::error!("❌ [APP] Error montando widget: {:?}", e);
        }
    })
}

fn run_mount(pending: PendingMount) -> Result<(), JsValue> {
    let config = match pending {
        PendingMount::Config(config) => config,
        PendingMount::FromHost => match host_startup_plan()? {
            StartupPlan::Mount(config) => config,
            StartupPlan::Manual => {
                log::info!("⏸️ [APP] Mount manual, esperando config del host");
                return Ok(());
            }
        },
    };

    let app = ProfileApp::mount(&config)?;
    APP.with(|cell| {
        // El anterior (si lo hay) se desmonta al reemplazarlo
        cell.borrow_mut().replace(app);
    });
    Ok(())
}

fn host_startup_plan() -> Result<StartupPlan, JsValue> {
    let element = get_element_by_id(CONFIG_ELEMENT_ID);
    let json = element.as_ref().and_then(|el| el.text_content());
    let manual = element
        .as_ref()
        .is_some_and(|el| el.has_attribute(MANUAL_MOUNT_ATTRIBUTE));

    StartupPlan::from_host(json.as_deref(), manual)
        .map_err(|e| JsValue::from_str(&format!("Config inválida en #{}: {}", CONFIG_ELEMENT_ID, e)))
}

/// Remount with a JSON `WidgetConfig` override (llamable desde JavaScript).
#[wasm_bindgen]
pub fn mount_profile_widget_with_config(json: &str) -> Result<(), JsValue> {
    let config = WidgetConfig::from_json(json)
        .map_err(|e| JsValue::from_str(&format!("Config inválida: {}", e)))?;
    unmount_profile_widget();
    schedule_mount(PendingMount::Config(config))
}

/// Detach listeners, abort any in-flight load and drop pending mounts.
#[wasm_bindgen]
pub fn unmount_profile_widget() {
    SCHEDULE.with(MountSchedule::cancel);
    let app = APP.with(|cell| cell.borrow_mut().take());
    drop(app);
}
