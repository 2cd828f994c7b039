// ============================================================================
// PROFILE VIEWMODEL - Estado + lógica del widget de perfil
// ============================================================================
// Sin web-sys directo: elementos, storage y navegación llegan inyectados.
// El binding al documento real vive en app.rs.
// ============================================================================

use std::cell::{Cell, RefCell};

use crate::config::WidgetConfig;
use crate::dom::{ClickEvent, ElementHandle};
use crate::errors::ProfileError;
use crate::models::{ProfileDisplay, UserRecord};
use crate::services::CurrentUserApi;
use crate::state::LoadAbort;
use crate::utils::constants::ARIA_EXPANDED;
use crate::utils::{Navigator, TokenStore};

/// Handles to the host-page elements the widget drives.
#[derive(Debug, Clone)]
pub struct ProfileElements<E> {
    pub trigger: E,
    pub panel: E,
    pub badge: E,
    pub name: E,
    pub email: E,
    pub logout: E,
}

/// What a user-data load ended up doing.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Rendered(UserRecord),
    Redirected(ProfileError),
    /// The widget was torn down before the result arrived.
    Discarded,
}

/// Profile dropdown: toggle state, user load, render and logout.
pub struct ProfileWidget<E, S, N> {
    elements: ProfileElements<E>,
    store: S,
    navigator: N,
    login_path: String,
    hidden_class: String,
    expanded: Cell<bool>,
    user: RefCell<Option<UserRecord>>,
    abort: LoadAbort,
}

impl<E, S, N> ProfileWidget<E, S, N>
where
    E: ElementHandle,
    S: TokenStore,
    N: Navigator,
{
    /// Bind to `elements` and apply the initial collapsed state.
    pub fn new(elements: ProfileElements<E>, store: S, navigator: N, config: &WidgetConfig) -> Self {
        let widget = Self {
            elements,
            store,
            navigator,
            login_path: config.login_path.clone(),
            hidden_class: config.hidden_class.clone(),
            expanded: Cell::new(false),
            user: RefCell::new(None),
            abort: LoadAbort::new(),
        };
        widget.set_expanded(false);
        widget
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded.get()
    }

    /// Last successfully loaded user.
    pub fn current_user(&self) -> Option<UserRecord> {
        self.user.borrow().clone()
    }

    pub fn elements(&self) -> &ProfileElements<E> {
        &self.elements
    }

    /// Trigger click: flip the panel. The event stops here so the
    /// document listener does not collapse it again.
    pub fn handle_trigger_click(&self, event: &impl ClickEvent) -> bool {
        event.stop_propagation();
        let show = !self.expanded.get();
        self.set_expanded(show);
        show
    }

    /// Document click: collapse unless `target` lies inside the trigger.
    pub fn handle_document_click(&self, target: Option<&E::Node>) {
        let inside = target.is_some_and(|node| self.elements.trigger.contains(node));
        if !inside {
            self.set_expanded(false);
        }
    }

    /// Panel class and `aria-expanded` follow `show` in the same step.
    fn set_expanded(&self, show: bool) {
        self.expanded.set(show);
        if let Err(e) = self.elements.panel.toggle_class(&self.hidden_class, !show) {
            log::error!("❌ [PROFILE] Error actualizando panel: {}", e);
        }
        let value = if show { "true" } else { "false" };
        if let Err(e) = self.elements.trigger.set_attribute(ARIA_EXPANDED, value) {
            log::error!("❌ [PROFILE] Error actualizando {}: {}", ARIA_EXPANDED, e);
        }
    }

    /// Read the token, fetch the current user once, then render or redirect.
    pub async fn load_user<A: CurrentUserApi>(&self, api: &A) -> LoadOutcome {
        if self.abort.is_aborted() {
            return LoadOutcome::Discarded;
        }

        let Some(token) = self.store.get() else {
            log::warn!("🔒 [PROFILE] Sin token, redirigiendo a login");
            self.redirect_to_login();
            return LoadOutcome::Redirected(ProfileError::MissingToken);
        };

        let result = api.fetch_current_user(&token, &self.abort).await;

        if self.abort.is_aborted() {
            log::debug!("🔌 [PROFILE] Carga descartada tras teardown");
            return LoadOutcome::Discarded;
        }

        match result {
            Ok(user) => {
                self.render(&user);
                *self.user.borrow_mut() = Some(user.clone());
                log::info!("✅ [PROFILE] Usuario cargado");
                LoadOutcome::Rendered(user)
            }
            Err(e) => {
                log::error!("❌ [PROFILE] Error loading user data: {}", e);
                self.redirect_to_login();
                LoadOutcome::Redirected(e)
            }
        }
    }

    /// Replace badge, name and email with `user`'s values.
    pub fn render(&self, user: &UserRecord) -> ProfileDisplay {
        let display = ProfileDisplay::from(user);
        self.elements.badge.set_text(&display.badge);
        self.elements.name.set_text(&display.name);
        self.elements.email.set_text(&display.email);
        display
    }

    /// Drop the token and leave. Redirects even if removal fails.
    pub fn logout(&self) {
        if let Err(e) = self.store.remove() {
            log::error!("❌ [PROFILE] Error during logout: {}", e);
        }
        self.redirect_to_login();
    }

    pub fn redirect_to_login(&self) {
        if let Err(e) = self.navigator.redirect(&self.login_path) {
            log::error!("❌ [PROFILE] Redirect a {} falló: {}", self.login_path, e);
        }
    }

    /// Abort any in-flight load; its result will be discarded.
    pub fn teardown(&self) {
        self.abort.abort();
    }
}
