use std::cell::RefCell;
use std::rc::Rc;

use crate::errors::{js_message, ProfileError};

/// Client-side navigation.
pub trait Navigator {
    fn redirect(&self, path: &str) -> Result<(), ProfileError>;
}

/// Navega con `window.location.href`.
#[derive(Debug, Clone, Default)]
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn redirect(&self, path: &str) -> Result<(), ProfileError> {
        let window = web_sys::window()
            .ok_or_else(|| ProfileError::Dom("No window".to_string()))?;
        window
            .location()
            .set_href(path)
            .map_err(|e| ProfileError::Dom(js_message(&e)))
    }
}

/// Records every redirect instead of navigating.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    visits: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) -> Result<(), ProfileError> {
        self.visits.borrow_mut().push(path.to_string());
        Ok(())
    }
}
