// ============================================================================
// LOAD ABORT - Cancelación explícita de la carga del usuario
// ============================================================================
// Un fetch en vuelo no puede aplicar su resultado tras el teardown del widget.
// El servicio HTTP registra aquí su AbortController mientras dura la request;
// el widget comprueba `is_aborted()` después del await.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type AbortHook = Box<dyn FnOnce()>;

/// Shared cancellation handle. Clones observe and trigger the same abort.
#[derive(Clone, Default)]
pub struct LoadAbort {
    inner: Rc<AbortInner>,
}

#[derive(Default)]
struct AbortInner {
    aborted: Cell<bool>,
    next_id: Cell<u64>,
    hooks: RefCell<Vec<(u64, AbortHook)>>,
}

/// Keeps an abort hook registered; dropping it unregisters the hook.
#[must_use = "dropping the registration removes the hook"]
pub struct AbortRegistration {
    inner: Weak<AbortInner>,
    id: Option<u64>,
}

impl Drop for AbortRegistration {
    fn drop(&mut self) {
        let (Some(inner), Some(id)) = (self.inner.upgrade(), self.id) else {
            return;
        };
        inner.hooks.borrow_mut().retain(|(hook_id, _)| *hook_id != id);
    }
}

impl LoadAbort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_aborted(&self) -> bool {
        self.inner.aborted.get()
    }

    /// Register a hook to run on abort, for as long as the returned
    /// registration lives. Runs immediately if already aborted.
    pub fn on_abort<F>(&self, hook: F) -> AbortRegistration
    where
        F: FnOnce() + 'static,
    {
        if self.is_aborted() {
            hook();
            return AbortRegistration { inner: Weak::new(), id: None };
        }
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.hooks.borrow_mut().push((id, Box::new(hook)));
        AbortRegistration {
            inner: Rc::downgrade(&self.inner),
            id: Some(id),
        }
    }

    /// Abort once; later calls are no-ops.
    pub fn abort(&self) {
        if self.inner.aborted.replace(true) {
            return;
        }
        let hooks = std::mem::take(&mut *self.inner.hooks.borrow_mut());
        for (_, hook) in hooks {
            hook();
        }
    }
}

impl std::fmt::Debug for LoadAbort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadAbort")
            .field("aborted", &self.is_aborted())
            .field("hooks", &self.inner.hooks.borrow().len())
            .finish()
    }
}
