//! Shared session handle
//!
//! The screen controller, its hooks and its pages all look at the same
//! session. The handle is a cheap clone over one shared value.

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

use crate::action::Action;
use crate::session::Session;

#[derive(Debug, Default)]
pub struct SessionHandle {
    inner: Arc<RwLock<Session>>,
}

impl SessionHandle {
    pub fn new(session: Session) -> Self {
        Self {
            inner: Arc::new(RwLock::new(session)),
        }
    }

    /// Copy of the current session
    pub fn snapshot(&self) -> Session {
        self.inner.read().clone()
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Session> {
        self.inner.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Session> {
        self.inner.write()
    }

    /// Swap in a different session, returning the old one
    pub fn replace(&self, session: Session) -> Session {
        std::mem::replace(&mut *self.inner.write(), session)
    }

    pub fn action(&self) -> Action {
        self.inner.read().action
    }

    pub fn set_action(&self, action: Action) {
        self.inner.write().set_action(action);
    }

    pub fn previous_tab(&self) -> Option<usize> {
        self.inner.read().previous_tab
    }

    pub fn set_previous_tab(&self, position: usize) {
        self.inner.write().set_previous_tab(position);
    }

    pub fn is_navigation_on_tab_selection_needed(&self) -> bool {
        self.inner.read().navigation_on_tab_selection_needed
    }

    pub fn set_navigation_on_tab_selection_needed(&self, needed: bool) {
        tracing::trace!(needed, "Tab selection navigation gate changed");
        self.inner.write().set_navigation_on_tab_selection_needed(needed);
    }

    /// True when both handles point at the same session
    pub fn ptr_eq(&self, other: &SessionHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Clone for SessionHandle {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
