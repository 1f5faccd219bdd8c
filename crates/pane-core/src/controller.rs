//! Base screen controller
//!
//! Owns the session, the toolbar, the optional tab bar and the pager of one
//! screen, and moves them through the host lifecycle. Everything specific to
//! a screen comes from its [`ScreenHooks`].

use pane_session::{Action, SavedState, Session, SessionHandle};
use pane_tabs::{PageProvider, Pager, TabBar, TabEvent};

use crate::config::ScreenConfig;
use crate::data_access::DataAccess;
use crate::error::ScreenError;
use crate::hooks::{MainScreen, ScreenHooks};
use crate::lifecycle::LifecyclePhase;
use crate::shell::Toolbar;
use crate::Result;

/// Saved-state key holding the pager position
pub const PAGER_KEY: &str = "pager";

pub struct ScreenController<H: ScreenHooks> {
    /// Screen name, used in logs and as toolbar title
    name: String,
    config: ScreenConfig,
    hooks: H,
    session: SessionHandle,
    data_access: Option<Box<dyn DataAccess>>,
    toolbar: Toolbar,
    tab_bar: Option<TabBar>,
    pager: Pager,
    phase: LifecyclePhase,
    /// Set when created from saved state, cleared by the first resume
    restore_pending: bool,
}

impl<H: ScreenHooks> ScreenController<H> {
    /// Build the screen. `saved_state` is what the host kept from a previous
    /// instance of the same screen, if any.
    pub fn create(
        mut hooks: H,
        config: ScreenConfig,
        saved_state: Option<&SavedState>,
    ) -> Result<Self> {
        let name = screen_name::<H>();

        if config.debug {
            tracing::debug!(screen = %name, restoring = saved_state.is_some(), "Creating screen");
        }

        let (session, restored) = match saved_state {
            Some(state) => match state.read_session() {
                Ok(session) => {
                    if config.debug {
                        tracing::debug!(screen = %name, ?session, "Session restored");
                    }
                    (session, true)
                }
                Err(e) => {
                    tracing::warn!(
                        screen = %name,
                        error = %e,
                        "Could not restore session, starting with a fresh one"
                    );
                    (Session::new(), false)
                }
            },
            None => (Session::new(), false),
        };
        let session = SessionHandle::new(session);

        let mut data_access = hooks.data_access();
        if let Some(dao) = data_access.as_mut() {
            dao.set_debug_mode(config.debug);
            dao.set_timeout(config.timeout_ms);
            dao.set_delay(config.delay_ms);
            dao.set_basic_authentication(config.basic_authentication);
        }

        let mut toolbar = Toolbar::new(name.clone());
        if config.waiting_indicator {
            if config.debug {
                tracing::debug!(screen = %name, "Adding busy indicator");
            }
            toolbar = toolbar.with_busy_indicator();
        }

        let tab_bar = if config.tabs {
            if config.debug {
                tracing::debug!(screen = %name, "Adding tab bar");
            }
            // No navigation on selection until a page has been shown
            session.set_navigation_on_tab_selection_needed(false);
            Some(TabBar::new())
        } else {
            None
        };

        let provider = PageProvider::new(hooks.pages(), |position| hooks.page_title(position))?;
        let mut pager = Pager::new(provider);
        pager.set_swipe_enabled(false);
        pager.set_offscreen_page_limit(config.offscreen_page_limit);

        if restored {
            restore_pager_position(&mut pager, saved_state, &name);
        }

        let mut controller = Self {
            name,
            config,
            hooks,
            session,
            data_access,
            toolbar,
            tab_bar,
            pager,
            phase: LifecyclePhase::Created,
            restore_pending: restored,
        };

        controller.populate_tabs()?;

        if controller.session.action().is_none() {
            let first = controller.hooks.first_page_index();
            controller.navigate_to_view(first, Action::None)?;
        }
        controller.show_tab(controller.pager.current_item())?;

        controller.hooks.on_create_screen(&controller.session);

        tracing::info!(
            screen = %controller.name,
            pages = controller.pager.page_count(),
            restored,
            "Screen created"
        );

        Ok(controller)
    }

    /// Show the page at `position` and record `action` as the reason
    pub fn navigate_to_view(&mut self, position: usize, action: Action) -> Result<()> {
        if self.config.debug {
            tracing::debug!(screen = %self.name, position, action = %action, "Navigating to view");
        }

        self.pager.set_current_item(position)?;
        self.session.set_action(action);

        Ok(())
    }

    /// A tab was clicked. On failure the previous selection is put back.
    pub fn select_tab(&mut self, position: usize) -> Result<()> {
        let tab_bar = self.tab_bar.as_mut().ok_or(ScreenError::TabsDisabled)?;
        let before = tab_bar.selected();
        let events = tab_bar.select(position)?;

        if let Err(e) = self.dispatch_tab_events(&events) {
            if let Some(before) = before {
                self.show_tab(before)?;
            }
            return Err(e);
        }

        Ok(())
    }

    pub fn on_resume(&mut self) -> Result<()> {
        self.transition_to(LifecyclePhase::Resumed)?;

        let restoring = self.restore_pending || self.session.read().is_restoring();
        self.restore_pending = false;

        if !restoring {
            return Ok(());
        }

        let Some(previous) = self.session.previous_tab() else {
            return Ok(());
        };
        if self.tab_bar.is_none() {
            return Ok(());
        }

        self.show_tab(previous)?;
        self.pager.set_current_item(previous)?;

        if self.config.debug {
            tracing::debug!(screen = %self.name, previous, "Restored tab selection");
        }

        Ok(())
    }

    pub fn on_pause(&mut self) -> Result<()> {
        self.transition_to(LifecyclePhase::Paused)
    }

    pub fn on_destroy(&mut self) -> Result<()> {
        self.transition_to(LifecyclePhase::Destroyed)
    }

    /// Write the session into the outgoing bundle. A failure loses the state
    /// but never fails the host callback.
    pub fn on_save_state(&self, out: &mut SavedState) {
        if self.phase == LifecyclePhase::Destroyed {
            tracing::warn!(screen = %self.name, "Saving state of a destroyed screen");
        }

        let session = self.session.snapshot();
        match out.write_session(&session) {
            Ok(()) => {
                if self.config.debug {
                    tracing::debug!(screen = %self.name, ?session, "Session saved");
                }
            }
            Err(e) => {
                tracing::warn!(screen = %self.name, error = %e, "Could not save session");
            }
        }

        out.put_string(PAGER_KEY, self.pager.current_item().to_string());
    }

    // === Busy indicator ===

    pub fn begin_waiting(&mut self) {
        if let Some(busy) = self.toolbar.busy_indicator_mut() {
            busy.show();
        }
    }

    pub fn cancel_waiting(&mut self) {
        if let Some(busy) = self.toolbar.busy_indicator_mut() {
            busy.hide();
        }
    }

    pub fn is_waiting(&self) -> bool {
        self.toolbar
            .busy_indicator()
            .map(|busy| busy.is_visible())
            .unwrap_or(false)
    }

    // === Data access settings ===

    pub fn set_url_service_web_json(&mut self, url: &str) {
        self.with_data_access("url_service_web_json", |dao| {
            dao.set_url_service_web_json(url)
        });
    }

    pub fn set_user(&mut self, user: &str, password: &str) {
        self.with_data_access("user", |dao| dao.set_user(user, password));
    }

    pub fn set_timeout(&mut self, timeout_ms: u64) {
        self.with_data_access("timeout", |dao| dao.set_timeout(timeout_ms));
    }

    pub fn set_delay(&mut self, delay_ms: u64) {
        self.with_data_access("delay", |dao| dao.set_delay(delay_ms));
    }

    pub fn set_basic_authentication(&mut self, enabled: bool) {
        self.with_data_access("basic_authentication", |dao| {
            dao.set_basic_authentication(enabled)
        });
    }

    pub fn set_debug_mode(&mut self, enabled: bool) {
        self.with_data_access("debug_mode", |dao| dao.set_debug_mode(enabled));
    }

    pub fn has_data_access(&self) -> bool {
        self.data_access.is_some()
    }

    // === Accessors ===

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn session(&self) -> SessionHandle {
        self.session.clone()
    }

    pub fn current_page(&self) -> usize {
        self.pager.current_item()
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn tab_bar(&self) -> Option<&TabBar> {
        self.tab_bar.as_ref()
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    // === Internals ===

    /// One tab per page. Adding the first tab selects it, which goes through
    /// the same gate as a click.
    fn populate_tabs(&mut self) -> Result<()> {
        let Some(tab_bar) = self.tab_bar.as_mut() else {
            return Ok(());
        };

        let mut events = Vec::new();
        for title in self.pager.provider().titles() {
            events.extend(tab_bar.add_tab(title));
        }

        self.dispatch_tab_events(&events)
    }

    fn dispatch_tab_events(&mut self, events: &[TabEvent]) -> Result<()> {
        for event in events {
            if let TabEvent::Selected(position) = *event {
                self.handle_tab_selected(position)?;
            }
        }
        Ok(())
    }

    fn handle_tab_selected(&mut self, position: usize) -> Result<()> {
        let gate = self.session.is_navigation_on_tab_selection_needed();

        if self.config.debug {
            tracing::debug!(
                screen = %self.name,
                position,
                action = %self.session.action(),
                tab_count = self.tab_bar.as_ref().map(TabBar::tab_count).unwrap_or(0),
                navigation_on_tab_selection_needed = gate,
                "Tab selected"
            );
        }

        if !gate {
            return Ok(());
        }

        let previous = self.session.previous_tab();
        self.session.set_previous_tab(position);

        if let Some(request) = self.hooks.on_tab_selected(position) {
            if let Err(e) = self.pager.provider().check_index(request.position) {
                tracing::warn!(
                    screen = %self.name,
                    tab = position,
                    requested = request.position,
                    "Tab selection requested a missing page"
                );
                self.session.write().previous_tab = previous;
                return Err(e.into());
            }
            self.navigate_to_view(request.position, request.action)?;
        }

        Ok(())
    }

    /// Select a tab without reporting it; used when the page is already
    /// decided.
    fn show_tab(&mut self, position: usize) -> Result<()> {
        if let Some(tab_bar) = self.tab_bar.as_mut() {
            tab_bar.select(position)?;
        }
        Ok(())
    }

    fn transition_to(&mut self, target: LifecyclePhase) -> Result<()> {
        if !self.phase.can_transition_to(target) {
            return Err(ScreenError::InvalidTransition {
                from: self.phase.to_string(),
                to: target.to_string(),
            });
        }

        if self.config.debug {
            tracing::debug!(screen = %self.name, from = %self.phase, to = %target, "Lifecycle transition");
        }

        self.phase = target;
        Ok(())
    }

    fn with_data_access(&mut self, setting: &str, apply: impl FnOnce(&mut dyn DataAccess)) {
        match self.data_access.as_deref_mut() {
            Some(dao) => apply(dao),
            None => {
                tracing::debug!(screen = %self.name, setting, "No data access layer, setting ignored");
            }
        }
    }
}

impl<H: ScreenHooks> MainScreen for ScreenController<H> {
    fn session(&self) -> SessionHandle {
        ScreenController::session(self)
    }

    fn navigate_to_view(&mut self, position: usize, action: Action) -> Result<()> {
        ScreenController::navigate_to_view(self, position, action)
    }
}

impl<H: ScreenHooks> std::fmt::Debug for ScreenController<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenController")
            .field("name", &self.name)
            .field("phase", &self.phase)
            .field("session", &self.session.snapshot())
            .field("current_page", &self.pager.current_item())
            .field("selected_tab", &self.tab_bar.as_ref().and_then(TabBar::selected))
            .finish()
    }
}

fn screen_name<H>() -> String {
    let full = std::any::type_name::<H>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base).to_string()
}

fn restore_pager_position(pager: &mut Pager, saved_state: Option<&SavedState>, screen: &str) {
    let Some(raw) = saved_state.and_then(|state| state.get_string(PAGER_KEY)) else {
        return;
    };

    match raw.parse::<usize>() {
        Ok(position) => {
            if let Err(e) = pager.set_current_item(position) {
                tracing::warn!(screen, error = %e, "Ignoring saved pager position");
            }
        }
        Err(e) => {
            tracing::warn!(screen, error = %e, "Ignoring unreadable pager position");
        }
    }
}
