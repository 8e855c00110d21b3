//! ViewManager - registry, enablement tracking, and active-view switching.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use regex::Regex;
use viewdeck_api::{ConfigStore, DefaultViewSelector, MessageView, SearchMatch, SharedMessage};

use crate::item::ViewItem;
use crate::surface::{CardStack, DropdownState, SelectorSurface};

const VIEWS_KEY: &str = "views";
const DEFAULT_VIEW_KEY: &str = "defaultview";

/// RAII marker for a programmatic selector-surface update.
///
/// Sets the shared suppression flag on construction and restores the
/// previous value on drop, so nested update windows stay suppressed until
/// the outermost one ends.
struct SurfaceUpdate {
    flag: Arc<Mutex<bool>>,
    previous: bool,
}

impl SurfaceUpdate {
    fn begin(flag: &Arc<Mutex<bool>>) -> Self {
        let previous = std::mem::replace(&mut *flag.lock().unwrap(), true);
        Self {
            flag: Arc::clone(flag),
            previous,
        }
    }
}

impl Drop for SurfaceUpdate {
    fn drop(&mut self) {
        *self.flag.lock().unwrap() = self.previous;
    }
}

/// The view-selection controller.
///
/// Owns the registry of available views, the list of views enabled for the
/// current subject, the active view, the priority-ordered default-view
/// selectors, and the selector surface kept in sync with the enabled set.
///
/// All operations either perform their effect or log and decline; nothing
/// here returns an error. Mutation is expected to happen on one logical
/// owner thread.
pub struct ViewManager {
    message: Option<SharedMessage>,
    views: HashMap<String, Box<dyn MessageView>>,
    view_items: HashMap<String, ViewItem>,
    enabled_views: Vec<ViewItem>,
    active: Option<String>,
    selectors: Vec<Box<dyn DefaultViewSelector>>,
    saved_view_name: Option<String>,
    config_key: String,
    views_config_key: String,
    editable: bool,
    surface: Box<dyn SelectorSurface>,
    cards: CardStack,
    suppress: Arc<Mutex<bool>>,
}

impl ViewManager {
    /// Create a controller with a headless [`DropdownState`] surface.
    pub fn new(config_key: impl Into<String>) -> Self {
        Self::with_surface(config_key, Box::new(DropdownState::new()))
    }

    /// Create a controller synchronizing the given selector surface.
    pub fn with_surface(config_key: impl Into<String>, surface: Box<dyn SelectorSurface>) -> Self {
        Self {
            message: None,
            views: HashMap::new(),
            view_items: HashMap::new(),
            enabled_views: Vec::new(),
            active: None,
            selectors: Vec::new(),
            saved_view_name: None,
            config_key: config_key.into(),
            views_config_key: String::new(),
            editable: false,
            surface,
            cards: CardStack::new(),
            suppress: Arc::new(Mutex::new(false)),
        }
    }

    // ─── View registry ───────────────────────────────────────────────

    /// Register a view under its config name, replacing any prior view with
    /// the same key.
    ///
    /// If the view is enabled for the current subject it joins the enabled
    /// list and the selector surface. A remembered last-selected name equal
    /// to this view's key switches to it immediately; otherwise the view
    /// becomes active when nothing is, or when it outranks the active view
    /// and no remembered name is pending.
    pub fn add_view(&mut self, view: Box<dyn MessageView>) {
        let config_name = view.config_name().to_string();
        if self.views.contains_key(&config_name) {
            self.remove_view(&config_name);
        }

        let item = ViewItem::new(&config_name, view.name(), view.position());
        let position = view.position();
        let enabled = {
            let snapshot = self.message.as_ref().map(|m| m.lock().unwrap());
            view.is_enabled(snapshot.as_deref())
        };

        self.views.insert(config_name.clone(), view);
        self.view_items.insert(config_name.clone(), item.clone());
        self.cards.add_card(&config_name);

        if enabled {
            {
                let _update = SurfaceUpdate::begin(&self.suppress);
                self.surface.add_item(&item);
            }
            self.enabled_views.push(item);
            self.enabled_views.sort_by_key(ViewItem::position);
        }

        tracing::debug!(view = %config_name, enabled, "view registered");

        if self.saved_view_name.as_deref() == Some(config_name.as_str()) {
            self.switch_view(&config_name);
        }

        if enabled {
            match self.active_position() {
                None => self.switch_view(&config_name),
                Some(active_position)
                    if self.saved_view_name.is_none() && active_position > position =>
                {
                    self.switch_view(&config_name);
                }
                _ => {}
            }
        }

        let editable = self.editable;
        let views_key = self.views_config_key.clone();
        if let Some(view) = self.views.get_mut(&config_name) {
            view.set_editable(editable);
            view.set_parent_config_key(&views_key);
        }
    }

    /// Register a view and immediately load its own configuration.
    pub fn add_view_with_config(&mut self, view: Box<dyn MessageView>, config: &ConfigStore) {
        let config_name = view.config_name().to_string();
        self.add_view(view);

        if let Some(view) = self.views.get_mut(&config_name) {
            view.load_configuration(config);
        }
    }

    /// Deregister a view. Unknown names are ignored.
    ///
    /// If the removed view was active, the lowest-position remaining enabled
    /// view takes over; with none left, no view is active.
    pub fn remove_view(&mut self, name: &str) {
        let Some(mut removed) = self.views.remove(name) else {
            return;
        };

        self.cards.remove_card(name);

        if let Some(item) = self.view_items.remove(name) {
            if self.enabled_views.contains(&item) {
                {
                    let _update = SurfaceUpdate::begin(&self.suppress);
                    self.surface.remove_item(name);
                }
                self.enabled_views.retain(|i| i != &item);
            }
        }

        tracing::debug!(view = %name, "view removed");

        if self.active.as_deref() == Some(name) {
            removed.set_selected(false);
            removed.model().clear();
            self.active = None;

            if let Some(next) = self.enabled_views.first().map(|i| i.config_name().to_string()) {
                self.switch_view(&next);
            }
        }
    }

    // ─── Subject binding ─────────────────────────────────────────────

    /// Bind a new subject (or none), reconcile which views are enabled, and
    /// re-decide the active view.
    ///
    /// The first default-view selector whose predicate matches decides the
    /// outcome; with no verdict from the selectors, an active view that is
    /// no longer enabled is replaced by the lowest-position enabled view.
    /// If nothing is enabled, no view is active.
    pub fn set_message(&mut self, message: Option<SharedMessage>) {
        self.message = message;

        let _update = SurfaceUpdate::begin(&self.suppress);

        // Reconcile every registered view's enablement with the new subject.
        {
            let snapshot = self.message.as_ref().map(|m| m.lock().unwrap());
            let subject = snapshot.as_deref();
            for (config_name, view) in &self.views {
                let Some(item) = self.view_items.get(config_name) else {
                    continue;
                };
                let enabled = view.is_enabled(subject);
                let present = self.enabled_views.contains(item);
                if !enabled && present {
                    self.enabled_views.retain(|i| i != item);
                    self.surface.remove_item(config_name);
                } else if enabled && !present {
                    self.enabled_views.push(item.clone());
                    self.enabled_views.sort_by_key(ViewItem::position);
                    self.surface.add_item(item);
                }
            }
        }

        let mut switch_required = !self
            .active
            .as_deref()
            .is_some_and(|name| self.is_enabled_name(name));
        let mut target: Option<String> = None;

        {
            let snapshot = self.message.as_ref().map(|m| m.lock().unwrap());
            let subject = snapshot.as_deref();
            for selector in &self.selectors {
                if !selector.matches(subject) {
                    continue;
                }
                // First predicate match decides, whatever the outcome.
                let recommended = selector.view_name();
                if self.is_enabled_name(recommended) && self.active.as_deref() != Some(recommended)
                {
                    switch_required = true;
                    target = Some(recommended.to_string());
                }
                break;
            }
        }

        if switch_required {
            let target = target.or_else(|| {
                self.enabled_views
                    .first()
                    .map(|i| i.config_name().to_string())
            });
            match target {
                Some(name) => self.switch_view(&name),
                // Nothing is enabled for this subject; remain with no
                // active view.
                None => self.deactivate(),
            }
        } else if let Some(name) = self.active.clone() {
            let message = self.message.clone();
            if let Some(view) = self.views.get_mut(&name) {
                view.model().set_message(message);
            }
        }
    }

    /// Clear the active view's content model and unbind the subject.
    pub fn clear_view(&mut self) {
        if let Some(name) = self.active.clone() {
            if let Some(view) = self.views.get_mut(&name) {
                view.model().clear();
            }
        }
        self.set_message(None);
    }

    /// [`clear_view`](Self::clear_view), then enable or disable the selector
    /// surface.
    pub fn clear_view_with_selector(&mut self, selector_enabled: bool) {
        self.clear_view();
        self.set_selector_enabled(selector_enabled);
    }

    /// Allow or block user interaction with the selector surface.
    pub fn set_selector_enabled(&mut self, enabled: bool) {
        self.surface.set_enabled(enabled);
    }

    // ─── Active-view switching ───────────────────────────────────────

    /// Make the named view active.
    ///
    /// Unregistered names are logged and ignored. The outgoing view is
    /// deselected and its model cleared; the incoming view gets the subject
    /// bound, its card shown, and a `set_selected(true)`.
    pub fn switch_view(&mut self, name: &str) {
        if !self.views.contains_key(name) {
            tracing::error!(view = %name, "cannot switch to unregistered view");
            return;
        }

        if let Some(previous) = self.active.take() {
            if let Some(view) = self.views.get_mut(&previous) {
                view.set_selected(false);
                view.model().clear();
            }
        }

        self.active = Some(name.to_string());

        // Force the surface selection onto the new view unless it already
        // reflects it.
        if self.surface.selected().as_deref() != Some(name) {
            if let Some(item) = self.view_items.get(name) {
                let _update = SurfaceUpdate::begin(&self.suppress);
                self.surface.set_selected(Some(item));
            }
        }

        let message = self.message.clone();
        if let Some(view) = self.views.get_mut(name) {
            view.model().set_message(message);
        }

        self.cards.show_card(name);

        if let Some(view) = self.views.get_mut(name) {
            view.set_selected(true);
        }

        tracing::debug!(view = %name, "view activated");
    }

    /// Handle a user-driven selection change reported by the selector
    /// surface.
    ///
    /// Ignored while a programmatic surface update is in progress, when no
    /// view is active, when nothing is selected, and when the selection
    /// already denotes the active view. Otherwise pending edits are saved
    /// and the selected view becomes active.
    pub fn selection_changed(&mut self, selected: Option<&str>) {
        if *self.suppress.lock().unwrap() {
            return;
        }

        let Some(active) = self.active.clone() else {
            return;
        };
        let Some(name) = selected else {
            return;
        };
        if name == active {
            return;
        }

        self.save();
        self.switch_view(name);
    }

    /// Forward a selected/deselected notification to the active view.
    ///
    /// Used by the surrounding panel when it gains or loses focus.
    pub fn set_active_selected(&mut self, selected: bool) {
        if let Some(name) = self.active.clone() {
            if let Some(view) = self.views.get_mut(&name) {
                view.set_selected(selected);
            }
        }
    }

    fn deactivate(&mut self) {
        if let Some(name) = self.active.take() {
            if let Some(view) = self.views.get_mut(&name) {
                view.set_selected(false);
                view.model().clear();
            }
            let _update = SurfaceUpdate::begin(&self.suppress);
            self.surface.set_selected(None);
        }
    }

    fn active_position(&self) -> Option<i32> {
        let active = self.active.as_ref()?;
        self.view_items.get(active).map(ViewItem::position)
    }

    fn is_enabled_name(&self, name: &str) -> bool {
        self.enabled_views.iter().any(|i| i.config_name() == name)
    }

    // ─── Editing & persistence ───────────────────────────────────────

    /// Persist the active view's pending edits into the subject.
    ///
    /// No-op without a subject or active view, outside editable mode, or
    /// when the view reports no changes.
    pub fn save(&mut self) {
        if self.message.is_none() || !self.editable {
            return;
        }
        let Some(active) = self.active.clone() else {
            return;
        };

        if let Some(view) = self.views.get_mut(&active) {
            if view.has_changed() {
                view.save();
            }
        }
    }

    /// Switch editable mode, propagating the flag to every registered view.
    pub fn set_editable(&mut self, editable: bool) {
        if self.editable != editable {
            self.editable = editable;

            for view in self.views.values_mut() {
                view.set_editable(editable);
            }
        }
    }

    /// Whether the controller is in editable mode.
    pub fn is_editable(&self) -> bool {
        self.editable
    }

    /// Nest this controller's configuration under the given parent key and
    /// propagate the derived views key to every registered view.
    pub fn set_config_key(&mut self, parent_key: &str) {
        self.config_key = format!("{}{}.", parent_key, self.config_key);
        self.views_config_key = format!("{}{}.", self.config_key, VIEWS_KEY);

        let views_key = self.views_config_key.clone();
        for view in self.views.values_mut() {
            view.set_parent_config_key(&views_key);
        }
    }

    /// Read the remembered default-view name and delegate per-view loading.
    pub fn load_config(&mut self, config: &ConfigStore) {
        self.saved_view_name = config.get_str(&format!("{}{}", self.config_key, DEFAULT_VIEW_KEY));

        for view in self.views.values_mut() {
            view.load_configuration(config);
        }
    }

    /// Remember the active view as the default and delegate per-view saving.
    pub fn save_config(&self, config: &mut ConfigStore) {
        if let Some(active) = &self.active {
            config.set_str(&format!("{}{}", self.config_key, DEFAULT_VIEW_KEY), active);
        }

        for view in self.views.values() {
            view.save_configuration(config);
        }
    }

    // ─── Default-view selectors ──────────────────────────────────────

    /// Register a selector, keeping the list sorted ascending by order.
    pub fn add_default_view_selector(&mut self, selector: Box<dyn DefaultViewSelector>) {
        self.selectors.push(selector);
        self.selectors.sort_by_key(|s| s.order());
    }

    /// Remove the first selector with the given name.
    pub fn remove_default_view_selector(&mut self, name: &str) {
        if let Some(index) = self.selectors.iter().position(|s| s.name() == name) {
            self.selectors.remove(index);
        }
    }

    // ─── Search delegation ───────────────────────────────────────────

    /// Highlight a match, switching to a searchable view if the active one
    /// has no search capability. No-op when no enabled view is searchable.
    pub fn highlight(&mut self, m: &SearchMatch) {
        if let Some(active) = self.active.clone() {
            if let Some(view) = self.views.get_mut(&active) {
                if let Some(searchable) = view.as_searchable_mut() {
                    searchable.highlight(m);
                    return;
                }
            }
        }

        let Some(name) = self.find_searchable_view() else {
            return;
        };
        self.switch_view(&name);
        if let Some(view) = self.views.get_mut(&name) {
            if let Some(searchable) = view.as_searchable_mut() {
                searchable.highlight(m);
            }
        }
    }

    /// Collect matches of `pattern`, delegating to the active view or, when
    /// it has no search capability, to the first enabled searchable view
    /// without switching.
    pub fn search(&self, pattern: &Regex, matches: &mut Vec<SearchMatch>) {
        if let Some(active) = &self.active {
            if let Some(view) = self.views.get(active) {
                if let Some(searchable) = view.as_searchable() {
                    searchable.search(pattern, matches);
                    return;
                }
            }
        }

        if let Some(name) = self.find_searchable_view() {
            if let Some(view) = self.views.get(&name) {
                if let Some(searchable) = view.as_searchable() {
                    searchable.search(pattern, matches);
                }
            }
        }
    }

    fn find_searchable_view(&self) -> Option<String> {
        let snapshot = self.message.as_ref().map(|m| m.lock().unwrap());
        let subject = snapshot.as_deref();
        self.views
            .iter()
            .find(|(_, view)| view.is_enabled(subject) && view.as_searchable().is_some())
            .map(|(name, _)| name.clone())
    }

    // ─── Accessors ───────────────────────────────────────────────────

    /// Config name of the active view, if any.
    pub fn active_view_name(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Views enabled for the current subject, ordered ascending by position.
    pub fn enabled_views(&self) -> &[ViewItem] {
        &self.enabled_views
    }

    /// The selector surface being synchronized.
    pub fn surface(&self) -> &dyn SelectorSurface {
        self.surface.as_ref()
    }

    /// The rendering-surface card bookkeeping.
    pub fn cards(&self) -> &CardStack {
        &self.cards
    }

    /// Whether a programmatic surface update is in progress.
    pub fn is_updating_surface(&self) -> bool {
        *self.suppress.lock().unwrap()
    }

    /// Shared handle to the programmatic-update flag, for surface glue that
    /// relays widget selection events from outside the synchronous call
    /// window.
    pub fn suppression_flag(&self) -> Arc<Mutex<bool>> {
        Arc::clone(&self.suppress)
    }
}
