//! Traits implemented by message views and their content models.

use crate::config::ConfigStore;
use crate::message::{HttpMessage, SharedMessage};
use crate::search::SearchableView;

/// The editable content model attached to a view.
///
/// The controller binds and clears the subject through this; the view owns
/// whatever derived state it builds from the bound message.
pub trait MessageModel {
    /// Bind the subject, or unbind it with `None`.
    fn set_message(&mut self, message: Option<SharedMessage>);

    /// Drop the bound subject and any derived state.
    fn clear(&mut self);
}

/// A pluggable renderer/editor for one representation of the subject.
///
/// Identity is the stable [`config_name`]; [`position`] orders views in the
/// selector surface (lower = higher priority). Lifecycle hooks and the
/// configuration methods have default no-op implementations so read-only
/// views only implement what they need.
///
/// [`config_name`]: MessageView::config_name
/// [`position`]: MessageView::position
pub trait MessageView {
    /// Stable key this view is registered under.
    fn config_name(&self) -> &str;

    /// Human-readable name shown in the selector surface.
    fn name(&self) -> &str;

    /// Ordering position; lower values are preferred.
    fn position(&self) -> i32;

    /// Whether this view can render the given subject.
    fn is_enabled(&self, message: Option<&HttpMessage>) -> bool;

    /// The view's content model.
    fn model(&mut self) -> &mut dyn MessageModel;

    /// Called when the view becomes (or stops being) the active view.
    fn set_selected(&mut self, _selected: bool) {}

    /// Called when the controller's editable mode changes.
    fn set_editable(&mut self, _editable: bool) {}

    /// Whether the view holds edits not yet persisted into the subject.
    fn has_changed(&self) -> bool {
        false
    }

    /// Persist pending edits into the subject.
    fn save(&mut self) {}

    /// Load this view's own settings from the store.
    fn load_configuration(&mut self, _config: &ConfigStore) {}

    /// Save this view's own settings into the store.
    fn save_configuration(&self, _config: &mut ConfigStore) {}

    /// Receive the configuration-key prefix this view should nest under.
    fn set_parent_config_key(&mut self, _parent_key: &str) {}

    /// The view's search capability, if it has one.
    fn as_searchable(&self) -> Option<&dyn SearchableView> {
        None
    }

    /// Mutable access to the view's search capability, if it has one.
    fn as_searchable_mut(&mut self) -> Option<&mut dyn SearchableView> {
        None
    }
}
