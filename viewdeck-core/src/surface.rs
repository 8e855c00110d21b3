//! Selector-surface and card-surface abstractions.

use crate::item::ViewItem;

/// The UI-facing element through which a user picks among enabled views.
///
/// The controller keeps the surface's item set equal to the enabled-view
/// list (ordered ascending by position) and its selection on the active
/// view. Implementations that wrap a real widget relay user-driven
/// selection changes into [`ViewManager::selection_changed`] and may consult
/// [`ViewManager::is_updating_surface`] to skip echoes of programmatic
/// updates delivered outside the synchronous call window.
///
/// [`ViewManager::selection_changed`]: crate::manager::ViewManager::selection_changed
/// [`ViewManager::is_updating_surface`]: crate::manager::ViewManager::is_updating_surface
pub trait SelectorSurface {
    /// Add an item, keeping display order ascending by position.
    fn add_item(&mut self, item: &ViewItem);

    /// Remove the item with the given config name.
    fn remove_item(&mut self, config_name: &str);

    /// Move the selection, or clear it with `None`.
    fn set_selected(&mut self, item: Option<&ViewItem>);

    /// Config name of the currently selected item.
    fn selected(&self) -> Option<String>;

    /// Allow or block user interaction with the surface.
    fn set_enabled(&mut self, enabled: bool);
}

/// Headless selector surface: plain dropdown state with no widget attached.
///
/// Mirrors dropdown widget behavior: an empty dropdown selects the first
/// item it receives, and removing the selected item moves the selection to
/// the first remaining one.
#[derive(Debug, Clone)]
pub struct DropdownState {
    items: Vec<ViewItem>,
    selected: Option<String>,
    enabled: bool,
}

impl DropdownState {
    /// Create an empty, enabled dropdown.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            enabled: true,
        }
    }

    /// Items in display order.
    pub fn items(&self) -> &[ViewItem] {
        &self.items
    }

    /// Whether user interaction is allowed.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for DropdownState {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectorSurface for DropdownState {
    fn add_item(&mut self, item: &ViewItem) {
        if self.items.contains(item) {
            return;
        }
        self.items.push(item.clone());
        self.items.sort_by_key(ViewItem::position);

        if self.selected.is_none() {
            self.selected = Some(item.config_name().to_string());
        }
    }

    fn remove_item(&mut self, config_name: &str) {
        self.items.retain(|i| i.config_name() != config_name);

        if self.selected.as_deref() == Some(config_name) {
            self.selected = self.items.first().map(|i| i.config_name().to_string());
        }
    }

    fn set_selected(&mut self, item: Option<&ViewItem>) {
        self.selected = item.map(|i| i.config_name().to_string());
    }

    fn selected(&self) -> Option<String> {
        self.selected.clone()
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

/// Keyed rendering-surface bookkeeping - which view cards are attached to
/// the container and which one is showing.
#[derive(Debug, Clone, Default)]
pub struct CardStack {
    cards: Vec<String>,
    visible: Option<String>,
}

impl CardStack {
    /// Create an empty card stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a card under the given key.
    pub fn add_card(&mut self, name: &str) {
        if !self.contains(name) {
            self.cards.push(name.to_string());
        }
    }

    /// Detach the card with the given key.
    pub fn remove_card(&mut self, name: &str) {
        self.cards.retain(|c| c != name);
        if self.visible.as_deref() == Some(name) {
            self.visible = None;
        }
    }

    /// Bring the card with the given key to the front. Unknown keys are
    /// ignored.
    pub fn show_card(&mut self, name: &str) {
        if self.contains(name) {
            self.visible = Some(name.to_string());
        }
    }

    /// Key of the card currently showing.
    pub fn visible(&self) -> Option<&str> {
        self.visible.as_deref()
    }

    /// Whether a card is attached under the given key.
    pub fn contains(&self, name: &str) -> bool {
        self.cards.iter().any(|c| c == name)
    }

    /// Number of attached cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether no cards are attached.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropdown_starts_enabled_and_empty() {
        let dropdown = DropdownState::new();
        assert!(dropdown.is_enabled());
        assert!(dropdown.items().is_empty());
        assert_eq!(dropdown.selected(), None);
    }

    #[test]
    fn dropdown_selects_first_added_item() {
        let mut dropdown = DropdownState::new();
        dropdown.add_item(&ViewItem::new("raw", "Raw", 0));
        dropdown.add_item(&ViewItem::new("hex", "Hex", 10));

        assert_eq!(dropdown.selected(), Some("raw".to_string()));
    }

    #[test]
    fn dropdown_orders_items_by_position() {
        let mut dropdown = DropdownState::new();
        dropdown.add_item(&ViewItem::new("hex", "Hex", 10));
        dropdown.add_item(&ViewItem::new("raw", "Raw", 0));

        let names: Vec<&str> = dropdown.items().iter().map(ViewItem::config_name).collect();
        assert_eq!(names, vec!["raw", "hex"]);
    }

    #[test]
    fn dropdown_ignores_duplicate_items() {
        let mut dropdown = DropdownState::new();
        dropdown.add_item(&ViewItem::new("raw", "Raw", 0));
        dropdown.add_item(&ViewItem::new("raw", "Raw", 0));

        assert_eq!(dropdown.items().len(), 1);
    }

    #[test]
    fn dropdown_removing_selected_moves_selection() {
        let mut dropdown = DropdownState::new();
        dropdown.add_item(&ViewItem::new("raw", "Raw", 0));
        dropdown.add_item(&ViewItem::new("hex", "Hex", 10));

        dropdown.remove_item("raw");

        assert_eq!(dropdown.selected(), Some("hex".to_string()));

        dropdown.remove_item("hex");
        assert_eq!(dropdown.selected(), None);
    }

    #[test]
    fn dropdown_removing_unselected_keeps_selection() {
        let mut dropdown = DropdownState::new();
        dropdown.add_item(&ViewItem::new("raw", "Raw", 0));
        dropdown.add_item(&ViewItem::new("hex", "Hex", 10));

        dropdown.remove_item("hex");

        assert_eq!(dropdown.selected(), Some("raw".to_string()));
    }

    #[test]
    fn dropdown_set_enabled_toggles() {
        let mut dropdown = DropdownState::new();
        dropdown.set_enabled(false);
        assert!(!dropdown.is_enabled());
    }

    #[test]
    fn card_stack_add_show_remove() {
        let mut cards = CardStack::new();
        cards.add_card("raw");
        cards.add_card("hex");
        assert_eq!(cards.len(), 2);

        cards.show_card("hex");
        assert_eq!(cards.visible(), Some("hex"));

        cards.remove_card("hex");
        assert_eq!(cards.visible(), None);
        assert!(!cards.contains("hex"));
    }

    #[test]
    fn card_stack_show_unknown_is_ignored() {
        let mut cards = CardStack::new();
        cards.add_card("raw");
        cards.show_card("missing");

        assert_eq!(cards.visible(), None);
    }

    #[test]
    fn card_stack_duplicate_add_is_ignored() {
        let mut cards = CardStack::new();
        cards.add_card("raw");
        cards.add_card("raw");

        assert_eq!(cards.len(), 1);
    }
}
