//! Lightweight view projections used for ordering and display.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity-by-key projection of a registered view.
///
/// The enabled-view list and the selector surface hold these instead of the
/// views themselves. Equality and hashing are by config name only; display
/// ordering is established at the sort site with a stable sort on
/// [`position`].
///
/// [`position`]: ViewItem::position
#[derive(Debug, Clone)]
pub struct ViewItem {
    config_name: String,
    display_name: String,
    position: i32,
}

impl ViewItem {
    /// Create a projection for a view.
    pub fn new(
        config_name: impl Into<String>,
        display_name: impl Into<String>,
        position: i32,
    ) -> Self {
        Self {
            config_name: config_name.into(),
            display_name: display_name.into(),
            position,
        }
    }

    /// Stable key of the backing view.
    pub fn config_name(&self) -> &str {
        &self.config_name
    }

    /// Human-readable name shown in the selector surface.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Ordering position of the backing view.
    pub fn position(&self) -> i32 {
        self.position
    }
}

impl PartialEq for ViewItem {
    fn eq(&self, other: &Self) -> bool {
        self.config_name == other.config_name
    }
}

impl Eq for ViewItem {}

impl Hash for ViewItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.config_name.hash(state);
    }
}

impl fmt::Display for ViewItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn equality_is_by_config_name_only() {
        let a = ViewItem::new("hex", "Hex", 10);
        let b = ViewItem::new("hex", "Hexadecimal", 99);
        let c = ViewItem::new("raw", "Hex", 10);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn hashing_is_by_config_name_only() {
        let mut set = HashSet::new();
        set.insert(ViewItem::new("hex", "Hex", 10));

        assert!(set.contains(&ViewItem::new("hex", "Other", 3)));
        assert!(!set.contains(&ViewItem::new("raw", "Hex", 10)));
    }

    #[test]
    fn stable_sort_by_position_keeps_insertion_order_for_ties() {
        let mut items = vec![
            ViewItem::new("b", "B", 5),
            ViewItem::new("a", "A", 1),
            ViewItem::new("c", "C", 5),
        ];

        items.sort_by_key(ViewItem::position);

        let names: Vec<&str> = items.iter().map(ViewItem::config_name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn display_uses_display_name() {
        let item = ViewItem::new("hex", "Hex", 10);
        assert_eq!(item.to_string(), "Hex");
    }
}
