use std::cell::OnceCell;

use super::collapsible::CollapsibleUnit;
use crate::widget::tree::{ElementId, NavTree};

/// A top-level bar entry with its measured width and collapsible titles.
///
/// The aggregate width freed by collapsing is computed on first use and
/// cached for the lifetime of this value; the controller rebuilds items when
/// its width cache is invalidated.
#[derive(Debug, Clone)]
pub struct CachedItemWidth {
    element: ElementId,
    width: f32,
    units: Vec<CollapsibleUnit>,
    collapsed_width: OnceCell<f32>,
}

impl CachedItemWidth {
    /// Wrap an item element measured at `width` with its collapsible units.
    pub fn new(element: ElementId, width: f32, units: Vec<CollapsibleUnit>) -> Self {
        Self {
            element,
            width,
            units,
            collapsed_width: OnceCell::new(),
        }
    }

    /// The item element.
    pub fn element(&self) -> ElementId {
        self.element
    }

    /// Outer width of the item at measurement time.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// The collapsible units, in document order.
    pub fn units(&self) -> &[CollapsibleUnit] {
        &self.units
    }

    /// Whether the item has anything to collapse.
    pub fn can_collapse(&self) -> bool {
        !self.units.is_empty()
    }

    /// Whether every unit is currently collapsed. False for items that
    /// cannot collapse.
    pub fn is_collapsed(&self) -> bool {
        self.can_collapse() && self.units.iter().all(CollapsibleUnit::is_collapsed)
    }

    /// Total width of the collapsible units.
    pub fn collapsed_width(&self) -> f32 {
        *self
            .collapsed_width
            .get_or_init(|| self.units.iter().map(CollapsibleUnit::width).sum())
    }

    /// Collapse or expand every unit and update the item's tooltip.
    ///
    /// Does nothing for items without units.
    pub fn set_collapsed(&mut self, tree: &mut NavTree, collapsed: bool) {
        if self.units.is_empty() {
            return;
        }

        let tooltip = collapsed.then(|| self.title(tree));
        tree.set_tooltip(self.element, tooltip);

        for unit in &mut self.units {
            unit.set_collapsed(tree, collapsed);
        }
    }

    /// Label shown while collapsed: the explicit collapsed title if set,
    /// otherwise the first unit's text, otherwise empty.
    pub fn title(&self, tree: &NavTree) -> String {
        if let Some(title) = tree.collapsed_title(self.element).filter(|t| !t.is_empty()) {
            return title.to_string();
        }
        self.units
            .first()
            .map(|unit| tree.text_content(unit.element()))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::tree::Role;

    fn item_with_titles(tree: &mut NavTree, titles: &[(&str, f32)]) -> CachedItemWidth {
        let container = tree.append(tree.root(), Role::Container).unwrap();
        let item = tree.append(container, Role::Item).unwrap();
        tree.append(item, Role::Icon).unwrap();
        let units = titles
            .iter()
            .map(|&(text, width)| {
                let title = tree.append_text(item, Role::Title, text).unwrap();
                CollapsibleUnit::new(title, width)
            })
            .collect();
        CachedItemWidth::new(item, 200.0, units)
    }

    #[test]
    fn test_collapsed_width_sums_units() {
        let mut tree = NavTree::new();
        let item = item_with_titles(&mut tree, &[("Alerts", 50.0), ("(12)", 30.0)]);

        assert!(item.can_collapse());
        assert_eq!(item.collapsed_width(), 80.0);
    }

    #[test]
    fn test_item_without_units() {
        let mut tree = NavTree::new();
        let element = tree.append(tree.root(), Role::Item).unwrap();
        let mut item = CachedItemWidth::new(element, 120.0, Vec::new());

        assert!(!item.can_collapse());
        assert_eq!(item.collapsed_width(), 0.0);

        item.set_collapsed(&mut tree, true);
        assert_eq!(tree.tooltip(element), None);
        assert!(!item.is_collapsed());
    }

    #[test]
    fn test_tooltip_falls_back_to_first_title_text() {
        let mut tree = NavTree::new();
        let mut item = item_with_titles(&mut tree, &[("Dashboards", 90.0), ("Other", 10.0)]);

        item.set_collapsed(&mut tree, true);
        assert_eq!(tree.tooltip(item.element()), Some("Dashboards"));
        assert!(item.units().iter().all(|u| tree.has_collapsed_marker(u.element())));

        item.set_collapsed(&mut tree, false);
        assert_eq!(tree.tooltip(item.element()), None);
        assert!(item.units().iter().all(|u| !tree.has_collapsed_marker(u.element())));
    }

    #[test]
    fn test_tooltip_prefers_collapsed_title() {
        let mut tree = NavTree::new();
        let mut item = item_with_titles(&mut tree, &[("Short", 40.0)]);
        tree.set_collapsed_title(item.element(), Some("Security events & incidents".into()))
            .unwrap();

        item.set_collapsed(&mut tree, true);
        assert_eq!(
            tree.tooltip(item.element()),
            Some("Security events & incidents")
        );
    }

    #[test]
    fn test_empty_collapsed_title_falls_back_to_text() {
        let mut tree = NavTree::new();
        let mut item = item_with_titles(&mut tree, &[("Audit log", 70.0)]);
        tree.set_collapsed_title(item.element(), Some(String::new()))
            .unwrap();

        item.set_collapsed(&mut tree, true);
        assert_eq!(tree.tooltip(item.element()), Some("Audit log"));
    }

    #[test]
    fn test_tooltip_empty_when_titles_have_no_text() {
        let mut tree = NavTree::new();
        let mut item = item_with_titles(&mut tree, &[("", 40.0)]);

        item.set_collapsed(&mut tree, true);
        assert_eq!(tree.tooltip(item.element()), Some(""));
    }
}
