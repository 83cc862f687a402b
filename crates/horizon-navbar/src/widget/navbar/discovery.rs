//! Finding top-level items and their collapsible titles in a tree.

use super::collapsible::CollapsibleUnit;
use super::item::CachedItemWidth;
use crate::widget::measure::LayoutMeasurer;
use crate::widget::tree::{ElementId, NavTree, Role};

/// Top-level items: second-level elements (item, brand, title) that are
/// direct children of a container, in document order.
pub fn top_level_items(tree: &NavTree) -> Vec<ElementId> {
    tree.descendants(tree.root())
        .into_iter()
        .filter(|&id| tree.role(id) == Some(Role::Container))
        .flat_map(|container| tree.children(container).iter().copied())
        .filter(|&child| tree.role(child).is_some_and(Role::is_second_level))
        .collect()
}

/// Title elements inside `item` that may collapse.
///
/// Only items that directly hold an icon or logo qualify; anything else has
/// nothing to shrink to and yields no titles.
pub fn collapsible_titles(tree: &NavTree, item: ElementId) -> Vec<ElementId> {
    let has_icon = tree
        .children(item)
        .iter()
        .any(|&child| tree.role(child).is_some_and(Role::is_icon_or_logo));
    if !has_icon {
        return Vec::new();
    }

    tree.descendants(item)
        .into_iter()
        .filter(|&id| tree.role(id) == Some(Role::Title))
        .collect()
}

/// Measure every top-level item and its collapsible titles.
pub fn measure_items(tree: &NavTree, measurer: &dyn LayoutMeasurer) -> Vec<CachedItemWidth> {
    top_level_items(tree)
        .into_iter()
        .map(|item| {
            let units = collapsible_titles(tree, item)
                .into_iter()
                .map(|title| {
                    CollapsibleUnit::new(title, measurer.border_width(tree, title).unwrap_or(0.0))
                })
                .collect();
            let width = measurer.outer_width(tree, item).unwrap_or(0.0);
            CachedItemWidth::new(item, width, units)
        })
        .collect()
}
