use crate::widget::tree::{ElementId, NavTree};

/// A title slot inside an item that can be hidden on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct CollapsibleUnit {
    element: ElementId,
    width: f32,
    collapsed: bool,
}

impl CollapsibleUnit {
    /// Wrap a title element measured at `width`.
    pub fn new(element: ElementId, width: f32) -> Self {
        Self {
            element,
            width,
            collapsed: false,
        }
    }

    /// The title element.
    pub fn element(&self) -> ElementId {
        self.element
    }

    /// Width freed when this unit collapses.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// The last applied decision.
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Apply a collapse decision and sync the element's marker to it.
    pub fn set_collapsed(&mut self, tree: &mut NavTree, collapsed: bool) {
        self.collapsed = collapsed;
        tree.set_collapsed_marker(self.element, collapsed);
    }
}
