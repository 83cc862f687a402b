//! Layout measurement.
//!
//! The collapse controller needs three numbers from whatever renders the bar:
//! the outer width of an item, the border-box width of a title, and the width
//! available to the bar. All come through [`LayoutMeasurer`].
//!
//! Items are measured with their margins since margins take up room in the
//! bar. Titles are measured without, because hiding a title frees its box but
//! not the spacing around it.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::tree::{ElementId, NavTree};

/// Reads rendered geometry.
///
/// `None` means the element could not be measured (detached, not laid out
/// yet); callers treat it as zero.
pub trait LayoutMeasurer {
    /// Outer width of `element`: border box plus horizontal margins.
    fn outer_width(&self, tree: &NavTree, element: ElementId) -> Option<f32>;

    /// Border-box width of `element`, margins excluded.
    fn border_width(&self, tree: &NavTree, element: ElementId) -> Option<f32>;

    /// Width currently available to the bar's render surface `container`.
    fn available_width(&self, tree: &NavTree, container: ElementId) -> Option<f32>;
}

impl<M: LayoutMeasurer + ?Sized> LayoutMeasurer for Arc<M> {
    fn outer_width(&self, tree: &NavTree, element: ElementId) -> Option<f32> {
        (**self).outer_width(tree, element)
    }

    fn border_width(&self, tree: &NavTree, element: ElementId) -> Option<f32> {
        (**self).border_width(tree, element)
    }

    fn available_width(&self, tree: &NavTree, container: ElementId) -> Option<f32> {
        (**self).available_width(tree, container)
    }
}

/// Horizontal box metrics of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoxWidth {
    /// Border-box width.
    pub width: f32,
    /// Left margin.
    pub margin_left: f32,
    /// Right margin.
    pub margin_right: f32,
}

impl BoxWidth {
    /// A box with no margins.
    pub fn new(width: f32) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    /// Set both margins.
    pub fn with_margins(mut self, left: f32, right: f32) -> Self {
        self.margin_left = left;
        self.margin_right = right;
        self
    }

    /// Width plus horizontal margins.
    pub fn outer(&self) -> f32 {
        self.width + self.margin_left + self.margin_right
    }
}

/// A measurer that returns scripted widths.
///
/// Widths can be changed between passes through a shared handle, which is how
/// hosts that lay out elsewhere (and tests) feed geometry in.
#[derive(Debug, Default)]
pub struct FixedMeasurer {
    boxes: RwLock<HashMap<ElementId, BoxWidth>>,
    available: RwLock<Option<f32>>,
}

impl FixedMeasurer {
    /// Create a measurer with nothing measured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an element's box.
    pub fn set_box(&self, element: ElementId, metrics: BoxWidth) {
        self.boxes.write().insert(element, metrics);
    }

    /// Record an element's width with no margins.
    pub fn set_width(&self, element: ElementId, width: f32) {
        self.set_box(element, BoxWidth::new(width));
    }

    /// Forget an element's box.
    pub fn clear_width(&self, element: ElementId) {
        self.boxes.write().remove(&element);
    }

    /// Set the available width, or `None` for "cannot be measured".
    pub fn set_available(&self, width: Option<f32>) {
        *self.available.write() = width;
    }

    /// Builder form of [`set_available`](Self::set_available).
    pub fn with_available(self, width: f32) -> Self {
        self.set_available(Some(width));
        self
    }
}

impl LayoutMeasurer for FixedMeasurer {
    fn outer_width(&self, _tree: &NavTree, element: ElementId) -> Option<f32> {
        self.boxes.read().get(&element).map(BoxWidth::outer)
    }

    fn border_width(&self, _tree: &NavTree, element: ElementId) -> Option<f32> {
        self.boxes.read().get(&element).map(|metrics| metrics.width)
    }

    fn available_width(&self, _tree: &NavTree, _container: ElementId) -> Option<f32> {
        *self.available.read()
    }
}
