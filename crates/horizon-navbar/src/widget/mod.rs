//! Navbar widget and the seams it renders through.

pub mod capability;
pub mod classes;
pub mod measure;
pub mod navbar;
pub mod tree;

pub use capability::{Disableable, Focusable, ItemCapabilities};
pub use measure::{BoxWidth, FixedMeasurer, LayoutMeasurer};
pub use navbar::{CachedItemWidth, CollapseReport, CollapsibleUnit, Navbar};
pub use tree::{ContainerPosition, ElementId, NavTree, Role};
