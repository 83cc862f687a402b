//! Common imports for navbar hosts.
//!
//! ```
//! use horizon_navbar::prelude::*;
//! ```

pub use crate::config::NavbarConfig;
pub use crate::error::{NavbarError, NavbarResult};
pub use crate::widget::{
    BoxWidth, CachedItemWidth, CollapseReport, CollapsibleUnit, ContainerPosition, ElementId,
    FixedMeasurer, LayoutMeasurer, NavTree, Navbar, Role,
};
pub use horizon_navbar_core::{Clock, ManualClock, ResizeEvent, ResizeSource, SystemClock};
