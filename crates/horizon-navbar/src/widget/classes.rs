//! Style class names for navbar elements.
//!
//! Renderers and stylesheets key off these names; the navbar derives them
//! from its state so the host never has to track `vertical` / `closed`
//! itself.

use super::tree::{ContainerPosition, ElementId, NavTree, Role};

/// Class on a title whose text is hidden.
pub const COLLAPSED_TITLE: &str = "mc-navbar-collapsed-title";

/// Classes of the render surface.
pub fn surface_classes(vertical: bool, closed: bool) -> Vec<&'static str> {
    vec![
        "mc-navbar",
        if vertical { "mc-navbar_vertical" } else { "mc-navbar_horizontal" },
        if closed { "mc-navbar_closed" } else { "mc-navbar_opened" },
    ]
}

/// Classes of any element in the tree.
pub fn element_classes(tree: &NavTree, id: ElementId, vertical: bool, closed: bool) -> Vec<&'static str> {
    let Some(role) = tree.role(id) else {
        return Vec::new();
    };

    let mut classes = Vec::new();
    match role {
        Role::Navbar => return surface_classes(vertical, closed),
        Role::Container => {
            classes.push("mc-navbar-container");
            match tree.position(id) {
                Some(ContainerPosition::Left) => classes.push("mc-navbar-left"),
                Some(ContainerPosition::Right) => classes.push("mc-navbar-right"),
                Some(ContainerPosition::Top) => classes.push("mc-navbar_top"),
                Some(ContainerPosition::Bottom) => classes.push("mc-navbar_bottom"),
                None => {}
            }
        }
        Role::Item => {
            classes.push("mc-navbar-item");
            if vertical {
                classes.push("mc-navbar-item_vertical");
            }
            if closed {
                classes.push("mc-navbar-item_closed");
            }
        }
        Role::Brand => {
            classes.push("mc-navbar-brand");
            if vertical {
                classes.push("mc-navbar-brand_vertical");
            }
            if closed {
                classes.push("mc-navbar-brand_closed");
            }
        }
        Role::Title => classes.push("mc-navbar-title"),
        Role::Logo => classes.push("mc-navbar-logo"),
        Role::Icon => classes.push("mc-icon"),
        Role::Toggle => {
            classes.push("mc-navbar-toggle");
            classes.push("mc-navbar-item");
        }
        Role::Generic => {}
    }

    if tree.has_collapsed_marker(id) {
        classes.push(COLLAPSED_TITLE);
    }
    classes
}
