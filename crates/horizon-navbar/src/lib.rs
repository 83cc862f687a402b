//! Horizon navbar: a responsive navigation bar widget.
//!
//! A [`Navbar`](widget::Navbar) holds a tree of items (entries, a brand, titles)
//! and, whenever the window is resized, decides which item titles to hide so
//! the whole bar fits. Hidden titles leave their icon behind and turn into a
//! tooltip on the item.
//!
//! Rendering stays with the host. The navbar talks to it through three seams:
//!
//! - [`NavTree`](widget::NavTree): the element structure and the visual state
//!   the navbar writes back (collapsed marker, tooltip)
//! - [`LayoutMeasurer`](widget::LayoutMeasurer): rendered widths
//! - [`ResizeSource`](horizon_navbar_core::ResizeSource): window resize notifications
//!
//! See [`widget::navbar`] for the collapse rules and a full example.

pub mod config;
pub mod error;
pub mod prelude;
pub mod widget;

pub use config::NavbarConfig;
pub use error::{NavbarError, NavbarResult};
