//! Navbar widget implementation.
//!
//! This module provides [`Navbar`], a horizontal or vertical bar of items
//! that hides item titles (leaving only their icons) when the bar runs out of
//! width, and shows them again once space frees up.
//!
//! # Collapse pass
//!
//! On every pass the navbar compares the total width of its top-level items
//! with the width available to it. The shortfall (the *deficit*) is worked
//! off by walking the items from last to first: each collapsible item is
//! collapsed while the deficit is still positive and expanded once it is not,
//! and its collapsible width is subtracted either way.
//!
//! Item widths are measured once and cached until the tree's child list
//! changes or [`Navbar::invalidate_widths`] is called.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use horizon_navbar::prelude::*;
//!
//! let mut tree = NavTree::new();
//! let container = tree.append(tree.root(), Role::Container).unwrap();
//! let item = tree.append(container, Role::Item).unwrap();
//! tree.append(item, Role::Icon).unwrap();
//! let title = tree.append_text(item, Role::Title, "Reports").unwrap();
//!
//! let measurer = Arc::new(FixedMeasurer::new().with_available(100.0));
//! measurer.set_width(item, 160.0);
//! measurer.set_width(title, 90.0);
//!
//! let mut navbar = Navbar::new(tree, measurer.clone(), NavbarConfig::default());
//! navbar.recompute_collapse();
//!
//! assert!(navbar.tree().has_collapsed_marker(title));
//! assert_eq!(navbar.tree().tooltip(item), Some("Reports"));
//! ```

mod collapsible;
mod discovery;
mod item;

pub use collapsible::CollapsibleUnit;
pub use discovery::{collapsible_titles, measure_items, top_level_items};
pub use item::CachedItemWidth;

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use horizon_navbar_core::logging::targets;
use horizon_navbar_core::{
    Clock, ConnectionGuard, Debouncer, ResizeSource, Signal, SystemClock, TaskQueue,
};
use parking_lot::Mutex;

use super::capability::{Disableable, Focusable};
use super::classes;
use super::measure::LayoutMeasurer;
use super::tree::{ElementId, NavTree, Role};
use crate::config::NavbarConfig;
use crate::error::{NavbarError, NavbarResult};

/// Outcome of one collapse pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollapseReport {
    /// Total item width minus available width, before any collapsing.
    pub deficit: f32,
    /// Items left collapsed, in document order.
    pub collapsed: Vec<ElementId>,
}

/// Memoized measurements.
#[derive(Debug, Default)]
struct WidthCache {
    /// Tree revision the cache was built against.
    revision: u64,
    /// Set by an explicit invalidation; the next refresh re-measures.
    invalidated: bool,
    items: Option<Vec<CachedItemWidth>>,
    total_width: Option<f32>,
}

impl WidthCache {
    /// Empty the cache, handing back the items it held.
    fn take(&mut self) -> Option<Vec<CachedItemWidth>> {
        self.invalidated = false;
        self.total_width = None;
        self.items.take()
    }
}

/// A responsive navigation bar.
///
/// # Signals
///
/// - [`closed_changed`](Navbar::closed_changed): Emitted when the bar opens or closes
/// - [`collapse_updated`](Navbar::collapse_updated): Emitted after every collapse pass
/// - [`item_activated`](Navbar::item_activated): Emitted when an enabled item is clicked
pub struct Navbar {
    tree: NavTree,
    measurer: Box<dyn LayoutMeasurer>,
    cache: WidthCache,

    vertical: bool,
    closed: bool,
    force_recalculate: bool,

    // Resize handling
    clock: Arc<dyn Clock>,
    resize: Arc<Mutex<Debouncer>>,
    subscription: Option<ConnectionGuard>,
    deferred: TaskQueue<Navbar>,
    passes: u64,

    // Signals
    /// Signal emitted when the open/closed state changes.
    pub closed_changed: Signal<bool>,
    /// Signal emitted after every collapse pass.
    pub collapse_updated: Signal<CollapseReport>,
    /// Signal emitted with the activated item.
    pub item_activated: Signal<ElementId>,
}

impl Navbar {
    /// Create a navbar over `tree`, measured by `measurer`.
    pub fn new(tree: NavTree, measurer: impl LayoutMeasurer + 'static, config: NavbarConfig) -> Self {
        tracing::debug!(
            target: targets::NAVBAR,
            vertical = config.vertical,
            closed = config.closed,
            debounce_ms = config.resize_debounce_ms,
            "navbar created"
        );

        Self {
            tree,
            measurer: Box::new(measurer),
            cache: WidthCache::default(),
            vertical: config.vertical,
            closed: config.closed,
            force_recalculate: config.force_recalculate,
            clock: Arc::new(SystemClock),
            resize: Arc::new(Mutex::new(Debouncer::new(config.resize_debounce()))),
            subscription: None,
            deferred: TaskQueue::new(),
            passes: 0,
            closed_changed: Signal::new(),
            collapse_updated: Signal::new(),
            item_activated: Signal::new(),
        }
    }

    /// Drive timing from `clock` instead of the system clock.
    ///
    /// Set this before [`attach`](Self::attach).
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    // =========================================================================
    // Tree
    // =========================================================================

    /// The element tree.
    pub fn tree(&self) -> &NavTree {
        &self.tree
    }

    /// Mutable access to the element tree.
    ///
    /// Structural edits invalidate cached widths for the next pass.
    pub fn tree_mut(&mut self) -> &mut NavTree {
        &mut self.tree
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Whether the bar is laid out vertically.
    pub fn is_vertical(&self) -> bool {
        self.vertical
    }

    /// Whether the bar is closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Open or close the bar.
    pub fn set_closed(&mut self, closed: bool) {
        if self.closed != closed {
            self.closed = closed;
            tracing::debug!(target: targets::NAVBAR, closed, "navbar toggled");
            self.closed_changed.emit(closed);
        }
    }

    /// Flip the open/closed state.
    pub fn toggle(&mut self) {
        self.set_closed(!self.closed);
    }

    /// Number of collapse passes run so far.
    pub fn pass_count(&self) -> u64 {
        self.passes
    }

    /// Style classes for the render surface.
    pub fn surface_classes(&self) -> Vec<&'static str> {
        classes::surface_classes(self.vertical, self.closed)
    }

    /// Style classes for any element.
    pub fn element_classes(&self, id: ElementId) -> Vec<&'static str> {
        classes::element_classes(&self.tree, id, self.vertical, self.closed)
    }

    // =========================================================================
    // Items
    // =========================================================================

    /// Set the tooltip shown when `item` is collapsed, overriding its title text.
    ///
    /// Takes effect on the next collapse pass.
    pub fn set_collapsed_title(&mut self, item: ElementId, title: impl Into<String>) -> NavbarResult<()> {
        self.tree.set_collapsed_title(item, Some(title.into()))
    }

    /// Enable or disable an item.
    pub fn set_item_disabled(&mut self, item: ElementId, disabled: bool) -> NavbarResult<()> {
        let disable: &mut Disableable = self
            .tree
            .capabilities_mut(item)?
            .disable
            .as_mut()
            .ok_or(NavbarError::MissingCapability {
                element: item,
                capability: "disable",
            })?;
        if disable.set_disabled(disabled) {
            tracing::debug!(target: targets::NAVBAR, ?item, disabled, "item disabled state changed");
        }
        Ok(())
    }

    /// Set an item's tab index; `None` restores its default.
    pub fn set_item_tab_index(&mut self, item: ElementId, tab_index: Option<i32>) -> NavbarResult<()> {
        let focus: &mut Focusable = self
            .tree
            .capabilities_mut(item)?
            .focus
            .as_mut()
            .ok_or(NavbarError::MissingCapability {
                element: item,
                capability: "focus",
            })?;
        focus.set_tab_index(tab_index);
        Ok(())
    }

    /// Whether an item is disabled.
    pub fn is_item_disabled(&self, item: ElementId) -> bool {
        self.tree
            .capabilities(item)
            .is_some_and(|caps| caps.is_disabled())
    }

    /// Effective tab index of an element, `None` if it cannot take focus.
    pub fn tab_index(&self, item: ElementId) -> Option<i32> {
        self.tree.capabilities(item)?.effective_tab_index()
    }

    /// Deliver a click on `element`.
    ///
    /// A click inside the toggle flips the open/closed state. A click inside
    /// a disabled element is swallowed. Otherwise the enclosing item is
    /// reported through [`item_activated`](Self::item_activated). Returns
    /// whether the click was delivered.
    pub fn activate(&mut self, element: ElementId) -> bool {
        if !self.tree.contains(element) {
            return false;
        }

        let mut path = vec![element];
        let mut cursor = element;
        while let Some(parent) = self.tree.parent(cursor) {
            path.push(parent);
            cursor = parent;
        }

        let swallowed = path.iter().any(|&id| {
            self.tree
                .capabilities(id)
                .is_some_and(|caps| !caps.accepts_activation())
        });
        if swallowed {
            tracing::debug!(target: targets::NAVBAR, ?element, "click on disabled item swallowed");
            return false;
        }
        if path.iter().any(|&id| self.tree.role(id) == Some(Role::Toggle)) {
            self.toggle();
            return true;
        }

        let item = path
            .iter()
            .copied()
            .find(|&id| matches!(self.tree.role(id), Some(Role::Item | Role::Brand)));
        match item {
            Some(item) => {
                self.item_activated.emit(item);
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Width cache
    // =========================================================================

    /// Drop cached measurements; the next pass re-measures everything.
    pub fn invalidate_widths(&mut self) {
        tracing::trace!(target: targets::COLLAPSE, "width cache invalidated");
        self.cache.invalidated = true;
    }

    /// Top-level items with their cached widths, measuring them if needed.
    pub fn items(&mut self) -> &[CachedItemWidth] {
        self.refresh_cache();
        self.cache.items.as_deref().unwrap_or(&[])
    }

    /// Total outer width of all top-level items, measuring them if needed.
    pub fn total_width(&mut self) -> f32 {
        self.refresh_cache();
        self.cached_total_width()
    }

    fn refresh_cache(&mut self) {
        let stale = self.force_recalculate
            || self.cache.invalidated
            || self.cache.revision != self.tree.revision();
        let previous = if stale {
            self.cache.revision = self.tree.revision();
            self.cache.take()
        } else {
            None
        };

        if self.cache.items.is_none() {
            let items = measure_items(&self.tree, self.measurer.as_ref());
            tracing::trace!(target: targets::COLLAPSE, count = items.len(), "items measured");
            self.cache.items = Some(items);
        }

        if let Some(previous) = previous {
            self.release_orphans(&previous);
        }
    }

    /// Clear markers and tooltips applied by `previous` items that the
    /// rebuilt cache no longer tracks. Anything still tracked is left alone;
    /// the next pass decides its state.
    fn release_orphans(&mut self, previous: &[CachedItemWidth]) {
        let current = self.cache.items.as_deref().unwrap_or(&[]);
        let tracked_items: HashSet<ElementId> = current
            .iter()
            .filter(|item| item.can_collapse())
            .map(CachedItemWidth::element)
            .collect();
        let tracked_units: HashSet<ElementId> = current
            .iter()
            .flat_map(CachedItemWidth::units)
            .map(CollapsibleUnit::element)
            .collect();

        for item in previous {
            if !tracked_items.contains(&item.element()) && self.tree.tooltip(item.element()).is_some() {
                tracing::trace!(target: targets::COLLAPSE, item = ?item.element(), "releasing orphaned tooltip");
                self.tree.set_tooltip(item.element(), None);
            }
            for unit in item.units() {
                if !tracked_units.contains(&unit.element()) {
                    self.tree.set_collapsed_marker(unit.element(), false);
                }
            }
        }
    }

    fn cached_total_width(&mut self) -> f32 {
        if let Some(total) = self.cache.total_width {
            return total;
        }
        let total = self
            .cache
            .items
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .map(CachedItemWidth::width)
            .sum();
        self.cache.total_width = Some(total);
        total
    }

    // =========================================================================
    // Collapse
    // =========================================================================

    /// Decide which items collapse so the bar fits, and apply it.
    ///
    /// Items are visited last to first. An unmeasurable surface counts as
    /// zero width, which collapses everything that can collapse.
    #[tracing::instrument(skip_all, target = "horizon_navbar::collapse", level = "trace")]
    pub fn recompute_collapse(&mut self) -> CollapseReport {
        self.refresh_cache();
        let total = self.cached_total_width();
        let available = self
            .measurer
            .available_width(&self.tree, self.tree.root())
            .unwrap_or(0.0);

        let mut deficit = total - available;
        let mut report = CollapseReport {
            deficit,
            collapsed: Vec::new(),
        };

        if let Some(items) = self.cache.items.as_mut() {
            for item in items.iter_mut().rev() {
                if !item.can_collapse() {
                    continue;
                }

                // Once the deficit is worked off, every earlier item expands.
                let collapse = deficit > 0.0;
                item.set_collapsed(&mut self.tree, collapse);
                if collapse {
                    report.collapsed.push(item.element());
                }
                tracing::trace!(
                    target: targets::COLLAPSE,
                    item = ?item.element(),
                    collapse,
                    deficit,
                    freed = item.collapsed_width(),
                    "item processed"
                );

                deficit -= item.collapsed_width();
            }
        }
        report.collapsed.reverse();

        self.passes += 1;
        tracing::debug!(
            target: targets::COLLAPSE,
            total,
            available,
            deficit = report.deficit,
            collapsed = report.collapsed.len(),
            "collapse pass complete"
        );
        self.collapse_updated.emit(report.clone());
        report
    }

    // =========================================================================
    // Resize handling
    // =========================================================================

    /// Start reacting to `source`.
    ///
    /// Resize notifications are debounced; the first pass runs on the next
    /// [`tick`](Self::tick) rather than now, since icon metrics may not be
    /// final until then. Attaching again replaces the previous subscription.
    pub fn attach(&mut self, source: &ResizeSource) {
        self.detach();

        let debouncer = self.resize.clone();
        let clock = self.clock.clone();
        self.subscription = Some(source.subscribe(move |_event| {
            debouncer.lock().trigger(clock.now());
        }));
        self.deferred.post(|navbar: &mut Navbar| {
            navbar.recompute_collapse();
        });

        tracing::debug!(target: targets::NAVBAR, "navbar attached to resize source");
    }

    /// Stop reacting to resize notifications and drop pending work.
    pub fn detach(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.disconnect();
            tracing::debug!(target: targets::NAVBAR, "navbar detached from resize source");
        }
        self.resize.lock().cancel();
        self.deferred.clear();
    }

    /// Whether a resize subscription is live.
    pub fn is_attached(&self) -> bool {
        self.subscription
            .as_ref()
            .is_some_and(ConnectionGuard::is_connected)
    }

    /// Run due work: deferred tasks, then a debounced pass if its quiet
    /// interval has elapsed. Returns the number of collapse passes run.
    pub fn tick(&mut self) -> u64 {
        let before = self.passes;

        let mut deferred = std::mem::take(&mut self.deferred);
        deferred.process_all(self);

        let now = self.clock.now();
        let due = self.resize.lock().poll(now);
        if due {
            self.recompute_collapse();
        }

        self.passes - before
    }

    /// How long the host may sleep before the next [`tick`](Self::tick) has
    /// work to do. `None` if nothing is pending.
    pub fn time_until_next_tick(&self) -> Option<Duration> {
        if self.deferred.has_pending() {
            return Some(Duration::ZERO);
        }
        let now = self.clock.now();
        self.resize.lock().time_until_ready(now)
    }
}

impl std::fmt::Debug for Navbar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navbar")
            .field("vertical", &self.vertical)
            .field("closed", &self.closed)
            .field("attached", &self.is_attached())
            .field("passes", &self.passes)
            .finish_non_exhaustive()
    }
}
