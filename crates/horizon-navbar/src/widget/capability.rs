//! Optional item capabilities.
//!
//! Navbar items can be disabled and can take keyboard focus. Each concern is a
//! small struct an element either has or doesn't; an item holds whichever it
//! supports in [`ItemCapabilities`].

/// Something that can be disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Disableable {
    disabled: bool,
}

impl Disableable {
    /// Check if disabled.
    #[inline]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Set the disabled state. Returns `true` if it changed.
    pub fn set_disabled(&mut self, disabled: bool) -> bool {
        let changed = self.disabled != disabled;
        self.disabled = disabled;
        changed
    }
}

/// Something that sits in the tab order.
///
/// Clearing the tab index falls back to the default it was created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Focusable {
    tab_index: i32,
    default_tab_index: i32,
}

impl Default for Focusable {
    fn default() -> Self {
        Self::with_default_tab_index(0)
    }
}

impl Focusable {
    /// Create with `default_tab_index` as both the default and current index.
    pub fn with_default_tab_index(default_tab_index: i32) -> Self {
        Self {
            tab_index: default_tab_index,
            default_tab_index,
        }
    }

    /// Create with an explicit tab index over the usual default of 0.
    pub fn with_tab_index(tab_index: i32) -> Self {
        Self {
            tab_index,
            ..Self::default()
        }
    }

    /// The configured tab index.
    pub fn tab_index(&self) -> i32 {
        self.tab_index
    }

    /// The index restored when the tab index is cleared.
    pub fn default_tab_index(&self) -> i32 {
        self.default_tab_index
    }

    /// Set the tab index; `None` restores the default.
    pub fn set_tab_index(&mut self, tab_index: Option<i32>) {
        self.tab_index = tab_index.unwrap_or(self.default_tab_index);
    }
}

/// The capabilities an element carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemCapabilities {
    /// Present if the element can be disabled.
    pub disable: Option<Disableable>,
    /// Present if the element can take focus.
    pub focus: Option<Focusable>,
}

impl ItemCapabilities {
    /// The default set for navbar items: enabled and focusable at index 0.
    pub fn interactive() -> Self {
        Self {
            disable: Some(Disableable::default()),
            focus: Some(Focusable::default()),
        }
    }

    /// Whether the element is disabled. Elements without the capability never are.
    pub fn is_disabled(&self) -> bool {
        self.disable.is_some_and(|d| d.is_disabled())
    }

    /// Effective tab index: `None` if the element cannot take focus, `-1` while
    /// disabled, otherwise the configured index.
    pub fn effective_tab_index(&self) -> Option<i32> {
        let focus = self.focus?;
        if self.is_disabled() {
            Some(-1)
        } else {
            Some(focus.tab_index())
        }
    }

    /// Whether a click on the element should be delivered.
    pub fn accepts_activation(&self) -> bool {
        !self.is_disabled()
    }
}
