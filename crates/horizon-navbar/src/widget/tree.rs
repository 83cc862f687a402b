//! The navbar element tree.
//!
//! A [`NavTree`] is the presentation-side model of one navbar: an arena of
//! elements, each tagged with a [`Role`] from the fixed navbar taxonomy. The
//! collapse controller never touches rendering; it reads the structure from
//! here and writes back the visual state (collapsed marker and tooltip).
//!
//! ```text
//! Navbar (root render surface)
//! ├── Container (position = Left)
//! │   ├── Brand
//! │   │   ├── Logo
//! │   │   └── Title "Mosaic"
//! │   └── Item
//! │       ├── Icon
//! │       └── Title "Projects"
//! └── Toggle
//! ```

use slotmap::{new_key_type, SlotMap};

use super::capability::ItemCapabilities;
use crate::error::{NavbarError, NavbarResult};

new_key_type! {
    /// Handle to an element in a [`NavTree`].
    pub struct ElementId;
}

/// The fixed role taxonomy of navbar elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The bar's render surface; the root of every tree.
    Navbar,
    /// First-level grouping of items.
    Container,
    /// A navigation entry.
    Item,
    /// A brand block (logo plus title).
    Brand,
    /// A title; second level when directly in a container, otherwise the
    /// collapsible label inside an item.
    Title,
    /// A logo marker.
    Logo,
    /// An icon marker.
    Icon,
    /// The open/close toggle.
    Toggle,
    /// Anything else.
    Generic,
}

impl Role {
    /// Roles that count as top-level items when placed directly in a container.
    pub fn is_second_level(self) -> bool {
        matches!(self, Role::Item | Role::Brand | Role::Title)
    }

    /// Roles an item can shrink down to.
    pub fn is_icon_or_logo(self) -> bool {
        matches!(self, Role::Icon | Role::Logo)
    }
}

/// Where a container sits in the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerPosition {
    /// Start of a horizontal bar.
    Left,
    /// End of a horizontal bar.
    Right,
    /// Top of a vertical bar.
    Top,
    /// Bottom of a vertical bar.
    Bottom,
}

/// A single element.
#[derive(Debug, Clone)]
struct Element {
    role: Role,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    text: String,
    collapsed_marker: bool,
    tooltip: Option<String>,
    collapsed_title: Option<String>,
    position: Option<ContainerPosition>,
    capabilities: ItemCapabilities,
}

impl Element {
    fn new(role: Role, parent: Option<ElementId>) -> Self {
        let capabilities = if role == Role::Item {
            ItemCapabilities::interactive()
        } else {
            ItemCapabilities::default()
        };
        Self {
            role,
            parent,
            children: Vec::new(),
            text: String::new(),
            collapsed_marker: false,
            tooltip: None,
            collapsed_title: None,
            position: None,
            capabilities,
        }
    }
}

/// Arena of navbar elements.
#[derive(Debug, Clone)]
pub struct NavTree {
    elements: SlotMap<ElementId, Element>,
    root: ElementId,
    revision: u64,
}

impl Default for NavTree {
    fn default() -> Self {
        Self::new()
    }
}

impl NavTree {
    /// Create a tree holding only the root `Navbar` element.
    pub fn new() -> Self {
        let mut elements = SlotMap::with_key();
        let root = elements.insert(Element::new(Role::Navbar, None));
        Self {
            elements,
            root,
            revision: 0,
        }
    }

    /// The root render surface.
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Structural revision; bumped whenever a child list changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether `id` refers to a live element.
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(id)
    }

    /// Number of live elements, root included.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false: the root cannot be removed.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    // =========================================================================
    // Structure
    // =========================================================================

    /// Append a new element with `role` as the last child of `parent`.
    pub fn append(&mut self, parent: ElementId, role: Role) -> NavbarResult<ElementId> {
        if !self.contains(parent) {
            return Err(NavbarError::UnknownElement(parent));
        }
        let id = self.elements.insert(Element::new(role, Some(parent)));
        self.element_mut(parent)?.children.push(id);
        self.revision += 1;
        Ok(id)
    }

    /// Append a child carrying text, typically a `Title`.
    pub fn append_text(
        &mut self,
        parent: ElementId,
        role: Role,
        text: impl Into<String>,
    ) -> NavbarResult<ElementId> {
        let id = self.append(parent, role)?;
        self.set_text(id, text)?;
        Ok(id)
    }

    /// Remove an element and its whole subtree.
    ///
    /// The root cannot be removed.
    pub fn remove(&mut self, id: ElementId) -> NavbarResult<()> {
        if id == self.root {
            return Err(NavbarError::RootRemoval);
        }
        let parent = self.element(id)?.parent;

        let doomed = self.descendants(id);
        for child in doomed {
            self.elements.remove(child);
        }
        self.elements.remove(id);

        if let Some(parent) = parent.and_then(|p| self.elements.get_mut(p)) {
            parent.children.retain(|&c| c != id);
        }
        self.revision += 1;
        Ok(())
    }

    /// The role of an element.
    pub fn role(&self, id: ElementId) -> Option<Role> {
        self.elements.get(id).map(|e| e.role)
    }

    /// The parent of an element.
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.elements.get(id).and_then(|e| e.parent)
    }

    /// Direct children, in document order.
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.elements
            .get(id)
            .map(|e| e.children.as_slice())
            .unwrap_or(&[])
    }

    /// All descendants in document (pre-)order, excluding `id` itself.
    pub fn descendants(&self, id: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack: Vec<ElementId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// Set an element's own text.
    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) -> NavbarResult<()> {
        self.element_mut(id)?.text = text.into();
        Ok(())
    }

    /// Rendered text of an element: its own text followed by its descendants'
    /// text in document order, whitespace-joined and trimmed.
    pub fn text_content(&self, id: ElementId) -> String {
        let Some(element) = self.elements.get(id) else {
            return String::new();
        };

        let mut parts: Vec<&str> = vec![element.text.trim()];
        parts.extend(
            self.descendants(id)
                .into_iter()
                .filter_map(|d| self.elements.get(d))
                .map(|e| e.text.trim()),
        );
        parts
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Set a container's position.
    pub fn set_position(&mut self, id: ElementId, position: ContainerPosition) -> NavbarResult<()> {
        self.element_mut(id)?.position = Some(position);
        Ok(())
    }

    /// A container's position, if set.
    pub fn position(&self, id: ElementId) -> Option<ContainerPosition> {
        self.elements.get(id).and_then(|e| e.position)
    }

    // =========================================================================
    // Visual state
    // =========================================================================

    /// Add or remove the collapsed-title marker.
    pub fn set_collapsed_marker(&mut self, id: ElementId, collapsed: bool) {
        if let Some(element) = self.elements.get_mut(id) {
            element.collapsed_marker = collapsed;
        }
    }

    /// Whether the collapsed-title marker is present.
    pub fn has_collapsed_marker(&self, id: ElementId) -> bool {
        self.elements.get(id).is_some_and(|e| e.collapsed_marker)
    }

    /// Set or clear the tooltip.
    pub fn set_tooltip(&mut self, id: ElementId, tooltip: Option<String>) {
        if let Some(element) = self.elements.get_mut(id) {
            element.tooltip = tooltip;
        }
    }

    /// The current tooltip.
    pub fn tooltip(&self, id: ElementId) -> Option<&str> {
        self.elements.get(id).and_then(|e| e.tooltip.as_deref())
    }

    /// Set the title shown as tooltip when the element collapses.
    pub fn set_collapsed_title(&mut self, id: ElementId, title: Option<String>) -> NavbarResult<()> {
        self.element_mut(id)?.collapsed_title = title;
        Ok(())
    }

    /// The explicit collapsed title, if set.
    pub fn collapsed_title(&self, id: ElementId) -> Option<&str> {
        self.elements.get(id).and_then(|e| e.collapsed_title.as_deref())
    }

    // =========================================================================
    // Capabilities
    // =========================================================================

    /// Capabilities of an element.
    pub fn capabilities(&self, id: ElementId) -> Option<&ItemCapabilities> {
        self.elements.get(id).map(|e| &e.capabilities)
    }

    /// Mutable capabilities of an element.
    pub fn capabilities_mut(&mut self, id: ElementId) -> NavbarResult<&mut ItemCapabilities> {
        Ok(&mut self.element_mut(id)?.capabilities)
    }

    fn element(&self, id: ElementId) -> NavbarResult<&Element> {
        self.elements.get(id).ok_or(NavbarError::UnknownElement(id))
    }

    fn element_mut(&mut self, id: ElementId) -> NavbarResult<&mut Element> {
        self.elements.get_mut(id).ok_or(NavbarError::UnknownElement(id))
    }
}
