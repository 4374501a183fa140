// SPDX-License-Identifier: MPL-2.0
//! Screens shown inside a navigation container.

use serde::{Deserialize, Serialize};

/// Identity of a screen within a navigation stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScreenId(u64);

impl ScreenId {
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// What a content view is, as far as inset compensation cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// Table-like scrolling list.
    Table,
    /// Grid-like scrolling collection.
    Grid,
    /// Generic scroll view.
    Scroll,
    /// Anything that does not scroll.
    Plain,
}

impl ViewKind {
    #[must_use]
    pub fn is_scrollable(self) -> bool {
        !matches!(self, ViewKind::Plain)
    }
}

/// A view with a mutable top content inset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentView {
    pub kind: ViewKind,
    pub top_inset: f32,
}

impl ContentView {
    #[must_use]
    pub fn new(kind: ViewKind) -> Self {
        Self {
            kind,
            top_inset: 0.0,
        }
    }

    #[must_use]
    pub fn with_top_inset(mut self, top_inset: f32) -> Self {
        self.top_inset = top_inset;
        self
    }
}

/// A screen: its root content view and the root's direct children.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    id: ScreenId,
    root: ContentView,
    children: Vec<ContentView>,
}

impl Screen {
    #[must_use]
    pub fn new(id: ScreenId, root: ContentView) -> Self {
        Self {
            id,
            root,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_child(mut self, child: ContentView) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn id(&self) -> ScreenId {
        self.id
    }

    #[must_use]
    pub fn root(&self) -> &ContentView {
        &self.root
    }

    #[must_use]
    pub fn children(&self) -> &[ContentView] {
        &self.children
    }

    /// Returns the view whose top inset follows the banner.
    ///
    /// A table root wins, then a grid root, then the first scrollable child.
    #[must_use]
    pub fn inset_target(&self) -> Option<&ContentView> {
        match self.root.kind {
            ViewKind::Table | ViewKind::Grid => Some(&self.root),
            ViewKind::Scroll | ViewKind::Plain => {
                self.children.iter().find(|child| child.kind.is_scrollable())
            }
        }
    }

    pub fn inset_target_mut(&mut self) -> Option<&mut ContentView> {
        match self.root.kind {
            ViewKind::Table | ViewKind::Grid => Some(&mut self.root),
            ViewKind::Scroll | ViewKind::Plain => self
                .children
                .iter_mut()
                .find(|child| child.kind.is_scrollable()),
        }
    }

    /// Top inset of the compensated view, if the screen has one.
    #[must_use]
    pub fn top_inset(&self) -> Option<f32> {
        self.inset_target().map(|view| view.top_inset)
    }
}
