//! Element document
//!
//! An arena of element nodes standing in for the page DOM. Views create
//! elements under a root, the layout assigns their bounds, and the animation
//! engine writes visual state into them.
//!
//! Removed elements stay in the arena as detached nodes until
//! [`Document::collect_detached`] runs, so late writes against them fail with
//! [`DocumentError::Detached`] instead of silently landing on a reused slot.

use crate::error::{DocumentError, Result};
use crate::geometry::{Rect, Viewport};
use crate::style::VisualState;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

new_key_type! {
    /// Handle to an element in the document
    pub struct ElementId;
}

/// A document shared between the site, the coordinator and the animation engine
pub type SharedDocument = Rc<RefCell<Document>>;

/// A single element
#[derive(Clone, Debug)]
pub struct ElementNode {
    pub parent: Option<ElementId>,
    pub children: SmallVec<[ElementId; 4]>,
    /// Laid-out bounds in page coordinates
    pub bounds: Rect,
    pub style: VisualState,
    /// Section anchor, e.g. `"projects"` for `#projects`
    pub anchor: Option<String>,
    /// Text content, for traces and the CLI
    pub label: Option<String>,
    pub attached: bool,
    /// Number of style writes this element has received
    pub mutations: u64,
}

/// The element tree plus the viewport looking at it
#[derive(Debug)]
pub struct Document {
    nodes: SlotMap<ElementId, ElementNode>,
    viewport: Viewport,
    mutations: u64,
}

impl Document {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            viewport: Viewport::new(width, height),
            mutations: 0,
        }
    }

    /// Wrap a document for sharing
    pub fn shared(self) -> SharedDocument {
        Rc::new(RefCell::new(self))
    }

    /// Create an element under `parent` (or at the top level)
    ///
    /// An element created under a detached parent starts out detached.
    pub fn create_element(&mut self, parent: Option<ElementId>, bounds: Rect) -> ElementId {
        let attached = match parent {
            Some(p) => self.is_attached(p),
            None => true,
        };
        let id = self.nodes.insert(ElementNode {
            parent,
            children: SmallVec::new(),
            bounds,
            style: VisualState::VISIBLE,
            anchor: None,
            label: None,
            attached,
            mutations: 0,
        });
        if let Some(node) = parent.and_then(|p| self.nodes.get_mut(p)) {
            node.children.push(id);
        }
        id
    }

    pub fn get(&self, id: ElementId) -> Option<&ElementNode> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn is_attached(&self, id: ElementId) -> bool {
        self.nodes.get(id).is_some_and(|n| n.attached)
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.nodes.get(id).and_then(|n| n.parent)
    }

    /// Whether `id` is `ancestor` or sits somewhere beneath it
    pub fn is_within(&self, id: ElementId, ancestor: ElementId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    /// Ordered children of an element (empty if the element is unknown)
    pub fn children(&self, id: ElementId) -> Vec<ElementId> {
        self.nodes
            .get(id)
            .map(|n| n.children.to_vec())
            .unwrap_or_default()
    }

    pub fn bounds(&self, id: ElementId) -> Option<Rect> {
        self.nodes.get(id).map(|n| n.bounds)
    }

    pub fn set_bounds(&mut self, id: ElementId, bounds: Rect) -> Result<()> {
        let node = self.nodes.get_mut(id).ok_or(DocumentError::Missing(id))?;
        node.bounds = bounds;
        Ok(())
    }

    pub fn style(&self, id: ElementId) -> Option<VisualState> {
        self.nodes.get(id).map(|n| n.style)
    }

    /// Write an element's visual state
    pub fn set_style(&mut self, id: ElementId, style: VisualState) -> Result<()> {
        let node = self.nodes.get_mut(id).ok_or(DocumentError::Missing(id))?;
        if !node.attached {
            return Err(DocumentError::Detached(id));
        }
        node.style = style;
        node.mutations += 1;
        self.mutations += 1;
        Ok(())
    }

    pub fn set_anchor(&mut self, id: ElementId, anchor: impl Into<String>) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.anchor = Some(anchor.into());
        }
    }

    pub fn set_label(&mut self, id: ElementId, label: impl Into<String>) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.label = Some(label.into());
        }
    }

    pub fn label(&self, id: ElementId) -> Option<&str> {
        self.nodes.get(id).and_then(|n| n.label.as_deref())
    }

    /// Find an attached element by its anchor name
    pub fn find_anchor(&self, anchor: &str) -> Option<ElementId> {
        self.nodes
            .iter()
            .find(|(_, n)| n.attached && n.anchor.as_deref() == Some(anchor))
            .map(|(id, _)| id)
    }

    /// Detach an element and its subtree
    pub fn remove(&mut self, id: ElementId) {
        let Some(parent) = self.nodes.get(id).map(|n| n.parent) else {
            return;
        };
        if let Some(p) = parent.and_then(|p| self.nodes.get_mut(p)) {
            p.children.retain(|c| *c != id);
        }

        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.get_mut(current) {
                node.attached = false;
                stack.extend(node.children.iter().copied());
            }
        }
        tracing::trace!("Document: detached {:?}", id);
    }

    /// Free the slots of detached elements
    ///
    /// Returns the number of nodes released.
    pub fn collect_detached(&mut self) -> usize {
        let before = self.nodes.len();
        self.nodes.retain(|_, n| n.attached);
        before - self.nodes.len()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Scroll so the top of the viewport sits at `y`, clamped to the document
    pub fn set_scroll(&mut self, y: f32) {
        let max = (self.content_height() - self.viewport.height).max(0.0);
        self.viewport.scroll_y = y.clamp(0.0, max);
    }

    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        self.viewport.width = width;
        self.viewport.height = height;
        let y = self.viewport.scroll_y;
        self.set_scroll(y);
    }

    /// Bottom edge of the lowest attached element
    pub fn content_height(&self) -> f32 {
        self.nodes
            .values()
            .filter(|n| n.attached)
            .map(|n| n.bounds.bottom())
            .fold(0.0, f32::max)
    }

    /// Total number of style writes since creation
    pub fn mutation_count(&self) -> u64 {
        self.mutations
    }

    /// Number of nodes in the arena, attached or not
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
