//! Block layout
//!
//! Every view is a vertical stack: blocks are placed top to bottom inside
//! their container, containers grow to fit their children, and sections stack
//! in page order. Positions are in page coordinates.

use folio_core::{Document, ElementId, Rect};

/// Horizontal inset of section content
pub const SECTION_PADDING: f32 = 24.0;

/// Vertical space between blocks
pub const GAP: f32 = 16.0;

/// A vertical stack being filled inside one container element
pub struct Column<'a> {
    doc: &'a mut Document,
    parent: ElementId,
    x: f32,
    width: f32,
    top: f32,
    cursor: f32,
    gap: f32,
}

impl<'a> Column<'a> {
    /// Stack children inside `parent`, starting at its top edge
    pub fn new(doc: &'a mut Document, parent: ElementId, padding: f32) -> Self {
        let bounds = doc.bounds(parent).unwrap_or_default();
        Self {
            doc,
            parent,
            x: bounds.x() + padding,
            width: (bounds.width() - padding * 2.0).max(0.0),
            top: bounds.y(),
            cursor: bounds.y() + padding,
            gap: GAP,
        }
    }

    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    pub fn parent(&self) -> ElementId {
        self.parent
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Children of an element placed so far
    pub fn children(&self, id: ElementId) -> Vec<ElementId> {
        self.doc.children(id)
    }

    /// Append a block of `height`
    pub fn block(&mut self, height: f32, label: impl Into<String>) -> ElementId {
        let id = self.doc.create_element(
            Some(self.parent),
            Rect::new(self.x, self.cursor, self.width, height),
        );
        self.doc.set_label(id, label);
        self.cursor += height + self.gap;
        id
    }

    /// Append a text block sized from its length
    pub fn text(&mut self, text: &str) -> ElementId {
        let height = text_height(text, self.width);
        self.block(height, text)
    }

    /// Append a container and fill it with `build`
    ///
    /// The container's height becomes whatever its children used.
    pub fn container<F>(&mut self, label: impl Into<String>, padding: f32, build: F) -> ElementId
    where
        F: FnOnce(&mut Column<'_>),
    {
        let id = self.doc.create_element(
            Some(self.parent),
            Rect::new(self.x, self.cursor, self.width, 0.0),
        );
        self.doc.set_label(id, label);

        let height = {
            let mut inner = Column::new(&mut *self.doc, id, padding);
            build(&mut inner);
            inner.finish() + padding
        };
        let bounds = Rect::new(self.x, self.cursor, self.width, height);
        // Just created under an attached parent
        let _ = self.doc.set_bounds(id, bounds);

        self.cursor += height + self.gap;
        id
    }

    /// Append a grid container; returns it and its cells in order
    pub fn grid<I, S>(
        &mut self,
        label: impl Into<String>,
        columns: usize,
        cell_height: f32,
        cells: I,
    ) -> (ElementId, Vec<ElementId>)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns = columns.max(1);
        let cell_width = (self.width - self.gap * (columns - 1) as f32) / columns as f32;
        let top = self.cursor;
        let grid = self
            .doc
            .create_element(Some(self.parent), Rect::new(self.x, top, self.width, 0.0));
        self.doc.set_label(grid, label);

        let mut ids = Vec::new();
        for (index, cell) in cells.into_iter().enumerate() {
            let row = (index / columns) as f32;
            let col = (index % columns) as f32;
            let id = self.doc.create_element(
                Some(grid),
                Rect::new(
                    self.x + col * (cell_width + self.gap),
                    top + row * (cell_height + self.gap),
                    cell_width,
                    cell_height,
                ),
            );
            self.doc.set_label(id, cell);
            ids.push(id);
        }

        let rows = ids.len().div_ceil(columns) as f32;
        let height = if ids.is_empty() {
            0.0
        } else {
            rows * cell_height + (rows - 1.0) * self.gap
        };
        let _ = self
            .doc
            .set_bounds(grid, Rect::new(self.x, top, self.width, height));

        self.cursor += height + self.gap;
        (grid, ids)
    }

    /// Place an element at an offset from the container's top-left without
    /// taking space in the stack
    pub fn overlay(&mut self, rect: Rect, label: impl Into<String>) -> ElementId {
        let id = self
            .doc
            .create_element(Some(self.parent), rect.offset(self.x, self.top));
        self.doc.set_label(id, label);
        id
    }

    pub fn space(&mut self, height: f32) {
        self.cursor += height;
    }

    /// Height used so far, measured from the container's top edge
    pub fn height(&self) -> f32 {
        (self.cursor - self.gap - self.top).max(0.0)
    }

    pub fn finish(self) -> f32 {
        self.height()
    }
}

/// Create a full-width section at `top` and lay it out with `build`
///
/// The section grows to fit its content but is never shorter than
/// `min_height`. Returns the section and its final height.
pub fn section<F>(
    doc: &mut Document,
    parent: Option<ElementId>,
    top: f32,
    anchor: Option<&str>,
    min_height: f32,
    build: F,
) -> (ElementId, f32)
where
    F: FnOnce(&mut Column<'_>),
{
    let width = doc.viewport().width;
    let id = doc.create_element(parent, Rect::new(0.0, top, width, min_height));
    if let Some(anchor) = anchor {
        doc.set_anchor(id, anchor);
        doc.set_label(id, format!("#{anchor}"));
    }

    let used = {
        let mut column = Column::new(doc, id, SECTION_PADDING);
        build(&mut column);
        column.finish() + SECTION_PADDING
    };
    let height = used.max(min_height);
    let _ = doc.set_bounds(id, Rect::new(0.0, top, width, height));
    (id, height)
}

/// Rough height of wrapped text at 16px per line
pub fn text_height(text: &str, width: f32) -> f32 {
    const CHAR_WIDTH: f32 = 8.0;
    const LINE_HEIGHT: f32 = 24.0;
    let per_line = (width / CHAR_WIDTH).floor().max(1.0);
    let lines = (text.chars().count() as f32 / per_line).ceil().max(1.0);
    lines * LINE_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_stack_with_gap() {
        let mut doc = Document::new(800.0, 600.0);
        let (section, height) = section(&mut doc, None, 100.0, Some("about"), 0.0, |col| {
            col.block(50.0, "a");
            col.block(30.0, "b");
        });

        let children = doc.children(section);
        assert_eq!(children.len(), 2);
        assert_eq!(doc.bounds(children[0]).unwrap().y(), 100.0 + SECTION_PADDING);
        assert_eq!(
            doc.bounds(children[1]).unwrap().y(),
            100.0 + SECTION_PADDING + 50.0 + GAP
        );
        assert_eq!(height, SECTION_PADDING * 2.0 + 50.0 + GAP + 30.0);
        assert_eq!(doc.find_anchor("about"), Some(section));
    }

    #[test]
    fn test_min_height() {
        let mut doc = Document::new(800.0, 600.0);
        let (_, height) = section(&mut doc, None, 0.0, None, 600.0, |col| {
            col.block(50.0, "title");
        });
        assert_eq!(height, 600.0);
    }

    #[test]
    fn test_grid_rows() {
        let mut doc = Document::new(800.0, 600.0);
        let (section, _) = section(&mut doc, None, 0.0, None, 0.0, |col| {
            let (grid, cells) = col.grid("skills", 3, 40.0, (0..7).map(|i| format!("skill {i}")));
            assert_eq!(cells.len(), 7);
            let bounds = col_bounds(col, grid);
            assert_eq!(bounds.height(), 3.0 * 40.0 + 2.0 * GAP);
        });
        assert_eq!(doc.children(section).len(), 1);
    }

    fn col_bounds(col: &Column<'_>, id: ElementId) -> Rect {
        col.doc.bounds(id).unwrap()
    }

    #[test]
    fn test_container_fits_children() {
        let mut doc = Document::new(800.0, 600.0);
        let (section, _) = section(&mut doc, None, 0.0, None, 0.0, |col| {
            col.container("card", 10.0, |inner| {
                inner.block(20.0, "role");
                inner.block(20.0, "company");
            });
        });
        let card = doc.children(section)[0];
        assert_eq!(doc.bounds(card).unwrap().height(), 10.0 + 20.0 + GAP + 20.0 + 10.0);
        assert_eq!(doc.children(card).len(), 2);
    }
}
