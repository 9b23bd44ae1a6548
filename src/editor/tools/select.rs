// src/editor/tools/select.rs

use std::collections::BTreeSet;

use egui::Pos2;
use log::debug;

use crate::document::Document;
use crate::map::{Axis, VertexId};

/// A box in edit-view pixels, kept normalized so that `x1 <= x2` and `y1 <= y2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionRect {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl SelectionRect {
    /// The zero-area rectangle created by a press.
    pub fn from_point(p: Pos2) -> Self {
        Self {
            x1: p.x,
            y1: p.y,
            x2: p.x,
            y2: p.y,
        }
    }

    /// Grows the rectangle to the bounding box of itself and `p`.
    pub fn include(&mut self, p: Pos2) {
        self.x1 = self.x1.min(p.x);
        self.y1 = self.y1.min(p.y);
        self.x2 = self.x2.max(p.x);
        self.y2 = self.y2.max(p.y);
    }

    /// Half-open membership: a point on the leading edges (`x1` or `y1`) is
    /// outside, a point on the trailing edges (`x2` or `y2`) is inside.
    pub fn contains(&self, p: Pos2) -> bool {
        self.x1 < p.x && p.x <= self.x2 && self.y1 < p.y && p.y <= self.y2
    }

    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    /// The rectangle in absolute screen coordinates for a view whose origin
    /// sits at `origin`.
    pub fn to_screen_rect(&self, origin: Pos2) -> egui::Rect {
        egui::Rect::from_min_max(
            origin + egui::vec2(self.x1, self.y1),
            origin + egui::vec2(self.x2, self.y2),
        )
    }
}

/// Where a view's rubber band is in its press / drag / release cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
    /// Released; the rectangle stays up and keeps selecting.
    Held,
}

#[derive(Debug, Clone, Copy, Default)]
struct AxisBand {
    state: DragState,
    rect: Option<SelectionRect>,
}

/// Rubber-band vertex selection across the three edit views.
///
/// Each view owns one rectangle; the set of selected vertices is shared by all
/// of them. Rectangles only ever add to the set, so a vertex picked up in one
/// view stays selected while another view drags its own rectangle. Only
/// [`SelectTool::clear`] removes members.
#[derive(Debug, Default)]
pub struct SelectTool {
    bands: [AxisBand; 3],
    selected: BTreeSet<VertexId>,
}

fn slot(axis: Axis) -> usize {
    match axis {
        Axis::X => 0,
        Axis::Y => 1,
        Axis::Z => 2,
    }
}

impl SelectTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Primary button went down at `p` in the view looking along `axis`.
    /// Restarts that view's rectangle; the other views are untouched.
    pub fn press(&mut self, axis: Axis, p: Pos2) {
        self.bands[slot(axis)] = AxisBand {
            state: DragState::Dragging,
            rect: Some(SelectionRect::from_point(p)),
        };
    }

    /// Pointer moved to `p` while the primary button is held.
    pub fn drag(&mut self, axis: Axis, p: Pos2) {
        let band = &mut self.bands[slot(axis)];
        if band.state != DragState::Dragging {
            return;
        }
        if let Some(rect) = band.rect.as_mut() {
            rect.include(p);
            debug!("{} selection rect now {:?}", axis.label(), rect);
        }
    }

    pub fn release(&mut self, axis: Axis) {
        let band = &mut self.bands[slot(axis)];
        if band.state == DragState::Dragging {
            band.state = DragState::Held;
        }
    }

    pub fn state(&self, axis: Axis) -> DragState {
        self.bands[slot(axis)].state
    }

    pub fn rect(&self, axis: Axis) -> Option<SelectionRect> {
        self.bands[slot(axis)].rect
    }

    /// Adds every vertex whose projection lies inside `axis`'s rectangle to
    /// the selection. Returns how many vertices were newly added.
    pub fn refresh(&mut self, axis: Axis, doc: &Document, cell_size: f32) -> usize {
        let rect = match self.rect(axis) {
            Some(rect) => rect,
            None => return 0,
        };

        let before = self.selected.len();
        for (id, pos) in doc.iter() {
            if rect.contains(axis.to_screen(pos, cell_size)) {
                self.selected.insert(id);
            }
        }
        self.selected.len() - before
    }

    /// Drops every rectangle and empties the selection.
    pub fn clear(&mut self) {
        self.bands = Default::default();
        self.selected.clear();
    }

    /// Keeps only the selected vertices for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(VertexId) -> bool) {
        self.selected.retain(|&id| keep(id));
    }

    pub fn is_selected(&self, id: VertexId) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.selected.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;
    use glam::Vec3;

    const CELL: f32 = 40.0;

    fn doc_with(points: &[Vec3]) -> Document {
        let mut doc = Document::new();
        doc.append(points, &[]).unwrap();
        doc
    }

    #[test]
    fn test_rect_renormalizes_past_anchor() {
        let mut rect = SelectionRect::from_point(pos2(10.0, 10.0));
        rect.include(pos2(30.0, 25.0));
        rect.include(pos2(-5.0, 40.0));
        assert_eq!(
            rect,
            SelectionRect { x1: -5.0, y1: 10.0, x2: 30.0, y2: 40.0 }
        );
    }

    #[test]
    fn test_rect_keeps_every_visited_point() {
        // Dragging back towards the press point does not shrink the box.
        let mut rect = SelectionRect::from_point(pos2(0.0, 0.0));
        rect.include(pos2(50.0, 50.0));
        rect.include(pos2(10.0, 10.0));
        assert_eq!(rect.width(), 50.0);
        assert_eq!(rect.height(), 50.0);
    }

    #[test]
    fn test_membership_tie_break() {
        let rect = SelectionRect { x1: 0.0, y1: 0.0, x2: 40.0, y2: 40.0 };
        assert!(!rect.contains(pos2(0.0, 0.0)));
        assert!(rect.contains(pos2(40.0, 40.0)));
        assert!(!rect.contains(pos2(0.0, 20.0)));
        assert!(!rect.contains(pos2(20.0, 0.0)));
        assert!(rect.contains(pos2(20.0, 40.0)));
    }

    #[test]
    fn test_projected_corner_vertices_follow_tie_break() {
        // Front view: (0, 0, 0) lands on (x1, y1), (1, -1, 0) on (x2, y2).
        let doc = doc_with(&[Vec3::ZERO, Vec3::new(1.0, -1.0, 0.0)]);
        let mut tool = SelectTool::new();
        tool.press(Axis::Z, pos2(0.0, 0.0));
        tool.drag(Axis::Z, pos2(40.0, 40.0));
        assert_eq!(tool.refresh(Axis::Z, &doc, CELL), 1);
        assert!(!tool.is_selected(VertexId(0)));
        assert!(tool.is_selected(VertexId(1)));

        // Top view projects (x, z); depth y plays no part.
        let doc = doc_with(&[Vec3::new(0.0, 5.0, 0.0), Vec3::new(1.0, -3.0, 1.0)]);
        let mut tool = SelectTool::new();
        tool.press(Axis::Y, pos2(0.0, 0.0));
        tool.drag(Axis::Y, pos2(40.0, 40.0));
        assert_eq!(tool.refresh(Axis::Y, &doc, CELL), 1);
        assert!(!tool.is_selected(VertexId(0)));
        assert!(tool.is_selected(VertexId(1)));
    }

    #[test]
    fn test_zero_area_rect_matches_nothing() {
        let doc = doc_with(&[Vec3::ZERO]);
        let mut tool = SelectTool::new();
        tool.press(Axis::Z, pos2(0.0, 0.0));
        tool.release(Axis::Z);
        assert_eq!(tool.refresh(Axis::Z, &doc, CELL), 0);
        assert!(tool.is_empty());
    }

    #[test]
    fn test_state_machine() {
        let mut tool = SelectTool::new();
        assert_eq!(tool.state(Axis::Y), DragState::Idle);
        tool.drag(Axis::Y, pos2(5.0, 5.0));
        assert_eq!(tool.rect(Axis::Y), None);

        tool.press(Axis::Y, pos2(0.0, 0.0));
        assert_eq!(tool.state(Axis::Y), DragState::Dragging);
        tool.drag(Axis::Y, pos2(5.0, 5.0));
        tool.release(Axis::Y);
        assert_eq!(tool.state(Axis::Y), DragState::Held);

        // Moves after release do not grow the held rectangle.
        tool.drag(Axis::Y, pos2(100.0, 100.0));
        assert_eq!(tool.rect(Axis::Y).unwrap().x2, 5.0);

        tool.press(Axis::Y, pos2(7.0, 7.0));
        assert_eq!(tool.rect(Axis::Y), Some(SelectionRect::from_point(pos2(7.0, 7.0))));

        tool.clear();
        assert_eq!(tool.state(Axis::Y), DragState::Idle);
        assert_eq!(tool.rect(Axis::Y), None);
    }

    #[test]
    fn test_selection_is_additive_across_views() {
        let doc = doc_with(&[Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 3.0)]);
        let mut tool = SelectTool::new();

        // Front view: (1, 0, 0) projects to (40, 0).
        tool.press(Axis::Z, pos2(20.0, -20.0));
        tool.drag(Axis::Z, pos2(60.0, 20.0));
        tool.release(Axis::Z);
        assert_eq!(tool.refresh(Axis::Z, &doc, CELL), 1);

        // Top view: (0, 0, 3) projects to (0, 120); this box misses (1, 0, 0).
        tool.press(Axis::Y, pos2(-20.0, 100.0));
        tool.drag(Axis::Y, pos2(20.0, 140.0));
        assert_eq!(tool.refresh(Axis::Y, &doc, CELL), 1);

        assert_eq!(tool.len(), 2);
        assert!(tool.is_selected(VertexId(0)));
        assert!(tool.is_selected(VertexId(1)));

        // A new press elsewhere in the front view keeps both.
        tool.press(Axis::Z, pos2(500.0, 500.0));
        tool.refresh(Axis::Z, &doc, CELL);
        assert_eq!(tool.len(), 2);
    }

    #[test]
    fn test_coincident_vertices_are_both_selected() {
        let doc = doc_with(&[Vec3::ONE, Vec3::ONE]);
        let mut tool = SelectTool::new();
        tool.press(Axis::Z, pos2(0.0, -80.0));
        tool.drag(Axis::Z, pos2(80.0, 0.0));
        assert_eq!(tool.refresh(Axis::Z, &doc, CELL), 2);
    }

    #[test]
    fn test_retain_purges() {
        let doc = doc_with(&[Vec3::ZERO, Vec3::ZERO]);
        let mut tool = SelectTool::new();
        tool.press(Axis::Z, pos2(-10.0, -10.0));
        tool.drag(Axis::Z, pos2(10.0, 10.0));
        tool.refresh(Axis::Z, &doc, CELL);
        tool.retain(|id| id.index() < 1);
        assert_eq!(tool.selected().collect::<Vec<_>>(), vec![VertexId(0)]);
    }
}
