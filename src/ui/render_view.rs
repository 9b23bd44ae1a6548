//! Perspective render view: a live wireframe / point view of the shared mesh
//! under an orbiting camera.

use std::collections::BTreeSet;

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};
use glam::{Mat4, Vec3, Vec4};
use log::debug;

use crate::document::Document;
use crate::editor::Editor;
use crate::map::VertexId;
use crate::ui::ViewOptions;

/// Ground grid half width, in world units.
const GROUND_HALF_EXTENT: i32 = 10;

/// Unit-spaced lines on the y = 0 plane covering `[-half, half]` along both
/// X and Z.
fn ground_grid(half: i32) -> Vec<(Vec3, Vec3)> {
    let h = half as f32;
    (-half..=half)
        .flat_map(|k| {
            let k = k as f32;
            [
                (Vec3::new(k, 0.0, -h), Vec3::new(k, 0.0, h)),
                (Vec3::new(-h, 0.0, k), Vec3::new(h, 0.0, k)),
            ]
        })
        .collect()
}

/// Arc-ball camera orbiting `target`.
#[derive(Debug, Clone)]
pub struct ArcBallCamera {
    /// Horizontal rotation angle (radians)
    pub yaw: f32,
    /// Vertical rotation angle (radians)
    pub pitch: f32,
    /// Distance from target
    pub distance: f32,
    pub target: Vec3,
    /// Vertical field of view (radians)
    pub fov: f32,
}

impl Default for ArcBallCamera {
    fn default() -> Self {
        Self {
            yaw: 0.6,
            pitch: 0.4,
            distance: 8.0,
            target: Vec3::ZERO,
            fov: 45.0_f32.to_radians(),
        }
    }
}

impl ArcBallCamera {
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw += dx.to_radians();
        self.pitch = (self.pitch + dy.to_radians()).clamp(-1.5, 1.5);
    }

    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance * (1.0 - delta)).clamp(0.5, 200.0);
    }

    /// Camera position in world space
    pub fn eye_position(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + self.distance * Vec3::new(cp * sy, sp, cp * cy)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye_position(), self.target, Vec3::Y);
        let projection = Mat4::perspective_rh_gl(self.fov, aspect, 0.1, 500.0);
        projection * view
    }

    /// Projects a world point into `rect`; `None` when it is behind the camera.
    pub fn project(&self, point: Vec3, rect: Rect) -> Option<Pos2> {
        let aspect = rect.width() / rect.height().max(1.0);
        let clip = self.view_projection(aspect) * Vec4::new(point.x, point.y, point.z, 1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Pos2::new(
            rect.center().x + ndc.x * rect.width() * 0.5,
            rect.center().y - ndc.y * rect.height() * 0.5,
        ))
    }
}

/// Geometry the render view draws, derived from one document revision.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderScene {
    pub revision: u64,
    pub points: Vec<Vec3>,
    /// Unique undirected triangle edges, as pairs of point indices.
    pub edges: Vec<(u32, u32)>,
}

impl RenderScene {
    pub fn from_document(doc: &Document) -> Self {
        let edges: BTreeSet<(u32, u32)> = doc
            .indices()
            .chunks_exact(3)
            .flat_map(|t| [(t[0], t[1]), (t[1], t[2]), (t[2], t[0])])
            .map(|(a, b)| (a.min(b), a.max(b)))
            .filter(|(a, b)| a != b)
            .collect();

        Self {
            revision: doc.revision(),
            points: doc.vertices().to_vec(),
            edges: edges.into_iter().collect(),
        }
    }
}

#[derive(Default)]
pub struct RenderView {
    camera: ArcBallCamera,
    scene: Option<RenderScene>,
}

impl RenderView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the scene for the document's current revision, rebuilding it
    /// when the document has changed since the last frame.
    fn scene_for(&mut self, doc: &Document) -> &RenderScene {
        let stale = self
            .scene
            .as_ref()
            .map_or(true, |scene| scene.revision != doc.revision());
        if stale {
            debug!("Rebuilding render scene at revision {}", doc.revision());
            self.scene = Some(RenderScene::from_document(doc));
        }
        self.scene.get_or_insert_with(|| RenderScene::from_document(doc))
    }

    pub fn show(&mut self, ui: &mut egui::Ui, rect: Rect, editor: &Editor, options: &ViewOptions) {
        let response = ui.interact(rect, ui.id().with("render_view"), Sense::drag());
        if response.dragged() {
            let delta = response.drag_delta();
            self.camera.rotate(-delta.x * 0.5, delta.y * 0.5);
        }
        if response.hovered() {
            let scroll = ui.input().scroll_delta.y;
            if scroll.abs() > 0.0 {
                self.camera.zoom(scroll * 0.002);
            }
        }

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, Color32::from_rgb(10, 10, 14));

        let camera = self.camera.clone();
        let project = |p: Vec3| camera.project(p, rect);

        let grid_stroke = Stroke::new(1.0, Color32::from_gray(40));
        for (a, b) in ground_grid(GROUND_HALF_EXTENT) {
            if let (Some(pa), Some(pb)) = (project(a), project(b)) {
                painter.line_segment([pa, pb], grid_stroke);
            }
        }

        // Axis gizmo at the world origin.
        if let Some(o) = project(Vec3::ZERO) {
            for (dir, color) in [
                (Vec3::X, Color32::RED),
                (Vec3::Y, Color32::GREEN),
                (Vec3::Z, Color32::LIGHT_BLUE),
            ] {
                if let Some(tip) = project(dir) {
                    painter.line_segment([o, tip], Stroke::new(1.5, color));
                }
            }
        }

        let selection = editor.selection();
        let scene = self.scene_for(editor.document());

        if options.show_wireframe {
            let stroke = Stroke::new(1.0, Color32::from_rgb(150, 170, 200));
            for &(a, b) in &scene.edges {
                if let (Some(pa), Some(pb)) = (
                    project(scene.points[a as usize]),
                    project(scene.points[b as usize]),
                ) {
                    painter.line_segment([pa, pb], stroke);
                }
            }
        }

        if options.show_points {
            for (i, &p) in scene.points.iter().enumerate() {
                if let Some(sp) = project(p) {
                    let selected = selection.is_selected(VertexId(i));
                    let color = if selected { Color32::YELLOW } else { Color32::WHITE };
                    painter.circle_filled(sp, 2.5, color);
                }
            }
        }

        painter.text(
            rect.left_top() + Vec2::new(8.0, 6.0),
            Align2::LEFT_TOP,
            "Render",
            FontId::proportional(14.0),
            Color32::GRAY,
        );
        painter.rect_stroke(rect, 0.0, Stroke::new(1.0, Color32::from_gray(60)));
    }
}
