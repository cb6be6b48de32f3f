//! Rendering: draws the projected scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives read-only views of the scene, the camera and the in-progress
//! points and produces pixels. It does not mutate any application state.
//!
//! Triangles are projected through the orbit camera, shaded by the scene's
//! hemispheric light and painted back to front. The projection and sorting
//! live in [`project_scene`], which needs no browser and is unit tested.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::{OrbitCamera, Point, Viewport};
use crate::consts::POINT_MARKER_RADIUS_PX;
use crate::math::Vec3;
use crate::scene::{MeshKind, Scene};

const BACKGROUND: &str = "#1e1e24";
const POLYLINE_STROKE: &str = "#ffd166";
const POLYLINE_WIDTH_PX: f64 = 2.0;

/// Base RGB per mesh kind before shading.
fn base_color(kind: MeshKind) -> [f64; 3] {
    match kind {
        MeshKind::Ground => [90.0, 140.0, 90.0],
        MeshKind::Box => [70.0, 130.0, 220.0],
        MeshKind::Extruded => [230.0, 120.0, 80.0],
    }
}

/// One screen-space triangle ready to fill.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub corners: [Point; 3],
    /// Mean view depth; larger is farther.
    pub depth: f64,
    /// Shaded RGB in `[0, 255]`.
    pub rgb: [f64; 3],
}

impl Face {
    fn fill_style(&self) -> String {
        let [r, g, b] = self.rgb.map(|c| c.round().clamp(0.0, 255.0));
        format!("rgb({r}, {g}, {b})")
    }
}

/// Project every mesh triangle and return faces in paint order (far first).
///
/// Triangles with any corner behind the near plane are dropped. Normals are
/// flipped toward the eye so open extrusions shade the same from both sides.
#[must_use]
pub fn project_scene(scene: &Scene, camera: &OrbitCamera, viewport: Viewport) -> Vec<Face> {
    let eye = camera.eye();
    let light = scene.light();
    let mut faces = Vec::new();

    for mesh in scene.meshes() {
        let world: Vec<Vec3> = mesh.geometry.vertices.iter().map(|v| mesh.to_world(*v)).collect();
        let base = base_color(mesh.kind);
        for &[a, b, c] in &mesh.geometry.triangles {
            let (Some(&wa), Some(&wb), Some(&wc)) = (world.get(a), world.get(b), world.get(c)) else {
                continue;
            };
            let (Some(pa), Some(pb), Some(pc)) = (
                camera.project(wa, viewport),
                camera.project(wb, viewport),
                camera.project(wc, viewport),
            ) else {
                continue;
            };
            let mut normal = (wb - wa).cross(wc - wa).normalize();
            let centroid = (wa + wb + wc) * (1.0 / 3.0);
            if normal.dot(eye - centroid) < 0.0 {
                normal = -normal;
            }
            let shade = light.shade(normal);
            faces.push(Face {
                corners: [pa.screen, pb.screen, pc.screen],
                depth: (pa.depth + pb.depth + pc.depth) / 3.0,
                rgb: base.map(|c| c * shade),
            });
        }
    }

    faces.sort_by(|l, r| r.depth.total_cmp(&l.depth));
    faces
}

/// Draw the full frame: background, meshes, then the in-progress polyline.
///
/// `viewport` is in CSS pixels. `dpr` is the device pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    scene: &Scene,
    camera: &OrbitCamera,
    points: &[Vec3],
    viewport: Viewport,
    dpr: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, viewport.width, viewport.height);

    for face in project_scene(scene, camera, viewport) {
        draw_face(ctx, &face);
    }

    draw_polyline(ctx, camera, points, viewport)
}

fn draw_face(ctx: &CanvasRenderingContext2d, face: &Face) {
    let [a, b, c] = face.corners;
    let style = face.fill_style();
    ctx.begin_path();
    ctx.move_to(a.x, a.y);
    ctx.line_to(b.x, b.y);
    ctx.line_to(c.x, c.y);
    ctx.close_path();
    ctx.set_fill_style_str(&style);
    ctx.fill();
    // Hairline in the same color hides seams between adjacent triangles.
    ctx.set_stroke_style_str(&style);
    ctx.set_line_width(0.5);
    ctx.stroke();
}

fn draw_polyline(
    ctx: &CanvasRenderingContext2d,
    camera: &OrbitCamera,
    points: &[Vec3],
    viewport: Viewport,
) -> Result<(), JsValue> {
    let screen: Vec<Point> = points
        .iter()
        .filter_map(|p| camera.project(*p, viewport))
        .map(|p| p.screen)
        .collect();
    let Some((first, rest)) = screen.split_first() else {
        return Ok(());
    };

    ctx.set_stroke_style_str(POLYLINE_STROKE);
    ctx.set_fill_style_str(POLYLINE_STROKE);
    ctx.set_line_width(POLYLINE_WIDTH_PX);
    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for p in rest {
        ctx.line_to(p.x, p.y);
    }
    ctx.stroke();

    for p in &screen {
        ctx.begin_path();
        ctx.arc(p.x, p.y, POINT_MARKER_RADIUS_PX, 0.0, TAU)?;
        ctx.fill();
    }
    Ok(())
}
