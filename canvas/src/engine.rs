use std::collections::HashMap;

use protocol::messages::{CreateShape, MoveShape, PlayerMove, RoomMessage, UpdatePlayers};
use protocol::session::{Collection, SessionEvent};
use uuid::Uuid;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::authoring::{AuthoringError, ShapeAuthoring};
use crate::camera::{OrbitCamera, Point, Viewport};
use crate::consts::SHAPE_LIFT;
use crate::extrude::extrude_polyline;
use crate::input::{Button, InputState, Modifiers, WheelDelta};
use crate::math::Vec3;
use crate::pick::pick_ground;
use crate::remote::{EntityKind, RemoteEntities};
use crate::render;
use crate::scene::{Mesh, MeshId, MeshKind, Scene};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Where a finished solid is placed: just above the ground.
pub const SHAPE_PLACEMENT: Vec3 = Vec3::new(0.0, SHAPE_LIFT, 0.0);

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Send a pose to the room.
    Broadcast(PlayerMove),
    /// Announce a freshly authored shape to the room.
    ShapeCreated(CreateShape),
    /// Announce a shape reposition to the room.
    ShapeMoved(MoveShape),
    /// A ground point was added to the in-progress shape.
    PointRecorded(Vec3),
    RenderNeeded,
}

impl Action {
    /// The room message this action asks the host to send, if any.
    #[must_use]
    pub fn room_message(&self) -> Option<RoomMessage> {
        match self {
            Self::Broadcast(m) => Some(RoomMessage::PlayerMove(m.clone())),
            Self::ShapeCreated(m) => Some(RoomMessage::CreateShape(m.clone())),
            Self::ShapeMoved(m) => Some(RoomMessage::MoveShape(m.clone())),
            Self::PointRecorded(_) | Self::RenderNeeded => None,
        }
    }
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub scene: Scene,
    pub camera: OrbitCamera,
    pub authoring: ShapeAuthoring,
    pub remote: RemoteEntities,
    pub input: InputState,
    pub viewport: Viewport,
    pub dpr: f64,
    /// Shapes authored here, by shape id.
    local_shapes: HashMap<String, MeshId>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            scene: Scene::stage(),
            camera: OrbitCamera::default(),
            authoring: ShapeAuthoring::new(),
            remote: RemoteEntities::new(),
            input: InputState::default(),
            viewport: Viewport::default(),
            dpr: 1.0,
            local_shapes: HashMap::new(),
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Authoring ---

    /// Enter drawing mode with an empty point sequence.
    pub fn start_drawing(&mut self) -> Vec<Action> {
        self.authoring.start();
        vec![Action::RenderNeeded]
    }

    /// World-space ground point under a screen position, if the ground was hit.
    #[must_use]
    pub fn pick(&self, screen: Point) -> Option<Vec3> {
        let ray = self.camera.view_ray(screen, self.viewport)?;
        pick_ground(&self.scene, &ray).map(|hit| hit.point)
    }

    /// Append a picked point to the in-progress shape. No-op while idle.
    pub fn record_point(&mut self, point: Vec3) -> Vec<Action> {
        if self.authoring.record(point) {
            vec![Action::PointRecorded(point), Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Turn the recorded points into a solid, add it to the scene and
    /// announce it.
    ///
    /// # Errors
    ///
    /// Returns the [`AuthoringError`] from [`ShapeAuthoring::finalize`]; the
    /// scene and the recorded points are untouched in that case.
    pub fn finalize_shape(&mut self) -> Result<Vec<Action>, AuthoringError> {
        let points = self.authoring.finalize()?;
        let shape_id = Uuid::new_v4().to_string();
        let profile = points.iter().copied().map(Vec3::to_array).collect();

        let mesh = Mesh::new(format!("shape_{shape_id}"), MeshKind::Extruded, extrude_polyline(points)).at(SHAPE_PLACEMENT);
        let pose = PlayerMove {
            entity_id: shape_id.clone(),
            position: mesh.position.to_array(),
            rotation: mesh.rotation.to_array(),
        };
        let mesh_id = self.scene.insert(mesh);
        self.local_shapes.insert(shape_id.clone(), mesh_id);

        Ok(vec![
            Action::ShapeCreated(CreateShape {
                shape_id,
                points: profile,
                position: pose.position,
                rotation: pose.rotation,
            }),
            Action::Broadcast(pose),
            Action::RenderNeeded,
        ])
    }

    /// Reposition a shape and announce it. Shapes this engine does not know
    /// are still announced; the room decides what they refer to.
    pub fn move_shape(&mut self, shape_id: &str, position: Vec3, rotation: Vec3) -> Vec<Action> {
        self.apply_pose(shape_id, position, rotation);
        vec![
            Action::ShapeMoved(MoveShape {
                shape_id: shape_id.to_owned(),
                position: position.to_array(),
                rotation: rotation.to_array(),
            }),
            Action::RenderNeeded,
        ]
    }

    /// Current pose of a locally authored shape, ready to broadcast.
    #[must_use]
    pub fn local_pose(&self, shape_id: &str) -> Option<PlayerMove> {
        let mesh = self.scene.get(self.local_shapes.get(shape_id)?)?;
        Some(PlayerMove {
            entity_id: shape_id.to_owned(),
            position: mesh.position.to_array(),
            rotation: mesh.rotation.to_array(),
        })
    }

    /// Ids of shapes authored by this engine.
    pub fn local_shape_ids(&self) -> impl Iterator<Item = &str> {
        self.local_shapes.keys().map(String::as_str)
    }

    // --- Session ---

    /// Mirror one session event into the scene. Returns whether anything
    /// visible changed.
    pub fn apply_event(&mut self, event: &SessionEvent) -> bool {
        match event {
            SessionEvent::Joined { .. } => false,
            SessionEvent::RemoteAdded(record) => {
                self.remote.add_player(&mut self.scene, record);
                true
            }
            SessionEvent::ShapeAdded(shape) | SessionEvent::Message(RoomMessage::CreateShape(shape)) => {
                self.add_shape(shape)
            }
            SessionEvent::RemoteRemoved { collection, key } => self.remove_entity(*collection, key),
            SessionEvent::Message(RoomMessage::PlayerMove(m)) => {
                self.apply_pose(&m.entity_id, Vec3::from_array(m.position), Vec3::from_array(m.rotation))
            }
            SessionEvent::Message(RoomMessage::MoveShape(m)) => {
                self.apply_pose(&m.shape_id, Vec3::from_array(m.position), Vec3::from_array(m.rotation))
            }
            SessionEvent::Message(RoomMessage::UpdatePlayers(update)) => {
                self.reconcile_players(update);
                true
            }
            SessionEvent::Left => {
                self.remote.clear(&mut self.scene);
                true
            }
        }
    }

    /// Overwrite the pose of a remote entity or local shape. Unknown keys
    /// change nothing and return `false`.
    pub fn apply_pose(&mut self, key: &str, position: Vec3, rotation: Vec3) -> bool {
        if self.remote.apply_move(&mut self.scene, key, position, rotation) {
            return true;
        }
        let Some(mesh) = self.local_shapes.get(key).and_then(|id| self.scene.get_mut(id)) else {
            return false;
        };
        mesh.position = position;
        mesh.rotation = rotation;
        true
    }

    fn add_shape(&mut self, shape: &CreateShape) -> bool {
        if self.local_shapes.contains_key(&shape.shape_id) {
            return false;
        }
        self.remote.add_shape(&mut self.scene, shape);
        true
    }

    /// Remove `key` only if it belongs to `collection`; a player removal never
    /// touches a shape with the same key, and the reverse.
    fn remove_entity(&mut self, collection: Collection, key: &str) -> bool {
        let kind = match collection {
            Collection::Players => EntityKind::Player,
            Collection::Shapes => EntityKind::Shape,
        };
        if self.remote.get(key).is_some_and(|entity| entity.kind == kind) {
            return self.remote.remove(&mut self.scene, key).is_some();
        }
        if collection != Collection::Shapes {
            return false;
        }
        match self.local_shapes.remove(key) {
            Some(mesh) => self.scene.remove(&mesh).is_some(),
            None => false,
        }
    }

    /// Make the mirrored players match a full roster snapshot.
    fn reconcile_players(&mut self, update: &UpdatePlayers) {
        let stale: Vec<String> = self
            .remote
            .keys(EntityKind::Player)
            .filter(|key| !update.players.iter().any(|p| p.key == *key))
            .map(str::to_owned)
            .collect();
        for key in stale {
            self.remote.remove(&mut self.scene, &key);
        }
        for record in &update.players {
            self.remote.add_player(&mut self.scene, record);
        }
    }

    // --- Viewport ---

    /// Update viewport dimensions (CSS pixels) and device pixel ratio.
    pub fn set_viewport(&mut self, width: f64, height: f64, dpr: f64) {
        self.viewport = Viewport::new(width, height);
        self.dpr = dpr;
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen: Point, button: Button, _modifiers: Modifiers) -> Vec<Action> {
        if button == Button::Primary && self.authoring.is_drawing() {
            return match self.pick(screen) {
                Some(point) => self.record_point(point),
                None => Vec::new(),
            };
        }
        self.input = InputState::Orbiting { last_screen: screen };
        Vec::new()
    }

    pub fn on_pointer_move(&mut self, screen: Point, _modifiers: Modifiers) -> Vec<Action> {
        match self.input.drag_to(screen) {
            Some((dx, dy)) => {
                self.camera.orbit(dx, dy);
                vec![Action::RenderNeeded]
            }
            None => Vec::new(),
        }
    }

    pub fn on_pointer_up(&mut self, _screen: Point, _button: Button, _modifiers: Modifiers) -> Vec<Action> {
        self.input = InputState::Idle;
        Vec::new()
    }

    pub fn on_wheel(&mut self, _screen: Point, delta: WheelDelta, _modifiers: Modifiers) -> Vec<Action> {
        self.camera.zoom(delta.dy);
        vec![Action::RenderNeeded]
    }
}

/// The full engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas cannot provide a 2D context. The scene
    /// cannot be shown without one.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas 2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        Ok(Self { canvas, ctx, core: EngineCore::new() })
    }

    /// Resize the backing store to the container and update the viewport.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.canvas.set_width((width_css * dpr).round().max(0.0) as u32);
        self.canvas.set_height((height_css * dpr).round().max(0.0) as u32);
        self.core.set_viewport(width_css, height_css, dpr);
    }

    pub fn start_drawing(&mut self) -> Vec<Action> {
        self.core.start_drawing()
    }

    /// # Errors
    ///
    /// See [`EngineCore::finalize_shape`].
    pub fn finalize_shape(&mut self) -> Result<Vec<Action>, AuthoringError> {
        self.core.finalize_shape()
    }

    pub fn apply_event(&mut self, event: &SessionEvent) -> bool {
        self.core.apply_event(event)
    }

    pub fn on_pointer_down(&mut self, screen: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_down(screen, button, modifiers)
    }

    pub fn on_pointer_move(&mut self, screen: Point, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_move(screen, modifiers)
    }

    pub fn on_pointer_up(&mut self, screen: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_up(screen, button, modifiers)
    }

    pub fn on_wheel(&mut self, screen: Point, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_wheel(screen, delta, modifiers)
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        render::draw(
            &self.ctx,
            &self.core.scene,
            &self.core.camera,
            self.core.authoring.points(),
            self.core.viewport,
            self.core.dpr,
        )
    }
}
