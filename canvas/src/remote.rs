//! Local proxies for entities whose authoritative state lives in the room.
//!
//! Every player and every shape created by another client gets one
//! [`RemoteEntity`] keyed by its server-assigned identifier. The room session
//! is the only writer: additions create the proxy mesh, pose messages move it
//! in place, removals release it. Keys are unique, so a repeated addition
//! refreshes the existing proxy rather than creating a second mesh.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use std::collections::HashMap;

use protocol::messages::{CreateShape, PlayerRecord};

use crate::consts::PLAYER_BOX_SIZE;
use crate::extrude::extrude_polyline;
use crate::math::Vec3;
use crate::scene::{Geometry, Mesh, MeshId, MeshKind, Scene};

/// What a remote entity stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Shape,
}

/// A room-owned entity and the mesh that represents it locally.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteEntity {
    pub mesh: MeshId,
    pub kind: EntityKind,
    /// Last position the room reported.
    pub position: Vec3,
    pub rotation: Vec3,
}

/// Key to entity map mirroring the room's replicated state.
#[derive(Debug, Default)]
pub struct RemoteEntities {
    entities: HashMap<String, RemoteEntity>,
}

impl RemoteEntities {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Materialize a player box at the reported position.
    ///
    /// A key that is already mirrored only has its position refreshed.
    pub fn add_player(&mut self, scene: &mut Scene, record: &PlayerRecord) -> MeshId {
        let position = Vec3::from_array(record.position());
        if let Some(mesh) = self.refresh(scene, &record.key, position, None) {
            return mesh;
        }
        let mesh = Mesh::new(format!("player_{}", record.key), MeshKind::Box, Geometry::cube(PLAYER_BOX_SIZE)).at(position);
        let id = scene.insert(mesh);
        self.entities.insert(
            record.key.clone(),
            RemoteEntity { mesh: id, kind: EntityKind::Player, position, rotation: Vec3::ZERO },
        );
        id
    }

    /// Materialize a shape another client authored.
    ///
    /// A key that is already mirrored only has its pose refreshed.
    pub fn add_shape(&mut self, scene: &mut Scene, shape: &CreateShape) -> MeshId {
        let position = Vec3::from_array(shape.position);
        let rotation = Vec3::from_array(shape.rotation);
        if let Some(mesh) = self.refresh(scene, &shape.shape_id, position, Some(rotation)) {
            return mesh;
        }
        let points = shape.points.iter().copied().map(Vec3::from_array).collect();
        let mut mesh = Mesh::new(format!("shape_{}", shape.shape_id), MeshKind::Extruded, extrude_polyline(points)).at(position);
        mesh.rotation = rotation;
        let id = scene.insert(mesh);
        self.entities.insert(
            shape.shape_id.clone(),
            RemoteEntity { mesh: id, kind: EntityKind::Shape, position, rotation },
        );
        id
    }

    /// Overwrite the pose of a mirrored entity in place.
    ///
    /// Returns `false`, changing nothing, for a key that is not mirrored.
    pub fn apply_move(&mut self, scene: &mut Scene, key: &str, position: Vec3, rotation: Vec3) -> bool {
        self.refresh(scene, key, position, Some(rotation)).is_some()
    }

    /// Forget an entity and release its mesh.
    pub fn remove(&mut self, scene: &mut Scene, key: &str) -> Option<RemoteEntity> {
        let entity = self.entities.remove(key)?;
        scene.remove(&entity.mesh);
        Some(entity)
    }

    /// Release every mirrored entity, e.g. after the session ended.
    pub fn clear(&mut self, scene: &mut Scene) {
        for (_, entity) in self.entities.drain() {
            scene.remove(&entity.mesh);
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&RemoteEntity> {
        self.entities.get(key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entities.contains_key(key)
    }

    /// Mirrored keys of one kind, in no particular order.
    pub fn keys(&self, kind: EntityKind) -> impl Iterator<Item = &str> {
        self.entities
            .iter()
            .filter(move |(_, e)| e.kind == kind)
            .map(|(k, _)| k.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    fn refresh(&mut self, scene: &mut Scene, key: &str, position: Vec3, rotation: Option<Vec3>) -> Option<MeshId> {
        let entity = self.entities.get_mut(key)?;
        entity.position = position;
        if let Some(rotation) = rotation {
            entity.rotation = rotation;
        }
        if let Some(mesh) = scene.get_mut(&entity.mesh) {
            mesh.position = entity.position;
            mesh.rotation = entity.rotation;
        }
        Some(entity.mesh)
    }
}
