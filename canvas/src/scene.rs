//! Scene model: meshes, their geometry, and the in-memory store.
//!
//! This module defines what is in the world (`Mesh`, `MeshKind`), the
//! triangle geometry each mesh carries (`Geometry`), the single hemispheric
//! light, and the store that owns all live meshes (`Scene`).
//!
//! Meshes enter the store from three places: stage setup (the ground), shape
//! authoring (extruded solids), and the remote mirror (player boxes and shapes
//! created by other clients). The renderer reads meshes in insertion order.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::collections::HashMap;

use uuid::Uuid;

use crate::consts::GROUND_SIZE;
use crate::math::Vec3;

/// Unique identifier for a mesh.
pub type MeshId = Uuid;

/// What a mesh represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshKind {
    /// The pickable ground plane.
    Ground,
    /// Unit box standing in for a player.
    Box,
    /// Solid produced by extruding an authored polyline.
    Extruded,
}

/// Indexed triangle geometry in mesh-local coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    pub vertices: Vec<Vec3>,
    /// Triangles as indices into `vertices`.
    pub triangles: Vec<[usize; 3]>,
}

impl Geometry {
    /// Flat rectangle on the XZ plane, centered on the origin.
    #[must_use]
    pub fn ground(width: f64, depth: f64) -> Self {
        let (hw, hd) = (width * 0.5, depth * 0.5);
        Self {
            vertices: vec![
                Vec3::new(-hw, 0.0, -hd),
                Vec3::new(hw, 0.0, -hd),
                Vec3::new(hw, 0.0, hd),
                Vec3::new(-hw, 0.0, hd),
            ],
            triangles: vec![[0, 1, 2], [0, 2, 3]],
        }
    }

    /// Axis-aligned cube of edge `size`, centered on the origin.
    #[must_use]
    pub fn cube(size: f64) -> Self {
        let h = size * 0.5;
        let vertices = (0..8)
            .map(|i| {
                Vec3::new(
                    if i & 1 == 0 { -h } else { h },
                    if i & 2 == 0 { -h } else { h },
                    if i & 4 == 0 { -h } else { h },
                )
            })
            .collect();
        let faces: [[usize; 4]; 6] = [
            [0, 1, 3, 2], // -z
            [4, 6, 7, 5], // +z
            [0, 4, 5, 1], // -y
            [2, 3, 7, 6], // +y
            [0, 2, 6, 4], // -x
            [1, 5, 7, 3], // +x
        ];
        let triangles = faces
            .iter()
            .flat_map(|&[a, b, c, d]| [[a, b, c], [a, c, d]])
            .collect();
        Self { vertices, triangles }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Local-space bounds as `(min, max)`, or `None` for an empty geometry.
    #[must_use]
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.vertices.first()?;
        Some(self.vertices.iter().fold((first, first), |(lo, hi), v| {
            (
                Vec3::new(lo.x.min(v.x), lo.y.min(v.y), lo.z.min(v.z)),
                Vec3::new(hi.x.max(v.x), hi.y.max(v.y), hi.z.max(v.z)),
            )
        }))
    }
}

/// A renderable object in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub id: MeshId,
    pub name: String,
    pub kind: MeshKind,
    pub geometry: Geometry,
    pub position: Vec3,
    /// Euler angles in radians, applied as described by [`Vec3::rotate_euler`].
    pub rotation: Vec3,
    /// Whether pointer picks may hit this mesh.
    pub pickable: bool,
}

impl Mesh {
    /// A new mesh at the origin with a fresh id.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: MeshKind, geometry: Geometry) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            geometry,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            pickable: false,
        }
    }

    #[must_use]
    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn pickable(mut self) -> Self {
        self.pickable = true;
        self
    }

    /// Map a mesh-local point into world space.
    #[must_use]
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        local.rotate_euler(self.rotation) + self.position
    }
}

/// The scene's one light: sky above, ground below.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HemisphericLight {
    /// Direction toward the sky color (normalized).
    pub direction: Vec3,
    pub intensity: f64,
}

impl Default for HemisphericLight {
    fn default() -> Self {
        Self { direction: Vec3::new(1.0, 1.0, 0.0).normalize(), intensity: 1.0 }
    }
}

impl HemisphericLight {
    /// Brightness in `[0, intensity]` for a surface with unit normal `normal`.
    #[must_use]
    pub fn shade(&self, normal: Vec3) -> f64 {
        (0.5 + 0.5 * normal.dot(self.direction)) * self.intensity
    }
}

/// In-memory store of meshes.
pub struct Scene {
    meshes: HashMap<MeshId, Mesh>,
    order: Vec<MeshId>,
    light: HemisphericLight,
}

impl Scene {
    /// Create an empty scene with the default light.
    #[must_use]
    pub fn new() -> Self {
        Self { meshes: HashMap::new(), order: Vec::new(), light: HemisphericLight::default() }
    }

    /// The standard stage: one pickable ground plane named `ground`.
    #[must_use]
    pub fn stage() -> Self {
        let mut scene = Self::new();
        scene.insert(Mesh::new("ground", MeshKind::Ground, Geometry::ground(GROUND_SIZE, GROUND_SIZE)).pickable());
        scene
    }

    /// Insert or replace a mesh, returning its id. Replacing keeps the
    /// original draw position.
    pub fn insert(&mut self, mesh: Mesh) -> MeshId {
        let id = mesh.id;
        if self.meshes.insert(id, mesh).is_none() {
            self.order.push(id);
        }
        id
    }

    /// Remove a mesh by id, returning it if it was present.
    pub fn remove(&mut self, id: &MeshId) -> Option<Mesh> {
        let mesh = self.meshes.remove(id)?;
        self.order.retain(|m| m != id);
        Some(mesh)
    }

    #[must_use]
    pub fn get(&self, id: &MeshId) -> Option<&Mesh> {
        self.meshes.get(id)
    }

    pub fn get_mut(&mut self, id: &MeshId) -> Option<&mut Mesh> {
        self.meshes.get_mut(id)
    }

    /// First mesh (in draw order) with the given name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Mesh> {
        self.meshes().find(|m| m.name == name)
    }

    /// All meshes in insertion (draw) order.
    pub fn meshes(&self) -> impl Iterator<Item = &Mesh> {
        self.order.iter().filter_map(|id| self.meshes.get(id))
    }

    #[must_use]
    pub fn light(&self) -> HemisphericLight {
        self.light
    }

    /// Number of meshes currently in the scene.
    #[must_use]
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// Returns `true` if the scene holds no meshes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
