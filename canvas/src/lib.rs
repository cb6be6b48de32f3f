//! Scene host and shape authoring engine for the 3D sandbox.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! scene graph (ground, player boxes, extruded shapes), the orbit camera, ground
//! picking, the two-state drawing machine that turns picked points into an
//! extruded solid, and the mirror of remote players/shapes reported by the
//! room session. The host layer wires DOM events in, forwards the returned
//! [`engine::Action`]s to the room, and feeds session events back.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`scene`] | Mesh store, geometry and the hemispheric light |
//! | [`camera`] | Arc-rotate camera, projection and view rays |
//! | [`pick`] | Ray casting against the pickable ground |
//! | [`authoring`] | Idle/Drawing state machine for point collection |
//! | [`extrude`] | Polyline extrusion along the vertical path |
//! | [`remote`] | Local proxies for players and shapes owned by the room |
//! | [`input`] | Pointer types and the orbit gesture state |
//! | [`render`] | Canvas 2D rasterization of the projected scene |
//! | [`math`] | `Vec3` |
//! | [`consts`] | Shared numeric constants |

pub mod authoring;
pub mod camera;
pub mod consts;
pub mod engine;
pub mod extrude;
pub mod input;
pub mod math;
pub mod pick;
pub mod remote;
pub mod render;
pub mod scene;
