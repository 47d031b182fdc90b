//! Glint Core - scene model and OBJ/MTL scene loading.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Material`, `Light`, `SphereObject`, `TriangleObject`
//! - **Loading**: OBJ files with MTL materials plus the sphere (`S`) and
//!   point light (`P`) extensions
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene;
//!
//! let scene = load_scene("box/cornell.obj")?;
//! println!("Loaded {} triangles, {} spheres, {} lights",
//!     scene.triangles().len(),
//!     scene.spheres().len(),
//!     scene.lights().len());
//! ```

pub mod material;
pub mod object;
pub mod obj;
pub mod scene;

// Re-export commonly used types
pub use material::{Albedo, Color, Material};
pub use obj::{load_scene, load_scene_from_str, LoadError, LoadResult, ParseError};
pub use object::{SphereObject, TriangleObject};
pub use scene::{Light, Scene, SceneError, SceneResult};
