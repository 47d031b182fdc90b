//! OBJ/MTL scene files.
//!
//! Geometry and materials are read with `tobj` (polygons triangulated,
//! negative indices resolved). Two extensions that `tobj` skips are picked
//! up by a separate line scan:
//!
//! - `S x y z r` - a sphere using the current material
//! - `P x y z r g b` - a point light with the given intensity
//!
//! MTL: `Ka`, `Kd`, `Ks`, `Ns`, `Ni` as usual, plus `Ke` (base intensity)
//! and `al d r t` (diffuse, reflective and refractive weights).

mod extensions;
mod loader;
mod mtl;

pub use extensions::{scan_extensions, ObjExtensions, ObjSphere, ParseError, ParseResult};
pub use loader::{load_scene, load_scene_from_str, LoadError, LoadResult};
