//! High-level scene loading.
//!
//! Turns OBJ/MTL data into a validated [`Scene`]. Any malformed
//! material or geometry is rejected here, once, instead of surfacing as
//! NaNs in the middle of a render.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use glint_math::{DVec3, Sphere, Triangle};
use thiserror::Error;

use super::extensions::{scan_extensions, ObjExtensions, ParseError};
use super::mtl::convert_material;
use crate::material::Material;
use crate::object::{SphereObject, TriangleObject};
use crate::scene::{Scene, SceneError};

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed OBJ: {0}")]
    Obj(#[source] tobj::LoadError),

    #[error("Malformed MTL: {0}")]
    Mtl(#[source] tobj::LoadError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Invalid scene: {0}")]
    Scene(#[from] SceneError),

    #[error("Unknown material: {0}")]
    UnknownMaterial(String),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load an OBJ file (and the MTL libraries it names) into a scene.
///
/// `mtllib` paths are resolved relative to the OBJ file's directory.
///
/// # Example
///
/// ```ignore
/// use glint_core::load_scene;
///
/// let scene = load_scene("scenes/mirrors.obj")?;
/// println!("Loaded {} lights", scene.lights().len());
/// ```
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
    let path = path.as_ref();
    let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();

    let obj = read_to_string(path)?;
    load_scene_from_str(&obj, |lib| read_to_string(&base_dir.join(lib)))
}

/// Build a scene from OBJ text, fetching MTL libraries through `resolve_mtl`.
pub fn load_scene_from_str<F>(obj: &str, resolve_mtl: F) -> LoadResult<Scene>
where
    F: Fn(&str) -> LoadResult<String>,
{
    let extensions = scan_extensions(obj)?;

    let resolve_error = RefCell::new(None);
    let (models, materials) = tobj::load_obj_buf(&mut obj.as_bytes(), &load_options(), |path| {
        // One `mtllib` line may name several libraries
        let mut content = String::new();
        for lib in path.to_string_lossy().split_whitespace() {
            match resolve_mtl(lib) {
                Ok(text) => {
                    content.push_str(&text);
                    content.push('\n');
                }
                Err(err) => {
                    *resolve_error.borrow_mut() = Some(err);
                    return Err(tobj::LoadError::OpenFileFailed);
                }
            }
        }
        tobj::load_mtl_buf(&mut content.as_bytes())
    })
    .map_err(LoadError::Obj)?;

    if let Some(err) = resolve_error.into_inner() {
        return Err(err);
    }
    let materials = materials.map_err(LoadError::Mtl)?;

    let mut scene = Scene::new();
    let mut table = Vec::with_capacity(materials.len());
    let mut by_name: HashMap<String, Arc<Material>> = HashMap::new();
    for source in &materials {
        let material = scene.add_material(convert_material(source)?)?;
        if by_name
            .insert(material.name.clone(), Arc::clone(&material))
            .is_some()
        {
            log::warn!("Material '{}' redefined, later definition wins", material.name);
        }
        table.push(material);
    }

    if let Some((line, name)) = extensions
        .material_refs
        .iter()
        .find(|(_, name)| !by_name.contains_key(name))
    {
        log::debug!("usemtl at line {} names an undefined material", line);
        return Err(LoadError::UnknownMaterial(name.clone()));
    }

    let fallback = Arc::new(Material {
        name: "default".into(),
        ..Default::default()
    });
    add_meshes(&mut scene, &models, &table, &fallback)?;
    add_extensions(&mut scene, &extensions, &by_name, &fallback)?;

    log::info!(
        "Loaded scene: {} triangles, {} spheres, {} lights, {} materials",
        scene.triangles().len(),
        scene.spheres().len(),
        scene.lights().len(),
        scene.materials().len()
    );

    Ok(scene)
}

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        single_index: true,
        triangulate: true,
        ignore_points: true,
        ignore_lines: true,
        ..Default::default()
    }
}

fn add_meshes(
    scene: &mut Scene,
    models: &[tobj::Model],
    table: &[Arc<Material>],
    fallback: &Arc<Material>,
) -> LoadResult<()> {
    for model in models {
        let mesh = &model.mesh;
        let material = match mesh.material_id {
            Some(id) => table
                .get(id)
                .ok_or_else(|| LoadError::UnknownMaterial(format!("#{}", id)))?,
            None => fallback,
        };
        // Vertex normals only count when every vertex of the model has one
        let has_normals = !mesh.normals.is_empty() && mesh.normals.len() == mesh.positions.len();

        for face in mesh.indices.chunks_exact(3) {
            let corners = [face[0], face[1], face[2]];
            let [a, b, c] = corners.map(|i| vec3_at(&mesh.positions, i));
            let mut object = TriangleObject::new(Triangle::new(a, b, c), Arc::clone(material));
            if has_normals {
                object = object.with_normals(corners.map(|i| vec3_at(&mesh.normals, i)));
            }
            scene.add_triangle(object)?;
        }
    }
    Ok(())
}

fn add_extensions(
    scene: &mut Scene,
    extensions: &ObjExtensions,
    by_name: &HashMap<String, Arc<Material>>,
    fallback: &Arc<Material>,
) -> LoadResult<()> {
    for sphere in &extensions.spheres {
        let material = match &sphere.material {
            Some(name) => by_name
                .get(name)
                .ok_or_else(|| LoadError::UnknownMaterial(name.clone()))?,
            None => fallback,
        };
        scene.add_sphere(SphereObject::new(
            Sphere::new(sphere.center, sphere.radius),
            Arc::clone(material),
        ))?;
    }

    for light in &extensions.lights {
        scene.add_light(*light)?;
    }

    Ok(())
}

fn vec3_at(data: &[f64], index: u32) -> DVec3 {
    let i = 3 * index as usize;
    DVec3::new(data[i], data[i + 1], data[i + 2])
}

fn read_to_string(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MTL: &str = "\
newmtl mirror
Kd 0 0 0
al 0 1 0

newmtl red
Kd 1 0 0
";

    const OBJ: &str = "\
mtllib materials.mtl
v -1 -1 -2
v 1 -1 -2
v 1 1 -2
v -1 1 -2
vn 0 0 1
usemtl mirror
f 1//1 2//1 3//1 4//1
usemtl red
S 0 0 -5 1
P 0 4 0 1 1 1
";

    fn resolve(lib: &str) -> LoadResult<String> {
        assert_eq!(lib, "materials.mtl");
        Ok(MTL.to_string())
    }

    fn no_mtl(_: &str) -> LoadResult<String> {
        Ok(String::new())
    }

    #[test]
    fn test_load_scene_from_str() {
        let scene = load_scene_from_str(OBJ, resolve).unwrap();

        assert_eq!(scene.triangles().len(), 2);
        assert_eq!(scene.spheres().len(), 1);
        assert_eq!(scene.lights().len(), 1);
        assert_eq!(scene.materials().len(), 2);

        let quad = &scene.triangles()[0];
        assert_eq!(quad.material.name, "mirror");
        assert_eq!(quad.normals, Some([DVec3::Z; 3]));

        let sphere = &scene.spheres()[0];
        assert_eq!(sphere.material.name, "red");
        assert_eq!(sphere.sphere.center(), DVec3::new(0.0, 0.0, -5.0));
    }

    #[test]
    fn test_triangle_vertices() {
        let scene = load_scene_from_str("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n", no_mtl).unwrap();
        assert_eq!(scene.triangles().len(), 1);
        assert_eq!(
            *scene.triangles()[0].triangle.vertices(),
            [DVec3::ZERO, DVec3::X, DVec3::Y]
        );
        assert_eq!(scene.triangles()[0].normals, None);
    }

    #[test]
    fn test_pentagon_is_triangulated() {
        let obj = "v 0 0 0\nv 2 0 0\nv 3 1 0\nv 1 3 0\nv -1 1 0\nf 1 2 3 4 5\n";
        let scene = load_scene_from_str(obj, no_mtl).unwrap();
        assert_eq!(scene.triangles().len(), 3);
    }

    #[test]
    fn test_negative_indices() {
        let obj = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf -3 -2 -1\n";
        let scene = load_scene_from_str(obj, no_mtl).unwrap();
        assert_eq!(
            *scene.triangles()[0].triangle.vertices(),
            [DVec3::ZERO, DVec3::X, DVec3::Y]
        );
    }

    #[test]
    fn test_partial_normals_dropped() {
        let obj = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nf 1//1 2 3//1\n";
        let scene = load_scene_from_str(obj, no_mtl).unwrap();
        assert_eq!(scene.triangles()[0].normals, None);
    }

    #[test]
    fn test_several_libraries_on_one_line() {
        let obj = "mtllib a.mtl b.mtl\nusemtl red\nS 0 0 -3 1\nusemtl blue\nS 0 0 -6 1\n";
        let scene = load_scene_from_str(obj, |lib| match lib {
            "a.mtl" => Ok("newmtl red\nKd 1 0 0\n".to_string()),
            "b.mtl" => Ok("newmtl blue\nKd 0 0 1\n".to_string()),
            other => panic!("unexpected library {}", other),
        })
        .unwrap();

        assert_eq!(scene.materials().len(), 2);
        assert_eq!(scene.spheres()[0].material.name, "red");
        assert_eq!(scene.spheres()[1].material.name, "blue");
    }

    #[test]
    fn test_unknown_material() {
        let obj = "usemtl missing\nS 0 0 0 1\n";
        let err = load_scene_from_str(obj, no_mtl).unwrap_err();
        assert!(matches!(err, LoadError::UnknownMaterial(name) if name == "missing"));
    }

    #[test]
    fn test_unknown_face_material() {
        let obj = "v 0 0 0\nv 1 0 0\nv 0 1 0\nusemtl missing\nf 1 2 3\n";
        let err = load_scene_from_str(obj, no_mtl).unwrap_err();
        assert!(matches!(err, LoadError::UnknownMaterial(name) if name == "missing"));
    }

    #[test]
    fn test_objects_without_material_use_default() {
        let scene = load_scene_from_str("S 0 0 -3 1\n", no_mtl).unwrap();
        assert_eq!(scene.spheres()[0].material.name, "default");
    }

    #[test]
    fn test_invalid_material_rejected() {
        let obj = "mtllib bad.mtl\n";
        let err = load_scene_from_str(obj, |_| Ok("newmtl bad\nNi 0\n".to_string())).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Scene(SceneError::InvalidMaterial { .. })
        ));
    }

    #[test]
    fn test_malformed_albedo_rejected() {
        let obj = "mtllib m.mtl\n";
        let err =
            load_scene_from_str(obj, |_| Ok("newmtl m\nal 1 x 0\n".to_string())).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Parse(ParseError::InvalidParam { .. })
        ));
    }

    #[test]
    fn test_malformed_position() {
        let err = load_scene_from_str("v 0 0 0\nv 1 zero 0\n", no_mtl).unwrap_err();
        assert!(matches!(err, LoadError::Obj(_)));
    }

    #[test]
    fn test_face_index_out_of_range() {
        let err = load_scene_from_str("v 0 0 0\nv 1 0 0\nf 1 2 3\n", no_mtl).unwrap_err();
        assert!(matches!(err, LoadError::Obj(_)));
    }

    #[test]
    fn test_missing_library_reported() {
        let err = load_scene_from_str("mtllib gone.mtl\n", |lib| {
            Err(LoadError::Io {
                path: PathBuf::from(lib),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
        })
        .unwrap_err();
        assert!(matches!(err, LoadError::Io { path, .. } if path == Path::new("gone.mtl")));
    }

    #[test]
    fn test_missing_file() {
        let err = load_scene("/nonexistent/scene.obj").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_load_scene_from_disk() {
        let dir = std::env::temp_dir().join(format!("glint_loader_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("materials.mtl"), MTL).unwrap();
        std::fs::write(dir.join("scene.obj"), OBJ).unwrap();

        let scene = load_scene(dir.join("scene.obj")).unwrap();
        assert_eq!(scene.object_count(), 3);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
