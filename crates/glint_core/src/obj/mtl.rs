//! Conversion from `tobj` materials.

use glint_math::DVec3;

use super::extensions::{ParseError, ParseResult};
use crate::material::{Albedo, Material};

/// Convert a material read by `tobj`.
///
/// Properties the MTL file does not set keep their defaults. `Ke` and
/// `al` are not standard `tobj` fields and are read from its unknown
/// parameters.
pub(crate) fn convert_material(source: &tobj::Material) -> ParseResult<Material> {
    let mut material = Material {
        name: source.name.clone(),
        ..Default::default()
    };

    if let Some(ka) = source.ambient {
        material.ambient_color = DVec3::from_array(ka);
    }
    if let Some(kd) = source.diffuse {
        material.diffuse_color = DVec3::from_array(kd);
    }
    if let Some(ks) = source.specular {
        material.specular_color = DVec3::from_array(ks);
    }
    if let Some(ns) = source.shininess {
        material.specular_exponent = ns;
    }
    if let Some(ni) = source.optical_density {
        material.refraction_index = ni;
    }
    if let Some(ke) = source.unknown_param.get("Ke") {
        material.intensity = DVec3::from_array(parse_param(&source.name, "Ke", ke)?);
    }
    if let Some(al) = source.unknown_param.get("al") {
        let [diffuse, reflective, refractive] = parse_param(&source.name, "al", al)?;
        material.albedo = Albedo::new(diffuse, reflective, refractive);
    }

    Ok(material)
}

fn parse_param<const N: usize>(material: &str, key: &str, value: &str) -> ParseResult<[f64; N]> {
    let invalid = || ParseError::InvalidParam {
        material: material.to_string(),
        key: key.to_string(),
        value: value.to_string(),
    };

    let mut out = [0.0; N];
    let mut tokens = value.split_whitespace();
    for slot in out.iter_mut() {
        *slot = tokens
            .next()
            .and_then(|t| t.parse().ok())
            .ok_or_else(invalid)?;
    }
    Ok(out)
}
