//! Line scan for the sphere and light records.

use glint_math::DVec3;
use thiserror::Error;

use crate::scene::Light;

/// Errors in the parts of a scene file `tobj` does not read.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Invalid number '{value}' at line {line}")]
    InvalidNumber { line: usize, value: String },

    #[error("Invalid '{key}' value '{value}' in material '{material}'")]
    InvalidParam {
        material: String,
        key: String,
        value: String,
    },
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// An `S` sphere record.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjSphere {
    pub center: DVec3,
    pub radius: f64,
    pub material: Option<String>,
}

/// Records the OBJ reader skips, plus every material reference.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjExtensions {
    pub spheres: Vec<ObjSphere>,
    pub lights: Vec<Light>,
    /// `usemtl` names with their line numbers
    pub material_refs: Vec<(usize, String)>,
}

/// Scan OBJ text for `S` and `P` records and `usemtl` references.
pub fn scan_extensions(content: &str) -> ParseResult<ObjExtensions> {
    let mut out = ObjExtensions::default();
    let mut current_material: Option<String> = None;

    for (i, raw) in content.lines().enumerate() {
        let line = i + 1;
        let Some((keyword, args)) = tokenize(raw) else {
            continue;
        };

        match keyword {
            "usemtl" => {
                if args.is_empty() {
                    return Err(ParseError::Parse {
                        line,
                        message: "missing material name".into(),
                    });
                }
                let name = args.join(" ");
                out.material_refs.push((line, name.clone()));
                current_material = Some(name);
            }
            "S" => {
                let [x, y, z, radius] = parse_floats(line, &args)?;
                out.spheres.push(ObjSphere {
                    center: DVec3::new(x, y, z),
                    radius,
                    material: current_material.clone(),
                });
            }
            "P" => {
                let [x, y, z, r, g, b] = parse_floats(line, &args)?;
                out.lights
                    .push(Light::new(DVec3::new(x, y, z), DVec3::new(r, g, b)));
            }
            _ => {}
        }
    }

    Ok(out)
}

/// Split a line into its directive and arguments, skipping blanks and comments.
fn tokenize(line: &str) -> Option<(&str, Vec<&str>)> {
    let content = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    };
    let mut tokens = content.split_whitespace();
    let keyword = tokens.next()?;
    Some((keyword, tokens.collect()))
}

fn parse_floats<const N: usize>(line: usize, args: &[&str]) -> ParseResult<[f64; N]> {
    if args.len() < N {
        return Err(ParseError::Parse {
            line,
            message: format!("expected {} numbers, found {}", N, args.len()),
        });
    }
    let mut out = [0.0; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = arg.parse().map_err(|_| ParseError::InvalidNumber {
            line,
            value: (*arg).to_string(),
        })?;
    }
    Ok(out)
}
