use serde::{Deserialize, Serialize};

/// Material classification of a primitive, used by the renderer for
/// texturing and by tests to count geometry per generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaterialKind {
    Board,
    Joist,
    Post,
    Rail,
    RailingPost,
    Stair,
    Furniture,
    Label,
}

/// Geometry payload of a primitive. Dimensions are in feet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PrimitiveKind {
    /// Axis-aligned box before rotation; size is [x, y, z] extent.
    Box { size: [f64; 3] },
    /// Cylinder with its axis along Y before rotation.
    Cylinder { radius: f64, height: f64 },
    /// Tube swept along a polyline path (spiral stair treads).
    Tube { path: Vec<[f64; 3]>, radius: f64 },
    /// Billboarded text label (dimension annotations).
    Sprite { text: String, scale: f64 },
}

/// One positioned, rotated, material-tagged shape, the engine's output
/// unit. The engine never retains primitives; the host renderer consumes
/// the list produced by each rebuild and the previous list is discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    pub kind: PrimitiveKind,
    /// Center position [x, y, z].
    pub position: [f64; 3],
    /// Euler rotation [x, y, z] in radians.
    pub rotation: [f64; 3],
    pub material: MaterialKind,
}

impl Primitive {
    /// An unrotated box.
    pub fn boxed(size: [f64; 3], position: [f64; 3], material: MaterialKind) -> Self {
        Self {
            kind: PrimitiveKind::Box { size },
            position,
            rotation: [0.0; 3],
            material,
        }
    }

    /// A vertical cylinder.
    pub fn cylinder(radius: f64, height: f64, position: [f64; 3], material: MaterialKind) -> Self {
        Self {
            kind: PrimitiveKind::Cylinder { radius, height },
            position,
            rotation: [0.0; 3],
            material,
        }
    }

    pub fn with_rotation(mut self, rotation: [f64; 3]) -> Self {
        self.rotation = rotation;
        self
    }
}
