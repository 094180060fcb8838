use serde::{Deserialize, Serialize};

/// Plan-view topology of the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeckShape {
    Rectangular,
    LShaped,
    TShaped,
    MultiLevel,
}

/// Direction the deck boards run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardDirection {
    /// Boards run along the width (X) axis.
    Horizontal,
    /// Boards run along the length (Z) axis.
    Vertical,
}

/// Decking pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardPattern {
    Standard,
    /// Boards rotated 45° in place, dimensions scaled by √2 to keep coverage.
    Diagonal,
}

/// Stair geometry variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StairType {
    Straight,
    Spiral,
}

/// Railing style. Affects rail radius only; post layout is identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RailingStyle {
    Standard,
    Cable,
}

/// Placeable furniture items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FurnitureKind {
    Chair,
    Table,
}

/// Board segmentation mode: optimize from the stock list, or cut a fixed
/// stock length. Serialized as the sentinel string `"auto"` or a number,
/// matching the project document format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoardLength {
    Auto,
    Fixed(f64),
}

impl Serialize for BoardLength {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            BoardLength::Auto => serializer.serialize_str("auto"),
            BoardLength::Fixed(len) => serializer.serialize_f64(*len),
        }
    }
}

impl<'de> Deserialize<'de> for BoardLength {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(f64),
            Word(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(len) => Ok(BoardLength::Fixed(len)),
            Repr::Word(w) if w == "auto" => Ok(BoardLength::Auto),
            Repr::Word(w) => Err(serde::de::Error::custom(format!(
                "expected \"auto\" or a stock length, got \"{}\"",
                w
            ))),
        }
    }
}

/// The full deck specification. One mutable instance owned by the
/// application; passed by reference into every rebuild.
///
/// All fields default individually during deserialization, so a partial
/// project document loads with the missing fields filled in before range
/// validation runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeckSpec {
    pub shape: DeckShape,
    /// Primary footprint width (X), feet.
    pub width: f64,
    /// Primary footprint length (Z), feet.
    pub length: f64,
    /// Wing footprint for L/T shapes.
    pub wing_width: f64,
    pub wing_length: f64,
    /// Second level footprint for multi-level decks.
    pub second_width: f64,
    pub second_length: f64,
    pub second_height_offset: f64,
    /// Elevation of the primary deck surface above grade.
    pub height: f64,
    pub board_direction: BoardDirection,
    pub board_pattern: BoardPattern,
    pub board_length: BoardLength,
    pub picture_frame: bool,
    pub railings: bool,
    pub stairs: bool,
    pub stair_steps: u32,
    pub stair_width: f64,
    pub stair_type: StairType,
    pub railing_style: RailingStyle,
    pub show_dimensions: bool,
    /// Renderer material tint, passed through untouched.
    pub color: String,
    pub furniture: Vec<FurnitureKind>,
}

impl Default for DeckSpec {
    fn default() -> Self {
        Self {
            shape: DeckShape::Rectangular,
            width: 12.0,
            length: 12.0,
            wing_width: 6.0,
            wing_length: 6.0,
            second_width: 6.0,
            second_length: 6.0,
            second_height_offset: 1.0,
            height: 1.0,
            board_direction: BoardDirection::Horizontal,
            board_pattern: BoardPattern::Standard,
            board_length: BoardLength::Auto,
            picture_frame: false,
            railings: false,
            stairs: false,
            stair_steps: 3,
            stair_width: 4.0,
            stair_type: StairType::Straight,
            railing_style: RailingStyle::Standard,
            show_dimensions: true,
            color: "#8b4513".to_string(),
            furniture: Vec::new(),
        }
    }
}

/// A single validation violation found in a DeckSpec.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpecIssue {
    #[error("{field} must be positive, got {value}")]
    NonPositiveDimension { field: &'static str, value: f64 },

    #[error("stair steps must be at least 1")]
    NoStairSteps,

    #[error("step height {0} is not positive and finite (height / stair steps)")]
    BadStepHeight(f64),

    #[error("no stock length can cover a board segment (stock list is empty)")]
    NoStockLengths,
}

impl DeckSpec {
    /// Check every invariant and return the full list of violations.
    ///
    /// Only the dimensions the current shape and flags actually use are
    /// checked; a negative wing on a rectangular deck is not an error.
    pub fn validate(&self) -> Vec<SpecIssue> {
        let mut issues = Vec::new();

        let mut require_positive = |field: &'static str, value: f64| {
            if !(value > 0.0) || !value.is_finite() {
                issues.push(SpecIssue::NonPositiveDimension { field, value });
            }
        };

        require_positive("width", self.width);
        require_positive("length", self.length);
        require_positive("height", self.height);

        match self.shape {
            DeckShape::Rectangular => {}
            DeckShape::LShaped | DeckShape::TShaped => {
                require_positive("wingWidth", self.wing_width);
                require_positive("wingLength", self.wing_length);
            }
            DeckShape::MultiLevel => {
                require_positive("secondWidth", self.second_width);
                require_positive("secondLength", self.second_length);
                require_positive("secondHeightOffset", self.second_height_offset);
            }
        }

        if let BoardLength::Fixed(len) = self.board_length {
            require_positive("boardLength", len);
        }

        if self.stairs {
            require_positive("stairWidth", self.stair_width);
            if self.stair_steps == 0 {
                issues.push(SpecIssue::NoStairSteps);
            } else {
                let step_height = self.height / self.stair_steps as f64;
                if !step_height.is_finite() || step_height <= 0.0 {
                    issues.push(SpecIssue::BadStepHeight(step_height));
                }
            }
        }

        issues
    }

    /// Convenience wrapper: `Ok` when no invariant is violated.
    pub fn check(&self) -> Result<(), Vec<SpecIssue>> {
        let issues = self.validate();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}
