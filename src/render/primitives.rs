use serde::{Deserialize, Serialize};

use crate::core::PathVertex;
use crate::error::{ScatterError, ScatterResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const GREY: Self = Self::rgb(0.502, 0.502, 0.502);
    pub const SKY_BLUE: Self = Self::rgb(0.529, 0.808, 0.922);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#rrggbb`.
    pub fn from_hex(hex: &str) -> ScatterResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ScatterError::InvalidData(format!(
                "color `{hex}` is not in #rrggbb form"
            )));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map(|value| f64::from(value) / 255.0)
                .map_err(|_| ScatterError::InvalidData(format!("color `{hex}` is not hex")))
        };
        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        let byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            byte(self.red),
            byte(self.green),
            byte(self.blue)
        )
    }

    pub fn validate(self) -> ScatterResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ScatterError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

pub(crate) fn validate_opacity(opacity: f64) -> ScatterResult<()> {
    if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
        return Err(ScatterError::InvalidData(
            "opacity must be finite and in [0, 1]".to_owned(),
        ));
    }
    Ok(())
}

fn validate_finite(values: &[f64], what: &str) -> ScatterResult<()> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(ScatterError::InvalidData(format!(
            "{what} coordinates must be finite"
        )))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: Color,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(cx: f64, cy: f64, radius: f64, fill: Color) -> Self {
        Self {
            cx,
            cy,
            radius,
            fill,
        }
    }

    pub fn validate(self) -> ScatterResult<()> {
        validate_finite(&[self.cx, self.cy], "circle")?;
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(ScatterError::InvalidData(
                "circle radius must be finite and >= 0".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
    pub opacity: f64,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill: Color, opacity: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill,
            opacity,
        }
    }

    pub fn validate(self) -> ScatterResult<()> {
        validate_finite(&[self.x, self.y, self.width, self.height], "rect")?;
        if self.width < 0.0 || self.height < 0.0 {
            return Err(ScatterError::InvalidData(
                "rect size must be >= 0".to_owned(),
            ));
        }
        validate_opacity(self.opacity)?;
        self.fill.validate()
    }
}

/// Color stop at `offset` in `[0, 1]` along a horizontal gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

/// Rectangle filled with a left-to-right linear gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientRectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub stops: Vec<GradientStop>,
}

impl GradientRectPrimitive {
    pub fn validate(&self) -> ScatterResult<()> {
        validate_finite(&[self.x, self.y, self.width, self.height], "gradient rect")?;
        if self.width < 0.0 || self.height < 0.0 {
            return Err(ScatterError::InvalidData(
                "gradient rect size must be >= 0".to_owned(),
            ));
        }
        if self.stops.is_empty() {
            return Err(ScatterError::InvalidData(
                "gradient needs at least one stop".to_owned(),
            ));
        }
        let mut previous = 0.0;
        for stop in &self.stops {
            if !stop.offset.is_finite() || !(previous..=1.0).contains(&stop.offset) {
                return Err(ScatterError::InvalidData(
                    "gradient stop offsets must be ascending within [0, 1]".to_owned(),
                ));
            }
            previous = stop.offset;
            stop.color.validate()?;
        }
        Ok(())
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ScatterResult<()> {
        validate_finite(&[self.x1, self.y1, self.x2, self.y2], "line")?;
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ScatterError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Label in pixel space. Empty text is allowed for placeholders that are
/// filled in later through text updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ScatterResult<()> {
        validate_finite(&[self.x, self.y], "text")?;
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ScatterError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Filled, optionally stroked closed path (density areas).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaPathPrimitive {
    pub vertices: Vec<PathVertex>,
    pub fill: Color,
    pub stroke: Option<Color>,
    pub opacity: f64,
}

impl AreaPathPrimitive {
    pub fn validate(&self) -> ScatterResult<()> {
        if !self.vertices.iter().all(|vertex| vertex.is_finite()) {
            return Err(ScatterError::InvalidData(
                "area path vertices must be finite".to_owned(),
            ));
        }
        validate_opacity(self.opacity)?;
        if let Some(stroke) = self.stroke {
            stroke.validate()?;
        }
        self.fill.validate()
    }
}

/// Invisible hit region for one Voronoi cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellBoundaryPrimitive {
    pub index: usize,
    pub vertices: Vec<PathVertex>,
}

impl CellBoundaryPrimitive {
    pub fn validate(&self) -> ScatterResult<()> {
        if self.vertices.len() < 4 {
            return Err(ScatterError::InvalidData(format!(
                "cell {} boundary must be a closed path",
                self.index
            )));
        }
        if !self.vertices.iter().all(|vertex| vertex.is_finite()) {
            return Err(ScatterError::InvalidData(
                "cell boundary vertices must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}
