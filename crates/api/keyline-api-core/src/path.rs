//! AnimatableProperty parsing and formatting.
//!
//! A property path names one animated channel of a layer:
//! - transform channels: "position.x|y|z", "rotation.x|y|z", "scale.x|y"
//! - style channels: "opacity", "blur", "brightness", "contrast", "saturate",
//!   "dropShadowX|Y|Blur|Color"
//! - custom channels: "props.<name>", declared by per-layer-type metadata
//!
//! Paths are intentionally string-shaped on the wire; the enum keeps the
//! fixed channels closed so the resolver can match them exhaustively.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AnimatableProperty {
    PositionX,
    PositionY,
    PositionZ,
    RotationX,
    RotationY,
    RotationZ,
    ScaleX,
    ScaleY,
    Opacity,
    Blur,
    Brightness,
    Contrast,
    Saturate,
    DropShadowX,
    DropShadowY,
    DropShadowBlur,
    DropShadowColor,
    /// Custom property; holds the bare name ("props." stripped).
    Custom(String),
}

impl AnimatableProperty {
    /// Parse a path string according to the grammar described above.
    pub fn parse(s: &str) -> Result<Self, String> {
        use AnimatableProperty::*;
        let prop = match s {
            "position.x" => PositionX,
            "position.y" => PositionY,
            "position.z" => PositionZ,
            "rotation.x" => RotationX,
            "rotation.y" => RotationY,
            "rotation.z" => RotationZ,
            "scale.x" => ScaleX,
            "scale.y" => ScaleY,
            "opacity" => Opacity,
            "blur" => Blur,
            "brightness" => Brightness,
            "contrast" => Contrast,
            "saturate" => Saturate,
            "dropShadowX" => DropShadowX,
            "dropShadowY" => DropShadowY,
            "dropShadowBlur" => DropShadowBlur,
            "dropShadowColor" => DropShadowColor,
            other => {
                let name = other
                    .strip_prefix("props.")
                    .ok_or_else(|| format!("unknown property path: {other}"))?;
                if name.is_empty() {
                    return Err("empty custom property name".to_string());
                }
                Custom(name.to_string())
            }
        };
        Ok(prop)
    }

    /// Transform channels whose preset values are offsets from rest (0 = no
    /// change): position.* and rotation.*.
    pub fn is_offset_style(&self) -> bool {
        use AnimatableProperty::*;
        matches!(
            self,
            PositionX | PositionY | PositionZ | RotationX | RotationY | RotationZ
        )
    }

    /// Channels whose preset values are factors relative to rest (1 = no
    /// change): scale.* and opacity.
    pub fn is_factor_style(&self) -> bool {
        use AnimatableProperty::*;
        matches!(self, ScaleX | ScaleY | Opacity)
    }
}

impl fmt::Display for AnimatableProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use AnimatableProperty::*;
        match self {
            PositionX => f.write_str("position.x"),
            PositionY => f.write_str("position.y"),
            PositionZ => f.write_str("position.z"),
            RotationX => f.write_str("rotation.x"),
            RotationY => f.write_str("rotation.y"),
            RotationZ => f.write_str("rotation.z"),
            ScaleX => f.write_str("scale.x"),
            ScaleY => f.write_str("scale.y"),
            Opacity => f.write_str("opacity"),
            Blur => f.write_str("blur"),
            Brightness => f.write_str("brightness"),
            Contrast => f.write_str("contrast"),
            Saturate => f.write_str("saturate"),
            DropShadowX => f.write_str("dropShadowX"),
            DropShadowY => f.write_str("dropShadowY"),
            DropShadowBlur => f.write_str("dropShadowBlur"),
            DropShadowColor => f.write_str("dropShadowColor"),
            Custom(name) => write!(f, "props.{name}"),
        }
    }
}

impl FromStr for AnimatableProperty {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnimatableProperty::parse(s)
    }
}

// Serde support: serialize as string, deserialize from string
impl Serialize for AnimatableProperty {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AnimatableProperty {
    fn deserialize<D>(deserializer: D) -> Result<AnimatableProperty, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        AnimatableProperty::parse(&s).map_err(de::Error::custom)
    }
}
