//! How a layer may be recoloured.
//!
//! In `entry.json` every layer's colour slot is either a bare string or an
//! array of strings. A bare string is one of the markers `none`, `erase`,
//! `copy <file>.png`, or a single hex code; an array holds one hex code per
//! swatch.

use std::fmt;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Marker for layers that cannot be coloured.
pub const NONE_MARKER: &str = "none";
/// Marker for erase (mask) layers.
pub const ERASE_MARKER: &str = "erase";
/// Prefix for layers that borrow their colours from another file.
pub const COPY_PREFIX: &str = "copy ";
/// Suffix that turns a swatch answer into a copy reference.
pub const PNG_SUFFIX: &str = ".png";

/// The default colours offered for a layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwatchColours {
    /// Exactly one swatch; serialized as a bare string.
    Scalar(String),
    /// Two or more swatches; serialized as an array.
    List(Vec<String>),
}

impl SwatchColours {
    /// Collapse the collected hex codes the way `entry.json` stores them.
    pub fn from_codes(mut codes: Vec<String>) -> Self {
        if codes.len() == 1 {
            SwatchColours::Scalar(codes.remove(0))
        } else {
            SwatchColours::List(codes)
        }
    }

    pub fn codes(&self) -> &[String] {
        match self {
            SwatchColours::Scalar(code) => std::slice::from_ref(code),
            SwatchColours::List(codes) => codes,
        }
    }

    pub fn len(&self) -> usize {
        self.codes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes().is_empty()
    }
}

/// Recolouring rule for one layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColourSpec {
    Uncolourable,
    Erase,
    /// Take the colours of another layer file (e.g. `base.png`).
    CopyFrom(String),
    Swatches(SwatchColours),
}

impl ColourSpec {
    /// Terminal markers end the swatch rounds early and force the advanced flag.
    pub fn is_marker(&self) -> bool {
        !matches!(self, ColourSpec::Swatches(_))
    }

    /// Read a single string slot from `entry.json`.
    pub fn from_marker_or_code(value: String) -> Self {
        if value == NONE_MARKER {
            ColourSpec::Uncolourable
        } else if value == ERASE_MARKER {
            ColourSpec::Erase
        } else if let Some(file) = value.strip_prefix(COPY_PREFIX) {
            ColourSpec::CopyFrom(file.to_string())
        } else {
            ColourSpec::Swatches(SwatchColours::Scalar(value))
        }
    }
}

impl fmt::Display for ColourSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColourSpec::Uncolourable => write!(f, "{}", NONE_MARKER),
            ColourSpec::Erase => write!(f, "{}", ERASE_MARKER),
            ColourSpec::CopyFrom(file) => write!(f, "{}{}", COPY_PREFIX, file),
            ColourSpec::Swatches(swatches) => write!(f, "{}", swatches.codes().join(", ")),
        }
    }
}

impl Serialize for ColourSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            ColourSpec::Swatches(SwatchColours::List(codes)) => codes.serialize(serializer),
            ColourSpec::Swatches(SwatchColours::Scalar(code)) => serializer.serialize_str(code),
            other => serializer.serialize_str(&other.to_string()),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawColourSlot {
    One(String),
    Many(Vec<String>),
}

impl<'de> Deserialize<'de> for ColourSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(match RawColourSlot::deserialize(deserializer)? {
            RawColourSlot::One(value) => ColourSpec::from_marker_or_code(value),
            RawColourSlot::Many(codes) => ColourSpec::Swatches(SwatchColours::List(codes)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_code_collapses_to_scalar() {
        let swatches = SwatchColours::from_codes(vec!["#ffffff".to_string()]);
        assert_eq!(swatches, SwatchColours::Scalar("#ffffff".to_string()));
        assert_eq!(swatches.len(), 1);
    }

    #[test]
    fn test_many_codes_stay_a_list() {
        let swatches = SwatchColours::from_codes(vec!["#ffffff".into(), "#0000ff".into()]);
        assert!(matches!(swatches, SwatchColours::List(ref c) if c.len() == 2));
    }

    #[test]
    fn test_serialize_markers() {
        let json = serde_json::to_string(&vec![
            ColourSpec::Uncolourable,
            ColourSpec::Erase,
            ColourSpec::CopyFrom("base.png".to_string()),
        ])
        .unwrap();

        assert_eq!(json, r#"["none","erase","copy base.png"]"#);
    }

    #[test]
    fn test_serialize_scalar_is_bare_string() {
        let spec = ColourSpec::Swatches(SwatchColours::Scalar("#aabbcc".to_string()));
        assert_eq!(serde_json::to_string(&spec).unwrap(), r##""#aabbcc""##);
    }

    #[test]
    fn test_deserialize_slots() {
        let specs: Vec<ColourSpec> =
            serde_json::from_str(r##"["none", "erase", "copy trim.png", "#123456", ["#000000", "#ffffff"]]"##)
                .unwrap();

        assert_eq!(specs[0], ColourSpec::Uncolourable);
        assert_eq!(specs[1], ColourSpec::Erase);
        assert_eq!(specs[2], ColourSpec::CopyFrom("trim.png".to_string()));
        assert_eq!(
            specs[3],
            ColourSpec::Swatches(SwatchColours::Scalar("#123456".to_string()))
        );
        assert_eq!(
            specs[4],
            ColourSpec::Swatches(SwatchColours::List(vec![
                "#000000".to_string(),
                "#ffffff".to_string()
            ]))
        );
    }

    #[test]
    fn test_marker_detection() {
        assert!(ColourSpec::Erase.is_marker());
        assert!(ColourSpec::CopyFrom("a.png".into()).is_marker());
        assert!(!ColourSpec::Swatches(SwatchColours::Scalar("#000000".into())).is_marker());
    }
}
