//! Error type shared by the particle field, its configuration and the browser glue.

use std::fmt;

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum ParticleError {
    /// The palette has no colors to pick from.
    EmptyPalette,
    /// A palette entry is not valid CSS hex notation.
    InvalidColor(String),
    /// A sampling range has `min > max`.
    InvalidRange {
        name: &'static str,
        min: f64,
        max: f64,
    },
    /// Particles need a strictly positive radius.
    NonPositiveRadius(f64),
    /// Link distance must be strictly positive.
    NonPositiveLinkDistance(f64),
    /// Line width must be strictly positive.
    NonPositiveLineWidth(f64),
    /// An alpha value outside `[0, 1]`.
    AlphaOutOfRange { name: &'static str, value: f64 },
    /// A host collaborator (canvas, window, frame scheduler) reported a failure.
    Host(String),
}

impl ParticleError {
    pub(crate) fn host(context: &str, err: JsValue) -> Self {
        ParticleError::Host(format!("{}: {:?}", context, err))
    }
}

impl fmt::Display for ParticleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParticleError::EmptyPalette => write!(f, "Palette must contain at least one color"),
            ParticleError::InvalidColor(s) => write!(f, "Invalid hex color: {:?}", s),
            ParticleError::InvalidRange { name, min, max } => {
                write!(f, "Invalid {} range: min {} is greater than max {}", name, min, max)
            }
            ParticleError::NonPositiveRadius(r) => {
                write!(f, "Minimum particle radius must be positive, got {}", r)
            }
            ParticleError::NonPositiveLinkDistance(d) => {
                write!(f, "Link distance must be positive, got {}", d)
            }
            ParticleError::NonPositiveLineWidth(w) => {
                write!(f, "Link line width must be positive, got {}", w)
            }
            ParticleError::AlphaOutOfRange { name, value } => {
                write!(f, "{} must be within [0, 1], got {}", name, value)
            }
            ParticleError::Host(msg) => write!(f, "Host error: {}", msg),
        }
    }
}

impl std::error::Error for ParticleError {}

impl From<ParticleError> for JsValue {
    fn from(e: ParticleError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_value() {
        let e = ParticleError::InvalidRange {
            name: "velocity",
            min: 1.0,
            max: -1.0,
        };
        assert_eq!(
            e.to_string(),
            "Invalid velocity range: min 1 is greater than max -1"
        );
        assert_eq!(
            ParticleError::AlphaOutOfRange { name: "particle alpha", value: 1.5 }.to_string(),
            "particle alpha must be within [0, 1], got 1.5"
        );
    }
}
