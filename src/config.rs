//! Tunables for a [`ParticleField`](crate::field::ParticleField).
//!
//! `FieldConfig::default()` matches the home page background: a hundred white
//! particles drifting at up to a quarter pixel per frame over a black trail.

use rand::Rng;

use crate::color::Color;
use crate::error::ParticleError;

/// Inclusive `[min, max]` range sampled uniformly.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SampleRange {
    pub min: f64,
    pub max: f64,
}

impl SampleRange {
    pub const fn new(min: f64, max: f64) -> Self {
        SampleRange { min, max }
    }

    /// Range centered on zero, `[-magnitude, magnitude]`.
    pub fn symmetric(magnitude: f64) -> Self {
        SampleRange::new(-magnitude.abs(), magnitude.abs())
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        // gen_range panics on an empty range
        if self.min < self.max {
            rng.gen_range(self.min, self.max)
        } else {
            self.min
        }
    }

    fn validate(&self, name: &'static str) -> Result<(), ParticleError> {
        // written so NaN bounds fail too
        if self.min <= self.max {
            Ok(())
        } else {
            Err(ParticleError::InvalidRange {
                name,
                min: self.min,
                max: self.max,
            })
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub count: usize,
    pub palette: Vec<Color>,
    pub velocity: SampleRange,
    pub radius: SampleRange,
    pub link_distance: f64,
    pub link_max_alpha: f64,
    pub link_width: f64,
    pub particle_alpha: f64,
    pub overlay_color: Color,
    pub overlay_alpha: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            count: 100,
            palette: vec![Color::WHITE],
            velocity: SampleRange::symmetric(0.25),
            radius: SampleRange::new(1.0, 3.0),
            link_distance: 150.0,
            link_max_alpha: 0.5,
            link_width: 0.5,
            particle_alpha: 0.6,
            overlay_color: Color::BLACK,
            overlay_alpha: 0.25,
        }
    }
}

impl FieldConfig {
    /// Lighter variant for small screens.
    pub fn sparse() -> Self {
        FieldConfig {
            count: 50,
            ..FieldConfig::default()
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_velocity(mut self, velocity: SampleRange) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_radius(mut self, radius: SampleRange) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_link_distance(mut self, link_distance: f64) -> Self {
        self.link_distance = link_distance;
        self
    }

    pub fn validate(&self) -> Result<(), ParticleError> {
        if self.palette.is_empty() {
            return Err(ParticleError::EmptyPalette);
        }
        self.velocity.validate("velocity")?;
        self.radius.validate("radius")?;
        if !(self.radius.min > 0.0) {
            return Err(ParticleError::NonPositiveRadius(self.radius.min));
        }
        if !(self.link_distance > 0.0) {
            return Err(ParticleError::NonPositiveLinkDistance(self.link_distance));
        }
        if !(self.link_width > 0.0) {
            return Err(ParticleError::NonPositiveLineWidth(self.link_width));
        }
        check_alpha("link alpha", self.link_max_alpha)?;
        check_alpha("particle alpha", self.particle_alpha)?;
        check_alpha("overlay alpha", self.overlay_alpha)?;
        Ok(())
    }
}

fn check_alpha(name: &'static str, value: f64) -> Result<(), ParticleError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ParticleError::AlphaOutOfRange { name, value })
    }
}
