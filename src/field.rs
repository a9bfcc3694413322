//! The particle simulation: a fixed set of drifting particles that bounce off the
//! surface edges and are joined by fading lines when they pass close to each
//! other.
//!
//! A field never owns its surface. The host hands one to [`ParticleField::render`]
//! each frame and reports size changes through [`ParticleField::resize`].

use rand::Rng;

use crate::config::FieldConfig;
use crate::error::ParticleError;
use crate::particle::Particle;
use crate::surface::Surface;
use crate::utils::Timer;

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    width: u32,
    height: u32,
    particles: Vec<Particle>,
    config: FieldConfig,
}

/// Two particles close enough to be joined by a line.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Link {
    pub from: usize,
    pub to: usize,
    pub distance: f64,
    pub alpha: f64,
}

impl ParticleField {
    /// Builds `config.count` particles spread uniformly over the surface.
    pub fn new<R: Rng>(
        width: u32,
        height: u32,
        config: FieldConfig,
        rng: &mut R,
    ) -> Result<ParticleField, ParticleError> {
        config.validate()?;
        let mut particles = Vec::with_capacity(config.count);
        for _ in 0..config.count {
            particles.push(Particle::random(rng, width, height, &config)?);
        }

        Ok(ParticleField {
            width,
            height,
            particles,
            config,
        })
    }

    /// Builds a field from explicit particles; `config.count` is ignored.
    pub fn from_particles(
        width: u32,
        height: u32,
        particles: Vec<Particle>,
        config: FieldConfig,
    ) -> Result<ParticleField, ParticleError> {
        config.validate()?;
        for p in &particles {
            if !(p.radius() > 0.0) {
                return Err(ParticleError::NonPositiveRadius(p.radius()));
            }
        }

        Ok(ParticleField {
            width,
            height,
            particles,
            config,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn step(&mut self) {
        let _timer = Timer::new("ParticleField::step");
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.advance(width, height);
        }
    }

    /// Paints one frame: a translucent overlay that fades the previous frames,
    /// then every particle, then the links between nearby pairs.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), ParticleError> {
        let _timer = Timer::new("ParticleField::render");
        let config = &self.config;
        surface.fill_rect(
            0.0,
            0.0,
            self.width as f64,
            self.height as f64,
            config.overlay_color,
            config.overlay_alpha,
        )?;

        for p in &self.particles {
            surface.fill_circle(p.pos, p.radius(), p.color(), config.particle_alpha)?;
        }

        for link in self.links() {
            let from = &self.particles[link.from];
            let to = &self.particles[link.to];
            surface.stroke_line(from.pos, to.pos, from.color(), link.alpha, config.link_width)?;
        }
        Ok(())
    }

    /// Every unordered pair closer than the link distance, each pair once with
    /// `from < to`.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let n = self.particles.len();
        (0..n)
            .flat_map(move |i| ((i + 1)..n).map(move |j| (i, j)))
            .filter_map(move |(i, j)| {
                let distance = vecmath::vec2_len(vecmath::vec2_sub(
                    self.particles[i].pos,
                    self.particles[j].pos,
                ));
                if distance < self.config.link_distance {
                    Some(Link {
                        from: i,
                        to: j,
                        distance,
                        alpha: self.link_alpha(distance),
                    })
                } else {
                    None
                }
            })
    }

    /// Line opacity falling linearly from the maximum at distance 0 to nothing
    /// at the link distance.
    pub fn link_alpha(&self, distance: f64) -> f64 {
        let t = (distance / self.config.link_distance).max(0.0).min(1.0);
        self.config.link_max_alpha * (1.0 - t)
    }

    /// Records new surface bounds. Particles stay put; later steps bounce them
    /// against the new bounds.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}
