//! Simple particle struct to keep track of individual position, velocity, radius and color.

use rand::seq::SliceRandom;
use rand::Rng;
use vecmath::Vector2;

use crate::color::Color;
use crate::config::FieldConfig;
use crate::error::ParticleError;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    radius: f64,
    color: Color,
}

impl Particle {
    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, radius: f64, color: Color) -> Particle {
        Particle {
            pos,
            vel,
            radius,
            color,
        }
    }

    // Position uniform over the surface, everything else from the config's ranges
    pub(crate) fn random<R: Rng>(
        rng: &mut R,
        width: u32,
        height: u32,
        config: &FieldConfig,
    ) -> Result<Particle, ParticleError> {
        let pos_x = rng.gen::<f64>() * width as f64;
        let pos_y = rng.gen::<f64>() * height as f64;
        let vel_x = config.velocity.sample(rng);
        let vel_y = config.velocity.sample(rng);
        let radius = config.radius.sample(rng);
        let color = *config
            .palette
            .choose(rng)
            .ok_or(ParticleError::EmptyPalette)?;

        Ok(Particle::new([pos_x, pos_y], [vel_x, vel_y], radius, color))
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Moves one tick and bounces off the walls of a `width` x `height` surface.
    ///
    /// Whenever the particle ends the move outside the surface on an axis, that
    /// velocity component is negated. The position is left where it landed, so a
    /// particle can sit up to one tick's travel past a wall before heading back.
    pub fn advance(&mut self, width: u32, height: u32) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);
        let bounds = [width as f64, height as f64];
        for axis in 0..2 {
            let p = self.pos[axis];
            let v = self.vel[axis];
            if p < 0.0 || p > bounds[axis] {
                self.vel[axis] = -v;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_by_velocity_inside_bounds() {
        let mut p = Particle::new([10.0, 20.0], [0.25, -0.5], 2.0, Color::WHITE);
        p.advance(100, 100);
        assert_eq!(p.pos, [10.25, 19.5]);
        assert_eq!(p.vel, [0.25, -0.5]);
    }

    #[test]
    fn bounces_off_right_wall_after_overshooting() {
        let mut p = Particle::new([99.9, 50.0], [0.5, 0.0], 1.0, Color::WHITE);
        p.advance(100, 100);
        assert!(p.pos[0] > 100.0);
        assert_eq!(p.vel[0], -0.5);

        let overshoot = p.pos[0];
        p.advance(100, 100);
        assert!(p.pos[0] < overshoot);
        assert!(p.pos[0] < 100.0);
        assert_eq!(p.vel[0], -0.5);
    }

    #[test]
    fn bounces_off_top_and_left_walls() {
        let mut p = Particle::new([0.1, 0.1], [-0.25, -0.25], 1.0, Color::WHITE);
        p.advance(100, 100);
        assert_eq!(p.vel, [0.25, 0.25]);
        p.advance(100, 100);
        assert!(p.pos[0] >= 0.0 && p.pos[1] >= 0.0);
    }

    #[test]
    fn flips_whenever_outside_even_when_moving_inward() {
        let mut p = Particle::new([150.0, 50.0], [-0.5, 0.0], 1.0, Color::WHITE);
        p.advance(100, 100);
        assert_eq!(p.pos, [149.5, 50.0]);
        assert_eq!(p.vel, [0.5, 0.0]);

        let mut p = Particle::new([50.0, -10.0], [0.0, 0.25], 1.0, Color::WHITE);
        p.advance(100, 100);
        assert_eq!(p.pos, [50.0, -9.75]);
        assert_eq!(p.vel, [0.0, -0.25]);
    }

    #[test]
    fn radius_and_color_are_preserved() {
        let color = Color::from_u32(0x3b82f6ff);
        let mut p = Particle::new([1.0, 1.0], [3.0, 3.0], 2.5, color);
        for _ in 0..100 {
            p.advance(10, 10);
        }
        assert_eq!(p.radius(), 2.5);
        assert_eq!(p.color(), color);
    }
}
