//! The drawing capabilities a particle field needs from its host.
//!
//! [`CanvasSurface`](crate::web::CanvasSurface) paints onto a 2d canvas context;
//! [`CommandLog`] just records what would have been painted, for headless hosts
//! and for checking a frame's exact draw sequence.

use vecmath::Vector2;

use crate::color::Color;
use crate::error::ParticleError;

pub trait Surface {
    fn set_dimensions(&mut self, width: u32, height: u32) -> Result<(), ParticleError>;

    fn fill_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
        alpha: f64,
    ) -> Result<(), ParticleError>;

    fn fill_circle(
        &mut self,
        center: Vector2<f64>,
        radius: f64,
        color: Color,
        alpha: f64,
    ) -> Result<(), ParticleError>;

    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        color: Color,
        alpha: f64,
        width: f64,
    ) -> Result<(), ParticleError>;
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    SetDimensions {
        width: u32,
        height: u32,
    },
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
        alpha: f64,
    },
    FillCircle {
        center: Vector2<f64>,
        radius: f64,
        color: Color,
        alpha: f64,
    },
    StrokeLine {
        from: Vector2<f64>,
        to: Vector2<f64>,
        color: Color,
        alpha: f64,
        width: f64,
    },
}

#[derive(Clone, Debug, Default)]
pub struct CommandLog {
    pub commands: Vec<DrawCommand>,
}

impl CommandLog {
    pub fn new() -> Self {
        CommandLog::default()
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeLine { .. }))
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
    }
}

impl Surface for CommandLog {
    fn set_dimensions(&mut self, width: u32, height: u32) -> Result<(), ParticleError> {
        self.commands
            .push(DrawCommand::SetDimensions { width, height });
        Ok(())
    }

    fn fill_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
        alpha: f64,
    ) -> Result<(), ParticleError> {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color,
            alpha,
        });
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: Vector2<f64>,
        radius: f64,
        color: Color,
        alpha: f64,
    ) -> Result<(), ParticleError> {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
            alpha,
        });
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        color: Color,
        alpha: f64,
        width: f64,
    ) -> Result<(), ParticleError> {
        self.commands.push(DrawCommand::StrokeLine {
            from,
            to,
            color,
            alpha,
            width,
        });
        Ok(())
    }
}
