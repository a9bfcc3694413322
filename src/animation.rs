//! Drives a [`ParticleField`] from the host's frame signal.
//!
//! `Animation` is a two-state machine. `start` subscribes to resize
//! notifications and requests the first frame; every frame delivered while
//! running does one step, one render and requests the next. `stop` cancels the
//! pending request and unsubscribes. Both are no-ops when already in the target
//! state, so a cycle is never registered twice.

use std::mem;

use crate::error::ParticleError;
use crate::field::ParticleField;
use crate::surface::Surface;

/// One-shot "call me before the next paint" requests.
///
/// The scheduler only books the request; the host calls
/// [`Animation::on_frame`] when it fires.
pub trait FrameScheduler {
    type Handle;

    fn request_frame(&mut self) -> Result<Self::Handle, ParticleError>;

    fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Surface size-change notifications. While subscribed, the host forwards
/// events to [`Animation::on_resize`].
pub trait ResizeEvents {
    fn subscribe(&mut self) -> Result<(), ParticleError>;

    fn unsubscribe(&mut self);
}

#[derive(Debug, PartialEq)]
pub enum AnimationState<H> {
    Idle,
    Running { pending: H },
}

pub struct Animation<S, F: FrameScheduler, R> {
    field: ParticleField,
    surface: S,
    frames: F,
    resize: R,
    state: AnimationState<F::Handle>,
}

impl<S, F, R> Animation<S, F, R>
where
    S: Surface,
    F: FrameScheduler,
    R: ResizeEvents,
{
    pub fn new(field: ParticleField, surface: S, frames: F, resize: R) -> Self {
        Animation {
            field,
            surface,
            frames,
            resize,
            state: AnimationState::Idle,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, AnimationState::Running { .. })
    }

    pub fn state(&self) -> &AnimationState<F::Handle> {
        &self.state
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn frames_mut(&mut self) -> &mut F {
        &mut self.frames
    }

    pub fn resize_events_mut(&mut self) -> &mut R {
        &mut self.resize
    }

    pub fn start(&mut self) -> Result<(), ParticleError> {
        if self.is_running() {
            return Ok(());
        }
        self.resize.subscribe()?;
        match self.frames.request_frame() {
            Ok(pending) => {
                self.state = AnimationState::Running { pending };
                Ok(())
            }
            Err(e) => {
                self.resize.unsubscribe();
                Err(e)
            }
        }
    }

    pub fn stop(&mut self) {
        if let AnimationState::Running { pending } =
            mem::replace(&mut self.state, AnimationState::Idle)
        {
            self.frames.cancel_frame(pending);
            self.resize.unsubscribe();
        }
    }

    /// Runs one tick. A frame that fires after `stop` is ignored.
    ///
    /// If rendering or rescheduling fails the animation drops back to idle.
    pub fn on_frame(&mut self) -> Result<(), ParticleError> {
        if !self.is_running() {
            return Ok(());
        }

        self.field.step();
        let next = self
            .field
            .render(&mut self.surface)
            .and_then(|_| self.frames.request_frame());
        match next {
            Ok(pending) => {
                self.state = AnimationState::Running { pending };
                Ok(())
            }
            Err(e) => {
                // the fired request is spent, nothing to cancel
                self.state = AnimationState::Idle;
                self.resize.unsubscribe();
                Err(e)
            }
        }
    }

    /// Applies a host resize to both the surface and the field.
    pub fn on_resize(&mut self, width: u32, height: u32) -> Result<(), ParticleError> {
        self.surface.set_dimensions(width, height)?;
        self.field.resize(width, height);
        Ok(())
    }
}

impl<S, F: FrameScheduler, R> Drop for Animation<S, F, R> {
    fn drop(&mut self) {
        // same as stop(), minus the bounds that Drop impls can't add
        if let AnimationState::Running { pending } =
            mem::replace(&mut self.state, AnimationState::Idle)
        {
            self.frames.cancel_frame(pending);
        }
    }
}
