//! Browser implementations of the surface, frame and resize collaborators,
//! plus the wiring that lets `requestAnimationFrame` and the window's resize
//! event call back into a shared [`Animation`].

use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;

use vecmath::Vector2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::animation::{Animation, FrameScheduler, ResizeEvents};
use crate::color::Color;
use crate::error::ParticleError;
use crate::field::ParticleField;
use crate::surface::Surface;

pub type BrowserAnimation = Animation<CanvasSurface, BrowserFrames, WindowResize>;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    // Grabs the 2d context from a canvas on the DOM
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, ParticleError> {
        let context = canvas
            .get_context("2d")
            .map_err(|e| ParticleError::host("getContext('2d') failed", e))?
            .ok_or_else(|| ParticleError::Host("canvas has no 2d context".to_owned()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ParticleError::Host("context is not a CanvasRenderingContext2d".to_owned()))?;

        Ok(CanvasSurface { canvas, context })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn set_dimensions(&mut self, width: u32, height: u32) -> Result<(), ParticleError> {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
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
        self.context
            .set_fill_style(&JsValue::from_str(&color.to_css_rgba(alpha)));
        self.context.fill_rect(x, y, width, height);
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: Vector2<f64>,
        radius: f64,
        color: Color,
        alpha: f64,
    ) -> Result<(), ParticleError> {
        self.context.begin_path();
        self.context
            .arc(center[0], center[1], radius, 0.0, PI * 2.0)
            .map_err(|e| ParticleError::host("arc failed", e))?;
        self.context
            .set_fill_style(&JsValue::from_str(&color.to_css_rgba(alpha)));
        self.context.fill();
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
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context
            .set_stroke_style(&JsValue::from_str(&color.to_css_rgba(alpha)));
        self.context.set_line_width(width);
        self.context.stroke();
        Ok(())
    }
}

pub struct BrowserFrames {
    window: Window,
    callback: Option<Closure<dyn FnMut()>>,
}

impl BrowserFrames {
    pub fn new(window: Window) -> Self {
        BrowserFrames {
            window,
            callback: None,
        }
    }
}

impl FrameScheduler for BrowserFrames {
    type Handle = i32;

    fn request_frame(&mut self) -> Result<i32, ParticleError> {
        let callback = self
            .callback
            .as_ref()
            .ok_or_else(|| ParticleError::Host("frame callback not installed".to_owned()))?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(|e| ParticleError::host("requestAnimationFrame failed", e))
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Err(e) = self.window.cancel_animation_frame(handle) {
            log!("cancelAnimationFrame({}) failed: {:?}", handle, e);
        }
    }
}

pub struct WindowResize {
    window: Window,
    callback: Option<Closure<dyn FnMut()>>,
    subscribed: bool,
}

impl WindowResize {
    pub fn new(window: Window) -> Self {
        WindowResize {
            window,
            callback: None,
            subscribed: false,
        }
    }
}

impl ResizeEvents for WindowResize {
    fn subscribe(&mut self) -> Result<(), ParticleError> {
        if self.subscribed {
            return Ok(());
        }
        let callback = self
            .callback
            .as_ref()
            .ok_or_else(|| ParticleError::Host("resize callback not installed".to_owned()))?;
        self.window
            .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
            .map_err(|e| ParticleError::host("addEventListener('resize') failed", e))?;
        self.subscribed = true;
        Ok(())
    }

    fn unsubscribe(&mut self) {
        if !self.subscribed {
            return;
        }
        if let Some(callback) = &self.callback {
            if let Err(e) = self
                .window
                .remove_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
            {
                log!("removeEventListener('resize') failed: {:?}", e);
            }
        }
        self.subscribed = false;
    }
}

impl Drop for WindowResize {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

pub fn window() -> Result<Window, ParticleError> {
    web_sys::window().ok_or_else(|| ParticleError::Host("no global `window` exists".to_owned()))
}

// Viewport size in CSS pixels, what the background canvas is stretched to
pub fn window_size(window: &Window) -> Result<(u32, u32), ParticleError> {
    let width = window
        .inner_width()
        .map_err(|e| ParticleError::host("innerWidth unavailable", e))?
        .as_f64()
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .map_err(|e| ParticleError::host("innerHeight unavailable", e))?
        .as_f64()
        .unwrap_or(0.0);
    Ok((width.max(0.0) as u32, height.max(0.0) as u32))
}

/// Binds a field to a canvas and wires the browser callbacks. The callbacks hold
/// only weak references, so dropping the returned animation tears everything down.
pub fn attach(
    field: ParticleField,
    canvas: HtmlCanvasElement,
) -> Result<Rc<RefCell<BrowserAnimation>>, ParticleError> {
    let window = window()?;
    let surface = CanvasSurface::new(canvas)?;
    let animation = Rc::new(RefCell::new(Animation::new(
        field,
        surface,
        BrowserFrames::new(window.clone()),
        WindowResize::new(window.clone()),
    )));

    let weak = Rc::downgrade(&animation);
    let on_frame = Closure::wrap(Box::new(move || {
        if let Some(animation) = weak.upgrade() {
            if let Err(e) = animation.borrow_mut().on_frame() {
                log!("particle frame failed, animation stopped: {}", e);
            }
        }
    }) as Box<dyn FnMut()>);

    let weak = Rc::downgrade(&animation);
    let on_resize = Closure::wrap(Box::new(move || {
        if let Some(animation) = weak.upgrade() {
            let resized = window_size(&window)
                .and_then(|(width, height)| animation.borrow_mut().on_resize(width, height));
            if let Err(e) = resized {
                log!("particle resize failed: {}", e);
            }
        }
    }) as Box<dyn FnMut()>);

    {
        let mut anim = animation.borrow_mut();
        anim.frames_mut().callback = Some(on_frame);
        anim.resize_events_mut().callback = Some(on_resize);
    }
    Ok(animation)
}
