//! Browser smoke tests, run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use particle_background::surface::Surface;
use particle_background::web::CanvasSurface;
use particle_background::{Color, ParticleBackground, ParticleOptions};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

fn canvas() -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn background_fills_window_and_toggles() {
    let background = ParticleBackground::new(canvas()).unwrap();
    assert_eq!(background.particle_count(), 100);
    assert!(!background.is_running());

    background.start().unwrap();
    background.start().unwrap();
    assert!(background.is_running());

    background.stop();
    background.stop();
    assert!(!background.is_running());
}

#[wasm_bindgen_test]
fn options_are_applied_and_validated() {
    let mut options = ParticleOptions::sparse();
    options.set_palette(&js_sys::Array::of2(&"#fff".into(), &"#60a5fa".into())).unwrap();
    let background = ParticleBackground::with_options(canvas(), &options, Some(7)).unwrap();
    assert_eq!(background.particle_count(), 50);

    options.set_radius(0.0, 1.0);
    assert!(options.validate().is_err());
    assert!(options.set_palette(&js_sys::Array::of1(&"blue".into())).is_err());
}

#[wasm_bindgen_test]
fn resize_sets_canvas_dimensions() {
    let background = ParticleBackground::new(canvas()).unwrap();
    background.resize(320, 200).unwrap();

    let canvas = canvas();
    let mut surface = CanvasSurface::new(canvas.clone()).unwrap();
    surface.set_dimensions(64, 48).unwrap();
    surface.fill_circle([10.0, 10.0], 2.0, Color::WHITE, 0.6).unwrap();
    assert_eq!((canvas.width(), canvas.height()), (64, 48));
}
