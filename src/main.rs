//! Circle Bounce entry point
//!
//! Handles platform-specific initialization and runs the animation loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use circle_bounce::SceneConfig;
    use circle_bounce::consts::CANVAS_ID;
    use circle_bounce::render::{CanvasSurface, Surface};
    use circle_bounce::sim::Scene;

    /// Scene plus the canvas it is drawn on
    struct AnimationLoop {
        scene: Scene,
        surface: CanvasSurface,
    }

    impl AnimationLoop {
        fn tick(&mut self) {
            self.scene.frame(&mut self.surface);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Circle Bounce starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let config = SceneConfig::load(&canvas);

        let mut surface = CanvasSurface::new(canvas).expect("Failed to get 2d context");
        surface.fit_to_viewport(&window);
        surface.set_background(&config.background);

        let size = surface.size();
        let seed = config.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let scene = Scene::generate(&config, size, seed);

        let app = Rc::new(RefCell::new(AnimationLoop { scene, surface }));

        request_animation_frame(app);

        log::info!("Circle Bounce running!");
    }

    fn request_animation_frame(app: Rc<RefCell<AnimationLoop>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            frame_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<AnimationLoop>>) {
        app.borrow_mut().tick();
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use circle_bounce::SceneConfig;
    use circle_bounce::consts::{NATIVE_FRAMES, NATIVE_SEED};
    use circle_bounce::render::{RecordingSurface, Surface};
    use circle_bounce::sim::Scene;

    env_logger::init();
    log::info!("Circle Bounce (native) starting...");
    log::info!("Native mode runs headless - serve the wasm build for the canvas version");

    let config = SceneConfig::load();
    let mut surface = RecordingSurface::new(800.0, 600.0);
    let seed = config.seed.unwrap_or(NATIVE_SEED);
    let mut scene = Scene::generate(&config, surface.size(), seed);

    let mut bounces = 0;
    let mut colliding_frames = 0;
    let mut max_pairs = 0;
    for _ in 0..NATIVE_FRAMES {
        let stats = scene.frame(&mut surface);
        bounces += stats.bounces;
        if stats.overlapping_pairs > 0 {
            colliding_frames += 1;
        }
        max_pairs = max_pairs.max(stats.overlapping_pairs);
    }

    println!(
        "{} circles, {} frames: {} bounces, {} frames with overlaps (max {} pairs)",
        scene.circles.len(),
        scene.frame_count(),
        bounces,
        colliding_frames,
        max_pairs
    );
    for circle in &scene.circles {
        println!(
            "  {:>4} at ({:7.1}, {:7.1}) r={:4.1} vel=({:+.2}, {:+.2}) {}",
            circle.label, circle.pos.x, circle.pos.y, circle.radius, circle.vel.x, circle.vel.y, circle.color
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
