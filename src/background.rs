// JS-facing wrapper that hosts the animator on a page canvas. Owns the
// requestAnimationFrame callback and the window resize listener, and tears
// both down on `stop` (or when JS frees the object).

use crate::animator::Animator;
use crate::canvas::{CanvasSurface, RafScheduler, Timer};
use crate::config::FieldConfig;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, HtmlCanvasElement, Window};

type CanvasAnimator = Animator<CanvasSurface, RafScheduler>;

#[wasm_bindgen]
pub struct ParticleBackground {
    window: Window,
    canvas: HtmlCanvasElement,
    animator: Rc<RefCell<CanvasAnimator>>,
    resize_listener: Option<Closure<dyn FnMut()>>,
}

#[wasm_bindgen]
impl ParticleBackground {
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        options: Option<JsValue>,
    ) -> Result<ParticleBackground, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let config = options
            .as_ref()
            .map(FieldConfig::from_js)
            .unwrap_or_default();
        let profile = config.profile;
        let animator: Rc<RefCell<CanvasAnimator>> = Rc::new(RefCell::new(Animator::new(
            config,
            RafScheduler::new(window.clone()),
        )));

        // Weak so the closure held by the scheduler doesn't keep the animator alive
        let weak = Rc::downgrade(&animator);
        let on_frame = Closure::wrap(Box::new(move |_timestamp: f64| {
            if let Some(animator) = weak.upgrade() {
                let _timer = if profile {
                    Some(Timer::new("ParticleBackground::on_frame"))
                } else {
                    None
                };
                animator.borrow_mut().on_frame();
            }
        }) as Box<dyn FnMut(f64)>);
        animator.borrow_mut().scheduler_mut().set_callback(on_frame);

        Ok(ParticleBackground {
            window,
            canvas,
            animator,
            resize_listener: None,
        })
    }

    /// Sizes the canvas to the viewport, spawns particles and starts the loop.
    pub fn start(&mut self) -> Result<(), JsValue> {
        self.stop();
        let (width, height) = viewport_size(&self.window)?;
        let surface = CanvasSurface::new(self.canvas.clone())?;
        self.animator.borrow_mut().mount(surface, width, height);
        console::log_1(
            &format!(
                "particle background: {} particles at {}x{}",
                self.particle_count(),
                width,
                height
            )
            .into(),
        );

        let weak = Rc::downgrade(&self.animator);
        let window = self.window.clone();
        let on_resize = Closure::wrap(Box::new(move || {
            let animator = match weak.upgrade() {
                Some(animator) => animator,
                None => return,
            };
            match viewport_size(&window) {
                Ok((width, height)) => animator.borrow_mut().resize(width, height),
                Err(err) => console::warn_2(&"particle background: bad viewport size".into(), &err),
            };
        }) as Box<dyn FnMut()>);
        self.window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        self.resize_listener = Some(on_resize);
        Ok(())
    }

    /// Regenerates the particle set for an explicit canvas size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.animator.borrow_mut().resize(width, height);
    }

    /// Stops the loop and detaches the resize listener. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if let Some(listener) = self.resize_listener.take() {
            if let Err(err) = self
                .window
                .remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
            {
                console::warn_2(
                    &"particle background: failed to remove resize listener".into(),
                    &err,
                );
            }
        }
        if self.animator.borrow_mut().unmount().is_some() {
            console::log_1(&"particle background stopped".into());
        }
    }

    #[wasm_bindgen(getter, js_name = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.animator.borrow().field().len()
    }

    #[wasm_bindgen(getter, js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.animator.borrow().is_running()
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        self.stop();
    }
}

fn viewport_size(window: &Window) -> Result<(u32, u32), JsValue> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerWidth is not a number"))?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerHeight is not a number"))?;
    Ok((width.max(0.0) as u32, height.max(0.0) as u32))
}
