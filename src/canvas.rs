// Browser side of the animator: a 2d canvas context as the drawing surface
// and requestAnimationFrame as the frame scheduler

use crate::color::Color;
use crate::scheduler::{FrameHandle, FrameScheduler};
use crate::surface::{Surface, SurfaceLost};
use std::f64::consts::PI;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, CanvasRenderingContext2d, HtmlCanvasElement, Window};

// Logs how long the enclosing scope took to the browser console
pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

impl From<SurfaceLost> for JsValue {
    fn from(err: SurfaceLost) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    // Grabs the 2d context from a canvas on the DOM
    pub fn new(canvas: HtmlCanvasElement) -> Result<CanvasSurface, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(CanvasSurface { canvas, context })
    }
}

impl Surface for CanvasSurface {
    // A canvas removed from the document keeps its context, so check the node
    fn is_available(&self) -> bool {
        self.canvas.is_connected()
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self, width: f64, height: f64) -> Result<(), SurfaceLost> {
        self.context.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: [f64; 2],
        radius: f64,
        color: &Color,
    ) -> Result<(), SurfaceLost> {
        self.context.set_fill_style(&JsValue::from_str(&color.to_css()));
        self.context.begin_path();
        self.context
            .arc(center[0], center[1], radius, 0.0, PI * 2.0)
            .map_err(|_| SurfaceLost)?;
        self.context.fill();
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: [f64; 2],
        to: [f64; 2],
        color: &Color,
        line_width: f64,
    ) -> Result<(), SurfaceLost> {
        self.context.set_stroke_style(&JsValue::from_str(&color.to_css()));
        self.context.set_line_width(line_width);
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.stroke();
        Ok(())
    }
}

// requestAnimationFrame needs a JS function to call back; the owner installs
// it with `set_callback` once the animator it points at exists
pub struct RafScheduler {
    window: Window,
    callback: Option<Closure<dyn FnMut(f64)>>,
}

impl RafScheduler {
    pub fn new(window: Window) -> RafScheduler {
        RafScheduler {
            window,
            callback: None,
        }
    }

    pub fn set_callback(&mut self, callback: Closure<dyn FnMut(f64)>) {
        self.callback = Some(callback);
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let callback = self.callback.as_ref()?;
        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(id) => Some(FrameHandle::new(id)),
            Err(err) => {
                console::warn_2(&"requestAnimationFrame failed".into(), &err);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Err(err) = self.window.cancel_animation_frame(handle.id()) {
            console::warn_2(&"cancelAnimationFrame failed".into(), &err);
        }
    }
}
