//! Canvas 2D implementation of the game's drawing surface

use glam::Vec2;
use runner_core::{Surface, Viewport};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::error::ClientError;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, ClientError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(ClientError::js)?
            .ok_or(ClientError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ClientError::NoContext)?;
        Ok(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("arc failed: {:?}", e);
            return;
        }
        self.ctx.fill();
    }

    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        self.ctx.move_to(a.x as f64, a.y as f64);
        self.ctx.line_to(b.x as f64, b.y as f64);
        self.ctx.line_to(c.x as f64, c.y as f64);
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.set_font(font);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        if let Err(e) = self.ctx.fill_text(text, pos.x as f64, pos.y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }
}

/// Match the canvas backing store to its laid-out size, falling back to the
/// window when the canvas has no layout yet. Returns the resulting viewport.
pub fn fit_canvas(canvas: &HtmlCanvasElement, window: &Window) -> Viewport {
    let rect = canvas.get_bounding_client_rect();
    let width = if rect.width() > 0.0 {
        rect.width()
    } else {
        window_dimension(window.inner_width(), canvas.width())
    };
    let height = if rect.height() > 0.0 {
        rect.height()
    } else {
        window_dimension(window.inner_height(), canvas.height())
    };

    let viewport = backing_viewport(width, height);
    canvas.set_width(viewport.width as u32);
    canvas.set_height(viewport.height as u32);
    log::info!("canvas sized to {}x{}", viewport.width, viewport.height);

    viewport
}

/// Backing stores hold whole pixels; the viewport must match them exactly
fn backing_viewport(width: f64, height: f64) -> Viewport {
    Viewport::new((width as u32) as f32, (height as u32) as f32)
}

fn window_dimension(value: Result<JsValue, JsValue>, current: u32) -> f64 {
    value
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(current as f64)
}
