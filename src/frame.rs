use crate::constants::PARTICLE_CANVAS_CSS;
use crate::dom;
use crate::timing;
use folio_core::constants::{PARTICLE_COUNT, RESIZE_DEBOUNCE_MS};
use folio_core::ParticleField;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub host: web::HtmlElement,
    pub field: ParticleField,
}

impl FrameContext {
    /// Match the canvas backing size to its host element.
    pub fn sync_size(&mut self) {
        let w = self.host.offset_width().max(0) as u32;
        let h = self.host.offset_height().max(0) as u32;
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        self.field.resize(Vec2::new(w as f32, h as f32));
    }

    /// Wipe the canvas and drop every particle.
    pub fn clear(&mut self) {
        let bounds = self.field.bounds();
        self.ctx
            .clear_rect(0.0, 0.0, bounds.x as f64, bounds.y as f64);
        self.field.clear();
    }

    pub fn frame(&mut self) {
        let bounds = self.field.bounds();
        self.ctx
            .clear_rect(0.0, 0.0, bounds.x as f64, bounds.y as f64);
        self.field.step();
        for p in self.field.particles() {
            self.ctx.begin_path();
            if self
                .ctx
                .arc(p.position.x as f64, p.position.y as f64, p.radius as f64, 0.0, TAU)
                .is_err()
            {
                continue;
            }
            self.ctx.set_fill_style_str(&p.fill_style());
            self.ctx.fill();
        }
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Stops a running particle loop.
pub struct AnimationHandle {
    frame_ctx: Rc<RefCell<FrameContext>>,
    running: Rc<Cell<bool>>,
    frame_id: Rc<Cell<Option<i32>>>,
    tick: Tick,
}

impl AnimationHandle {
    /// Cancel the pending frame, release the frame callback and blank the
    /// canvas.
    pub fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let (Some(id), Some(w)) = (self.frame_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
        self.frame_ctx.borrow_mut().clear();
        log::info!("[particles] stopped");
    }
}

/// Overlay a transparent canvas on `host` and animate drifting particles on it.
pub fn start_particles(document: &web::Document, host: web::HtmlElement) -> anyhow::Result<AnimationHandle> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(dom::js_err)?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("canvas element has unexpected type"))?;
    canvas.style().set_css_text(PARTICLE_CANVAS_CSS);
    dom::set_style(&host, "position", "relative");
    host.append_child(&canvas).map_err(dom::js_err)?;

    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(dom::js_err)?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("2d context has unexpected type"))?;

    let size = Vec2::new(host.offset_width() as f32, host.offset_height() as f32);
    let field = ParticleField::new(PARTICLE_COUNT, size, &mut rand::thread_rng());
    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        canvas,
        ctx,
        host,
        field,
    }));
    frame_ctx.borrow_mut().sync_size();

    if let Some(window) = web::window() {
        let resize_ctx = frame_ctx.clone();
        let mut on_resize = timing::debounce(RESIZE_DEBOUNCE_MS, move || {
            resize_ctx.borrow_mut().sync_size();
        });
        dom::listen(&window, "resize", move |_: web::Event| on_resize());
    }

    let handle = start_loop(frame_ctx);
    log::info!("[particles] started with {} particles", PARTICLE_COUNT);
    Ok(handle)
}

fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> AnimationHandle {
    let running = Rc::new(Cell::new(true));
    let frame_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: Tick = Rc::new(RefCell::new(None));

    let loop_ctx = frame_ctx.clone();
    let tick_clone = tick.clone();
    let running_tick = running.clone();
    let frame_id_tick = frame_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running_tick.get() {
            return;
        }
        loop_ctx.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            frame_id_tick.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
        }
    }) as Box<dyn FnMut()>));

    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        frame_id.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }

    AnimationHandle {
        frame_ctx,
        running,
        frame_id,
        tick,
    }
}
