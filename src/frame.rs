use crate::dom;
use crate::texture::TextureSlot;
use hexfield_core::{Camera, GpuState, OrbitControls, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Camera and controller, shared between the frame loop and the listeners.
pub struct View {
    pub camera: Camera,
    pub controls: OrbitControls,
}

pub type SharedView = Rc<RefCell<View>>;

pub struct FrameContext<'a> {
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub view: SharedView,
    pub gpu: Option<GpuState<'a>>,
    pub env_texture: TextureSlot,

    /// Frames drawn so far; drives the shader's wave.
    pub time: f32,
    pub window_size: (f64, f64),
    pub input_size: (f64, f64),
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        self.sync_view_size();
        self.time += 1.0;

        {
            let mut guard = self.view.borrow_mut();
            let View { camera, controls } = &mut *guard;
            controls.update(camera);
            // nobody subscribes on the web
            controls.drain_events();
        }

        if let Some(g) = &mut self.gpu {
            if let Some(image) = self.env_texture.borrow_mut().take() {
                g.set_env_texture(image.width, image.height, &image.rgba);
            }
            g.set_camera(&self.view.borrow().camera);
            g.set_time(self.time);
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            match g.render() {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }

    /// Follow window resizes: camera aspect from the window, controller
    /// viewport from the element the listeners sit on.
    fn sync_view_size(&mut self) {
        let window_size = dom::window_size();
        let input_size = dom::input_viewport(&self.document);
        if window_size == self.window_size && input_size == self.input_size {
            return;
        }
        self.window_size = window_size;
        self.input_size = input_size;
        let mut view = self.view.borrow_mut();
        view.camera.set_aspect(window_size.0 / window_size.1);
        view.controls
            .set_viewport(Viewport::new(input_size.0, input_size.1));
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<GpuState<'static>> {
    let instance = wgpu::Instance::default();
    let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
        Ok(s) => s,
        Err(e) => {
            log::error!("WebGPU surface error: {:?}", e);
            return None;
        }
    };
    match GpuState::new(&instance, surface, canvas.width(), canvas.height()).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
