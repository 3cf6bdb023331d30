use std::sync::Arc;

use glam::DVec2;
use hexfield_core::{
    background_settings, build_scene, view_camera, Camera, GpuState, InputEvent, OrbitControls,
    Viewport,
};
use winit::{
    dpi::LogicalSize,
    event::*,
    event_loop::EventLoop,
    keyboard::Key as WinitKey,
    window::{Window, WindowBuilder},
};

mod input;

// Procedural stand-in for the page's environment image.
const PREVIEW_TEXTURE_SIZE: u32 = 256;

fn preview_texture() -> Vec<u8> {
    let n = PREVIEW_TEXTURE_SIZE;
    let mut rgba = Vec::with_capacity((n * n * 4) as usize);
    for y in 0..n {
        for x in 0..n {
            let u = x as f32 / (n - 1) as f32;
            let v = y as f32 / (n - 1) as f32;
            rgba.extend_from_slice(&[
                (40.0 + 180.0 * u) as u8,
                (60.0 + 120.0 * v) as u8,
                (200.0 - 120.0 * u * v) as u8,
                255,
            ]);
        }
    }
    rgba
}

struct App {
    window: Arc<Window>,
    gpu: GpuState<'static>,
    camera: Camera,
    controls: OrbitControls,
    cursor: DVec2,
    touches: input::Touches,
    time: f32,
}

impl App {
    async fn new(window: Arc<Window>) -> anyhow::Result<Self> {
        let scale = window.scale_factor();
        let logical = window.inner_size().to_logical::<f64>(scale);
        let (width, height) = (logical.width.max(1.0), logical.height.max(1.0));

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window.clone())?;
        let size = window.inner_size();
        let mut gpu = GpuState::new(&instance, surface, size.width, size.height).await?;
        gpu.upload_grid(&build_scene(width, height)?);
        gpu.set_env_texture(PREVIEW_TEXTURE_SIZE, PREVIEW_TEXTURE_SIZE, &preview_texture());

        let mut camera = view_camera(width, height);
        let controls = OrbitControls::with_settings(
            &mut camera,
            Viewport::new(width, height),
            background_settings(),
        );
        Ok(Self {
            window,
            gpu,
            camera,
            controls,
            cursor: DVec2::ZERO,
            touches: input::Touches::default(),
            time: 0.0,
        })
    }

    fn feed(&mut self, event: InputEvent) {
        self.controls.handle_event(&mut self.camera, &event);
    }

    fn resize(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        self.gpu.resize_if_needed(size.width, size.height);
        let logical = size.to_logical::<f64>(self.window.scale_factor());
        if logical.width > 0.0 && logical.height > 0.0 {
            self.camera.set_aspect(logical.width / logical.height);
            self.controls
                .set_viewport(Viewport::new(logical.width, logical.height));
        }
    }

    fn to_logical(&self, x: f64, y: f64) -> DVec2 {
        DVec2::new(x, y) / self.window.scale_factor()
    }

    fn frame(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.time += 1.0;
        self.controls.update(&mut self.camera);
        for event in self.controls.drain_events() {
            log::debug!("[controls] {:?}", event);
        }
        self.gpu.set_camera(&self.camera);
        self.gpu.set_time(self.time);
        self.gpu.render()
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("hexfield (native preview)")
            .with_inner_size(LogicalSize::new(1280.0, 720.0))
            .build(&event_loop)?,
    );
    let mut app = pollster::block_on(App::new(window))?;
    log::info!("native preview ready; R resets the view");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => app.resize(size),
            WindowEvent::CursorMoved { position, .. } => {
                app.cursor = app.to_logical(position.x, position.y);
                app.feed(InputEvent::PointerMove { pos: app.cursor });
            }
            WindowEvent::MouseInput { state, button, .. } => match state {
                ElementState::Pressed => app.feed(InputEvent::PointerDown {
                    button: input::map_button(button),
                    pos: app.cursor,
                }),
                ElementState::Released => app.feed(InputEvent::PointerUp),
            },
            WindowEvent::MouseWheel { delta, .. } => app.feed(InputEvent::Wheel {
                delta_y: input::wheel_delta_y(delta),
            }),
            WindowEvent::Touch(touch) => {
                let pos = app.to_logical(touch.location.x, touch.location.y);
                let ev = app.touches.apply(touch.id, touch.phase, pos);
                app.feed(ev);
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match &event.logical_key {
                    WinitKey::Character(c) if c.eq_ignore_ascii_case("r") => {
                        app.controls.reset(&mut app.camera);
                    }
                    key => app.feed(InputEvent::KeyDown {
                        key: input::map_key(key),
                    }),
                }
            }
            WindowEvent::RedrawRequested => match app.frame() {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    app.gpu.reconfigure()
                }
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("render error: {:?}", e),
            },
            _ => {}
        },
        Event::AboutToWait => app.window.request_redraw(),
        _ => {}
    })?;
    Ok(())
}
