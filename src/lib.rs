#![cfg(target_arch = "wasm32")]
use frame::{FrameContext, View};
use hexfield_core::{background_settings, build_scene, view_camera, OrbitControls, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod layout;
mod page;
mod texture;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hexfield-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // page glue works even when the background cannot start
    page::stamp_year(&document);
    page::wire_copy_button(&document);

    let canvas = dom::find_or_create_canvas(&document)?;
    dom::wire_canvas_resize(&canvas);

    let window_size = dom::window_size();
    let input_size = dom::input_viewport(&document);
    let grid = build_scene(window_size.0, window_size.1)?;

    let mut camera = view_camera(window_size.0, window_size.1);
    let controls = OrbitControls::with_settings(
        &mut camera,
        Viewport::new(input_size.0, input_size.1),
        background_settings(),
    );
    let view = Rc::new(RefCell::new(View { camera, controls }));

    let binding = Rc::new(RefCell::new(events::ControlsBinding::attach(
        &document,
        &window,
        view.clone(),
    )));
    events::dispose_on_pagehide(&window, binding);

    let env_texture: texture::TextureSlot = Rc::new(RefCell::new(None));
    texture::load_env_image(&document, env_texture.clone());

    let mut gpu = frame::init_gpu(&canvas).await;
    if let Some(g) = &mut gpu {
        g.upload_grid(&grid);
    }

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        canvas,
        document,
        view,
        gpu,
        env_texture,
        time: 0.0,
        window_size,
        input_size,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
