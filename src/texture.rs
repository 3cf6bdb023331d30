use crate::constants::ENV_IMAGE_ID;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Filled once the environment image has decoded; drained by the frame loop.
pub type TextureSlot = Rc<RefCell<Option<DecodedImage>>>;

/// Decode the page's `<img id="envmap">` into `slot`, now if it has already
/// loaded, otherwise on its `load` event. Without the element the renderer
/// keeps its placeholder texel.
pub fn load_env_image(document: &web::Document, slot: TextureSlot) {
    let Some(img) = document
        .get_element_by_id(ENV_IMAGE_ID)
        .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok())
    else {
        log::info!("[texture] no #{} image, keeping placeholder", ENV_IMAGE_ID);
        return;
    };
    if img.complete() && img.natural_width() > 0 {
        store(&img, &slot);
        return;
    }
    let img_cb = img.clone();
    let closure = Closure::wrap(Box::new(move || {
        store(&img_cb, &slot);
    }) as Box<dyn FnMut()>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_once(true);
    _ = img.add_event_listener_with_callback_and_add_event_listener_options(
        "load",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

fn store(img: &web::HtmlImageElement, slot: &TextureSlot) {
    match decode(img) {
        Ok(image) => {
            log::info!("[texture] decoded {}x{}", image.width, image.height);
            *slot.borrow_mut() = Some(image);
        }
        Err(e) => log::warn!("[texture] decode failed: {:?}", e),
    }
}

/// Read the image's pixels back through an offscreen 2D canvas.
fn decode(img: &web::HtmlImageElement) -> anyhow::Result<DecodedImage> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let (width, height) = (img.natural_width(), img.natural_height());
    if width == 0 || height == 0 {
        anyhow::bail!("image has no pixels");
    }
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    ctx.draw_image_with_html_image_element(img, 0.0, 0.0)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    // fails for cross-origin images without CORS headers
    let data = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    Ok(DecodedImage {
        width,
        height,
        rgba: data.data().0,
    })
}
