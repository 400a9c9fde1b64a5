use crate::constants::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// CPU-side RGBA8 image of the hero wordmark, ready for upload.
pub struct TextImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Rasterize the hero wordmark into an offscreen 2D canvas.
///
/// The texture keeps the viewport aspect so the text is not stretched when
/// sampled across the full-screen surface.
pub fn rasterize_hero_text(document: &web::Document, aspect: f32) -> anyhow::Result<TextImage> {
    let width = TEXT_TEXTURE_WIDTH;
    let aspect = if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    };
    let height = ((width as f32 / aspect) as u32).clamp(1, TEXT_TEXTURE_MAX_HEIGHT);

    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let w = width as f64;
    let h = height as f64;
    ctx.clear_rect(0.0, 0.0, w, h);
    ctx.set_font(&format!("700 {}px {}", w * HERO_FONT_SCALE, HERO_FONT_FAMILY));
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_fill_style_str(HERO_TEXT_COLOR);
    ctx.fill_text(HERO_TEXT, w / 2.0, h * HERO_TEXT_Y)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let data = ctx
        .get_image_data(0.0, 0.0, w, h)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .data();
    Ok(TextImage {
        width,
        height,
        rgba: data.0,
    })
}
