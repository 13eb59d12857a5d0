//! Per-slide frame composition.
//!
//! Every frame starts from the slide's background image with a
//! semi-transparent black overlay across the full canvas, then draws the
//! slide's text per its layout family. Output is always exactly the video
//! canvas resolution.

use std::sync::Arc;

use image::RgbaImage;

use crate::foundation::core::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::foundation::error::{DeckcastError, DeckcastResult};
use crate::foundation::math::premultiply_rgba8_in_place;
use crate::model::{Slide, SlideKind};
use crate::render::FrameRGBA;
use crate::render::text::{CLOUD, FontLibrary, FontRole, TextBrushRgba8, TextLayoutEngine, WHITE};
use crate::render::wrap;

/// Full-canvas legibility overlay alpha.
const OVERLAY_ALPHA: u8 = 150;

/// Title face point size.
const TITLE_SIZE: f32 = 80.0;
/// Body face point size.
const TEXT_SIZE: f32 = 50.0;
/// Small face point size (fallback layout body).
const SMALL_SIZE: f32 = 40.0;

const TITLE_CENTER_Y: f64 = 400.0;
const SUBTITLE_CENTER_Y: f64 = 550.0;

const HEADING_X: f64 = 100.0;
const HEADING_Y: f64 = 200.0;
const BULLET_X: f64 = 150.0;
const BULLET_START_Y: f64 = 350.0;
const BULLET_STEP_Y: f64 = 100.0;
const BULLET_WRAP_COLS: usize = 60;

const QUOTE_START_Y: f64 = 400.0;
const QUOTE_STEP_Y: f64 = 80.0;
const QUOTE_WRAP_COLS: usize = 40;

const FALLBACK_BODY_Y: f64 = 900.0;
const FALLBACK_WRAP_COLS: usize = 80;

#[derive(Clone, Copy, Debug)]
enum Placement {
    Left(f64),
    Centered,
}

#[derive(Clone, Debug)]
struct TextBlock {
    text: String,
    role: FontRole,
    size: f32,
    brush: TextBrushRgba8,
    x: Placement,
    y: f64,
}

/// Rasterizes one slide plus its background into a canvas-sized frame.
///
/// Holds Parley contexts and a reusable render context; not shared across
/// threads. Parallel render paths construct one renderer per worker.
pub struct SlideRenderer {
    engine: TextLayoutEngine,
    ctx: Option<vello_cpu::RenderContext>,
    fonts: FontLibrary,
    bold_font: vello_cpu::peniko::FontData,
    regular_font: vello_cpu::peniko::FontData,
}

impl SlideRenderer {
    pub fn new(fonts: FontLibrary) -> Self {
        let bold_font = font_data(fonts.bytes(FontRole::Bold));
        let regular_font = font_data(fonts.bytes(FontRole::Regular));
        Self {
            engine: TextLayoutEngine::new(),
            ctx: None,
            fonts,
            bold_font,
            regular_font,
        }
    }

    /// Compose `slide` over `background` into a 1920x1080 frame.
    pub fn render(&mut self, slide: &Slide, background: &RgbaImage) -> DeckcastResult<FrameRGBA> {
        let blocks = layout_blocks(slide);

        let width = CANVAS_WIDTH as u16;
        let height = CANVAS_HEIGHT as u16;
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();

        let bg_paint = background_paint(background)?;
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(bg_paint);
        ctx.fill_rect(&full_canvas_rect());

        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(0, 0, 0, OVERLAY_ALPHA));
        ctx.fill_rect(&full_canvas_rect());

        for block in &blocks {
            let font_bytes = Arc::clone(self.fonts.bytes(block.role));
            let layout =
                self.engine
                    .layout_plain(&block.text, &font_bytes, block.size, block.brush)?;
            let x = match block.x {
                Placement::Left(x) => x,
                Placement::Centered => centered_x(layout.width()),
            };
            let font = match block.role {
                FontRole::Bold => self.bold_font.clone(),
                FontRole::Regular => self.regular_font.clone(),
            };
            draw_layout(&mut ctx, &layout, &font, x, block.y);
        }

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.render_to_pixmap(&mut pixmap);
        self.ctx = Some(ctx);

        Ok(FrameRGBA {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

/// Horizontal origin that centers a run of the given measured width.
pub(crate) fn centered_x(measured_width: f32) -> f64 {
    (f64::from(CANVAS_WIDTH) - f64::from(measured_width)) / 2.0
}

fn full_canvas_rect() -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(0.0, 0.0, f64::from(CANVAS_WIDTH), f64::from(CANVAS_HEIGHT))
}

fn font_data(bytes: &Arc<Vec<u8>>) -> vello_cpu::peniko::FontData {
    vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes.as_ref().clone()), 0)
}

/// Compute the ordered text blocks for a slide per its layout family.
fn layout_blocks(slide: &Slide) -> Vec<TextBlock> {
    let mut blocks = Vec::new();
    let title = slide.title.as_deref().unwrap_or("").trim();

    match slide.kind() {
        SlideKind::Title => {
            if !title.is_empty() {
                blocks.push(TextBlock {
                    text: title.to_string(),
                    role: FontRole::Bold,
                    size: TITLE_SIZE,
                    brush: WHITE,
                    x: Placement::Centered,
                    y: TITLE_CENTER_Y,
                });
            }
            if let Some(subtitle) = slide.subtitle.as_deref().map(str::trim)
                && !subtitle.is_empty()
            {
                blocks.push(TextBlock {
                    text: subtitle.to_string(),
                    role: FontRole::Regular,
                    size: TEXT_SIZE,
                    brush: CLOUD,
                    x: Placement::Centered,
                    y: SUBTITLE_CENTER_Y,
                });
            }
        }
        SlideKind::Bullets => {
            if !title.is_empty() {
                blocks.push(TextBlock {
                    text: title.to_string(),
                    role: FontRole::Bold,
                    size: TITLE_SIZE,
                    brush: WHITE,
                    x: Placement::Left(HEADING_X),
                    y: HEADING_Y,
                });
            }
            let mut y = BULLET_START_Y;
            if let Some(content) = &slide.content {
                for item in content.as_items() {
                    let wrapped = wrap::fill(item, BULLET_WRAP_COLS);
                    blocks.push(TextBlock {
                        text: format!("\u{2022} {wrapped}"),
                        role: FontRole::Regular,
                        size: TEXT_SIZE,
                        brush: CLOUD,
                        x: Placement::Left(BULLET_X),
                        y,
                    });
                    y += BULLET_STEP_Y;
                }
            }
        }
        SlideKind::Quote => {
            if let Some(content) = &slide.content {
                let quoted = format!("\"{}\"", content.joined_text());
                let mut y = QUOTE_START_Y;
                // Each wrapped line is centered independently.
                for line in wrap::wrap(&quoted, QUOTE_WRAP_COLS) {
                    blocks.push(TextBlock {
                        text: line,
                        role: FontRole::Regular,
                        size: TEXT_SIZE,
                        brush: WHITE,
                        x: Placement::Centered,
                        y,
                    });
                    y += QUOTE_STEP_Y;
                }
            }
        }
        SlideKind::Other => {
            if !title.is_empty() {
                blocks.push(TextBlock {
                    text: title.to_string(),
                    role: FontRole::Bold,
                    size: TITLE_SIZE,
                    brush: WHITE,
                    x: Placement::Left(HEADING_X),
                    y: HEADING_Y,
                });
            }
            if let Some(body) = slide.content.as_ref().and_then(|c| c.first_text()) {
                blocks.push(TextBlock {
                    text: wrap::fill(body, FALLBACK_WRAP_COLS),
                    role: FontRole::Regular,
                    size: SMALL_SIZE,
                    brush: CLOUD,
                    x: Placement::Left(HEADING_X),
                    y: FALLBACK_BODY_Y,
                });
            }
        }
    }

    blocks
}

fn draw_layout(
    ctx: &mut vello_cpu::RenderContext,
    layout: &parley::Layout<TextBrushRgba8>,
    font: &vello_cpu::peniko::FontData,
    x: f64,
    y: f64,
) {
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((x, y)));
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let brush = run.style().brush;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                brush.r, brush.g, brush.b, brush.a,
            ));
            let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
}

/// Build the canvas-filling background paint, normalizing size if needed.
fn background_paint(background: &RgbaImage) -> DeckcastResult<vello_cpu::Image> {
    let resized;
    let img = if background.dimensions() == (CANVAS_WIDTH, CANVAS_HEIGHT) {
        background
    } else {
        resized = image::imageops::resize(
            background,
            CANVAS_WIDTH,
            CANVAS_HEIGHT,
            image::imageops::FilterType::Triangle,
        );
        &resized
    };

    let mut bytes = img.as_raw().clone();
    premultiply_rgba8_in_place(&mut bytes);
    let pixmap = pixmap_from_premul_bytes(&bytes, CANVAS_WIDTH, CANVAS_HEIGHT)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> DeckcastResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| DeckcastError::render("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| DeckcastError::render("pixmap height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(DeckcastError::render("pixmap byte len mismatch"));
    }

    let mut pixels = Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(
        (width as usize) * (height as usize),
    );
    for px in bytes.chunks_exact(4) {
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], px[3],
        ]));
    }
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels, w, h, true,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/slide.rs"]
mod tests;
