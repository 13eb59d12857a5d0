//! Text shaping and font resolution for slide layouts.
//!
//! Parley does the shaping/line layout; measurement for centering comes from
//! the built layout's actual extents, never from a character-count estimate.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::foundation::error::{DeckcastError, DeckcastResult};

/// RGBA8 brush color carried through Parley styles into glyph rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrushRgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Title/primary text color.
pub const WHITE: TextBrushRgba8 = TextBrushRgba8 {
    r: 255,
    g: 255,
    b: 255,
    a: 255,
};

/// Body/secondary text color (#ECF0F1).
pub const CLOUD: TextBrushRgba8 = TextBrushRgba8 {
    r: 236,
    g: 240,
    b: 241,
    a: 255,
};

/// Which face a layout block asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontRole {
    Bold,
    Regular,
}

/// Resolved font data for the two faces slide layouts use.
///
/// Loading never fails over a missing individual file: candidates are tried
/// in order and the first usable face wins, with the regular face standing in
/// for a missing bold (and vice versa). Only a machine with no usable font
/// anywhere produces an error.
#[derive(Clone)]
pub struct FontLibrary {
    bold: Arc<Vec<u8>>,
    regular: Arc<Vec<u8>>,
}

impl std::fmt::Debug for FontLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontLibrary")
            .field("bold_len", &self.bold.len())
            .field("regular_len", &self.regular.len())
            .finish()
    }
}

const BOLD_CANDIDATES: &[&str] = &[
    "DejaVuSans-Bold.ttf",
    "LiberationSans-Bold.ttf",
    "FreeSansBold.ttf",
    "Arial Bold.ttf",
];

const REGULAR_CANDIDATES: &[&str] = &[
    "DejaVuSans.ttf",
    "LiberationSans-Regular.ttf",
    "FreeSans.ttf",
    "Arial.ttf",
];

const FONT_DIRS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/dejavu",
    "/usr/share/fonts/truetype/liberation",
    "/usr/share/fonts/liberation",
    "/usr/share/fonts/TTF",
    "/usr/share/fonts/gnu-free",
    "/usr/share/fonts/truetype/freefont",
    "/System/Library/Fonts/Supplemental",
    "C:\\Windows\\Fonts",
];

impl FontLibrary {
    /// Locate a bold and a regular face, trying `font_dir` first and then the
    /// well-known system locations.
    pub fn load(font_dir: Option<&Path>) -> DeckcastResult<Self> {
        let dirs = search_dirs(font_dir);

        let bold = find_named(&dirs, BOLD_CANDIDATES);
        let regular = find_named(&dirs, REGULAR_CANDIDATES);

        // Last resort: any truetype face found by scanning the directories.
        let fallback = || scan_any_face(&dirs);

        let (bold, regular) = match (bold, regular) {
            (Some(b), Some(r)) => (b, r),
            (Some(b), None) => (b.clone(), b),
            (None, Some(r)) => (r.clone(), r),
            (None, None) => {
                let any = fallback().ok_or_else(|| {
                    DeckcastError::render(
                        "no usable truetype font found in any known font directory",
                    )
                })?;
                (any.clone(), any)
            }
        };

        Ok(Self {
            bold: Arc::new(bold),
            regular: Arc::new(regular),
        })
    }

    /// Build a library from raw font bytes (test seam).
    pub fn from_bytes(bold: Vec<u8>, regular: Vec<u8>) -> Self {
        Self {
            bold: Arc::new(bold),
            regular: Arc::new(regular),
        }
    }

    /// Font bytes for a role.
    pub fn bytes(&self, role: FontRole) -> &Arc<Vec<u8>> {
        match role {
            FontRole::Bold => &self.bold,
            FontRole::Regular => &self.regular,
        }
    }
}

fn search_dirs(font_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(d) = font_dir {
        dirs.push(d.to_path_buf());
    }
    dirs.extend(FONT_DIRS.iter().map(PathBuf::from));
    dirs
}

fn find_named(dirs: &[PathBuf], names: &[&str]) -> Option<Vec<u8>> {
    for dir in dirs {
        for name in names {
            if let Ok(bytes) = std::fs::read(dir.join(name)) {
                return Some(bytes);
            }
        }
    }
    None
}

fn scan_any_face(dirs: &[PathBuf]) -> Option<Vec<u8>> {
    for dir in dirs {
        let Ok(rd) = std::fs::read_dir(dir) else {
            continue;
        };
        for entry in rd.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
                continue;
            };
            let ext = ext.to_ascii_lowercase();
            if ext != "ttf" && ext != "otf" && ext != "ttc" {
                continue;
            }
            if let Ok(bytes) = std::fs::read(&path) {
                return Some(bytes);
            }
        }
    }
    None
}

/// Stateful helper for building Parley layouts from raw font bytes.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Construct an engine with fresh Parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Shape and lay out plain text with the given font bytes and styling.
    ///
    /// Explicit `\n` in `text` produces hard line breaks. The returned layout
    /// exposes the measured extents used for centering.
    pub fn layout_plain(
        &mut self,
        text: &str,
        font_bytes: &[u8],
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> DeckcastResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(DeckcastError::render("text size_px must be finite and > 0"));
        }

        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| DeckcastError::render("no font families registered from font bytes"))?;
        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| DeckcastError::render("registered font family has no name"))?
            .to_string();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }

    /// Measured pixel width of `text` in the given font and size.
    pub fn measure_width(
        &mut self,
        text: &str,
        font_bytes: &[u8],
        size_px: f32,
    ) -> DeckcastResult<f32> {
        let layout = self.layout_plain(text, font_bytes, size_px, TextBrushRgba8::default())?;
        Ok(layout.width())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
