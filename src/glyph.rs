//! Text silhouette sampling.
//!
//! A morph target is not a mesh of the text but a point cloud approximating
//! its coverage: the string is rasterized onto an off-screen alpha bitmap,
//! then every sufficiently opaque pixel is kept with a configurable
//! probability and mapped into a centered, y-up coordinate system. The
//! result length depends on glyph coverage and thinning; callers must cope
//! with any length, including zero.
//!
//! Rasterization uses a compiled-in 5x7 face scaled to the requested size.
//! Cells are filled with anti-aliasing, so pixels along glyph edges carry
//! partial alpha and the threshold behaves as a real coverage cutoff rather
//! than a binary mask.

use crate::Vec2;
use rand::Rng;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Rect, Transform};

const GLYPH_ROWS: usize = 7;
const GLYPH_COLS: usize = 5;
/// Horizontal cells consumed per character: glyph plus one blank column.
const GLYPH_ADVANCE: usize = GLYPH_COLS + 1;

/// How a string is rasterized and thinned into silhouette points.
#[derive(Clone, Debug)]
pub struct GlyphStyle {
    /// Glyph height in bitmap pixels.
    pub font_size: f32,
    /// Blank border around the rasterized text, in bitmap pixels.
    pub padding: f32,
    /// Minimum pixel alpha (exclusive) for a pixel to count as covered.
    pub alpha_threshold: u8,
    /// Probability that a covered pixel becomes a point. Controls density.
    pub keep_probability: f32,
}

impl GlyphStyle {
    /// Style with the stock intro parameters.
    pub fn new() -> Self {
        Self {
            font_size: 120.0,
            padding: 30.0,
            alpha_threshold: 150,
            keep_probability: 0.55,
        }
    }

    /// Set the glyph height in bitmap pixels.
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Set the alpha cutoff for coverage.
    pub fn with_alpha_threshold(mut self, threshold: u8) -> Self {
        self.alpha_threshold = threshold;
        self
    }

    /// Set the point-keeping probability (1.0 keeps every covered pixel).
    pub fn with_keep_probability(mut self, probability: f32) -> Self {
        self.keep_probability = probability.clamp(0.0, 1.0);
        self
    }
}

impl Default for GlyphStyle {
    fn default() -> Self {
        Self::new()
    }
}

/// Rasterize `text` onto an off-screen bitmap sized to the text plus padding.
///
/// Returns `None` when nothing can be rasterized (empty string or a
/// degenerate font size) rather than producing a zero-sized surface.
pub fn rasterize(text: &str, style: &GlyphStyle) -> Option<Pixmap> {
    let cell = style.font_size / GLYPH_ROWS as f32;
    if !(cell > 0.0) {
        return None;
    }

    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return None;
    }

    // Width of the glyph run itself, without the trailing advance gap.
    let text_width = (chars.len() * GLYPH_ADVANCE - 1) as f32 * cell;
    let width = (text_width + style.padding * 2.0).ceil() as u32;
    let height = (style.font_size + style.padding * 2.0).ceil() as u32;

    let mut pixmap = Pixmap::new(width, height)?;

    let mut paint = Paint::default();
    paint.set_color_rgba8(255, 255, 255, 255);
    paint.anti_alias = true;

    let x0 = (width as f32 - text_width) / 2.0;
    let y0 = (height as f32 - style.font_size) / 2.0;

    for (ci, ch) in chars.iter().enumerate() {
        let rows = pattern(*ch);
        let gx = x0 + (ci * GLYPH_ADVANCE) as f32 * cell;

        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_COLS {
                if (bits >> (GLYPH_COLS - 1 - col)) & 1 == 0 {
                    continue;
                }
                let Some(rect) = Rect::from_xywh(
                    gx + col as f32 * cell,
                    y0 + row as f32 * cell,
                    cell,
                    cell,
                ) else {
                    continue;
                };
                let path = PathBuilder::from_rect(rect);
                pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
            }
        }
    }

    Some(pixmap)
}

/// Sample `text` into centered 2D points.
///
/// The origin sits at the bitmap center, y grows upward, and coordinates are
/// scaled by `font_size / 10` so the silhouette's world extent stays roughly
/// constant across font sizes. An unrasterizable or fully transparent string
/// yields an empty vector.
pub fn silhouette<R: Rng>(text: &str, style: &GlyphStyle, rng: &mut R) -> Vec<Vec2> {
    let Some(pixmap) = rasterize(text, style) else {
        return Vec::new();
    };

    let scale = style.font_size / 10.0;
    let width = pixmap.width();
    let half_w = width as f32 / 2.0;
    let half_h = pixmap.height() as f32 / 2.0;

    let mut points = Vec::new();
    for (i, px) in pixmap.pixels().iter().enumerate() {
        if px.alpha() > style.alpha_threshold && rng.gen::<f32>() < style.keep_probability {
            let x = (i as u32 % width) as f32;
            let y = (i as u32 / width) as f32;
            points.push(Vec2::new((x - half_w) / scale, -(y - half_h) / scale));
        }
    }
    points
}

/// 5x7 coverage rows for one character, most significant bit leftmost.
///
/// Unknown characters (and whitespace) rasterize blank, which degrades the
/// silhouette rather than failing it.
fn pattern(ch: char) -> [u8; GLYPH_ROWS] {
    match ch.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10011, 0b10001, 0b10001, 0b01110],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10010, 0b10001, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001],
        'X' => [0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b01010, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        _ => [0; GLYPH_ROWS],
    }
}
