//! Glyph bitmaps and the fonts that produce them.

use log::warn;

/// Rows of cells, top to bottom. `true` is a filled cell. Rows may differ in
/// length; a missing cell is neither filled nor blank and is never painted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphBitmap {
    rows: Vec<Vec<bool>>,
}

impl GlyphBitmap {
    /// Reads ASCII art: every non-space character is a filled cell.
    pub fn from_ascii(art: &str) -> Self {
        let rows = art
            .lines()
            .map(|line| line.chars().map(|c| c != ' ').collect())
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn filled_cells(&self) -> usize {
        self.rows.iter().flatten().filter(|&&filled| filled).count()
    }
}

pub trait Font {
    /// Height of one rendered line, in cells.
    fn height(&self) -> usize;

    fn render(&self, text: &str) -> GlyphBitmap;
}

impl<F: Font + ?Sized> Font for &F {
    fn height(&self) -> usize {
        (**self).height()
    }

    fn render(&self, text: &str) -> GlyphBitmap {
        (**self).render(text)
    }
}

const UNIFONT_HEIGHT: usize = 16;
const UNIFONT_HALF_WIDTH: usize = 8;

/// GNU Unifont, 16 cells tall; glyphs are 8 or 16 cells wide.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unifont;

impl Font for Unifont {
    fn height(&self) -> usize {
        UNIFONT_HEIGHT
    }

    fn render(&self, text: &str) -> GlyphBitmap {
        let mut rows = vec![Vec::new(); UNIFONT_HEIGHT];
        for c in text.chars() {
            match unifont::get_glyph(c) {
                Some(glyph) => {
                    let width = glyph.get_width();
                    for (y, row) in rows.iter_mut().enumerate() {
                        row.extend((0..width).map(|x| glyph.get_pixel(x, y)));
                    }
                }
                None => {
                    warn!("no glyph for {:?}, leaving it blank", c);
                    for row in rows.iter_mut() {
                        row.extend(std::iter::repeat(false).take(UNIFONT_HALF_WIDTH));
                    }
                }
            }
        }
        GlyphBitmap { rows }
    }
}
