use da_core::charset::GlyphLut;
use da_core::frame::{AsciiGrid, LumaFrame};
use rayon::prelude::*;

/// Map a frame into an ASCII grid, one glyph per sample.
///
/// Grid cells are mapped back onto frame pixels, so a frame already resized
/// to the grid size is rendered sample for sample. Rows are filled in
/// parallel; the result does not depend on scheduling.
///
/// # Example
/// ```
/// use da_core::frame::{AsciiGrid, LumaFrame};
/// use da_core::charset::GlyphLut;
/// use da_ascii::luminance::process_luminance;
///
/// let frame = LumaFrame::filled(4, 2, 255);
/// let mut grid = AsciiGrid::new(4, 2);
/// process_luminance(&frame, &GlyphLut::default(), &mut grid);
/// assert_eq!(grid.row_string(0), "    ");
/// ```
pub fn process_luminance(frame: &LumaFrame, lut: &GlyphLut, grid: &mut AsciiGrid) {
    let width = grid.width.max(1);
    let height = grid.height.max(1);
    grid.cells
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(cy, row)| {
            // u64 : la sortie peut dépasser 65 536 lignes.
            let py = (cy as u64 * u64::from(frame.height) / u64::from(height)) as u32;
            let py = py.min(frame.height.saturating_sub(1));
            for (cx, cell) in row.iter_mut().enumerate() {
                let px = (cx as u64 * u64::from(frame.width) / u64::from(width)) as u32;
                let px = px.min(frame.width.saturating_sub(1));
                *cell = lut.map(frame.sample(px, py));
            }
        });
}

/// Render a frame at its own size.
///
/// # Example
/// ```
/// use da_core::frame::LumaFrame;
/// use da_core::charset::GlyphLut;
/// use da_ascii::luminance::render_luma;
///
/// let grid = render_luma(&LumaFrame::new(3, 1), &GlyphLut::default());
/// assert_eq!(grid.row_string(0), "@@@");
/// ```
#[must_use]
pub fn render_luma(frame: &LumaFrame, lut: &GlyphLut) -> AsciiGrid {
    let mut grid = AsciiGrid::new(frame.width, frame.height);
    if frame.width > 0 && frame.height > 0 {
        process_luminance(frame, lut, &mut grid);
    }
    grid
}
