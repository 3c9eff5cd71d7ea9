//! Flow layout for phrase glyphs.
//!
//! Words are placed left to right, wrapping to a new line when the next word
//! would cross the right edge. Coordinates are local to the bounds with the
//! origin at the bottom-left and Y pointing up: the first line sits against
//! the top edge (`y = bounds.y`) and each further line moves down by one
//! padded cell height.
//!
//! When shrinking is allowed and the content overflows, every cell is scaled
//! by one uniform ratio and the layout runs again, up to [`MAX_LAYOUT_PASSES`].

use glam::Vec2;

/// Upper bound on layout passes, including the first one.
pub const MAX_LAYOUT_PASSES: u32 = 10;

/// Overflow at or below this many units counts as fitting.
pub const FIT_TOLERANCE: f32 = 1e-3;

/// Inputs to [`flow_layout`] besides the words themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Glyph cell size before any shrinking.
    pub cell: Vec2,
    /// Size of the region glyphs are placed in.
    pub bounds: Vec2,
    /// Space added to each cell on both axes.
    pub padding: Vec2,
    /// Space after every word.
    pub word_gap: f32,
    /// Shrink cells until the content fits. When false, overflow is reported and kept.
    pub allow_shrink: bool,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            cell: Vec2::new(40.0, 40.0),
            bounds: Vec2::new(800.0, 300.0),
            padding: Vec2::ZERO,
            word_gap: 10.0,
            allow_shrink: true,
        }
    }
}

impl LayoutParams {
    /// Parameters for a cell size and bounds, with default padding, gap and shrinking.
    pub fn new(cell: Vec2, bounds: Vec2) -> Self {
        Self {
            cell,
            bounds,
            ..Default::default()
        }
    }

    /// Set the space added to each cell.
    pub fn with_padding(mut self, padding: Vec2) -> Self {
        self.padding = padding;
        self
    }

    /// Set the space after every word.
    pub fn with_word_gap(mut self, word_gap: f32) -> Self {
        self.word_gap = word_gap;
        self
    }

    /// Allow or forbid shrinking cells on overflow.
    pub fn with_shrink(mut self, allow_shrink: bool) -> Self {
        self.allow_shrink = allow_shrink;
        self
    }
}

/// Result of a flow layout.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowLayout {
    /// Center of every glyph, in word order.
    pub positions: Vec<Vec2>,
    /// Line index of every glyph, parallel to `positions`.
    pub lines: Vec<u32>,
    /// Final cell size after shrinking.
    pub cell: Vec2,
    /// How far the widest word still exceeds the bounds width.
    pub width_overflow: f32,
    /// How far the last line still exceeds the bounds bottom.
    pub height_overflow: f32,
    /// Indices of words wider than the bounds in the final pass.
    pub oversized_words: Vec<usize>,
    /// Number of placement passes run.
    pub passes: u32,
}

impl FlowLayout {
    /// Whether the content fits the bounds, within [`FIT_TOLERANCE`].
    pub fn fits(&self) -> bool {
        self.width_overflow <= FIT_TOLERANCE && self.height_overflow <= FIT_TOLERANCE
    }

    /// Number of lines used.
    pub fn line_count(&self) -> u32 {
        self.lines.last().map_or(0, |last| last + 1)
    }
}

/// One placement pass at a fixed cell size.
struct Placement {
    positions: Vec<Vec2>,
    lines: Vec<u32>,
    width_overflow: f32,
    height_overflow: f32,
    oversized_words: Vec<usize>,
}

fn place(word_lengths: &[usize], cell: Vec2, params: &LayoutParams) -> Placement {
    let padded = cell + params.padding;
    let bounds = params.bounds;
    let total: usize = word_lengths.iter().sum();

    let mut positions = Vec::with_capacity(total);
    let mut lines = Vec::with_capacity(total);
    let mut oversized_words = Vec::new();
    let mut width_overflow = 0.0f32;
    let mut cursor = Vec2::new(0.0, bounds.y);
    let mut line = 0u32;

    for (index, &len) in word_lengths.iter().enumerate() {
        let word_width = padded.x * len as f32 + params.word_gap;

        if cursor.x + word_width > bounds.x && cursor.x > 0.0 {
            cursor.y -= padded.y;
            cursor.x = 0.0;
            line += 1;
        }

        // Even alone on a line this word cannot fit.
        if word_width > bounds.x {
            width_overflow = width_overflow.max(word_width - bounds.x);
            oversized_words.push(index);
        }

        for _ in 0..len {
            positions.push(Vec2::new(cursor.x + padded.x / 2.0, cursor.y - padded.y / 2.0));
            lines.push(line);
            cursor.x += padded.x;
        }
        cursor.x += params.word_gap;
    }

    let height_overflow = if positions.is_empty() {
        0.0
    } else {
        (padded.y - cursor.y).max(0.0)
    };

    Placement {
        positions,
        lines,
        width_overflow,
        height_overflow,
        oversized_words,
    }
}

/// The uniform scale that removes the dominant overflow, or `None` if nothing overflows.
fn shrink_ratio(width_overflow: f32, height_overflow: f32, bounds: Vec2) -> Option<f32> {
    let width = if width_overflow > FIT_TOLERANCE { width_overflow } else { 0.0 };
    let height = if height_overflow > FIT_TOLERANCE { height_overflow } else { 0.0 };

    if height / bounds.y > width / bounds.x {
        Some(bounds.y / (height + bounds.y))
    } else if width > 0.0 {
        Some(bounds.x / (width + bounds.x))
    } else {
        None
    }
}

/// Lay out words, given as glyph counts, inside `params.bounds`.
///
/// Pure and deterministic: the same inputs always give the same output.
pub fn flow_layout(word_lengths: &[usize], params: &LayoutParams) -> FlowLayout {
    let degenerate = params.bounds.x <= 0.0 || params.bounds.y <= 0.0;
    if degenerate && params.allow_shrink {
        log::warn!(
            "Layout bounds {:?} have no area; placing glyphs without shrinking.",
            params.bounds
        );
    }

    let mut cell = params.cell;
    let mut passes = 0;

    loop {
        passes += 1;
        let placement = place(word_lengths, cell, params);

        let ratio = if params.allow_shrink && !degenerate && passes < MAX_LAYOUT_PASSES {
            shrink_ratio(placement.width_overflow, placement.height_overflow, params.bounds)
        } else {
            None
        };

        match ratio {
            Some(ratio) => {
                log::debug!("Layout pass {passes} overflowed; scaling cells by {ratio}");
                cell *= ratio;
            }
            None => {
                let layout = FlowLayout {
                    positions: placement.positions,
                    lines: placement.lines,
                    cell,
                    width_overflow: placement.width_overflow,
                    height_overflow: placement.height_overflow,
                    oversized_words: placement.oversized_words,
                    passes,
                };
                report(&layout, params);
                return layout;
            }
        }
    }
}

fn report(layout: &FlowLayout, params: &LayoutParams) {
    if !params.allow_shrink {
        for index in &layout.oversized_words {
            log::warn!(
                "Word {index} is wider than the layout bounds. Use a smaller cell or larger bounds."
            );
        }
    } else if !layout.fits() && layout.passes >= MAX_LAYOUT_PASSES {
        log::warn!(
            "Layout still overflows after {} passes (width {}, height {}).",
            layout.passes,
            layout.width_overflow,
            layout.height_overflow
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_params(bounds: Vec2) -> LayoutParams {
        LayoutParams::new(Vec2::ONE, bounds)
            .with_word_gap(0.0)
            .with_shrink(false)
    }

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).abs().max_element() < 1e-4
    }

    #[test]
    fn words_that_exactly_fill_a_line_do_not_wrap() {
        let layout = flow_layout(&[2, 3], &unit_params(Vec2::new(5.0, 2.0)));
        assert_eq!(layout.lines, vec![0, 0, 0, 0, 0]);
        assert!(approx(layout.positions[0], Vec2::new(0.5, 1.5)));
        assert!(approx(layout.positions[4], Vec2::new(4.5, 1.5)));
        assert!(layout.fits());
    }

    #[test]
    fn one_unit_too_wide_wraps() {
        let layout = flow_layout(&[2, 3], &unit_params(Vec2::new(4.0, 2.0)));
        assert_eq!(layout.lines, vec![0, 0, 1, 1, 1]);
        assert!(approx(layout.positions[2], Vec2::new(0.5, 0.5)));
        assert!(approx(layout.positions[4], Vec2::new(2.5, 0.5)));
        assert_eq!(layout.line_count(), 2);
    }

    #[test]
    fn word_gap_counts_toward_wrap() {
        let params = unit_params(Vec2::new(6.0, 2.0)).with_word_gap(1.0);
        let layout = flow_layout(&[2, 3], &params);
        // "AN" takes 3 with its gap, "OWL" takes 4: 7 > 6.
        assert_eq!(layout.lines, vec![0, 0, 1, 1, 1]);
    }

    #[test]
    fn glyphs_are_centered_in_padded_cells() {
        let params = LayoutParams::new(Vec2::new(10.0, 20.0), Vec2::new(100.0, 100.0))
            .with_padding(Vec2::new(2.0, 4.0))
            .with_word_gap(5.0);
        let layout = flow_layout(&[2, 1], &params);
        assert!(approx(layout.positions[0], Vec2::new(6.0, 88.0)));
        assert!(approx(layout.positions[1], Vec2::new(18.0, 88.0)));
        // Second word starts after the gap: 24 + 5.
        assert!(approx(layout.positions[2], Vec2::new(35.0, 88.0)));
    }

    #[test]
    fn oversized_word_without_shrink_is_reported_and_kept() {
        let layout = flow_layout(&[7], &unit_params(Vec2::new(5.0, 2.0)));
        assert_eq!(layout.oversized_words, vec![0]);
        assert_eq!(layout.cell, Vec2::ONE);
        assert!((layout.width_overflow - 2.0).abs() < 1e-6);
        assert_eq!(layout.passes, 1);
    }

    #[test]
    fn oversized_word_after_a_wrap_is_still_measured() {
        let layout = flow_layout(&[1, 7], &unit_params(Vec2::new(5.0, 3.0)));
        assert_eq!(layout.oversized_words, vec![1]);
        assert_eq!(layout.lines[1], 1);
    }

    #[test]
    fn height_overflow_is_measured_from_last_line() {
        // Three one-glyph lines of height 1 in a box 2 tall.
        let layout = flow_layout(&[3, 3, 3], &unit_params(Vec2::new(3.0, 2.0)));
        assert_eq!(layout.line_count(), 3);
        assert!((layout.height_overflow - 1.0).abs() < 1e-6);
    }

    #[test]
    fn wide_word_shrinks_to_fit() {
        let params = LayoutParams::new(Vec2::new(40.0, 40.0), Vec2::new(300.0, 100.0))
            .with_word_gap(0.0);
        let layout = flow_layout(&[12], &params);
        assert!(layout.fits());
        assert!(approx(layout.cell, Vec2::new(25.0, 25.0)));
        assert!(approx(layout.positions[0], Vec2::new(12.5, 87.5)));
        assert!(approx(layout.positions[11], Vec2::new(287.5, 87.5)));
        assert_eq!(layout.passes, 2);
    }

    #[test]
    fn tall_content_shrinks_to_fit() {
        let params = LayoutParams::new(Vec2::new(20.0, 20.0), Vec2::new(100.0, 40.0))
            .with_word_gap(0.0);
        let layout = flow_layout(&[3, 3, 3, 3, 3, 3], &params);
        assert!(layout.fits());
        assert!(layout.cell.x < 20.0);
        assert_eq!(layout.cell.x, layout.cell.y);
    }

    #[test]
    fn shrunk_cells_fit_when_laid_out_again() {
        let params = LayoutParams::new(Vec2::new(40.0, 40.0), Vec2::new(300.0, 100.0))
            .with_padding(Vec2::new(4.0, 4.0))
            .with_word_gap(10.0);
        let words = [5, 3, 7, 4, 6];
        let layout = flow_layout(&words, &params);
        assert!(layout.passes < MAX_LAYOUT_PASSES);
        assert!(layout.fits());

        let again = flow_layout(&words, &LayoutParams { cell: layout.cell, ..params });
        assert!(again.fits());
        assert_eq!(again.passes, 1);
    }

    #[test]
    fn layout_is_deterministic() {
        let params = LayoutParams::new(Vec2::new(33.0, 41.0), Vec2::new(250.0, 90.0))
            .with_padding(Vec2::new(3.0, 1.5))
            .with_word_gap(7.0);
        let words = [4, 9, 2, 6, 6, 1];
        let a = flow_layout(&words, &params);
        let b = flow_layout(&words, &params);
        assert_eq!(a, b);
    }

    #[test]
    fn zero_area_bounds_terminate() {
        let params = LayoutParams::new(Vec2::new(10.0, 10.0), Vec2::ZERO);
        let layout = flow_layout(&[3, 4], &params);
        assert_eq!(layout.passes, 1);
        assert_eq!(layout.positions.len(), 7);
    }

    #[test]
    fn no_words_no_overflow() {
        let params = LayoutParams::new(Vec2::new(10.0, 500.0), Vec2::new(100.0, 100.0));
        let layout = flow_layout(&[], &params);
        assert!(layout.positions.is_empty());
        assert!(layout.fits());
        assert_eq!(layout.line_count(), 0);
    }
}
