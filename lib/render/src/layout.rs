//! Vertical layout arithmetic shared by both card modes.
//!
//! Every extent in a document is a pure function of the item or line
//! count, so geometry is recomputed per render and two items can never
//! overlap. Device rows and summary lines reduce to the same shape: a
//! fixed header band, `count` equal-height items separated by a
//! constant gap, and a fixed footer band. One [`Stack`] serves both.

/// Device-list canvas width in px.
pub const DEVICE_CANVAS_W: u32 = 400;
/// Summary canvas width in px.
pub const SUMMARY_CANVAS_W: u32 = 500;
/// Outer padding shared by both canvases.
pub const PADDING: u32 = 20;
/// Height of one device row.
pub const DEVICE_ROW_H: u32 = 80;
/// Gap between adjacent device rows.
pub const DEVICE_ROW_GAP: u32 = 10;
/// Device-list header band height (icon + title).
pub const DEVICE_HEADER_H: u32 = 60;
/// Height of one wrapped summary line.
pub const SUMMARY_LINE_H: u32 = 20;
/// Summary fixed block above the wrapped lines (title, device card,
/// content label).
pub const SUMMARY_HEADER_H: u32 = 140;
/// Pixel budget for wrapped summary text.
pub const SUMMARY_CONTENT_W: u32 = SUMMARY_CANVAS_W - 2 * PADDING;
/// Baseline of the first wrapped line inside the content group.
pub const SUMMARY_FIRST_LINE_Y: u32 = 30;
/// Error document width.
pub const ERROR_CANVAS_W: u32 = 500;
/// Error document height, constant regardless of message length.
pub const ERROR_CANVAS_H: u32 = 150;

/// One vertical stack of fixed-height items.
#[derive(Debug, Clone, Copy)]
pub struct Stack {
    /// Fixed band above the first item.
    pub header_h: u32,
    /// Height of one item.
    pub item_h: u32,
    /// Vertical gap between adjacent items.
    pub gap: u32,
    /// Fixed band below the last item.
    pub footer_h: u32,
}

impl Stack {
    /// Total document height for `count` items.
    ///
    /// Affine in the count: `height(n) = header + footer - gap +
    /// n * (item + gap)`. The gap after the last item is never
    /// reserved, so an empty stack collapses to the fixed bands minus
    /// one gap (header + footer must exceed the gap, which both
    /// configured stacks satisfy).
    pub fn height(&self, count: usize) -> u32 {
        self.header_h + self.footer_h + count as u32 * (self.item_h + self.gap) - self.gap
    }

    /// Vertical offset of item `index` from the first item's origin.
    pub fn offset(&self, index: usize) -> u32 {
        index as u32 * (self.item_h + self.gap)
    }
}

/// Device rows: 60px header plus top padding, 80px rows, 10px gaps,
/// bottom padding as footer.
pub const DEVICE_STACK: Stack = Stack {
    header_h: DEVICE_HEADER_H + PADDING,
    item_h: DEVICE_ROW_H,
    gap: DEVICE_ROW_GAP,
    footer_h: PADDING,
};

/// Summary lines: 140px fixed block, 20px lines, no gap. The timestamp
/// row lives inside the header constant, under the content.
pub const SUMMARY_STACK: Stack = Stack {
    header_h: SUMMARY_HEADER_H,
    item_h: SUMMARY_LINE_H,
    gap: 0,
    footer_h: 0,
};
