//! Grid placement for target buttons

use ratatui::layout::Rect;

pub const BUTTON_WIDTH: u16 = 12;
pub const BUTTON_HEIGHT: u16 = 3;
const H_GAP: u16 = 3;
// Leaves room for a north or south tip between rows
const V_GAP: u16 = 4;
const MARGIN_X: u16 = 2;
const MARGIN_Y: u16 = 5;

/// Rectangles for `count` buttons laid out left to right, wrapping into
/// rows, clipped to `area`. Buttons that fall outside get an empty rect.
pub fn target_grid(area: Rect, count: usize) -> Vec<Rect> {
    let usable = area.width.saturating_sub(MARGIN_X).saturating_add(H_GAP);
    let columns = (usable / (BUTTON_WIDTH + H_GAP)).max(1) as usize;

    (0..count)
        .map(|index| {
            let column = (index % columns) as u16;
            let row = (index / columns) as u16;
            let rect = Rect {
                x: area.x.saturating_add(MARGIN_X + column * (BUTTON_WIDTH + H_GAP)),
                y: area
                    .y
                    .saturating_add(MARGIN_Y + row * (BUTTON_HEIGHT + V_GAP)),
                width: BUTTON_WIDTH,
                height: BUTTON_HEIGHT,
            };
            let clipped = rect.intersection(area);
            if clipped.is_empty() {
                Rect::default()
            } else {
                clipped
            }
        })
        .collect()
}
