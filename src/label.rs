use egui::{Pos2, Rect, Vec2};

/// Gap between the pointer and the bottom of the label.
pub const LABEL_GAP: f32 = 10.0;
/// Padding of the backing plate around the text.
pub const PLATE_PADDING: f32 = 2.0;

/// Top-left corner of a label of `size` centred above `cursor`.
///
/// The label is kept inside the window horizontally. Vertically only the
/// top edge matters since the label always sits above the pointer.
pub fn place_label(cursor: Pos2, size: Vec2, window_width: f32) -> Pos2 {
    let mut x = cursor.x - size.x / 2.0;
    if cursor.x + size.x / 2.0 > window_width {
        x = window_width - size.x;
    } else if x < 0.0 {
        x = 0.0;
    }
    let y = (cursor.y - (size.y + LABEL_GAP)).max(0.0);
    Pos2::new(x, y)
}

pub fn plate_rect(text_pos: Pos2, size: Vec2) -> Rect {
    Rect::from_min_size(text_pos, size).expand(PLATE_PADDING)
}
