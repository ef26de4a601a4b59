use egui::{Color32, Pos2, Rect, Vec2};

/// The origin marker: an outer green square with a blue square inside.
pub struct Marker {
    pub position: Pos2, // Position in window points
    pub outer: (f32, Color32),
    pub inner: (f32, Color32),
}

impl Marker {
    pub fn new(position: Pos2) -> Self {
        Self {
            position,
            outer: (8.0, Color32::GREEN),
            inner: (4.0, Color32::BLUE),
        }
    }

    /// Squares in draw order, outer first.
    pub fn squares(&self) -> [(Rect, Color32); 2] {
        [self.outer, self.inner].map(|(side, color)| {
            (Rect::from_center_size(self.position, Vec2::splat(side)), color)
        })
    }
}
