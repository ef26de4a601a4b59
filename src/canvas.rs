use crate::field::ScaleFit;
use egui::{Pos2, Rect, Vec2};

/// Maps between window points and field-image pixels. The scale is fixed
/// for the whole session.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    image_width: f32,
    image_height: f32,
    window_width: f32,
    window_height: f32,
    scale: f32,
}

impl Canvas {
    pub fn new(image_size: (f32, f32), window_size: (f32, f32), fit: ScaleFit) -> Self {
        Self {
            image_width: image_size.0,
            image_height: image_size.1,
            window_width: window_size.0,
            window_height: window_size.1,
            scale: fit.scale(window_size, image_size),
        }
    }

    pub fn get_scale(&self) -> f32 {
        self.scale
    }

    pub fn get_image_size(&self) -> (f32, f32) {
        (self.image_width, self.image_height)
    }

    pub fn get_window_width(&self) -> f32 {
        self.window_width
    }

    pub fn get_window_height(&self) -> f32 {
        self.window_height
    }

    pub fn image_center(&self) -> Pos2 {
        Pos2::new(self.image_width / 2.0, self.image_height / 2.0)
    }

    /// Where the scaled background lands in the window.
    pub fn get_screen_rect(&self) -> Rect {
        Rect::from_min_size(Pos2::ZERO, self.scaled_image_size())
    }

    pub fn scaled_image_size(&self) -> Vec2 {
        Vec2::new(self.image_width, self.image_height) * self.scale
    }

    pub fn screen_to_field_pos(&self, screen_pos: Pos2) -> Pos2 {
        Pos2::new(screen_pos.x / self.scale, screen_pos.y / self.scale)
    }

    pub fn field_to_screen_pos(&self, field_pos: Pos2) -> Pos2 {
        Pos2::new(field_pos.x * self.scale, field_pos.y * self.scale)
    }

    /// Left and right halves of the scaled field, full window height.
    pub fn field_halves(&self) -> (Rect, Rect) {
        let half = self.scaled_image_size().x / 2.0;
        let left = Rect::from_min_size(Pos2::ZERO, Vec2::new(half, self.window_height));
        let right = Rect::from_min_size(Pos2::new(half, 0.0), Vec2::new(half, self.window_height));
        (left, right)
    }
}
