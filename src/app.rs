use crate::canvas::Canvas;
use crate::coordinate::measuring_bar;
use crate::field::FieldProfile;
use crate::input::collect_actions;
use crate::label::{place_label, plate_rect};
use crate::marker::Marker;
use crate::ui::{Effect, MeasureMode, UiState};
use crate::units::Calibration;
use clipboard::ClipboardContext;
use clipboard::ClipboardProvider;
use egui::{Color32, ColorImage, Context, FontId, Painter, Rect, Shape, Stroke, TextureHandle};

const BAR_WIDTH: f32 = 3.0;
const LABEL_COLOR: Color32 = Color32::from_rgb(255, 127, 0);

pub struct MeasuringApp {
    profile: FieldProfile,
    canvas: Canvas,
    calibration: Calibration,
    state: UiState,
    field_texture: TextureHandle,
    font: FontId,
    clipboard: Option<ClipboardContext>,
}

impl MeasuringApp {
    pub fn new(cc: &eframe::CreationContext<'_>, profile: FieldProfile, field_image: ColorImage) -> Self {
        let image_size = (field_image.size[0] as f32, field_image.size[1] as f32);
        let canvas = Canvas::new(image_size, profile.window_size, profile.scale_fit);
        log::info!(
            "{}: field image {}x{}, scale {:.3}",
            profile.title,
            image_size.0,
            image_size.1,
            canvas.get_scale()
        );

        let field_texture = cc
            .egui_ctx
            .load_texture("field", field_image, egui::TextureOptions::LINEAR);

        let clipboard = ClipboardProvider::new().ok();
        if clipboard.is_none() {
            log::warn!("no clipboard available, copying measurements is disabled");
        }

        Self {
            calibration: profile.calibration(),
            font: FontId::proportional(profile.font_size),
            state: UiState::new(&canvas),
            canvas,
            profile,
            field_texture,
            clipboard,
        }
    }

    pub fn copy_to_clipboard(&mut self, text: String) -> bool {
        if let Some(clipboard) = &mut self.clipboard {
            clipboard.set_contents(text).is_ok()
        } else {
            false
        }
    }

    fn handle_input(&mut self, ctx: &Context, frame: &mut eframe::Frame) {
        let (hover, actions) = ctx.input(|i| (i.pointer.hover_pos(), collect_actions(i)));
        if let Some(pos) = hover {
            self.state.cursor = pos;
        }

        for action in actions {
            match self.state.apply(action, &self.canvas, self.profile.mode_cycling) {
                Effect::None => {}
                Effect::Quit => {
                    log::info!("quitting");
                    frame.close();
                }
                Effect::CopyToClipboard(text) => {
                    if self.copy_to_clipboard(text.clone()) {
                        log::debug!("copied \"{}\"", text);
                    } else {
                        log::warn!("could not copy \"{}\" to the clipboard", text);
                    }
                }
            }
        }
    }

    fn draw(&self, painter: &Painter) {
        let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        painter.image(self.field_texture.id(), self.canvas.get_screen_rect(), uv, Color32::WHITE);

        if !self.state.render_ui {
            return;
        }

        let (blue_half, red_half) = self.canvas.field_halves();
        painter.rect_filled(
            blue_half,
            0.0,
            Color32::from_rgba_unmultiplied(0, 0, 255, self.profile.blue_tint_alpha),
        );
        painter.rect_filled(
            red_half,
            0.0,
            Color32::from_rgba_unmultiplied(255, 0, 0, self.profile.red_tint_alpha),
        );

        let origin = self.canvas.field_to_screen_pos(self.state.origin);
        for (rect, color) in Marker::new(origin).squares() {
            painter.rect_filled(rect, 0.0, color);
        }

        match self.state.mode {
            MeasureMode::Line => {
                let length = self.state.distance as f32 * self.canvas.get_scale();
                let bar = measuring_bar(origin, self.state.cursor, BAR_WIDTH, length);
                painter.add(Shape::convex_polygon(bar.to_vec(), Color32::WHITE, Stroke::NONE));
            }
            MeasureMode::Arc => {}
        }

        self.draw_label(painter);
    }

    fn draw_label(&self, painter: &Painter) {
        let galley = painter.layout_no_wrap(self.state.text.clone(), self.font.clone(), LABEL_COLOR);
        let size = galley.size();
        let pos = place_label(self.state.cursor, size, self.canvas.get_window_width());

        painter.rect_filled(plate_rect(pos, size), 0.0, Color32::from_black_alpha(150));
        painter.galley(pos, galley);
    }
}

impl eframe::App for MeasuringApp {
    fn update(&mut self, ctx: &Context, frame: &mut eframe::Frame) {
        self.handle_input(ctx, frame);
        self.state.update(&self.canvas, &self.calibration);

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (_response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                self.draw(&painter);
            });

        ctx.request_repaint();
    }
}
