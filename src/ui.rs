use crate::canvas::Canvas;
use crate::coordinate::distance;
use crate::input::Action;
use crate::units::{Calibration, Unit};
use egui::Pos2;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasureMode {
    /// Straight line from origin to pointer.
    #[default]
    Line,
    /// Angular distance. Not implemented: measures like `Line` and draws
    /// nothing between the points.
    Arc,
}

impl MeasureMode {
    pub fn next(self) -> Self {
        match self {
            MeasureMode::Line => MeasureMode::Arc,
            MeasureMode::Arc => MeasureMode::Line,
        }
    }
}

/// What the app has to do after an action that the state can't do itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    CopyToClipboard(String),
}

/// Everything that changes during a measuring session.
#[derive(Clone, Debug)]
pub struct UiState {
    // Field-image pixels
    pub origin: Pos2,
    // Last cursor position seen, in window points
    pub cursor: Pos2,
    pub unit: Unit,
    pub mode: MeasureMode,
    pub render_ui: bool,
    pub distance: f64,
    pub text: String,
}

impl UiState {
    pub fn new(canvas: &Canvas) -> Self {
        let origin = canvas.image_center();
        Self {
            origin,
            cursor: canvas.field_to_screen_pos(origin),
            unit: Unit::default(),
            mode: MeasureMode::default(),
            render_ui: true,
            distance: 0.0,
            text: String::new(),
        }
    }

    pub fn pointer(&self, canvas: &Canvas) -> Pos2 {
        canvas.screen_to_field_pos(self.cursor)
    }

    /// Recomputes the distance and label for the current cursor.
    pub fn update(&mut self, canvas: &Canvas, calibration: &Calibration) {
        // Arc measuring falls back to the straight distance.
        self.distance = distance(self.origin, self.pointer(canvas));
        self.text = calibration.format(self.distance, self.unit);
    }

    pub fn apply(&mut self, action: Action, canvas: &Canvas, mode_cycling: bool) -> Effect {
        match action {
            Action::Quit => return Effect::Quit,
            Action::SetOrigin => {
                self.origin = self.pointer(canvas);
                log::debug!("origin set to ({:.1}, {:.1})", self.origin.x, self.origin.y);
            }
            Action::ResetOrigin => {
                self.origin = canvas.image_center();
                log::debug!("origin reset to image center");
            }
            Action::CycleUnit => {
                self.unit = self.unit.next();
                log::debug!("showing distance in {}", self.unit);
            }
            Action::ToggleUi => {
                self.render_ui = !self.render_ui;
                log::debug!("overlay {}", if self.render_ui { "shown" } else { "hidden" });
            }
            Action::CycleMode if mode_cycling => {
                self.mode = self.mode.next();
                log::debug!("measure mode {:?}", self.mode);
            }
            Action::CycleMode => {}
            Action::Copy => return Effect::CopyToClipboard(self.text.clone()),
        }
        Effect::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::ScaleFit;

    fn setup() -> (Canvas, Calibration, UiState) {
        let canvas = Canvas::new((600.0, 600.0), (600.0, 600.0), ScaleFit::Contain);
        let state = UiState::new(&canvas);
        (canvas, Calibration::new(15.0, 2), state)
    }

    #[test]
    fn starts_centred_showing_pixels() {
        let (_, _, state) = setup();
        assert_eq!(state.origin, Pos2::new(300.0, 300.0));
        assert_eq!(state.unit, Unit::Pixels);
        assert_eq!(state.mode, MeasureMode::Line);
        assert!(state.render_ui);
    }

    #[test]
    fn click_moves_origin_to_pointer() {
        let canvas = Canvas::new((400.0, 400.0), (800.0, 800.0), ScaleFit::Contain);
        let mut state = UiState::new(&canvas);
        state.cursor = Pos2::new(100.0, 700.0);
        assert_eq!(state.apply(Action::SetOrigin, &canvas, true), Effect::None);
        assert_eq!(state.origin, Pos2::new(50.0, 350.0));
    }

    #[test]
    fn reset_always_returns_to_center() {
        let (canvas, _, mut state) = setup();
        for cursor in [Pos2::ZERO, Pos2::new(599.0, 13.0), Pos2::new(42.0, 42.0)] {
            state.cursor = cursor;
            state.apply(Action::SetOrigin, &canvas, true);
            state.apply(Action::ResetOrigin, &canvas, true);
            assert_eq!(state.origin, Pos2::new(300.0, 300.0));
        }
    }

    #[test]
    fn double_toggle_restores_render_flag() {
        let (canvas, _, mut state) = setup();
        state.apply(Action::ToggleUi, &canvas, true);
        assert!(!state.render_ui);
        state.apply(Action::ToggleUi, &canvas, true);
        assert!(state.render_ui);
    }

    #[test]
    fn mode_toggles_only_when_enabled() {
        let (canvas, _, mut state) = setup();
        state.apply(Action::CycleMode, &canvas, false);
        assert_eq!(state.mode, MeasureMode::Line);
        state.apply(Action::CycleMode, &canvas, true);
        assert_eq!(state.mode, MeasureMode::Arc);
        state.apply(Action::CycleMode, &canvas, true);
        assert_eq!(state.mode, MeasureMode::Line);
    }

    #[test]
    fn label_follows_unit() {
        let (canvas, cal, mut state) = setup();
        state.cursor = Pos2::new(300.0, 400.0);
        state.update(&canvas, &cal);
        assert_eq!(state.distance, 100.0);
        assert_eq!(state.text, "100 pixels");

        state.apply(Action::CycleUnit, &canvas, true);
        state.update(&canvas, &cal);
        assert_eq!(state.text, "6.67 inches");

        state.apply(Action::CycleUnit, &canvas, true);
        state.update(&canvas, &cal);
        assert_eq!(state.text, "0.56 feet");
    }

    #[test]
    fn arc_mode_still_measures_straight() {
        let (canvas, cal, mut state) = setup();
        state.apply(Action::CycleMode, &canvas, true);
        state.cursor = Pos2::new(0.0, 300.0);
        state.update(&canvas, &cal);
        assert_eq!(state.distance, 300.0);
    }

    #[test]
    fn quit_and_copy_are_left_to_the_app() {
        let (canvas, cal, mut state) = setup();
        state.update(&canvas, &cal);
        assert_eq!(state.apply(Action::Quit, &canvas, true), Effect::Quit);
        assert_eq!(
            state.apply(Action::Copy, &canvas, true),
            Effect::CopyToClipboard("0 pixels".to_string())
        );
    }
}
