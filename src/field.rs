//! Per-field settings. Each game field ships its own image with its own
//! printed scale, so each binary picks one of the presets below.

use crate::units::Calibration;
use serde::{Deserialize, Serialize};

/// How the background image is fitted into the window.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleFit {
    /// Largest scale at which the whole image fits.
    Contain,
    /// Match the window width, ignoring height.
    Width,
}

impl ScaleFit {
    pub fn scale(self, window: (f32, f32), image: (f32, f32)) -> f32 {
        let width_scale = window.0 / image.0;
        let height_scale = window.1 / image.1;
        match self {
            ScaleFit::Contain => width_scale.min(height_scale),
            ScaleFit::Width => width_scale,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldProfile {
    pub title: &'static str,
    pub image_path: &'static str,
    pub window_size: (f32, f32),
    pub pixels_per_inch: f64,
    pub decimal_places: u32,
    pub scale_fit: ScaleFit,
    pub blue_tint_alpha: u8,
    pub red_tint_alpha: u8,
    pub font_size: f32,
    /// Whether the mode key switches between line and arc measuring.
    pub mode_cycling: bool,
}

impl FieldProfile {
    pub const FREIGHT_FRENZY: FieldProfile = FieldProfile {
        title: "Field Measuring Tool - FTC Freight Frenzy",
        image_path: "media/freight_frenzy_field.png",
        window_size: (800.0, 800.0),
        pixels_per_inch: 15.0,
        decimal_places: 2,
        scale_fit: ScaleFit::Contain,
        blue_tint_alpha: 15,
        red_tint_alpha: 30,
        font_size: 20.0,
        mode_cycling: true,
    };

    pub const ROVER_RUCKUS: FieldProfile = FieldProfile {
        title: "Field Measuring Tool - FTC Rovor Ruckus",
        image_path: "media/rovor_ruckus_field.png",
        window_size: (800.0, 800.0),
        pixels_per_inch: 3.25,
        decimal_places: 2,
        scale_fit: ScaleFit::Width,
        blue_tint_alpha: 15,
        red_tint_alpha: 15,
        font_size: 20.0,
        mode_cycling: false,
    };

    pub fn calibration(&self) -> Calibration {
        Calibration::new(self.pixels_per_inch, self.decimal_places)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contain_uses_the_tighter_axis() {
        let scale = ScaleFit::Contain.scale((800.0, 800.0), (1600.0, 1000.0));
        assert_eq!(scale, 0.5);
        let scale = ScaleFit::Contain.scale((800.0, 800.0), (400.0, 1600.0));
        assert_eq!(scale, 0.5);
    }

    #[test]
    fn width_fit_ignores_height() {
        let scale = ScaleFit::Width.scale((800.0, 800.0), (400.0, 1600.0));
        assert_eq!(scale, 2.0);
    }

    #[test]
    fn presets_are_calibrated() {
        let ff = FieldProfile::FREIGHT_FRENZY.calibration();
        assert_eq!(ff.pixels_per_inch(), 15.0);
        assert_eq!(ff.precision(), 2);
        assert!(FieldProfile::FREIGHT_FRENZY.mode_cycling);
        assert!(!FieldProfile::ROVER_RUCKUS.mode_cycling);
        assert_eq!(FieldProfile::ROVER_RUCKUS.calibration().pixels_per_inch(), 3.25);
    }
}
