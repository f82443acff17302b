use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

/// Screen characteristics needed for density-independent unit conversion.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct DisplayMetrics {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub density: f32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub width_pixels: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub height_pixels: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub smallest_screen_width_dp: u32,
}

impl DisplayMetrics {
    pub fn dp_to_px_f32(&self, dp: f32) -> f32 {
        dp * self.density
    }

    /// Truncates towards zero.
    pub fn dp_to_px(&self, dp: i32) -> i32 {
        self.dp_to_px_f32(dp as f32) as i32
    }

    /// Whether the navigation bar sits along the bottom edge.
    ///
    /// Phones (smallest width under 600dp, non-square) move the bar to the side
    /// in landscape, so it is only at the bottom while in portrait.
    pub fn is_nav_bar_on_bottom(&self) -> bool {
        let can_move =
            self.width_pixels != self.height_pixels && self.smallest_screen_width_dp < 600;
        !can_move || self.width_pixels < self.height_pixels
    }
}
