use super::constants::MAX_PIXEL_RATIO;

/// CSS-pixel size of the drawing area plus the display's pixel density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub css_width: f64,
    pub css_height: f64,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    pub fn new(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            css_width,
            css_height,
            device_pixel_ratio,
        }
    }

    /// Pixel ratio used for the backing store, capped for fill-rate.
    pub fn pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio.min(MAX_PIXEL_RATIO)
    }

    pub fn aspect(&self) -> f32 {
        (self.css_width / self.css_height.max(1.0)) as f32
    }

    /// Backing store size in physical pixels, never zero.
    pub fn backing_size(&self) -> (u32, u32) {
        let ratio = self.pixel_ratio();
        let w = (self.css_width * ratio) as u32;
        let h = (self.css_height * ratio) as u32;
        (w.max(1), h.max(1))
    }
}
