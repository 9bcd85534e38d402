/// Converts raw pixel offsets on the surface into the unit points are stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateTransform {
    is_percentage: bool,
}

impl CoordinateTransform {
    pub fn new(is_percentage: bool) -> Self {
        Self { is_percentage }
    }

    pub fn is_percentage(&self) -> bool {
        self.is_percentage
    }

    /// `surface_extent` must be non-zero in percentage mode; `Surface` guarantees that.
    pub fn to_storage_unit(&self, pixel_offset: f64, surface_extent: f64) -> f64 {
        if self.is_percentage {
            (pixel_offset / surface_extent) * 100.0
        } else {
            pixel_offset
        }
    }

    pub fn to_pixels(&self, value: f64, surface_extent: f64) -> f64 {
        if self.is_percentage {
            value / 100.0 * surface_extent
        } else {
            value
        }
    }

    pub fn unit_symbol(&self) -> &'static str {
        if self.is_percentage {
            "%"
        } else {
            "px"
        }
    }
}
