//! Element types accepted as image data.

/// A numeric pixel component that can be displayed.
///
/// Integer data is read on a 0-255 scale and float data on a 0-1 scale.
/// Axes store images in the float convention.
pub trait ImageElement: Copy {
    /// This value on the float scale used for display.
    fn to_unit(self) -> f32;
}

impl ImageElement for u8 {
    #[inline]
    fn to_unit(self) -> f32 {
        f32::from(self) / 255.0
    }
}

impl ImageElement for u16 {
    #[inline]
    fn to_unit(self) -> f32 {
        f32::from(self) / 255.0
    }
}

impl ImageElement for f32 {
    #[inline]
    fn to_unit(self) -> f32 {
        self
    }
}

impl ImageElement for f64 {
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn to_unit(self) -> f32 {
        self as f32
    }
}
