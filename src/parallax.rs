//! Profile-image tilt that follows the pointer.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

use crate::consts::PARALLAX_PERSPECTIVE_PX;

/// Rotation applied to the profile image, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
}

impl Tilt {
    /// Tilt for a pointer at `(client_x, client_y)` in a viewport of
    /// `width` x `height`. The centre is flat; the edges reach half of
    /// `strength_deg`. Returns `None` for an empty viewport.
    #[must_use]
    pub fn from_pointer(client_x: f64, client_y: f64, width: f64, height: f64, strength_deg: f64) -> Option<Self> {
        if width <= 0.0 || height <= 0.0 {
            return None;
        }
        let x = (client_x / width - 0.5) * strength_deg;
        let y = (client_y / height - 0.5) * strength_deg;
        // Vertical pointer movement rotates around the X axis.
        Some(Self { rotate_x_deg: y, rotate_y_deg: x })
    }

    #[must_use]
    pub fn to_css(&self) -> String {
        // Two decimals is below what a rendered tilt can show.
        format!(
            "perspective({PARALLAX_PERSPECTIVE_PX}px) rotateX({:.2}deg) rotateY({:.2}deg)",
            self.rotate_x_deg, self.rotate_y_deg
        )
    }
}
