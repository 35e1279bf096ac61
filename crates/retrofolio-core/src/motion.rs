#![forbid(unsafe_code)]

//! Pointer-driven transforms: background parallax and card tilt.
//!
//! Both are pure functions of pointer position and geometry. The controller
//! decides when they run (frame throttling, breakpoint gating).

use crate::page::Rect;

// ---------------------------------------------------------------------------
// Parallax
// ---------------------------------------------------------------------------

/// A 2-D translation in px.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    #[must_use]
    pub fn translate_css(&self) -> String {
        format!("translate({}px, {}px)", self.x, self.y)
    }
}

/// Parallax tuning, lifted from
/// [`InteractionConfig`](crate::config::InteractionConfig).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    /// Translation per unit of speed at the viewport edge.
    pub strength: f64,
    /// Speed added per layer; layer `i` moves at `(i + 1) * speed_step`.
    pub speed_step: f64,
    /// Translation of the pixel grid at the viewport edge.
    pub grid_strength: f64,
}

impl Parallax {
    /// Pointer position mapped to `[-0.5, 0.5]` on each axis around the
    /// viewport centre. A degenerate viewport yields the centre.
    #[must_use]
    pub fn centred(pointer_x: f64, pointer_y: f64, width: f64, height: f64) -> (f64, f64) {
        let nx = if width > 0.0 { pointer_x / width } else { 0.5 };
        let ny = if height > 0.0 { pointer_y / height } else { 0.5 };
        (nx - 0.5, ny - 0.5)
    }

    /// Translation for decorative layer `index`.
    #[must_use]
    pub fn layer_offset(&self, index: usize, centred: (f64, f64)) -> Offset {
        let speed = (index as f64 + 1.0) * self.speed_step;
        Offset {
            x: centred.0 * speed * self.strength,
            y: centred.1 * speed * self.strength,
        }
    }

    /// Translation for the background pixel grid.
    #[must_use]
    pub fn grid_offset(&self, centred: (f64, f64)) -> Offset {
        Offset {
            x: centred.0 * self.grid_strength,
            y: centred.1 * self.grid_strength,
        }
    }
}

// ---------------------------------------------------------------------------
// Tilt
// ---------------------------------------------------------------------------

/// Rotation applied to a card under the pointer, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// Tilt toward the pointer: the card edge under the cursor dips away.
    ///
    /// `pointer_x`/`pointer_y` are viewport coordinates; `rect` is the card's
    /// bounding box in the same space.
    #[must_use]
    pub fn from_pointer(rect: Rect, pointer_x: f64, pointer_y: f64, divisor: f64) -> Self {
        let x = pointer_x - rect.left;
        let y = pointer_y - rect.top;
        let center_x = rect.width / 2.0;
        let center_y = rect.height / 2.0;
        Self {
            rotate_x: (y - center_y) / divisor,
            rotate_y: (center_x - x) / divisor,
        }
    }

    /// CSS transform for a tilted, lifted card.
    #[must_use]
    pub fn transform_css(&self, perspective: f64, lift: f64) -> String {
        format!(
            "perspective({perspective}px) rotateX({}deg) rotateY({}deg) translateY(-{lift}px)",
            self.rotate_x, self.rotate_y
        )
    }

    /// CSS transform for a card at rest.
    #[must_use]
    pub fn resting_css(perspective: f64) -> String {
        format!("perspective({perspective}px) rotateX(0) rotateY(0) translateY(0)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARALLAX: Parallax = Parallax {
        strength: 50.0,
        speed_step: 0.5,
        grid_strength: 10.0,
    };

    #[test]
    fn centre_pointer_leaves_layers_still() {
        let centred = Parallax::centred(500.0, 400.0, 1000.0, 800.0);
        assert_eq!(centred, (0.0, 0.0));
        assert_eq!(PARALLAX.layer_offset(3, centred), Offset { x: 0.0, y: 0.0 });
    }

    #[test]
    fn deeper_layers_move_further() {
        let centred = Parallax::centred(1000.0, 0.0, 1000.0, 800.0);
        let first = PARALLAX.layer_offset(0, centred);
        let third = PARALLAX.layer_offset(2, centred);
        assert_eq!(first, Offset { x: 12.5, y: -12.5 });
        assert_eq!(third, Offset { x: 37.5, y: -37.5 });
        assert_eq!(PARALLAX.grid_offset(centred), Offset { x: 5.0, y: -5.0 });
        assert_eq!(first.translate_css(), "translate(12.5px, -12.5px)");
    }

    #[test]
    fn degenerate_viewport_is_centred() {
        assert_eq!(Parallax::centred(10.0, 10.0, 0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn tilt_follows_pointer_offset() {
        let rect = Rect::new(100.0, 200.0, 300.0, 200.0);
        // Top-left corner of the card.
        let tilt = Tilt::from_pointer(rect, 100.0, 200.0, 10.0);
        assert_eq!(tilt, Tilt { rotate_x: -10.0, rotate_y: 15.0 });
        // Dead centre.
        let tilt = Tilt::from_pointer(rect, 250.0, 300.0, 10.0);
        assert_eq!(tilt, Tilt::default());
    }

    #[test]
    fn tilt_css_shapes() {
        let tilt = Tilt { rotate_x: 2.5, rotate_y: -4.0 };
        assert_eq!(
            tilt.transform_css(1000.0, 10.0),
            "perspective(1000px) rotateX(2.5deg) rotateY(-4deg) translateY(-10px)"
        );
        assert_eq!(
            Tilt::resting_css(1000.0),
            "perspective(1000px) rotateX(0) rotateY(0) translateY(0)"
        );
    }
}
