#![forbid(unsafe_code)]

//! Cursor trail physics.
//!
//! A fixed chain of markers follows the pointer with exponential lag: the
//! head snaps to the pointer every frame and each following marker closes a
//! fixed fraction of the gap to its predecessor's new position.
//!
//! # Invariants
//!
//! 1. `positions().len()` equals the configured length for the trail's life.
//! 2. After [`CursorTrail::step`], marker 0 equals the pointer.
//! 3. With a still pointer every marker converges to it geometrically.

/// Marker diameter; positions are offset by half of it so markers centre on
/// the pointer.
pub const MARKER_SIZE_PX: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Trail state, independent of any DOM.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorTrail {
    pointer: Point,
    markers: Vec<Point>,
    ease: f64,
}

impl CursorTrail {
    /// A trail of `length` markers parked at the origin.
    #[must_use]
    pub fn new(length: usize, ease: f64) -> Self {
        Self {
            pointer: Point::default(),
            markers: vec![Point::default(); length],
            ease,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Latest pointer position; applied on the next [`step`](Self::step).
    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = Point::new(x, y);
    }

    /// Advance one frame.
    pub fn step(&mut self) -> &[Point] {
        let mut leader = self.pointer;
        for (index, marker) in self.markers.iter_mut().enumerate() {
            if index == 0 {
                *marker = leader;
            } else {
                marker.x += (leader.x - marker.x) * self.ease;
                marker.y += (leader.y - marker.y) * self.ease;
            }
            leader = *marker;
        }
        &self.markers
    }

    #[must_use]
    pub fn positions(&self) -> &[Point] {
        &self.markers
    }

    /// Opacity for marker `index`: the head is opaque, the tail fades out.
    #[must_use]
    pub fn opacity(&self, index: usize) -> f64 {
        if self.markers.is_empty() {
            return 0.0;
        }
        1.0 - index as f64 / self.markers.len() as f64
    }

    /// Inline style for a freshly created marker.
    #[must_use]
    pub fn marker_style(&self, index: usize) -> String {
        format!(
            "position: fixed; width: {size}px; height: {size}px; \
             background: var(--primary-blue); border-radius: 50%; pointer-events: none; \
             z-index: 9999; opacity: {opacity}; transition: all 0.1s ease;",
            size = MARKER_SIZE_PX,
            opacity = self.opacity(index),
        )
    }
}
