// SPDX-License-Identifier: GPL-3.0-only

//! 2D affine matrices for drawing the preview and the overlay
//!
//! Screen coordinates: x grows right, y grows down, so a positive angle
//! turns clockwise on screen.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Rectangle of the given size at the origin
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn center(&self) -> (f32, f32) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Same size, moved so its centre lands on `(cx, cy)`
    pub fn centered_on(&self, cx: f32, cy: f32) -> Self {
        Self::new(cx - self.width / 2.0, cy - self.height / 2.0, self.width, self.height)
    }
}

/// Affine transform `(x, y) -> (a·x + c·y + tx, b·x + d·y + ty)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Affine2 {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine2 {
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    pub fn translate(tx: f32, ty: f32) -> Self {
        Self {
            tx,
            ty,
            ..Self::IDENTITY
        }
    }

    pub fn scale(sx: f32, sy: f32) -> Self {
        Self {
            a: sx,
            d: sy,
            ..Self::IDENTITY
        }
    }

    pub fn rotate_degrees(degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Scale about a fixed pivot point
    pub fn scale_about(sx: f32, sy: f32, px: f32, py: f32) -> Self {
        Self::translate(-px, -py)
            .then(&Self::scale(sx, sy))
            .then(&Self::translate(px, py))
    }

    /// Rotate about a fixed pivot point
    pub fn rotate_about(degrees: f32, px: f32, py: f32) -> Self {
        Self::translate(-px, -py)
            .then(&Self::rotate_degrees(degrees))
            .then(&Self::translate(px, py))
    }

    /// Map `src` onto `dst`, stretching each axis independently
    ///
    /// Returns `None` when `src` has no area.
    pub fn rect_to_rect_fill(src: &Rect, dst: &Rect) -> Option<Self> {
        if src.width == 0.0 || src.height == 0.0 {
            return None;
        }
        let sx = dst.width / src.width;
        let sy = dst.height / src.height;
        Some(
            Self::translate(-src.left, -src.top)
                .then(&Self::scale(sx, sy))
                .then(&Self::translate(dst.left, dst.top)),
        )
    }

    /// Compose: apply `self` first, then `next`
    #[must_use]
    pub fn then(&self, next: &Affine2) -> Affine2 {
        Affine2 {
            a: next.a * self.a + next.c * self.b,
            b: next.b * self.a + next.d * self.b,
            c: next.a * self.c + next.c * self.d,
            d: next.b * self.c + next.d * self.d,
            tx: next.a * self.tx + next.c * self.ty + next.tx,
            ty: next.b * self.tx + next.d * self.ty + next.ty,
        }
    }

    pub fn map_point(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.a * x + self.c * y + self.tx,
            self.b * x + self.d * y + self.ty,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_point(actual: (f32, f32), expected: (f32, f32)) {
        assert!(
            (actual.0 - expected.0).abs() < 1e-3 && (actual.1 - expected.1).abs() < 1e-3,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_rotation_is_clockwise_on_screen() {
        // +x axis turns into +y (down) after 90°
        let m = Affine2::rotate_degrees(90.0);
        assert_point(m.map_point(1.0, 0.0), (0.0, 1.0));
    }

    #[test]
    fn test_then_applies_in_order() {
        let m = Affine2::scale(2.0, 2.0).then(&Affine2::translate(10.0, 0.0));
        assert_point(m.map_point(1.0, 1.0), (12.0, 2.0));

        let m = Affine2::translate(10.0, 0.0).then(&Affine2::scale(2.0, 2.0));
        assert_point(m.map_point(1.0, 1.0), (22.0, 2.0));
    }

    #[test]
    fn test_pivot_stays_fixed() {
        let m = Affine2::rotate_about(37.0, 50.0, 80.0);
        assert_point(m.map_point(50.0, 80.0), (50.0, 80.0));

        let m = Affine2::scale_about(3.0, 0.5, -4.0, 9.0);
        assert_point(m.map_point(-4.0, 9.0), (-4.0, 9.0));
    }

    #[test]
    fn test_rect_to_rect_fill() {
        let src = Rect::from_size(100.0, 50.0);
        let dst = Rect::new(10.0, 10.0, 200.0, 200.0);
        let m = Affine2::rect_to_rect_fill(&src, &dst).unwrap();
        assert_point(m.map_point(0.0, 0.0), (10.0, 10.0));
        assert_point(m.map_point(100.0, 50.0), (210.0, 210.0));

        assert!(Affine2::rect_to_rect_fill(&Rect::from_size(0.0, 1.0), &dst).is_none());
    }
}
