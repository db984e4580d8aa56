/// Axis-aligned rectangle in field coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }
}

/// Returns true when the circle's bounding box overlaps `rect` on both axes.
///
/// This is deliberately the box test and not a true circle/rectangle distance check:
/// a projectile grazing a corner diagonally still counts as a hit. Edges are inclusive.
pub fn circle_hits_rect(cx: f64, cy: f64, radius: f64, rect: &Rect) -> bool {
    cx + radius >= rect.x
        && cx - radius <= rect.right()
        && cy + radius >= rect.y
        && cy - radius <= rect.bottom()
}
