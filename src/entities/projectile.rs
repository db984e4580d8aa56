use crate::palette::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileOwner {
    Player,
    Enemy,
}

#[derive(Debug, Clone)]
pub struct Projectile {
    pub x: f64,
    pub y: f64,
    /// Vertical distance per frame; negative travels up
    pub dy: f64,
    pub color: Rgb,
    owner: ProjectileOwner,
}

impl Projectile {
    pub fn new(x: f64, y: f64, dy: f64, color: Rgb, owner: ProjectileOwner) -> Self {
        Self {
            x,
            y,
            dy,
            color,
            owner,
        }
    }

    /// Who fired it; fixed at creation and selects the collision rules
    pub fn owner(&self) -> ProjectileOwner {
        self.owner
    }

    pub fn update(&mut self) {
        self.y += self.dy;
    }

    /// True once the projectile sits on or beyond `margin` past the top or bottom edge
    pub fn is_out_of_bounds(&self, field_height: f64, margin: f64) -> bool {
        !(self.y > -margin && self.y < field_height + margin)
    }
}
