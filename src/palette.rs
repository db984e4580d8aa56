/// Plain RGB colour tag carried by entities; the renderer maps it to a terminal colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const PLAYER: Rgb = Rgb(0x00, 0xff, 0x00);
pub const PLAYER_SHOT: Rgb = Rgb(0xff, 0xff, 0xff);
pub const ENEMY_SHOT: Rgb = Rgb(0xff, 0x44, 0x44);
pub const BARRIER: Rgb = Rgb(0x00, 0xaa, 0x00);
pub const STAR: Rgb = Rgb(0x00, 0x33, 0x00);
pub const HUD: Rgb = Rgb(0x00, 0xff, 0x00);

/// Enemy colour by formation row, top row first
pub const ENEMY_ROWS: [Rgb; 5] = [
    Rgb(0x00, 0xff, 0x88),
    Rgb(0x66, 0xff, 0x66),
    Rgb(0xff, 0xff, 0x00),
    Rgb(0xff, 0x88, 0x00),
    Rgb(0xff, 0x44, 0x44),
];

pub fn enemy_row(row: usize) -> Rgb {
    ENEMY_ROWS[row % ENEMY_ROWS.len()]
}
