//! Colors

pub use tiny_skia::Color;

/// Packed `0xAARRGGBB` color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Argb32(pub u32);

impl Argb32 {
    pub const BLACK: Argb32 = Argb32(0xFF00_0000);
    pub const WHITE: Argb32 = Argb32(0xFFFF_FFFF);
    pub const YELLOW: Argb32 = Argb32(0xFFFF_FF00);
    pub const RED: Argb32 = Argb32(0xFFFF_0000);

    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn blue(self) -> u8 {
        self.0 as u8
    }

    pub fn to_color(self) -> Color {
        Color::from_rgba8(self.red(), self.green(), self.blue(), self.alpha())
    }
}

impl From<Argb32> for Color {
    fn from(argb: Argb32) -> Self {
        argb.to_color()
    }
}
