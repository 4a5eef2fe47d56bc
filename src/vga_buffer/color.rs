// src/vga_buffer/color.rs

//! VGA color definitions and color code management

/// VGA color codes (4-bit color palette)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VgaColor {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGray = 7,
    DarkGray = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    Pink = 13,
    Yellow = 14,
    White = 15,
}

impl VgaColor {
    /// The whole palette in index order
    pub const ALL: [VgaColor; 16] = [
        Self::Black,
        Self::Blue,
        Self::Green,
        Self::Cyan,
        Self::Red,
        Self::Magenta,
        Self::Brown,
        Self::LightGray,
        Self::DarkGray,
        Self::LightBlue,
        Self::LightGreen,
        Self::LightCyan,
        Self::LightRed,
        Self::Pink,
        Self::Yellow,
        Self::White,
    ];
}

/// Color code combining foreground and background colors
///
/// VGA attribute byte format: `[background 4 bits][foreground 4 bits]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct ColorCode(u8);

impl ColorCode {
    /// Console default, white on black
    pub const DEFAULT: Self = Self::new(VgaColor::White, VgaColor::Black);

    /// Create a new color code from foreground and background colors
    pub const fn new(fg: VgaColor, bg: VgaColor) -> Self {
        Self((bg as u8) << 4 | (fg as u8))
    }

    /// Pack raw palette indices without range checks.
    ///
    /// Values wider than four bits spill into the neighbouring nibble; this
    /// mirrors the hardware attribute byte and is not treated as an error.
    pub const fn from_nibbles(fg: u8, bg: u8) -> Self {
        Self((bg << 4).wrapping_add(fg))
    }

    /// Attribute used for blank cells: background only, foreground nibble zero
    pub const fn blank(bg: VgaColor) -> Self {
        Self((bg as u8) << 4)
    }

    /// Wrap an attribute byte read back from the buffer
    pub const fn from_u8(raw: u8) -> Self {
        Self(raw)
    }

    /// Get the raw byte value
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Low nibble
    pub const fn foreground(self) -> u8 {
        self.0 & 0x0f
    }

    /// High nibble
    pub const fn background(self) -> u8 {
        self.0 >> 4
    }

    /// Info color scheme (light cyan on black)
    pub const fn info() -> Self {
        Self::new(VgaColor::LightCyan, VgaColor::Black)
    }

    /// Success color scheme (light green on black)
    pub const fn success() -> Self {
        Self::new(VgaColor::LightGreen, VgaColor::Black)
    }

    /// Error color scheme (light red on black)
    pub const fn error() -> Self {
        Self::new(VgaColor::LightRed, VgaColor::Black)
    }

    /// Panic color scheme (white on red)
    pub const fn panic() -> Self {
        Self::new(VgaColor::White, VgaColor::Red)
    }
}

impl Default for ColorCode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_code_encoding() {
        let color = ColorCode::new(VgaColor::White, VgaColor::Red);
        assert_eq!(color.as_u8(), 0x4F);
        assert_eq!(color.foreground(), 0xF);
        assert_eq!(color.background(), 0x4);
    }

    #[test]
    fn test_default_is_white_on_black() {
        assert_eq!(ColorCode::default().as_u8(), 0x0F);
    }

    #[test]
    fn test_nibbles_match_typed_constructor() {
        for fg in VgaColor::ALL {
            for bg in VgaColor::ALL {
                let typed = ColorCode::new(fg, bg);
                let (fg, bg) = (fg as u8, bg as u8);
                assert_eq!(ColorCode::from_nibbles(fg, bg), typed);
                assert_eq!(typed.as_u8(), fg | (bg << 4));
            }
        }
    }

    #[test]
    fn test_oversized_foreground_bleeds_into_background() {
        let color = ColorCode::from_nibbles(0x12, 0x0);
        assert_eq!(color.as_u8(), 0x12);
        assert_eq!(color.background(), 0x1);
    }

    #[test]
    fn test_blank_has_zero_foreground() {
        let blank = ColorCode::blank(VgaColor::Blue);
        assert_eq!(blank.foreground(), 0);
        assert_eq!(blank.background(), VgaColor::Blue as u8);
    }

    #[test]
    fn test_palette_is_in_index_order() {
        for (index, color) in VgaColor::ALL.iter().enumerate() {
            assert_eq!(*color as usize, index);
        }
    }
}
