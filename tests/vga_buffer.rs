//! Console behaviour against an in-memory grid.

use core::fmt::Write;
use vga_console::vga_buffer::constants::{CELL_COUNT, VGA_HEIGHT, VGA_WIDTH};
use vga_console::vga_buffer::{
    ColorCode, ConsoleConfig, MemoryBuffer, Position, ScreenChar, TextConsole, VgaColor, VgaError,
};

const BLANK: ScreenChar = ScreenChar::new(b' ', ColorCode::from_u8(0x00));

fn console() -> TextConsole<MemoryBuffer> {
    TextConsole::new(MemoryBuffer::new())
}

fn row_text(console: &TextConsole<MemoryBuffer>, row: usize) -> Vec<u8> {
    console.buffer().row_glyphs(row).unwrap().to_vec()
}

fn padded(text: &[u8]) -> Vec<u8> {
    let mut row = text.to_vec();
    row.resize(VGA_WIDTH, b' ');
    row
}

#[test]
fn test_hi_bye_in_two_colors() {
    let mut console = console();
    console.clear();
    console.write_bytes(b"HI\n");
    console.set_color(VgaColor::Red, VgaColor::Black);
    console.write_bytes(b"BYE");

    let white = ColorCode::from_u8(0x0F);
    let red = ColorCode::from_u8(0x04);
    assert_eq!(console.cell(0, 0), Some(ScreenChar::new(b'H', white)));
    assert_eq!(console.cell(0, 1), Some(ScreenChar::new(b'I', white)));
    assert_eq!(console.cell(0, 2), Some(BLANK));
    assert_eq!(console.cell(1, 0), Some(ScreenChar::new(b'B', red)));
    assert_eq!(console.cell(1, 1), Some(ScreenChar::new(b'Y', red)));
    assert_eq!(console.cell(1, 2), Some(ScreenChar::new(b'E', red)));
    assert_eq!(console.position(), Position { row: 1, col: 3 });
}

#[test]
fn test_newline_on_bottom_row_scrolls() {
    let mut console = console();
    console.clear();
    for row in 0..VGA_HEIGHT {
        console.write_bytes(&[b'a' + row as u8]);
        if row + 1 < VGA_HEIGHT {
            console.write_byte(b'\n');
        }
    }
    assert_eq!(console.position(), Position { row: 24, col: 1 });

    console.write_byte(b'\n');
    console.write_byte(b'Z');

    assert_eq!(row_text(&console, 0), padded(b"b"));
    assert_eq!(row_text(&console, 23), padded(b"y"));
    assert_eq!(row_text(&console, 24), padded(b"Z"));
    assert_eq!(console.position(), Position { row: 24, col: 1 });
}

#[test]
fn test_eighty_first_byte_wraps() {
    let mut console = console();
    console.clear();
    console.write_bytes(&[b'x'; VGA_WIDTH]);
    assert_eq!(console.position(), Position { row: 0, col: VGA_WIDTH });
    assert_eq!(console.cell(1, 0), Some(BLANK));

    console.write_byte(b'y');
    assert_eq!(console.cell(1, 0).map(|cell| cell.glyph), Some(b'y'));
    assert_eq!(console.position(), Position { row: 1, col: 1 });
}

#[test]
fn test_full_row_then_newline_moves_one_row() {
    let mut console = console();
    console.write_bytes(&[b'x'; VGA_WIDTH]);
    console.write_byte(b'\n');
    assert_eq!(console.position(), Position { row: 1, col: 0 });
}

#[test]
fn test_clear_is_idempotent_and_keeps_cursor() {
    let mut console = console();
    console.write_bytes(b"some text");
    console.set_color(VgaColor::Green, VgaColor::Blue);
    console.clear();
    let once = console.buffer().clone();
    console.clear();

    assert_eq!(console.buffer().cells(), once.cells());
    assert!(once.cells().iter().all(|cell| *cell == BLANK));
    assert_eq!(console.position(), Position { row: 0, col: 9 });
    assert_eq!(console.color(), ColorCode::new(VgaColor::Green, VgaColor::Blue));
}

#[test]
fn test_cells_take_the_color_active_when_written() {
    let mut console = console();
    for (i, fg) in VgaColor::ALL.iter().enumerate() {
        console.set_color(*fg, VgaColor::Black);
        console.write_byte(b'0' + i as u8);
    }
    for (i, fg) in VgaColor::ALL.iter().enumerate() {
        let cell = console.cell(0, i).unwrap();
        assert_eq!(cell.color.foreground(), *fg as u8);
        assert_eq!(cell.color.background(), 0);
    }
}

#[test]
fn test_fresh_buffer_is_zero_until_cleared() {
    let mut console = console();
    assert!(console.buffer().cells().iter().all(|cell| cell.to_u16() == 0));
    console.clear();
    assert!(console.buffer().cells().iter().all(|cell| cell.to_u16() == 0x0020));
}

#[test]
fn test_scrolled_row_uses_blank_attribute() {
    let mut console = console();
    console.set_color(VgaColor::Yellow, VgaColor::Blue);
    for _ in 0..VGA_HEIGHT {
        console.write_byte(b'\n');
    }
    assert!(console.buffer().row(24).unwrap().iter().all(|cell| *cell == BLANK));
}

#[test]
fn test_configured_blank_background() {
    let config = ConsoleConfig {
        color: ColorCode::new(VgaColor::LightGray, VgaColor::Blue),
        blank_background: VgaColor::Blue,
    };
    let mut console = TextConsole::with_config(MemoryBuffer::new(), config);
    console.clear();
    assert_eq!(console.cell(12, 40).map(|cell| cell.to_u16()), Some(0x1020));

    console.write_byte(b'k');
    assert_eq!(console.cell(0, 0).map(|cell| cell.color.as_u8()), Some(0x17));
}

#[test]
fn test_write_stops_at_nul() {
    let mut console = console();
    console.write_bytes(b"ab\0cd");
    assert_eq!(console.position(), Position { row: 0, col: 2 });

    console.write_cstr(c"ef");
    assert_eq!(&row_text(&console, 0)[..4], b"abef");
}

#[test]
fn test_format_machinery_replaces_unprintable() {
    let mut console = console();
    write!(console, "{}|\t|é", 42).unwrap();
    assert_eq!(&row_text(&console, 0)[..7], &[b'4', b'2', b'|', 0xfe, b'|', 0xfe, 0xfe]);
}

#[test]
fn test_colored_write_restores_color() {
    let mut console = console();
    console.write_colored(b"!", ColorCode::error());
    console.write_byte(b'.');
    assert_eq!(console.cell(0, 0).map(|cell| cell.color), Some(ColorCode::error()));
    assert_eq!(console.cell(0, 1).map(|cell| cell.color), Some(ColorCode::DEFAULT));
}

#[test]
fn test_set_position_bounds() {
    let mut console = console();
    assert_eq!(console.set_position(24, VGA_WIDTH), Ok(()));
    assert_eq!(console.set_position(25, 0), Err(VgaError::InvalidPosition));
    assert_eq!(console.set_position(0, VGA_WIDTH + 1), Err(VgaError::InvalidPosition));

    console.set_position(24, VGA_WIDTH).unwrap();
    console.write_byte(b'w');
    assert_eq!(console.position(), Position { row: 24, col: 1 });
    assert_eq!(console.cell(24, 0).map(|cell| cell.glyph), Some(b'w'));
}

#[test]
fn test_long_output_never_leaves_grid() {
    let mut console = console();
    for i in 0..(CELL_COUNT * 3) {
        console.write_byte(if i % 97 == 0 { b'\n' } else { b'.' });
        let at = console.position();
        assert!(at.row < VGA_HEIGHT);
        assert!(at.col <= VGA_WIDTH);
    }
}
