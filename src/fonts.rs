//! # Bundled fonts
//!
//! `FONT_5X7` is the classic 5x7 LCD font: every glyph is 5 pixels wide and 7 high, sitting on the
//! baseline, with one pixel of space to the right. Lines are 9 pixels apart.

use crate::font::{BitmapFont, Glyph};

const fn cell(index: u16) -> Glyph {
    Glyph { bitmap_offset: index * 5, width: 5, height: 7, x_advance: 6, x_offset: 0, y_offset: -7 }
}

#[rustfmt::skip]
static BITMAP_5X7: [u8; 475] = [
    0x00, 0x00, 0x00, 0x00, 0x00, // space
    0x21, 0x08, 0x42, 0x00, 0x80, // !
    0x52, 0x94, 0x00, 0x00, 0x00, // "
    0x52, 0xbe, 0xaf, 0xa9, 0x40, // #
    0x23, 0xe8, 0xe2, 0xf8, 0x80, // $
    0xc6, 0x44, 0x44, 0x4c, 0x60, // %
    0x64, 0xa8, 0x8a, 0xc9, 0xa0, // &
    0x61, 0x10, 0x00, 0x00, 0x00, // '
    0x11, 0x10, 0x84, 0x10, 0x40, // (
    0x41, 0x04, 0x21, 0x11, 0x00, // )
    0x01, 0x2a, 0xea, 0x90, 0x00, // *
    0x01, 0x09, 0xf2, 0x10, 0x00, // +
    0x00, 0x00, 0x06, 0x11, 0x00, // ,
    0x00, 0x01, 0xf0, 0x00, 0x00, // -
    0x00, 0x00, 0x00, 0x31, 0x80, // .
    0x00, 0x44, 0x44, 0x40, 0x00, // /
    0x74, 0x67, 0x5c, 0xc5, 0xc0, // 0
    0x23, 0x08, 0x42, 0x11, 0xc0, // 1
    0x74, 0x42, 0x22, 0x23, 0xe0, // 2
    0xf8, 0x88, 0x20, 0xc5, 0xc0, // 3
    0x11, 0x95, 0x2f, 0x88, 0x40, // 4
    0xfc, 0x3c, 0x10, 0xc5, 0xc0, // 5
    0x32, 0x21, 0xe8, 0xc5, 0xc0, // 6
    0xf8, 0x44, 0x44, 0x21, 0x00, // 7
    0x74, 0x62, 0xe8, 0xc5, 0xc0, // 8
    0x74, 0x62, 0xf0, 0x89, 0x80, // 9
    0x03, 0x18, 0x06, 0x30, 0x00, // :
    0x03, 0x18, 0x06, 0x11, 0x00, // ;
    0x11, 0x11, 0x04, 0x10, 0x40, // <
    0x00, 0x3e, 0x0f, 0x80, 0x00, // =
    0x41, 0x04, 0x11, 0x11, 0x00, // >
    0x74, 0x42, 0x22, 0x00, 0x80, // ?
    0x74, 0x42, 0xda, 0xd5, 0xc0, // @
    0x74, 0x63, 0x1f, 0xc6, 0x20, // A
    0xf4, 0x63, 0xe8, 0xc7, 0xc0, // B
    0x74, 0x61, 0x08, 0x45, 0xc0, // C
    0xe4, 0xa3, 0x18, 0xcb, 0x80, // D
    0xfc, 0x21, 0xe8, 0x43, 0xe0, // E
    0xfc, 0x21, 0xe8, 0x42, 0x00, // F
    0x74, 0x61, 0x78, 0xc5, 0xe0, // G
    0x8c, 0x63, 0xf8, 0xc6, 0x20, // H
    0x71, 0x08, 0x42, 0x11, 0xc0, // I
    0x38, 0x84, 0x21, 0x49, 0x80, // J
    0x8c, 0xa9, 0x8a, 0x4a, 0x20, // K
    0x84, 0x21, 0x08, 0x43, 0xe0, // L
    0x8e, 0xeb, 0x58, 0xc6, 0x20, // M
    0x8c, 0x73, 0x59, 0xc6, 0x20, // N
    0x74, 0x63, 0x18, 0xc5, 0xc0, // O
    0xf4, 0x63, 0xe8, 0x42, 0x00, // P
    0x74, 0x63, 0x1a, 0xc9, 0xa0, // Q
    0xf4, 0x63, 0xea, 0x4a, 0x20, // R
    0x7c, 0x20, 0xe0, 0x87, 0xc0, // S
    0xf9, 0x08, 0x42, 0x10, 0x80, // T
    0x8c, 0x63, 0x18, 0xc5, 0xc0, // U
    0x8c, 0x63, 0x18, 0xa8, 0x80, // V
    0x8c, 0x63, 0x5a, 0xd5, 0x40, // W
    0x8c, 0x54, 0x45, 0x46, 0x20, // X
    0x8c, 0x62, 0xa2, 0x10, 0x80, // Y
    0xf8, 0x44, 0x44, 0x43, 0xe0, // Z
    0x72, 0x10, 0x84, 0x21, 0xc0, // [
    0x04, 0x10, 0x41, 0x04, 0x00, // \
    0x70, 0x84, 0x21, 0x09, 0xc0, // ]
    0x22, 0xa2, 0x00, 0x00, 0x00, // ^
    0x00, 0x00, 0x00, 0x03, 0xe0, // _
    0x41, 0x04, 0x00, 0x00, 0x00, // `
    0x00, 0x1c, 0x17, 0xc5, 0xe0, // a
    0x84, 0x2d, 0x98, 0xc7, 0xc0, // b
    0x00, 0x1d, 0x08, 0x45, 0xc0, // c
    0x08, 0x5b, 0x38, 0xc5, 0xe0, // d
    0x00, 0x1d, 0x1f, 0xc1, 0xc0, // e
    0x32, 0x51, 0xc4, 0x21, 0x00, // f
    0x03, 0xe3, 0x17, 0x85, 0xc0, // g
    0x84, 0x2d, 0x98, 0xc6, 0x20, // h
    0x20, 0x18, 0x42, 0x11, 0xc0, // i
    0x10, 0x0c, 0x21, 0x49, 0x80, // j
    0x84, 0x25, 0x4c, 0x52, 0x40, // k
    0x61, 0x08, 0x42, 0x11, 0xc0, // l
    0x00, 0x35, 0x5a, 0xc6, 0x20, // m
    0x00, 0x2d, 0x98, 0xc6, 0x20, // n
    0x00, 0x1d, 0x18, 0xc5, 0xc0, // o
    0x00, 0x3d, 0x1f, 0x42, 0x00, // p
    0x00, 0x1b, 0x37, 0x84, 0x20, // q
    0x00, 0x2d, 0x98, 0x42, 0x00, // r
    0x00, 0x1d, 0x07, 0x07, 0xc0, // s
    0x42, 0x38, 0x84, 0x24, 0xc0, // t
    0x00, 0x23, 0x18, 0xcd, 0xa0, // u
    0x00, 0x23, 0x18, 0xa8, 0x80, // v
    0x00, 0x23, 0x1a, 0xd5, 0x40, // w
    0x00, 0x22, 0xa2, 0x2a, 0x20, // x
    0x00, 0x23, 0x17, 0x85, 0xc0, // y
    0x00, 0x3e, 0x22, 0x23, 0xe0, // z
    0x11, 0x08, 0x82, 0x10, 0x40, // {
    0x21, 0x08, 0x42, 0x10, 0x80, // |
    0x41, 0x08, 0x22, 0x11, 0x00, // }
    0x00, 0x11, 0x51, 0x00, 0x00, // ~
];

static GLYPHS_5X7: [Glyph; 95] = {
    let mut glyphs = [cell(0); 95];
    let mut i = 0;
    while i < 95 {
        glyphs[i] = cell(i as u16);
        i += 1;
    }
    glyphs
};

pub static FONT_5X7: BitmapFont = BitmapFont {
    bitmap: &BITMAP_5X7,
    glyphs: &GLYPHS_5X7,
    first: 0x20,
    last: 0x7e,
    y_advance: 9,
};
