//! Advance widths of the standard-14 Helvetica faces, in 1/1000 em.
//!
//! Only the printable ASCII range is tabulated; Latin-1 letters with
//! diacritics share the advance of their base letter, which holds for both
//! faces. Anything the WinAnsi encoder replaces with `?` measures as `?`.

use crate::font::BuiltinFont;

const FIRST_TABULATED: u32 = 32;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Descender depth of both faces, in 1/1000 em.
pub const DESCENT: f32 = 207.0;

fn base_letter(c: char) -> Option<char> {
    let base = match c {
        'À'..='Å' => 'A',
        'Ç' => 'C',
        'È'..='Ë' => 'E',
        'Ì'..='Ï' => 'I',
        'Ñ' => 'N',
        'Ò'..='Ö' | 'Ø' => 'O',
        'Ù'..='Ü' => 'U',
        'Ý' => 'Y',
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ñ' => 'n',
        'ò'..='ö' | 'ø' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        '\u{a0}' => ' ',
        _ => return None,
    };
    Some(base)
}

/// Advance width of a single character in 1/1000 em.
pub fn char_width(font: BuiltinFont, c: char) -> u16 {
    let table = match font {
        BuiltinFont::Helvetica => &HELVETICA,
        BuiltinFont::HelveticaBold => &HELVETICA_BOLD,
    };
    let lookup = |c: char| {
        (c as u32)
            .checked_sub(FIRST_TABULATED)
            .and_then(|i| table.get(i as usize))
            .copied()
    };

    if let Some(width) = lookup(c) {
        return width;
    }
    match c {
        '°' => 400,
        'º' => 365,
        'ª' => 370,
        '¡' => 333,
        '¿' => 611,
        _ => base_letter(c)
            .and_then(lookup)
            .or_else(|| lookup('?'))
            .unwrap_or(556),
    }
}

/// Width of `text` set in `font` at `size` points.
pub fn string_width(text: &str, font: BuiltinFont, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| char_width(font, c) as u32).sum();
    units as f32 * size / 1000.0
}

pub fn descent(size: f32) -> f32 {
    DESCENT * size / 1000.0
}
