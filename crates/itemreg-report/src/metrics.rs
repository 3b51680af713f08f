//! Glyph advance widths for the standard Helvetica faces (1/1000 em).
//!
//! Only needed to centre text; accented Latin letters use the width of
//! their base letter, which is what the standard AFM files list for them.

use crate::layout::Font;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,      // 'p'..'~'
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

const FALLBACK_WIDTH: u16 = 556;

/// Width of `text` in points at `size`
pub fn text_width(text: &str, font: Font, size: f32) -> f32 {
    let table = match font {
        Font::Bold => &HELVETICA_BOLD,
        Font::Regular | Font::Italic => &HELVETICA,
    };

    let units: u32 = text.chars().map(|c| u32::from(glyph_width(table, c))).sum();
    units as f32 * size / 1000.0
}

fn glyph_width(table: &[u16; 95], c: char) -> u16 {
    match c {
        '\u{a0}' => table[0],
        '\u{2022}' => 350,
        _ => {
            let base = fold_accent(c);
            match base as u32 {
                code @ 0x20..=0x7e => table[(code - 0x20) as usize],
                _ => FALLBACK_WIDTH,
            }
        }
    }
}

fn fold_accent(c: char) -> char {
    match c {
        'à'..='å' => 'a',
        'À'..='Å' => 'A',
        'ç' => 'c',
        'Ç' => 'C',
        'è'..='ë' => 'e',
        'È'..='Ë' => 'E',
        'ì'..='ï' => 'i',
        'Ì'..='Ï' => 'I',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ò'..='ö' => 'o',
        'Ò'..='Ö' => 'O',
        'ù'..='ü' => 'u',
        'Ù'..='Ü' => 'U',
        'º' | 'ª' => 'o',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_widths() {
        // "Aa" = 667 + 556
        assert_eq!(text_width("Aa", Font::Regular, 1000.0), 1223.0);
        assert_eq!(text_width("Aa", Font::Bold, 1000.0), 1278.0);
    }

    #[test]
    fn test_accents_use_base_letter() {
        assert_eq!(
            text_width("Educação", Font::Regular, 10.0),
            text_width("Educacao", Font::Regular, 10.0)
        );
    }
}
