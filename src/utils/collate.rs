// Turkish collation for name sorts
// The UI locale is fixed, so ordering follows the Turkish alphabet directly
// instead of pulling in a full ICU collator.

use std::cmp::Ordering;

/// Compare two strings by Turkish alphabet order, case-insensitive on the
/// primary pass. Characters outside the alphabet sort after it by code
/// point, digits and punctuation before it.
pub fn compare_tr(a: &str, b: &str) -> Ordering {
    let ordering = a.chars().map(rank).cmp(b.chars().map(rank));
    // Stable tie-break so equal-ignoring-case titles still order deterministically.
    ordering.then_with(|| a.cmp(b))
}

/// Position of a character in the collation sequence. The Turkish alphabet
/// interleaves ç/ğ/ı/ö/ş/ü with their base letters and puts dotless ı
/// before dotted i; q/w/x keep their Latin slots.
fn rank(c: char) -> u32 {
    const ALPHABET: &[(char, char)] = &[
        ('a', 'A'),
        ('b', 'B'),
        ('c', 'C'),
        ('ç', 'Ç'),
        ('d', 'D'),
        ('e', 'E'),
        ('f', 'F'),
        ('g', 'G'),
        ('ğ', 'Ğ'),
        ('h', 'H'),
        ('ı', 'I'),
        ('i', 'İ'),
        ('j', 'J'),
        ('k', 'K'),
        ('l', 'L'),
        ('m', 'M'),
        ('n', 'N'),
        ('o', 'O'),
        ('ö', 'Ö'),
        ('p', 'P'),
        ('q', 'Q'),
        ('r', 'R'),
        ('s', 'S'),
        ('ş', 'Ş'),
        ('t', 'T'),
        ('u', 'U'),
        ('ü', 'Ü'),
        ('v', 'V'),
        ('w', 'W'),
        ('x', 'X'),
        ('y', 'Y'),
        ('z', 'Z'),
    ];

    for (index, &(lower, upper)) in ALPHABET.iter().enumerate() {
        if c == lower || c == upper {
            // Offset past the pre-letter band used by digits and punctuation.
            return 0x1_0000 + index as u32;
        }
    }

    if c.is_ascii_digit() || c.is_ascii_punctuation() || c.is_whitespace() {
        c as u32
    } else {
        0x2_0000 + c as u32
    }
}
