//! Vietnamese name collation.
//!
//! Sibling ordering breaks birth-year ties by name, and names must sort
//! the way a Vietnamese reader expects: `ă` and `â` are letters of their
//! own after `a`, `đ` follows `d`, and tone marks only matter once the
//! bare letters are equal.
//!
//! Comparison runs in three levels, like a locale collator:
//! 1. base letters (alphabet position, tone marks stripped)
//! 2. tone marks (ngang, huyền, hỏi, ngã, sắc, nặng)
//! 3. case (lowercase before uppercase)
//!
//! Strings still equal after that fall back to code-point order so the
//! result is a total order.

use std::cmp::Ordering;

/// The Vietnamese alphabet, extended with the Latin letters used in
/// loanwords and foreign names.
const ALPHABET: [char; 33] = [
    'a', 'ă', 'â', 'b', 'c', 'd', 'đ', 'e', 'ê', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n',
    'o', 'ô', 'ơ', 'p', 'q', 'r', 's', 't', 'u', 'ư', 'v', 'w', 'x', 'y', 'z',
];

/// Toned vowels, indexed by tone: huyền, hỏi, ngã, sắc, nặng.
const TONED_VOWELS: [(char, [char; 5]); 12] = [
    ('a', ['à', 'ả', 'ã', 'á', 'ạ']),
    ('ă', ['ằ', 'ẳ', 'ẵ', 'ắ', 'ặ']),
    ('â', ['ầ', 'ẩ', 'ẫ', 'ấ', 'ậ']),
    ('e', ['è', 'ẻ', 'ẽ', 'é', 'ẹ']),
    ('ê', ['ề', 'ể', 'ễ', 'ế', 'ệ']),
    ('i', ['ì', 'ỉ', 'ĩ', 'í', 'ị']),
    ('o', ['ò', 'ỏ', 'õ', 'ó', 'ọ']),
    ('ô', ['ồ', 'ổ', 'ỗ', 'ố', 'ộ']),
    ('ơ', ['ờ', 'ở', 'ỡ', 'ớ', 'ợ']),
    ('u', ['ù', 'ủ', 'ũ', 'ú', 'ụ']),
    ('ư', ['ừ', 'ử', 'ữ', 'ứ', 'ự']),
    ('y', ['ỳ', 'ỷ', 'ỹ', 'ý', 'ỵ']),
];

/// One character split into its collation levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Folded {
    /// Non-letters sort before letters, ordered by code point.
    primary: (u8, u32),
    tone: u8,
    upper: bool,
}

fn fold(c: char) -> Folded {
    let lower = c.to_lowercase().next().unwrap_or(c);
    let upper = lower != c;

    let (base, tone) = TONED_VOWELS
        .iter()
        .find_map(|(base, toned)| {
            toned
                .iter()
                .position(|&t| t == lower)
                .map(|i| (*base, i as u8 + 1))
        })
        .unwrap_or((lower, 0));

    let primary = match ALPHABET.iter().position(|&l| l == base) {
        Some(rank) => (1, rank as u32),
        None => (0, base as u32),
    };

    Folded {
        primary,
        tone,
        upper,
    }
}

/// Compares two names using Vietnamese collation rules.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let fa: Vec<Folded> = a.chars().map(fold).collect();
    let fb: Vec<Folded> = b.chars().map(fold).collect();

    let primary = fa.iter().map(|f| f.primary).cmp(fb.iter().map(|f| f.primary));
    let tones = || fa.iter().map(|f| f.tone).cmp(fb.iter().map(|f| f.tone));
    let case = || fa.iter().map(|f| f.upper).cmp(fb.iter().map(|f| f.upper));

    primary
        .then_with(tones)
        .then_with(case)
        .then_with(|| a.cmp(b))
}
