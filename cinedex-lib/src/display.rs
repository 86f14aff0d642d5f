//! Helpers for laying out text in fixed-width terminal columns.
//!
//! Titles in the catalog are often CJK, which occupy two terminal cells per
//! character, so padding has to count cells rather than `char`s.

/// Number of terminal cells `s` occupies.
pub fn display_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Truncate `s` to at most `width` cells (ending in "..." when cut) and pad
/// it with spaces to exactly `width` cells.
pub fn fit_to_width(s: &str, width: usize) -> String {
    let full = display_width(s);
    let mut out = if full <= width {
        s.to_string()
    } else if width > 3 {
        let mut cut = take_width(s, width - 3);
        cut.push_str("...");
        cut
    } else {
        take_width(s, width)
    };
    let used = display_width(&out);
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    out
}

/// Longest prefix of `s` that fits in `width` cells.
fn take_width(s: &str, width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = char_width(c);
        if used + w > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

fn char_width(c: char) -> usize {
    match c as u32 {
        0 => 0,
        cp if cp < 0x20 || (0x7f..0xa0).contains(&cp) => 0,
        // Combining diacritical marks
        0x0300..=0x036f => 0,
        // Zero-width space, joiners and variation selectors
        0x200b..=0x200f | 0xfe00..=0xfe0f => 0,
        cp if is_wide(cp) => 2,
        _ => 1,
    }
}

/// East Asian Wide and Fullwidth ranges, including emoji that default to
/// emoji presentation.
fn is_wide(cp: u32) -> bool {
    matches!(
        cp,
        0x1100..=0x115f
            | 0x231a..=0x231b
            | 0x2329..=0x232a
            | 0x23e9..=0x23ec
            | 0x23f0
            | 0x23f3
            | 0x25fd..=0x25fe
            | 0x2614..=0x2615
            | 0x2648..=0x2653
            | 0x267f
            | 0x2693
            | 0x26a1
            | 0x26aa..=0x26ab
            | 0x26bd..=0x26be
            | 0x26c4..=0x26c5
            | 0x26ce
            | 0x26d4
            | 0x26ea
            | 0x26f2..=0x26f3
            | 0x26f5
            | 0x26fa
            | 0x26fd
            | 0x2705
            | 0x270a..=0x270b
            | 0x2728
            | 0x274c
            | 0x274e
            | 0x2753..=0x2755
            | 0x2757
            | 0x2795..=0x2797
            | 0x27b0
            | 0x27bf
            | 0x2b1b..=0x2b1c
            | 0x2b50
            | 0x2b55
            | 0x2e80..=0x303e
            | 0x3041..=0x33ff
            | 0x3400..=0x4dbf
            | 0x4e00..=0x9fff
            | 0xa000..=0xa4cf
            | 0xac00..=0xd7a3
            | 0xf900..=0xfaff
            | 0xfe30..=0xfe4f
            | 0xff00..=0xff60
            | 0xffe0..=0xffe6
            | 0x1f004
            | 0x1f0cf
            | 0x1f18e
            | 0x1f191..=0x1f19a
            | 0x1f200..=0x1f202
            | 0x1f210..=0x1f23b
            | 0x1f240..=0x1f248
            | 0x1f250..=0x1f251
            | 0x1f300..=0x1f64f
            | 0x1f680..=0x1f6ff
            | 0x1f7e0..=0x1f7eb
            | 0x1f900..=0x1f9ff
            | 0x1fa70..=0x1faff
            | 0x20000..=0x2fffd
            | 0x30000..=0x3fffd
    )
}

#[cfg(test)]
#[path = "tests/display_tests.rs"]
mod tests;
