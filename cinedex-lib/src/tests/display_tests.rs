use super::*;

#[test]
fn test_display_width() {
    assert_eq!(display_width(""), 0);
    assert_eq!(display_width("Heat"), 4);
    assert_eq!(display_width("花樣年華"), 8);
    assert_eq!(display_width("千と千尋"), 8);
    assert_eq!(display_width("Amélie"), 6);
    assert_eq!(display_width("ＡＢ"), 4);
}

#[test]
fn test_fit_pads_short_text() {
    assert_eq!(fit_to_width("Heat", 8), "Heat    ");
    assert_eq!(fit_to_width("", 3), "   ");
    assert_eq!(fit_to_width("花樣", 6), "花樣  ");
}

#[test]
fn test_fit_exact_width_unchanged() {
    assert_eq!(fit_to_width("Heat", 4), "Heat");
    assert_eq!(fit_to_width("花樣年華", 8), "花樣年華");
}

#[test]
fn test_fit_truncates_with_ellipsis() {
    assert_eq!(fit_to_width("The Godfather Part II", 10), "The God...");
    assert_eq!(display_width(&fit_to_width("The Godfather Part II", 10)), 10);
}

#[test]
fn test_fit_truncates_wide_chars_on_cell_boundary() {
    // 7 cells available before the ellipsis: three wide chars fit, the
    // fourth would overflow, so one space of padding fills the gap.
    let fitted = fit_to_width("千と千尋の神隠し", 10);
    assert_eq!(fitted, "千と千... ");
    assert_eq!(display_width(&fitted), 10);
}

#[test]
fn test_fit_tiny_width() {
    assert_eq!(fit_to_width("Heat", 2), "He");
    assert_eq!(fit_to_width("花樣", 1), " ");
}

#[test]
fn test_emoji_and_symbols_are_wide() {
    assert_eq!(display_width("🚀"), 2);
    assert_eq!(display_width("Rocket 🚀"), 9);
    assert_eq!(display_width("⚡"), 2);
    assert_eq!(display_width("⭐⭐"), 4);
    assert_eq!(display_width("✔"), 1);
    assert_eq!(display_width("❤\u{fe0f}"), 1);
    assert_eq!(fit_to_width("🚀 Apollo", 10), "🚀 Apollo ");
}
