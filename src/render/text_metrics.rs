/// Backend-independent label width estimate in pixels.
///
/// Frames are laid out without a font engine, so widths come from per-glyph
/// em factors. Never narrower than one em.
#[must_use]
pub fn estimate_text_width_px(text: &str, font_size_px: f64) -> f64 {
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' | 'i' | 'l' | 'j' | '\'' => 0.3,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.3,
            'm' | 'w' | 'M' | 'W' => 0.86,
            ch if ch.is_uppercase() => 0.68,
            _ => 0.56,
        }
    });
    (units * font_size_px).max(font_size_px)
}

#[cfg(test)]
mod tests {
    use super::estimate_text_width_px;

    #[test]
    fn width_grows_with_text_and_font_size() {
        let short = estimate_text_width_px("Intro", 14.0);
        let long = estimate_text_width_px("Introduction", 14.0);
        assert!(long > short);
        assert!(estimate_text_width_px("Intro", 28.0) > short);
    }

    #[test]
    fn empty_text_is_one_em_wide() {
        assert_eq!(estimate_text_width_px("", 12.0), 12.0);
    }
}
