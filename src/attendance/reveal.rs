// src/attendance/reveal.rs - Per-character text reveal schedule
//
// The attendance page animates its greeting one visible character at a
// time. Frames are cut on extended grapheme clusters, not bytes or
// scalars: Ethiopic combining sequences must never be split mid-glyph.
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealFrame {
    pub grapheme: String,
    pub at_ms: u64,
}

/// One frame per grapheme, staggered by `step_ms` starting at 0.
pub fn reveal_frames(text: &str, step_ms: u64) -> Vec<RevealFrame> {
    text.graphemes(true)
        .enumerate()
        .map(|(i, g)| RevealFrame {
            grapheme: g.to_string(),
            at_ms: i as u64 * step_ms,
        })
        .collect()
}

/// Total duration of the reveal, through the last frame's start.
pub fn reveal_duration_ms(text: &str, step_ms: u64) -> u64 {
    match text.graphemes(true).count() {
        0 => 0,
        n => (n as u64 - 1) * step_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_are_staggered_from_zero() {
        let frames = reveal_frames("abc", 40);
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].at_ms, 0);
        assert_eq!(frames[2].at_ms, 80);
        assert_eq!(frames[1].grapheme, "b");
    }

    #[test]
    fn ethiopic_text_is_cut_on_graphemes() {
        let frames = reveal_frames("ሰላም", 10);
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].grapheme, "ሰ");
        assert_eq!(frames[2].grapheme, "ም");
    }

    #[test]
    fn empty_text_yields_no_frames() {
        assert!(reveal_frames("", 40).is_empty());
        assert_eq!(reveal_duration_ms("", 40), 0);
    }
}
