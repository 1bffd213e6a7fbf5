//! Track-title segmentation.
//!
//! Long titles usually carry a qualifier (`"Song (Remastered 2023)"`,
//! `"Song - Radio Edit"`), and painting the whole string as one run either
//! truncates the part that matters or wraps mid-word.
//! [`format_title`] finds the qualifier, demotes it to a reduced-emphasis
//! span, and inserts an explicit break opportunity so the renderer prefers
//! to wrap there.

use std::sync::LazyLock;

use regex::Regex;

/// Non-breaking space: glues the secondary clause together.
pub const NBSP: char = '\u{00A0}';
/// Zero-width space: an invisible break opportunity.
pub const ZWSP: char = '\u{200B}';

/// Visual weight of a title span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Primary,
    /// Rendered smaller (the original widget uses 0.8em).
    Reduced,
}

/// One run of formatted title text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleSpan {
    pub text: String,
    pub emphasis: Emphasis,
}

impl TitleSpan {
    fn primary(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Emphasis::Primary,
        }
    }

    fn reduced(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Emphasis::Reduced,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cut {
    Dash,
    Bracket,
    Paren,
}

/// Cut patterns in priority order.  A title can satisfy several, and the
/// first whole-remainder match decides the split.  Each regex captures the
/// primary text and the qualifier tail; `(.+?)` keeps the cut leftmost.
static CUTS: LazyLock<Vec<(Cut, Regex)>> = LazyLock::new(|| {
    vec![
        (Cut::Dash, Regex::new(r"^(.+?)(\s-\s.+)$").unwrap()),
        (Cut::Bracket, Regex::new(r"^(.+?)(\s\[[^\]]+\].*)$").unwrap()),
        (Cut::Paren, Regex::new(r"^(.+?)(\s\([^)]+\).*)$").unwrap()),
    ]
});

/// Split a title into 1–3 spans: the primary text, optionally followed by a
/// break-prefix span and a reduced-emphasis secondary span.
///
/// The secondary clause has all of its whitespace pinned to no-break spaces,
/// so it never wraps internally; the renderer may still break at the prefix
/// when the whole clause does not fit.  Only one split is ever produced;
/// the qualifier is not split again.
pub fn format_title(name: &str) -> Vec<TitleSpan> {
    if name.is_empty() {
        return Vec::new();
    }

    for (cut, re) in CUTS.iter() {
        if let Some(caps) = re.captures(name) {
            let primary = caps.get(1).unwrap().as_str();
            let tail = caps.get(2).unwrap().as_str().trim();

            let (prefix, secondary) = match cut {
                // Break after the dash, not before: the dash stays glued to
                // the qualifier with an NBSP, and the ZWSP right after it
                // gives the renderer its wrap point.
                Cut::Dash => {
                    let rest = tail.strip_prefix('-').unwrap_or(tail).trim_start();
                    (" ".to_string(), pin_whitespace(&format!("-{NBSP}{ZWSP}{rest}")))
                }
                // Invisible break opportunity just before the qualifier.
                Cut::Bracket | Cut::Paren => (format!(" {ZWSP}"), pin_whitespace(tail)),
            };

            return vec![
                TitleSpan::primary(primary),
                TitleSpan::primary(prefix),
                TitleSpan::reduced(secondary),
            ];
        }
    }

    vec![TitleSpan::primary(name)]
}

/// Replace every whitespace character with NBSP.  ZWSP is not whitespace
/// and survives, so inserted break opportunities stay intact.
fn pin_whitespace(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_whitespace() { NBSP } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secondary(spans: &[TitleSpan]) -> &TitleSpan {
        assert_eq!(spans.len(), 3, "expected a split title");
        &spans[2]
    }

    #[test]
    fn test_empty_title() {
        assert!(format_title("").is_empty());
    }

    #[test]
    fn test_plain_title_passes_through() {
        let spans = format_title("Plain Title");
        assert_eq!(spans, vec![TitleSpan::primary("Plain Title")]);
    }

    #[test]
    fn test_dash_split() {
        let spans = format_title("Imagine - Remastered 2010");
        assert_eq!(spans[0], TitleSpan::primary("Imagine"));
        assert_eq!(spans[1], TitleSpan::primary(" "));
        let sec = secondary(&spans);
        assert_eq!(sec.emphasis, Emphasis::Reduced);
        assert_eq!(sec.text, format!("-{NBSP}{ZWSP}Remastered{NBSP}2010"));
    }

    #[test]
    fn test_bracket_split() {
        let spans = format_title("Track Name [Live Version]");
        assert_eq!(spans[0], TitleSpan::primary("Track Name"));
        assert_eq!(spans[1], TitleSpan::primary(format!(" {ZWSP}")));
        assert_eq!(secondary(&spans).text, format!("[Live{NBSP}Version]"));
    }

    #[test]
    fn test_paren_split() {
        let spans = format_title("Track Name (Live)");
        assert_eq!(spans[0], TitleSpan::primary("Track Name"));
        assert_eq!(spans[1], TitleSpan::primary(format!(" {ZWSP}")));
        let sec = secondary(&spans);
        assert_eq!(sec.text, "(Live)");
        assert_eq!(sec.emphasis, Emphasis::Reduced);
    }

    #[test]
    fn test_dash_beats_trailing_paren() {
        let spans = format_title("Song - Version (2020)");
        assert_eq!(spans[0], TitleSpan::primary("Song"));
        // The parenthetical rides along inside the dash qualifier.
        assert_eq!(
            secondary(&spans).text,
            format!("-{NBSP}{ZWSP}Version{NBSP}(2020)")
        );
    }

    #[test]
    fn test_leftmost_dash_wins() {
        let spans = format_title("A - B - C");
        assert_eq!(spans[0], TitleSpan::primary("A"));
        assert_eq!(secondary(&spans).text, format!("-{NBSP}{ZWSP}B{NBSP}-{NBSP}C"));
    }

    #[test]
    fn test_paren_with_trailing_text() {
        let spans = format_title("Song (feat. Artist) Extended");
        assert_eq!(spans[0], TitleSpan::primary("Song"));
        assert_eq!(
            secondary(&spans).text,
            format!("(feat.{NBSP}Artist){NBSP}Extended")
        );
    }

    #[test]
    fn test_hyphen_without_spaces_is_not_a_cut() {
        let spans = format_title("Twenty-One");
        assert_eq!(spans, vec![TitleSpan::primary("Twenty-One")]);
    }

    #[test]
    fn test_unclosed_bracket_falls_through_to_paren() {
        let spans = format_title("Song [oops (Live)");
        assert_eq!(spans[0], TitleSpan::primary("Song [oops"));
        assert_eq!(secondary(&spans).text, "(Live)");
    }
}
