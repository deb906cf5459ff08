//! # BoolIcon Component
//!
//! Renders a boolean as one of exactly two glyphs: a green check for `true`,
//! a red cross for `false`. There is no third (unknown) state; callers with
//! an optional value decide what to show when it is absent.

use ratatui::style::{Color, Style};
use ratatui::text::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolGlyph {
    Affirmative,
    Negative,
}

impl BoolGlyph {
    pub fn symbol(&self) -> &'static str {
        match self {
            BoolGlyph::Affirmative => "✔",
            BoolGlyph::Negative => "✘",
        }
    }

    pub fn style(&self) -> Style {
        match self {
            BoolGlyph::Affirmative => Style::default().fg(Color::Green),
            BoolGlyph::Negative => Style::default().fg(Color::Red),
        }
    }
}

pub struct BoolIcon {
    pub value: bool,
}

impl BoolIcon {
    pub fn new(value: bool) -> Self {
        Self { value }
    }

    pub fn glyph(&self) -> BoolGlyph {
        if self.value {
            BoolGlyph::Affirmative
        } else {
            BoolGlyph::Negative
        }
    }

    /// The icon as an inline span, for embedding in list rows.
    pub fn span(&self) -> Span<'static> {
        let glyph = self.glyph();
        Span::styled(glyph.symbol(), glyph.style())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_true_is_affirmative() {
        assert_eq!(BoolIcon::new(true).glyph(), BoolGlyph::Affirmative);
    }

    #[test]
    fn test_false_is_negative() {
        assert_eq!(BoolIcon::new(false).glyph(), BoolGlyph::Negative);
    }

    #[test]
    fn test_span_uses_glyph_style() {
        let span = BoolIcon::new(true).span();
        assert_eq!(span.content, "✔");
        assert_eq!(span.style.fg, Some(Color::Green));
        let span = BoolIcon::new(false).span();
        assert_eq!(span.content, "✘");
        assert_eq!(span.style.fg, Some(Color::Red));
    }
}
