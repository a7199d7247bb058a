//! Themes: immutable palettes mapping token kinds to colors.
//!
//! A theme answers exactly two questions during a highlighting pass:
//! - which color a classified token kind maps to (if any), and
//! - which color unclassified plain text gets.
//!
//! Kinds the map does not cover are not errors; builders resolve them to the
//! fixed fallback color ([`Color::WHITE`]).

use crate::color::Color;
use crate::token::TokenKind;
use rustc_hash::FxHashMap;

/// Per-kind colors plus the color for unclassified text. Never mutated once
/// a builder borrows it; construction is chained `with` calls or a preset.
#[derive(Debug, Clone)]
pub struct Theme {
    token_colors: FxHashMap<TokenKind, Color>,
    plain_text_color: Color,
}

impl Theme {
    /// Theme with an empty mapping: every token falls back, plain text gets
    /// `plain_text_color`.
    #[must_use]
    pub fn new(plain_text_color: Color) -> Self {
        Theme {
            token_colors: FxHashMap::default(),
            plain_text_color,
        }
    }

    /// Add (or replace) the color for one kind.
    #[must_use]
    pub fn with(mut self, kind: TokenKind, color: Color) -> Self {
        self.token_colors.insert(kind, color);
        self
    }

    /// Mapped color for `kind`, if the palette has one.
    #[must_use]
    pub fn color_for(&self, kind: &TokenKind) -> Option<Color> {
        self.token_colors.get(kind).copied()
    }

    /// Color for text the tokenizer left unclassified.
    #[must_use]
    pub fn plain_text_color(&self) -> Color {
        self.plain_text_color
    }

    /// Palette with richer colors for dark backgrounds.
    #[must_use]
    pub fn dark() -> Self {
        Theme::new(Color::new(0xe6, 0xe1, 0xcf))
            .with(TokenKind::Keyword, Color::new(0xff, 0x87, 0x00)) // orange
            .with(TokenKind::StringLiteral, Color::new(0x87, 0xd7, 0x5f)) // green
            .with(TokenKind::NumberLiteral, Color::new(0xd7, 0xaf, 0x5f)) // gold/amber
            .with(TokenKind::TypeName, Color::new(0x87, 0xd7, 0xff)) // light blue
            .with(TokenKind::Call, Color::new(0x5f, 0xd7, 0xff)) // cyan
            .with(TokenKind::Property, Color::new(0xff, 0xd7, 0xaf)) // light sand
            .with(TokenKind::Comment, Color::new(0x94, 0x94, 0x94)) // gray
            .with(TokenKind::Variable, Color::new(0xff, 0xd7, 0x5f)) // yellow
            .with(TokenKind::Preprocessing, Color::new(0xd7, 0x5f, 0xd7)) // magenta
    }

    /// No per-kind colors at all: everything renders in white.
    #[must_use]
    pub fn plain() -> Self {
        Theme::new(Color::WHITE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_hits_mapped_kind() {
        let theme = Theme::new(Color::BLACK).with(TokenKind::Keyword, Color::new(1, 2, 3));
        assert_eq!(theme.color_for(&TokenKind::Keyword), Some(Color::new(1, 2, 3)));
    }

    #[test]
    fn lookup_misses_unmapped_kind() {
        let theme = Theme::new(Color::BLACK).with(TokenKind::Keyword, Color::new(1, 2, 3));
        assert_eq!(theme.color_for(&TokenKind::Comment), None);
        assert_eq!(theme.color_for(&TokenKind::custom("label")), None);
    }

    #[test]
    fn with_replaces_existing_mapping() {
        let theme = Theme::new(Color::BLACK)
            .with(TokenKind::Keyword, Color::new(1, 2, 3))
            .with(TokenKind::Keyword, Color::new(4, 5, 6));
        assert_eq!(theme.color_for(&TokenKind::Keyword), Some(Color::new(4, 5, 6)));
    }

    #[test]
    fn custom_kinds_are_keyed_by_name() {
        let theme = Theme::new(Color::BLACK).with(TokenKind::custom("diff-add"), Color::new(0, 255, 0));
        assert_eq!(
            theme.color_for(&TokenKind::custom("diff-add")),
            Some(Color::new(0, 255, 0))
        );
        assert_eq!(theme.color_for(&TokenKind::custom("diff-del")), None);
    }

    #[test]
    fn dark_preset_covers_the_builtin_taxonomy() {
        let theme = Theme::dark();
        for kind in [
            TokenKind::Keyword,
            TokenKind::StringLiteral,
            TokenKind::NumberLiteral,
            TokenKind::TypeName,
            TokenKind::Call,
            TokenKind::Property,
            TokenKind::Comment,
            TokenKind::Variable,
            TokenKind::Preprocessing,
        ] {
            assert!(theme.color_for(&kind).is_some(), "no color for {kind:?}");
        }
    }

    #[test]
    fn plain_preset_maps_nothing() {
        let theme = Theme::plain();
        assert_eq!(theme.color_for(&TokenKind::Keyword), None);
        assert_eq!(theme.plain_text_color(), Color::WHITE);
    }
}
