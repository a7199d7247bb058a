//! The pluggable output surface: a format starts a build session bound to
//! its theme, the session accumulates appends, `build` finishes the value.

use crate::token::TokenKind;

/// An output target (styled text, HTML, ...) that can start build sessions.
pub trait OutputFormat {
    /// Session type; borrows the format (and with it its theme) while open.
    type Builder<'a>: OutputBuilder
    where
        Self: 'a;

    /// Start a new, empty build session.
    fn make_builder(&self) -> Self::Builder<'_>;
}

/// One highlighting session: append fragments in source order, then `build`.
///
/// Appends never fail. A kind the theme does not map renders in the fallback
/// color rather than being reported; that is palette policy, not an error.
/// `build` takes the session by value, so a finished session cannot be
/// appended to again.
pub trait OutputBuilder {
    /// Finished value produced by [`build`](OutputBuilder::build).
    type Output;

    /// Append one classified token.
    fn add_token(&mut self, text: &str, kind: &TokenKind);

    /// Append unclassified text in the theme's plain-text color.
    fn add_plain_text(&mut self, text: &str);

    /// Append whitespace, styled with the fixed default and never the theme.
    fn add_whitespace(&mut self, text: &str);

    /// Consume the session and return everything appended, in call order.
    fn build(self) -> Self::Output;
}
