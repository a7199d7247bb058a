//! Styled text: the fragment model and the output format producing it.

use crate::color::{ANSI_RESET, Color};
use crate::output::{OutputBuilder, OutputFormat};
use crate::theme::Theme;
use crate::token::TokenKind;
use std::fmt;
use std::ops::Add;

/// One run of text bound to a single resolved color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledFragment {
    pub text: String,
    pub color: Color,
}

impl StyledFragment {
    #[must_use]
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        StyledFragment {
            text: text.into(),
            color,
        }
    }
}

/// Ordered fragments; the finished value of one highlighting pass.
///
/// One fragment per append call, in call order. Adjacent fragments are kept
/// separate even when they resolved to the same color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledText {
    fragments: Vec<StyledFragment>,
}

impl StyledText {
    /// The fragments, in append order.
    #[must_use]
    pub fn fragments(&self) -> &[StyledFragment] {
        &self.fragments
    }

    /// The text content with all styling dropped.
    #[must_use]
    pub fn plain(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }
}

/// Concatenation. Order-preserving: `a + b` is all of `a`'s fragments
/// followed by all of `b`'s.
impl Add for StyledText {
    type Output = StyledText;

    fn add(mut self, rhs: StyledText) -> StyledText {
        self.fragments.extend(rhs.fragments);
        self
    }
}

/// Renders as ANSI truecolor, each fragment in its resolved color.
impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for frag in &self.fragments {
            write!(f, "{}{}{}", frag.color.ansi_prefix(), frag.text, ANSI_RESET)?;
        }
        Ok(())
    }
}

/// Output format producing a [`StyledText`] from a token stream.
#[derive(Debug, Clone)]
pub struct StyledTextFormat {
    theme: Theme,
}

impl StyledTextFormat {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        StyledTextFormat { theme }
    }

    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}

impl OutputFormat for StyledTextFormat {
    type Builder<'a>
        = StyledTextBuilder<'a>
    where
        Self: 'a;

    fn make_builder(&self) -> StyledTextBuilder<'_> {
        StyledTextBuilder {
            theme: &self.theme,
            fragments: Vec::new(),
            fallbacks: 0,
        }
    }
}

/// Accumulator for one highlighting pass.
#[derive(Debug)]
pub struct StyledTextBuilder<'a> {
    theme: &'a Theme,
    fragments: Vec<StyledFragment>,
    fallbacks: usize,
}

impl StyledTextBuilder<'_> {
    /// How many appended tokens missed the theme map and got the fallback
    /// color so far.
    #[must_use]
    pub fn fallback_count(&self) -> usize {
        self.fallbacks
    }
}

impl OutputBuilder for StyledTextBuilder<'_> {
    type Output = StyledText;

    fn add_token(&mut self, text: &str, kind: &TokenKind) {
        let color = match self.theme.color_for(kind) {
            Some(c) => c,
            None => {
                self.fallbacks += 1;
                Color::WHITE
            }
        };
        self.fragments.push(StyledFragment::new(text, color));
    }

    fn add_plain_text(&mut self, text: &str) {
        self.fragments
            .push(StyledFragment::new(text, self.theme.plain_text_color()));
    }

    fn add_whitespace(&mut self, text: &str) {
        self.fragments.push(StyledFragment::new(text, Color::WHITE));
    }

    fn build(self) -> StyledText {
        StyledText {
            fragments: self.fragments,
        }
    }
}
