//! HTML output: the same append contract, emitted as `<span>` runs.
//!
//! Token and plain-text colors become inline `style` attributes; whitespace
//! passes through unstyled so it inherits the surrounding element's default.

use crate::color::Color;
use crate::output::{OutputBuilder, OutputFormat};
use crate::theme::Theme;
use crate::token::TokenKind;

/// Output format producing a string of HTML `<span>` runs.
///
/// No surrounding `<pre>`/`<code>` wrapper is emitted; that is the caller's
/// page structure, not the highlighter's.
#[derive(Debug, Clone)]
pub struct HtmlFormat {
    theme: Theme,
}

impl HtmlFormat {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        HtmlFormat { theme }
    }
}

impl OutputFormat for HtmlFormat {
    type Builder<'a>
        = HtmlBuilder<'a>
    where
        Self: 'a;

    fn make_builder(&self) -> HtmlBuilder<'_> {
        HtmlBuilder {
            theme: &self.theme,
            out: String::new(),
        }
    }
}

/// Accumulates escaped `<span>` runs for one highlighting pass.
#[derive(Debug)]
pub struct HtmlBuilder<'a> {
    theme: &'a Theme,
    out: String,
}

impl HtmlBuilder<'_> {
    fn push_span(&mut self, text: &str, color: Color) {
        self.out.push_str("<span style=\"color: ");
        self.out.push_str(&color.to_hex());
        self.out.push_str("\">");
        push_escaped(&mut self.out, text);
        self.out.push_str("</span>");
    }
}

impl OutputBuilder for HtmlBuilder<'_> {
    type Output = String;

    fn add_token(&mut self, text: &str, kind: &TokenKind) {
        let color = self.theme.color_for(kind).unwrap_or(Color::WHITE);
        self.push_span(text, color);
    }

    fn add_plain_text(&mut self, text: &str) {
        self.push_span(text, self.theme.plain_text_color());
    }

    fn add_whitespace(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn build(self) -> String {
        self.out
    }
}

/// Text-node escaping; attribute values here are hex colors we generate, so
/// quotes need no handling.
fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}
