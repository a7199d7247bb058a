//! codetint: turn a stream of classified syntax tokens into styled text.
//!
//! Tokenizing source and choosing a palette happen in the caller; this crate
//! only maps each token to a colored fragment and concatenates the fragments
//! in call order. Output targets are pluggable: the built-in formats produce
//! a [`StyledText`] value (renderable as ANSI truecolor) or a run of HTML
//! `<span>`s.

pub mod color;
pub mod html;
pub mod output;
pub mod text;
pub mod theme;
pub mod token;

pub use color::Color;
pub use html::HtmlFormat;
pub use output::{OutputBuilder, OutputFormat};
pub use text::{StyledFragment, StyledText, StyledTextBuilder, StyledTextFormat};
pub use theme::Theme;
pub use token::TokenKind;
