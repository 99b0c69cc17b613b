//! Logos-based lexer for inline doc-comment markup.
//!
//! Recognizes the inline markers (`@ref`, `@b`, `@e`, `@c`) anywhere in
//! a prose field and produces typed [`Inline`] spans; everything else
//! is coalesced into plain-text spans. Block tags never reach this
//! lexer — the line scanner consumes them first.

use logos::Logos;
use text_size::{TextRange, TextSize};

use super::block::{DocRef, Inline, InlineKind};

/// Logos token enum for inline markup.
///
/// Marker regexes require whitespace between the tag and its payload,
/// so prose like `@because` falls through to plain text instead of
/// being misread as a bold marker.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum MarkupToken {
    /// `@ref some::qualified::name`
    #[regex(r"@ref[ \t]+[A-Za-z_~][A-Za-z0-9_]*(::[A-Za-z_~][A-Za-z0-9_]*)*")]
    Ref,

    /// `@b word` — next-word bold
    #[regex(r"@b[ \t]+\S+")]
    Bold,

    /// `@e word` — next-word emphasis
    #[regex(r"@e[ \t]+\S+")]
    Emphasis,

    /// `@c word` — next-word monospace
    #[regex(r"@c[ \t]+\S+")]
    Code,

    #[regex(r"[^@]+")]
    Text,

    /// A lone `@` that starts no marker; folded back into text.
    #[token("@")]
    Stray,
}

/// Split a marker slice (`@ref  foo::bar`) into its payload.
fn marker_payload(slice: &str) -> &str {
    let after_tag = slice
        .find(|c: char| c == ' ' || c == '\t')
        .map_or("", |i| &slice[i..]);
    after_tag.trim_start_matches([' ', '\t'])
}

/// Scan one prose field into typed inline spans.
///
/// Span ranges are byte ranges within `text`. Adjacent plain-text
/// pieces are merged into a single span.
pub fn scan_inlines(text: &str) -> Vec<Inline> {
    let mut out: Vec<Inline> = Vec::new();
    let mut pending_start: Option<usize> = None;
    let mut pending = String::new();

    let mut flush =
        |out: &mut Vec<Inline>, pending_start: &mut Option<usize>, pending: &mut String, end| {
            if let Some(start) = pending_start.take() {
                let range = TextRange::new(
                    TextSize::new(start as u32),
                    TextSize::new(end as u32),
                );
                out.push(Inline::new(
                    range,
                    InlineKind::Text(std::mem::take(pending).into()),
                ));
            }
        };

    let mut lexer = MarkupToken::lexer(text);
    while let Some(token) = lexer.next() {
        let span = lexer.span();
        let slice = lexer.slice();
        let range = TextRange::new(TextSize::new(span.start as u32), TextSize::new(span.end as u32));

        let kind = match token {
            Ok(MarkupToken::Ref) => InlineKind::Ref(DocRef::new(marker_payload(slice))),
            Ok(MarkupToken::Bold) => InlineKind::Bold(marker_payload(slice).into()),
            Ok(MarkupToken::Emphasis) => InlineKind::Emphasis(marker_payload(slice).into()),
            Ok(MarkupToken::Code) => InlineKind::Code(marker_payload(slice).into()),
            Ok(MarkupToken::Text | MarkupToken::Stray) | Err(()) => {
                if pending_start.is_none() {
                    pending_start = Some(span.start);
                }
                pending.push_str(slice);
                continue;
            }
        };

        flush(&mut out, &mut pending_start, &mut pending, span.start);
        out.push(Inline::new(range, kind));
    }
    flush(&mut out, &mut pending_start, &mut pending, text.len());

    out
}
