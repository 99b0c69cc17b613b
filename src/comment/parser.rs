//! Doc-comment parser — raw text to [`DocBlock`].
//!
//! The scanner is line-oriented: the brief is split off first (up to the
//! first blank line or sentence terminator), then the remainder is
//! walked line-by-line for block tags. A tagged section accumulates
//! text until the next tag or the end of the block. Inline markers are
//! recognized in every text field by the [`lexer`](super::lexer) and
//! retained as typed spans.
//!
//! Validation is non-fatal throughout: a doc naming an undeclared
//! parameter is kept with a warning, an undeclared tag is preserved
//! verbatim under `extras`, and declared parameters without docs are
//! recorded as undocumented.

use std::sync::Arc;

use crate::diagnostics::Warning;

use super::block::{DocBlock, DocRef, ExtraTag, NoteDoc, NoteKind, ParamDoc, Paragraph, ThrowsDoc};
use super::lexer::scan_inlines;

/// Where accumulated lines are headed once the section ends.
enum Section {
    Description,
    Param(Arc<str>),
    TemplateParam(Arc<str>),
    Return,
    Throws(Arc<str>),
    Note(NoteKind, Option<Arc<str>>),
    Extra(Arc<str>),
}

/// Parse one raw doc comment against the declaration's parameter and
/// template-parameter name lists.
///
/// Returns the structured block plus the non-fatal warnings produced
/// while parsing, each tagged with `origin` (the owning symbol's
/// qualified name). Pure function of its inputs, safe to run for
/// unrelated symbols in parallel.
pub fn parse_doc(
    raw: &str,
    params: &[Arc<str>],
    template_params: &[Arc<str>],
    origin: &Arc<str>,
) -> (DocBlock, Vec<Warning>) {
    let mut block = DocBlock::default();
    let mut warnings = Vec::new();

    let text = raw.replace("\r\n", "\n");
    if text.trim().is_empty() {
        return (block, warnings);
    }

    let lines: Vec<&str> = text.lines().collect();
    let mut idx = 0;

    // Skip leading blank lines.
    while idx < lines.len() && lines[idx].trim().is_empty() {
        idx += 1;
    }

    // Brief: up to the first blank line, tag line, or sentence end.
    let mut brief_text = String::new();
    let mut description_carry: Option<String> = None;
    while idx < lines.len() {
        let line = lines[idx].trim();
        if line.is_empty() || tag_of(line).is_some() {
            break;
        }
        if let Some(end) = sentence_end(line) {
            push_joined(&mut brief_text, &line[..end]);
            let rest = line[end..].trim_start();
            if !rest.is_empty() {
                description_carry = Some(rest.to_string());
            }
            idx += 1;
            break;
        }
        push_joined(&mut brief_text, line);
        idx += 1;
    }
    block.brief = scan_inlines(&brief_text);

    // Remainder: tagged sections and description paragraphs.
    let mut section = Section::Description;
    let mut buffer = String::new();
    if let Some(carry) = description_carry {
        buffer = carry;
    }

    macro_rules! finish_section {
        () => {
            finish(&mut block, &section, &mut buffer)
        };
    }

    while idx < lines.len() {
        let line = lines[idx].trim();
        idx += 1;

        if line.is_empty() {
            // Paragraph break in the description; tagged sections simply
            // continue past blank lines until the next tag.
            if matches!(section, Section::Description) {
                finish_section!();
            }
            continue;
        }

        let Some((tag, rest)) = tag_of(line) else {
            push_joined(&mut buffer, line);
            continue;
        };

        finish_section!();
        section = match tag {
            "param" => {
                let (name, text) = split_word(rest);
                buffer = text.to_string();
                Section::Param(Arc::from(name))
            }
            "tparam" => {
                let (name, text) = split_word(rest);
                buffer = text.to_string();
                Section::TemplateParam(Arc::from(name))
            }
            "return" | "returns" => {
                buffer = rest.to_string();
                Section::Return
            }
            "throws" | "exception" => {
                let (condition, text) = split_word(rest);
                buffer = text.to_string();
                Section::Throws(Arc::from(condition))
            }
            "note" => {
                buffer = rest.to_string();
                Section::Note(NoteKind::Note, None)
            }
            "warning" => {
                buffer = rest.to_string();
                Section::Note(NoteKind::Warning, None)
            }
            "threadsafety" => {
                buffer = rest.to_string();
                Section::Note(NoteKind::ThreadSafety, None)
            }
            "par" => {
                let title = (!rest.is_empty()).then(|| Arc::from(rest));
                buffer = String::new();
                Section::Note(NoteKind::Par, title)
            }
            "see" | "sa" => {
                for token in rest.split_whitespace() {
                    block.see_also.push(DocRef::new(token));
                }
                buffer = String::new();
                Section::Description
            }
            unknown => {
                buffer = rest.to_string();
                Section::Extra(Arc::from(unknown))
            }
        };
    }
    finish_section!();

    order_param_docs(&mut block.params, params, &mut warnings, origin, false);
    order_param_docs(
        &mut block.template_params,
        template_params,
        &mut warnings,
        origin,
        true,
    );

    (block, warnings)
}

/// Close out the current section, moving the buffered text into the
/// matching [`DocBlock`] field.
fn finish(block: &mut DocBlock, section: &Section, buffer: &mut String) {
    let text = std::mem::take(buffer);
    let text = text.trim();
    if text.is_empty() && !matches!(section, Section::Note(NoteKind::Par, Some(_))) {
        return;
    }

    match section {
        Section::Description => {
            block.description.push(Paragraph(scan_inlines(text)));
        }
        Section::Param(name) => {
            block.params.push(ParamDoc {
                name: name.clone(),
                text: scan_inlines(text),
                known: true,
            });
        }
        Section::TemplateParam(name) => {
            block.template_params.push(ParamDoc {
                name: name.clone(),
                text: scan_inlines(text),
                known: true,
            });
        }
        Section::Return => match &mut block.returns {
            Some(existing) => existing.extend(scan_inlines(text)),
            None => block.returns = Some(scan_inlines(text)),
        },
        Section::Throws(condition) => {
            block.throws.push(ThrowsDoc {
                condition: condition.clone(),
                text: scan_inlines(text),
            });
        }
        Section::Note(kind, title) => {
            block.notes.push(NoteDoc {
                kind: *kind,
                title: title.clone(),
                text: scan_inlines(text),
            });
        }
        Section::Extra(tag) => {
            block.extras.push(ExtraTag {
                tag: tag.clone(),
                text: Arc::from(text),
            });
        }
    }
}

/// Reorder parsed parameter docs to declaration order, record
/// undocumented declared parameters, and flag unknown names.
fn order_param_docs(
    docs: &mut Vec<ParamDoc>,
    declared: &[Arc<str>],
    warnings: &mut Vec<Warning>,
    origin: &Arc<str>,
    is_template: bool,
) {
    if docs.is_empty() && declared.is_empty() {
        return;
    }

    let parsed = std::mem::take(docs);
    let mut leftover: Vec<ParamDoc> = Vec::new();
    let mut by_declared: Vec<ParamDoc> = Vec::new();

    for name in declared {
        let mut found = false;
        for doc in parsed.iter().filter(|d| &d.name == name) {
            by_declared.push(doc.clone());
            found = true;
        }
        if !found {
            warnings.push(Warning::undocumented_parameter(
                origin.clone(),
                name.clone(),
                is_template,
            ));
            by_declared.push(ParamDoc::undocumented(name.clone()));
        }
    }

    for doc in parsed {
        if !declared.contains(&doc.name) {
            warnings.push(Warning::unknown_parameter(origin.clone(), doc.name.clone()));
            leftover.push(ParamDoc {
                known: false,
                ..doc
            });
        }
    }

    by_declared.extend(leftover);
    *docs = by_declared;
}

/// Recognize a block tag at the start of a line: `@word rest`.
///
/// Inline markers (`@ref`, `@b`, `@e`, `@c`) are not block tags even at
/// line starts; they stay in the prose for the inline lexer.
fn tag_of(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix('@')?;
    let end = rest
        .find(|c: char| c.is_whitespace())
        .unwrap_or(rest.len());
    let tag = &rest[..end];
    if tag.is_empty() || matches!(tag, "ref" | "b" | "e" | "c") {
        return None;
    }
    Some((tag, rest[end..].trim_start()))
}

/// Split off the first whitespace-delimited word.
fn split_word(text: &str) -> (&str, &str) {
    let end = text
        .find(|c: char| c.is_whitespace())
        .unwrap_or(text.len());
    (&text[..end], text[end..].trim_start())
}

/// Byte offset just past the first sentence terminator followed by
/// whitespace or end of line, if any.
fn sentence_end(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if matches!(b, b'.' | b'!' | b'?') {
            let next = bytes.get(i + 1);
            if next.is_none() || next.is_some_and(|n| n.is_ascii_whitespace()) {
                return Some(i + 1);
            }
        }
    }
    None
}

/// Append a line to accumulated prose, separating with a single space.
fn push_joined(buffer: &mut String, line: &str) {
    if !buffer.is_empty() {
        buffer.push(' ');
    }
    buffer.push_str(line);
}
