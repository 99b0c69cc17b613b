//! Structured documentation blocks.
//!
//! A [`DocBlock`] is the parsed form of one raw doc comment. Prose
//! fields are sequences of typed [`Inline`] spans; cross-references are
//! retained as [`DocRef`]s whose `resolved` slot stays `None` until the
//! resolution stage fills it.

use std::sync::Arc;

use text_size::TextRange;

/// Outcome of resolving a [`DocRef`] against the symbol index.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
#[cfg_attr(feature = "interchange", serde(rename_all = "snake_case"))]
pub enum RefTarget {
    /// Resolved to an included symbol; render as a link.
    Linked(Arc<str>),
    /// Resolved to a symbol excluded by the filter; render as plain
    /// text so no dangling link is produced.
    Hidden(Arc<str>),
}

impl RefTarget {
    /// Qualified name of the target, linked or not.
    pub fn qualified_name(&self) -> &Arc<str> {
        match self {
            RefTarget::Linked(q) | RefTarget::Hidden(q) => q,
        }
    }

    pub fn is_linked(&self) -> bool {
        matches!(self, RefTarget::Linked(_))
    }
}

/// A cross-reference token found in documentation prose.
///
/// `resolved` is `None` both before resolution and after a failed
/// resolution; a failed resolution additionally produces a warning.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct DocRef {
    /// The token as written, e.g. `example::enum_t::one`.
    pub token: Arc<str>,
    /// Filled by the resolution stage.
    pub resolved: Option<RefTarget>,
}

impl DocRef {
    pub fn new(token: impl Into<Arc<str>>) -> Self {
        Self {
            token: token.into(),
            resolved: None,
        }
    }
}

/// The kind of an inline span.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
#[cfg_attr(feature = "interchange", serde(rename_all = "snake_case"))]
pub enum InlineKind {
    /// Plain prose.
    Text(Arc<str>),
    Bold(Arc<str>),
    Emphasis(Arc<str>),
    Code(Arc<str>),
    /// An inline cross-reference, replaced post-resolution.
    Ref(DocRef),
}

/// One typed span of prose.
///
/// `range` is the byte range of the span within the owning field's
/// text (not within the whole raw comment); markers are retained as
/// spans rather than stripped, so a renderer can substitute them in
/// place.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct Inline {
    pub range: TextRange,
    pub kind: InlineKind,
}

impl Inline {
    pub fn new(range: TextRange, kind: InlineKind) -> Self {
        Self { range, kind }
    }

    /// The raw text content of this span (reference tokens render as
    /// their token text until resolved).
    pub fn text(&self) -> &str {
        match &self.kind {
            InlineKind::Text(t)
            | InlineKind::Bold(t)
            | InlineKind::Emphasis(t)
            | InlineKind::Code(t) => t,
            InlineKind::Ref(r) => &r.token,
        }
    }
}

/// One paragraph of prose: a sequence of inline spans.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct Paragraph(pub Vec<Inline>);

impl Paragraph {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Concatenated plain text of the paragraph.
    pub fn plain_text(&self) -> String {
        self.0.iter().map(Inline::text).collect()
    }
}

/// Documentation for one (template) parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct ParamDoc {
    pub name: Arc<str>,
    pub text: Vec<Inline>,
    /// False when the doc names a parameter absent from the
    /// declaration; such entries are retained with a warning.
    pub known: bool,
}

impl ParamDoc {
    /// An entry for a declared parameter that has no doc text.
    pub fn undocumented(name: Arc<str>) -> Self {
        Self {
            name,
            text: Vec::new(),
            known: true,
        }
    }

    pub fn is_documented(&self) -> bool {
        !self.text.is_empty()
    }
}

/// One thrown-error entry: condition plus description.
///
/// Ordered — multiple error kinds may apply to one function, so these
/// are never an unordered set.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct ThrowsDoc {
    pub condition: Arc<str>,
    pub text: Vec<Inline>,
}

/// Tag kind on a free-form annotation section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
#[cfg_attr(feature = "interchange", serde(rename_all = "snake_case"))]
pub enum NoteKind {
    Note,
    Warning,
    ThreadSafety,
    /// Custom titled paragraph (`@par Title`).
    Par,
}

/// A tagged free-form annotation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct NoteDoc {
    pub kind: NoteKind,
    /// Title of a `@par` section, if any.
    pub title: Option<Arc<str>>,
    pub text: Vec<Inline>,
}

/// An unknown tag, preserved verbatim rather than dropped silently.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct ExtraTag {
    pub tag: Arc<str>,
    pub text: Arc<str>,
}

/// Structured doc-comment content attached to one symbol.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct DocBlock {
    /// First sentence or paragraph.
    pub brief: Vec<Inline>,
    /// Extended description, paragraph by paragraph.
    pub description: Vec<Paragraph>,
    /// Parameter docs in declaration order; unknown names follow in
    /// appearance order with `known = false`.
    pub params: Vec<ParamDoc>,
    /// Template-parameter docs, same shape as `params`.
    pub template_params: Vec<ParamDoc>,
    pub returns: Option<Vec<Inline>>,
    pub throws: Vec<ThrowsDoc>,
    pub notes: Vec<NoteDoc>,
    /// "See also" references, in order of appearance.
    pub see_also: Vec<DocRef>,
    /// Unknown tags, verbatim.
    pub extras: Vec<ExtraTag>,
}

impl DocBlock {
    /// True when nothing at all was parsed out of the comment.
    pub fn is_empty(&self) -> bool {
        self.brief.is_empty()
            && self.description.is_empty()
            && self.params.is_empty()
            && self.template_params.is_empty()
            && self.returns.is_none()
            && self.throws.is_empty()
            && self.notes.is_empty()
            && self.see_also.is_empty()
            && self.extras.is_empty()
    }

    /// Collect every cross-reference in the block, in field order.
    pub fn refs(&self) -> Vec<&DocRef> {
        fn collect<'a>(inlines: &'a [Inline], out: &mut Vec<&'a DocRef>) {
            for inline in inlines {
                if let InlineKind::Ref(r) = &inline.kind {
                    out.push(r);
                }
            }
        }

        let mut out = Vec::new();
        collect(&self.brief, &mut out);
        for para in &self.description {
            collect(&para.0, &mut out);
        }
        for p in self.params.iter().chain(self.template_params.iter()) {
            collect(&p.text, &mut out);
        }
        if let Some(ret) = &self.returns {
            collect(ret, &mut out);
        }
        for t in &self.throws {
            collect(&t.text, &mut out);
        }
        for n in &self.notes {
            collect(&n.text, &mut out);
        }
        out.extend(self.see_also.iter());
        out
    }

    /// Visit every cross-reference slot in the block, mutably.
    ///
    /// The resolution stage uses this to fill `resolved` targets in one
    /// pass over all prose fields.
    pub fn for_each_ref_mut(&mut self, mut f: impl FnMut(&mut DocRef)) {
        fn visit_inlines(inlines: &mut [Inline], f: &mut impl FnMut(&mut DocRef)) {
            for inline in inlines {
                if let InlineKind::Ref(r) = &mut inline.kind {
                    f(r);
                }
            }
        }

        visit_inlines(&mut self.brief, &mut f);
        for para in &mut self.description {
            visit_inlines(&mut para.0, &mut f);
        }
        for p in self.params.iter_mut().chain(self.template_params.iter_mut()) {
            visit_inlines(&mut p.text, &mut f);
        }
        if let Some(ret) = &mut self.returns {
            visit_inlines(ret, &mut f);
        }
        for t in &mut self.throws {
            visit_inlines(&mut t.text, &mut f);
        }
        for n in &mut self.notes {
            visit_inlines(&mut n.text, &mut f);
        }
        for r in &mut self.see_also {
            f(r);
        }
    }
}
