//! Pipeline orchestration — one call from records to documentation.
//!
//! Stages run strictly in dependency order, each consuming the
//! complete output of the prior one; there is no streaming overlap
//! because resolution needs the globally complete symbol set (a
//! reference may point forward to a symbol not yet seen in declaration
//! order). The only parallelism is *within* the comment stage, across
//! independent symbols, merged back deterministically before the next
//! stage begins.

use rayon::prelude::*;
use tracing::debug;

use crate::comment::{DocBlock, parse_doc};
use crate::config::Config;
use crate::diagnostics::{Warning, WarningKind};
use crate::error::ModelError;
use crate::model::record::DeclRecord;
use crate::resolve::{SymbolIndex, resolve_docs};
use crate::semantic::{filter_symbols, group_overloads, ingest};
use crate::tree::{DocTree, assemble};

/// The complete result of one documentation run: the immutable tree
/// plus every non-fatal warning collected along the way.
#[derive(Clone, Debug)]
pub struct DocModel {
    pub tree: DocTree,
    pub warnings: Vec<Warning>,
}

impl DocModel {
    /// Unresolved-reference warnings, tagged with the originating
    /// symbol's qualified name.
    pub fn unresolved_references(&self) -> impl Iterator<Item = &Warning> {
        self.warnings
            .iter()
            .filter(|w| matches!(w.kind, WarningKind::UnresolvedReference { .. }))
    }

    /// Undocumented-parameter warnings, tagged with the originating
    /// symbol's qualified name.
    pub fn undocumented_parameters(&self) -> impl Iterator<Item = &Warning> {
        self.warnings
            .iter()
            .filter(|w| matches!(w.kind, WarningKind::UndocumentedParameter { .. }))
    }
}

/// Run the full pipeline over an extraction dump.
///
/// Fatal errors ([`ModelError`]) abort at the stage that detects them;
/// warnings never stop the pipeline and come back attached to the
/// [`DocModel`].
pub fn build_docs(records: Vec<DeclRecord>, config: &Config) -> Result<DocModel, ModelError> {
    debug!(records = records.len(), "starting documentation run");

    // Stage 1: ingest + structural validation.
    let symbols = ingest(records)?;

    // Stage 2: comment parsing, parallel across independent symbols.
    // Indexed collect keeps the merge deterministic regardless of
    // scheduling.
    let parsed: Vec<(DocBlock, Vec<Warning>)> = symbols
        .par_iter()
        .map(|symbol| {
            let params: Vec<_> = symbol
                .signature
                .as_ref()
                .map(|sig| sig.params.iter().map(|p| p.name.clone()).collect())
                .unwrap_or_default();
            parse_doc(
                &symbol.doc,
                &params,
                &symbol.template_params,
                &symbol.qualified_name,
            )
        })
        .collect();

    // Stage 3: visibility filter. Warnings from pruned symbols are
    // pruned with them.
    let included = filter_symbols(&symbols, config);
    let mut warnings = Vec::new();
    let mut docs: Vec<Option<DocBlock>> = Vec::with_capacity(parsed.len());
    for (idx, (block, block_warnings)) in parsed.into_iter().enumerate() {
        if included[idx] {
            warnings.extend(block_warnings);
        }
        docs.push(Some(block));
    }

    // Stage 4: overload grouping over the included functions.
    let sets = group_overloads(&symbols, &included, &mut warnings)?;

    // Stage 5: reference resolution over the complete index.
    let mut index = SymbolIndex::build(symbols, included);
    index.resolve_relations();
    warnings.extend(resolve_docs(&index, &mut docs));

    // Stage 6: tree assembly.
    let tree = assemble(&index, &docs, &sets, config);

    debug!(
        nodes = tree.size(),
        warnings = warnings.len(),
        "documentation run complete"
    );
    Ok(DocModel { tree, warnings })
}
