//! Recursive value resolution through the document graph.

use crate::documents::{DocumentSet, TokenIndex};
use crate::error::ResolveError;
use crate::naming::is_mode_index;
use log::debug;
use recursica_reference::{ParsedReference, ReferenceKind, parse_reference_strict};
use recursica_types::Mode;
use serde_json::Value;

/// The documents one resolution pass reads. Any of them may be absent.
#[derive(Debug, Clone, Copy)]
pub struct ResolutionContext<'d> {
    pub tokens: Option<&'d TokenIndex>,
    pub theme: Option<&'d Value>,
    pub ui_kit: Option<&'d Value>,
    pub max_depth: usize,
}

impl<'d> ResolutionContext<'d> {
    pub fn new(documents: &'d DocumentSet, tokens: Option<&'d TokenIndex>, max_depth: usize) -> Self {
        Self {
            tokens,
            theme: documents.theme_root(),
            ui_kit: documents.ui_kit_root(),
            max_depth,
        }
    }
}

/// Resolves `value` to a concrete value, following reference chains.
///
/// Non-references pass through unchanged and `{"$value": ..}` wrappers are
/// unwrapped. Anything unresolvable, a chain deeper than `max_depth`, or a
/// chain that revisits a reference yields `None`.
pub fn resolve_token_reference_to_value(
    value: &Value,
    context: &ResolutionContext<'_>,
    mode: Mode,
) -> Option<Value> {
    try_resolve_value(value, context, mode).ok()
}

/// [`resolve_token_reference_to_value`] with the reason for a failure.
pub fn try_resolve_value(
    value: &Value,
    context: &ResolutionContext<'_>,
    mode: Mode,
) -> Result<Value, ResolveError> {
    Walker {
        context,
        mode,
        chain: Vec::new(),
    }
    .resolve(value, 0)
}

struct Walker<'c, 'd> {
    context: &'c ResolutionContext<'d>,
    mode: Mode,
    chain: Vec<String>,
}

impl<'c, 'd> Walker<'c, 'd> {
    fn resolve(&mut self, value: &Value, depth: usize) -> Result<Value, ResolveError> {
        let value = unwrap_wrapper(value);
        let reference = match parse_reference_strict(value, self.mode) {
            Ok(reference) => reference,
            Err(_) => return Ok(value.clone()),
        };

        let key = reference.normalized_path.clone();
        if depth >= self.context.max_depth {
            debug!("Reference chain cut at depth {} on '{}'", depth, key);
            return Err(ResolveError::DepthExceeded {
                path: key,
                depth: self.context.max_depth,
            });
        }
        if self.chain.contains(&key) {
            debug!("Reference cycle through '{}'", key);
            return Err(ResolveError::Cycle(key));
        }

        let found = self.lookup(&reference)?;
        self.chain.push(key);
        let resolved = self.resolve(&found, depth + 1);
        self.chain.pop();
        resolved
    }

    fn lookup(&self, reference: &ParsedReference) -> Result<Value, ResolveError> {
        let not_found = || ResolveError::NotFound(reference.to_reference_string());
        match reference.kind {
            ReferenceKind::Token => {
                let index = self.context.tokens.ok_or(ResolveError::MissingDocument("token"))?;
                index.get(&reference.joined_path()).cloned().ok_or_else(not_found)
            }
            ReferenceKind::Brand => {
                let theme = self.context.theme.ok_or(ResolveError::MissingDocument("theme"))?;
                let mode = reference.mode.unwrap_or(self.mode);
                let start = theme
                    .get("themes")
                    .and_then(|themes| themes.get(mode.as_str()))
                    .ok_or_else(not_found)?;
                descend(start, &reference.path).cloned().ok_or_else(not_found)
            }
            ReferenceKind::UiKit => {
                let kit = self.context.ui_kit.ok_or(ResolveError::MissingDocument("ui-kit"))?;
                let path = match reference.path.split_first() {
                    Some((index, rest)) if is_mode_index(index) && kit.get(index).is_none() => rest,
                    _ => &reference.path[..],
                };
                descend(kit, path).cloned().ok_or_else(not_found)
            }
            ReferenceKind::Unknown => Err(ResolveError::UnknownNamespace(
                reference.to_reference_string(),
            )),
        }
    }
}

fn unwrap_wrapper(value: &Value) -> &Value {
    match value.get("$value") {
        Some(inner) if value.is_object() => unwrap_wrapper(inner),
        _ => value,
    }
}

/// Walks `path` from `node`, trying each segment as a direct property first
/// and otherwise one level inside a `$value` object.
fn descend<'v>(node: &'v Value, path: &[String]) -> Option<&'v Value> {
    path.iter().try_fold(node, |current, segment| {
        current
            .get(segment.as_str())
            .or_else(|| current.get("$value")?.get(segment.as_str()))
    })
}
