use crate::document::RawDocument;
use crate::element::Element;
use crate::error::DecodeError;

/// Default nesting limit, matching the usual server-side limit on
/// document depth.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Configuration for [`walk`] and [`validate`].
///
/// ```text
/// ┌───────────┬──────────────────────────────────────────────────────┐
/// │ Field     │ Purpose                                              │
/// ├───────────┼──────────────────────────────────────────────────────┤
/// │ max_depth │ Deepest embedded document/array allowed. The         │
/// │           │ top-level document is depth 0.                       │
/// └───────────┴──────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkConfig {
    pub max_depth: usize,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Events handed to the [`walk`] visitor, in document order.
///
/// ```text
///   EnterDocument { depth: 0 }
///   Element { depth: 0, .. }           "a": 1
///   Element { depth: 0, .. }           "sub": { ... }
///   EnterDocument { depth: 1 }
///   Element { depth: 1, .. }           "b": true
///   ExitDocument { depth: 1 }
///   ExitDocument { depth: 0 }
/// ```
///
/// The element that holds an embedded document is reported before the
/// document is entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkEvent<'a> {
    EnterDocument { depth: usize },
    Element { depth: usize, element: Element<'a> },
    ExitDocument { depth: usize },
}

/// Totals gathered by a completed walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Elements visited at every depth.
    pub elements: usize,
    /// Documents entered, the top-level one included.
    pub documents: usize,
    pub max_depth_seen: usize,
}

/// Visit every element of `doc`, descending into embedded documents and
/// arrays depth-first.
///
/// The walk stops at the first error; events already delivered to the
/// visitor are not retracted.
///
/// # Errors
///
/// - [`DecodeError::Element`] if an element at any depth cannot be
///   delimited, or holds an embedded document whose frame is malformed.
/// - [`DecodeError::DepthLimitExceeded`] if nesting goes past
///   `config.max_depth`.
pub fn walk<'a, F>(
    doc: RawDocument<'a>,
    config: &WalkConfig,
    mut visitor: F,
) -> Result<WalkStats, DecodeError>
where
    F: FnMut(WalkEvent<'a>),
{
    let mut stats = WalkStats::default();
    walk_document(doc, 0, config, &mut visitor, &mut stats)?;
    Ok(stats)
}

/// Check that `bytes` is exactly one document whose elements, at every
/// depth, can all be delimited.
///
/// Values are not interpreted: a string with invalid UTF-8 still passes.
///
/// # Errors
///
/// Everything [`RawDocument::from_bytes`] and [`walk`] report.
pub fn validate(bytes: &[u8], config: &WalkConfig) -> Result<WalkStats, DecodeError> {
    let doc = RawDocument::from_bytes(bytes)?;
    walk(doc, config, |_| {})
}

fn walk_document<'a, F>(
    doc: RawDocument<'a>,
    depth: usize,
    config: &WalkConfig,
    visitor: &mut F,
    stats: &mut WalkStats,
) -> Result<(), DecodeError>
where
    F: FnMut(WalkEvent<'a>),
{
    if depth > config.max_depth {
        tracing::debug!(depth, limit = config.max_depth, "document nesting too deep");
        return Err(DecodeError::DepthLimitExceeded {
            limit: config.max_depth,
        });
    }

    stats.documents += 1;
    stats.max_depth_seen = stats.max_depth_seen.max(depth);
    visitor(WalkEvent::EnterDocument { depth });

    let mut reader = doc.elements();
    loop {
        let offset = reader.position();
        let Some(element) = reader
            .next_element()
            .map_err(|source| DecodeError::Element {
                offset,
                depth,
                source,
            })?
        else {
            break;
        };

        stats.elements += 1;
        visitor(WalkEvent::Element { depth, element });

        if element.element_type.is_document() {
            // A bad embedded frame is reported against the element holding it
            let embedded = element.embedded_document().map_err(|err| match err {
                DecodeError::Wire(source) => DecodeError::Element {
                    offset,
                    depth,
                    source,
                },
                other => other,
            })?;
            walk_document(embedded, depth + 1, config, visitor, stats)?;
        }
    }

    visitor(WalkEvent::ExitDocument { depth });
    Ok(())
}
