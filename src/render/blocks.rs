//! Dynamic-zone block renderer.
//!
//! DESIGN
//! ======
//! Blocks arrive as raw JSON in backend order. Each is classified by its
//! `__component` discriminator and dispatched through a closed `match`.
//! Blocks that are missing a discriminator, carry an unknown one, or fail
//! to decode are logged and dropped; the rest render in input order with no
//! deduplication by id.

use serde_json::Value;

use super::{RenderContext, sections};
use crate::cms::types::{BlockError, ContentBlock};

/// Why a block was left out of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingDiscriminator,
    Unknown(String),
    Malformed { component: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedBlock {
    /// Position in the input sequence.
    pub index: usize,
    pub id: Option<i64>,
    pub reason: SkipReason,
}

/// Rendered fragments plus a record of every dropped block.
#[derive(Debug, Default)]
pub struct RenderedBlocks {
    pub fragments: Vec<String>,
    pub skipped: Vec<SkippedBlock>,
}

impl RenderedBlocks {
    #[must_use]
    pub fn html(&self) -> String {
        self.fragments.concat()
    }
}

/// Render one typed block. `None` for the unknown arm.
#[must_use]
pub fn render_block(ctx: &RenderContext, block: &ContentBlock) -> Option<String> {
    match block {
        ContentBlock::Hero(hero) => Some(sections::hero(ctx, hero)),
        ContentBlock::Header(header) => Some(sections::header(header)),
        ContentBlock::Features(features) => Some(sections::features(ctx, features)),
        ContentBlock::Unknown { .. } => None,
    }
}

/// Render an ordered dynamic zone.
#[must_use]
pub fn render_blocks(ctx: &RenderContext, blocks: &[Value]) -> RenderedBlocks {
    let mut out = RenderedBlocks::default();

    for (index, raw) in blocks.iter().enumerate() {
        let id = raw.get("id").and_then(Value::as_i64);
        let reason = match ContentBlock::from_value(raw.clone()) {
            Ok(block) => match render_block(ctx, &block) {
                Some(html) => {
                    out.fragments.push(html);
                    continue;
                }
                None => {
                    let component = block.component().to_owned();
                    tracing::warn!(index, ?id, %component, "no renderer for block type");
                    SkipReason::Unknown(component)
                }
            },
            Err(BlockError::MissingDiscriminator) => {
                tracing::warn!(index, ?id, "block has no __component; skipping");
                SkipReason::MissingDiscriminator
            }
            Err(BlockError::Malformed { component, reason }) => {
                tracing::warn!(index, ?id, %component, %reason, "block failed to decode; skipping");
                SkipReason::Malformed { component, reason }
            }
        };
        out.skipped.push(SkippedBlock { index, id, reason });
    }

    out
}

#[cfg(test)]
#[path = "blocks_test.rs"]
mod tests;
