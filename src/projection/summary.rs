//! Per-type block counts for a generated plan

use crate::blocks::block::Block;
use crate::blocks::kind::BlockKind;
use crate::projection::instructions::Instruction;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Number of placed blocks of each type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BlockSummary {
    counts: BTreeMap<BlockKind, usize>,
}

impl BlockSummary {
    fn from_kinds(kinds: impl Iterator<Item = BlockKind>) -> Self {
        let mut counts = BTreeMap::new();
        for kind in kinds {
            *counts.entry(kind).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Count the instruction types of a plan
    pub fn from_instructions(instructions: &[Instruction]) -> Self {
        Self::from_kinds(instructions.iter().map(|inst| inst.block_type))
    }

    /// Count block labels directly
    pub fn from_blocks(blocks: &[Block]) -> Self {
        Self::from_kinds(blocks.iter().map(|block| block.kind))
    }

    /// Blocks of one type
    pub fn count(&self, kind: BlockKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// All blocks in the plan
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Types present in the plan with their counts, smallest type first
    pub fn iter(&self) -> impl Iterator<Item = (BlockKind, usize)> + '_ {
        self.counts.iter().map(|(&kind, &count)| (kind, count))
    }
}

impl fmt::Display for BlockSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (kind, count) in self.iter() {
            write!(f, "{kind}: {count}, ")?;
        }
        write!(f, "total: {}", self.total())
    }
}
