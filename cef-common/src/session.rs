//! Dashboard session
//!
//! Everything derived from the most recent upload: scored blocks in sheet
//! order plus the participant list. A new upload replaces the whole session.

use tracing::{debug, info};

use crate::blocks::split_blocks;
use crate::scores::{ScoredBlock, ScoredRow};
use crate::workbook::RawTable;
use crate::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct Session {
    blocks: Vec<ScoredBlock>,
    participants: Vec<String>,
}

impl Session {
    /// Split and score a raw sheet
    ///
    /// A sheet with no header rows produces an empty session.
    pub fn from_raw_table(raw: &RawTable) -> Self {
        let blocks: Vec<ScoredBlock> = split_blocks(raw)
            .iter()
            .map(ScoredBlock::from_block)
            .collect();

        for block in &blocks {
            debug!(
                block = %block.name,
                rows = block.rows.len(),
                questions = block.question_columns.len(),
                unmapped = block.unmapped,
                "Scored block"
            );
        }

        // Participant choices come from the first block only
        let mut participants: Vec<String> = Vec::new();
        if let Some(first) = blocks.first() {
            for row in &first.rows {
                if !row.name.is_empty() && !participants.contains(&row.name) {
                    participants.push(row.name.clone());
                }
            }
        }

        info!(
            blocks = blocks.len(),
            participants = participants.len(),
            "Session built"
        );

        Self {
            blocks,
            participants,
        }
    }

    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    pub fn block_labels(&self) -> Vec<String> {
        self.blocks.iter().map(|b| b.name.clone()).collect()
    }

    pub fn blocks(&self) -> &[ScoredBlock] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Total unmapped answers across all blocks
    pub fn unmapped(&self) -> usize {
        self.blocks.iter().map(|b| b.unmapped).sum()
    }

    pub fn block(&self, label: &str) -> Result<&ScoredBlock> {
        self.blocks
            .iter()
            .find(|b| b.name == label)
            .ok_or_else(|| Error::NotFound(format!("block '{}'", label)))
    }

    /// A participant's row within a block
    pub fn person(&self, label: &str, name: &str) -> Result<(&ScoredBlock, &ScoredRow)> {
        let block = self.block(label)?;
        let row = block
            .person(name)
            .ok_or_else(|| Error::NotFound(format!("participant '{}' in {}", name, label)))?;
        Ok((block, row))
    }
}
