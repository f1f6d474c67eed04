//! Score normalization
//!
//! Converts a block's categorical answers into numeric scores. Answers
//! outside the three known responses become absent without complaint.

use serde::Serialize;

use crate::blocks::{Block, IDENTITY_COLUMN};
use crate::workbook::Cell;

/// Answer text → score
pub const SCORE_MAP: [(&str, f64); 3] = [("YES", 1.0), ("Neither YES or NO", 0.5), ("NO", 0.0)];

/// Map one answer cell to its score
pub fn score_value(cell: &Cell) -> Option<f64> {
    let Cell::Text(text) = cell else {
        return None;
    };
    let text = text.trim();
    SCORE_MAP
        .iter()
        .find(|(answer, _)| *answer == text)
        .map(|(_, score)| *score)
}

/// True for headers of question columns (`Q1`, `Q2`, ...)
pub fn is_question_column(header: &str) -> bool {
    header.starts_with('Q')
}

/// One participant's normalized answers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRow {
    /// Identity column value
    pub name: String,
    /// One entry per question column, in header order
    pub scores: Vec<Option<f64>>,
}

/// A block with question columns converted to scores
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredBlock {
    pub name: String,
    pub question_columns: Vec<String>,
    pub rows: Vec<ScoredRow>,
    /// Non-empty answers that matched no known response
    pub unmapped: usize,
}

impl ScoredBlock {
    /// Normalize every question column of a block
    pub fn from_block(block: &Block) -> Self {
        let question_idx: Vec<usize> = block
            .columns
            .iter()
            .enumerate()
            .filter(|(_, header)| is_question_column(header))
            .map(|(i, _)| i)
            .collect();

        let identity_idx = block
            .columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case(IDENTITY_COLUMN));

        let mut unmapped = 0;
        let rows = block
            .rows
            .iter()
            .map(|row| {
                let name = identity_idx
                    .and_then(|i| row.get(i))
                    .map(Cell::display_text)
                    .unwrap_or_default();

                let scores = question_idx
                    .iter()
                    .map(|&i| {
                        let cell = &row[i];
                        let score = score_value(cell);
                        if score.is_none() && !cell.is_empty() {
                            unmapped += 1;
                        }
                        score
                    })
                    .collect();

                ScoredRow { name, scores }
            })
            .collect();

        ScoredBlock {
            name: block.name.clone(),
            question_columns: question_idx.iter().map(|&i| block.columns[i].clone()).collect(),
            rows,
            unmapped,
        }
    }

    /// First row whose identity value equals `name`
    pub fn person(&self, name: &str) -> Option<&ScoredRow> {
        self.rows.iter().find(|row| row.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::split_blocks;

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    #[test]
    fn test_known_answers() {
        assert_eq!(score_value(&text("YES")), Some(1.0));
        assert_eq!(score_value(&text("Neither YES or NO")), Some(0.5));
        assert_eq!(score_value(&text("NO")), Some(0.0));
        assert_eq!(score_value(&text(" YES ")), Some(1.0));
    }

    #[test]
    fn test_unknown_answers_are_absent() {
        assert_eq!(score_value(&text("yes")), None);
        assert_eq!(score_value(&text("Maybe")), None);
        assert_eq!(score_value(&Cell::Number(1.0)), None);
        assert_eq!(score_value(&Cell::Empty), None);
    }

    #[test]
    fn test_question_column_prefix() {
        assert!(is_question_column("Q1"));
        assert!(is_question_column("Q36"));
        assert!(!is_question_column("Full Name"));
        assert!(!is_question_column("q1"));
    }

    #[test]
    fn test_from_block() {
        let raw = vec![
            vec![text("Full Name"), text("Team"), text("Q1"), text("Q2")],
            vec![text("Alice"), text("U12"), text("YES"), text("Maybe")],
            vec![text("Bob"), text("U14"), text("NO"), Cell::Empty],
        ];
        let blocks = split_blocks(&raw);
        let scored = ScoredBlock::from_block(&blocks[0]);

        assert_eq!(scored.question_columns, vec!["Q1", "Q2"]);
        assert_eq!(scored.rows[0].scores, vec![Some(1.0), None]);
        assert_eq!(scored.rows[1].scores, vec![Some(0.0), None]);
        assert_eq!(scored.unmapped, 1, "empty cells are not counted as unmapped");
        assert_eq!(scored.person("Bob").map(|r| r.scores[0]), Some(Some(0.0)));
        assert!(scored.person("Carol").is_none());
    }
}
