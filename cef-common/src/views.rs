//! Per-participant view computations
//!
//! Pure functions from one scored row to the values the dashboard renders:
//! the question bar chart, the group grid, and the development lists.

use serde::Serialize;

use crate::questions::{bar_colour, group_colour, question_number, question_text, GROUP_LABELS, GROUP_SIZE};
use crate::scores::{ScoredBlock, ScoredRow};

/// One bar of the question chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub score: Option<f64>,
    pub colour: &'static str,
}

/// Question chart for one participant in one block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionChart {
    pub title: String,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub y_range: [f64; 2],
    pub bars: Vec<Bar>,
}

/// One cell of the group grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupTile {
    pub label: &'static str,
    pub total: f64,
    pub colour: &'static str,
}

/// Questions scored 0.5 and 0, formatted for display
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DevelopmentLists {
    pub developing: Vec<String>,
    pub needs_attention: Vec<String>,
}

/// Everything the main dashboard panel shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub participant: String,
    pub block: String,
    pub chart: QuestionChart,
    pub groups: Vec<GroupTile>,
    pub lists: DevelopmentLists,
}

impl DashboardView {
    pub fn build(block: &ScoredBlock, row: &ScoredRow) -> Self {
        Self {
            participant: row.name.clone(),
            block: block.name.clone(),
            chart: question_chart(block, row),
            groups: group_grid(row),
            lists: development_lists(block, row),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Sums of consecutive four-question groups; absent scores count as zero
pub fn group_totals(scores: &[Option<f64>]) -> Vec<f64> {
    scores
        .chunks(GROUP_SIZE)
        .map(|chunk| round2(chunk.iter().flatten().sum()))
        .collect()
}

/// Group totals zipped with their labels
///
/// Groups past the ninth label are not shown.
pub fn group_grid(row: &ScoredRow) -> Vec<GroupTile> {
    GROUP_LABELS
        .iter()
        .zip(group_totals(&row.scores))
        .map(|(&label, total)| GroupTile {
            label,
            total,
            colour: group_colour(total),
        })
        .collect()
}

pub fn question_chart(block: &ScoredBlock, row: &ScoredRow) -> QuestionChart {
    let bars = block
        .question_columns
        .iter()
        .zip(&row.scores)
        .map(|(label, &score)| Bar {
            label: label.clone(),
            score,
            colour: bar_colour(score),
        })
        .collect();

    QuestionChart {
        title: format!("{} — {}", row.name, block.name),
        x_title: "Questions",
        y_title: "Score",
        y_range: [0.0, 1.0],
        bars,
    }
}

/// Display line for a question column, e.g. `Q3 – Effectively communicates (IP/VEO)`
pub fn question_item(header: &str) -> String {
    match question_number(header).and_then(|n| question_text(n).map(|text| (n, text))) {
        Some((n, text)) => format!("Q{} – {}", n, text),
        None => header.to_string(),
    }
}

pub fn development_lists(block: &ScoredBlock, row: &ScoredRow) -> DevelopmentLists {
    let mut lists = DevelopmentLists::default();

    for (header, score) in block.question_columns.iter().zip(&row.scores) {
        match score {
            Some(s) if *s == 0.5 => lists.developing.push(question_item(header)),
            Some(s) if *s == 0.0 => lists.needs_attention.push(question_item(header)),
            _ => {}
        }
    }

    lists
}
