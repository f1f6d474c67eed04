//! Question catalogue and colour bands
//!
//! The CEF form has 36 questions, grouped four at a time under nine
//! development areas.

/// Questions per group
pub const GROUP_SIZE: usize = 4;

/// Development area labels, one per consecutive group of four questions
pub const GROUP_LABELS: [&str; 9] = [
    "Understanding Self",
    "Coaching Individuals",
    "Coaching Practice",
    "Skill Acquisition",
    "MK Dons",
    "Psychology/Social Support",
    "Relationships",
    "Athletic Development",
    "Wellbeing/Lifestyle",
];

/// Question wording, indexed by question number minus one
pub const QUESTION_TEXT: [&str; 36] = [
    "Understands their role (IP/VEO)",
    "Engages with club coach CPD",
    "Effectively communicates (IP/VEO)",
    "Engages with players & parents informally (IP/VEO)",
    "Understands the game model",
    "Seeks to understand decisions (Q)",
    "Is positive and inspiring (IP)",
    "Sets realistic goals for players (IP/VEO)",
    "Use appropriate interventions (IP/VEO)",
    "Understands player differences",
    "Understands and applies LTPD",
    "Supports coaching with video and data (IP/VEO)",
    "Introduces sessions",
    "Embeds deliberate practice",
    "Creates action plans for players (IP)",
    "Debriefs sessions (IP/VEO)",
    "Uses club coaching methodology (IP)",
    "Adopts Club principles (H-O-P)",
    "Adopts multi-disc approach",
    "Aware of safeguarding policies/procedures",
    "Embeds competencies each session",
    "Notices changes in child's behaviour",
    "Signposts players to appropriate support (IP/VEO)",
    "Critical thinker who checks and challenges",
    "Manages other staff supporting sessions",
    "Listens and suspends judgement",
    "Has a recognised coaching cell (in club)",
    "Watches other coaches inside the club",
    "Embeds physical development",
    "Makes practice competitive & realistic",
    "Develops players physically through design",
    "Drives intensity using coaching strategies",
    "Reports issues using MyConcern appropriately",
    "Comfortable challenging poor practice",
    "Ambassador of MK Dons",
    "Has clear interests away from coaching",
];

pub const GREEN: &str = "#4CAF50";
pub const YELLOW: &str = "#FFD966";
pub const ORANGE: &str = "#F4A261";
pub const RED: &str = "#FF6B6B";

/// Wording for a 1-based question number
pub fn question_text(number: u32) -> Option<&'static str> {
    let idx = usize::try_from(number).ok()?.checked_sub(1)?;
    QUESTION_TEXT.get(idx).copied()
}

/// Question number encoded in a column header (`Q12` → 12)
///
/// Every `Q` is removed before parsing, so `Q 7` and `q7` do not parse.
pub fn question_number(header: &str) -> Option<u32> {
    header.replace('Q', "").parse().ok()
}

/// Colour band for a four-question group total (0.0 ..= 4.0)
pub fn group_colour(total: f64) -> &'static str {
    if total >= 3.25 {
        GREEN
    } else if total >= 2.51 {
        YELLOW
    } else if total >= 1.75 {
        ORANGE
    } else {
        RED
    }
}

/// Colour for a single question bar; absent scores are drawn red
pub fn bar_colour(score: Option<f64>) -> &'static str {
    match score {
        Some(s) if s == 1.0 => GREEN,
        Some(s) if s == 0.5 => ORANGE,
        _ => RED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_colour_thresholds() {
        assert_eq!(group_colour(4.0), GREEN);
        assert_eq!(group_colour(3.25), GREEN);
        assert_eq!(group_colour(3.0), YELLOW);
        assert_eq!(group_colour(2.51), YELLOW);
        assert_eq!(group_colour(2.5), ORANGE);
        assert_eq!(group_colour(1.75), ORANGE);
        assert_eq!(group_colour(1.5), RED);
        assert_eq!(group_colour(0.0), RED);
    }

    #[test]
    fn test_bar_colour() {
        assert_eq!(bar_colour(Some(1.0)), GREEN);
        assert_eq!(bar_colour(Some(0.5)), ORANGE);
        assert_eq!(bar_colour(Some(0.0)), RED);
        assert_eq!(bar_colour(None), RED);
    }

    #[test]
    fn test_question_lookup() {
        assert_eq!(question_text(1), Some("Understands their role (IP/VEO)"));
        assert_eq!(question_text(36), Some("Has clear interests away from coaching"));
        assert_eq!(question_text(0), None);
        assert_eq!(question_text(37), None);
    }

    #[test]
    fn test_question_number_parsing() {
        assert_eq!(question_number("Q1"), Some(1));
        assert_eq!(question_number("Q36"), Some(36));
        assert_eq!(question_number("Quality"), None);
    }
}
