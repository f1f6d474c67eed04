//! SVG rendering for the question chart
//!
//! Draws the bar series computed by `cef_common::views::question_chart` as a
//! standalone SVG document. Absent scores get a slot on the x axis but no bar.

use cef_common::views::QuestionChart;

const WIDTH: f64 = 960.0;
const HEIGHT: f64 = 380.0;
const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 70.0;

/// Escape text for use inside SVG elements and attributes
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the chart as an SVG document
pub fn render_svg(chart: &QuestionChart) -> String {
    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let [y_min, y_max] = chart.y_range;
    let span = (y_max - y_min).max(f64::EPSILON);
    let y_of = |v: f64| MARGIN_TOP + plot_h * (1.0 - (v.clamp(y_min, y_max) - y_min) / span);

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}" font-family="sans-serif">"#,
        w = WIDTH,
        h = HEIGHT
    ));
    svg.push_str(&format!(
        r#"<rect width="100%" height="100%" fill="white"/><text x="{x}" y="28" font-size="18" text-anchor="middle">{title}</text>"#,
        x = WIDTH / 2.0,
        title = escape_xml(&chart.title)
    ));

    for step in 0..=4 {
        let v = y_min + span * f64::from(step) / 4.0;
        let y = y_of(v);
        svg.push_str(&format!(
            r##"<line x1="{x1}" y1="{y:.1}" x2="{x2}" y2="{y:.1}" stroke="#e0e0e0"/><text x="{tx}" y="{ty:.1}" font-size="11" text-anchor="end">{v}</text>"##,
            x1 = MARGIN_LEFT,
            x2 = WIDTH - MARGIN_RIGHT,
            tx = MARGIN_LEFT - 6.0,
            ty = y + 4.0,
        ));
    }

    let slots = chart.bars.len().max(1) as f64;
    let slot_w = plot_w / slots;
    let bar_w = slot_w * 0.8;
    let baseline = y_of(y_min);

    for (i, bar) in chart.bars.iter().enumerate() {
        let x = MARGIN_LEFT + slot_w * i as f64;
        let centre = x + slot_w / 2.0;

        if let Some(score) = bar.score {
            let top = y_of(score);
            svg.push_str(&format!(
                r#"<rect x="{bx:.1}" y="{top:.1}" width="{bw:.1}" height="{bh:.1}" fill="{fill}"><title>{label}: {score}</title></rect>"#,
                bx = x + (slot_w - bar_w) / 2.0,
                bw = bar_w,
                bh = baseline - top,
                fill = bar.colour,
                label = escape_xml(&bar.label),
            ));
        }

        svg.push_str(&format!(
            r#"<text x="{centre:.1}" y="{ly:.1}" font-size="10" text-anchor="end" transform="rotate(-45 {centre:.1} {ly:.1})">{label}</text>"#,
            ly = baseline + 14.0,
            label = escape_xml(&bar.label),
        ));
    }

    svg.push_str(&format!(
        r##"<line x1="{x1}" y1="{b:.1}" x2="{x2}" y2="{b:.1}" stroke="#333"/><text x="{cx}" y="{xy}" font-size="13" text-anchor="middle">{xt}</text><text x="16" y="{cy}" font-size="13" text-anchor="middle" transform="rotate(-90 16 {cy})">{yt}</text></svg>"##,
        x1 = MARGIN_LEFT,
        x2 = WIDTH - MARGIN_RIGHT,
        b = baseline,
        cx = MARGIN_LEFT + plot_w / 2.0,
        xy = HEIGHT - 8.0,
        cy = MARGIN_TOP + plot_h / 2.0,
        xt = escape_xml(chart.x_title),
        yt = escape_xml(chart.y_title),
    ));

    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use cef_common::views::Bar;

    fn chart(bars: Vec<Bar>) -> QuestionChart {
        QuestionChart {
            title: "Alice <A&B> — Block 1".to_string(),
            x_title: "Questions",
            y_title: "Score",
            y_range: [0.0, 1.0],
            bars,
        }
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
    }

    #[test]
    fn test_render_draws_bars_for_present_scores() {
        let svg = render_svg(&chart(vec![
            Bar { label: "Q1".into(), score: Some(1.0), colour: "#4CAF50" },
            Bar { label: "Q2".into(), score: None, colour: "#FF6B6B" },
            Bar { label: "Q3".into(), score: Some(0.5), colour: "#F4A261" },
        ]));

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("Alice &lt;A&amp;B&gt; — Block 1"));
        assert!(svg.contains(r##"fill="#4CAF50""##));
        assert!(svg.contains(r##"fill="#F4A261""##));
        assert!(!svg.contains(r##"fill="#FF6B6B""##), "absent score draws no bar");
        assert!(svg.contains(">Q2</text>"));
    }

    #[test]
    fn test_render_empty_chart() {
        let svg = render_svg(&chart(Vec::new()));
        assert!(svg.contains(">Questions</text>"));
    }

    #[test]
    fn test_render_writes_every_tick_and_axis_title() {
        let svg = render_svg(&chart(vec![Bar {
            label: "Q1".into(),
            score: Some(0.0),
            colour: "#FF6B6B",
        }]));

        for tick in ["0", "0.25", "0.5", "0.75", "1"] {
            assert!(svg.contains(&format!(">{tick}</text>")), "missing tick {tick}");
        }
        assert!(svg.contains(">Score</text>"));
        assert_eq!(svg.matches("<svg").count(), 1);
    }
}
