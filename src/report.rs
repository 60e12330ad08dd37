use crate::evaluator::Assessment;
use crate::provider::Metric;

/// Renders an assessment as the checklist report: header, one table row
/// per metric in fixed order, and the total score trailer.
pub struct ReportPresenter;

const HEADERS: [&str; 3] = ["Metric", "Value", "Score"];

impl ReportPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn print(&self, assessment: &Assessment) {
        println!("{}", self.render(assessment));
    }

    pub fn render(&self, assessment: &Assessment) -> String {
        let rows: Vec<[String; 3]> = Metric::ALL
            .iter()
            .map(|metric| {
                [
                    metric.label().to_string(),
                    format_value(assessment.metrics.value(*metric)),
                    assessment.scores.score(*metric).to_string(),
                ]
            })
            .collect();

        let mut out = String::new();
        out.push_str(&format!("\n\u{1F4CA} Assessment for {}\n", assessment.ticker));
        out.push_str(&render_table(&rows));
        out.push_str(&format!(
            "\n\u{2705} Total Score: {} / {}\n",
            assessment.total_score(),
            assessment.max_score()
        ));
        out
    }
}

impl Default for ReportPresenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Values are rounded to 3 decimals for display; absent metrics show a
/// placeholder rather than a zero.
fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}", (v * 1000.0).round() / 1000.0),
        None => "n/a".to_string(),
    }
}

fn render_table(rows: &[[String; 3]]) -> String {
    let mut widths: [usize; 3] = [0; 3];
    for (i, header) in HEADERS.iter().enumerate() {
        widths[i] = header.len();
    }
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let border = format!(
        "+{}+{}+{}+\n",
        "-".repeat(widths[0] + 2),
        "-".repeat(widths[1] + 2),
        "-".repeat(widths[2] + 2)
    );

    let mut out = String::new();
    out.push_str(&border);
    out.push_str(&render_row(
        &[HEADERS[0].into(), HEADERS[1].into(), HEADERS[2].into()],
        &widths,
    ));
    out.push_str(&border);
    for row in rows {
        out.push_str(&render_row(row, &widths));
    }
    out.push_str(&border);
    out
}

fn render_row(cells: &[String; 3], widths: &[usize; 3]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        line.push_str(&format!(" {} |", center(cell, *width)));
    }
    line.push('\n');
    line
}

fn center(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.len());
    let left = padding / 2;
    format!(
        "{}{}{}",
        " ".repeat(left),
        text,
        " ".repeat(padding - left)
    )
}
