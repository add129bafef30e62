//! 解析結果のテキストレポート
//!
//! 結果画面と同じセクション構成・同じ順序で端末向けに描画する。

use jd_tracker_common::{
    render_markup_plain, AnalysisResult, ChartPalette, ChartSeries, PlanFormat, ResultSections,
    ResultsVariant,
};
use std::fmt::Write;

/// 棒グラフの最大幅（文字数）
const CHART_WIDTH: f64 = 30.0;

fn palette_for(variant: ResultsVariant) -> ChartPalette {
    match variant {
        ResultsVariant::Main => ChartPalette::Primary,
        ResultsVariant::Alternate => ChartPalette::Alternate,
    }
}

/// 件数分布をテキストの棒で描画
pub fn render_chart(result: &AnalysisResult, variant: ResultsVariant) -> String {
    let series = ChartSeries::from_result(result, palette_for(variant));
    let mut out = String::new();

    if let Some(label) = series.label {
        let _ = writeln!(out, "{} (total {})", label, series.total());
    }

    let width = series.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    for bar in series.bars(CHART_WIDTH) {
        let mut cells = bar.height.round() as usize;
        if bar.value > 0 && cells == 0 {
            cells = 1;
        }
        let _ = writeln!(
            out,
            "{:<width$} | {} {}",
            bar.label,
            "█".repeat(cells),
            bar.value,
            width = width
        );
    }
    out
}

/// レポート全体を描画
pub fn render_report(result: &AnalysisResult, variant: ResultsVariant) -> String {
    let sections = ResultSections::from_result(result);
    let mut out = render_chart(result, variant);

    let _ = writeln!(out, "\n🧾 JD Criteria");
    let _ = writeln!(out, "{}", sections.criteria.text);
    for (label, value) in &sections.criteria.details {
        let _ = writeln!(out, "  {}: {}", label, value);
    }

    let heading = match variant {
        ResultsVariant::Main => "✅ Eligibility Results",
        ResultsVariant::Alternate => "📊 Eligibility Results",
    };
    let _ = writeln!(out, "\n{}", heading);
    for row in &sections.eligibility {
        let _ = writeln!(out, "{}", row.headline());
        if row.shows_reasons() {
            for reason in &row.reasons {
                let _ = writeln!(out, "  - {}", reason);
            }
        }
    }

    let _ = writeln!(out, "\n📉 Gap Analysis");
    for row in &sections.gaps {
        let _ = writeln!(out, "{}", row.line());
    }

    let _ = writeln!(out, "\n📚 Training Plan");
    for row in &sections.training {
        let _ = writeln!(out, "{}", row.student_id);
        let plan = row.plan_for(variant);
        let body = match variant.plan_format() {
            PlanFormat::Markup => render_markup_plain(plan),
            PlanFormat::Preformatted => plan.to_string(),
        };
        for line in body.lines() {
            let _ = writeln!(out, "  {}", line);
        }
    }

    let _ = writeln!(out, "\n📬 Notification Summary");
    for row in &sections.notifications {
        match (&row.email_status, variant.offers_mail_action()) {
            (Some(status), true) => {
                let _ = writeln!(out, "{} [{}]", row.line(), status);
            }
            _ => {
                let _ = writeln!(out, "{}", row.line());
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use jd_tracker_common::{parse_analysis_response, EligibilityEntry, EligibilityStatus};

    fn result_with_statuses(statuses: &[(&str, usize)]) -> AnalysisResult {
        let entries: Vec<EligibilityEntry> = statuses
            .iter()
            .flat_map(|(status, n)| {
                (0..*n).map(move |i| EligibilityEntry {
                    student_id: format!("S{}", i),
                    status: EligibilityStatus::from(*status),
                    reasons: vec![],
                })
            })
            .collect();
        AnalysisResult {
            eligibility_results: entries,
            ..Default::default()
        }
    }

    #[test]
    fn test_chart_minimum_bar() {
        let result = result_with_statuses(&[("eligible", 100), ("not_eligible", 1)]);
        let chart = render_chart(&result, ResultsVariant::Main);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with(&format!("{} 100", "█".repeat(30))));
        assert!(lines[1].ends_with("|  0"));
        assert!(lines[2].ends_with("| █ 1"));
    }

    #[test]
    fn test_alternate_chart_has_series_label() {
        let result = parse_analysis_response(
            r#"{"eligibility_results": [{"student_id": "S1", "status": "eligible"}]}"#,
        )
        .expect("パース失敗");
        let chart = render_chart(&result, ResultsVariant::Alternate);
        assert!(chart.starts_with("Students (total 1)"));
        assert!(!render_chart(&result, ResultsVariant::Main).contains("Students"));
    }

    #[test]
    fn test_report_section_order() {
        let report = render_report(&AnalysisResult::default(), ResultsVariant::Main);
        let positions: Vec<usize> = [
            "🧾 JD Criteria",
            "✅ Eligibility Results",
            "📉 Gap Analysis",
            "📚 Training Plan",
            "📬 Notification Summary",
        ]
        .iter()
        .map(|h| report.find(h).expect("見出しなし"))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(report.contains("No JD content found"));
    }

    #[test]
    fn test_training_plan_rendering_per_variant() {
        let result = parse_analysis_response(
            r#"{"training_recommendations": [
                {"student_id": "S1", "training_plan": "- Learn **SQL**"},
                {"student_id": "S2", "training_plan": ""}
            ]}"#,
        )
        .expect("パース失敗");

        let main = render_report(&result, ResultsVariant::Main);
        assert!(main.contains("  • Learn SQL"));
        assert!(main.contains("  No plan found."));

        let alternate = render_report(&result, ResultsVariant::Alternate);
        assert!(alternate.contains("  - Learn **SQL**"));
        assert!(!alternate.contains("No plan found."));
    }

    #[test]
    fn test_email_status_only_in_alternate() {
        let result = parse_analysis_response(
            r#"{"notification_summary": [{"student_id": "S1", "status": "eligible", "message": "ok", "email_status": "sent"}]}"#,
        )
        .expect("パース失敗");
        assert!(render_report(&result, ResultsVariant::Alternate).contains("S1 - eligible → ok [sent]"));
        assert!(!render_report(&result, ResultsVariant::Main).contains("[sent]"));
    }
}
