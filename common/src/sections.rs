//! 結果表示のセクション（ビューモデル）
//!
//! 5つのセクションはそれぞれ独立しており、相互の整合性チェックは行わない。
//! 表示文字列の組み立てはここに集約し、Web/CLIの両方から使う。

use crate::types::{AnalysisResult, EligibilityStatus, JdCriteria};
use serde::{Deserialize, Serialize};

/// JD要件が無い場合の表示
pub const NO_CRITERIA_PLACEHOLDER: &str = "No JD content found";

/// トレーニング計画が空の場合の表示（メイン画面のみ）
pub const NO_PLAN_PLACEHOLDER: &str = "No plan found.";

/// 結果画面のバリエーション
///
/// 2つの表示は挙動が異なり、どちらが正とも決めない。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultsVariant {
    /// 円グラフ + マークアップ描画の計画 + 通知アクションなし
    #[default]
    Main,
    /// 棒グラフ + 整形済みテキストの計画 + 行ごとのSend Mailアクション
    Alternate,
}

/// トレーニング計画の描画形式
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanFormat {
    Markup,
    Preformatted,
}

impl ResultsVariant {
    pub fn plan_format(&self) -> PlanFormat {
        match self {
            ResultsVariant::Main => PlanFormat::Markup,
            ResultsVariant::Alternate => PlanFormat::Preformatted,
        }
    }

    pub fn offers_mail_action(&self) -> bool {
        matches!(self, ResultsVariant::Alternate)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResultsVariant::Main => "main",
            ResultsVariant::Alternate => "alternate",
        }
    }
}

impl std::str::FromStr for ResultsVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "main" | "m" => Ok(ResultsVariant::Main),
            "alternate" | "alt" | "a" => Ok(ResultsVariant::Alternate),
            _ => Err(format!("Unknown view: {}. Use main or alternate", s)),
        }
    }
}

impl std::fmt::Display for ResultsVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JD要件セクション
#[derive(Debug, Clone, PartialEq)]
pub struct CriteriaSection {
    pub text: String,
    /// 構造化された要件（ラベル, 値）。バックエンドが返した項目のみ
    pub details: Vec<(&'static str, String)>,
}

impl CriteriaSection {
    fn from_result(result: &AnalysisResult) -> Self {
        Self {
            text: result
                .criteria_text()
                .unwrap_or(NO_CRITERIA_PLACEHOLDER)
                .to_string(),
            details: result
                .jd_criteria
                .as_ref()
                .map(criteria_details)
                .unwrap_or_default(),
        }
    }
}

fn criteria_details(criteria: &JdCriteria) -> Vec<(&'static str, String)> {
    let mut details = Vec::new();
    if let Some(cgpa) = criteria.min_cgpa {
        details.push(("Min CGPA", format!("{}", cgpa)));
    }
    if !criteria.must_have_skills.is_empty() {
        details.push(("Must-Have Skills", criteria.must_have_skills.join(", ")));
    }
    if !criteria.preferred_skills.is_empty() {
        details.push(("Preferred Skills", criteria.preferred_skills.join(", ")));
    }
    if let Some(n) = criteria.min_internships {
        details.push(("Min Internships", n.to_string()));
    }
    if let Some(n) = criteria.min_projects {
        details.push(("Min Projects", n.to_string()));
    }
    if let Some(required) = criteria.hackathon_required {
        details.push(("Hackathon Required", if required { "Yes" } else { "No" }.to_string()));
    }
    if let Some(coverage) = criteria.coverage_percent.as_ref().filter(|s| !s.is_empty()) {
        details.push(("Coverage", coverage.clone()));
    }
    details
}

/// 適格判定の1行
#[derive(Debug, Clone, PartialEq)]
pub struct EligibilityRow {
    pub student_id: String,
    pub status: EligibilityStatus,
    pub reasons: Vec<String>,
}

impl EligibilityRow {
    /// 理由リストは1件以上ある場合のみ表示する
    pub fn shows_reasons(&self) -> bool {
        !self.reasons.is_empty()
    }

    pub fn headline(&self) -> String {
        format!("{} - {}", self.student_id, self.status)
    }
}

/// 不足スキルの1行
#[derive(Debug, Clone, PartialEq)]
pub struct GapRow {
    pub student_id: String,
    pub gaps: Vec<String>,
}

impl GapRow {
    pub fn missing(&self) -> String {
        self.gaps.join(", ")
    }

    pub fn line(&self) -> String {
        format!("{} - Missing: {}", self.student_id, self.missing())
    }
}

/// トレーニング計画の1行
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingRow {
    pub student_id: String,
    pub plan: String,
}

impl TrainingRow {
    /// 表示する計画テキスト（メイン画面は空のときプレースホルダ）
    pub fn plan_for(&self, variant: ResultsVariant) -> &str {
        match variant {
            ResultsVariant::Main if self.plan.is_empty() => NO_PLAN_PLACEHOLDER,
            _ => &self.plan,
        }
    }
}

/// 通知の1行
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationRow {
    pub student_id: String,
    pub status: String,
    pub message: String,
    pub email_status: Option<String>,
}

impl NotificationRow {
    pub fn line(&self) -> String {
        format!("{} - {} → {}", self.student_id, self.status, self.message)
    }
}

/// 結果画面の全セクション
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSections {
    pub criteria: CriteriaSection,
    pub eligibility: Vec<EligibilityRow>,
    pub gaps: Vec<GapRow>,
    pub training: Vec<TrainingRow>,
    pub notifications: Vec<NotificationRow>,
}

impl ResultSections {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            criteria: CriteriaSection::from_result(result),
            eligibility: result
                .eligibility_results
                .iter()
                .map(|e| EligibilityRow {
                    student_id: e.student_id.clone(),
                    status: e.status.clone(),
                    reasons: e.reasons.clone(),
                })
                .collect(),
            gaps: result
                .gap_analysis
                .iter()
                .map(|g| GapRow {
                    student_id: g.student_id.clone(),
                    gaps: g.gaps.clone(),
                })
                .collect(),
            training: result
                .training_recommendations
                .iter()
                .map(|t| TrainingRow {
                    student_id: t.student_id.clone(),
                    plan: t.training_plan.clone(),
                })
                .collect(),
            notifications: result
                .notification_summary
                .iter()
                .map(|n| NotificationRow {
                    student_id: n.student_id.clone(),
                    status: n.status.clone(),
                    message: n.message.clone(),
                    email_status: n.email_status.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_analysis_response;

    #[test]
    fn test_gap_line() {
        let result =
            parse_analysis_response(r#"{"gap_analysis": [{"student_id": "S1", "gaps": ["SQL", "Docker"]}]}"#)
                .expect("パース失敗");
        let sections = ResultSections::from_result(&result);
        assert_eq!(sections.gaps[0].line(), "S1 - Missing: SQL, Docker");
    }

    #[test]
    fn test_gap_line_without_gaps() {
        let row = GapRow { student_id: "S2".to_string(), gaps: vec![] };
        assert_eq!(row.line(), "S2 - Missing: ");
    }

    #[test]
    fn test_criteria_placeholder() {
        let sections = ResultSections::from_result(&AnalysisResult::default());
        assert_eq!(sections.criteria.text, NO_CRITERIA_PLACEHOLDER);
        assert!(sections.criteria.details.is_empty());
    }

    #[test]
    fn test_criteria_details() {
        let result = parse_analysis_response(
            r#"{"jd_criteria": {"content": "x", "min_cgpa": 7.5, "must_have_skills": ["Python"], "hackathon_required": false, "coverage_percent": "80.0%"}}"#,
        )
        .expect("パース失敗");
        let sections = ResultSections::from_result(&result);
        assert_eq!(sections.criteria.text, "x");
        assert_eq!(
            sections.criteria.details,
            vec![
                ("Min CGPA", "7.5".to_string()),
                ("Must-Have Skills", "Python".to_string()),
                ("Hackathon Required", "No".to_string()),
                ("Coverage", "80.0%".to_string()),
            ]
        );
    }

    #[test]
    fn test_eligibility_reasons_visibility() {
        let result = parse_analysis_response(
            r#"{"eligibility_results": [
                {"student_id": "S1", "status": "eligible", "reasons": []},
                {"student_id": "S2", "status": "not_eligible", "reasons": ["Missing required skills: Sql"]}
            ]}"#,
        )
        .expect("パース失敗");
        let sections = ResultSections::from_result(&result);
        assert!(!sections.eligibility[0].shows_reasons());
        assert!(sections.eligibility[1].shows_reasons());
        assert_eq!(sections.eligibility[1].headline(), "S2 - not_eligible");
    }

    #[test]
    fn test_notification_line() {
        let row = NotificationRow {
            student_id: "S1".to_string(),
            status: "eligible".to_string(),
            message: "See training plan.".to_string(),
            email_status: None,
        };
        assert_eq!(row.line(), "S1 - eligible → See training plan.");
    }

    #[test]
    fn test_notifications_empty_when_malformed() {
        let result = parse_analysis_response(r#"{"notification_summary": "none"}"#).expect("パース失敗");
        let sections = ResultSections::from_result(&result);
        assert!(sections.notifications.is_empty());
    }

    #[test]
    fn test_training_plan_placeholder_only_in_main() {
        let row = TrainingRow { student_id: "S1".to_string(), plan: String::new() };
        assert_eq!(row.plan_for(ResultsVariant::Main), NO_PLAN_PLACEHOLDER);
        assert_eq!(row.plan_for(ResultsVariant::Alternate), "");
    }

    #[test]
    fn test_variant_behaviour() {
        assert_eq!(ResultsVariant::Main.plan_format(), PlanFormat::Markup);
        assert!(!ResultsVariant::Main.offers_mail_action());
        assert_eq!(ResultsVariant::Alternate.plan_format(), PlanFormat::Preformatted);
        assert!(ResultsVariant::Alternate.offers_mail_action());
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!("main".parse::<ResultsVariant>(), Ok(ResultsVariant::Main));
        assert_eq!("ALT".parse::<ResultsVariant>(), Ok(ResultsVariant::Alternate));
        assert!("grid".parse::<ResultsVariant>().is_err());
    }
}
