//! 解析結果の型定義
//!
//! バックエンドが返すJSONペイロードを型付きで表現する。
//! 各フィールドはデシリアライズ時に一度だけ寛容に補正される:
//! - 欠落・null・配列以外のセクション → 空のVec
//! - オブジェクト以外の配列要素 → スキップ
//! - 数値や真偽値のテキスト項目 → 文字列化

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// バックエンドの解析結果（1回のアップロードにつき1つ）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default, deserialize_with = "lenient_opt", skip_serializing_if = "Option::is_none")]
    pub jd_criteria: Option<JdCriteria>,

    #[serde(default, deserialize_with = "lenient_entries")]
    pub eligibility_results: Vec<EligibilityEntry>,

    #[serde(default, deserialize_with = "lenient_entries")]
    pub gap_analysis: Vec<GapEntry>,

    #[serde(default, deserialize_with = "lenient_entries")]
    pub training_recommendations: Vec<TrainingRecommendation>,

    #[serde(default, deserialize_with = "lenient_entries")]
    pub notification_summary: Vec<NotificationEntry>,
}

impl AnalysisResult {
    /// JD要件テキスト（空文字はNone扱い）
    pub fn criteria_text(&self) -> Option<&str> {
        self.jd_criteria
            .as_ref()
            .and_then(|c| c.content.as_deref())
            .filter(|s| !s.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.jd_criteria.is_none()
            && self.eligibility_results.is_empty()
            && self.gap_analysis.is_empty()
            && self.training_recommendations.is_empty()
            && self.notification_summary.is_empty()
    }
}

/// JDから抽出された要件
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JdCriteria {
    #[serde(default, deserialize_with = "lenient_opt_text", skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, deserialize_with = "lenient_opt", skip_serializing_if = "Option::is_none")]
    pub min_cgpa: Option<f64>,

    #[serde(default, deserialize_with = "lenient_texts")]
    pub must_have_skills: Vec<String>,

    #[serde(default, deserialize_with = "lenient_texts")]
    pub preferred_skills: Vec<String>,

    #[serde(default, deserialize_with = "lenient_opt", skip_serializing_if = "Option::is_none")]
    pub min_internships: Option<u32>,

    #[serde(default, deserialize_with = "lenient_opt", skip_serializing_if = "Option::is_none")]
    pub min_projects: Option<u32>,

    #[serde(default, deserialize_with = "lenient_opt", skip_serializing_if = "Option::is_none")]
    pub hackathon_required: Option<bool>,

    #[serde(default, deserialize_with = "lenient_opt_text", skip_serializing_if = "Option::is_none")]
    pub coverage_percent: Option<String>,
}

/// 学生ごとの適格判定
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EligibilityEntry {
    #[serde(default, deserialize_with = "lenient_text")]
    pub student_id: String,

    #[serde(default)]
    pub status: EligibilityStatus,

    #[serde(default, deserialize_with = "lenient_texts")]
    pub reasons: Vec<String>,
}

/// 適格ステータス
///
/// 完全一致でのみ既知カテゴリに振り分ける。それ以外は`Other`として原文を保持し、
/// グラフの集計からは除外される。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EligibilityStatus {
    Eligible,
    PartiallyEligible,
    NotEligible,
    Other(String),
}

impl EligibilityStatus {
    pub fn as_str(&self) -> &str {
        match self {
            EligibilityStatus::Eligible => "eligible",
            EligibilityStatus::PartiallyEligible => "partially_eligible",
            EligibilityStatus::NotEligible => "not_eligible",
            EligibilityStatus::Other(s) => s,
        }
    }

    /// グラフのカテゴリ順（eligible, partially_eligible, not_eligible）でのインデックス
    pub fn category_index(&self) -> Option<usize> {
        match self {
            EligibilityStatus::Eligible => Some(0),
            EligibilityStatus::PartiallyEligible => Some(1),
            EligibilityStatus::NotEligible => Some(2),
            EligibilityStatus::Other(_) => None,
        }
    }
}

impl Default for EligibilityStatus {
    fn default() -> Self {
        EligibilityStatus::Other(String::new())
    }
}

impl From<String> for EligibilityStatus {
    fn from(s: String) -> Self {
        let known = match s.as_str() {
            "eligible" => Some(EligibilityStatus::Eligible),
            "partially_eligible" => Some(EligibilityStatus::PartiallyEligible),
            "not_eligible" => Some(EligibilityStatus::NotEligible),
            _ => None,
        };
        known.unwrap_or(EligibilityStatus::Other(s))
    }
}

impl From<&str> for EligibilityStatus {
    fn from(s: &str) -> Self {
        EligibilityStatus::from(s.to_string())
    }
}

impl std::fmt::Display for EligibilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EligibilityStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EligibilityStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(EligibilityStatus::from(value_to_text(&value)))
    }
}

/// 学生ごとの不足スキル
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GapEntry {
    #[serde(default, deserialize_with = "lenient_text")]
    pub student_id: String,

    #[serde(default, deserialize_with = "lenient_texts")]
    pub gaps: Vec<String>,
}

/// 学生ごとのトレーニング計画（軽量マークアップ）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingRecommendation {
    #[serde(default, deserialize_with = "lenient_text")]
    pub student_id: String,

    #[serde(default, deserialize_with = "lenient_text")]
    pub training_plan: String,
}

/// 学生ごとの通知結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationEntry {
    #[serde(default, deserialize_with = "lenient_text")]
    pub student_id: String,

    #[serde(default, deserialize_with = "lenient_text")]
    pub status: String,

    #[serde(default, deserialize_with = "lenient_text")]
    pub message: String,

    #[serde(default, deserialize_with = "lenient_opt_text", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "lenient_opt_text", skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,

    #[serde(default, deserialize_with = "lenient_opt_text", skip_serializing_if = "Option::is_none")]
    pub sent_at: Option<String>,

    #[serde(default, deserialize_with = "lenient_opt_text", skip_serializing_if = "Option::is_none")]
    pub email_status: Option<String>,
}

// =============================================
// 寛容デシリアライザ
// =============================================

fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_text(&value))
}

fn lenient_opt_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(Some(value_to_text(&value)))
}

fn lenient_texts<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .iter()
        .filter(|item| !item.is_null())
        .map(value_to_text)
        .collect())
}

fn lenient_opt<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

fn lenient_entries<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_result_default_is_empty() {
        let result = AnalysisResult::default();
        assert!(result.is_empty());
        assert_eq!(result.criteria_text(), None);
    }

    #[test]
    fn test_analysis_result_deserialize_full() {
        let json = r#"{
            "jd_criteria": {"content": "- CGPA ≥ 7.5", "min_cgpa": 7.5, "must_have_skills": ["Python", "Sql"]},
            "eligibility_results": [
                {"student_id": "S1", "status": "eligible", "reasons": []},
                {"student_id": "S2", "status": "not_eligible", "reasons": ["CGPA 6.1 is below required 7.5"]}
            ],
            "gap_analysis": [{"student_id": "S2", "gaps": ["SQL", "Docker"]}],
            "training_recommendations": [{"student_id": "S2", "training_plan": "**Week 1**: SQL"}],
            "notification_summary": [{"student_id": "S1", "status": "eligible", "message": "See training plan.", "email_status": "sent"}]
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(result.criteria_text(), Some("- CGPA ≥ 7.5"));
        let criteria = result.jd_criteria.as_ref().expect("criteriaなし");
        assert_eq!(criteria.min_cgpa, Some(7.5));
        assert_eq!(criteria.must_have_skills, vec!["Python", "Sql"]);
        assert_eq!(result.eligibility_results.len(), 2);
        assert_eq!(result.eligibility_results[1].status, EligibilityStatus::NotEligible);
        assert_eq!(result.eligibility_results[1].reasons.len(), 1);
        assert_eq!(result.gap_analysis[0].gaps, vec!["SQL", "Docker"]);
        assert_eq!(result.notification_summary[0].email_status.as_deref(), Some("sent"));
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let result: AnalysisResult = serde_json::from_str("{}").expect("デシリアライズ失敗");
        assert!(result.is_empty());
    }

    #[test]
    fn test_non_sequence_sections_default_to_empty() {
        let json = r#"{
            "eligibility_results": "oops",
            "gap_analysis": null,
            "training_recommendations": {"student_id": "S1"},
            "notification_summary": 42
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(result.eligibility_results.is_empty());
        assert!(result.gap_analysis.is_empty());
        assert!(result.training_recommendations.is_empty());
        assert!(result.notification_summary.is_empty());
    }

    #[test]
    fn test_non_object_elements_are_skipped() {
        let json = r#"{"gap_analysis": [1, "x", {"student_id": "S1", "gaps": ["Git"]}, null]}"#;
        let result: AnalysisResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(result.gap_analysis.len(), 1);
        assert_eq!(result.gap_analysis[0].student_id, "S1");
    }

    #[test]
    fn test_scalar_fields_are_stringified() {
        let json = r#"{"eligibility_results": [{"student_id": 101, "status": "eligible", "reasons": [3, null, "ok"]}]}"#;
        let result: AnalysisResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        let entry = &result.eligibility_results[0];
        assert_eq!(entry.student_id, "101");
        assert_eq!(entry.reasons, vec!["3", "ok"]);
    }

    #[test]
    fn test_gap_entry_without_gaps() {
        let json = r#"{"gap_analysis": [{"student_id": "S9"}]}"#;
        let result: AnalysisResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(result.gap_analysis[0].gaps.is_empty());
    }

    #[test]
    fn test_malformed_criteria_is_none() {
        let result: AnalysisResult =
            serde_json::from_str(r#"{"jd_criteria": "plain"}"#).expect("デシリアライズ失敗");
        assert!(result.jd_criteria.is_none());
    }

    #[test]
    fn test_empty_criteria_content_is_none() {
        let result: AnalysisResult =
            serde_json::from_str(r#"{"jd_criteria": {"content": ""}}"#).expect("デシリアライズ失敗");
        assert!(result.jd_criteria.is_some());
        assert_eq!(result.criteria_text(), None);
    }

    // =============================================
    // EligibilityStatus テスト
    // =============================================

    #[test]
    fn test_status_exact_match() {
        assert_eq!(EligibilityStatus::from("eligible"), EligibilityStatus::Eligible);
        assert_eq!(EligibilityStatus::from("partially_eligible"), EligibilityStatus::PartiallyEligible);
        assert_eq!(EligibilityStatus::from("not_eligible"), EligibilityStatus::NotEligible);
        assert_eq!(
            EligibilityStatus::from("Eligible"),
            EligibilityStatus::Other("Eligible".to_string())
        );
    }

    #[test]
    fn test_status_category_index() {
        assert_eq!(EligibilityStatus::Eligible.category_index(), Some(0));
        assert_eq!(EligibilityStatus::PartiallyEligible.category_index(), Some(1));
        assert_eq!(EligibilityStatus::NotEligible.category_index(), Some(2));
        assert_eq!(EligibilityStatus::from("pending").category_index(), None);
    }

    #[test]
    fn test_status_serializes_as_plain_string() {
        let entry = EligibilityEntry {
            student_id: "S1".to_string(),
            status: EligibilityStatus::PartiallyEligible,
            reasons: vec![],
        };
        let json = serde_json::to_string(&entry).expect("シリアライズ失敗");
        assert!(json.contains("\"status\":\"partially_eligible\""));
    }

    #[test]
    fn test_unknown_status_keeps_original_text() {
        let json = r#"{"eligibility_results": [{"student_id": "S1", "status": "on_hold"}]}"#;
        let result: AnalysisResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(result.eligibility_results[0].status.as_str(), "on_hold");
    }
}
