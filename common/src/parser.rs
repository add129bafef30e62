//! バックエンドレスポンスパーサー
//!
//! トランスポート境界で一度だけ正規化を行う。
//! レンダラー側では欠落フィールドを考慮する必要がない。

use crate::error::{Error, Result};
use crate::types::AnalysisResult;
use serde_json::{Map, Value};

/// 解析結果のセクションキー
const SECTION_KEYS: [&str; 5] = [
    "jd_criteria",
    "eligibility_results",
    "gap_analysis",
    "training_recommendations",
    "notification_summary",
];

/// レスポンスボディをパースしてAnalysisResultに正規化
///
/// 正規化ルール:
/// 1. 空ボディ / `null` → 空の解析結果
/// 2. JSONオブジェクト以外 → `Error::Parse`
/// 3. セクションを持たず`error`文字列だけを持つ → `Error::Backend`
/// 4. 各セクションは型の寛容デシリアライズで補正
///
/// # Examples
/// ```
/// use jd_tracker_common::parse_analysis_response;
///
/// let result = parse_analysis_response(r#"{"notification_summary": "n/a"}"#).unwrap();
/// assert!(result.notification_summary.is_empty());
/// ```
pub fn parse_analysis_response(body: &str) -> Result<AnalysisResult> {
    if body.trim().is_empty() {
        return Ok(AnalysisResult::default());
    }

    let value: Value = serde_json::from_str(body)
        .map_err(|e| Error::Parse(format!("response is not JSON: {}", e)))?;

    parse_analysis_value(value)
}

/// パース済みJSON値からAnalysisResultに正規化
pub fn parse_analysis_value(value: Value) -> Result<AnalysisResult> {
    let map = match value {
        Value::Null => return Ok(AnalysisResult::default()),
        Value::Object(map) => map,
        other => {
            return Err(Error::Parse(format!(
                "expected a JSON object, got {}",
                value_kind(&other)
            )))
        }
    };

    if let Some(message) = backend_error(&map) {
        log::warn!("backend reported an error: {}", message);
        return Err(Error::Backend(message));
    }

    let result: AnalysisResult = serde_json::from_value(Value::Object(map))?;
    log::debug!(
        "analysis result: {} eligibility, {} gaps, {} plans, {} notifications",
        result.eligibility_results.len(),
        result.gap_analysis.len(),
        result.training_recommendations.len(),
        result.notification_summary.len(),
    );
    Ok(result)
}

fn backend_error(map: &Map<String, Value>) -> Option<String> {
    let message = map.get("error")?.as_str()?;
    let has_sections = SECTION_KEYS
        .iter()
        .any(|key| map.get(*key).is_some_and(|v| !v.is_null()));

    if has_sections {
        None
    } else {
        Some(message.to_string())
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
