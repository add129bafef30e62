//! 対話式の通知先選択モジュール

use crate::error::{Result, TrackerError};
use dialoguer::MultiSelect;
use jd_tracker_common::{AnalysisResult, NotificationRow, ResultSections};
use std::collections::HashSet;

/// 通知候補の学生ID（重複除去、出現順）
pub fn collect_recipients(rows: &[NotificationRow]) -> Vec<&NotificationRow> {
    let mut seen = HashSet::new();
    rows.iter()
        .filter(|r| !r.student_id.trim().is_empty())
        .filter(|r| seen.insert(r.student_id.as_str()))
        .collect()
}

/// 送信済みでない行を既定で選択しておく
fn default_checked(row: &NotificationRow) -> bool {
    !matches!(row.email_status.as_deref(), Some("sent"))
}

/// 通知メールの送信先を対話的に選ぶ
pub fn prompt_recipients(result: &AnalysisResult) -> Result<Vec<String>> {
    let sections = ResultSections::from_result(result);
    let candidates = collect_recipients(&sections.notifications);

    if candidates.is_empty() {
        println!("通知対象の学生がいません");
        return Ok(Vec::new());
    }

    let items: Vec<String> = candidates.iter().map(|r| r.line()).collect();
    let checked: Vec<bool> = candidates.iter().map(|r| default_checked(r)).collect();

    let selected = MultiSelect::new()
        .with_prompt("Send Mail (space:選択 enter:確定)")
        .items(&items)
        .defaults(&checked)
        .interact()
        .map_err(|e| TrackerError::Prompt(e.to_string()))?;

    Ok(selected
        .into_iter()
        .map(|i| candidates[i].student_id.clone())
        .collect())
}
