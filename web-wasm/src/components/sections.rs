//! 両方の結果画面で共通のセクション

use jd_tracker_common::{CriteriaSection, EligibilityRow, GapRow};
use leptos::prelude::*;

#[component]
pub fn CriteriaBlock(criteria: CriteriaSection) -> impl IntoView {
    let CriteriaSection { text, details } = criteria;
    view! {
        <pre class="pre-block">{text}</pre>
        {(!details.is_empty()).then(|| {
            view! {
                <dl class="criteria-details">
                    {details
                        .into_iter()
                        .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                        .collect_view()}
                </dl>
            }
        })}
    }
}

#[component]
pub fn EligibilityList(rows: Vec<EligibilityRow>) -> impl IntoView {
    view! {
        <ul>
            {rows
                .into_iter()
                .map(|row| {
                    let reasons = row.shows_reasons().then(|| {
                        view! {
                            <ul class="reason-list">
                                {row.reasons.iter().cloned().map(|r| view! { <li class="reason">{r}</li> }).collect_view()}
                            </ul>
                        }
                    });
                    view! {
                        <li>
                            <b>{row.student_id.clone()}</b>
                            {format!(" - {}", row.status)}
                            {reasons}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
pub fn GapList(rows: Vec<GapRow>) -> impl IntoView {
    view! {
        <ul>
            {rows
                .into_iter()
                .map(|row| {
                    view! {
                        <li>
                            <b>{row.student_id.clone()}</b>
                            {format!(" - Missing: {}", row.missing())}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
