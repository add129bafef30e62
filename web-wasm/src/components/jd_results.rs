//! 別表示の結果画面
//!
//! 棒グラフ、整形済みテキストの計画、通知行ごとのSend Mailボタン。
//! ボタンは呼び出し元のコールバックに学生IDを渡すだけで、送信状態は持たない。

use crate::components::eligibility_chart::EligibilityBars;
use crate::components::sections::{CriteriaBlock, EligibilityList, GapList};
use jd_tracker_common::{AnalysisResult, ChartPalette, ChartSeries, ResultSections, ResultsVariant};
use leptos::prelude::*;

#[component]
pub fn JdResults<F>(result: AnalysisResult, on_send_mail: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    let series = ChartSeries::from_result(&result, ChartPalette::Alternate);
    let sections = ResultSections::from_result(&result);

    view! {
        <div class="results-box">
            <div class="section">
                <h2>"🧾 JD Criteria"</h2>
                <CriteriaBlock criteria=sections.criteria />
            </div>

            <div class="section">
                <h2>"📊 Eligibility Results"</h2>
                <EligibilityBars series=series />
                <EligibilityList rows=sections.eligibility />
            </div>

            <div class="section">
                <h2>"📉 Gap Analysis"</h2>
                <GapList rows=sections.gaps />
            </div>

            <div class="section">
                <h2>"📚 Training Plan"</h2>
                <ul>
                    {sections
                        .training
                        .into_iter()
                        .map(|row| {
                            let plan = row.plan_for(ResultsVariant::Alternate).to_string();
                            view! {
                                <li>
                                    <b>{row.student_id}</b>
                                    <pre>{plan}</pre>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>

            <div class="section">
                <h2>"📬 Notification Summary"</h2>
                <ul>
                    {sections
                        .notifications
                        .into_iter()
                        .map(|row| {
                            let on_send_mail = on_send_mail.clone();
                            let student_id = row.student_id.clone();
                            let email_status = row
                                .email_status
                                .clone()
                                .map(|s| view! { <span class="email-status">{format!(" [{}]", s)}</span> });
                            view! {
                                <li>
                                    <b>{row.student_id.clone()}</b>
                                    {format!(" - {} → {}", row.status, row.message)}
                                    {email_status}
                                    <button
                                        class="send-btn"
                                        on:click=move |_| on_send_mail(student_id.clone())
                                    >
                                        "Send Mail"
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
