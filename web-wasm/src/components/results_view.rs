//! メイン結果画面
//!
//! 円グラフ、マークアップ描画のトレーニング計画、通知は表示のみ。

use crate::components::eligibility_chart::EligibilityPie;
use crate::components::sections::{CriteriaBlock, EligibilityList, GapList};
use jd_tracker_common::{
    render_markup_html, AnalysisResult, ChartPalette, ChartSeries, MarkupPolicy, ResultSections,
    ResultsVariant,
};
use leptos::prelude::*;

#[component]
pub fn ResultsView(result: AnalysisResult, plan_policy: MarkupPolicy) -> impl IntoView {
    let series = ChartSeries::from_result(&result, ChartPalette::Primary);
    let sections = ResultSections::from_result(&result);

    view! {
        <div class="results-section">
            <EligibilityPie series=series />

            <section>
                <h2 class="section-title">"🧾 JD Criteria"</h2>
                <CriteriaBlock criteria=sections.criteria />
            </section>

            <section>
                <h2 class="section-title">"✅ Eligibility Results"</h2>
                <EligibilityList rows=sections.eligibility />
            </section>

            <section>
                <h2 class="section-title">"📉 Gap Analysis"</h2>
                <GapList rows=sections.gaps />
            </section>

            <section>
                <h2 class="section-title">"📚 Training Plan"</h2>
                <ul>
                    {sections
                        .training
                        .into_iter()
                        .map(|row| {
                            let html = render_markup_html(row.plan_for(ResultsVariant::Main), plan_policy);
                            view! {
                                <li>
                                    <b>{row.student_id}</b>
                                    <div class="markdown-box" inner_html=html></div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>

            <section>
                <h2 class="section-title">"📬 Notification Summary"</h2>
                <ul>
                    {sections
                        .notifications
                        .into_iter()
                        .map(|row| {
                            view! {
                                <li>
                                    <b>{row.student_id.clone()}</b>
                                    {format!(" - {} → {}", row.status, row.message)}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
        </div>
    }
}
