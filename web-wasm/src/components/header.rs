//! ヘッダーコンポーネント

use jd_tracker_common::ResultsVariant;
use leptos::prelude::*;

#[component]
pub fn Header(view_mode: RwSignal<ResultsVariant>) -> impl IntoView {
    let toggle = move |_| {
        view_mode.update(|v| {
            *v = match v {
                ResultsVariant::Main => ResultsVariant::Alternate,
                ResultsVariant::Alternate => ResultsVariant::Main,
            }
        });
    };

    view! {
        <header class="header">
            <h1 class="title">"🎯 Eligibility & Training Tracker"</h1>
            <button class="btn btn-secondary view-toggle" on:click=toggle>
                {move || format!("View: {}", view_mode.get())}
            </button>
        </header>
    }
}
