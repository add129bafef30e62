//! アップロードエリアコンポーネント

use jd_tracker_common::{accept_attribute, button_label};
use leptos::prelude::*;
use web_sys::{File, HtmlInputElement};

#[component]
pub fn UploadArea<FS, FU>(
    busy: Signal<bool>,
    selected_name: Signal<Option<String>>,
    on_file_selected: FS,
    on_upload: FU,
) -> impl IntoView
where
    FS: Fn(Option<File>) + 'static + Clone + Send + Sync,
    FU: Fn(()) + 'static + Clone + Send + Sync,
{
    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        // キャンセル時は空のFileListが届く
        on_file_selected(input.files().and_then(|files| files.get(0)));
    };

    view! {
        <div class="upload-section">
            <input type="file" accept=accept_attribute() on:change=on_change />
            <button
                class="btn btn-primary"
                disabled=move || busy.get()
                on:click={
                    let on_upload = on_upload.clone();
                    move |_| on_upload(())
                }
            >
                {move || button_label(busy.get())}
            </button>
            <Show when=move || selected_name.get().is_some()>
                <span class="text-muted">{move || selected_name.get().unwrap_or_default()}</span>
            </Show>
        </div>
    }
}
