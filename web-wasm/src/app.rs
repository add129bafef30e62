//! メインアプリケーションコンポーネント

use crate::api::{backend, file::BrowserFile};
use crate::components::{
    header::Header,
    jd_results::JdResults,
    results_view::ResultsView,
    upload_area::UploadArea,
};
use gloo::console;
use gloo::dialogs::alert;
use jd_tracker_common::{
    Error, MarkupPolicy, PickedFile, ResultStore, ResultsVariant, UploadControl,
    DEFAULT_ENDPOINT, DEFAULT_MAIL_ENDPOINT, NO_FILE_MESSAGE, SEND_MAIL_FAILED_MESSAGE,
    UPLOAD_FAILED_MESSAGE,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

/// トレーニング計画の生HTMLをどう扱うか
///
/// バックエンドは同一オリジンの信頼済みサービスとして扱う。
/// 信頼できない応答を受ける構成では`EscapeHtml`に切り替える。
const TRAINING_PLAN_POLICY: MarkupPolicy = MarkupPolicy::TrustBackend;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let store = RwSignal::new(ResultStore::new());
    // web_sys::FileはSendでないためローカル保持
    let control = RwSignal::new_local(UploadControl::<BrowserFile>::new());
    let view_mode = RwSignal::new(ResultsVariant::Main);

    let busy = Signal::derive(move || store.with(|s| s.is_busy()));
    let selected_name = Signal::derive(move || {
        control.with(|c| c.selected().map(|f| f.file_name().to_string()))
    });

    let on_file_selected = move |file: Option<File>| {
        let file = file.map(BrowserFile::new);
        match &file {
            Some(f) => console::log!("selected", f.file_name().to_string(), f.size()),
            None => console::log!("selection cleared"),
        }
        control.update(|c| c.set_selection(file));
    };

    let on_upload = move |_| {
        let submission = control.with_untracked(|c| {
            store.with_untracked(|s| c.submission(s).cloned())
        });

        let file = match submission {
            Ok(file) => file,
            Err(Error::NoFileSelected) => {
                alert(NO_FILE_MESSAGE);
                return;
            }
            Err(e) => {
                console::warn!(e.to_string());
                return;
            }
        };

        let mut started = Ok(());
        store.update(|s| started = s.begin_upload());
        if let Err(e) = started {
            console::warn!(e.to_string());
            return;
        }

        spawn_local(async move {
            let outcome = match file.read().await {
                Ok(selected) => backend::process_jd(DEFAULT_ENDPOINT, &selected).await,
                Err(e) => Err(e),
            };

            let mut failure = None;
            store.update(|s| failure = s.finish_upload(outcome).err());
            if let Some(e) = failure {
                console::error!("upload failed", file.file_name().to_string(), e);
                alert(UPLOAD_FAILED_MESSAGE);
            }
        });
    };

    let on_send_mail = move |student_id: String| {
        spawn_local(async move {
            if let Err(e) = backend::send_mail(DEFAULT_MAIL_ENDPOINT, &student_id).await {
                console::error!("send mail failed", student_id, e);
                alert(SEND_MAIL_FAILED_MESSAGE);
            }
        });
    };

    view! {
        <div class="container">
            <div class="card">
                <Header view_mode=view_mode />

                <UploadArea
                    busy=busy
                    selected_name=selected_name
                    on_file_selected=on_file_selected
                    on_upload=on_upload
                />

                {move || {
                    let result = store.with(|s| s.current().cloned())?;
                    Some(match view_mode.get() {
                        ResultsVariant::Main => view! {
                            <ResultsView result=result plan_policy=TRAINING_PLAN_POLICY />
                        }
                        .into_any(),
                        ResultsVariant::Alternate => view! {
                            <JdResults result=result on_send_mail=on_send_mail />
                        }
                        .into_any(),
                    })
                }}
            </div>
        </div>
    }
}
