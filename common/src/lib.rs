//! JD Tracker Common Library
//!
//! CLIとWeb(WASM)で共有される型とビュー導出ロジック

pub mod types;
pub mod error;
pub mod parser;
pub mod chart;
pub mod sections;
pub mod markup;
pub mod store;
pub mod upload;

pub use types::{
    AnalysisResult, EligibilityEntry, EligibilityStatus, GapEntry, JdCriteria,
    NotificationEntry, TrainingRecommendation,
};
pub use error::{Error, Result};
pub use parser::{parse_analysis_response, parse_analysis_value};
pub use chart::{Bar, ChartPalette, ChartSeries, EligibilityCounts, PieSlice, CATEGORY_LABELS};
pub use sections::{
    CriteriaSection, EligibilityRow, GapRow, NotificationRow, PlanFormat, ResultSections,
    ResultsVariant, TrainingRow,
};
pub use markup::{render_markup_html, render_markup_plain, MarkupPolicy};
pub use store::ResultStore;
pub use upload::{
    accept_attribute, button_label, has_accepted_extension, PickedFile, SelectedFile,
    UploadControl, ACCEPTED_EXTENSIONS, DEFAULT_ENDPOINT, DEFAULT_MAIL_ENDPOINT,
    FILE_FIELD_NAME, NO_FILE_MESSAGE, SEND_MAIL_FAILED_MESSAGE, UPLOAD_FAILED_MESSAGE,
};
