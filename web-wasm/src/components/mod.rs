//! UIコンポーネント

pub mod eligibility_chart;
pub mod header;
pub mod jd_results;
pub mod results_view;
pub mod sections;
pub mod upload_area;
