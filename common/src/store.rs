//! 結果ストア
//!
//! 直近に成功した解析結果とビジーフラグを保持する唯一の状態コンテナ。
//! 書き込みはアップロード完了ハンドラのみ、読み込みはレンダラーのみ。
//!
//! ライフサイクル:
//! - `begin_upload`: ビジーにする（表示中の結果はそのまま残す）
//! - `finish_upload(Ok)`: 結果を丸ごと置き換え、ビジー解除
//! - `finish_upload(Err)`: 結果は変更せず、ビジー解除

use crate::chart::{ChartPalette, ChartSeries};
use crate::error::{Error, Result};
use crate::types::AnalysisResult;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultStore {
    current: Option<AnalysisResult>,
    busy: bool,
    completed_uploads: u64,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&AnalysisResult> {
        self.current.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// 成功したアップロードの回数
    pub fn completed_uploads(&self) -> u64 {
        self.completed_uploads
    }

    /// アップロード開始（同時に1件まで）
    pub fn begin_upload(&mut self) -> Result<()> {
        if self.busy {
            return Err(Error::UploadInProgress);
        }
        self.busy = true;
        Ok(())
    }

    /// アップロード完了
    ///
    /// 成功時は格納した結果への参照を、失敗時はエラーをそのまま返す。
    pub fn finish_upload<E>(
        &mut self,
        outcome: std::result::Result<AnalysisResult, E>,
    ) -> std::result::Result<&AnalysisResult, E> {
        self.busy = false;
        let result = outcome?;
        self.completed_uploads += 1;
        Ok(&*self.current.insert(result))
    }

    /// 現在の結果のグラフデータ（結果が無ければNone）
    pub fn chart(&self, palette: ChartPalette) -> Option<ChartSeries> {
        self.current
            .as_ref()
            .map(|result| ChartSeries::from_result(result, palette))
    }
}
