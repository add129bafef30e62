//! 適格ステータスのグラフデータ
//!
//! カテゴリ順は常に eligible → partially_eligible → not_eligible。
//! 未知のステータスはどのカテゴリにも数えない。

use crate::types::{AnalysisResult, EligibilityEntry};

/// カテゴリラベル（表示順）
pub const CATEGORY_LABELS: [&str; 3] = ["Eligible", "Partially Eligible", "Not Eligible"];

/// カテゴリごとの件数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EligibilityCounts {
    pub eligible: usize,
    pub partially_eligible: usize,
    pub not_eligible: usize,
}

impl EligibilityCounts {
    pub fn from_entries(entries: &[EligibilityEntry]) -> Self {
        let mut buckets = [0usize; 3];
        for entry in entries {
            if let Some(index) = entry.status.category_index() {
                buckets[index] += 1;
            }
        }
        Self {
            eligible: buckets[0],
            partially_eligible: buckets[1],
            not_eligible: buckets[2],
        }
    }

    pub fn as_array(&self) -> [usize; 3] {
        [self.eligible, self.partially_eligible, self.not_eligible]
    }

    pub fn total(&self) -> usize {
        self.eligible + self.partially_eligible + self.not_eligible
    }

    pub fn max(&self) -> usize {
        self.as_array().into_iter().max().unwrap_or(0)
    }
}

/// 配色（メイン画面: 円グラフ / 別表示: 棒グラフ）
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChartPalette {
    #[default]
    Primary,
    Alternate,
}

impl ChartPalette {
    pub fn colors(&self) -> [&'static str; 3] {
        match self {
            ChartPalette::Primary => ["#10B981", "#FBBF24", "#EF4444"],
            ChartPalette::Alternate => ["#28a745", "#ffc107", "#dc3545"],
        }
    }

    pub fn series_label(&self) -> Option<&'static str> {
        match self {
            ChartPalette::Primary => None,
            ChartPalette::Alternate => Some("Students"),
        }
    }
}

/// 1系列のグラフデータ
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub label: Option<&'static str>,
    pub labels: [&'static str; 3],
    pub data: [usize; 3],
    pub colors: [&'static str; 3],
}

impl ChartSeries {
    pub fn new(counts: EligibilityCounts, palette: ChartPalette) -> Self {
        Self {
            label: palette.series_label(),
            labels: CATEGORY_LABELS,
            data: counts.as_array(),
            colors: palette.colors(),
        }
    }

    pub fn from_result(result: &AnalysisResult, palette: ChartPalette) -> Self {
        Self::new(
            EligibilityCounts::from_entries(&result.eligibility_results),
            palette,
        )
    }

    pub fn total(&self) -> usize {
        self.data.iter().sum()
    }

    /// 円グラフのスライス（0件のカテゴリは含まない、12時方向から時計回り）
    pub fn pie_slices(&self) -> Vec<PieSlice> {
        let total = self.total();
        if total == 0 {
            return Vec::new();
        }

        let mut start = -90.0;
        let mut slices = Vec::new();
        for i in 0..3 {
            let value = self.data[i];
            if value == 0 {
                continue;
            }
            let sweep = 360.0 * value as f64 / total as f64;
            slices.push(PieSlice {
                label: self.labels[i],
                color: self.colors[i],
                value,
                start_deg: start,
                end_deg: start + sweep,
            });
            start += sweep;
        }
        slices
    }

    /// 棒グラフのバー（最大件数を`max_height`に合わせる）
    pub fn bars(&self, max_height: f64) -> Vec<Bar> {
        let max = self.data.iter().copied().max().unwrap_or(0);
        (0..3)
            .map(|i| {
                let value = self.data[i];
                let height = if max == 0 {
                    0.0
                } else {
                    max_height * value as f64 / max as f64
                };
                Bar {
                    label: self.labels[i],
                    color: self.colors[i],
                    value,
                    height,
                }
            })
            .collect()
    }
}

/// 円グラフの1スライス
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: &'static str,
    pub color: &'static str,
    pub value: usize,
    pub start_deg: f64,
    pub end_deg: f64,
}

impl PieSlice {
    pub fn sweep_deg(&self) -> f64 {
        self.end_deg - self.start_deg
    }

    /// SVGのpath d属性
    pub fn svg_path(&self, cx: f64, cy: f64, r: f64) -> String {
        // 全周はarcで表現できないため半円2つで描く
        if self.sweep_deg() >= 359.999 {
            return format!(
                "M {:.3} {:.3} A {r:.3} {r:.3} 0 1 1 {:.3} {:.3} A {r:.3} {r:.3} 0 1 1 {:.3} {:.3} Z",
                cx - r,
                cy,
                cx + r,
                cy,
                cx - r,
                cy,
                r = r
            );
        }

        let (x1, y1) = polar(cx, cy, r, self.start_deg);
        let (x2, y2) = polar(cx, cy, r, self.end_deg);
        let large_arc = if self.sweep_deg() > 180.0 { 1 } else { 0 };
        format!(
            "M {:.3} {:.3} L {:.3} {:.3} A {r:.3} {r:.3} 0 {} 1 {:.3} {:.3} Z",
            cx,
            cy,
            x1,
            y1,
            large_arc,
            x2,
            y2,
            r = r
        )
    }
}

fn polar(cx: f64, cy: f64, r: f64, deg: f64) -> (f64, f64) {
    let rad = deg.to_radians();
    (cx + r * rad.cos(), cy + r * rad.sin())
}

/// 棒グラフの1本
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: &'static str,
    pub color: &'static str,
    pub value: usize,
    pub height: f64,
}
