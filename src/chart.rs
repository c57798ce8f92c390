//! 면적 차트 좌표 계산. GUI 그리기와 분리해 순수 함수로 둔다.

use crate::inflation::{span_len, ChartPoint};

/// 차트 축 범위. 값 축은 0부터 시작한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartBounds {
    pub first_year: i32,
    pub last_year: i32,
    pub max_value: f64,
}

impl ChartBounds {
    /// 점이 없거나 값이 모두 0 이하이면 None.
    pub fn from_points(points: &[ChartPoint]) -> Option<Self> {
        let first = points.first()?;
        let last = points.last()?;
        let max_value = points
            .iter()
            .map(|p| p.value)
            .filter(|v| v.is_finite())
            .fold(0.0_f64, f64::max);
        if max_value <= 0.0 {
            return None;
        }
        Some(Self {
            first_year: first.year,
            last_year: last.year,
            max_value,
        })
    }

    /// 점을 [0,1]×[0,1] 좌표로 옮긴다. y=1이 최댓값, y=0이 바닥이다.
    /// 한 해짜리 구간은 가로 가운데에 놓는다.
    pub fn normalize(&self, point: &ChartPoint) -> (f32, f32) {
        let span = i64::from(self.last_year) - i64::from(self.first_year);
        let x = if span == 0 {
            0.5
        } else {
            (i64::from(point.year) - i64::from(self.first_year)) as f64 / span as f64
        };
        let y = (point.value / self.max_value).clamp(0.0, 1.0);
        (x as f32, y as f32)
    }

    /// 가로축에 표시할 연도. 양 끝은 항상 포함하고 최대 `max_ticks`개.
    pub fn tick_years(&self, max_ticks: usize) -> Vec<i32> {
        let span = span_len(self.first_year, self.last_year).saturating_sub(1) as usize;
        if span == 0 || max_ticks < 2 {
            return vec![self.first_year];
        }
        let step = span.div_ceil(max_ticks - 1).max(1);
        let mut ticks: Vec<i32> = (self.first_year..self.last_year)
            .step_by(step)
            .collect();
        ticks.push(self.last_year);
        ticks
    }

    /// 가로 좌표(0..=1)에 가장 가까운 점의 인덱스. 툴팁에 쓴다.
    pub fn nearest_index(&self, points: &[ChartPoint], x: f32) -> Option<usize> {
        points
            .iter()
            .enumerate()
            .map(|(i, p)| (i, (self.normalize(p).0 - x).abs()))
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(i, _)| i)
    }
}
