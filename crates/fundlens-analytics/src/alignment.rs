//! 두 포지션 시계열의 날짜 기준 내부 조인.

use fundlens_core::{AlignedPair, AlignedSeries, AnalyticsError, AnalyticsResult, PositionSeries};
use std::cmp::Ordering;

/// 시계열 정렬기.
pub struct SeriesAligner;

impl SeriesAligner {
    /// 두 시계열에 모두 존재하는 날짜만 남기고 `a - b` 차이를 계산합니다.
    ///
    /// 한쪽에만 있는 날짜는 버려집니다. 공통 날짜가 없으면
    /// `EmptyIntersection`을 반환합니다.
    pub fn align(a: &PositionSeries, b: &PositionSeries) -> AnalyticsResult<AlignedSeries> {
        let mut pairs = Vec::with_capacity(a.len().min(b.len()));
        let (mut i, mut j) = (0, 0);

        // 두 시계열 모두 날짜 오름차순
        while i < a.points.len() && j < b.points.len() {
            let (pa, pb) = (&a.points[i], &b.points[j]);
            match pa.date.cmp(&pb.date) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    pairs.push(AlignedPair::new(pa.date, pa.value, pb.value));
                    i += 1;
                    j += 1;
                }
            }
        }

        if pairs.is_empty() {
            return Err(AnalyticsError::EmptyIntersection(
                a.label.clone(),
                b.label.clone(),
            ));
        }

        Ok(AlignedSeries {
            label_a: a.label.clone(),
            label_b: b.label.clone(),
            pairs,
        })
    }
}
