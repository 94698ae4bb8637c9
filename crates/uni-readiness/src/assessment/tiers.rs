use super::gap::{GapRecord, GapView};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::ops::Range;

/// Admission-likelihood bucket of a recommended university.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Ambitious,
    Target,
    Safe,
}

impl Tier {
    pub const fn ordered() -> [Tier; 3] {
        [Self::Ambitious, Self::Target, Self::Safe]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Ambitious => "Ambitious",
            Self::Target => "Target",
            Self::Safe => "Safe",
        }
    }

    /// Brand accent used by report renderers.
    pub const fn accent(self) -> &'static str {
        match self {
            Self::Ambitious => "#E53935",
            Self::Target => "#1E88E5",
            Self::Safe => "#43A047",
        }
    }
}

/// Window sizes around the anchor. The target span counts the anchor itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierPolicy {
    ambitious_span: usize,
    target_span: usize,
    safe_span: usize,
}

impl TierPolicy {
    pub const fn standard() -> Self {
        Self {
            ambitious_span: 6,
            target_span: 6,
            safe_span: 6,
        }
    }

    /// Returns `None` when the target span would not include the anchor.
    pub fn new(ambitious_span: usize, target_span: usize, safe_span: usize) -> Option<Self> {
        (target_span >= 1).then_some(Self {
            ambitious_span,
            target_span,
            safe_span,
        })
    }

    pub fn ambitious_span(&self) -> usize {
        self.ambitious_span
    }

    pub fn target_span(&self) -> usize {
        self.target_span
    }

    pub fn safe_span(&self) -> usize {
        self.safe_span
    }

    /// Upper bound on the number of recommended universities.
    pub fn capacity(&self) -> usize {
        self.ambitious_span
            .saturating_add(self.target_span)
            .saturating_add(self.safe_span)
    }
}

impl Default for TierPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorKind {
    /// Smallest strictly positive gap.
    ClosestReach,
    /// Smallest absolute gap; used when nothing is out of reach.
    ClosestMatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Anchor {
    pub index: usize,
    pub kind: AnchorKind,
}

pub fn select_anchor(records: &[GapRecord]) -> Option<Anchor> {
    let closest_reach = records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.is_reach())
        .min_by(|(_, a), (_, b)| a.gap.partial_cmp(&b.gap).unwrap_or(Ordering::Equal));

    if let Some((index, _)) = closest_reach {
        return Some(Anchor {
            index,
            kind: AnchorKind::ClosestReach,
        });
    }

    records
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            a.gap
                .abs()
                .partial_cmp(&b.gap.abs())
                .unwrap_or(Ordering::Equal)
        })
        .map(|(index, _)| Anchor {
            index,
            kind: AnchorKind::ClosestMatch,
        })
}

/// Three disjoint, contiguous index windows over a [`GapView`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TierWindows {
    pub anchor: Option<Anchor>,
    pub ambitious: Range<usize>,
    pub target: Range<usize>,
    pub safe: Range<usize>,
}

impl TierWindows {
    pub fn range(&self, tier: Tier) -> Range<usize> {
        match tier {
            Tier::Ambitious => self.ambitious.clone(),
            Tier::Target => self.target.clone(),
            Tier::Safe => self.safe.clone(),
        }
    }

    pub fn slice<'a>(&self, view: &'a GapView, tier: Tier) -> &'a [GapRecord] {
        view.records().get(self.range(tier)).unwrap_or(&[])
    }

    pub fn total(&self) -> usize {
        self.ambitious.len() + self.target.len() + self.safe.len()
    }
}

pub fn classify(view: &GapView, policy: &TierPolicy) -> TierWindows {
    let Some(anchor) = select_anchor(view.records()) else {
        return TierWindows::default();
    };

    let len = view.len();
    let target_start = anchor
        .index
        .saturating_sub(policy.target_span.saturating_sub(1));
    let ambitious_start = target_start.saturating_sub(policy.ambitious_span);
    let safe_start = anchor.index + 1;
    let safe_end = safe_start.saturating_add(policy.safe_span).min(len);

    TierWindows {
        anchor: Some(anchor),
        ambitious: ambitious_start..target_start,
        target: target_start..safe_start,
        safe: safe_start..safe_end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::gap::view_from_gaps;

    fn scenario_gaps() -> Vec<f64> {
        vec![
            12.0, 9.0, 7.0, 5.0, 3.0, 1.0, 0.5, -0.2, -1.0, -3.0, -4.0, -5.5, -6.0, -7.0, -8.0,
            -9.0, -10.0, -11.0, -12.0, -15.0,
        ]
    }

    #[test]
    fn scenario_anchor_is_smallest_positive_gap() {
        let view = view_from_gaps(&scenario_gaps());

        let windows = classify(&view, &TierPolicy::standard());

        assert_eq!(
            windows.anchor,
            Some(Anchor {
                index: 6,
                kind: AnchorKind::ClosestReach
            })
        );
        assert_eq!(windows.ambitious, 0..1);
        assert_eq!(windows.target, 1..7);
        assert_eq!(windows.safe, 7..13);
        assert_eq!(windows.slice(&view, Tier::Target).len(), 6);
        assert_eq!(windows.slice(&view, Tier::Safe)[0].gap, -0.2);
    }

    #[test]
    fn all_reach_schools_end_target_at_smallest_gap() {
        let gaps: Vec<f64> = (1..=15).rev().map(f64::from).collect();
        let view = view_from_gaps(&gaps);

        let windows = classify(&view, &TierPolicy::standard());

        assert_eq!(windows.anchor.map(|anchor| anchor.index), Some(14));
        assert_eq!(windows.target, 9..15);
        assert_eq!(windows.ambitious, 3..9);
        assert!(windows.safe.is_empty());
        assert_eq!(windows.slice(&view, Tier::Target).last().map(|r| r.gap), Some(1.0));
    }

    #[test]
    fn all_reachable_falls_back_to_closest_match() {
        let view = view_from_gaps(&[-0.4, -1.0, -2.5, -3.0, -4.0, -6.0, -7.5, -9.0, -9.5]);

        let windows = classify(&view, &TierPolicy::standard());

        assert_eq!(
            windows.anchor,
            Some(Anchor {
                index: 0,
                kind: AnchorKind::ClosestMatch
            })
        );
        assert!(windows.ambitious.is_empty());
        assert_eq!(windows.target, 0..1);
        assert_eq!(windows.safe, 1..7);
    }

    #[test]
    fn zero_gap_is_not_a_reach() {
        let view = view_from_gaps(&[0.0, -0.3, -2.0]);

        let anchor = select_anchor(view.records()).expect("anchor");

        assert_eq!(anchor.kind, AnchorKind::ClosestMatch);
        assert_eq!(anchor.index, 0);
    }

    #[test]
    fn ties_pick_the_first_occurrence() {
        let view = view_from_gaps(&[4.0, 2.0, 2.0, -1.0]);
        assert_eq!(select_anchor(view.records()).map(|a| a.index), Some(1));

        let view = view_from_gaps(&[-1.5, -1.5, -2.0]);
        assert_eq!(select_anchor(view.records()).map(|a| a.index), Some(0));
    }

    #[test]
    fn small_views_clamp_windows() {
        let view = view_from_gaps(&[3.0, 1.0, -2.0]);

        let windows = classify(&view, &TierPolicy::standard());

        assert!(windows.ambitious.is_empty());
        assert_eq!(windows.target, 0..2);
        assert_eq!(windows.safe, 2..3);
    }

    #[test]
    fn empty_view_produces_empty_windows() {
        let windows = classify(&GapView::default(), &TierPolicy::standard());

        assert_eq!(windows.anchor, None);
        assert_eq!(windows.total(), 0);
        for tier in Tier::ordered() {
            assert!(windows.slice(&GapView::default(), tier).is_empty());
        }
    }

    #[test]
    fn windows_are_disjoint_contiguous_and_bounded() {
        let policy = TierPolicy::standard();
        for len in 0..40usize {
            for shift in [-30.0, -12.5, -3.0, 0.0, 2.0, 7.5, 40.0] {
                let gaps: Vec<f64> = (0..len).rev().map(|step| step as f64 + shift).collect();
                let view = view_from_gaps(&gaps);

                let windows = classify(&view, &policy);

                assert!(windows.total() <= 18);
                assert_eq!(windows.ambitious.end, windows.target.start);
                assert!(windows.target.end <= windows.safe.start);
                assert!(windows.safe.end <= len);
                if len > 0 {
                    let anchor = windows.anchor.expect("non-empty view has an anchor");
                    assert_eq!(windows.target.end, anchor.index + 1);
                    assert_eq!(windows.safe.start, anchor.index + 1);
                }
            }
        }
    }

    #[test]
    fn oversized_spans_clamp_to_the_view() {
        let view = view_from_gaps(&[3.0, 1.0, -2.0]);
        let wide = TierPolicy::new(usize::MAX, usize::MAX, usize::MAX).expect("valid policy");

        let windows = classify(&view, &wide);

        assert!(windows.ambitious.is_empty());
        assert_eq!(windows.target, 0..2);
        assert_eq!(windows.safe, 2..3);
        assert_eq!(windows.total(), view.len());
        assert_eq!(wide.capacity(), usize::MAX);
    }

    #[test]
    fn policy_rejects_empty_target_span() {
        assert!(TierPolicy::new(6, 0, 6).is_none());
        let narrow = TierPolicy::new(2, 1, 3).expect("valid policy");
        assert_eq!(narrow.capacity(), 6);

        let view = view_from_gaps(&scenario_gaps());
        let windows = classify(&view, &narrow);
        assert_eq!(windows.ambitious, 4..6);
        assert_eq!(windows.target, 6..7);
        assert_eq!(windows.safe, 7..10);
    }
}
