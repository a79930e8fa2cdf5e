//! Pipeline Aggregation
//!
//! Read-only views over a deal collection: stage buckets, stage totals and
//! pipeline-wide totals. Every function is pure and never fails; a deal
//! whose stage matches no requested bucket is simply left out.

use serde::Serialize;

use crate::domain::{Deal, Stage};

/// Deals in `stage`, in original insertion order
pub fn bucket_by_stage(deals: &[Deal], stage: Stage) -> Vec<&Deal> {
    deals.iter().filter(|deal| deal.stage == stage).collect()
}

/// Same as [`bucket_by_stage`] but keyed by the raw stage id.
/// Unknown ids give an empty bucket.
pub fn bucket_by_stage_id<'a>(deals: &'a [Deal], stage_id: &str) -> Vec<&'a Deal> {
    match Stage::parse(stage_id) {
        Some(stage) => bucket_by_stage(deals, stage),
        None => {
            log::debug!("unknown stage id {:?}, empty bucket", stage_id);
            Vec::new()
        }
    }
}

/// Saturating sum of deal values. Form input is bounded well below
/// overflow, but a `Deal` built in code may carry any value.
fn sum_values<'a>(deals: impl IntoIterator<Item = &'a Deal>) -> u64 {
    deals.into_iter().fold(0, |acc, deal| acc.saturating_add(deal.value))
}

/// Sum of deal values in `stage`
pub fn stage_total(deals: &[Deal], stage: Stage) -> u64 {
    sum_values(deals.iter().filter(|deal| deal.stage == stage))
}

/// Sum of deal values across every stage
pub fn total_pipeline_value(deals: &[Deal]) -> u64 {
    sum_values(deals)
}

/// Sum of `value * probability / 100`, unrounded
pub fn weighted_pipeline_value(deals: &[Deal]) -> f64 {
    deals.iter().map(Deal::weighted_value).sum()
}

/// Deals not yet closed (won or lost)
pub fn active_deal_count(deals: &[Deal]) -> usize {
    deals.iter().filter(|deal| deal.is_active()).count()
}

/// One kanban column's aggregate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageSummary {
    pub stage: Stage,
    pub count: usize,
    pub total: u64,
}

/// Whole-pipeline snapshot used by the reports page and export
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineSummary {
    /// One entry per stage, board order
    pub stages: Vec<StageSummary>,
    pub total_value: u64,
    pub weighted_value: f64,
    pub active_count: usize,
    /// Won deals as a percentage of closed deals. `None` when nothing is closed.
    pub win_rate: Option<f64>,
}

impl PipelineSummary {
    pub fn stage(&self, stage: Stage) -> &StageSummary {
        &self.stages[stage.index()]
    }
}

/// Compute every aggregate in one pass over the stages
pub fn pipeline_summary(deals: &[Deal]) -> PipelineSummary {
    let stages: Vec<StageSummary> = Stage::ALL
        .into_iter()
        .map(|stage| {
            let bucket = bucket_by_stage(deals, stage);
            StageSummary {
                stage,
                count: bucket.len(),
                total: sum_values(bucket.iter().copied()),
            }
        })
        .collect();

    let won = stages[Stage::ClosedWon.index()].count;
    let lost = stages[Stage::ClosedLost.index()].count;
    let win_rate = match won + lost {
        0 => None,
        closed => Some(won as f64 * 100.0 / closed as f64),
    };

    PipelineSummary {
        stages,
        total_value: total_pipeline_value(deals),
        weighted_value: weighted_pipeline_value(deals),
        active_count: active_deal_count(deals),
        win_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_deal(id: u32, value: u64, stage: Stage, probability: u32) -> Deal {
        Deal::new(id, format!("Deal {}", id), value, stage, probability)
    }

    fn sample() -> Vec<Deal> {
        vec![
            make_deal(1, 50_000, Stage::Prospecting, 25),
            make_deal(2, 120_000, Stage::ClosedWon, 100),
        ]
    }

    #[test]
    fn test_end_to_end_example() {
        let deals = sample();
        assert_eq!(total_pipeline_value(&deals), 170_000);
        assert_eq!(weighted_pipeline_value(&deals), 132_500.0);
        assert_eq!(active_deal_count(&deals), 1);
    }

    #[test]
    fn test_weighted_empty_and_single() {
        assert_eq!(weighted_pipeline_value(&[]), 0.0);
        assert_eq!(weighted_pipeline_value(&[make_deal(1, 100, Stage::Proposal, 50)]), 50.0);
    }

    #[test]
    fn test_bucket_preserves_order() {
        let deals = vec![
            make_deal(3, 10, Stage::Proposal, 0),
            make_deal(1, 20, Stage::Negotiation, 0),
            make_deal(2, 30, Stage::Proposal, 0),
        ];
        let ids: Vec<u32> = bucket_by_stage(&deals, Stage::Proposal).iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![3, 2]);
        assert_eq!(stage_total(&deals, Stage::Proposal), 40);
    }

    #[test]
    fn test_empty_bucket_is_not_an_error() {
        let deals = sample();
        assert!(bucket_by_stage(&deals, Stage::ClosedLost).is_empty());
        assert_eq!(stage_total(&deals, Stage::ClosedLost), 0);
    }

    #[test]
    fn test_unknown_stage_id_is_dropped() {
        let deals = sample();
        assert!(bucket_by_stage_id(&deals, "closed").is_empty());
        assert!(bucket_by_stage_id(&deals, "").is_empty());
        assert_eq!(bucket_by_stage_id(&deals, "closed-won").len(), 1);
    }

    #[test]
    fn test_summary_partitions_pipeline() {
        let deals = vec![
            make_deal(1, 50_000, Stage::Prospecting, 25),
            make_deal(2, 75_000, Stage::Qualification, 50),
            make_deal(3, 120_000, Stage::Proposal, 75),
            make_deal(4, 35_000, Stage::Negotiation, 90),
            make_deal(5, 90_000, Stage::ClosedWon, 100),
        ];
        let summary = pipeline_summary(&deals);
        assert_eq!(summary.stages.len(), 6);
        assert_eq!(summary.total_value, 370_000);
        assert_eq!(summary.stages.iter().map(|s| s.total).sum::<u64>(), summary.total_value);
        assert_eq!(summary.stage(Stage::Proposal).count, 1);
        assert_eq!(summary.active_count, 4);
        assert_eq!(summary.win_rate, Some(100.0));
        // 12500 + 37500 + 90000 + 31500 + 90000
        assert_eq!(summary.weighted_value, 261_500.0);
    }

    #[test]
    fn test_win_rate() {
        assert_eq!(pipeline_summary(&[]).win_rate, None);
        let deals = vec![
            make_deal(1, 1, Stage::ClosedWon, 100),
            make_deal(2, 1, Stage::ClosedLost, 0),
            make_deal(3, 1, Stage::ClosedLost, 0),
            make_deal(4, 1, Stage::ClosedLost, 0),
        ];
        assert_eq!(pipeline_summary(&deals).win_rate, Some(25.0));
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let deals = vec![
            make_deal(1, u64::MAX, Stage::Proposal, 100),
            make_deal(2, u64::MAX, Stage::Proposal, 100),
            make_deal(3, u64::MAX, Stage::ClosedWon, 100),
        ];
        assert_eq!(stage_total(&deals, Stage::Proposal), u64::MAX);
        assert_eq!(total_pipeline_value(&deals), u64::MAX);
        let summary = pipeline_summary(&deals);
        assert_eq!(summary.stage(Stage::Proposal).total, u64::MAX);
        assert_eq!(summary.total_value, u64::MAX);
        assert!(summary.weighted_value.is_finite());
    }

    #[test]
    fn test_aggregates_are_idempotent() {
        let deals = sample();
        let before = deals.clone();
        assert_eq!(pipeline_summary(&deals), pipeline_summary(&deals));
        assert_eq!(weighted_pipeline_value(&deals), weighted_pipeline_value(&deals));
        assert_eq!(deals, before);
    }
}
