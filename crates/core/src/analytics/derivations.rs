//! Pipeline metrics folded from the deal collection
//!
//! Every function here is a pure fold over a deal slice. Nothing is cached;
//! callers recompute on every render. Functions that depend on the current
//! date take it as an argument.

use std::collections::{BTreeMap, BTreeSet};

use asnalo_domain::{
    ActivityType, ActivityTypeCount, DashboardMetrics, Deal, DealStage, ForecastRow,
    MonthForecast, MonthKey, MonthlyRow, StageFinancials, StageTotal,
};
use chrono::NaiveDate;

/// Sum of `amount` over all deals.
pub fn total_pipeline_value(deals: &[Deal]) -> u64 {
    sum_by(deals.iter(), |deal| deal.amount)
}

/// One row per stage in board order, including empty stages.
///
/// The amounts over all rows add up to [`total_pipeline_value`].
pub fn stage_totals(deals: &[Deal]) -> Vec<StageTotal> {
    DealStage::ALL
        .iter()
        .map(|&stage| {
            let in_stage = deals.iter().filter(|deal| deal.stage == stage);
            StageTotal {
                stage,
                deal_count: in_stage.clone().count(),
                amount: sum_by(in_stage, |deal| deal.amount),
            }
        })
        .collect()
}

/// Stage totals for the dashboard chart, which leaves out lost deals.
pub fn pipeline_chart(deals: &[Deal]) -> Vec<StageTotal> {
    stage_totals(deals).into_iter().filter(|row| row.stage != DealStage::Lost).collect()
}

/// Revenue and gross profit grouped by expected close month, ascending.
pub fn monthly_series(deals: &[Deal]) -> Vec<MonthlyRow> {
    let mut by_month: BTreeMap<MonthKey, (u64, u64)> = BTreeMap::new();
    for deal in deals {
        let entry = by_month.entry(deal.close_month()).or_default();
        entry.0 = entry.0.saturating_add(deal.amount);
        entry.1 = entry.1.saturating_add(deal.gross_profit);
    }

    by_month
        .into_iter()
        .map(|(month, (revenue, gross_profit))| MonthlyRow { month, revenue, gross_profit })
        .collect()
}

/// Deals expected to close in the same calendar month as `today`.
pub fn current_month_forecast(deals: &[Deal], today: NaiveDate) -> MonthForecast {
    let month = MonthKey::from(today);
    let matching: Vec<Deal> = deals.iter().filter(|deal| deal.closes_in(month)).cloned().collect();

    MonthForecast {
        month,
        revenue: sum_by(matching.iter(), |deal| deal.amount),
        gross_profit: sum_by(matching.iter(), |deal| deal.gross_profit),
        deals: matching,
    }
}

/// Activity counts per type across every deal, in fixed type order.
///
/// Types that never occur are omitted.
pub fn activity_histogram(deals: &[Deal]) -> Vec<ActivityTypeCount> {
    let mut counts: BTreeMap<ActivityType, usize> = BTreeMap::new();
    for activity in deals.iter().flat_map(|deal| deal.activities.iter()) {
        *counts.entry(activity.activity_type).or_default() += 1;
    }

    ActivityType::ALL
        .iter()
        .filter_map(|activity_type| {
            counts
                .get(activity_type)
                .map(|&count| ActivityTypeCount { activity_type: *activity_type, count })
        })
        .collect()
}

/// Revenue and gross profit per stage for the report chart.
///
/// Lost deals are excluded; only stages that hold at least one deal appear.
pub fn stage_financials(deals: &[Deal]) -> Vec<StageFinancials> {
    let mut by_stage: BTreeMap<DealStage, (u64, u64)> = BTreeMap::new();
    for deal in deals.iter().filter(|deal| deal.stage != DealStage::Lost) {
        let entry = by_stage.entry(deal.stage).or_default();
        entry.0 = entry.0.saturating_add(deal.amount);
        entry.1 = entry.1.saturating_add(deal.gross_profit);
    }

    by_stage
        .into_iter()
        .map(|(stage, (revenue, gross_profit))| StageFinancials { stage, revenue, gross_profit })
        .collect()
}

/// Won deals as a percentage of all deals, rounded half up. 0 when empty.
pub fn win_rate(deals: &[Deal]) -> u8 {
    let total = deals.len() as u64;
    if total == 0 {
        return 0;
    }
    let won = deals.iter().filter(|deal| deal.stage == DealStage::Won).count() as u64;
    let rounded = (won * 200 + total) / (total * 2);
    u8::try_from(rounded).unwrap_or(100)
}

/// Deals still in an open stage.
pub fn active_deal_count(deals: &[Deal]) -> usize {
    deals.iter().filter(|deal| deal.stage.is_open()).count()
}

/// Distinct clients referenced by at least one deal.
pub fn active_client_count(deals: &[Deal]) -> usize {
    deals.iter().map(|deal| deal.client_id.as_str()).collect::<BTreeSet<_>>().len()
}

/// Probability-weighted value of the open pipeline.
pub fn weighted_pipeline_value(deals: &[Deal]) -> u64 {
    sum_by(deals.iter().filter(|deal| deal.stage.is_open()), |deal| {
        let weighted = u128::from(deal.amount) * u128::from(deal.probability) / 100;
        u64::try_from(weighted).unwrap_or(u64::MAX)
    })
}

/// Report table rows in store order.
pub fn forecast_table(deals: &[Deal]) -> Vec<ForecastRow> {
    deals
        .iter()
        .map(|deal| ForecastRow {
            id: deal.id.clone(),
            title: deal.title.clone(),
            stage: deal.stage,
            probability: deal.probability,
            amount: deal.amount,
            gross_profit: deal.gross_profit,
            expected_close_date: deal.expected_close_date,
        })
        .collect()
}

/// Everything the dashboard renders, computed in one pass over the inputs.
pub fn dashboard_metrics(deals: &[Deal], today: NaiveDate) -> DashboardMetrics {
    DashboardMetrics {
        total_pipeline_value: total_pipeline_value(deals),
        active_deal_count: active_deal_count(deals),
        win_rate: win_rate(deals),
        active_client_count: active_client_count(deals),
        pipeline_chart: pipeline_chart(deals),
        monthly_series: monthly_series(deals),
        current_month: current_month_forecast(deals, today),
    }
}

fn sum_by<'a, I, F>(deals: I, value: F) -> u64
where
    I: Iterator<Item = &'a Deal>,
    F: Fn(&Deal) -> u64,
{
    deals.fold(0u64, |acc, deal| acc.saturating_add(value(deal)))
}

#[cfg(test)]
mod tests {
    use asnalo_domain::Activity;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn deal(id: &str, stage: DealStage, amount: u64, profit: u64, close: NaiveDate) -> Deal {
        Deal {
            id: id.into(),
            title: format!("Deal {id}"),
            amount,
            gross_profit: profit,
            stage,
            client_id: format!("client-{id}"),
            probability: 50,
            expected_close_date: close,
            activities: vec![],
            notes: String::new(),
            next_action: None,
            next_action_date: None,
        }
    }

    fn activity(id: &str, activity_type: ActivityType) -> Activity {
        Activity { id: id.into(), activity_type, date: date(2024, 6, 1), content: String::new() }
    }

    fn sample() -> Vec<Deal> {
        vec![
            deal("d1", DealStage::QuotePresented, 12_500_000, 5_000_000, date(2024, 6, 25)),
            deal("d2", DealStage::Proposal, 4_500_000, 900_000, date(2024, 6, 28)),
            deal("d3", DealStage::Discovery, 8_500_000, 3_500_000, date(2024, 7, 15)),
            deal("d4", DealStage::Won, 2_400_000, 2_000_000, date(2024, 5, 15)),
            deal("d5", DealStage::Lost, 6_000_000, 2_500_000, date(2024, 8, 10)),
        ]
    }

    #[test]
    fn stage_totals_sum_to_pipeline_value() {
        let deals = sample();
        let totals = stage_totals(&deals);
        assert_eq!(totals.len(), DealStage::ALL.len());
        let sum: u64 = totals.iter().map(|row| row.amount).sum();
        assert_eq!(sum, total_pipeline_value(&deals));
        assert_eq!(sum, 33_900_000);
    }

    #[test]
    fn stage_totals_include_empty_stages_in_order() {
        let totals = stage_totals(&sample());
        let stages: Vec<DealStage> = totals.iter().map(|row| row.stage).collect();
        assert_eq!(stages, DealStage::ALL.to_vec());
        assert_eq!(totals[0].deal_count, 0);
        assert_eq!(totals[0].amount, 0);
    }

    #[test]
    fn pipeline_chart_omits_lost() {
        let chart = pipeline_chart(&sample());
        assert_eq!(chart.len(), 5);
        assert!(chart.iter().all(|row| row.stage != DealStage::Lost));
    }

    #[test]
    fn monthly_series_is_sorted_and_grouped() {
        let mut deals = sample();
        deals.reverse();
        let series = monthly_series(&deals);
        let months: Vec<String> = series.iter().map(|row| row.month.to_string()).collect();
        assert_eq!(months, vec!["2024-05", "2024-06", "2024-07", "2024-08"]);
        assert_eq!(series[1].revenue, 17_000_000);
        assert_eq!(series[1].gross_profit, 5_900_000);
    }

    #[test]
    fn current_month_forecast_respects_month_boundary() {
        let deals = vec![
            deal("in", DealStage::Proposal, 100, 10, date(2024, 6, 30)),
            deal("out", DealStage::Proposal, 200, 20, date(2024, 7, 1)),
            deal("last-year", DealStage::Proposal, 400, 40, date(2023, 6, 15)),
        ];
        let forecast = current_month_forecast(&deals, date(2024, 6, 15));
        assert_eq!(forecast.month.to_string(), "2024-06");
        assert_eq!(forecast.deals.len(), 1);
        assert_eq!(forecast.deals[0].id, "in");
        assert_eq!(forecast.revenue, 100);
        assert_eq!(forecast.gross_profit, 10);
    }

    #[test]
    fn activity_histogram_counts_all_deals() {
        let mut deals = sample();
        deals[0].activities =
            vec![activity("a1", ActivityType::Meeting), activity("a2", ActivityType::Email)];
        deals[1].activities = vec![activity("a3", ActivityType::Call)];
        deals[2].activities = vec![activity("a4", ActivityType::Email)];

        let histogram = activity_histogram(&deals);
        assert_eq!(
            histogram,
            vec![
                ActivityTypeCount { activity_type: ActivityType::Call, count: 1 },
                ActivityTypeCount { activity_type: ActivityType::Email, count: 2 },
                ActivityTypeCount { activity_type: ActivityType::Meeting, count: 1 },
            ]
        );
    }

    #[test]
    fn stage_financials_exclude_lost() {
        let rows = stage_financials(&sample());
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|row| row.stage != DealStage::Lost));
        assert_eq!(rows[0].stage, DealStage::Discovery);
        assert_eq!(rows[0].gross_profit, 3_500_000);
    }

    #[test]
    fn win_rate_rounds_and_handles_empty() {
        assert_eq!(win_rate(&[]), 0);
        assert_eq!(win_rate(&sample()), 20);

        let deals = vec![
            deal("a", DealStage::Won, 1, 0, date(2024, 1, 1)),
            deal("b", DealStage::Lost, 1, 0, date(2024, 1, 1)),
            deal("c", DealStage::Proposal, 1, 0, date(2024, 1, 1)),
        ];
        // 33.3% rounds down
        assert_eq!(win_rate(&deals), 33);

        let deals = vec![
            deal("a", DealStage::Won, 1, 0, date(2024, 1, 1)),
            deal("b", DealStage::Won, 1, 0, date(2024, 1, 1)),
            deal("c", DealStage::Proposal, 1, 0, date(2024, 1, 1)),
        ];
        // 66.7% rounds up
        assert_eq!(win_rate(&deals), 67);
    }

    #[test]
    fn empty_collection_yields_zeroes() {
        let metrics = dashboard_metrics(&[], date(2024, 6, 15));
        assert_eq!(metrics.total_pipeline_value, 0);
        assert_eq!(metrics.win_rate, 0);
        assert_eq!(metrics.active_deal_count, 0);
        assert!(metrics.monthly_series.is_empty());
        assert!(metrics.current_month.deals.is_empty());
        assert!(metrics.pipeline_chart.iter().all(|row| row.amount == 0));
        assert!(activity_histogram(&[]).is_empty());
        assert!(stage_financials(&[]).is_empty());
    }

    #[test]
    fn weighted_value_counts_open_deals_only() {
        // Each sample deal has probability 50; won and lost are excluded.
        assert_eq!(weighted_pipeline_value(&sample()), (12_500_000 + 4_500_000 + 8_500_000) / 2);
    }

    #[test]
    fn active_counts() {
        let deals = sample();
        assert_eq!(active_deal_count(&deals), 3);
        assert_eq!(active_client_count(&deals), 5);
    }

    #[test]
    fn forecast_table_keeps_store_order() {
        let rows = forecast_table(&sample());
        let ids: Vec<&str> = rows.iter().map(|row| row.id.as_str()).collect();
        assert_eq!(ids, vec!["d1", "d2", "d3", "d4", "d5"]);
    }
}
