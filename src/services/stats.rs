//! Dashboard aggregates computed over whole collections.

use std::collections::HashMap;

use crate::entities::{ideas, investors};
use crate::models::idea::IdeaStatus;
use crate::models::summary::{FundingTotals, SectorCount, StatusCount};
use crate::validation::Choice;

pub const TOP_SECTORS: usize = 5;

/// Sums and averages; statuses are not filtered.
pub fn funding_totals(ideas: &[ideas::Model], investors: &[investors::Model]) -> FundingTotals {
    let funding_requested: f64 = ideas.iter().map(|i| i.funding_needed).sum();
    let investment_capacity: f64 = investors.iter().map(|i| i.investment_capacity).sum();

    FundingTotals {
        funding_requested,
        investment_capacity,
        average_funding_requested: average(funding_requested, ideas.len()),
        average_investment_capacity: average(investment_capacity, investors.len()),
    }
}

fn average(total: f64, count: usize) -> f64 {
    if count == 0 { 0.0 } else { total / count as f64 }
}

/// Count per known status, zero-filled, in lifecycle order.
pub fn ideas_by_status(ideas: &[ideas::Model]) -> Vec<StatusCount> {
    IdeaStatus::ALL
        .iter()
        .map(|status| StatusCount {
            status: status.as_str().to_string(),
            count: ideas.iter().filter(|i| i.status == status.as_str()).count() as u64,
        })
        .collect()
}

/// Most frequent values, grouped case-insensitively. The label shown is the
/// first spelling seen; ties are ordered by the grouped key.
pub fn top_sectors<'a>(values: impl IntoIterator<Item = &'a str>, limit: usize) -> Vec<SectorCount> {
    let mut groups: HashMap<String, (String, u64)> = HashMap::new();

    for value in values {
        let label = value.trim();
        if label.is_empty() {
            continue;
        }
        groups
            .entry(label.to_lowercase())
            .or_insert_with(|| (label.to_string(), 0))
            .1 += 1;
    }

    let mut ranked: Vec<(String, (String, u64))> = groups.into_iter().collect();
    ranked.sort_by(|(a_key, (_, a_count)), (b_key, (_, b_count))| {
        b_count.cmp(a_count).then_with(|| a_key.cmp(b_key))
    });

    ranked
        .into_iter()
        .take(limit)
        .map(|(_, (sector, count))| SectorCount { sector, count })
        .collect()
}
