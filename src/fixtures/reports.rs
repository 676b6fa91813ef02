//! Activity report fixtures.
//!
//! The report aggregates per-province activity the way the reports page
//! renders it. Inputs are the other fixture generators, so the report is as
//! deterministic as they are.

use std::collections::BTreeMap;

use crate::models::{ActivityReport, ProvinceActivity};

use super::seed::DeterministicRng;
use super::{infractions, road_controls};

/// Number of fixture records the report aggregates over.
const SAMPLE_SIZE: usize = 60;

/// Generate the activity report for a period label (e.g., "2026-08").
pub fn activity_report(period: &str) -> ActivityReport {
    let period = normalize_period(period);
    let mut rng = DeterministicRng::for_entity("report", &period);

    // BTreeMap keeps province ordering stable before the final sort.
    let mut per_province: BTreeMap<String, ProvinceActivity> = BTreeMap::new();

    for infraction in infractions(SAMPLE_SIZE) {
        let entry = per_province
            .entry(infraction.province.clone())
            .or_insert_with(|| ProvinceActivity {
                province: infraction.province.clone(),
                infractions: 0,
                controls: 0,
                revenue: 0,
            });
        entry.infractions += 1;
        entry.revenue += u64::from(infraction.fine_amount);
    }

    for control in road_controls(SAMPLE_SIZE / 2) {
        let entry = per_province
            .entry(control.province.clone())
            .or_insert_with(|| ProvinceActivity {
                province: control.province.clone(),
                infractions: 0,
                controls: 0,
                revenue: 0,
            });
        entry.controls += 1;
    }

    let mut by_province: Vec<ProvinceActivity> = per_province.into_values().collect();
    by_province.sort_by(|a, b| {
        b.infractions
            .cmp(&a.infractions)
            .then_with(|| a.province.cmp(&b.province))
    });

    let total_infractions = by_province.iter().map(|p| p.infractions).sum();
    let total_controls = by_province.iter().map(|p| p.controls).sum();
    let total_revenue = by_province.iter().map(|p| p.revenue).sum();

    ActivityReport {
        period,
        total_infractions,
        total_controls,
        total_revenue,
        by_province,
        // Fixed within the period so the record stays reproducible
        generated_at: rng.timestamp(1_735_689_600, 31_536_000),
    }
}

/// Periods are "YYYY-MM"; anything else falls back to a fixed default, in
/// the same lenient spirit as entity ids.
fn normalize_period(period: &str) -> String {
    let trimmed = period.trim();
    let bytes = trimmed.as_bytes();
    let valid = bytes.len() == 7
        && bytes[4] == b'-'
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[5..].iter().all(u8::is_ascii_digit);
    if valid {
        trimmed.to_string()
    } else {
        "2026-01".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_is_deterministic_per_period() {
        assert_eq!(activity_report("2026-08"), activity_report("2026-08"));
    }

    #[test]
    fn totals_match_breakdown() {
        let report = activity_report("2026-08");
        let sum: u32 = report.by_province.iter().map(|p| p.infractions).sum();
        assert_eq!(sum, report.total_infractions);
        assert_eq!(report.total_infractions as usize, SAMPLE_SIZE);
    }

    #[test]
    fn breakdown_is_sorted_by_infractions_desc() {
        let report = activity_report("2026-08");
        for pair in report.by_province.windows(2) {
            assert!(pair[0].infractions >= pair[1].infractions);
        }
    }

    #[test]
    fn malformed_period_uses_default() {
        assert_eq!(activity_report("n'importe quoi").period, "2026-01");
        assert_eq!(activity_report("2026-8").period, "2026-01");
    }
}
