//! Driving license fixtures.

use crate::models::{License, LicenseStatus};

use super::pools::{FIRST_NAMES, LAST_NAMES, LICENSE_CATEGORIES, PROVINCE_NAMES};
use super::seed::{normalize_id, DeterministicRng};

pub fn license(id: &str) -> License {
    let id = normalize_id(id);
    let mut rng = DeterministicRng::for_entity("license", &id);

    let number = format!(
        "CD-{:06}-{:02}",
        rng.next_bounded(1_000_000),
        rng.next_bounded(100)
    );
    let holder = format!("{} {}", rng.pick(FIRST_NAMES), rng.pick(LAST_NAMES));

    // Status is drawn first and the issue window chosen to match, so the
    // record never depends on the wall clock.
    let status = match rng.next_bounded(15) {
        0 => LicenseStatus::Suspended,
        1 | 2 => LicenseStatus::Expired,
        _ => LicenseStatus::Valid,
    };
    let issued_at = match status {
        // Expired: issued 2016-2019, five-year term long over
        LicenseStatus::Expired => rng.timestamp(1_451_606_400, 126_230_400),
        // Otherwise issued 2023-2025
        _ => rng.timestamp(1_672_531_200, 94_608_000),
    };
    let expires_at = issued_at + chrono::Duration::days(5 * 365);

    License {
        id,
        number,
        holder,
        category: rng.pick(LICENSE_CATEGORIES).to_string(),
        province: rng.pick(PROVINCE_NAMES).to_string(),
        issued_at,
        expires_at,
        status,
    }
}

pub fn licenses(count: usize) -> Vec<License> {
    (1..=count).map(|i| license(&i.to_string())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn license_number_format_is_stable() {
        let record = license("11");
        assert_eq!(record, license("11"));
        assert!(record.number.starts_with("CD-"));
    }

    #[test]
    fn expiry_follows_issue_date() {
        for record in licenses(20) {
            assert!(record.expires_at > record.issued_at);
        }
    }
}
