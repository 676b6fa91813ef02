//! Deterministic fixture generators for every dashboard entity.
//!
//! Each generator is a total function: same id in, same record out, never a
//! failure. Blank or malformed ids substitute a documented default rather
//! than erroring, which keeps detail pages rendering even on a garbled URL.

mod controls;
mod drivers;
mod equipment;
mod infractions;
mod licenses;
mod pools;
mod reports;
mod seed;
mod vehicles;

pub use controls::{road_control, road_controls};
pub use drivers::{driver, drivers};
pub use equipment::{equipment, equipment_batch};
pub use infractions::{infraction, infractions};
pub use licenses::{license, licenses};
pub use reports::activity_report;
pub use seed::{normalize_id, normalize_id_or, stable_u64_hash, DeterministicRng, DEFAULT_ID};
pub use vehicles::{vehicle, vehicles};

use crate::models::Province;

/// The static province list shown in filters and forms.
pub fn provinces() -> Vec<Province> {
    pools::PROVINCES
        .iter()
        .map(|(code, name)| Province {
            code: (*code).to_string(),
            name: (*name).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn province_list_is_stable() {
        let a = provinces();
        let b = provinces();
        assert_eq!(a, b);
        assert!(a.len() >= 8);
        assert!(a.iter().any(|p| p.name == "Kinshasa"));
    }
}
