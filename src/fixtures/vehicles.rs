//! Vehicle fixtures.

use crate::models::{Vehicle, VehicleStatus};

use super::pools::{COLORS, FIRST_NAMES, LAST_NAMES, MAKES_AND_MODELS, PROVINCE_NAMES};
use super::seed::{normalize_id, DeterministicRng};

/// Generate the vehicle with the given id. Deterministic: the same id
/// always yields the same record.
pub fn vehicle(id: &str) -> Vehicle {
    let id = normalize_id(id);
    let mut rng = DeterministicRng::for_entity("vehicle", &id);

    let (make, model) = MAKES_AND_MODELS[rng.next_bounded(MAKES_AND_MODELS.len() as u64) as usize];
    let plate = format!(
        "{:04} A{}{:02}",
        rng.next_bounded(10_000),
        (b'A' + rng.next_bounded(26) as u8) as char,
        rng.next_bounded(100)
    );
    let owner = format!("{} {}", rng.pick(FIRST_NAMES), rng.pick(LAST_NAMES));
    let status = match rng.next_bounded(10) {
        0 => VehicleStatus::Impounded,
        1 | 2 => VehicleStatus::Suspended,
        _ => VehicleStatus::Active,
    };

    Vehicle {
        id,
        plate,
        make: make.to_string(),
        model: model.to_string(),
        year: 2005 + rng.next_bounded(21) as u16,
        color: rng.pick(COLORS).to_string(),
        owner,
        province: rng.pick(PROVINCE_NAMES).to_string(),
        status,
        // Registrations spread over 2018-2026
        registered_at: rng.timestamp(1_514_764_800, 252_460_800),
    }
}

/// Generate `count` vehicles with ids "1" through `count`.
pub fn vehicles(count: usize) -> Vec<Vehicle> {
    (1..=count).map(|i| vehicle(&i.to_string())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_is_deterministic_for_a_fixed_id() {
        assert_eq!(vehicle("17"), vehicle("17"));
        assert_eq!(vehicle(" 17 "), vehicle("17"));
    }

    #[test]
    fn different_ids_differ() {
        assert_ne!(vehicle("1"), vehicle("2"));
    }

    #[test]
    fn invalid_id_substitutes_the_default() {
        assert_eq!(vehicle("").id, "1");
        assert_eq!(vehicle("not an id!").id, "1");
        assert_eq!(vehicle(""), vehicle("1"));
    }

    #[test]
    fn batch_ids_are_sequential() {
        let batch = vehicles(5);
        assert_eq!(batch.len(), 5);
        assert_eq!(batch[0].id, "1");
        assert_eq!(batch[4].id, "5");
        assert_eq!(batch[2], vehicle("3"));
    }
}
