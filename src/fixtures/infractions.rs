//! Infraction fixtures.

use crate::models::{Infraction, InfractionStatus};

use super::pools::{INFRACTIONS, LOCATIONS, PROVINCE_NAMES};
use super::seed::{normalize_id, DeterministicRng};
use super::{driver, vehicle};

pub fn infraction(id: &str) -> Infraction {
    let id = normalize_id(id);
    let mut rng = DeterministicRng::for_entity("infraction", &id);

    let (code, description, fine_amount) =
        INFRACTIONS[rng.next_bounded(INFRACTIONS.len() as u64) as usize];
    let status = match rng.next_bounded(4) {
        0 => InfractionStatus::Paid,
        1 => InfractionStatus::Contested,
        _ => InfractionStatus::Pending,
    };

    // Tie the citation to fixture entities so detail pages cross-reference.
    let cited_vehicle = vehicle(&rng.next_bounded(50).wrapping_add(1).to_string());
    let cited_driver = driver(&rng.next_bounded(50).wrapping_add(1).to_string());

    Infraction {
        id,
        code: code.to_string(),
        description: description.to_string(),
        vehicle_plate: cited_vehicle.plate,
        driver_name: cited_driver.full_name,
        location: rng.pick(LOCATIONS).to_string(),
        province: rng.pick(PROVINCE_NAMES).to_string(),
        fine_amount,
        status,
        // Citations spread over the last two years
        recorded_at: rng.timestamp(1_704_067_200, 63_072_000),
    }
}

pub fn infractions(count: usize) -> Vec<Infraction> {
    (1..=count).map(|i| infraction(&i.to_string())).collect()
}
