//! Surveillance equipment fixtures.

use crate::models::{Equipment, EquipmentKind, EquipmentStatus};

use super::pools::{EQUIPMENT_MODELS, LOCATIONS, PROVINCE_NAMES};
use super::seed::{normalize_id, DeterministicRng};

pub fn equipment(id: &str) -> Equipment {
    let id = normalize_id(id);
    let mut rng = DeterministicRng::for_entity("equipment", &id);

    let kind = match rng.next_bounded(4) {
        0 => EquipmentKind::Camera,
        1 => EquipmentKind::AlcoholTester,
        2 => EquipmentKind::WeighStation,
        _ => EquipmentKind::SpeedRadar,
    };
    let status = match rng.next_bounded(8) {
        0 => EquipmentStatus::Offline,
        1 | 2 => EquipmentStatus::Maintenance,
        _ => EquipmentStatus::Active,
    };

    Equipment {
        id,
        kind,
        model: rng.pick(EQUIPMENT_MODELS).to_string(),
        location: rng.pick(LOCATIONS).to_string(),
        province: rng.pick(PROVINCE_NAMES).to_string(),
        status,
        // Installations spread over 2020-2026
        installed_at: rng.timestamp(1_577_836_800, 189_216_000),
    }
}

pub fn equipment_batch(count: usize) -> Vec<Equipment> {
    (1..=count).map(|i| equipment(&i.to_string())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equipment_is_deterministic() {
        assert_eq!(equipment("2"), equipment("2"));
    }
}
