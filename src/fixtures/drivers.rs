//! Driver fixtures.

use crate::models::{Driver, DriverStatus};

use super::pools::{FIRST_NAMES, LAST_NAMES, PROVINCE_NAMES};
use super::seed::{normalize_id, DeterministicRng};

pub fn driver(id: &str) -> Driver {
    let id = normalize_id(id);
    let mut rng = DeterministicRng::for_entity("driver", &id);

    let full_name = format!("{} {}", rng.pick(FIRST_NAMES), rng.pick(LAST_NAMES));
    let license_number = format!(
        "CD-{:06}-{}",
        rng.next_bounded(1_000_000),
        (b'A' + rng.next_bounded(26) as u8) as char
    );
    let infraction_count = rng.next_bounded(12) as u32;
    let status = match rng.next_bounded(12) {
        0 => DriverStatus::Revoked,
        1 | 2 => DriverStatus::Suspended,
        _ => DriverStatus::Valid,
    };

    Driver {
        id,
        full_name,
        license_number,
        province: rng.pick(PROVINCE_NAMES).to_string(),
        infraction_count,
        status,
    }
}

pub fn drivers(count: usize) -> Vec<Driver> {
    (1..=count).map(|i| driver(&i.to_string())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_is_deterministic() {
        assert_eq!(driver("3"), driver("3"));
    }

    #[test]
    fn blank_id_uses_default() {
        assert_eq!(driver("  ").id, "1");
    }
}
