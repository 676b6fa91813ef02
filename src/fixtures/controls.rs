//! Road control fixtures.

use crate::models::{ControlStatus, RoadControl};

use super::pools::{LOCATIONS, PROVINCE_NAMES};
use super::seed::{normalize_id, DeterministicRng};

pub fn road_control(id: &str) -> RoadControl {
    let id = normalize_id(id);
    let mut rng = DeterministicRng::for_entity("control", &id);

    let status = match rng.next_bounded(5) {
        0 => ControlStatus::Planned,
        1 | 2 => ControlStatus::Ongoing,
        _ => ControlStatus::Completed,
    };
    let vehicles_checked = match status {
        ControlStatus::Planned => 0,
        _ => rng.next_bounded(400) as u32,
    };
    // A control never records more infractions than vehicles stopped.
    let infractions_found = if vehicles_checked == 0 {
        0
    } else {
        rng.next_bounded(u64::from(vehicles_checked / 4).max(1)) as u32
    };

    RoadControl {
        id,
        location: rng.pick(LOCATIONS).to_string(),
        province: rng.pick(PROVINCE_NAMES).to_string(),
        agent_count: 2 + rng.next_bounded(10) as u8,
        vehicles_checked,
        infractions_found,
        status,
        // Operations spread over the last year
        started_at: rng.timestamp(1_735_689_600, 31_536_000),
    }
}

pub fn road_controls(count: usize) -> Vec<RoadControl> {
    (1..=count).map(|i| road_control(&i.to_string())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_is_deterministic() {
        assert_eq!(road_control("4"), road_control("4"));
    }

    #[test]
    fn infractions_never_exceed_vehicles_checked() {
        for control in road_controls(40) {
            assert!(control.infractions_found <= control.vehicles_checked.max(1));
            if control.status == ControlStatus::Planned {
                assert_eq!(control.vehicles_checked, 0);
            }
        }
    }
}
