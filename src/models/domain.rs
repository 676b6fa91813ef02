//! Domain records served by the dashboard.
//!
//! These mirror the JSON the agency API exposes (and the fixtures imitate):
//! vehicles, drivers, infractions, road controls, surveillance equipment,
//! licenses, provinces, and the aggregate activity report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique identifier
    pub id: String,

    /// Registration plate
    pub plate: String,

    /// Manufacturer
    pub make: String,

    /// Model name
    pub model: String,

    /// Model year
    pub year: u16,

    pub color: String,

    /// Registered owner's full name
    pub owner: String,

    /// Province of registration
    pub province: String,

    pub status: VehicleStatus,

    /// Registration timestamp
    pub registered_at: DateTime<Utc>,
}

/// Administrative status of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Active,
    Suspended,
    Impounded,
}

/// A licensed driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: String,

    pub full_name: String,

    /// Number of the driver's primary license
    pub license_number: String,

    pub province: String,

    /// Infractions on record
    pub infraction_count: u32,

    pub status: DriverStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverStatus {
    Valid,
    Suspended,
    Revoked,
}

/// A recorded infraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Infraction {
    pub id: String,

    /// Agency infraction code (e.g., "EXC-VIT" for speeding)
    pub code: String,

    pub description: String,

    /// Plate of the vehicle involved
    pub vehicle_plate: String,

    /// Name of the driver cited
    pub driver_name: String,

    pub location: String,

    pub province: String,

    /// Fine amount in the agency's accounting currency
    pub fine_amount: u32,

    pub status: InfractionStatus,

    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InfractionStatus {
    Pending,
    Paid,
    Contested,
}

/// A road control operation (checkpoint).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadControl {
    pub id: String,

    pub location: String,

    pub province: String,

    /// Agents assigned to the control
    pub agent_count: u8,

    /// Vehicles stopped so far
    pub vehicles_checked: u32,

    /// Infractions recorded during this control
    pub infractions_found: u32,

    pub status: ControlStatus,

    pub started_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlStatus {
    Planned,
    Ongoing,
    Completed,
}

/// A piece of surveillance equipment in the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: String,

    pub kind: EquipmentKind,

    /// Manufacturer model designation
    pub model: String,

    pub location: String,

    pub province: String,

    pub status: EquipmentStatus,

    pub installed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentKind {
    SpeedRadar,
    Camera,
    AlcoholTester,
    WeighStation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentStatus {
    Active,
    Maintenance,
    Offline,
}

/// A driving license.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub id: String,

    /// License number as printed
    pub number: String,

    /// Holder's full name
    pub holder: String,

    /// License category ("A" through "E")
    pub category: String,

    pub province: String,

    pub issued_at: DateTime<Utc>,

    pub expires_at: DateTime<Utc>,

    pub status: LicenseStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseStatus {
    Valid,
    Expired,
    Suspended,
}

/// An administrative province.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Province {
    /// Short administrative code
    pub code: String,

    pub name: String,
}

/// Per-province line of an activity report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvinceActivity {
    pub province: String,

    pub infractions: u32,

    pub controls: u32,

    /// Fines collected in the period
    pub revenue: u64,
}

/// Aggregate activity report shown on the reports page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityReport {
    /// Reporting period label (e.g., "2026-08")
    pub period: String,

    pub total_infractions: u32,

    pub total_controls: u32,

    /// Total fines collected
    pub total_revenue: u64,

    /// Breakdown per province, ordered by infraction count descending
    pub by_province: Vec<ProvinceActivity>,

    pub generated_at: DateTime<Utc>,
}
