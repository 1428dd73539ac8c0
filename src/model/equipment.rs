use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::framework::{add_months, Clock, SystemClock};

/// Months between services for newly created equipment.
pub const DEFAULT_MAINTENANCE_INTERVAL_MONTHS: u32 = 1;

/// Operational state of a piece of equipment.
///
/// Any state may be assigned directly; only [`Equipment::perform_maintenance_on`]
/// and [`Equipment::report_issue`] move it as a side effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentStatus {
    Available,
    #[serde(rename = "In Use")]
    InUse,
    #[serde(rename = "Under Maintenance")]
    UnderMaintenance,
    #[serde(rename = "Out of Order")]
    OutOfOrder,
}

impl EquipmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentStatus::Available => "Available",
            EquipmentStatus::InUse => "In Use",
            EquipmentStatus::UnderMaintenance => "Under Maintenance",
            EquipmentStatus::OutOfOrder => "Out of Order",
        }
    }
}

impl fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A piece of gym equipment and its service schedule.
///
/// # Record Framework
/// Managed by a [`ResourceStore`](crate::framework::ResourceStore); see
/// [`EquipmentAction`](crate::equipment::EquipmentAction) for the custom actions.
#[derive(Debug, Clone)]
pub struct Equipment {
    pub id: u32,
    pub name: String,
    pub status: EquipmentStatus,
    pub location: String,
    pub description: String,
    pub last_maintenance: NaiveDate,
    pub next_maintenance: NaiveDate,
}

/// Payload for adding equipment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentCreate {
    pub name: String,
    pub status: EquipmentStatus,
    pub location: String,
    pub description: String,
}

/// Payload for updating equipment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquipmentUpdate {
    pub name: Option<String>,
    pub status: Option<EquipmentStatus>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub last_maintenance: Option<NaiveDate>,
    pub next_maintenance: Option<NaiveDate>,
}

impl Equipment {
    /// Creates equipment serviced `today`, next due one month later.
    pub fn new_on(id: u32, params: EquipmentCreate, today: NaiveDate) -> Self {
        Self {
            id,
            name: params.name,
            status: params.status,
            location: params.location,
            description: params.description,
            last_maintenance: today,
            next_maintenance: add_months(today, DEFAULT_MAINTENANCE_INTERVAL_MONTHS),
        }
    }

    pub fn new(id: u32, params: EquipmentCreate) -> Self {
        Self::new_on(id, params, SystemClock.today())
    }

    /// Records a service on `today` and makes the equipment available again,
    /// clearing any reported fault.
    pub fn perform_maintenance_on(&mut self, interval_months: u32, today: NaiveDate) {
        self.last_maintenance = today;
        self.next_maintenance = add_months(today, interval_months);
        self.status = EquipmentStatus::Available;
    }

    pub fn perform_maintenance(&mut self, interval_months: u32) {
        self.perform_maintenance_on(interval_months, SystemClock.today());
    }

    /// Due on the scheduled date itself and every day after.
    pub fn is_maintenance_due_on(&self, today: NaiveDate) -> bool {
        today >= self.next_maintenance
    }

    pub fn is_maintenance_due(&self) -> bool {
        self.is_maintenance_due_on(SystemClock.today())
    }

    /// Marks the equipment out of order. The issue text replaces the description.
    pub fn report_issue(&mut self, issue: impl Into<String>) {
        self.status = EquipmentStatus::OutOfOrder;
        self.description = issue.into();
    }
}

impl PartialEq for Equipment {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Equipment {}

impl Hash for Equipment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Equipment #{} {} [{}] at {}, serviced {}, next due {}",
            self.id,
            self.name,
            self.status,
            self.location,
            self.last_maintenance,
            self.next_maintenance
        )
    }
}
