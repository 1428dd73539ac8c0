//! Custom actions for the Equipment record.
//!
//! These cover the service schedule and fault reporting. They are handled by
//! [`Entity::handle_action`](crate::framework::Entity::handle_action).

use chrono::NaiveDate;

/// Custom actions for Equipment records.
#[derive(Debug, Clone)]
pub enum EquipmentAction {
    /// Records a service today.
    ///
    /// # Arguments
    /// * `interval_months` - Months until the next service; `None` uses the configured interval
    PerformMaintenance { interval_months: Option<u32> },
    /// Takes the equipment out of order, replacing its description with the issue.
    ReportIssue(String),
    /// Checks whether the next service is due today.
    CheckMaintenanceDue,
}

/// Results from EquipmentActions - variants match 1:1 with EquipmentAction
#[derive(Debug, Clone, PartialEq)]
pub enum EquipmentActionResult {
    /// The next scheduled service date
    PerformMaintenance(NaiveDate),
    ReportIssue(()),
    CheckMaintenanceDue(bool),
}
