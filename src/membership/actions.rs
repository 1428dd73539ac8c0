//! Custom actions for the Member record.
//!
//! Handled by [`Entity::handle_action`](crate::framework::Entity::handle_action);
//! see [`impl Entity for Member`](crate::model::Member#impl-Entity-for-Member).

use chrono::NaiveDate;

/// Custom actions for Member records.
#[derive(Debug, Clone)]
pub enum MemberAction {
    /// Reports whether the membership is active today.
    CheckActive,
    /// Extends the membership by the given number of months.
    Renew(u32),
}

/// Results from MemberActions - variants match 1:1 with MemberAction
#[derive(Debug, Clone, PartialEq)]
pub enum MemberActionResult {
    CheckActive(bool),
    /// The new membership window
    Renew { start: NaiveDate, end: NaiveDate },
}
