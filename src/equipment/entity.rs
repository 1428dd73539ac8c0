//! Entity trait implementation for the Equipment record.

use crate::framework::{Context, Entity};
use crate::model::{Equipment, EquipmentCreate, EquipmentUpdate};

use super::actions::{EquipmentAction, EquipmentActionResult};

impl Entity for Equipment {
    type Id = u32;
    type CreateParams = EquipmentCreate;
    type UpdateParams = EquipmentUpdate;
    type Action = EquipmentAction;
    type ActionResult = EquipmentActionResult;

    /// New equipment is always first due one month out; the configured interval
    /// only applies to later services.
    fn from_create_params(id: u32, params: EquipmentCreate, ctx: &Context<'_>) -> Result<Self, String> {
        Ok(Equipment::new_on(id, params, ctx.today))
    }

    /// Handles updates to the Equipment record. Any status may be set directly.
    fn on_update(&mut self, update: EquipmentUpdate, _ctx: &Context<'_>) -> Result<(), String> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(last) = update.last_maintenance {
            self.last_maintenance = last;
        }
        if let Some(next) = update.next_maintenance {
            self.next_maintenance = next;
        }
        Ok(())
    }

    fn handle_action(
        &mut self,
        action: EquipmentAction,
        ctx: &Context<'_>,
    ) -> Result<EquipmentActionResult, String> {
        match action {
            EquipmentAction::PerformMaintenance { interval_months } => {
                let months = interval_months.unwrap_or(ctx.config.maintenance_interval_months);
                self.perform_maintenance_on(months, ctx.today);
                Ok(EquipmentActionResult::PerformMaintenance(self.next_maintenance))
            }
            EquipmentAction::ReportIssue(issue) => {
                self.report_issue(issue);
                Ok(EquipmentActionResult::ReportIssue(()))
            }
            EquipmentAction::CheckMaintenanceDue => Ok(EquipmentActionResult::CheckMaintenanceDue(
                self.is_maintenance_due_on(ctx.today),
            )),
        }
    }
}
