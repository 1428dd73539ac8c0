//! Account and Entity trait implementations for the Member record.

use crate::framework::{Context, Entity};
use crate::model::{Account, Member, MemberCreate, MemberUpdate, Role, User};

use super::actions::{MemberAction, MemberActionResult};
use super::password::verify_password;

impl Account for Member {
    fn user(&self) -> &User {
        &self.user
    }

    fn authenticate(&self, password: &str) -> bool {
        verify_password(password, self.user.password_hash())
    }

    fn role(&self) -> Role {
        Role::Member
    }
}

impl Entity for Member {
    type Id = u32;
    type CreateParams = MemberCreate;
    type UpdateParams = MemberUpdate;
    type Action = MemberAction;
    type ActionResult = MemberActionResult;

    /// Hashes the password with the configured bcrypt cost.
    fn from_create_params(id: u32, params: MemberCreate, ctx: &Context<'_>) -> Result<Self, String> {
        Member::new(id, params, ctx.config.password_cost).map_err(|e| e.to_string())
    }

    /// Handles updates to the Member record.
    ///
    /// # Fields Updated
    /// - `name`, `email`, `active`: identity
    /// - `membership_type`, `membership_start`, `membership_end`: membership window
    fn on_update(&mut self, update: MemberUpdate, _ctx: &Context<'_>) -> Result<(), String> {
        if let Some(name) = update.name {
            self.user.name = name;
        }
        if let Some(email) = update.email {
            self.user.email = email;
        }
        if let Some(active) = update.active {
            self.user.active = active;
        }
        if let Some(membership_type) = update.membership_type {
            self.membership_type = membership_type;
        }
        if let Some(start) = update.membership_start {
            self.membership_start = start;
        }
        if let Some(end) = update.membership_end {
            self.membership_end = end;
        }
        Ok(())
    }

    fn handle_action(&mut self, action: MemberAction, ctx: &Context<'_>) -> Result<MemberActionResult, String> {
        match action {
            MemberAction::CheckActive => Ok(MemberActionResult::CheckActive(
                self.is_membership_active_on(ctx.today),
            )),
            MemberAction::Renew(months) => {
                self.renew_membership_on(months, ctx.today);
                Ok(MemberActionResult::Renew {
                    start: self.membership_start,
                    end: self.membership_end,
                })
            }
        }
    }
}
