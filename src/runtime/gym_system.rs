use chrono::NaiveDate;
use tracing::{debug, info, instrument, warn};

use crate::config::Config;
use crate::equipment::{EquipmentAction, EquipmentActionResult};
use crate::framework::{Clock, Context, FrameworkError, ResourceStore, SystemClock};
use crate::membership::{MemberAction, MemberActionResult};
use crate::model::{Account, Equipment, EquipmentCreate, Member, MemberCreate, Payment, PaymentCreate};
use crate::payment::{PaymentAction, PaymentActionResult};

/// The orchestrator for the gym's record stores.
///
/// `GymSystem` is responsible for:
/// - **Ownership**: One [`ResourceStore`] per record type (members, equipment, payments)
/// - **Context**: Resolving today's date from its [`Clock`] and handing the [`Config`] to every hook
/// - **Typed entry points**: Wrapping the generic actions in domain-specific methods
///
/// # Example
///
/// ```ignore
/// let mut system = GymSystem::new(Config::from_args(GymArgs::parse())?);
/// let member_id = system.register_member(params)?;
/// system.renew_membership(member_id, 12)?;
/// let payment_id = system.record_payment(payment)?;
/// system.process_payment(payment_id, "TXN1")?;
/// ```
pub struct GymSystem {
    pub members: ResourceStore<Member>,
    pub equipment: ResourceStore<Equipment>,
    pub payments: ResourceStore<Payment>,
    clock: Box<dyn Clock>,
    config: Config,
}

impl GymSystem {
    /// Creates an empty system reading dates from the host calendar.
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, SystemClock)
    }

    pub fn with_clock(config: Config, clock: impl Clock + 'static) -> Self {
        info!(?config, "Starting gym system");
        Self {
            members: crate::membership::new_store(),
            equipment: crate::equipment::new_store(),
            payments: crate::payment::new_store(),
            clock: Box::new(clock),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    // =====================================================================
    // Members
    // =====================================================================

    #[instrument(skip(self, params))]
    pub fn register_member(&mut self, params: MemberCreate) -> Result<u32, FrameworkError> {
        let ctx = Context::new(self.clock.today(), &self.config);
        self.members.create(params, &ctx)
    }

    /// Unknown members never authenticate.
    #[instrument(skip(self, password))]
    pub fn authenticate(&self, member_id: u32, password: &str) -> bool {
        let authenticated = self
            .members
            .get(member_id)
            .is_some_and(|member| member.authenticate(password));
        if !authenticated {
            warn!(member_id, "Authentication failed");
        }
        authenticated
    }

    #[instrument(skip(self))]
    pub fn is_membership_active(&mut self, member_id: u32) -> Result<bool, FrameworkError> {
        let ctx = Context::new(self.clock.today(), &self.config);
        match self.members.perform_action(member_id, MemberAction::CheckActive, &ctx)? {
            MemberActionResult::CheckActive(active) => Ok(active),
            other => Err(mismatch("CheckActive", &other)),
        }
    }

    /// Returns the new (start, end) window.
    #[instrument(skip(self))]
    pub fn renew_membership(
        &mut self,
        member_id: u32,
        months: u32,
    ) -> Result<(NaiveDate, NaiveDate), FrameworkError> {
        let ctx = Context::new(self.clock.today(), &self.config);
        match self.members.perform_action(member_id, MemberAction::Renew(months), &ctx)? {
            MemberActionResult::Renew { start, end } => Ok((start, end)),
            other => Err(mismatch("Renew", &other)),
        }
    }

    // =====================================================================
    // Equipment
    // =====================================================================

    #[instrument(skip(self))]
    pub fn add_equipment(&mut self, params: EquipmentCreate) -> Result<u32, FrameworkError> {
        let ctx = Context::new(self.clock.today(), &self.config);
        self.equipment.create(params, &ctx)
    }

    /// Returns the next service date. `None` uses the configured interval.
    #[instrument(skip(self))]
    pub fn perform_maintenance(
        &mut self,
        equipment_id: u32,
        interval_months: Option<u32>,
    ) -> Result<NaiveDate, FrameworkError> {
        let ctx = Context::new(self.clock.today(), &self.config);
        let action = EquipmentAction::PerformMaintenance { interval_months };
        match self.equipment.perform_action(equipment_id, action, &ctx)? {
            EquipmentActionResult::PerformMaintenance(next) => Ok(next),
            other => Err(mismatch("PerformMaintenance", &other)),
        }
    }

    #[instrument(skip(self, issue))]
    pub fn report_issue(&mut self, equipment_id: u32, issue: impl Into<String>) -> Result<(), FrameworkError> {
        let ctx = Context::new(self.clock.today(), &self.config);
        let action = EquipmentAction::ReportIssue(issue.into());
        match self.equipment.perform_action(equipment_id, action, &ctx)? {
            EquipmentActionResult::ReportIssue(()) => Ok(()),
            other => Err(mismatch("ReportIssue", &other)),
        }
    }

    /// Ids of all equipment whose service is due today, ascending.
    pub fn equipment_due_for_maintenance(&self) -> Vec<u32> {
        let today = self.clock.today();
        let mut due: Vec<u32> = self
            .equipment
            .iter()
            .filter(|item| item.is_maintenance_due_on(today))
            .map(|item| item.id)
            .collect();
        due.sort_unstable();
        debug!(%today, count = due.len(), "Maintenance due");
        due
    }

    // =====================================================================
    // Payments
    // =====================================================================

    /// Records a pending payment. The member id is not checked against the member store.
    #[instrument(skip(self))]
    pub fn record_payment(&mut self, params: PaymentCreate) -> Result<u32, FrameworkError> {
        let ctx = Context::new(self.clock.today(), &self.config);
        self.payments.create(params, &ctx)
    }

    #[instrument(skip(self))]
    pub fn process_payment(&mut self, payment_id: u32, transaction_id: &str) -> Result<bool, FrameworkError> {
        let ctx = Context::new(self.clock.today(), &self.config);
        let action = PaymentAction::Process {
            transaction_id: transaction_id.to_string(),
        };
        match self.payments.perform_action(payment_id, action, &ctx)? {
            PaymentActionResult::Process(done) => Ok(done),
            other => Err(mismatch("Process", &other)),
        }
    }

    /// `Ok(false)` when the payment exists but is not completed.
    #[instrument(skip(self))]
    pub fn refund_payment(&mut self, payment_id: u32, reason: &str) -> Result<bool, FrameworkError> {
        let ctx = Context::new(self.clock.today(), &self.config);
        let action = PaymentAction::Refund {
            reason: reason.to_string(),
        };
        match self.payments.perform_action(payment_id, action, &ctx)? {
            PaymentActionResult::Refund(refunded) => {
                if !refunded {
                    warn!(payment_id, "Refund refused: payment not completed");
                }
                Ok(refunded)
            }
            other => Err(mismatch("Refund", &other)),
        }
    }

    #[instrument(skip(self))]
    pub fn fail_payment(&mut self, payment_id: u32) -> Result<bool, FrameworkError> {
        let ctx = Context::new(self.clock.today(), &self.config);
        match self.payments.perform_action(payment_id, PaymentAction::Fail, &ctx)? {
            PaymentActionResult::Fail(failed) => Ok(failed),
            other => Err(mismatch("Fail", &other)),
        }
    }

    #[instrument(skip(self))]
    pub fn receipt(&mut self, payment_id: u32) -> Result<String, FrameworkError> {
        let ctx = Context::new(self.clock.today(), &self.config);
        match self.payments.perform_action(payment_id, PaymentAction::Receipt, &ctx)? {
            PaymentActionResult::Receipt(text) => Ok(text),
            other => Err(mismatch("Receipt", &other)),
        }
    }
}

fn mismatch(action: &str, result: &impl std::fmt::Debug) -> FrameworkError {
    FrameworkError::Custom(format!("{action} action returned {result:?}"))
}
