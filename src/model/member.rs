use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::framework::{add_months, Clock, SystemClock};
use crate::membership::{hash_password, MembershipError};
use crate::model::User;

/// A gym member: a [`User`] plus the membership window.
///
/// # Record Framework
/// This struct implements the [`Entity`](crate::framework::Entity) trait,
/// allowing it to be managed by a [`ResourceStore`](crate::framework::ResourceStore).
///
/// See [`impl Entity for Member`](#impl-Entity-for-Member) for details on:
/// - Creation parameters ([`MemberCreate`])
/// - Update parameters ([`MemberUpdate`])
/// - Custom actions ([`MemberAction`](crate::membership::MemberAction))
#[derive(Debug, Clone)]
pub struct Member {
    pub user: User,
    pub membership_type: String,
    pub membership_start: NaiveDate,
    pub membership_end: NaiveDate,
}

/// Payload for registering a new member.
#[derive(Clone, Serialize, Deserialize)]
pub struct MemberCreate {
    pub name: String,
    pub email: String,
    /// Accepted on input, never written back out.
    #[serde(skip_serializing)]
    pub password: String,
    pub membership_type: String,
    pub membership_start: NaiveDate,
    pub membership_end: NaiveDate,
}

impl fmt::Debug for MemberCreate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberCreate")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("membership_type", &self.membership_type)
            .field("membership_start", &self.membership_start)
            .field("membership_end", &self.membership_end)
            .finish()
    }
}

/// Payload for updating an existing member.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub active: Option<bool>,
    pub membership_type: Option<String>,
    pub membership_start: Option<NaiveDate>,
    pub membership_end: Option<NaiveDate>,
}

impl Member {
    /// Creates a new Member, hashing the plaintext password with bcrypt.
    ///
    /// # Arguments
    /// * `id` - Unique identifier
    /// * `params` - Identity and membership window
    /// * `password_cost` - bcrypt work factor
    ///
    /// # Notes
    /// The end date is trusted to be on or after the start date.
    pub fn new(id: u32, params: MemberCreate, password_cost: u32) -> Result<Self, MembershipError> {
        let password_hash = hash_password(&params.password, password_cost)?;
        Ok(Self {
            user: User::new(id, params.name, params.email, password_hash),
            membership_type: params.membership_type,
            membership_start: params.membership_start,
            membership_end: params.membership_end,
        })
    }

    /// Replaces the stored hash with one derived from `password`.
    pub fn set_password(&mut self, password: &str, password_cost: u32) -> Result<(), MembershipError> {
        let password_hash = hash_password(password, password_cost)?;
        self.user.set_password_hash(password_hash);
        Ok(())
    }

    /// True iff the account is active and `today` is strictly before the end date.
    pub fn is_membership_active_on(&self, today: NaiveDate) -> bool {
        self.user.active && today < self.membership_end
    }

    pub fn is_membership_active(&self) -> bool {
        self.is_membership_active_on(SystemClock.today())
    }

    /// Extends the membership by `months`.
    ///
    /// A lapsed membership restarts today; a current one continues from its end date.
    pub fn renew_membership_on(&mut self, months: u32, today: NaiveDate) {
        self.membership_start = if self.membership_end < today {
            today
        } else {
            self.membership_end
        };
        self.membership_end = add_months(self.membership_start, months);
    }

    pub fn renew_membership(&mut self, months: u32) {
        self.renew_membership_on(months, SystemClock.today());
    }
}

impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        self.user == other.user
    }
}

impl Eq for Member {}

impl Hash for Member {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.user.hash(state);
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Member #{} {} <{}> [{}] {} to {} ({})",
            self.user.id,
            self.user.name,
            self.user.email,
            self.membership_type,
            self.membership_start,
            self.membership_end,
            if self.user.active { "active" } else { "inactive" }
        )
    }
}
