//! Test data builders
//!
//! Builders with sensible defaults so tests set only the fields under
//! test. Claims are built through the persistence record, which is the
//! only way to place one directly into an arbitrary status.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use core_kernel::{ClaimId, UserId};
use domain_claims::{derive_amount, Claim, ClaimRecord, ClaimStatus};
use domain_identity::{Role, User};

use crate::fixtures::AmountFixtures;

/// Builder for claims in any lifecycle state
pub struct ClaimBuilder {
    id: ClaimId,
    lecturer_email: String,
    lecturer_name: String,
    hours_worked: Decimal,
    hourly_rate: Decimal,
    status: ClaimStatus,
    submitted_at: DateTime<Utc>,
    description: String,
    document_count: usize,
    reviewed_by: Option<String>,
    rejection_reason: Option<String>,
}

impl Default for ClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimBuilder {
    pub fn new() -> Self {
        Self {
            id: ClaimId::new(1001),
            lecturer_email: "lecturer@university.ac.za".to_string(),
            lecturer_name: "Dr. John Lecturer".to_string(),
            hours_worked: AmountFixtures::standard_hours(),
            hourly_rate: AmountFixtures::standard_rate(),
            status: ClaimStatus::Submitted,
            submitted_at: Utc::now(),
            description: "Teaching hours".to_string(),
            document_count: 0,
            reviewed_by: None,
            rejection_reason: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = ClaimId::new(id);
        self
    }

    pub fn with_lecturer(mut self, email: impl Into<String>, name: impl Into<String>) -> Self {
        self.lecturer_email = email.into();
        self.lecturer_name = name.into();
        self
    }

    pub fn with_hours(mut self, hours: Decimal, rate: Decimal) -> Self {
        self.hours_worked = hours;
        self.hourly_rate = rate;
        self
    }

    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_document_count(mut self, count: usize) -> Self {
        self.document_count = count;
        self
    }

    pub fn reviewed_by(mut self, email: impl Into<String>) -> Self {
        self.reviewed_by = Some(email.into());
        self
    }

    pub fn with_rejection_reason(mut self, reason: impl Into<String>) -> Self {
        self.rejection_reason = Some(reason.into());
        self
    }

    /// Shorthand for an approved claim
    pub fn approved(self) -> Self {
        self.with_status(ClaimStatus::Approved)
            .reviewed_by("coordinator@university.ac.za")
    }

    /// Shorthand for a paid claim
    pub fn paid(self) -> Self {
        self.with_status(ClaimStatus::Paid)
            .reviewed_by("coordinator@university.ac.za")
    }

    pub fn build(self) -> Claim {
        let reviewed_at = self.reviewed_by.as_ref().map(|_| Utc::now());
        Claim::from_record(ClaimRecord {
            id: self.id,
            lecturer_email: self.lecturer_email,
            lecturer_name: self.lecturer_name,
            hours_worked: self.hours_worked,
            hourly_rate: self.hourly_rate,
            amount: derive_amount(self.hours_worked, self.hourly_rate),
            status: self.status,
            submitted_at: self.submitted_at,
            description: self.description,
            document_count: self.document_count,
            reviewed_by: self.reviewed_by,
            reviewed_at,
            rejection_reason: self.rejection_reason,
        })
    }
}

/// Builder for user entities
pub struct UserBuilder {
    id: UserId,
    email: String,
    full_name: String,
    role: Role,
    active: bool,
    last_login: Option<DateTime<Utc>>,
}

impl Default for UserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UserBuilder {
    pub fn new() -> Self {
        Self {
            id: UserId::new(1),
            email: "lecturer@university.ac.za".to_string(),
            full_name: "Dr. John Lecturer".to_string(),
            role: Role::Lecturer,
            active: true,
            last_login: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = UserId::new(id);
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    pub fn build(self) -> User {
        User {
            id: self.id,
            email: self.email,
            full_name: self.full_name,
            role: self.role,
            active: self.active,
            created_at: Utc::now(),
            last_login: self.last_login,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_claim_builder_derives_amount() {
        let claim = ClaimBuilder::new().with_hours(dec!(10), dec!(125.50)).build();
        assert_eq!(claim.amount(), dec!(1255.00));
        assert_eq!(claim.status(), ClaimStatus::Submitted);
    }

    #[test]
    fn test_approved_shorthand_sets_reviewer() {
        let claim = ClaimBuilder::new().approved().build();
        assert_eq!(claim.status(), ClaimStatus::Approved);
        assert!(claim.reviewed_by().is_some());
        assert!(claim.reviewed_at().is_some());
    }

    #[test]
    fn test_user_builder() {
        let user = UserBuilder::new().with_role(Role::Manager).inactive().build();
        assert_eq!(user.role, Role::Manager);
        assert!(!user.active);
    }
}
