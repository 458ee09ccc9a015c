//! Claim lifecycle transitions
//!
//! Each event checks the actor's role first, then the transition table,
//! and only then mutates the claim. A failed event leaves the claim
//! exactly as it was.

use chrono::Utc;
use tracing::debug;

use domain_identity::{Role, User};

use crate::claim::{Claim, ClaimStatus};
use crate::error::ClaimError;

impl Claim {
    /// Moves a submitted claim into review
    ///
    /// Actor must be a Coordinator or Manager.
    pub fn begin_review(&mut self, actor: &User) -> Result<(), ClaimError> {
        require_reviewer(actor, "begin review of")?;
        self.transition(ClaimStatus::UnderReview)?;
        debug!(claim = %self.id, reviewer = %actor.email, "claim moved under review");
        Ok(())
    }

    /// Approves a claim for payment
    ///
    /// Actor must be a Coordinator or Manager. Valid from `Submitted` or
    /// `UnderReview`.
    pub fn approve(&mut self, actor: &User) -> Result<(), ClaimError> {
        require_reviewer(actor, "approve")?;
        self.transition(ClaimStatus::Approved)?;
        self.reviewed_by = Some(actor.email.clone());
        self.reviewed_at = Some(Utc::now());
        debug!(claim = %self.id, reviewer = %actor.email, "claim approved");
        Ok(())
    }

    /// Rejects a claim (terminal)
    ///
    /// Actor must be a Coordinator or Manager. The reason is optional but
    /// recommended.
    pub fn reject(&mut self, actor: &User, reason: Option<String>) -> Result<(), ClaimError> {
        require_reviewer(actor, "reject")?;
        self.transition(ClaimStatus::Rejected)?;
        self.reviewed_by = Some(actor.email.clone());
        self.reviewed_at = Some(Utc::now());
        self.rejection_reason = reason.filter(|r| !r.trim().is_empty());
        debug!(claim = %self.id, reviewer = %actor.email, "claim rejected");
        Ok(())
    }

    /// Marks an approved claim as paid (terminal)
    ///
    /// Actor must be a Manager, and the claim must be exactly `Approved`;
    /// any other state fails with `InvalidTransition`, never silently.
    pub fn mark_paid(&mut self, actor: &User) -> Result<(), ClaimError> {
        if actor.role != Role::Manager {
            return Err(ClaimError::NotPermitted {
                action: "mark claims as paid",
                role: actor.role,
            });
        }
        self.transition(ClaimStatus::Paid)?;
        debug!(claim = %self.id, manager = %actor.email, "claim marked paid");
        Ok(())
    }

    fn transition(&mut self, target: ClaimStatus) -> Result<(), ClaimError> {
        if !self.can_transition_to(target) {
            return Err(ClaimError::InvalidTransition {
                from: self.status,
                to: target,
            });
        }
        self.status = target;
        Ok(())
    }
}

fn require_reviewer(actor: &User, action: &'static str) -> Result<(), ClaimError> {
    if actor.role.can_review() {
        Ok(())
    } else {
        Err(ClaimError::NotPermitted {
            action,
            role: actor.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use core_kernel::{ClaimId, UserId};
    use rust_decimal_macros::dec;

    use crate::claim::ClaimSubmission;

    fn actor(role: Role) -> User {
        User {
            id: UserId::new(9),
            email: format!("{}@university.ac.za", role.as_str().to_lowercase()),
            full_name: role.as_str().to_string(),
            role,
            active: true,
            created_at: Utc::now(),
            last_login: None,
        }
    }

    fn submitted_claim() -> Claim {
        let submission = ClaimSubmission::new(
            "alice.smith@university.ac.za",
            "Dr. Alice Smith",
            dec!(30),
            dec!(150),
            "Teaching: Software Engineering - 30 hours",
            Vec::new(),
        )
        .unwrap();
        Claim::from_submission(ClaimId::new(1001), submission)
    }

    #[test]
    fn test_submit_derives_amount() {
        let claim = submitted_claim();
        assert_eq!(claim.amount(), dec!(4500.00));
        assert_eq!(claim.status(), ClaimStatus::Submitted);
    }

    #[test]
    fn test_reject_records_reason_and_reviewer() {
        let mut claim = submitted_claim();
        let coordinator = actor(Role::Coordinator);

        claim
            .reject(&coordinator, Some("Hours not on the timetable".to_string()))
            .unwrap();

        assert_eq!(claim.status(), ClaimStatus::Rejected);
        assert_eq!(claim.reviewed_by(), Some(coordinator.email.as_str()));
        assert!(claim.reviewed_at().is_some());
        assert_eq!(claim.rejection_reason(), Some("Hours not on the timetable"));
    }

    #[test]
    fn test_reject_blank_reason_stored_as_none() {
        let mut claim = submitted_claim();
        claim.reject(&actor(Role::Manager), Some("  ".to_string())).unwrap();
        assert_eq!(claim.rejection_reason(), None);
    }

    #[test]
    fn test_lecturer_cannot_review() {
        let mut claim = submitted_claim();
        let lecturer = actor(Role::Lecturer);

        assert!(matches!(
            claim.begin_review(&lecturer),
            Err(ClaimError::NotPermitted { .. })
        ));
        assert!(matches!(
            claim.approve(&lecturer),
            Err(ClaimError::NotPermitted { .. })
        ));
        assert_eq!(claim.status(), ClaimStatus::Submitted);
    }

    #[test]
    fn test_coordinator_cannot_mark_paid() {
        let mut claim = submitted_claim();
        claim.approve(&actor(Role::Coordinator)).unwrap();

        let result = claim.mark_paid(&actor(Role::Coordinator));
        assert!(matches!(result, Err(ClaimError::NotPermitted { .. })));
        assert_eq!(claim.status(), ClaimStatus::Approved);
    }

    #[test]
    fn test_mark_paid_only_from_approved() {
        let manager = actor(Role::Manager);

        let mut submitted = submitted_claim();
        assert!(matches!(
            submitted.mark_paid(&manager),
            Err(ClaimError::InvalidTransition { .. })
        ));
        assert_eq!(submitted.status(), ClaimStatus::Submitted);

        let mut under_review = submitted_claim();
        under_review.begin_review(&manager).unwrap();
        assert!(matches!(
            under_review.mark_paid(&manager),
            Err(ClaimError::InvalidTransition { .. })
        ));
        assert_eq!(under_review.status(), ClaimStatus::UnderReview);

        let mut rejected = submitted_claim();
        rejected.reject(&manager, None).unwrap();
        assert!(matches!(
            rejected.mark_paid(&manager),
            Err(ClaimError::InvalidTransition { .. })
        ));
        assert_eq!(rejected.status(), ClaimStatus::Rejected);

        let mut approved = submitted_claim();
        approved.approve(&manager).unwrap();
        approved.mark_paid(&manager).unwrap();
        assert_eq!(approved.status(), ClaimStatus::Paid);
    }

    #[test]
    fn test_terminal_states_are_permanent() {
        let manager = actor(Role::Manager);

        let mut paid = submitted_claim();
        paid.approve(&manager).unwrap();
        paid.mark_paid(&manager).unwrap();

        assert!(paid.approve(&manager).is_err());
        assert!(paid.reject(&manager, None).is_err());
        assert!(paid.mark_paid(&manager).is_err());
        assert_eq!(paid.status(), ClaimStatus::Paid);

        let mut rejected = submitted_claim();
        rejected.reject(&manager, None).unwrap();
        assert!(rejected.approve(&manager).is_err());
        assert!(rejected.begin_review(&manager).is_err());
        assert_eq!(rejected.status(), ClaimStatus::Rejected);
    }

    #[test]
    fn test_approve_from_submitted_or_under_review() {
        let coordinator = actor(Role::Coordinator);

        let mut direct = submitted_claim();
        direct.approve(&coordinator).unwrap();
        assert_eq!(direct.status(), ClaimStatus::Approved);

        let mut reviewed = submitted_claim();
        reviewed.begin_review(&coordinator).unwrap();
        reviewed.approve(&coordinator).unwrap();
        assert_eq!(reviewed.status(), ClaimStatus::Approved);
    }

    #[test]
    fn test_second_mark_paid_fails() {
        let manager = actor(Role::Manager);
        let mut claim = submitted_claim();

        claim.approve(&manager).unwrap();
        claim.mark_paid(&manager).unwrap();

        let second = claim.mark_paid(&manager);
        assert!(matches!(
            second,
            Err(ClaimError::InvalidTransition {
                from: ClaimStatus::Paid,
                to: ClaimStatus::Paid,
            })
        ));
    }
}
