//! Claim service
//!
//! Drives the claim lifecycle: submission by lecturers, review decisions
//! by coordinators and managers, payment by managers. Each successful
//! transition is persisted before it is reported back to the caller.

use rust_decimal::Decimal;
use tracing::warn;

use domain_claims::{
    screen_attachments, AttachmentUpload, Claim, ClaimStatus, ClaimSubmission, DashboardStats,
    DocumentRejection,
};
use domain_identity::{authorize, Role, Session, User};
use infra_audit::AuditLog;
use infra_db::ClaimRepository;

use crate::error::AppError;
use core_kernel::ClaimId;

/// Result of a submission: the stored claim plus per-file warnings for
/// attachments that failed screening
#[derive(Debug)]
pub struct SubmissionOutcome {
    pub claim: Claim,
    pub warnings: Vec<DocumentRejection>,
}

/// Claim submission, review and reporting
#[derive(Debug, Clone)]
pub struct ClaimService {
    claims: ClaimRepository,
    audit: AuditLog,
}

impl ClaimService {
    pub fn new(claims: ClaimRepository, audit: AuditLog) -> Self {
        Self { claims, audit }
    }

    /// Submits a new claim on behalf of the session's lecturer
    ///
    /// Attachments failing screening are skipped and reported as warnings;
    /// the submission itself proceeds with the accepted remainder.
    pub async fn submit(
        &self,
        session: &Session,
        hours_worked: Decimal,
        hourly_rate: Decimal,
        description: &str,
        uploads: &[AttachmentUpload],
    ) -> Result<SubmissionOutcome, AppError> {
        let user = authorize(session, &[Role::Lecturer])?;

        let (accepted, warnings) = screen_attachments(uploads);
        for rejection in &warnings {
            warn!(file = %rejection.file_name, reason = %rejection.reason, "attachment skipped");
        }

        let submission = ClaimSubmission::new(
            user.email.clone(),
            user.full_name.clone(),
            hours_worked,
            hourly_rate,
            description,
            accepted,
        )?;

        let id = self.claims.insert(&submission).await?;
        let claim = Claim::from_submission(id, submission);

        self.audit.record_action(
            session,
            "SubmitClaim",
            &format!("Claim {} for R{:.2}", id, claim.amount()),
        );

        Ok(SubmissionOutcome { claim, warnings })
    }

    /// Moves a submitted claim under review
    pub async fn begin_review(
        &self,
        session: &Session,
        claim_id: ClaimId,
    ) -> Result<Claim, AppError> {
        let user = authorize(session, &Role::REVIEWERS)?;
        self.apply(session, user, claim_id, "BeginReview", |claim, user| {
            claim.begin_review(user)
        })
        .await
    }

    /// Approves a claim for payment
    pub async fn approve(&self, session: &Session, claim_id: ClaimId) -> Result<Claim, AppError> {
        let user = authorize(session, &Role::REVIEWERS)?;
        self.apply(session, user, claim_id, "ApproveClaim", |claim, user| {
            claim.approve(user)
        })
        .await
    }

    /// Rejects a claim, recording the optional reason
    pub async fn reject(
        &self,
        session: &Session,
        claim_id: ClaimId,
        reason: Option<String>,
    ) -> Result<Claim, AppError> {
        let user = authorize(session, &Role::REVIEWERS)?;
        self.apply(session, user, claim_id, "RejectClaim", move |claim, user| {
            claim.reject(user, reason)
        })
        .await
    }

    /// Marks an approved claim as paid
    pub async fn mark_paid(
        &self,
        session: &Session,
        claim_id: ClaimId,
    ) -> Result<Claim, AppError> {
        let user = authorize(session, &[Role::Manager])?;
        self.apply(session, user, claim_id, "MarkPaid", |claim, user| {
            claim.mark_paid(user)
        })
        .await
    }

    /// Lists claims, optionally filtered by status
    ///
    /// Any authenticated user may list; the presentation layer decides
    /// which subset each role sees.
    pub async fn claims(
        &self,
        session: &Session,
        status: Option<ClaimStatus>,
    ) -> Result<Vec<Claim>, AppError> {
        authorize(session, &[])?;
        Ok(self.claims.filter(status).await?)
    }

    /// Aggregates dashboard statistics over the full claim set
    pub async fn dashboard(&self, session: &Session) -> Result<DashboardStats, AppError> {
        authorize(session, &[])?;
        let claims = self.claims.filter(None).await?;
        Ok(DashboardStats::aggregate(&claims))
    }

    /// Loads a claim, applies one lifecycle event, persists and audits it
    async fn apply<F>(
        &self,
        session: &Session,
        user: &User,
        claim_id: ClaimId,
        action: &str,
        event: F,
    ) -> Result<Claim, AppError>
    where
        F: FnOnce(&mut Claim, &User) -> Result<(), domain_claims::ClaimError>,
    {
        let mut claim = self.claims.find_by_id(claim_id).await?;
        event(&mut claim, user)?;
        self.claims.update_review(&claim).await?;

        self.audit.record_action(
            session,
            action,
            &format!("Claim {} now {}", claim_id, claim.status()),
        );
        Ok(claim)
    }
}
