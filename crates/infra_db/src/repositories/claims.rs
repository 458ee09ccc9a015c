//! Claim repository
//!
//! Persists claims and their review state. Decimals are stored as
//! canonical strings, timestamps as RFC 3339, and the status as its
//! textual name. Only the document count is persisted; document metadata
//! lives with the in-memory claim that produced it.

use rust_decimal::Decimal;
use sqlx::FromRow;
use tracing::debug;

use core_kernel::ClaimId;
use domain_claims::{Claim, ClaimRecord, ClaimStatus, ClaimSubmission};

use crate::error::DatabaseError;
use crate::pool::DatabasePool;
use crate::repositories::users::parse_timestamp;

/// Repository for claim rows
#[derive(Debug, Clone)]
pub struct ClaimRepository {
    pool: DatabasePool,
}

impl ClaimRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Inserts a validated submission and returns its assigned id
    ///
    /// Claims enter the store as `Submitted`; the id is monotonic in
    /// insertion order.
    pub async fn insert(&self, submission: &ClaimSubmission) -> Result<ClaimId, DatabaseError> {
        let result = sqlx::query(
            r#"
            INSERT INTO claims (
                lecturer_email, lecturer_name, amount, status, submitted_at,
                description, hours_worked, hourly_rate, document_count
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
        )
        .bind(submission.lecturer_email())
        .bind(submission.lecturer_name())
        .bind(submission.amount().to_string())
        .bind(ClaimStatus::Submitted.as_str())
        .bind(submission.submitted_at().to_rfc3339())
        .bind(submission.description())
        .bind(submission.hours_worked().to_string())
        .bind(submission.hourly_rate().to_string())
        .bind(submission.documents().len() as i64)
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::from_sqlx)?;

        let id = ClaimId::new(result.last_insert_rowid());
        debug!(claim = %id, "claim inserted");
        Ok(id)
    }

    /// Writes a claim's review state back to its row
    ///
    /// Called after every successful lifecycle transition so the store
    /// never diverges from the in-memory claim.
    pub async fn update_review(&self, claim: &Claim) -> Result<(), DatabaseError> {
        let result = sqlx::query(
            r#"
            UPDATE claims
            SET status = ?1, reviewed_by = ?2, reviewed_at = ?3, rejection_reason = ?4
            WHERE claim_id = ?5
            "#,
        )
        .bind(claim.status().as_str())
        .bind(claim.reviewed_by())
        .bind(claim.reviewed_at().map(|dt| dt.to_rfc3339()))
        .bind(claim.rejection_reason())
        .bind(claim.id().as_i64())
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::from_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Claim", claim.id()));
        }
        Ok(())
    }

    /// Retrieves a claim by its identifier
    pub async fn find_by_id(&self, claim_id: ClaimId) -> Result<Claim, DatabaseError> {
        let row: Option<ClaimRow> = sqlx::query_as(
            r#"
            SELECT claim_id, lecturer_email, lecturer_name, amount, status,
                   submitted_at, description, hours_worked, hourly_rate,
                   document_count, reviewed_by, reviewed_at, rejection_reason
            FROM claims
            WHERE claim_id = ?1
            "#,
        )
        .bind(claim_id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from_sqlx)?;

        row.ok_or_else(|| DatabaseError::not_found("Claim", claim_id))?
            .into_claim()
    }

    /// Returns claims in insertion order, optionally filtered by status
    pub async fn filter(&self, status: Option<ClaimStatus>) -> Result<Vec<Claim>, DatabaseError> {
        let rows: Vec<ClaimRow> = match status {
            Some(status) => {
                sqlx::query_as(
                    r#"
                    SELECT claim_id, lecturer_email, lecturer_name, amount, status,
                           submitted_at, description, hours_worked, hourly_rate,
                           document_count, reviewed_by, reviewed_at, rejection_reason
                    FROM claims
                    WHERE status = ?1
                    ORDER BY claim_id
                    "#,
                )
                .bind(status.as_str())
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as(
                    r#"
                    SELECT claim_id, lecturer_email, lecturer_name, amount, status,
                           submitted_at, description, hours_worked, hourly_rate,
                           document_count, reviewed_by, reviewed_at, rejection_reason
                    FROM claims
                    ORDER BY claim_id
                    "#,
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(DatabaseError::from_sqlx)?;

        rows.into_iter().map(ClaimRow::into_claim).collect()
    }
}

/// Database row for a claim
#[derive(Debug, FromRow)]
struct ClaimRow {
    claim_id: i64,
    lecturer_email: String,
    lecturer_name: String,
    amount: String,
    status: String,
    submitted_at: String,
    description: String,
    hours_worked: String,
    hourly_rate: String,
    document_count: i64,
    reviewed_by: Option<String>,
    reviewed_at: Option<String>,
    rejection_reason: Option<String>,
}

impl ClaimRow {
    fn into_claim(self) -> Result<Claim, DatabaseError> {
        let status: ClaimStatus = self
            .status
            .parse()
            .map_err(|_| DatabaseError::CorruptRow(format!("unknown status '{}'", self.status)))?;

        let record = ClaimRecord {
            id: ClaimId::new(self.claim_id),
            lecturer_email: self.lecturer_email,
            lecturer_name: self.lecturer_name,
            hours_worked: parse_decimal(&self.hours_worked)?,
            hourly_rate: parse_decimal(&self.hourly_rate)?,
            amount: parse_decimal(&self.amount)?,
            status,
            submitted_at: parse_timestamp(&self.submitted_at)?,
            description: self.description,
            document_count: self.document_count.max(0) as usize,
            reviewed_by: self.reviewed_by,
            reviewed_at: self.reviewed_at.as_deref().map(parse_timestamp).transpose()?,
            rejection_reason: self.rejection_reason,
        };

        Ok(Claim::from_record(record))
    }
}

fn parse_decimal(raw: &str) -> Result<Decimal, DatabaseError> {
    raw.parse()
        .map_err(|e| DatabaseError::CorruptRow(format!("bad decimal '{raw}': {e}")))
}
