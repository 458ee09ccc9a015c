//! Repository tests against in-memory SQLite

use rust_decimal_macros::dec;

use domain_claims::{ClaimStatus, ClaimSubmission};
use domain_identity::{Role, User};
use infra_db::{
    create_pool, create_pool_in_memory, ensure_schema, ClaimRepository, DatabaseConfig,
    DatabaseError, NewUser, UserRepository, DEMO_ACCOUNTS,
};

async fn user_repo() -> UserRepository {
    let pool = create_pool_in_memory().await.unwrap();
    ensure_schema(&pool).await.unwrap();
    UserRepository::new(pool)
}

async fn claim_repo() -> ClaimRepository {
    let pool = create_pool_in_memory().await.unwrap();
    ensure_schema(&pool).await.unwrap();
    ClaimRepository::new(pool)
}

fn new_user(email: &str, role: Role) -> NewUser {
    NewUser {
        email: email.to_string(),
        password: "Sound-Password-1".to_string(),
        full_name: "Test User".to_string(),
        role,
    }
}

fn submission() -> ClaimSubmission {
    ClaimSubmission::new(
        "alice.smith@university.ac.za",
        "Dr. Alice Smith",
        dec!(30),
        dec!(150),
        "Teaching: Software Engineering - 30 hours",
        Vec::new(),
    )
    .unwrap()
}

mod file_store_tests {
    use super::*;

    #[tokio::test]
    async fn test_data_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("claims.db");

        {
            let pool = create_pool(DatabaseConfig::new(&path)).await.unwrap();
            ensure_schema(&pool).await.unwrap();
            ClaimRepository::new(pool.clone())
                .insert(&submission())
                .await
                .unwrap();
            pool.close().await;
        }

        let pool = create_pool(DatabaseConfig::new(&path)).await.unwrap();
        ensure_schema(&pool).await.unwrap();
        let claims = ClaimRepository::new(pool).filter(None).await.unwrap();
        assert_eq!(claims.len(), 1);
        assert_eq!(claims[0].status(), ClaimStatus::Submitted);
    }
}

mod credential_store_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_authenticate() {
        let repo = user_repo().await;
        let id = repo
            .create(new_user("dup@x.com", Role::Lecturer))
            .await
            .unwrap();

        let user: User = repo
            .authenticate("dup@x.com", "Sound-Password-1")
            .await
            .unwrap()
            .expect("credentials should verify");

        assert_eq!(user.id, id);
        assert_eq!(user.role, Role::Lecturer);
        assert!(user.active);
        assert!(user.last_login.is_some());
    }

    #[tokio::test]
    async fn test_duplicate_email_fails_second_time() {
        let repo = user_repo().await;

        repo.create(new_user("dup@x.com", Role::Lecturer)).await.unwrap();
        let second = repo.create(new_user("dup@x.com", Role::Manager)).await;

        assert!(matches!(second, Err(DatabaseError::DuplicateEntry(_))));
    }

    #[tokio::test]
    async fn test_wrong_password_returns_none_and_preserves_last_login() {
        let repo = user_repo().await;
        repo.create(new_user("a@x.com", Role::Lecturer)).await.unwrap();

        let result = repo.authenticate("a@x.com", "Wrong-Password-1").await.unwrap();
        assert!(result.is_none());

        let stored = repo.find_by_email("a@x.com").await.unwrap().unwrap();
        assert!(stored.last_login.is_none());
    }

    #[tokio::test]
    async fn test_unknown_email_indistinguishable_from_wrong_password() {
        let repo = user_repo().await;
        repo.create(new_user("a@x.com", Role::Lecturer)).await.unwrap();

        let unknown = repo.authenticate("nobody@x.com", "Sound-Password-1").await.unwrap();
        let mismatch = repo.authenticate("a@x.com", "bad").await.unwrap();

        assert!(unknown.is_none());
        assert!(mismatch.is_none());
    }

    #[tokio::test]
    async fn test_change_password() {
        let repo = user_repo().await;
        let id = repo.create(new_user("a@x.com", Role::Admin)).await.unwrap();

        // Wrong old password: refused, old credentials still work
        assert!(!repo.change_password(id, "nope", "Replacement-9").await.unwrap());
        assert!(repo.authenticate("a@x.com", "Sound-Password-1").await.unwrap().is_some());

        // Correct old password: replaced atomically
        assert!(repo
            .change_password(id, "Sound-Password-1", "Replacement-9")
            .await
            .unwrap());
        assert!(repo.authenticate("a@x.com", "Sound-Password-1").await.unwrap().is_none());
        assert!(repo.authenticate("a@x.com", "Replacement-9").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_demo_seeding_runs_once() {
        let repo = user_repo().await;

        assert!(repo.seed_demo_accounts().await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 4);

        // Second call is a no-op
        assert!(!repo.seed_demo_accounts().await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 4);

        for (email, password, _, role) in DEMO_ACCOUNTS {
            let user = repo.authenticate(email, password).await.unwrap().unwrap();
            assert_eq!(user.role, role);
        }
    }

    #[tokio::test]
    async fn test_seeding_skips_populated_store() {
        let repo = user_repo().await;
        repo.create(new_user("existing@x.com", Role::Admin)).await.unwrap();

        assert!(!repo.seed_demo_accounts().await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}

mod claim_repository_tests {
    use super::*;
    use chrono::{Timelike, Utc};
    use core_kernel::{ClaimId, UserId};
    use domain_claims::Claim;

    fn manager() -> User {
        User {
            id: UserId::new(1),
            email: "manager@university.ac.za".to_string(),
            full_name: "Programme Manager".to_string(),
            role: Role::Manager,
            active: true,
            created_at: Utc::now(),
            last_login: None,
        }
    }

    #[tokio::test]
    async fn test_round_trip_preserves_fields() {
        let repo = claim_repo().await;
        let submission = submission();
        let submitted_at = submission.submitted_at();

        let id = repo.insert(&submission).await.unwrap();
        let stored = repo.find_by_id(id).await.unwrap();

        assert_eq!(stored.status(), ClaimStatus::Submitted);
        assert_eq!(stored.amount(), dec!(4500.00));
        assert_eq!(stored.hours_worked(), dec!(30));
        assert_eq!(stored.hourly_rate(), dec!(150));
        assert_eq!(stored.lecturer_email(), "alice.smith@university.ac.za");
        // Submission date round-trips at least to the second
        assert_eq!(
            stored.submitted_at().with_nanosecond(0).unwrap(),
            submitted_at.with_nanosecond(0).unwrap()
        );
    }

    #[tokio::test]
    async fn test_ids_are_monotonic() {
        let repo = claim_repo().await;
        let first = repo.insert(&submission()).await.unwrap();
        let second = repo.insert(&submission()).await.unwrap();
        assert!(second > first);
    }

    #[tokio::test]
    async fn test_missing_claim_is_not_found() {
        let repo = claim_repo().await;
        let result = repo.find_by_id(ClaimId::new(999)).await;
        assert!(matches!(result, Err(DatabaseError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_review_persists_transition() {
        let repo = claim_repo().await;
        let id = repo.insert(&submission()).await.unwrap();

        let mut claim = repo.find_by_id(id).await.unwrap();
        claim.approve(&manager()).unwrap();
        repo.update_review(&claim).await.unwrap();

        let reloaded = repo.find_by_id(id).await.unwrap();
        assert_eq!(reloaded.status(), ClaimStatus::Approved);
        assert_eq!(reloaded.reviewed_by(), Some("manager@university.ac.za"));
        assert!(reloaded.reviewed_at().is_some());
    }

    #[tokio::test]
    async fn test_rejection_reason_persists() {
        let repo = claim_repo().await;
        let id = repo.insert(&submission()).await.unwrap();

        let mut claim = repo.find_by_id(id).await.unwrap();
        claim
            .reject(&manager(), Some("No timetable entry".to_string()))
            .unwrap();
        repo.update_review(&claim).await.unwrap();

        let reloaded = repo.find_by_id(id).await.unwrap();
        assert_eq!(reloaded.status(), ClaimStatus::Rejected);
        assert_eq!(reloaded.rejection_reason(), Some("No timetable entry"));
    }

    #[tokio::test]
    async fn test_filter_by_status_preserves_insertion_order() {
        let repo = claim_repo().await;
        let mgr = manager();

        let mut ids = Vec::new();
        for _ in 0..4 {
            ids.push(repo.insert(&submission()).await.unwrap());
        }

        // Approve the second and fourth
        for &id in [ids[1], ids[3]].iter() {
            let mut claim = repo.find_by_id(id).await.unwrap();
            claim.approve(&mgr).unwrap();
            repo.update_review(&claim).await.unwrap();
        }

        let all = repo.filter(None).await.unwrap();
        assert_eq!(all.len(), 4);
        let listed: Vec<_> = all.iter().map(Claim::id).collect();
        assert_eq!(listed, ids);

        let approved = repo.filter(Some(ClaimStatus::Approved)).await.unwrap();
        assert_eq!(approved.len(), 2);
        assert_eq!(approved[0].id(), ids[1]);
        assert_eq!(approved[1].id(), ids[3]);

        let paid = repo.filter(Some(ClaimStatus::Paid)).await.unwrap();
        assert!(paid.is_empty());
    }

    #[tokio::test]
    async fn test_update_review_on_missing_claim() {
        let repo = claim_repo().await;
        let id = repo.insert(&submission()).await.unwrap();
        let mut claim = repo.find_by_id(id).await.unwrap();
        claim.approve(&manager()).unwrap();

        // Rebuild against an empty store
        let other = claim_repo().await;
        let result = other.update_review(&claim).await;
        assert!(matches!(result, Err(DatabaseError::NotFound(_))));
    }
}
