//! Database test helpers

use domain_identity::{Role, Session};
use infra_db::{
    create_pool_in_memory, ensure_schema, ClaimRepository, DatabasePool, UserRepository,
};

use crate::fixtures::DemoCredentials;

/// Opens an in-memory database with the schema applied
pub async fn memory_pool() -> DatabasePool {
    let pool = create_pool_in_memory()
        .await
        .expect("in-memory pool should open");
    ensure_schema(&pool).await.expect("schema should apply");
    pool
}

/// Opens an in-memory database seeded with the demo accounts
pub async fn seeded_pool() -> DatabasePool {
    let pool = memory_pool().await;
    UserRepository::new(pool.clone())
        .seed_demo_accounts()
        .await
        .expect("seeding should succeed");
    pool
}

/// Repositories over one shared in-memory seeded database
pub async fn seeded_repositories() -> (UserRepository, ClaimRepository) {
    let pool = seeded_pool().await;
    (
        UserRepository::new(pool.clone()),
        ClaimRepository::new(pool),
    )
}

/// Logs a demo account in and returns its session
pub async fn demo_session(users: &UserRepository, role: Role) -> Session {
    let (email, password) = match role {
        Role::Admin => DemoCredentials::ADMIN,
        Role::Lecturer => DemoCredentials::LECTURER,
        Role::Coordinator => DemoCredentials::COORDINATOR,
        Role::Manager => DemoCredentials::MANAGER,
    };

    let user = users
        .authenticate(email, password)
        .await
        .expect("authentication query should succeed")
        .expect("demo credentials should verify");
    Session::authenticated(user)
}
