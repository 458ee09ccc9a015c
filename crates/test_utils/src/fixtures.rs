//! Test fixtures
//!
//! Pre-built entities and well-known credentials matching the demo seed.

use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::UserId;
use domain_identity::{Role, Session, User};

/// Credentials matching the seeded demo accounts
pub struct DemoCredentials;

impl DemoCredentials {
    pub const ADMIN: (&'static str, &'static str) = ("admin@university.ac.za", "Admin@123");
    pub const LECTURER: (&'static str, &'static str) =
        ("lecturer@university.ac.za", "Lecturer@123");
    pub const COORDINATOR: (&'static str, &'static str) =
        ("coordinator@university.ac.za", "Coordinator@123");
    pub const MANAGER: (&'static str, &'static str) = ("manager@university.ac.za", "Manager@123");
}

/// Common claim amounts
pub struct AmountFixtures;

impl AmountFixtures {
    /// 30 hours at R150/h
    pub fn standard_hours() -> Decimal {
        dec!(30)
    }

    pub fn standard_rate() -> Decimal {
        dec!(150)
    }

    /// The amount the standard hours and rate derive to
    pub fn standard_amount() -> Decimal {
        dec!(4500.00)
    }
}

/// Builds a user with the given role and a matching demo email
pub fn user_with_role(role: Role) -> User {
    let email = match role {
        Role::Admin => DemoCredentials::ADMIN.0,
        Role::Lecturer => DemoCredentials::LECTURER.0,
        Role::Coordinator => DemoCredentials::COORDINATOR.0,
        Role::Manager => DemoCredentials::MANAGER.0,
    };

    User {
        id: UserId::new(1),
        email: email.to_string(),
        full_name: format!("Test {}", role.as_str()),
        role,
        active: true,
        created_at: Utc::now(),
        last_login: None,
    }
}

/// Builds an authenticated session for the given role
pub fn session_with_role(role: Role) -> Session {
    Session::authenticated(user_with_role(role))
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_claims::derive_amount;

    #[test]
    fn test_standard_amount_matches_derivation() {
        assert_eq!(
            derive_amount(AmountFixtures::standard_hours(), AmountFixtures::standard_rate()),
            AmountFixtures::standard_amount()
        );
    }

    #[test]
    fn test_sessions_carry_their_role() {
        for role in Role::ALL {
            assert_eq!(session_with_role(role).role(), Some(role));
        }
    }
}
