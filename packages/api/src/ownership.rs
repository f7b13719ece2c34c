//! # Ownership resolution
//!
//! Decides whether an account in the shared list "looks like" the cached
//! user's, for display filtering only. Two accounts whose owners share a name
//! are indistinguishable here; only the backend can say who owns what.
//!
//! Order of checks:
//!
//! 1. No user: not owned.
//! 2. Any positive id shared between the user (`userId`, `id`, `customerId`)
//!    and the account (`userId`, `customerId`, `ownerId`, `customer.id`): owned.
//! 3. User lacks a first or last name: compare the user's full name (or
//!    `customerName`) with the account's customer name.
//! 4. Otherwise: owned when the (first, last) pair matches or the account's
//!    customer name equals the user's full name.
//!
//! All name comparisons trim and lowercase both sides.

use store::AuthenticatedUser;

use crate::models::Account;

fn normalize(value: Option<&str>) -> String {
    value.unwrap_or("").trim().to_lowercase()
}

pub fn account_belongs_to(account: &Account, user: Option<&AuthenticatedUser>) -> bool {
    let Some(user) = user else {
        return false;
    };

    let user_ids = user.ids();
    let account_ids = account.owner_ids();
    if user_ids.iter().any(|id| account_ids.contains(id)) {
        return true;
    }

    let first_name = normalize(Some(&user.first_name));
    let last_name = normalize(Some(&user.last_name));
    let joined = format!("{first_name} {last_name}").trim().to_string();
    let full_name = if joined.is_empty() {
        normalize(user.customer_name.as_deref())
    } else {
        joined
    };
    let account_customer_name = normalize(account.owner_customer_name());

    if first_name.is_empty() || last_name.is_empty() {
        return !full_name.is_empty() && account_customer_name == full_name;
    }

    let account_first_name = normalize(account.owner_first_name());
    let account_last_name = normalize(account.owner_last_name());

    (account_first_name == first_name && account_last_name == last_name)
        || account_customer_name == full_name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CustomerRef;

    fn user(first: &str, last: &str) -> AuthenticatedUser {
        AuthenticatedUser {
            first_name: first.into(),
            last_name: last.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_user_owns_nothing() {
        let account = Account {
            customer_id: Some(1),
            ..Default::default()
        };
        assert!(!account_belongs_to(&account, None));
    }

    #[test]
    fn test_id_match_ignores_names() {
        let account = Account {
            customer_id: Some(7),
            first_name: Some("Someone".into()),
            last_name: Some("Else".into()),
            ..Default::default()
        };
        let user = AuthenticatedUser {
            id: Some(7),
            ..user("jane", "doe")
        };
        assert!(account_belongs_to(&account, Some(&user)));
    }

    #[test]
    fn test_nested_customer_id_match() {
        let account = Account {
            customer: Some(CustomerRef {
                id: Some(11),
                ..Default::default()
            }),
            ..Default::default()
        };
        let user = AuthenticatedUser {
            customer_id: Some(11),
            ..Default::default()
        };
        assert!(account_belongs_to(&account, Some(&user)));
    }

    #[test]
    fn test_name_match_is_case_insensitive() {
        let account = Account {
            first_name: Some("Jane".into()),
            last_name: Some("Doe".into()),
            ..Default::default()
        };
        assert!(account_belongs_to(&account, Some(&user("jane", "DOE"))));
    }

    #[test]
    fn test_customer_name_matches_full_name() {
        let account = Account {
            customer_name: Some("  Jane Doe ".into()),
            ..Default::default()
        };
        assert!(account_belongs_to(&account, Some(&user("Jane", "Doe"))));
    }

    #[test]
    fn test_nested_customer_names() {
        let account = Account {
            customer: Some(CustomerRef {
                first_name: Some("JANE".into()),
                last_name: Some("doe".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(account_belongs_to(&account, Some(&user("jane", "doe"))));
    }

    #[test]
    fn test_different_owner_is_not_mine() {
        let account = Account {
            user_id: Some(2),
            first_name: Some("John".into()),
            last_name: Some("Doe".into()),
            customer_name: Some("john doe".into()),
            ..Default::default()
        };
        let user = AuthenticatedUser {
            user_id: Some(1),
            ..user("jane", "doe")
        };
        assert!(!account_belongs_to(&account, Some(&user)));
    }

    #[test]
    fn test_partial_name_compares_customer_name_only() {
        let account = Account {
            first_name: Some("jane".into()),
            customer_name: Some("other".into()),
            ..Default::default()
        };
        // First name alone never matches the first-name field
        assert!(!account_belongs_to(&account, Some(&user("jane", ""))));

        let account = Account {
            customer_name: Some("Jane".into()),
            ..Default::default()
        };
        assert!(account_belongs_to(&account, Some(&user("jane", ""))));
    }

    #[test]
    fn test_customer_name_only_user() {
        let user = AuthenticatedUser {
            customer_name: Some("Jane Doe".into()),
            ..Default::default()
        };
        let account = Account {
            customer: Some(CustomerRef {
                name: Some("jane doe".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(account_belongs_to(&account, Some(&user)));
    }

    #[test]
    fn test_nameless_user_without_ids_owns_nothing() {
        let account = Account::default();
        assert!(!account_belongs_to(&account, Some(&AuthenticatedUser::default())));
    }
}
