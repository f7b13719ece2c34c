//! # Portfolio: the user's accounts as the pages see them
//!
//! [`Portfolio::for_user`] filters the shared account list down to the cached
//! user's CURRENT and SAVINGS accounts, keeping backend order. Every page
//! derives its numbers from one of these:
//!
//! | Method | Used for |
//! |--------|----------|
//! | [`total_balance`](Portfolio::total_balance) | dashboard total, "total available" line |
//! | [`default_account`](Portfolio::default_account) | initial selection: first CURRENT, else first |
//! | [`initial_selection`](Portfolio::initial_selection) | transactions page, honouring a `?account_id=` |
//! | [`transfer_targets`](Portfolio::transfer_targets) / [`resolve_target`](Portfolio::resolve_target) | transfer form |

use rust_decimal::Decimal;
use store::AuthenticatedUser;

use crate::classify::{classify, AccountKind};
use crate::models::Account;
use crate::ownership::account_belongs_to;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Portfolio {
    accounts: Vec<Account>,
}

impl Portfolio {
    pub fn for_user(accounts: Vec<Account>, user: Option<&AuthenticatedUser>) -> Self {
        let accounts = accounts
            .into_iter()
            .filter(|account| classify(account).is_some())
            .filter(|account| account_belongs_to(account, user))
            .collect();
        Self { accounts }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Sum of the balances, saturating at the `Decimal` bounds.
    pub fn total_balance(&self) -> Decimal {
        self.accounts
            .iter()
            .map(Account::balance)
            .fold(Decimal::ZERO, |total, balance| {
                total.checked_add(balance).unwrap_or(if balance.is_sign_negative() {
                    Decimal::MIN
                } else {
                    Decimal::MAX
                })
            })
    }

    pub fn first_of(&self, kind: AccountKind) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| classify(account) == Some(kind))
    }

    pub fn current(&self) -> Option<&Account> {
        self.first_of(AccountKind::Current)
    }

    pub fn savings(&self) -> Option<&Account> {
        self.first_of(AccountKind::Savings)
    }

    pub fn has_savings(&self) -> bool {
        self.savings().is_some()
    }

    /// First CURRENT account, else the first account.
    pub fn default_account(&self) -> Option<&Account> {
        self.current().or_else(|| self.accounts.first())
    }

    pub fn find(&self, id: i64) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == Some(id))
    }

    pub fn contains(&self, id: i64) -> bool {
        self.find(id).is_some()
    }

    /// The preselected account when it is one of ours, else the default.
    pub fn initial_selection(&self, preselected: Option<i64>) -> Option<i64> {
        preselected
            .filter(|id| self.contains(*id))
            .or_else(|| self.default_account().and_then(|account| account.id))
    }

    /// Every account other than `selected`.
    pub fn transfer_targets(&self, selected: Option<i64>) -> Vec<&Account> {
        self.accounts
            .iter()
            .filter(|account| account.id.is_some() && account.id != selected)
            .collect()
    }

    /// Keep `previous` while it is still ours and not the source, else the
    /// first other account.
    pub fn resolve_target(&self, previous: Option<i64>, selected: Option<i64>) -> Option<i64> {
        if let Some(previous) = previous {
            if Some(previous) != selected && self.contains(previous) {
                return Some(previous);
            }
        }
        self.transfer_targets(selected)
            .first()
            .and_then(|account| account.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(id: i64, kind: &str, balance: i64, owner: i64) -> Account {
        Account {
            id: Some(id),
            r#type: Some(kind.to_string()),
            balance: Some(Decimal::new(balance, 0)),
            user_id: Some(owner),
            ..Default::default()
        }
    }

    fn me() -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: Some(1),
            first_name: "jane".into(),
            last_name: "doe".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_total_and_default_selection() {
        let portfolio = Portfolio::for_user(
            vec![account(2, "SAVINGS", 50, 1), account(1, "CURRENT", 100, 1)],
            Some(&me()),
        );
        assert_eq!(portfolio.len(), 2);
        assert_eq!(portfolio.total_balance(), Decimal::new(150, 0));
        assert_eq!(portfolio.default_account().and_then(|a| a.id), Some(1));
        assert!(portfolio.has_savings());
    }

    #[test]
    fn test_total_saturates_instead_of_overflowing() {
        let huge = Decimal::from_i128_with_scale(50_000_000_000_000_000_000_000_000_000, 0);
        let mut first = account(1, "CURRENT", 0, 1);
        first.balance = Some(huge);
        let mut second = account(2, "SAVINGS", 0, 1);
        second.balance = Some(huge);
        let portfolio = Portfolio::for_user(vec![first, second], Some(&me()));
        assert_eq!(portfolio.len(), 2);
        assert_eq!(portfolio.total_balance(), Decimal::MAX);

        let mut debt = account(3, "CURRENT", 0, 1);
        debt.balance = Some(-huge);
        let mut more_debt = account(4, "SAVINGS", 0, 1);
        more_debt.balance = Some(-huge);
        let portfolio = Portfolio::for_user(vec![debt, more_debt], Some(&me()));
        assert_eq!(portfolio.total_balance(), Decimal::MIN);
    }

    #[test]
    fn test_filters_foreign_and_unrecognized_accounts() {
        let portfolio = Portfolio::for_user(
            vec![
                account(1, "CURRENT", 100, 1),
                account(2, "LOAN", 999, 1),
                account(3, "SAVINGS", 10, 2),
            ],
            Some(&me()),
        );
        assert_eq!(portfolio.len(), 1);
        assert_eq!(portfolio.total_balance(), Decimal::new(100, 0));
        assert!(!portfolio.has_savings());
    }

    #[test]
    fn test_signed_out_portfolio_is_empty() {
        let portfolio = Portfolio::for_user(vec![account(1, "CURRENT", 100, 1)], None);
        assert!(portfolio.is_empty());
        assert_eq!(portfolio.total_balance(), Decimal::ZERO);
        assert_eq!(portfolio.default_account(), None);
    }

    #[test]
    fn test_default_falls_back_to_first() {
        let portfolio = Portfolio::for_user(
            vec![account(4, "Savings", 1, 1), account(5, "savings plus", 2, 1)],
            Some(&me()),
        );
        assert_eq!(portfolio.default_account().and_then(|a| a.id), Some(4));
        assert_eq!(portfolio.current(), None);
    }

    #[test]
    fn test_initial_selection() {
        let portfolio = Portfolio::for_user(
            vec![account(1, "CURRENT", 0, 1), account(2, "SAVINGS", 0, 1)],
            Some(&me()),
        );
        assert_eq!(portfolio.initial_selection(Some(2)), Some(2));
        // Not ours: fall back to the default
        assert_eq!(portfolio.initial_selection(Some(99)), Some(1));
        assert_eq!(portfolio.initial_selection(None), Some(1));
    }

    #[test]
    fn test_transfer_targets_and_resolution() {
        let portfolio = Portfolio::for_user(
            vec![
                account(1, "CURRENT", 0, 1),
                account(2, "SAVINGS", 0, 1),
                account(3, "SAVINGS", 0, 1),
            ],
            Some(&me()),
        );
        let targets: Vec<_> = portfolio
            .transfer_targets(Some(1))
            .iter()
            .filter_map(|a| a.id)
            .collect();
        assert_eq!(targets, vec![2, 3]);

        // Previous target still valid
        assert_eq!(portfolio.resolve_target(Some(3), Some(1)), Some(3));
        // Previous target became the source
        assert_eq!(portfolio.resolve_target(Some(1), Some(1)), Some(2));
        // Previous target no longer ours
        assert_eq!(portfolio.resolve_target(Some(42), Some(2)), Some(1));
    }

    #[test]
    fn test_single_account_has_no_target() {
        let portfolio = Portfolio::for_user(vec![account(1, "CURRENT", 0, 1)], Some(&me()));
        assert!(portfolio.transfer_targets(Some(1)).is_empty());
        assert_eq!(portfolio.resolve_target(None, Some(1)), None);
    }
}
