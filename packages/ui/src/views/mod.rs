mod landing;
pub use landing::Landing;

mod login;
pub use login::Login;

mod create_account;
pub use create_account::CreateAccount;

mod dashboard;
pub use dashboard::Dashboard;

mod account_details;
pub use account_details::AccountDetails;

mod transactions;
pub use transactions::Transactions;

mod savings_benefits;
pub use savings_benefits::SavingsBenefits;
