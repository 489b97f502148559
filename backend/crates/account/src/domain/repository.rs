//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;
use rust_decimal::Decimal;

use crate::domain::entity::{
    deposit_invoice::{DepositInvoice, NewDepositInvoice},
    user::{NewUser, User},
};
use crate::domain::value_object::email::Email;
use crate::error::AccountResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user; a duplicate email is `AccountError::EmailTaken`
    async fn create(&self, user: &NewUser) -> AccountResult<User>;

    async fn find_by_id(&self, user_id: UserId) -> AccountResult<Option<User>>;

    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<User>>;

    async fn exists_by_email(&self, email: &Email) -> AccountResult<bool>;

    /// Atomically add `amount` to the balance and record the invoice
    ///
    /// Both writes happen in one transaction. Returns the updated user, or
    /// `AccountError::UserNotFound` if the user vanished in the meantime.
    async fn credit_deposit(
        &self,
        user_id: UserId,
        amount: Decimal,
        invoice: &NewDepositInvoice,
    ) -> AccountResult<(User, DepositInvoice)>;
}
