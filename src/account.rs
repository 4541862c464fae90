//! The account view model and its REST service.

use std::sync::Arc;

use serde::Deserialize;

use crate::{
    endpoints,
    resource::{ResourceClient, ResourceId},
    transport::Transport,
};

/// Alias for the integer type used for account IDs.
pub type AccountId = ResourceId;

/// An account as the server sends it, e.g. a wallet or a bank card.
///
/// Taken verbatim from the response JSON; the client never mutates or
/// validates it. Fields beyond these two are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Account {
    /// The ID of the account.
    pub id: AccountId,
    /// The display name of the account.
    pub name: String,
}

/// The REST client for accounts.
pub type AccountService = ResourceClient<Account>;

/// Create the [AccountService] on top of `transport`.
pub fn account_service(transport: Arc<dyn Transport>) -> AccountService {
    ResourceClient::new(endpoints::ACCOUNTS, transport)
}
