//! Moneybox is the browser-less client of a personal-finance tracker.
//!
//! The tracker's server is an external HTTP service speaking a
//! `{ success, data?, error? }` JSON envelope with `_method` overrides for
//! PUT and DELETE. This library builds those requests generically per
//! resource type, interprets the two-level success model, keeps the render
//! state of the transactions page, and produces its HTML fragments.

#![warn(missing_docs)]

mod account;
mod app;
mod create_account_form;
mod dates;
mod endpoints;
mod resource;
#[cfg(test)]
mod test_utils;
mod transaction;
mod transactions_page;
mod transport;
mod ui;

pub use account::{Account, AccountId, AccountService, account_service};
pub use app::{AppHandle, CREATE_ACCOUNT_MODAL};
pub use create_account_form::{CreateAccountForm, FormController, FormElement};
pub use dates::format_date;
pub use resource::{ResourceClient, ResourceId};
pub use transaction::{
    Transaction, TransactionId, TransactionKind, TransactionService, transaction_service,
};
pub use transactions_page::{PageElement, RenderOptions, TransactionsPage};
pub use transport::{ApiResponse, HttpTransport, Method, RequestOptions, Transport};
pub use ui::{ConsoleUi, Ui};

/// The errors that may occur in the client.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A page controller was constructed without a backing element.
    #[error("no page element was supplied")]
    MissingPageElement,

    /// The server answered with `success: false`.
    ///
    /// Carries the `error` payload verbatim so callers can show it to the
    /// user. This is an application-level failure: the request itself went
    /// through fine.
    #[error("the server reported a failure: {0}")]
    Api(serde_json::Value),

    /// The request never produced a response (connection refused, DNS
    /// failure, and so on).
    ///
    /// The reqwest error is flattened to a string so the variant stays
    /// comparable in tests.
    #[error("request to {url} failed: {reason}")]
    Transport {
        /// The URL path the request was sent to.
        url: String,
        /// What went wrong, as reported by the HTTP client.
        reason: String,
    },

    /// The response body could not be decoded as the expected JSON shape.
    #[error("could not decode the response from {url}: {reason}")]
    InvalidResponse {
        /// The URL path the request was sent to.
        url: String,
        /// The decoding error.
        reason: String,
    },

    /// A server timestamp did not match the `YYYY-MM-DD HH:MM:SS` layout.
    ///
    /// Callers should pass in the original error as a string and the
    /// timestamp that caused it.
    #[error("could not parse the timestamp \"{1}\": {0}")]
    InvalidDateFormat(String, String),
}
