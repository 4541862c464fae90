//! The transaction view model and its REST service.

use std::sync::Arc;

use serde::Deserialize;

use crate::{
    account::AccountId,
    endpoints,
    resource::{ResourceClient, ResourceId},
    transport::Transport,
};

/// Alias for the integer type used for transaction IDs.
pub type TransactionId = ResourceId;

/// Whether a transaction put money into the account or took it out.
///
/// Drives the visual variant of the rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money earned.
    Income,
    /// Money spent.
    Expense,
}

impl TransactionKind {
    /// The CSS modifier class selecting the income or expense styling.
    pub fn css_modifier(self) -> &'static str {
        match self {
            TransactionKind::Income => "transaction_income",
            TransactionKind::Expense => "transaction_expense",
        }
    }
}

/// An income or expense as the server sends it.
///
/// Taken verbatim from the response JSON, including the raw `created_at`
/// timestamp string; formatting happens only at render time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// Income or expense. Named `type` on the wire.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// A short description of the transaction.
    pub name: String,
    /// The amount of money that moved.
    pub sum: f64,
    /// When the transaction happened, as `YYYY-MM-DD HH:MM:SS`.
    pub created_at: String,
    /// The ID of the account the transaction belongs to.
    pub account_id: AccountId,
}

/// The REST client for transactions.
pub type TransactionService = ResourceClient<Transaction>;

/// Create the [TransactionService] on top of `transport`.
pub fn transaction_service(transport: Arc<dyn Transport>) -> TransactionService {
    ResourceClient::new(endpoints::TRANSACTIONS, transport)
}

#[cfg(test)]
mod deserialization_tests {
    use serde_json::json;

    use super::{Transaction, TransactionKind};

    #[test]
    fn decodes_wire_shape() {
        let payload = json!({
            "id": 23,
            "type": "expense",
            "name": "Квартплата",
            "sum": 5000.5,
            "created_at": "2019-03-10 03:20:41",
            "account_id": 7,
        });

        let got: Transaction =
            serde_json::from_value(payload).expect("could not decode transaction");

        assert_eq!(
            got,
            Transaction {
                id: 23,
                kind: TransactionKind::Expense,
                name: "Квартплата".to_owned(),
                sum: 5000.5,
                created_at: "2019-03-10 03:20:41".to_owned(),
                account_id: 7,
            }
        );
    }

    #[test]
    fn kind_selects_css_modifier() {
        assert_eq!(TransactionKind::Income.css_modifier(), "transaction_income");
        assert_eq!(
            TransactionKind::Expense.css_modifier(),
            "transaction_expense"
        );
    }
}
