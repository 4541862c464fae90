//! The page that displays the incomes and expenses of one account.
//!
//! The page re-fetches the account and its transaction list on every
//! render and keeps the options of the last render so a global refresh can
//! replay them. Renders are not guarded against overlap; the last chain to
//! finish wins, as in any single-page client.

use std::sync::Arc;

use maud::{Markup, html};

use crate::{
    Error,
    account::{AccountId, AccountService},
    app::AppHandle,
    dates::format_date_or_raw,
    transaction::{Transaction, TransactionId, TransactionService},
    ui::Ui,
};

/// The title shown when no account is selected.
const DEFAULT_TITLE: &str = "Название счёта";

const CONFIRM_REMOVE_ACCOUNT: &str = "Вы действительно хотите удалить счёт?";
const CONFIRM_REMOVE_TRANSACTION: &str = "Вы действительно хотите удалить эту транзакцию?";

/// The render target of a [TransactionsPage]: a title line and the HTML
/// of the transaction rows.
#[derive(Debug, Clone, PartialEq)]
pub struct PageElement {
    title: String,
    content: String,
}

impl PageElement {
    /// Create an empty element showing the default title.
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            content: String::new(),
        }
    }

    /// The current title text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The rendered transaction rows, one HTML fragment per transaction.
    pub fn content_html(&self) -> &str {
        &self.content
    }
}

impl Default for PageElement {
    fn default() -> Self {
        Self::new()
    }
}

/// The parameters of a render, replayed on [TransactionsPage::update].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// The account whose transactions the page shows.
    pub account_id: AccountId,
}

impl RenderOptions {
    fn as_query(&self) -> Vec<(String, String)> {
        vec![("account_id".to_owned(), self.account_id.to_string())]
    }
}

/// The controller binding one [PageElement] to account and transaction
/// fetching.
///
/// Application-level failures (`success: false`) are surfaced through the
/// injected [Ui] as alerts and abort the running call chain; transport
/// failures are returned to the caller.
pub struct TransactionsPage {
    element: PageElement,
    last_options: Option<RenderOptions>,
    accounts: AccountService,
    transactions: TransactionService,
    app: Arc<dyn AppHandle>,
    ui: Arc<dyn Ui>,
}

impl TransactionsPage {
    /// Bind the page to `element`.
    ///
    /// # Errors
    /// Returns [Error::MissingPageElement] if no element is supplied.
    pub fn new(
        element: Option<PageElement>,
        accounts: AccountService,
        transactions: TransactionService,
        app: Arc<dyn AppHandle>,
        ui: Arc<dyn Ui>,
    ) -> Result<Self, Error> {
        let element = element.ok_or(Error::MissingPageElement)?;

        Ok(Self {
            element,
            last_options: None,
            accounts,
            transactions,
            app,
            ui,
        })
    }

    /// The page's render target.
    pub fn element(&self) -> &PageElement {
        &self.element
    }

    /// Fetch the account named in `options` and its transactions, and
    /// render the title and rows.
    ///
    /// Does nothing when `options` is `None`. A `success: false` answer at
    /// either step alerts with the serialized error payload and stops the
    /// chain without touching what was rendered after it.
    ///
    /// # Errors
    /// Returns the error of a failed network call.
    pub async fn render(&mut self, options: Option<RenderOptions>) -> Result<(), Error> {
        let Some(options) = options else {
            return Ok(());
        };

        let query = options.as_query();
        self.last_options = Some(options.clone());

        let account = match self.accounts.get(options.account_id, &query).await {
            Ok(account) => account,
            Err(Error::Api(error)) => {
                self.ui.alert(&error.to_string());
                return Ok(());
            }
            Err(error) => return Err(error),
        };
        self.render_title(&account.name);

        let transactions = match self.transactions.list(&query).await {
            Ok(transactions) => transactions,
            Err(Error::Api(error)) => {
                self.ui.alert(&error.to_string());
                return Ok(());
            }
            Err(error) => return Err(error),
        };
        self.render_transactions(&transactions);

        Ok(())
    }

    /// Replay the last render, if there was one.
    ///
    /// # Errors
    /// Returns the error of a failed network call.
    pub async fn update(&mut self) -> Result<(), Error> {
        let options = self.last_options.clone();
        self.render(options).await
    }

    /// Delete the currently shown account after a confirmation prompt.
    ///
    /// Does nothing when no account has been rendered yet or the user
    /// declines. On success the page is cleared and a global refresh is
    /// requested; a `success: false` answer alerts instead.
    ///
    /// # Errors
    /// Returns the error of a failed network call.
    pub async fn remove_account(&mut self) -> Result<(), Error> {
        let Some(options) = self.last_options.clone() else {
            return Ok(());
        };

        if !self.ui.confirm(CONFIRM_REMOVE_ACCOUNT) {
            return Ok(());
        }

        match self.accounts.remove(options.account_id, &[]).await {
            Ok(()) => {
                self.clear();
                self.app.update();
                Ok(())
            }
            Err(Error::Api(error)) => {
                self.ui.alert(&error.to_string());
                Ok(())
            }
            Err(error) => Err(error),
        }
    }

    /// Delete one transaction after a confirmation prompt.
    ///
    /// On success a global refresh is requested; this page itself is not
    /// re-rendered locally.
    ///
    /// # Errors
    /// Returns the error of a failed network call.
    pub async fn remove_transaction(&mut self, id: TransactionId) -> Result<(), Error> {
        if !self.ui.confirm(CONFIRM_REMOVE_TRANSACTION) {
            return Ok(());
        }

        match self.transactions.remove(id, &[]).await {
            Ok(()) => {
                self.app.update();
                Ok(())
            }
            Err(Error::Api(error)) => {
                self.ui.alert(&error.to_string());
                Ok(())
            }
            Err(error) => Err(error),
        }
    }

    /// Reset the page: empty transaction list, default title, and no
    /// options left to replay.
    pub fn clear(&mut self) {
        self.render_transactions(&[]);
        self.render_title(DEFAULT_TITLE);
        self.last_options = None;
    }

    fn render_title(&mut self, name: &str) {
        self.element.title = name.to_owned();
    }

    fn render_transactions(&mut self, transactions: &[Transaction]) {
        self.element.content = transactions
            .iter()
            .map(|transaction| transaction_html(transaction).into_string())
            .collect();
    }
}

/// The HTML fragment for one transaction row.
///
/// The `transaction__remove` button carries the transaction ID in its
/// `data-id` attribute for deletion targeting.
fn transaction_html(transaction: &Transaction) -> Markup {
    html! {
        div class={ "transaction " (transaction.kind.css_modifier()) " row" } {
            div class="col-md-7 transaction__details" {
                div class="transaction__icon" {
                    span class="fa fa-money fa-2x" {}
                }
                div class="transaction__info" {
                    h4 class="transaction__title" { (transaction.name) }
                    div class="transaction__date" {
                        (format_date_or_raw(&transaction.created_at))
                    }
                }
            }
            div class="col-md-3" {
                div class="transaction__summ" {
                    (transaction.sum)
                    span class="currency" { "₽" }
                }
            }
            div class="col-md-2 transaction__controls" {
                button class="btn btn-danger transaction__remove" data-id=(transaction.id) {
                    i class="fa fa-trash" {}
                }
            }
        }
    }
}

#[cfg(test)]
mod construction_tests {
    use std::sync::Arc;

    use super::{PageElement, TransactionsPage};
    use crate::{
        Error,
        account::account_service,
        test_utils::{FakeApp, FakeTransport, FakeUi},
        transaction::transaction_service,
    };

    #[test]
    fn fails_without_element() {
        let transport = Arc::new(FakeTransport::new());

        let got = TransactionsPage::new(
            None,
            account_service(transport.clone()),
            transaction_service(transport),
            Arc::new(FakeApp::default()),
            Arc::new(FakeUi::answering(true)),
        );

        assert!(matches!(got, Err(Error::MissingPageElement)));
    }

    #[test]
    fn binds_to_supplied_element() {
        let transport = Arc::new(FakeTransport::new());

        let got = TransactionsPage::new(
            Some(PageElement::new()),
            account_service(transport.clone()),
            transaction_service(transport),
            Arc::new(FakeApp::default()),
            Arc::new(FakeUi::answering(true)),
        );

        let page = got.expect("construction with an element should succeed");
        assert_eq!(page.element().title(), "Название счёта");
        assert_eq!(page.element().content_html(), "");
    }
}
