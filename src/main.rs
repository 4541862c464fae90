//! An interactive shell driving the moneybox client against a running
//! tracker server.

use std::{
    io::{self, BufRead, Write},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use clap::Parser;
use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use moneybox::{
    AppHandle, ConsoleUi, CreateAccountForm, FormController, FormElement, HttpTransport,
    PageElement, RenderOptions, TransactionsPage, Ui, account_service, transaction_service,
};

/// The interactive client for the moneybox finance tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The origin of the tracker server, e.g. http://localhost:8000.
    #[arg(long, default_value = "http://localhost:8000")]
    server: String,
}

/// The shell's stand-in for the surrounding application: mutations set a
/// refresh flag that the command loop drains after each command.
#[derive(Default)]
struct ShellApp {
    update_requested: AtomicBool,
}

impl ShellApp {
    fn take_update_request(&self) -> bool {
        self.update_requested.swap(false, Ordering::Relaxed)
    }
}

impl AppHandle for ShellApp {
    fn update(&self) {
        self.update_requested.store(true, Ordering::Relaxed);
    }

    fn close_modal(&self, name: &str) {
        // There are no modal dialogs in a terminal.
        tracing::debug!("modal {name} closed");
    }
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();
    let transport = Arc::new(HttpTransport::new(&args.server));
    let app = Arc::new(ShellApp::default());
    let ui = Arc::new(ConsoleUi);

    let accounts = account_service(transport.clone());
    let mut page = match TransactionsPage::new(
        Some(PageElement::new()),
        account_service(transport.clone()),
        transaction_service(transport.clone()),
        app.clone(),
        ui.clone(),
    ) {
        Ok(page) => page,
        Err(error) => {
            tracing::error!("could not construct the transactions page: {error}");
            return;
        }
    };
    let mut form = CreateAccountForm::new(
        FormElement::new(),
        account_service(transport),
        app.clone(),
        ui.clone(),
    );

    tracing::info!("connected to {}", args.server);
    print_help();

    let stdin = io::stdin();
    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(error) => {
                tracing::error!("could not read the command: {error}");
                break;
            }
        }

        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or("");
        let argument = words.next();

        let result = match (command, argument) {
            ("accounts", _) => {
                match accounts.list(&[]).await {
                    Ok(listed) => {
                        for account in &listed {
                            println!("  {:>4}  {}", account.id, account.name);
                        }
                        Ok(())
                    }
                    Err(moneybox::Error::Api(error)) => {
                        ui.alert(&error.to_string());
                        Ok(())
                    }
                    Err(error) => Err(error),
                }
            }
            ("open", Some(id)) => match id.parse() {
                Ok(account_id) => {
                    let rendered = page.render(Some(RenderOptions { account_id })).await;
                    if rendered.is_ok() {
                        print_page(&page);
                    }
                    rendered
                }
                Err(_) => {
                    println!("'{id}' is not an account id");
                    Ok(())
                }
            },
            ("create", Some(name)) => {
                form.element_mut().set_field("name", name);
                form.submit().await
            }
            ("rm-account", _) => page.remove_account().await,
            ("rm-tx", Some(id)) => match id.parse() {
                Ok(transaction_id) => page.remove_transaction(transaction_id).await,
                Err(_) => {
                    println!("'{id}' is not a transaction id");
                    Ok(())
                }
            },
            ("help", _) => {
                print_help();
                Ok(())
            }
            ("quit", _) | ("exit", _) => break,
            ("", _) => Ok(()),
            (unknown, _) => {
                println!("unknown command '{unknown}', try 'help'");
                Ok(())
            }
        };

        if let Err(error) = result {
            tracing::error!("{error}");
            continue;
        }

        // A mutation elsewhere asked the app to refresh; replay far enough
        // to show the transactions page's latest state.
        if app.take_update_request() {
            match page.update().await {
                Ok(()) => print_page(&page),
                Err(error) => tracing::error!("could not refresh the page: {error}"),
            }
        }
    }
}

fn print_page(page: &TransactionsPage) {
    println!("== {} ==", page.element().title());
    let content = page.element().content_html();
    if content.is_empty() {
        println!("(нет транзакций)");
    } else {
        println!("{content}");
    }
}

fn print_help() {
    println!("commands:");
    println!("  accounts          list all accounts");
    println!("  open <id>         show the transactions of an account");
    println!("  create <name>     create a new account");
    println!("  rm-account        delete the currently open account");
    println!("  rm-tx <id>        delete one transaction");
    println!("  quit              leave the shell");
}

fn setup_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer().pretty().with_filter(
                filter::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| filter::EnvFilter::new("info")),
            ),
        )
        .init();
}
