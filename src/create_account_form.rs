//! The form that creates a new account.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    Error,
    account::AccountService,
    app::{AppHandle, CREATE_ACCOUNT_MODAL},
    ui::Ui,
};

/// The named input fields of a form, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormElement {
    fields: Vec<(String, String)>,
}

impl FormElement {
    /// Create a form with no fields filled in.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field `name` to `value`, replacing any previous value.
    pub fn set_field(&mut self, name: &str, value: &str) {
        if let Some(field) = self.fields.iter_mut().find(|(key, _)| key == name) {
            field.1 = value.to_owned();
        } else {
            self.fields.push((name.to_owned(), value.to_owned()));
        }
    }

    /// The current field values.
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Clear every field.
    pub fn reset(&mut self) {
        self.fields.clear();
    }
}

/// A form controller: one capability, handling its own submission.
#[async_trait]
pub trait FormController {
    /// Submit the form's current field values.
    ///
    /// # Errors
    /// Returns the error of a failed network call.
    async fn submit(&mut self) -> Result<(), Error>;
}

/// The controller of the create-account form inside the
/// [CREATE_ACCOUNT_MODAL] dialog.
pub struct CreateAccountForm {
    element: FormElement,
    accounts: AccountService,
    app: Arc<dyn AppHandle>,
    ui: Arc<dyn Ui>,
}

impl CreateAccountForm {
    /// Bind the form controller to `element`.
    pub fn new(
        element: FormElement,
        accounts: AccountService,
        app: Arc<dyn AppHandle>,
        ui: Arc<dyn Ui>,
    ) -> Self {
        Self {
            element,
            accounts,
            app,
            ui,
        }
    }

    /// The form's input fields, for the shell to fill in before submitting.
    pub fn element_mut(&mut self) -> &mut FormElement {
        &mut self.element
    }
}

#[async_trait]
impl FormController for CreateAccountForm {
    /// Create the account from the form fields.
    ///
    /// On success the hosting modal is closed, the form is reset, and a
    /// global refresh is requested. A `success: false` answer alerts with
    /// the serialized error payload and leaves the form as it was.
    async fn submit(&mut self) -> Result<(), Error> {
        match self.accounts.create(self.element.fields()).await {
            Ok(()) => {
                self.app.close_modal(CREATE_ACCOUNT_MODAL);
                self.element.reset();
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
}


#[cfg(test)]
mod form_element_tests {
    use super::FormElement;

    #[test]
    fn set_field_replaces_existing_value() {
        let mut element = FormElement::new();
        element.set_field("name", "old");
        element.set_field("name", "new");

        assert_eq!(
            element.fields(),
            &[("name".to_owned(), "new".to_owned())]
        );
    }

    #[test]
    fn reset_clears_all_fields() {
        let mut element = FormElement::new();
        element.set_field("name", "a");
        element.set_field("user_id", "1");

        element.reset();

        assert!(element.fields().is_empty());
    }
}
