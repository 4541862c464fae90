//! The hooks a page or form uses to reach the surrounding application.

/// The name of the modal dialog hosting the create-account form.
pub const CREATE_ACCOUNT_MODAL: &str = "createAccount";

/// What a page or form controller may ask of the application shell.
///
/// Mutations do not re-render locally; they request a refresh here and the
/// shell replays each page's last render. Injected so tests can record the
/// calls.
pub trait AppHandle: Send + Sync {
    /// Request a refresh of every visible widget.
    fn update(&self);

    /// Close the modal dialog named `name`, e.g. [CREATE_ACCOUNT_MODAL].
    fn close_modal(&self, name: &str);
}
