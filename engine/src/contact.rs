//! Contact-form submission flow.

use folio_relay::{RelayClient, RelayError, RelayResponse};
use folio_types::ui::{ContactForm, NotificationCenter, NotificationKind, SubmitButton};

pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";

/// Submit `form` through `relay`.
///
/// The button shows the sending state for the duration of the request and is
/// restored whatever the outcome. On success the form is cleared; either way
/// one notification reports the result.
pub async fn submit_contact_form(
    relay: &RelayClient,
    form: &mut ContactForm,
    button: &mut SubmitButton,
    notifications: &mut NotificationCenter,
) -> Result<RelayResponse, RelayError> {
    button.begin_sending();
    let result = relay.submit(form.entries()).await;
    button.restore();

    match &result {
        Ok(_) => {
            notifications.show(SUCCESS_MESSAGE, NotificationKind::Success);
            form.reset();
        }
        Err(err) => {
            tracing::error!(
                error = %err,
                relay_message = err.relay_message().unwrap_or(""),
                "Contact form submission failed"
            );
            notifications.show(FAILURE_MESSAGE, NotificationKind::Error);
        }
    }
    result
}
