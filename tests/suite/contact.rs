//! Contact-form submission against a mock relay

use std::time::Duration;

use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use folio_engine::{
    FAILURE_MESSAGE, RelayError, SUCCESS_MESSAGE, SiteController, SiteEvent, Theme,
    ThemeController, submit_contact_form,
};
use folio_types::ui::{
    AUTO_DISMISS_AFTER, ContactForm, NotificationCenter, NotificationKind, SLIDE_OUT,
    SubmitButton,
};

use crate::common::{
    SUBMIT_PATH, TEST_ACCESS_KEY, mount_relay_reply, mount_relay_success, relay_client,
    start_relay_mock,
};

fn filled_form() -> ContactForm {
    ContactForm::new()
        .with_field("name", "Ada Lovelace")
        .with_field("email", "ada@example.com")
        .with_field("message", "Let's build an engine")
}

#[tokio::test]
async fn posts_every_field_and_the_access_key() {
    let server = start_relay_mock().await;
    Mock::given(method("POST"))
        .and(path(SUBMIT_PATH))
        .and(header("accept", "application/json"))
        .and(body_string_contains("Ada Lovelace"))
        .and(body_string_contains("ada@example.com"))
        .and(body_string_contains(TEST_ACCESS_KEY))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "success": true, "message": "ok" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut form = filled_form();
    let mut button = SubmitButton::new("Send Message");
    let mut notifications = NotificationCenter::default();

    let relay = relay_client(&server);

    submit_contact_form(&relay, &mut form, &mut button, &mut notifications)
        .await
        .unwrap();

    assert!(form.entries().all(|(_, value)| value.is_empty()));
    assert!(form.field("name").is_some_and(|field| !field.has_value()));
}

#[tokio::test]
async fn site_controller_reports_success_then_auto_dismisses() {
    let server = start_relay_mock().await;
    mount_relay_success(&server).await;

    let mut site = SiteController::new(ThemeController::init(None, Theme::Default))
        .with_contact_form(filled_form(), SubmitButton::new("Send Message"));

    let reply = site.submit_contact(&relay_client(&server)).await.unwrap();
    assert!(reply.success);
    assert_eq!(site.submit_button().label(), "Send Message");

    let toast = site.notifications().current().unwrap();
    assert_eq!(toast.message(), SUCCESS_MESSAGE);
    assert_eq!(toast.kind(), NotificationKind::Success);

    site.handle(SiteEvent::Elapsed(AUTO_DISMISS_AFTER));
    assert!(site.notifications().current().unwrap().is_leaving());
    site.handle(SiteEvent::Elapsed(SLIDE_OUT));
    assert!(site.notifications().current().is_none());
}

#[tokio::test]
async fn non_200_status_is_a_failure() {
    let server = start_relay_mock().await;
    mount_relay_reply(
        &server,
        403,
        serde_json::json!({ "success": false, "message": "Access key is invalid" }),
    )
    .await;

    let mut form = filled_form();
    let mut button = SubmitButton::new("Send Message");
    let mut notifications = NotificationCenter::default();

    let relay = relay_client(&server);

    let err = submit_contact_form(&relay, &mut form, &mut button, &mut notifications)
        .await
        .unwrap_err();

    assert!(matches!(err, RelayError::Rejected { status: 403, .. }));
    assert_eq!(err.relay_message(), Some("Access key is invalid"));
    assert!(!button.is_disabled());
    assert!((button.opacity() - 1.0).abs() < f32::EPSILON);
    assert_eq!(
        form.field("email").map(|f| f.value()),
        Some("ada@example.com")
    );
    assert_eq!(
        notifications.current().map(|n| n.message()),
        Some(FAILURE_MESSAGE)
    );
}

#[tokio::test]
async fn undecodable_reply_is_a_failure_even_on_200() {
    let server = start_relay_mock().await;
    Mock::given(method("POST"))
        .and(path(SUBMIT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let mut site = SiteController::new(ThemeController::init(None, Theme::Default))
        .with_contact_form(filled_form(), SubmitButton::new("Send"));

    let err = site
        .submit_contact(&relay_client(&server))
        .await
        .unwrap_err();
    assert!(matches!(err, RelayError::Decode { status: 200, .. }));
    assert!(site.form().field("name").is_some_and(|f| f.has_value()));

    let toast = site.notifications().current().unwrap();
    assert_eq!(toast.kind(), NotificationKind::Error);

    site.handle(SiteEvent::NotificationClosed);
    site.handle(SiteEvent::Elapsed(Duration::from_millis(300)));
    assert!(site.notifications().current().is_none());
}
