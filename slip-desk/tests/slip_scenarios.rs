//! End-to-end scenarios: edits through the binding layer, slip rendering and
//! print export against the in-memory host.

use std::time::Duration;

use slip_desk::Session;
use slip_desk::binding::InputEvent;
use slip_desk::core::{FORM_ROOT, PRINTABLE_ROOT};
use slip_printer::{MemoryHost, PrintError, ReceiptSource, SurfaceEvent};

fn type_into(session: &mut Session, id: &str, text: &str) {
    session.handle_input(id, InputEvent::Input(text.to_string())).unwrap();
}

fn toggle(session: &mut Session, id: &str, checked: bool) {
    session.handle_input(id, InputEvent::Toggle(checked)).unwrap();
}

/// Slip markup from `marker` up to the end of its notification box
fn block_after<'a>(slip: &'a str, marker: &str) -> &'a str {
    let start = slip.find(marker).unwrap();
    let rest = &slip[start..];
    let end = rest.find("</div></div></div>").map_or(rest.len(), |i| i + 18);
    &rest[..end]
}

#[test]
fn test_sender_details_without_notification() {
    let mut session = Session::new("/logo.svg");
    type_into(&mut session, "sender-name", "Jan Kowalski");
    type_into(&mut session, "sender-postal-code", "00-001");

    let slip = session.receipt_markup().unwrap();
    let sender = block_after(slip, "NADAWCA:");
    assert!(sender.contains("Jan Kowalski"));
    assert!(sender.contains("00-001"));

    let notification = block_after(slip, "Potwierdzenie doręczenia albo zwrotu dla nadawcy");
    assert!(notification.contains(r#"<div class="dotted-line"></div>"#));
    assert!(!session.form().sender_notification.enabled);
}

#[test]
fn test_recipient_notification_line_follows_toggle() {
    let mut session = Session::new("/logo.svg");
    toggle(&mut session, "recipient-notification", true);
    type_into(&mut session, "recipient-contact", "555-123-456");

    let line = block_after(session.receipt_markup().unwrap(), "Awizo dla adresata");
    assert!(line.contains(r#"<div class="dotted-line">555-123-456</div>"#));

    toggle(&mut session, "recipient-notification", false);
    let line = block_after(session.receipt_markup().unwrap(), "Awizo dla adresata");
    assert!(line.contains(r#"<div class="dotted-line"></div>"#));
    assert_eq!(session.form().recipient_notification.contact, "555-123-456");

    // hidden input on the form, value restored once re-enabled
    let editor = session.document().element_inner_html(FORM_ROOT).unwrap();
    assert!(!editor.contains("recipient-contact"));
    toggle(&mut session, "recipient-notification", true);
    let editor = session.document().element_inner_html(FORM_ROOT).unwrap();
    assert!(editor.contains(concat!(
        r#"id="recipient-contact" data-path="recipientNotification.contact" "#,
        r#"value="555-123-456""#,
    )));
}

#[tokio::test(start_paused = true)]
async fn test_export_carries_stylesheet_and_tracking_number() {
    let mut session = Session::new("/logo.svg");
    type_into(&mut session, "tracking-number", "RR123456789PL");

    let host = MemoryHost::new();
    let report = session.print(&host, Duration::from_millis(250)).await.unwrap();

    let printed = host.printed();
    assert_eq!(printed.len(), 1);
    assert_eq!(printed[0].name, report.surface_name);
    assert!(printed[0].document.contains(session.stylesheet()));
    assert!(printed[0].document.contains("RR123456789PL"));
    assert!(printed[0].document.contains(session.receipt_markup().unwrap()));

    let events: Vec<_> = host.events().into_iter().map(|(_, e)| e).collect();
    assert_eq!(events.first(), Some(&SurfaceEvent::Opened));
    assert_eq!(events.last(), Some(&SurfaceEvent::Closed));
}

#[tokio::test]
async fn test_export_outcomes_when_nothing_can_print() {
    let mut session = Session::new("/logo.svg");

    let blocked = MemoryHost::blocked();
    let err = session.print(&blocked, Duration::ZERO).await.unwrap_err();
    assert!(matches!(err, PrintError::SurfaceBlocked(_)));

    session.document_mut().unmount(PRINTABLE_ROOT);
    let host = MemoryHost::new();
    let err = session.print(&host, Duration::ZERO).await.unwrap_err();
    assert!(matches!(err, PrintError::TargetMissing(_)));
    assert_eq!(host.operation_count(), 0);
}
