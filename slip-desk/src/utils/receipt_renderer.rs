use shared::models::{Address, Notification, ParcelSize, ShipmentForm};
use slip_printer::MarkupBuilder;

/// Renders the "POTWIERDZENIE NADANIA" posting slip
pub struct ReceiptRenderer<'a> {
    form: &'a ShipmentForm,
    logo_url: &'a str,
}

impl<'a> ReceiptRenderer<'a> {
    pub fn new(form: &'a ShipmentForm, logo_url: &'a str) -> Self {
        Self { form, logo_url }
    }

    pub fn render(&self) -> String {
        let mut b = MarkupBuilder::new();
        b.open("div", "form-container");

        b.open("div", "logo");
        b.void("img", &[("src", self.logo_url), ("alt", "Poczta Polska")]);
        b.close();
        b.element("div", "form-title", "POTWIERDZENIE NADANIA");

        b.open("div", "form-row tracking-number-line");
        b.element("span", "", "Przesyłki poleconej nr:");
        b.dotted_line(&self.form.tracking_number);
        b.close();

        // ── Sender ──
        b.open("div", "form-row");
        b.element("div", "section-title", "NADAWCA:");
        Self::address(&mut b, &self.form.sender);
        b.close();
        Self::notification(
            &mut b,
            &self.form.sender_notification,
            "Potwierdzenie doręczenia albo zwrotu dla nadawcy",
        );

        // ── Recipient ──
        b.open("div", "form-row");
        b.element("div", "section-title", "ADRESAT:");
        Self::address(&mut b, &self.form.recipient.address);
        b.open("div", "country-field");
        b.form_field(&self.form.recipient.country);
        b.caption("Kraj");
        b.close();
        b.close();
        Self::notification(&mut b, &self.form.recipient_notification, "Awizo dla adresata");

        // ── Options ──
        let options = &self.form.options;
        b.open("div", "form-row");
        b.checkbox(options.delivery_confirmation).text("Potwierdzenie odbioru");
        b.open("span", "option-gap").close();
        b.checkbox(options.priority).text("Priorytetowa");
        b.close();

        b.open("div", "form-row size-row");
        for size in ParcelSize::ALL {
            b.open("div", "size-option");
            b.checkbox(options.size == size);
            b.element("span", "", size.as_str());
            b.close();
        }
        b.element("span", "", "Format");
        b.close();

        // ── Mass / fee / stamp ──
        b.open("div", "bottom-row");
        b.open("div", "");
        b.element("span", "", "Masa").measurement_box();
        b.element("span", "", "kg").measurement_box();
        b.element("span", "", "g");
        b.close();
        b.open("div", "");
        b.element("span", "", "Opłata").measurement_box();
        b.element("span", "", "zł").measurement_box();
        b.element("span", "", "gr");
        b.close();
        b.open("div", "stamp-circle").close();
        b.close();

        b.open("div", "footer");
        b.open("span", "").text("PP S.A. nr ").element("span", "bold", "11").close();
        b.element("span", "", "Wydział Poligrafii OI Wrocław 2024");
        b.close();

        b.build()
    }

    fn address(b: &mut MarkupBuilder, address: &Address) {
        b.form_field(&address.name);
        b.form_field(&address.address_line1);
        if let Some(line2) = address.second_line() {
            b.form_field(line2);
        }
        b.open("div", "postal-details");
        b.open("div", "");
        b.open("div", "form-field");
        b.element("span", "postal-code", &address.postal_code);
        b.close();
        b.caption("Kod pocztowy");
        b.close();
        b.open("div", "");
        b.form_field(&address.city);
        b.caption("Miejscowość");
        b.close();
        b.close();
    }

    fn notification(b: &mut MarkupBuilder, notification: &Notification, label: &str) {
        b.open("div", "notification-box");
        b.open("div", "form-row");
        b.checkbox(notification.enabled).text(label);
        b.close();
        b.open("div", "form-row notification-section");
        b.element("span", "", "SMS/E-MAIL:");
        b.dotted_line(notification.visible_contact());
        b.close();
        b.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::form::{AddressField, Edit, FlagPath, FormStore, TextPath};

    fn render(store: &FormStore) -> String {
        ReceiptRenderer::new(&store.snapshot(), "/logo.svg").render()
    }

    /// Markup between the first occurrence of `start` and the next `end`
    fn between<'a>(html: &'a str, start: &str, end: &str) -> &'a str {
        let from = html.find(start).unwrap() + start.len();
        let to = from + html[from..].find(end).unwrap();
        &html[from..to]
    }

    #[test]
    fn test_blank_form_renders_fixed_furniture() {
        let html = render(&FormStore::new());
        assert!(html.starts_with(r#"<div class="form-container">"#));
        assert!(html.contains(r#"<img src="/logo.svg" alt="Poczta Polska">"#));
        assert!(html.contains("POTWIERDZENIE NADANIA"));
        assert!(html.contains("NADAWCA:"));
        assert!(html.contains("ADRESAT:"));
        assert!(html.contains("Awizo dla adresata"));
        assert!(html.contains("Wydział Poligrafii OI Wrocław 2024"));
        assert_eq!(html.matches(r#"class="measurement-box""#).count(), 4);
        // only the default size box is ticked
        assert_eq!(html.matches("checkbox checked").count(), 1);
    }

    #[test]
    fn test_sender_block_and_blank_contact() {
        let mut store = FormStore::new();
        store.update(Edit::Text(TextPath::Sender(AddressField::Name), "Jan Kowalski".into()));
        store.update(Edit::Text(TextPath::Sender(AddressField::PostalCode), "00-001".into()));
        store.update(Edit::Text(TextPath::SenderContact, "jan@example.pl".into()));
        let html = render(&store);

        let sender = between(&html, "NADAWCA:", "notification-box");
        assert!(sender.contains(r#"<div class="form-field">Jan Kowalski</div>"#));
        assert!(sender.contains(r#"<span class="postal-code">00-001</span>"#));

        let contact = between(&html, "SMS/E-MAIL:</span>", "</div>");
        assert_eq!(contact, r#"<div class="dotted-line">"#);
        assert!(!html.contains("jan@example.pl"));
    }

    #[test]
    fn test_recipient_contact_follows_enabled_flag() {
        let mut store = FormStore::new();
        store.update(Edit::Flag(FlagPath::RecipientNotification, true));
        store.update(Edit::Text(TextPath::RecipientContact, "555-123-456".into()));
        let html = render(&store);
        let recipient_box = &html[html.find("Awizo dla adresata").unwrap()..];
        assert!(recipient_box.contains(r#"<div class="dotted-line">555-123-456</div>"#));

        store.update(Edit::Flag(FlagPath::RecipientNotification, false));
        let html = render(&store);
        assert!(!html.contains("555-123-456"));
        assert_eq!(store.snapshot().recipient_notification.contact, "555-123-456");
    }

    #[test]
    fn test_second_address_line_only_when_present() {
        let mut store = FormStore::new();
        let before = render(&store).matches(r#"class="form-field""#).count();
        store.update(Edit::Text(TextPath::Recipient(AddressField::AddressLine2), "m. 4".into()));
        let html = render(&store);
        assert_eq!(html.matches(r#"class="form-field""#).count(), before + 1);
        assert!(html.contains(r#"<div class="form-field">m. 4</div>"#));
    }

    #[test]
    fn test_options_and_size_ticks() {
        let mut store = FormStore::new();
        store.update(Edit::Flag(FlagPath::Priority, true));
        store.update(Edit::Size(ParcelSize::S));
        let html = render(&store);

        assert!(html.contains(r#"<span class="checkbox"></span>Potwierdzenie odbioru"#));
        assert!(html.contains(r#"<span class="checkbox checked"></span>Priorytetowa"#));
        assert!(html.contains(
            r#"<div class="size-option"><span class="checkbox checked"></span><span>S</span></div>"#
        ));
        assert!(html.contains(
            r#"<div class="size-option"><span class="checkbox"></span><span>M</span></div>"#
        ));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut store = FormStore::new();
        store.update(Edit::Text(TextPath::TrackingNumber, "<script>".into()));
        let html = render(&store);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
