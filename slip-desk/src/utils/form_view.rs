use shared::models::{ParcelSize, ShipmentForm};
use slip_printer::MarkupBuilder;

use crate::binding::{DisplayValue, FieldBinding, FormGroup, display_value, visible_bindings};

pub const FORM_TITLE: &str = "Generator Potwierdzenia Nadania Poczty Polskiej";
pub const LOCAL_ONLY_NOTICE: &str =
    "Data is processed locally in your browser. No data is sent to any server.";

/// Renders the editable form for the current record
pub struct FormView<'a> {
    form: &'a ShipmentForm,
}

impl<'a> FormView<'a> {
    pub fn new(form: &'a ShipmentForm) -> Self {
        Self { form }
    }

    pub fn render(&self) -> String {
        let mut b = MarkupBuilder::new();
        b.open("form", "postal-form");
        b.element("h1", "form-heading", FORM_TITLE);

        for group in FormGroup::ALL {
            b.open("fieldset", "");
            b.element("legend", "", group.heading());
            for binding in visible_bindings(self.form).filter(|f| f.group == group) {
                self.input(&mut b, binding);
            }
            b.close();
        }

        b.open_attrs("button", &[("type", "button"), ("id", "print-button")]);
        b.text("Print Form");
        b.close();
        b.close();

        b.element("p", "local-notice", LOCAL_ONLY_NOTICE);
        b.build()
    }

    fn input(&self, b: &mut MarkupBuilder, binding: &FieldBinding) {
        let path = binding.path.to_string();
        b.open("div", "form-input");
        match display_value(self.form, binding) {
            DisplayValue::Text(value) => {
                b.open_attrs("label", &[("for", binding.id)]).text(binding.label).close();
                b.void(
                    "input",
                    &[
                        ("type", "text"),
                        ("id", binding.id),
                        ("data-path", path.as_str()),
                        ("value", value),
                    ],
                );
            }
            DisplayValue::Checked(checked) => {
                let flags: &[&str] = if checked { &["checked"] } else { &[] };
                b.void_flags(
                    "input",
                    &[("type", "checkbox"), ("id", binding.id), ("data-path", path.as_str())],
                    flags,
                );
                b.open_attrs("label", &[("for", binding.id)]).text(binding.label).close();
            }
            DisplayValue::Selected(selected) => {
                b.open_attrs("label", &[("for", binding.id)]).text(binding.label).close();
                b.open_attrs("select", &[("id", binding.id), ("data-path", path.as_str())]);
                for size in ParcelSize::ALL {
                    let flags: &[&str] = if size == selected { &["selected"] } else { &[] };
                    b.open_flags("option", &[("value", size.as_str())], flags);
                    b.text(size.as_str());
                    b.close();
                }
                b.close();
            }
        }
        b.close();
    }
}
