//! Field binding layer
//!
//! Maps every visible input of the editable form to a leaf of the shipment
//! record, reads the value it displays and turns user events into edits.

use shared::form::{AddressField, Edit, FieldPath, FlagPath, TextPath};
use shared::models::{ParcelSize, ShipmentForm};
use thiserror::Error;

/// Input widget used for a binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Checkbox,
    Choice,
}

/// Visual group an input belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormGroup {
    Shipment,
    Sender,
    Recipient,
    Options,
}

impl FormGroup {
    pub const ALL: [FormGroup; 4] = [
        FormGroup::Shipment,
        FormGroup::Sender,
        FormGroup::Recipient,
        FormGroup::Options,
    ];

    pub fn heading(&self) -> &'static str {
        match self {
            Self::Shipment => "Przesyłka",
            Self::Sender => "Dane nadawcy",
            Self::Recipient => "Dane adresata",
            Self::Options => "Opcje przesyłki",
        }
    }
}

/// One input of the editable form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldBinding {
    /// Element id of the input
    pub id: &'static str,
    pub label: &'static str,
    pub group: FormGroup,
    pub path: FieldPath,
    /// Input is only shown while this flag is set
    pub visible_when: Option<FlagPath>,
}

impl FieldBinding {
    const fn text(id: &'static str, label: &'static str, group: FormGroup, path: TextPath) -> Self {
        Self {
            id,
            label,
            group,
            path: FieldPath::Text(path),
            visible_when: None,
        }
    }

    const fn flag(id: &'static str, label: &'static str, group: FormGroup, path: FlagPath) -> Self {
        Self {
            id,
            label,
            group,
            path: FieldPath::Flag(path),
            visible_when: None,
        }
    }

    const fn shown_when(mut self, flag: FlagPath) -> Self {
        self.visible_when = Some(flag);
        self
    }

    pub fn input(&self) -> InputKind {
        match self.path {
            FieldPath::Text(_) => InputKind::Text,
            FieldPath::Flag(_) => InputKind::Checkbox,
            FieldPath::Size => InputKind::Choice,
        }
    }
}

/// Every input of the editable form, in display order
pub const FORM_BINDINGS: &[FieldBinding] = &[
    FieldBinding::text(
        "tracking-number",
        "Przesyłki poleconej nr",
        FormGroup::Shipment,
        TextPath::TrackingNumber,
    ),
    FieldBinding::text(
        "sender-name",
        "Name",
        FormGroup::Sender,
        TextPath::Sender(AddressField::Name),
    ),
    FieldBinding::text(
        "sender-address-line1",
        "Address Line 1",
        FormGroup::Sender,
        TextPath::Sender(AddressField::AddressLine1),
    ),
    FieldBinding::text(
        "sender-address-line2",
        "Address Line 2 (Optional)",
        FormGroup::Sender,
        TextPath::Sender(AddressField::AddressLine2),
    ),
    FieldBinding::text(
        "sender-postal-code",
        "Postal Code",
        FormGroup::Sender,
        TextPath::Sender(AddressField::PostalCode),
    ),
    FieldBinding::text(
        "sender-city",
        "City",
        FormGroup::Sender,
        TextPath::Sender(AddressField::City),
    ),
    FieldBinding::flag(
        "sender-notification",
        "Potwierdzenie doręczenia",
        FormGroup::Sender,
        FlagPath::SenderNotification,
    ),
    FieldBinding::text(
        "sender-contact",
        "SMS/Email",
        FormGroup::Sender,
        TextPath::SenderContact,
    )
    .shown_when(FlagPath::SenderNotification),
    FieldBinding::text(
        "recipient-name",
        "Name",
        FormGroup::Recipient,
        TextPath::Recipient(AddressField::Name),
    ),
    FieldBinding::text(
        "recipient-address-line1",
        "Address Line 1",
        FormGroup::Recipient,
        TextPath::Recipient(AddressField::AddressLine1),
    ),
    FieldBinding::text(
        "recipient-address-line2",
        "Address Line 2 (Optional)",
        FormGroup::Recipient,
        TextPath::Recipient(AddressField::AddressLine2),
    ),
    FieldBinding::text(
        "recipient-postal-code",
        "Postal Code",
        FormGroup::Recipient,
        TextPath::Recipient(AddressField::PostalCode),
    ),
    FieldBinding::text(
        "recipient-city",
        "City",
        FormGroup::Recipient,
        TextPath::Recipient(AddressField::City),
    ),
    FieldBinding::text(
        "recipient-country",
        "Kraj",
        FormGroup::Recipient,
        TextPath::RecipientCountry,
    ),
    FieldBinding::flag(
        "recipient-notification",
        "Powiadomienie adresata",
        FormGroup::Recipient,
        FlagPath::RecipientNotification,
    ),
    FieldBinding::text(
        "recipient-contact",
        "SMS/Email",
        FormGroup::Recipient,
        TextPath::RecipientContact,
    )
    .shown_when(FlagPath::RecipientNotification),
    FieldBinding::flag(
        "delivery-confirmation",
        "Delivery confirmation",
        FormGroup::Options,
        FlagPath::DeliveryConfirmation,
    ),
    FieldBinding::flag(
        "priority",
        "Priority",
        FormGroup::Options,
        FlagPath::Priority,
    ),
    FieldBinding {
        id: "parcel-size",
        label: "Format",
        group: FormGroup::Options,
        path: FieldPath::Size,
        visible_when: None,
    },
];

/// Value an input currently displays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayValue<'a> {
    Text(&'a str),
    Checked(bool),
    Selected(ParcelSize),
}

/// User interaction with one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// New text content of a text input
    Input(String),
    /// New checked state of a checkbox
    Toggle(bool),
    /// New selection of the size chooser
    Choose(ParcelSize),
}

impl InputEvent {
    fn kind(&self) -> InputKind {
        match self {
            Self::Input(_) => InputKind::Text,
            Self::Toggle(_) => InputKind::Checkbox,
            Self::Choose(_) => InputKind::Choice,
        }
    }
}

/// Binding errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("No input with id {0}")]
    UnknownInput(String),

    #[error("Input {id} expects a {expected:?} event, got {got:?}")]
    EventMismatch {
        id: &'static str,
        expected: InputKind,
        got: InputKind,
    },
}

pub fn binding_by_id(id: &str) -> Option<&'static FieldBinding> {
    FORM_BINDINGS.iter().find(|b| b.id == id)
}

/// Current value shown by `binding`
pub fn display_value<'a>(form: &'a ShipmentForm, binding: &FieldBinding) -> DisplayValue<'a> {
    match binding.path {
        FieldPath::Text(p) => DisplayValue::Text(form.text(p)),
        FieldPath::Flag(p) => DisplayValue::Checked(form.flag(p)),
        FieldPath::Size => DisplayValue::Selected(form.size()),
    }
}

/// Whether `binding` is rendered for the current form
///
/// Hidden inputs keep their stored value.
pub fn is_visible(form: &ShipmentForm, binding: &FieldBinding) -> bool {
    binding.visible_when.is_none_or(|flag| form.flag(flag))
}

/// Inputs rendered for the current form, in display order
pub fn visible_bindings(form: &ShipmentForm) -> impl Iterator<Item = &'static FieldBinding> + '_ {
    FORM_BINDINGS.iter().filter(move |b| is_visible(form, b))
}

/// Turn a user event on `binding` into an edit
pub fn forward(binding: &FieldBinding, event: InputEvent) -> Result<Edit, BindingError> {
    match (binding.path, event) {
        (FieldPath::Text(p), InputEvent::Input(value)) => Ok(Edit::Text(p, value)),
        (FieldPath::Flag(p), InputEvent::Toggle(checked)) => Ok(Edit::Flag(p, checked)),
        (FieldPath::Size, InputEvent::Choose(size)) => Ok(Edit::Size(size)),
        (_, event) => Err(BindingError::EventMismatch {
            id: binding.id,
            expected: binding.input(),
            got: event.kind(),
        }),
    }
}

/// Look up the input by id and forward the event
pub fn forward_by_id(id: &str, event: InputEvent) -> Result<Edit, BindingError> {
    let binding = binding_by_id(id).ok_or_else(|| BindingError::UnknownInput(id.to_string()))?;
    forward(binding, event)
}
