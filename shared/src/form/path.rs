//! Typed field addressing
//!
//! Every leaf of [`ShipmentForm`](crate::models::ShipmentForm) has exactly one
//! path value. Text, flag and size leaves are separate types so an [`Edit`]
//! can never carry a value of the wrong kind.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FormError, FormResult};
use crate::models::ParcelSize;

/// Top-level group of the shipment record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    TrackingNumber,
    Sender,
    Recipient,
    SenderNotification,
    RecipientNotification,
    Options,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TrackingNumber => "trackingNumber",
            Self::Sender => "sender",
            Self::Recipient => "recipient",
            Self::SenderNotification => "senderNotification",
            Self::RecipientNotification => "recipientNotification",
            Self::Options => "options",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field of an address record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressField {
    Name,
    AddressLine1,
    AddressLine2,
    PostalCode,
    City,
}

impl AddressField {
    pub const ALL: [AddressField; 5] = [
        AddressField::Name,
        AddressField::AddressLine1,
        AddressField::AddressLine2,
        AddressField::PostalCode,
        AddressField::City,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::AddressLine1 => "addressLine1",
            Self::AddressLine2 => "addressLine2",
            Self::PostalCode => "postalCode",
            Self::City => "city",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == s)
    }
}

/// Path of a string-valued leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextPath {
    TrackingNumber,
    Sender(AddressField),
    Recipient(AddressField),
    RecipientCountry,
    SenderContact,
    RecipientContact,
}

impl TextPath {
    pub fn section(&self) -> Section {
        match self {
            Self::TrackingNumber => Section::TrackingNumber,
            Self::Sender(_) => Section::Sender,
            Self::Recipient(_) | Self::RecipientCountry => Section::Recipient,
            Self::SenderContact => Section::SenderNotification,
            Self::RecipientContact => Section::RecipientNotification,
        }
    }

    /// Field name inside the section; `None` for scalar sections
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::TrackingNumber => None,
            Self::Sender(f) | Self::Recipient(f) => Some(f.as_str()),
            Self::RecipientCountry => Some("country"),
            Self::SenderContact | Self::RecipientContact => Some("contact"),
        }
    }

    /// All text leaves in record order
    pub fn all() -> Vec<TextPath> {
        let mut paths = vec![TextPath::TrackingNumber];
        paths.extend(AddressField::ALL.map(TextPath::Sender));
        paths.extend(AddressField::ALL.map(TextPath::Recipient));
        paths.push(TextPath::RecipientCountry);
        paths.push(TextPath::SenderContact);
        paths.push(TextPath::RecipientContact);
        paths
    }
}

/// Path of a boolean leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlagPath {
    SenderNotification,
    RecipientNotification,
    DeliveryConfirmation,
    Priority,
}

impl FlagPath {
    pub const ALL: [FlagPath; 4] = [
        FlagPath::SenderNotification,
        FlagPath::RecipientNotification,
        FlagPath::DeliveryConfirmation,
        FlagPath::Priority,
    ];

    pub fn section(&self) -> Section {
        match self {
            Self::SenderNotification => Section::SenderNotification,
            Self::RecipientNotification => Section::RecipientNotification,
            Self::DeliveryConfirmation | Self::Priority => Section::Options,
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            Self::SenderNotification | Self::RecipientNotification => "enabled",
            Self::DeliveryConfirmation => "deliveryConfirmation",
            Self::Priority => "priority",
        }
    }
}

/// Address of any leaf, regardless of value kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldPath {
    Text(TextPath),
    Flag(FlagPath),
    Size,
}

impl FieldPath {
    pub fn section(&self) -> Section {
        match self {
            Self::Text(p) => p.section(),
            Self::Flag(p) => p.section(),
            Self::Size => Section::Options,
        }
    }

    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Text(p) => p.field(),
            Self::Flag(p) => Some(p.field()),
            Self::Size => Some("size"),
        }
    }

    /// Every addressable leaf
    pub fn all() -> Vec<FieldPath> {
        let mut paths: Vec<FieldPath> = TextPath::all().into_iter().map(FieldPath::Text).collect();
        paths.extend(FlagPath::ALL.map(FieldPath::Flag));
        paths.push(FieldPath::Size);
        paths
    }

    /// Build an edit from a raw string value
    ///
    /// Text leaves take the value verbatim. Flags accept the usual boolean
    /// spellings, the size leaf accepts `S`, `M` or `L`.
    pub fn with_value(self, raw: &str) -> FormResult<Edit> {
        match self {
            Self::Text(p) => Ok(Edit::Text(p, raw.to_string())),
            Self::Flag(p) => parse_flag(raw)
                .map(|v| Edit::Flag(p, v))
                .ok_or_else(|| FormError::InvalidFlag {
                    path: self.to_string(),
                    value: raw.to_string(),
                }),
            Self::Size => raw.parse().map(Edit::Size),
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Some(true),
        "false" | "0" | "off" | "no" => Some(false),
        _ => None,
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.field() {
            Some(field) => write!(f, "{}.{}", self.section(), field),
            None => write!(f, "{}", self.section()),
        }
    }
}

impl FromStr for FieldPath {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || FormError::UnknownPath(s.to_string());
        let (section, field) = match s.split_once('.') {
            Some((section, field)) => (section, Some(field)),
            None => (s, None),
        };

        let path = match (section, field) {
            ("trackingNumber", None) => FieldPath::Text(TextPath::TrackingNumber),
            ("sender", Some(f)) => {
                FieldPath::Text(TextPath::Sender(AddressField::parse(f).ok_or_else(unknown)?))
            }
            ("recipient", Some("country")) => FieldPath::Text(TextPath::RecipientCountry),
            ("recipient", Some(f)) => {
                FieldPath::Text(TextPath::Recipient(AddressField::parse(f).ok_or_else(unknown)?))
            }
            ("senderNotification", Some("enabled")) => {
                FieldPath::Flag(FlagPath::SenderNotification)
            }
            ("senderNotification", Some("contact")) => FieldPath::Text(TextPath::SenderContact),
            ("recipientNotification", Some("enabled")) => {
                FieldPath::Flag(FlagPath::RecipientNotification)
            }
            ("recipientNotification", Some("contact")) => {
                FieldPath::Text(TextPath::RecipientContact)
            }
            ("options", Some("deliveryConfirmation")) => {
                FieldPath::Flag(FlagPath::DeliveryConfirmation)
            }
            ("options", Some("priority")) => FieldPath::Flag(FlagPath::Priority),
            ("options", Some("size")) => FieldPath::Size,
            _ => return Err(unknown()),
        };
        Ok(path)
    }
}

/// One typed mutation of the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Edit {
    Text(TextPath, String),
    Flag(FlagPath, bool),
    Size(ParcelSize),
}

impl Edit {
    pub fn path(&self) -> FieldPath {
        match self {
            Self::Text(p, _) => FieldPath::Text(*p),
            Self::Flag(p, _) => FieldPath::Flag(*p),
            Self::Size(_) => FieldPath::Size,
        }
    }

    pub fn section(&self) -> Section {
        self.path().section()
    }

    pub fn field(&self) -> Option<&'static str> {
        self.path().field()
    }
}
