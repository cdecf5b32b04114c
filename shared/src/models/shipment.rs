//! Shipment Form Model
//!
//! The single record edited in a session and rendered onto the posting slip.
//! Sections are held behind `Arc` so that an update only replaces the section
//! it touches; every other section stays pointer-equal to the previous snapshot.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::FormError;
use crate::form::{AddressField, FlagPath, TextPath};

/// Postal address (sender side)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub name: String,
    pub address_line1: String,
    /// Empty string means "not given"; the slip omits the line
    #[serde(default)]
    pub address_line2: String,
    pub postal_code: String,
    pub city: String,
}

impl Address {
    pub fn get(&self, field: AddressField) -> &str {
        match field {
            AddressField::Name => &self.name,
            AddressField::AddressLine1 => &self.address_line1,
            AddressField::AddressLine2 => &self.address_line2,
            AddressField::PostalCode => &self.postal_code,
            AddressField::City => &self.city,
        }
    }

    pub(crate) fn set(&mut self, field: AddressField, value: String) {
        match field {
            AddressField::Name => self.name = value,
            AddressField::AddressLine1 => self.address_line1 = value,
            AddressField::AddressLine2 => self.address_line2 = value,
            AddressField::PostalCode => self.postal_code = value,
            AddressField::City => self.city = value,
        }
    }

    /// Second address line, if one was entered
    pub fn second_line(&self) -> Option<&str> {
        (!self.address_line2.is_empty()).then_some(self.address_line2.as_str())
    }
}

/// Recipient address (an address plus destination country)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientAddress {
    #[serde(flatten)]
    pub address: Address,
    #[serde(default)]
    pub country: String,
}

/// Notification preference for one party
///
/// `contact` only matters while `enabled` is set. Disabling keeps the text so
/// re-enabling restores it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub enabled: bool,
    pub contact: String,
}

impl Notification {
    /// Contact as it should appear on the slip (blank while disabled)
    pub fn visible_contact(&self) -> &str {
        if self.enabled { &self.contact } else { "" }
    }
}

/// Parcel format printed on the slip
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParcelSize {
    S,
    #[default]
    M,
    L,
}

impl ParcelSize {
    pub const ALL: [ParcelSize; 3] = [ParcelSize::S, ParcelSize::M, ParcelSize::L];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
        }
    }
}

impl fmt::Display for ParcelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParcelSize {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "S" | "s" => Ok(Self::S),
            "M" | "m" => Ok(Self::M),
            "L" | "l" => Ok(Self::L),
            other => Err(FormError::UnknownSize(other.to_string())),
        }
    }
}

/// Shipment options section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentOptions {
    pub delivery_confirmation: bool,
    pub priority: bool,
    #[serde(default)]
    pub size: ParcelSize,
}

/// Root record of one session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentForm {
    pub tracking_number: String,
    pub sender: Arc<Address>,
    pub recipient: Arc<RecipientAddress>,
    pub sender_notification: Arc<Notification>,
    pub recipient_notification: Arc<Notification>,
    pub options: Arc<ShipmentOptions>,
}

impl ShipmentForm {
    /// Read a string-valued leaf
    pub fn text(&self, path: TextPath) -> &str {
        match path {
            TextPath::TrackingNumber => &self.tracking_number,
            TextPath::Sender(field) => self.sender.get(field),
            TextPath::Recipient(field) => self.recipient.address.get(field),
            TextPath::RecipientCountry => &self.recipient.country,
            TextPath::SenderContact => &self.sender_notification.contact,
            TextPath::RecipientContact => &self.recipient_notification.contact,
        }
    }

    /// Read a boolean leaf
    pub fn flag(&self, path: FlagPath) -> bool {
        match path {
            FlagPath::SenderNotification => self.sender_notification.enabled,
            FlagPath::RecipientNotification => self.recipient_notification.enabled,
            FlagPath::DeliveryConfirmation => self.options.delivery_confirmation,
            FlagPath::Priority => self.options.priority,
        }
    }

    pub fn size(&self) -> ParcelSize {
        self.options.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_is_blank_with_medium_size() {
        let form = ShipmentForm::default();
        assert!(form.tracking_number.is_empty());
        assert!(form.sender.name.is_empty());
        assert!(form.recipient.country.is_empty());
        assert!(!form.sender_notification.enabled);
        assert!(!form.options.priority);
        assert_eq!(form.size(), ParcelSize::M);
    }

    #[test]
    fn test_parcel_size_parse() {
        assert_eq!("S".parse::<ParcelSize>().unwrap(), ParcelSize::S);
        assert_eq!(" l ".parse::<ParcelSize>().unwrap(), ParcelSize::L);
        assert_eq!(
            "XL".parse::<ParcelSize>(),
            Err(FormError::UnknownSize("XL".to_string()))
        );
    }

    #[test]
    fn test_json_shape_uses_reference_keys() {
        let mut form = ShipmentForm::default();
        form.tracking_number = "RR123456789PL".to_string();
        Arc::make_mut(&mut form.recipient).country = "Polska".to_string();

        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["trackingNumber"], "RR123456789PL");
        assert_eq!(json["recipient"]["country"], "Polska");
        assert_eq!(json["recipient"]["addressLine1"], "");
        assert_eq!(json["senderNotification"]["enabled"], false);
        assert_eq!(json["options"]["size"], "M");

        let back: ShipmentForm = serde_json::from_value(json).unwrap();
        assert_eq!(back, form);
    }

    #[test]
    fn test_visible_contact_blank_while_disabled() {
        let mut n = Notification {
            enabled: false,
            contact: "555-123-456".to_string(),
        };
        assert_eq!(n.visible_contact(), "");
        n.enabled = true;
        assert_eq!(n.visible_contact(), "555-123-456");
    }
}
