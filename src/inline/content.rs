//! The content of a message to be sent when an inline result is chosen.

use serde::Serialize;
use serde_json::Value;

use crate::{
    error::WireError,
    objects::ParseMode,
    wire::{self, FromWire, Object},
};

/// The [content][1] of the message sent on behalf of the user when an inline
/// result is chosen.
///
/// The family carries no `type` discriminant on the wire; payloads resolve by
/// structure, in a fixed priority order:
///
/// 1. `latitude` + `title` + `address` resolves to a venue — checked before
///    location because venue payloads also carry coordinates;
/// 2. `latitude` + `longitude` resolves to a location;
/// 3. `phone_number` resolves to a contact;
/// 4. `message_text` resolves to text.
///
/// Anything else is an unknown variant.
///
/// [1]: https://core.telegram.org/bots/api#inputmessagecontent
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
#[must_use]
pub enum InputMessageContent {
    Text(InputTextMessageContent),
    Location(InputLocationMessageContent),
    Venue(InputVenueMessageContent),
    Contact(InputContactMessageContent),
}

impl FromWire for InputMessageContent {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        if object.contains("latitude") && object.contains("title") && object.contains("address") {
            InputVenueMessageContent::from_wire(value).map(Self::Venue)
        } else if object.contains("latitude") && object.contains("longitude") {
            InputLocationMessageContent::from_wire(value).map(Self::Location)
        } else if object.contains("phone_number") {
            InputContactMessageContent::from_wire(value).map(Self::Contact)
        } else if object.contains("message_text") {
            InputTextMessageContent::from_wire(value).map(Self::Text)
        } else {
            Err(WireError::UnknownVariant(value.clone()))
        }
    }
}

impl From<InputTextMessageContent> for InputMessageContent {
    fn from(content: InputTextMessageContent) -> Self {
        Self::Text(content)
    }
}

impl From<InputLocationMessageContent> for InputMessageContent {
    fn from(content: InputLocationMessageContent) -> Self {
        Self::Location(content)
    }
}

impl From<InputVenueMessageContent> for InputMessageContent {
    fn from(content: InputVenueMessageContent) -> Self {
        Self::Venue(content)
    }
}

impl From<InputContactMessageContent> for InputMessageContent {
    fn from(content: InputContactMessageContent) -> Self {
        Self::Contact(content)
    }
}

/// [Text][1] to be sent as the result of an inline query.
///
/// [1]: https://core.telegram.org/bots/api#inputtextmessagecontent
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct InputTextMessageContent {
    /// Text of the message, 1–4096 characters.
    pub message_text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_web_page_preview: Option<bool>,
}

impl InputTextMessageContent {
    pub fn new(message_text: impl Into<String>) -> Result<Self, WireError> {
        Ok(Self {
            message_text: wire::required_non_empty(message_text.into(), "message_text")?,
            parse_mode: None,
            disable_web_page_preview: None,
        })
    }

    pub fn parse_mode(mut self, parse_mode: ParseMode) -> Self {
        self.parse_mode = Some(parse_mode);
        self
    }

    pub fn disable_web_page_preview(mut self, disable: bool) -> Self {
        self.disable_web_page_preview = wire::non_default(disable);
        self
    }
}

impl FromWire for InputTextMessageContent {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        Ok(Self {
            message_text: object.required_str("message_text")?,
            parse_mode: object.optional("parse_mode")?,
            disable_web_page_preview: object.optional_non_default("disable_web_page_preview")?,
        })
    }
}

/// A [location][1] to be sent as the result of an inline query.
///
/// [1]: https://core.telegram.org/bots/api#inputlocationmessagecontent
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct InputLocationMessageContent {
    pub latitude: f64,
    pub longitude: f64,
}

impl InputLocationMessageContent {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl FromWire for InputLocationMessageContent {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        Ok(Self {
            latitude: object.required("latitude")?,
            longitude: object.required("longitude")?,
        })
    }
}

/// A [venue][1] to be sent as the result of an inline query.
///
/// [1]: https://core.telegram.org/bots/api#inputvenuemessagecontent
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct InputVenueMessageContent {
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub address: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub foursquare_id: Option<String>,
}

impl InputVenueMessageContent {
    pub fn new(
        latitude: f64,
        longitude: f64,
        title: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self, WireError> {
        Ok(Self {
            latitude,
            longitude,
            title: wire::required_non_empty(title.into(), "title")?,
            address: wire::required_non_empty(address.into(), "address")?,
            foursquare_id: None,
        })
    }

    pub fn foursquare_id(mut self, foursquare_id: impl Into<String>) -> Self {
        self.foursquare_id = wire::non_default(foursquare_id.into());
        self
    }
}

impl FromWire for InputVenueMessageContent {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        Ok(Self {
            latitude: object.required("latitude")?,
            longitude: object.required("longitude")?,
            title: object.required_str("title")?,
            address: object.required_str("address")?,
            foursquare_id: object.optional_non_default("foursquare_id")?,
        })
    }
}

/// A [contact][1] to be sent as the result of an inline query.
///
/// [1]: https://core.telegram.org/bots/api#inputcontactmessagecontent
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct InputContactMessageContent {
    pub phone_number: String,
    pub first_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl InputContactMessageContent {
    pub fn new(
        phone_number: impl Into<String>,
        first_name: impl Into<String>,
    ) -> Result<Self, WireError> {
        Ok(Self {
            phone_number: wire::required_non_empty(phone_number.into(), "phone_number")?,
            first_name: wire::required_non_empty(first_name.into(), "first_name")?,
            last_name: None,
        })
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = wire::non_default(last_name.into());
        self
    }
}

impl FromWire for InputContactMessageContent {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        Ok(Self {
            phone_number: object.required_str("phone_number")?,
            first_name: object.required_str("first_name")?,
            last_name: object.optional_non_default("last_name")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::prelude::*;

    #[test]
    fn message_text_resolves_to_text_ok() -> Result {
        let value = json!({"message_text": "hi"});
        match InputMessageContent::from_wire(&value)? {
            InputMessageContent::Text(text) => assert_eq!(text.message_text, "hi"),
            _ => unreachable!(),
        }
        Ok(())
    }

    #[test]
    fn coordinates_resolve_to_location_ok() -> Result {
        let value = json!({"latitude": 52.37, "longitude": 4.9});
        assert_eq!(
            InputMessageContent::from_wire(&value)?,
            InputMessageContent::Location(InputLocationMessageContent::new(52.37, 4.9)),
        );
        Ok(())
    }

    #[test]
    fn venue_takes_priority_over_location_ok() -> Result {
        // Carries coordinates as well, and must still resolve to a venue.
        let value = json!({
            "latitude": 52.37,
            "longitude": 4.9,
            "title": "Palace",
            "address": "Dam",
        });
        assert!(matches!(
            InputMessageContent::from_wire(&value)?,
            InputMessageContent::Venue(_),
        ));
        Ok(())
    }

    #[test]
    fn phone_number_resolves_to_contact_ok() -> Result {
        let value = json!({"phone_number": "+31", "first_name": "N"});
        assert!(matches!(
            InputMessageContent::from_wire(&value)?,
            InputMessageContent::Contact(_),
        ));
        Ok(())
    }

    #[test]
    fn resolution_is_deterministic() -> Result {
        let value = json!({"message_text": "hi"});
        let first = InputMessageContent::from_wire(&value)?;
        let second = InputMessageContent::from_wire(&value)?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn unresolvable_shape_fails() {
        let value = json!({"sticker_file_id": "abc"});
        match InputMessageContent::from_wire(&value).unwrap_err() {
            WireError::UnknownVariant(raw) => assert_eq!(raw, value),
            _ => unreachable!(),
        }
    }

    #[test]
    fn empty_message_text_fails() {
        assert_eq!(
            InputTextMessageContent::new("").unwrap_err(),
            WireError::MissingRequiredField("message_text"),
        );
    }

    #[test]
    fn text_content_round_trip_ok() -> Result {
        let content = InputTextMessageContent::new("hi")?.parse_mode(ParseMode::Html);
        let value = serde_json::to_value(&content)?;
        // language=json
        assert_eq!(serde_json::to_string(&content)?, r#"{"message_text":"hi","parse_mode":"HTML"}"#);
        assert_eq!(InputMessageContent::from_wire(&value)?, InputMessageContent::Text(content));
        Ok(())
    }
}
