//! Media attachments carried by messages.

use serde::Serialize;
use serde_json::Value;

use crate::{
    error::WireError,
    wire::{FromWire, Object},
};

/// One size of a photo or a file/sticker thumbnail.
///
/// See also: <https://core.telegram.org/bots/api#photosize>.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct PhotoSize {
    pub file_id: String,
    pub width: u32,
    pub height: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

impl FromWire for PhotoSize {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        Ok(Self {
            file_id: object.required_str("file_id")?,
            width: object.required("width")?,
            height: object.required("height")?,
            file_size: object.optional_non_default("file_size")?,
        })
    }
}

/// An audio file to be treated as music.
///
/// See also: <https://core.telegram.org/bots/api#audio>.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct Audio {
    pub file_id: String,

    /// Duration of the audio in seconds.
    pub duration: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

impl FromWire for Audio {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        Ok(Self {
            file_id: object.required_str("file_id")?,
            duration: object.required("duration")?,
            performer: object.optional_non_default("performer")?,
            title: object.optional_non_default("title")?,
            mime_type: object.optional_non_default("mime_type")?,
            file_size: object.optional_non_default("file_size")?,
        })
    }
}

/// A voice note.
///
/// See also: <https://core.telegram.org/bots/api#voice>.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct Voice {
    pub file_id: String,
    pub duration: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

impl FromWire for Voice {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        Ok(Self {
            file_id: object.required_str("file_id")?,
            duration: object.required("duration")?,
            mime_type: object.optional_non_default("mime_type")?,
            file_size: object.optional_non_default("file_size")?,
        })
    }
}

/// A video file.
///
/// See also: <https://core.telegram.org/bots/api#video>.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct Video {
    pub file_id: String,
    pub width: u32,
    pub height: u32,
    pub duration: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<PhotoSize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

impl FromWire for Video {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        Ok(Self {
            file_id: object.required_str("file_id")?,
            width: object.required("width")?,
            height: object.required("height")?,
            duration: object.required("duration")?,
            thumb: object.optional("thumb")?,
            mime_type: object.optional_non_default("mime_type")?,
            file_size: object.optional_non_default("file_size")?,
        })
    }
}

/// A general file, as opposed to photos, voice messages and audio files.
///
/// See also: <https://core.telegram.org/bots/api#document>.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct Document {
    pub file_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<PhotoSize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

impl FromWire for Document {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        Ok(Self {
            file_id: object.required_str("file_id")?,
            thumb: object.optional("thumb")?,
            file_name: object.optional_non_default("file_name")?,
            mime_type: object.optional_non_default("mime_type")?,
            file_size: object.optional_non_default("file_size")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::prelude::*;

    #[test]
    fn photo_size_round_trip_ok() -> Result {
        let value = json!({"file_id": "abc", "width": 90, "height": 60, "file_size": 1451});
        let photo_size = PhotoSize::from_wire(&value)?;
        assert_eq!(serde_json::to_value(&photo_size)?, value);
        Ok(())
    }

    #[test]
    fn nested_thumb_ok() -> Result {
        // language=json
        let value: serde_json::Value = serde_json::from_str(
            r#"{"file_id": "doc", "thumb": {"file_id": "thumb", "width": 90, "height": 60}, "mime_type": "application/pdf"}"#,
        )?;
        let document = Document::from_wire(&value)?;
        assert_eq!(document.thumb.as_ref().map(|thumb| thumb.width), Some(90));
        assert_eq!(document.file_name, None);
        Ok(())
    }

    #[test]
    fn malformed_thumb_propagates() {
        let value = json!({"file_id": "doc", "thumb": {"file_id": "thumb", "width": "wide", "height": 60}});
        assert_eq!(
            Document::from_wire(&value).unwrap_err(),
            WireError::MalformedValue {
                field: "thumb.width".to_owned(),
                expected: "non-negative integer",
            },
        );
    }
}
