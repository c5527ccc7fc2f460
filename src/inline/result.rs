//! The inline query result family.
//!
//! One concrete kind per `type` discriminant. The discriminant is the enum
//! variant itself: callers construct a concrete result and convert it into
//! [`InlineQueryResult`], so the wire `type` can never be overridden, and
//! serialization always emits it.

use serde::Serialize;
use serde_json::Value;

use crate::{
    error::WireError,
    inline::content::InputMessageContent,
    markup::ReplyMarkup,
    wire::{self, FromWire, Object},
};

/// One [result][1] of an inline query.
///
/// [1]: https://core.telegram.org/bots/api#inlinequeryresult
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
#[must_use]
pub enum InlineQueryResult {
    #[serde(rename = "article")]
    Article(InlineQueryResultArticle),

    #[serde(rename = "audio")]
    Audio(InlineQueryResultAudio),

    #[serde(rename = "contact")]
    Contact(InlineQueryResultContact),

    #[serde(rename = "document")]
    Document(InlineQueryResultDocument),

    #[serde(rename = "gif")]
    Gif(InlineQueryResultGif),

    #[serde(rename = "location")]
    Location(InlineQueryResultLocation),

    #[serde(rename = "photo")]
    Photo(InlineQueryResultPhoto),

    #[serde(rename = "venue")]
    Venue(InlineQueryResultVenue),

    #[serde(rename = "video")]
    Video(InlineQueryResultVideo),

    #[serde(rename = "voice")]
    Voice(InlineQueryResultVoice),
}

impl InlineQueryResult {
    /// Unique identifier of the result within its result set.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Article(result) => &result.id,
            Self::Audio(result) => &result.id,
            Self::Contact(result) => &result.id,
            Self::Document(result) => &result.id,
            Self::Gif(result) => &result.id,
            Self::Location(result) => &result.id,
            Self::Photo(result) => &result.id,
            Self::Venue(result) => &result.id,
            Self::Video(result) => &result.id,
            Self::Voice(result) => &result.id,
        }
    }
}

impl FromWire for InlineQueryResult {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        let Some(kind) = object.optional::<String>("type")? else {
            return Err(WireError::UnknownVariant(value.clone()));
        };
        match kind.as_str() {
            "article" => InlineQueryResultArticle::from_wire(value).map(Self::Article),
            "audio" => InlineQueryResultAudio::from_wire(value).map(Self::Audio),
            "contact" => InlineQueryResultContact::from_wire(value).map(Self::Contact),
            "document" => InlineQueryResultDocument::from_wire(value).map(Self::Document),
            "gif" => InlineQueryResultGif::from_wire(value).map(Self::Gif),
            "location" => InlineQueryResultLocation::from_wire(value).map(Self::Location),
            "photo" => InlineQueryResultPhoto::from_wire(value).map(Self::Photo),
            "venue" => InlineQueryResultVenue::from_wire(value).map(Self::Venue),
            "video" => InlineQueryResultVideo::from_wire(value).map(Self::Video),
            "voice" => InlineQueryResultVoice::from_wire(value).map(Self::Voice),
            _ => Err(WireError::UnknownVariant(value.clone())),
        }
    }
}

macro_rules! impl_from_variant {
    ($variant:ident, $struct:ident) => {
        impl From<$struct> for InlineQueryResult {
            fn from(result: $struct) -> Self {
                Self::$variant(result)
            }
        }
    };
}

impl_from_variant!(Article, InlineQueryResultArticle);
impl_from_variant!(Audio, InlineQueryResultAudio);
impl_from_variant!(Contact, InlineQueryResultContact);
impl_from_variant!(Document, InlineQueryResultDocument);
impl_from_variant!(Gif, InlineQueryResultGif);
impl_from_variant!(Location, InlineQueryResultLocation);
impl_from_variant!(Photo, InlineQueryResultPhoto);
impl_from_variant!(Venue, InlineQueryResultVenue);
impl_from_variant!(Video, InlineQueryResultVideo);
impl_from_variant!(Voice, InlineQueryResultVoice);

/// Link to an [article][1] or web page.
///
/// [1]: https://core.telegram.org/bots/api#inlinequeryresultarticle
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct InlineQueryResultArticle {
    pub id: String,
    pub title: String,
    pub input_message_content: InputMessageContent,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// `true`, if the URL must not be shown in the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_url: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_width: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_height: Option<u32>,
}

impl InlineQueryResultArticle {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        input_message_content: impl Into<InputMessageContent>,
    ) -> Result<Self, WireError> {
        Ok(Self {
            id: wire::required_non_empty(id.into(), "id")?,
            title: wire::required_non_empty(title.into(), "title")?,
            input_message_content: input_message_content.into(),
            reply_markup: None,
            url: None,
            hide_url: None,
            description: None,
            thumb_url: None,
            thumb_width: None,
            thumb_height: None,
        })
    }

    pub fn reply_markup(mut self, reply_markup: impl Into<ReplyMarkup>) -> Self {
        self.reply_markup = Some(reply_markup.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = wire::non_default(url.into());
        self
    }

    pub fn hide_url(mut self, hide_url: bool) -> Self {
        self.hide_url = wire::non_default(hide_url);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = wire::non_default(description.into());
        self
    }

    pub fn thumb_url(mut self, thumb_url: impl Into<String>) -> Self {
        self.thumb_url = wire::non_default(thumb_url.into());
        self
    }

    pub fn thumb_width(mut self, thumb_width: u32) -> Self {
        self.thumb_width = wire::non_default(thumb_width);
        self
    }

    pub fn thumb_height(mut self, thumb_height: u32) -> Self {
        self.thumb_height = wire::non_default(thumb_height);
        self
    }
}

impl FromWire for InlineQueryResultArticle {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        Ok(Self {
            id: object.required_str("id")?,
            title: object.required_str("title")?,
            input_message_content: object.required("input_message_content")?,
            reply_markup: object.optional("reply_markup")?,
            url: object.optional_non_default("url")?,
            hide_url: object.optional_non_default("hide_url")?,
            description: object.optional_non_default("description")?,
            thumb_url: object.optional_non_default("thumb_url")?,
            thumb_width: object.optional_non_default("thumb_width")?,
            thumb_height: object.optional_non_default("thumb_height")?,
        })
    }
}

/// Link to an MP3 audio file.
///
/// See also: <https://core.telegram.org/bots/api#inlinequeryresultaudio>.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct InlineQueryResultAudio {
    pub id: String,
    pub audio_url: String,
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,

    /// Audio duration in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_duration: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

impl InlineQueryResultAudio {
    pub fn new(
        id: impl Into<String>,
        audio_url: impl Into<String>,
        title: impl Into<String>,
    ) -> Result<Self, WireError> {
        Ok(Self {
            id: wire::required_non_empty(id.into(), "id")?,
            audio_url: wire::required_non_empty(audio_url.into(), "audio_url")?,
            title: wire::required_non_empty(title.into(), "title")?,
            performer: None,
            audio_duration: None,
            reply_markup: None,
            input_message_content: None,
        })
    }

    pub fn performer(mut self, performer: impl Into<String>) -> Self {
        self.performer = wire::non_default(performer.into());
        self
    }

    pub fn audio_duration(mut self, audio_duration: u32) -> Self {
        self.audio_duration = wire::non_default(audio_duration);
        self
    }

    pub fn reply_markup(mut self, reply_markup: impl Into<ReplyMarkup>) -> Self {
        self.reply_markup = Some(reply_markup.into());
        self
    }

    pub fn input_message_content(mut self, content: impl Into<InputMessageContent>) -> Self {
        self.input_message_content = Some(content.into());
        self
    }
}

impl FromWire for InlineQueryResultAudio {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        Ok(Self {
            id: object.required_str("id")?,
            audio_url: object.required_str("audio_url")?,
            title: object.required_str("title")?,
            performer: object.optional_non_default("performer")?,
            audio_duration: object.optional_non_default("audio_duration")?,
            reply_markup: object.optional("reply_markup")?,
            input_message_content: object.optional("input_message_content")?,
        })
    }
}

/// A contact with a phone number.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct InlineQueryResultContact {
    pub id: String,
    pub phone_number: String,
    pub first_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

impl InlineQueryResultContact {
    pub fn new(
        id: impl Into<String>,
        phone_number: impl Into<String>,
        first_name: impl Into<String>,
    ) -> Result<Self, WireError> {
        Ok(Self {
            id: wire::required_non_empty(id.into(), "id")?,
            phone_number: wire::required_non_empty(phone_number.into(), "phone_number")?,
            first_name: wire::required_non_empty(first_name.into(), "first_name")?,
            last_name: None,
            reply_markup: None,
            input_message_content: None,
        })
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = wire::non_default(last_name.into());
        self
    }

    pub fn reply_markup(mut self, reply_markup: impl Into<ReplyMarkup>) -> Self {
        self.reply_markup = Some(reply_markup.into());
        self
    }

    pub fn input_message_content(mut self, content: impl Into<InputMessageContent>) -> Self {
        self.input_message_content = Some(content.into());
        self
    }
}

impl FromWire for InlineQueryResultContact {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        Ok(Self {
            id: object.required_str("id")?,
            phone_number: object.required_str("phone_number")?,
            first_name: object.required_str("first_name")?,
            last_name: object.optional_non_default("last_name")?,
            reply_markup: object.optional("reply_markup")?,
            input_message_content: object.optional("input_message_content")?,
        })
    }
}

/// Link to a file, only PDF and ZIP archives are supported.
///
/// See also: <https://core.telegram.org/bots/api#inlinequeryresultdocument>.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct InlineQueryResultDocument {
    pub id: String,
    pub title: String,
    pub document_url: String,

    /// Mime type of the content of the file, either `application/pdf` or `application/zip`.
    pub mime_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
}

impl InlineQueryResultDocument {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        document_url: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Result<Self, WireError> {
        Ok(Self {
            id: wire::required_non_empty(id.into(), "id")?,
            title: wire::required_non_empty(title.into(), "title")?,
            document_url: wire::required_non_empty(document_url.into(), "document_url")?,
            mime_type: wire::required_non_empty(mime_type.into(), "mime_type")?,
            caption: None,
            description: None,
            reply_markup: None,
            input_message_content: None,
            thumb_url: None,
        })
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = wire::non_default(caption.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = wire::non_default(description.into());
        self
    }

    pub fn reply_markup(mut self, reply_markup: impl Into<ReplyMarkup>) -> Self {
        self.reply_markup = Some(reply_markup.into());
        self
    }

    pub fn input_message_content(mut self, content: impl Into<InputMessageContent>) -> Self {
        self.input_message_content = Some(content.into());
        self
    }

    pub fn thumb_url(mut self, thumb_url: impl Into<String>) -> Self {
        self.thumb_url = wire::non_default(thumb_url.into());
        self
    }
}

impl FromWire for InlineQueryResultDocument {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        Ok(Self {
            id: object.required_str("id")?,
            title: object.required_str("title")?,
            document_url: object.required_str("document_url")?,
            mime_type: object.required_str("mime_type")?,
            caption: object.optional_non_default("caption")?,
            description: object.optional_non_default("description")?,
            reply_markup: object.optional("reply_markup")?,
            input_message_content: object.optional("input_message_content")?,
            thumb_url: object.optional_non_default("thumb_url")?,
        })
    }
}

/// Link to an animated GIF file.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct InlineQueryResultGif {
    pub id: String,
    pub gif_url: String,

    /// URL of the static thumbnail for the result.
    pub thumb_url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gif_width: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gif_height: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

impl InlineQueryResultGif {
    pub fn new(
        id: impl Into<String>,
        gif_url: impl Into<String>,
        thumb_url: impl Into<String>,
    ) -> Result<Self, WireError> {
        Ok(Self {
            id: wire::required_non_empty(id.into(), "id")?,
            gif_url: wire::required_non_empty(gif_url.into(), "gif_url")?,
            thumb_url: wire::required_non_empty(thumb_url.into(), "thumb_url")?,
            gif_width: None,
            gif_height: None,
            title: None,
            caption: None,
            reply_markup: None,
            input_message_content: None,
        })
    }

    pub fn gif_width(mut self, gif_width: u32) -> Self {
        self.gif_width = wire::non_default(gif_width);
        self
    }

    pub fn gif_height(mut self, gif_height: u32) -> Self {
        self.gif_height = wire::non_default(gif_height);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = wire::non_default(title.into());
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = wire::non_default(caption.into());
        self
    }

    pub fn reply_markup(mut self, reply_markup: impl Into<ReplyMarkup>) -> Self {
        self.reply_markup = Some(reply_markup.into());
        self
    }

    pub fn input_message_content(mut self, content: impl Into<InputMessageContent>) -> Self {
        self.input_message_content = Some(content.into());
        self
    }
}

impl FromWire for InlineQueryResultGif {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        Ok(Self {
            id: object.required_str("id")?,
            gif_url: object.required_str("gif_url")?,
            thumb_url: object.required_str("thumb_url")?,
            gif_width: object.optional_non_default("gif_width")?,
            gif_height: object.optional_non_default("gif_height")?,
            title: object.optional_non_default("title")?,
            caption: object.optional_non_default("caption")?,
            reply_markup: object.optional("reply_markup")?,
            input_message_content: object.optional("input_message_content")?,
        })
    }
}

/// A location on the map.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct InlineQueryResultLocation {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

impl InlineQueryResultLocation {
    pub fn new(
        id: impl Into<String>,
        latitude: f64,
        longitude: f64,
        title: impl Into<String>,
    ) -> Result<Self, WireError> {
        Ok(Self {
            id: wire::required_non_empty(id.into(), "id")?,
            latitude,
            longitude,
            title: wire::required_non_empty(title.into(), "title")?,
            reply_markup: None,
            input_message_content: None,
        })
    }

    pub fn reply_markup(mut self, reply_markup: impl Into<ReplyMarkup>) -> Self {
        self.reply_markup = Some(reply_markup.into());
        self
    }

    pub fn input_message_content(mut self, content: impl Into<InputMessageContent>) -> Self {
        self.input_message_content = Some(content.into());
        self
    }
}

impl FromWire for InlineQueryResultLocation {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        Ok(Self {
            id: object.required_str("id")?,
            latitude: object.required("latitude")?,
            longitude: object.required("longitude")?,
            title: object.required_str("title")?,
            reply_markup: object.optional("reply_markup")?,
            input_message_content: object.optional("input_message_content")?,
        })
    }
}

/// Link to a photo.
///
/// See also: <https://core.telegram.org/bots/api#inlinequeryresultphoto>.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct InlineQueryResultPhoto {
    pub id: String,

    /// A valid URL of the photo. Photo must be in JPEG format.
    pub photo_url: String,

    /// URL of the thumbnail for the photo.
    pub thumb_url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_width: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_height: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

impl InlineQueryResultPhoto {
    pub fn new(
        id: impl Into<String>,
        photo_url: impl Into<String>,
        thumb_url: impl Into<String>,
    ) -> Result<Self, WireError> {
        Ok(Self {
            id: wire::required_non_empty(id.into(), "id")?,
            photo_url: wire::required_non_empty(photo_url.into(), "photo_url")?,
            thumb_url: wire::required_non_empty(thumb_url.into(), "thumb_url")?,
            photo_width: None,
            photo_height: None,
            title: None,
            description: None,
            caption: None,
            reply_markup: None,
            input_message_content: None,
        })
    }

    pub fn photo_width(mut self, photo_width: u32) -> Self {
        self.photo_width = wire::non_default(photo_width);
        self
    }

    pub fn photo_height(mut self, photo_height: u32) -> Self {
        self.photo_height = wire::non_default(photo_height);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = wire::non_default(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = wire::non_default(description.into());
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = wire::non_default(caption.into());
        self
    }

    pub fn reply_markup(mut self, reply_markup: impl Into<ReplyMarkup>) -> Self {
        self.reply_markup = Some(reply_markup.into());
        self
    }

    pub fn input_message_content(mut self, content: impl Into<InputMessageContent>) -> Self {
        self.input_message_content = Some(content.into());
        self
    }
}

impl FromWire for InlineQueryResultPhoto {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        Ok(Self {
            id: object.required_str("id")?,
            photo_url: object.required_str("photo_url")?,
            thumb_url: object.required_str("thumb_url")?,
            photo_width: object.optional_non_default("photo_width")?,
            photo_height: object.optional_non_default("photo_height")?,
            title: object.optional_non_default("title")?,
            description: object.optional_non_default("description")?,
            caption: object.optional_non_default("caption")?,
            reply_markup: object.optional("reply_markup")?,
            input_message_content: object.optional("input_message_content")?,
        })
    }
}

/// A venue.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct InlineQueryResultVenue {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub address: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub foursquare_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

impl InlineQueryResultVenue {
    pub fn new(
        id: impl Into<String>,
        latitude: f64,
        longitude: f64,
        title: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self, WireError> {
        Ok(Self {
            id: wire::required_non_empty(id.into(), "id")?,
            latitude,
            longitude,
            title: wire::required_non_empty(title.into(), "title")?,
            address: wire::required_non_empty(address.into(), "address")?,
            foursquare_id: None,
            reply_markup: None,
            input_message_content: None,
        })
    }

    pub fn foursquare_id(mut self, foursquare_id: impl Into<String>) -> Self {
        self.foursquare_id = wire::non_default(foursquare_id.into());
        self
    }

    pub fn reply_markup(mut self, reply_markup: impl Into<ReplyMarkup>) -> Self {
        self.reply_markup = Some(reply_markup.into());
        self
    }

    pub fn input_message_content(mut self, content: impl Into<InputMessageContent>) -> Self {
        self.input_message_content = Some(content.into());
        self
    }
}

impl FromWire for InlineQueryResultVenue {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        Ok(Self {
            id: object.required_str("id")?,
            latitude: object.required("latitude")?,
            longitude: object.required("longitude")?,
            title: object.required_str("title")?,
            address: object.required_str("address")?,
            foursquare_id: object.optional_non_default("foursquare_id")?,
            reply_markup: object.optional("reply_markup")?,
            input_message_content: object.optional("input_message_content")?,
        })
    }
}

/// Link to a page containing an embedded video player or a video file.
///
/// See also: <https://core.telegram.org/bots/api#inlinequeryresultvideo>.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct InlineQueryResultVideo {
    pub id: String,
    pub video_url: String,

    /// Mime type of the content of the video URL, `text/html` or `video/mp4`.
    pub mime_type: String,
    pub thumb_url: String,
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_width: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_height: Option<u32>,

    /// Video duration in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_duration: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

impl InlineQueryResultVideo {
    pub fn new(
        id: impl Into<String>,
        video_url: impl Into<String>,
        mime_type: impl Into<String>,
        thumb_url: impl Into<String>,
        title: impl Into<String>,
    ) -> Result<Self, WireError> {
        Ok(Self {
            id: wire::required_non_empty(id.into(), "id")?,
            video_url: wire::required_non_empty(video_url.into(), "video_url")?,
            mime_type: wire::required_non_empty(mime_type.into(), "mime_type")?,
            thumb_url: wire::required_non_empty(thumb_url.into(), "thumb_url")?,
            title: wire::required_non_empty(title.into(), "title")?,
            caption: None,
            video_width: None,
            video_height: None,
            video_duration: None,
            description: None,
            reply_markup: None,
            input_message_content: None,
        })
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = wire::non_default(caption.into());
        self
    }

    pub fn video_width(mut self, video_width: u32) -> Self {
        self.video_width = wire::non_default(video_width);
        self
    }

    pub fn video_height(mut self, video_height: u32) -> Self {
        self.video_height = wire::non_default(video_height);
        self
    }

    pub fn video_duration(mut self, video_duration: u32) -> Self {
        self.video_duration = wire::non_default(video_duration);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = wire::non_default(description.into());
        self
    }

    pub fn reply_markup(mut self, reply_markup: impl Into<ReplyMarkup>) -> Self {
        self.reply_markup = Some(reply_markup.into());
        self
    }

    pub fn input_message_content(mut self, content: impl Into<InputMessageContent>) -> Self {
        self.input_message_content = Some(content.into());
        self
    }
}

impl FromWire for InlineQueryResultVideo {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        Ok(Self {
            id: object.required_str("id")?,
            video_url: object.required_str("video_url")?,
            mime_type: object.required_str("mime_type")?,
            thumb_url: object.required_str("thumb_url")?,
            title: object.required_str("title")?,
            caption: object.optional_non_default("caption")?,
            video_width: object.optional_non_default("video_width")?,
            video_height: object.optional_non_default("video_height")?,
            video_duration: object.optional_non_default("video_duration")?,
            description: object.optional_non_default("description")?,
            reply_markup: object.optional("reply_markup")?,
            input_message_content: object.optional("input_message_content")?,
        })
    }
}

/// Link to a voice recording in an OGG container encoded with OPUS.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct InlineQueryResultVoice {
    pub id: String,
    pub voice_url: String,
    pub title: String,

    /// Recording duration in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_duration: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

impl InlineQueryResultVoice {
    pub fn new(
        id: impl Into<String>,
        voice_url: impl Into<String>,
        title: impl Into<String>,
    ) -> Result<Self, WireError> {
        Ok(Self {
            id: wire::required_non_empty(id.into(), "id")?,
            voice_url: wire::required_non_empty(voice_url.into(), "voice_url")?,
            title: wire::required_non_empty(title.into(), "title")?,
            voice_duration: None,
            reply_markup: None,
            input_message_content: None,
        })
    }

    pub fn voice_duration(mut self, voice_duration: u32) -> Self {
        self.voice_duration = wire::non_default(voice_duration);
        self
    }

    pub fn reply_markup(mut self, reply_markup: impl Into<ReplyMarkup>) -> Self {
        self.reply_markup = Some(reply_markup.into());
        self
    }

    pub fn input_message_content(mut self, content: impl Into<InputMessageContent>) -> Self {
        self.input_message_content = Some(content.into());
        self
    }
}

impl FromWire for InlineQueryResultVoice {
    const EXPECTED: &'static str = "object";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let object = Object::new(value)?;
        Ok(Self {
            id: object.required_str("id")?,
            voice_url: object.required_str("voice_url")?,
            title: object.required_str("title")?,
            voice_duration: object.optional_non_default("voice_duration")?,
            reply_markup: object.optional("reply_markup")?,
            input_message_content: object.optional("input_message_content")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{markup::InlineKeyboardButton, prelude::*};

    #[test]
    fn minimal_audio_round_trip_ok() -> Result {
        // language=json
        let value: Value = serde_json::from_str(
            r#"{"type": "audio", "id": "1", "audio_url": "http://x/a.mp3", "title": "T"}"#,
        )?;
        let result = InlineQueryResult::from_wire(&value)?;
        match &result {
            InlineQueryResult::Audio(audio) => {
                assert_eq!(audio.performer, None);
                assert_eq!(audio.audio_duration, None);
            }
            _ => unreachable!(),
        }

        // Re-serializing must reproduce exactly the original four keys.
        let serialized = serde_json::to_value(&result)?;
        assert_eq!(serialized, value);
        Ok(())
    }

    #[test]
    fn audio_with_performer_ok() -> Result {
        let value = json!({
            "type": "audio",
            "id": "1",
            "audio_url": "http://x/a.mp3",
            "title": "T",
            "performer": "P",
        });
        match InlineQueryResult::from_wire(&value)? {
            InlineQueryResult::Audio(audio) => {
                assert_eq!(audio.performer.as_deref(), Some("P"));
                assert_eq!(audio.audio_duration, None);
            }
            _ => unreachable!(),
        }
        Ok(())
    }

    #[test]
    fn construction_is_inverse_of_decoding_ok() -> Result {
        let constructed = InlineQueryResult::from(
            InlineQueryResultAudio::new("1", "http://x/a.mp3", "T")?
                .performer("P")
                .audio_duration(180),
        );
        let decoded = InlineQueryResult::from_wire(&serde_json::to_value(&constructed)?)?;
        assert_eq!(decoded, constructed);
        Ok(())
    }

    #[test]
    fn falsy_optionals_are_unset() -> Result {
        let audio = InlineQueryResultAudio::new("1", "http://x/a.mp3", "T")?
            .performer("")
            .audio_duration(0);
        assert_eq!(audio.performer, None);
        assert_eq!(audio.audio_duration, None);
        // language=json
        assert_eq!(
            serde_json::to_string(&InlineQueryResult::from(audio))?,
            r#"{"type":"audio","id":"1","audio_url":"http://x/a.mp3","title":"T"}"#,
        );
        Ok(())
    }

    #[test]
    fn empty_required_field_fails() {
        assert_eq!(
            InlineQueryResultAudio::new("1", "", "T").unwrap_err(),
            WireError::MissingRequiredField("audio_url"),
        );
        assert_eq!(
            InlineQueryResultVoice::new("", "http://x/v.ogg", "T").unwrap_err(),
            WireError::MissingRequiredField("id"),
        );
    }

    #[test]
    fn unknown_type_fails() {
        let value = json!({"type": "hologram", "id": "1"});
        match InlineQueryResult::from_wire(&value).unwrap_err() {
            WireError::UnknownVariant(raw) => assert_eq!(raw, value),
            _ => unreachable!(),
        }
    }

    #[test]
    fn absent_type_fails() {
        let value = json!({"id": "1", "audio_url": "http://x/a.mp3", "title": "T"});
        assert!(matches!(
            InlineQueryResult::from_wire(&value).unwrap_err(),
            WireError::UnknownVariant(_),
        ));
    }

    #[test]
    fn resolution_is_deterministic() -> Result {
        let value = json!({"type": "voice", "id": "9", "voice_url": "http://x/v.ogg", "title": "V"});
        let first = InlineQueryResult::from_wire(&value)?;
        let second = InlineQueryResult::from_wire(&value)?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn unknown_keys_are_ignored_ok() -> Result {
        let value = json!({
            "type": "audio",
            "id": "1",
            "audio_url": "http://x/a.mp3",
            "title": "T",
            "parse_mode": "HTML",
            "caption_entities": [],
        });
        assert!(matches!(InlineQueryResult::from_wire(&value)?, InlineQueryResult::Audio(_)));
        Ok(())
    }

    #[test]
    fn nested_content_resolves_through_result_ok() -> Result {
        let value = json!({
            "type": "article",
            "id": "2",
            "title": "Article",
            "input_message_content": {"message_text": "hi"},
        });
        match InlineQueryResult::from_wire(&value)? {
            InlineQueryResult::Article(article) => {
                assert!(matches!(
                    article.input_message_content,
                    crate::inline::content::InputMessageContent::Text(_),
                ));
            }
            _ => unreachable!(),
        }
        Ok(())
    }

    #[test]
    fn nested_markup_round_trip_ok() -> Result {
        let result = InlineQueryResult::from(
            InlineQueryResultPhoto::new("3", "http://x/p.jpg", "http://x/t.jpg")?
                .caption("A photo")
                .reply_markup(InlineKeyboardButton::new_url_button("View", "http://x/p.jpg")),
        );
        let decoded = InlineQueryResult::from_wire(&serde_json::to_value(&result)?)?;
        assert_eq!(decoded, result);
        Ok(())
    }

    #[test]
    fn id_accessor_ok() -> Result {
        let result =
            InlineQueryResult::from(InlineQueryResultGif::new("7", "http://x/g.gif", "http://x/t.jpg")?);
        assert_eq!(result.id(), "7");
        Ok(())
    }

    #[test]
    fn malformed_duration_fails() {
        let value = json!({
            "type": "audio",
            "id": "1",
            "audio_url": "http://x/a.mp3",
            "title": "T",
            "audio_duration": "three minutes",
        });
        assert_eq!(
            InlineQueryResult::from_wire(&value).unwrap_err(),
            WireError::MalformedValue {
                field: "audio_duration".to_owned(),
                expected: "non-negative integer",
            },
        );
    }
}
