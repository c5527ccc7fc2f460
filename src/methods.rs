//! Typed API methods and their response bindings.

use std::{fmt::Debug, future::Future, time::Duration};

use bon::Builder;
use serde::{Serialize, Serializer};

use crate::{
    bot::Bot,
    client::DEFAULT_TIMEOUT,
    inline::result::InlineQueryResult,
    markup::ReplyMarkup,
    objects::{ChatId, LinkPreviewOptions, Message, ParseMode, Update, User},
    prelude::*,
    wire::FromWire,
};

/// Telegram bot API method.
pub trait Method: Serialize {
    /// Method name.
    const NAME: &'static str;

    type Response: FromWire + Debug;

    fn timeout(&self) -> Duration {
        DEFAULT_TIMEOUT
    }

    /// Call the method on the bot connection.
    fn call_on(&self, bot: &Bot) -> impl Future<Output = Result<Self::Response>>
    where
        Self: Sized,
    {
        bot.call(self)
    }
}

/// A simple method for testing your bot's authentication token.
///
/// See also: <https://core.telegram.org/bots/api#getme>.
#[derive(Serialize)]
#[must_use]
pub struct GetMe;

impl Method for GetMe {
    const NAME: &'static str = "getMe";

    type Response = User;
}

/// [Update][1] types that the client wants to listen to.
///
/// [1]: https://core.telegram.org/bots/api#update
#[derive(Copy, Clone, Serialize)]
#[must_use]
pub enum AllowedUpdate {
    #[serde(rename = "message")]
    Message,

    #[serde(rename = "inline_query")]
    InlineQuery,

    #[serde(rename = "chosen_inline_result")]
    ChosenInlineResult,
}

/// Use this method to receive incoming updates using long polling. Returns an `Array` of `Update` objects.
#[derive(Builder, Serialize)]
#[must_use]
pub struct GetUpdates {
    /// Identifier of the first update to be returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,

    /// Limits the number of updates to be retrieved. Values between 1-100 are accepted. Defaults to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Timeout in seconds for long polling.
    ///
    /// Defaults to 0, i.e. usual short polling.
    /// Should be positive, short polling should be used for testing purposes only.
    #[serde(rename = "timeout", skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<AllowedUpdate>>,
}

impl Method for GetUpdates {
    const NAME: &'static str = "getUpdates";

    type Response = Vec<Update>;

    fn timeout(&self) -> Duration {
        DEFAULT_TIMEOUT + Duration::from_secs(self.timeout_secs.unwrap_or_default())
    }
}

/// [Send a message][1].
///
/// [1]: https://core.telegram.org/bots/api#sendmessage
#[derive(Builder, Serialize)]
#[must_use]
pub struct SendMessage<'a> {
    #[builder(into)]
    pub chat_id: ChatId,

    pub text: &'a str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_preview_options: Option<LinkPreviewOptions>,

    #[serde(
        serialize_with = "serialize_reply_markup",
        skip_serializing_if = "Option::is_none"
    )]
    #[builder(into)]
    pub reply_markup: Option<ReplyMarkup>,
}

impl Method for SendMessage<'_> {
    const NAME: &'static str = "sendMessage";

    type Response = Message;
}

/// [Send answers to an inline query][1]. On success, `true` is returned.
///
/// [1]: https://core.telegram.org/bots/api#answerinlinequery
#[derive(Builder, Serialize)]
#[must_use]
pub struct AnswerInlineQuery<'a> {
    pub inline_query_id: &'a str,

    pub results: &'a [InlineQueryResult],

    /// The maximum amount of time in seconds that the result may be cached
    /// on the server. Defaults to 300.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_time: Option<u32>,

    /// Pass `true`, if results may be cached on the server side only for the
    /// user that sent the query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_personal: Option<bool>,

    /// The offset that a client should send in the next query with the same text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_offset: Option<&'a str>,
}

impl Method for AnswerInlineQuery<'_> {
    const NAME: &'static str = "answerInlineQuery";

    type Response = bool;
}

/// Reply markups go over the wire as an inner-JSON-encoded string.
fn serialize_reply_markup<S: Serializer>(
    reply_markup: &Option<ReplyMarkup>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    let reply_markup = reply_markup
        .as_ref()
        .expect("`reply_markup` should not be `None`");
    let json = serde_json::to_string(&reply_markup)
        .map_err(|error| serde::ser::Error::custom(format!("{error:#}")))?;
    serializer.serialize_str(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        inline::{content::InputTextMessageContent, result::InlineQueryResultArticle},
        markup::{InlineKeyboardButton, InlineKeyboardMarkup},
        prelude::*,
    };

    #[test]
    fn message_with_inline_keyboard_ok() -> Result {
        let inline_keyboard_markup = InlineKeyboardMarkup::single_button(
            InlineKeyboardButton::new_url_button("Test", "https://example.org"),
        );
        let send_message = SendMessage::builder()
            .chat_id(42_i64)
            .text("test")
            .reply_markup(inline_keyboard_markup)
            .build();
        assert_eq!(
            serde_json::to_string(&send_message)?,
            // language=json
            r#"{"chat_id":42,"text":"test","reply_markup":"{\"inline_keyboard\":[[{\"text\":\"Test\",\"url\":\"https://example.org\"}]]}"}"#,
        );
        Ok(())
    }

    #[test]
    fn answer_inline_query_ok() -> Result {
        let results = vec![InlineQueryResult::from(InlineQueryResultArticle::new(
            "1",
            "Hello",
            InputTextMessageContent::new("hi")?,
        )?)];
        let answer = AnswerInlineQuery::builder()
            .inline_query_id("274")
            .results(&results)
            .cache_time(300)
            .build();
        assert_eq!(
            serde_json::to_string(&answer)?,
            // language=json
            r#"{"inline_query_id":"274","results":[{"type":"article","id":"1","title":"Hello","input_message_content":{"message_text":"hi"}}],"cache_time":300}"#,
        );
        Ok(())
    }

    #[test]
    fn get_updates_widens_timeout_ok() {
        let get_updates = GetUpdates::builder().timeout_secs(50).build();
        assert_eq!(get_updates.timeout(), DEFAULT_TIMEOUT + Duration::from_secs(50));
    }
}
