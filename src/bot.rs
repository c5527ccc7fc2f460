//! The facade: issues API calls and binds responses back into entities.

use futures::{stream, Stream, StreamExt, TryStreamExt};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::{
    methods::{AllowedUpdate, GetUpdates, Method},
    objects::Update,
    prelude::*,
    response::ApiResponse,
    wire::FromWire,
};

/// Telegram bot API connection.
#[must_use]
#[derive(Clone)]
pub struct Bot {
    client: Client,
    token: SecretString,
    root_url: Url,
}

impl Bot {
    pub fn new(client: Client, token: SecretString) -> Result<Self> {
        Ok(Self { client, token, root_url: Url::parse("https://api.telegram.org")? })
    }

    /// Call the Telegram bot API method.
    ///
    /// The `result` payload of the response envelope is routed through the
    /// entity decoder, so the caller gets the method's typed response back.
    #[instrument(skip_all, fields(method = M::NAME))]
    pub async fn call<M>(&self, method: &M) -> Result<M::Response>
    where
        M: Method + ?Sized,
    {
        let mut url = self.root_url.clone();
        url.set_path(&format!("bot{}/{}", self.token.expose_secret(), M::NAME));
        let response: ApiResponse = self
            .client
            .post(url)
            .json(method)
            .timeout(method.timeout())
            .send()
            .await
            .with_context(|| format!("failed to call `{}`", M::NAME))?
            .json()
            .await
            .with_context(|| format!("failed to read the `{}` response", M::NAME))?;
        let result = response.into_result()?;
        Ok(M::Response::from_wire(&result)?)
    }

    /// Convert the connection into a [`Stream`] of Telegram [`Update`]'s.
    pub fn into_updates(
        self,
        offset: u64,
        poll_timeout_secs: u64,
    ) -> impl Stream<Item = Result<Update>> {
        let advance = move |(this, offset): (Self, u64)| async move {
            let updates = GetUpdates::builder()
                .offset(offset)
                .timeout_secs(poll_timeout_secs)
                .allowed_updates(vec![
                    AllowedUpdate::Message,
                    AllowedUpdate::InlineQuery,
                    AllowedUpdate::ChosenInlineResult,
                ])
                .build()
                .call_on(&this)
                .await?;
            let next_offset = updates.last().map_or(offset, |last_update| last_update.id + 1);
            info!(n = updates.len(), next_offset, "received updates");
            Ok::<_, Error>(Some((stream::iter(updates).map(Ok), (this, next_offset))))
        };
        stream::try_unfold((self, offset), advance).try_flatten()
    }
}
