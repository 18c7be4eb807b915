mod import_rounds;
pub use import_rounds::{Rounds, SEPARATOR_WIDTH};
mod round;
pub use round::{Round, NO_LINK, NO_NAME};
mod console;
pub use console::{Console, LogConsole};
mod error;
pub use error::Error;
use std::time::Duration;

pub const ROUNDS_URL: &str = "https://www.wtrl.racing/api/wtrlruby/?action=zrlSeasons";

pub struct Gateway {
    client: reqwest::Client,
    url: String,
}

impl Gateway {
    pub fn new(timeout: Option<Duration>) -> Result<Gateway, Error> {
        Self::build(ROUNDS_URL, timeout, true)
    }

    #[cfg(test)]
    pub(crate) fn with_url(url: &str) -> Result<Gateway, Error> {
        Self::build(url, None, false)
    }

    fn build(url: &str, timeout: Option<Duration>, https_only: bool) -> Result<Gateway, Error> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            "Accept",
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let mut builder = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .https_only(https_only);

        // Without an explicit timeout the transport defaults apply.
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = match builder.build() {
            Ok(r) => r,
            Err(err) => {
                return Err(Error::Unspecified(format!(
                    "Could not create reqwest client ({}).",
                    err.to_string()
                )))
            }
        };

        let g = Gateway {
            client,
            url: url.to_owned(),
        };
        Ok(g)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn get_string(&self) -> Result<String, Error> {
        let res = match self.client.get(&self.url).send().await {
            Ok(r) => r,
            Err(err) => {
                return Err(Error::NetworkError(format!(
                    "Could not send request ({}).",
                    err.to_string()
                )))
            }
        };

        let status = res.status().as_u16();
        log::debug!("GET {} returned {}", self.url, status);

        if status < 200 || status > 299 {
            return Err(Error::HttpError(status));
        }

        match res.text().await {
            Ok(text) => Ok(text),
            Err(err) => Err(Error::NetworkError(format!(
                "Could not retrieve body text ({}).",
                err.to_string()
            ))),
        }
    }
}

/// Fetches the rounds feed once and logs every round through [`LogConsole`].
///
/// Failures are logged and swallowed, nothing is reported to the caller.
pub async fn import_rounds() {
    import_rounds_with(None, &LogConsole).await
}

/// Same as [`import_rounds`] with an explicit timeout and output channel.
pub async fn import_rounds_with<C: Console>(timeout: Option<Duration>, console: &C) {
    match Gateway::new(timeout) {
        Ok(gateway) => gateway.import_rounds(console).await,
        Err(err) => console.error(&format!("Could not fetch WTRL rounds: {}", err)),
    }
}
