use crate::round::is_blank;
use crate::{Console, Error, Gateway, Round};
use serde_json::Value;

pub const SEPARATOR_WIDTH: usize = 40;

/// Result of a successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum Rounds {
    Received(Vec<Round>),

    /// The response had no `payload`; carries the raw body.
    Missing(String),
}

impl Gateway {
    pub async fn fetch_rounds(&self) -> Result<Rounds, Error> {
        let text = self.get_string().await?;

        let data: Value = match serde_json::from_str(&text) {
            Ok(r) => r,
            Err(err) => {
                return Err(Error::ParseError(format!(
                    "Could not deserialize response from \"{}\" ({}).",
                    text,
                    err.to_string()
                )))
            }
        };

        // A body that is null, not an object, or without a payload is not an error.
        // An empty array is still a payload.
        let payload = match data {
            Value::Object(mut map) => match map.remove("payload") {
                Some(payload) if !is_blank(&payload) => Some(payload),
                _ => None,
            },
            _ => None,
        };
        let payload = match payload {
            Some(payload) => payload,
            None => return Ok(Rounds::Missing(text)),
        };

        let rounds: Vec<Round> = match serde_json::from_value(payload) {
            Ok(r) => r,
            Err(err) => {
                return Err(Error::ParseError(format!(
                    "Could not deserialize payload ({}).",
                    err.to_string()
                )))
            }
        };
        log::debug!("Deserialized {} rounds", rounds.len());

        Ok(Rounds::Received(rounds))
    }

    pub async fn import_rounds<C: Console>(&self, console: &C) {
        console.info(&format!("Fetching WTRL rounds from {}", self.url()));

        let rounds = match self.fetch_rounds().await {
            Ok(Rounds::Received(rounds)) => rounds,
            Ok(Rounds::Missing(raw)) => {
                console.warn(&format!("No payload received: {}", raw));
                return;
            }
            Err(err) => {
                console.error(&format!("Could not fetch WTRL rounds: {}", err));
                return;
            }
        };

        console.info(&format!("Received {} rounds", rounds.len()));
        let separator = "-".repeat(SEPARATOR_WIDTH);
        for round in &rounds {
            console.info(&format!("Round: {}", round.display_name()));
            console.info(&format!("Start date: {}", round.display_start_date()));
            console.info(&format!("End date: {}", round.display_end_date()));
            console.info(&format!("Link: {}", round.display_link()));
            console.info(&separator);
        }
    }
}
