use serde::Deserialize;
use serde_json::Value;

pub const NO_NAME: &str = "no name";
pub const NO_LINK: &str = "N/A";

/// A single ZRL round as it appears in the WTRL feed.
///
/// Fields are kept as raw JSON values: the feed has no strict schema and
/// dates are never parsed.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    #[serde(default)]
    pub name: Value,

    #[serde(default)]
    pub start_date: Value,

    #[serde(default)]
    pub end_date: Value,

    #[serde(default)]
    pub link: Value,
}

impl Round {
    pub fn display_name(&self) -> String {
        or_placeholder(&self.name, NO_NAME)
    }

    pub fn display_link(&self) -> String {
        or_placeholder(&self.link, NO_LINK)
    }

    pub fn display_start_date(&self) -> String {
        verbatim(&self.start_date)
    }

    pub fn display_end_date(&self) -> String {
        verbatim(&self.end_date)
    }
}

/// `null`, `false`, `0` and `""` count as no value.
pub(crate) fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn or_placeholder(value: &Value, placeholder: &str) -> String {
    if is_blank(value) {
        placeholder.to_owned()
    } else {
        verbatim(value)
    }
}

// Strings print without quotes, anything else as its JSON text.
fn verbatim(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn placeholders_for_missing_name_and_link() {
        let round: Round =
            serde_json::from_str(r#"{"startDate": "2025-09-16", "endDate": "2025-10-07"}"#)
                .unwrap();

        assert_eq!(round.display_name(), NO_NAME);
        assert_eq!(round.display_link(), NO_LINK);
    }

    #[test]
    fn blank_values_fall_back_to_placeholders() {
        for blank in &[json!(null), json!(""), json!(false), json!(0)] {
            let round: Round =
                serde_json::from_value(json!({ "name": blank, "link": blank })).unwrap();

            assert_eq!(round.display_name(), NO_NAME);
            assert_eq!(round.display_link(), NO_LINK);
        }
    }

    #[test]
    fn non_string_name_and_link_are_printed_verbatim() {
        let round: Round =
            serde_json::from_str(r#"{"name": 2, "link": 7, "startDate": "x"}"#).unwrap();

        assert_eq!(round.display_name(), "2");
        assert_eq!(round.display_link(), "7");
    }

    #[test]
    fn dates_are_printed_verbatim() {
        let round: Round = serde_json::from_str(
            r#"{"name": "Round 1", "startDate": "not a date", "endDate": 1758000000}"#,
        )
        .unwrap();

        assert_eq!(round.display_name(), "Round 1");
        assert_eq!(round.display_start_date(), "not a date");
        assert_eq!(round.display_end_date(), "1758000000");
    }

    #[test]
    fn missing_dates_print_as_null() {
        let round: Round = serde_json::from_str(r#"{"name": "Round 2"}"#).unwrap();

        assert_eq!(round.display_start_date(), "null");
        assert_eq!(round.display_end_date(), "null");
    }
}
