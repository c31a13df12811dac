use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Parses the timestamp forms accepted in front matter.
///
/// Values without an offset are taken as UTC; a bare date means midnight.
pub fn parse_date_time(buf: &str) -> Result<DateTime<Utc>, String> {
    let buf = buf.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(buf) {
        return Ok(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(buf, fmt) {
            return Ok(naive.and_utc());
        }
    }

    match NaiveDate::parse_from_str(buf, "%Y-%m-%d") {
        Ok(date) => Ok(date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc()),
        Err(_) => Err(format!("Unable to parse date time {}", buf)),
    }
}

fn from_toml_value<E: serde::de::Error>(value: toml::Value) -> Result<DateTime<Utc>, E> {
    match value {
        toml::Value::Datetime(dt) => parse_date_time(&dt.to_string()).map_err(E::custom),
        toml::Value::String(s) => parse_date_time(&s).map_err(E::custom),
        other => Err(E::custom(format!("expected a date time, found {}", other.type_str()))),
    }
}

/// For `#[serde(deserialize_with = "...")]` on required timestamps.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = toml::Value::deserialize(deserializer)?;
    from_toml_value(value)
}

/// Same as [`deserialize`] for optional timestamps; pair it with `#[serde(default)]`.
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<toml::Value>::deserialize(deserializer)?;
    value.map(from_toml_value).transpose()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize)]
    struct Dates {
        #[serde(deserialize_with = "deserialize")]
        published: DateTime<Utc>,
        #[serde(default, deserialize_with = "deserialize_option")]
        modified: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_parse_date_time() {
        let expected = Utc.with_ymd_and_hms(2017, 9, 10, 10, 42, 32).unwrap();
        assert_eq!(parse_date_time("2017-09-10T10:42:32Z").unwrap(), expected);
        assert_eq!(parse_date_time("2017-09-10T12:42:32+02:00").unwrap(), expected);
        assert_eq!(parse_date_time("2017-09-10 10:42:32").unwrap(), expected);
        assert_eq!(parse_date_time("2017-09-10T10:42:32").unwrap(), expected);
        assert_eq!(parse_date_time("2017-09-10").unwrap(), Utc.with_ymd_and_hms(2017, 9, 10, 0, 0, 0).unwrap());

        let with_millis = parse_date_time("2017-09-10 10:42:32.123").unwrap();
        assert_eq!(with_millis.timestamp(), expected.timestamp());

        assert!(parse_date_time("yesterday").is_err());
    }

    #[test]
    fn test_toml_datetimes() {
        let toml_str = r##"
published = 2024-04-22T08:30:00Z
modified = 2024-04-23
"##;
        let dates: Dates = toml::from_str(toml_str).unwrap();
        assert_eq!(dates.published, Utc.with_ymd_and_hms(2024, 4, 22, 8, 30, 0).unwrap());
        assert_eq!(dates.modified, Some(Utc.with_ymd_and_hms(2024, 4, 23, 0, 0, 0).unwrap()));
    }

    #[test]
    fn test_toml_string_and_missing() {
        let dates: Dates = toml::from_str(r#"published = "2024-04-22 08:30:00""#).unwrap();
        assert_eq!(dates.published, Utc.with_ymd_and_hms(2024, 4, 22, 8, 30, 0).unwrap());
        assert_eq!(dates.modified, None);

        let res = toml::from_str::<Dates>("published = 42");
        assert!(res.is_err());
    }
}
