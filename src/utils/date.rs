use chrono::{Local, NaiveDate};

pub const DATE_FMT: &str = "%Y-%m-%d";

// Calendar date used for checkout, due and return dates.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FMT)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FMT).to_string()
}

pub mod serializer {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::{format_date, parse_date};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        format_date(*date).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let str_date: String = Deserialize::deserialize(deserializer)?;
        parse_date(&str_date).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde::{Deserialize, Serialize};
    use crate::utils::date::{format_date, parse_date, serializer, today};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Dated {
        #[serde(with = "serializer")]
        at: NaiveDate,
    }

    #[tokio::test]
    async fn test_should_format_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).expect("valid date");
        assert_eq!("2024-03-07", format_date(date));
        assert_eq!(date, parse_date("2024-03-07").expect("should parse"));
        assert!(parse_date("07/03/2024").is_err());
        assert!(parse_date("2024-02-30").is_err());
    }

    #[tokio::test]
    async fn test_should_serialize_dates() {
        let dated = Dated { at: NaiveDate::from_ymd_opt(2030, 12, 1).expect("valid date") };
        let json = serde_json::to_string(&dated).expect("should serialize");
        assert_eq!(r#"{"at":"2030-12-01"}"#, json);
        let back: Dated = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(dated, back);
    }

    #[tokio::test]
    async fn test_should_return_today() {
        assert!(today() > NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date"));
    }
}
