// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! RFC 3339 timestamps that keep their UTC offset.
//!
//! RFC 3339 offsets stop at minutes and years have four digits. A timestamp
//! outside those limits is refused on write, because any text written for it
//! would read back as a different instant or not at all.

use chrono::{DateTime, Datelike, FixedOffset, SecondsFormat};
use serde::{Deserialize, Deserializer, Serializer};

/// Why `timestamp` has no exact RFC 3339 form, if it has none.
pub fn unrepresentable_reason(timestamp: &DateTime<FixedOffset>) -> Option<&'static str> {
    if timestamp.offset().local_minus_utc() % 60 != 0 {
        Some("UTC offset has a seconds part")
    } else if !(0..=9999).contains(&timestamp.year()) {
        Some("year is outside 0000-9999")
    } else {
        None
    }
}

pub fn serialize<S>(timestamp: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if let Some(reason) = unrepresentable_reason(timestamp) {
        return Err(serde::ser::Error::custom(format!(
            "timestamp {timestamp}: {reason}"
        )));
    }
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, false))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&raw)
        .map_err(|e| serde::de::Error::custom(format!("invalid timestamp {raw:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn at(offset_seconds: i32, year: i32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(offset_seconds)
            .unwrap()
            .from_local_datetime(
                &NaiveDate::from_ymd_opt(year, 1, 2)
                    .unwrap()
                    .and_hms_nano_opt(3, 4, 5, 120_000_000)
                    .unwrap(),
            )
            .unwrap()
    }

    #[test]
    fn test_written_with_offset_and_fraction() {
        let json = serde_json::to_string(&Wrapper(at(-(7 * 3600 + 30 * 60), 2024))).unwrap();
        assert_eq!(json, "\"2024-01-02T03:04:05.120-07:30\"");

        let utc = serde_json::to_string(&Wrapper(at(0, 2024))).unwrap();
        assert_eq!(utc, "\"2024-01-02T03:04:05.120+00:00\"");
    }

    #[test]
    fn test_sub_minute_offsets_are_refused() {
        assert_eq!(
            unrepresentable_reason(&at(3600 + 17, 2024)),
            Some("UTC offset has a seconds part")
        );
        assert!(serde_json::to_string(&Wrapper(at(3600 + 17, 2024))).is_err());
        assert_eq!(unrepresentable_reason(&at(3600, 2024)), None);
    }

    #[test]
    fn test_five_digit_years_are_refused() {
        assert_eq!(
            unrepresentable_reason(&at(0, 10_000)),
            Some("year is outside 0000-9999")
        );
        assert_eq!(unrepresentable_reason(&at(0, 9999)), None);
    }

    #[test]
    fn test_read_accepts_zulu_and_keeps_offset() {
        let Wrapper(parsed) = serde_json::from_str("\"2024-01-02T03:04:05Z\"").unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 0);

        let Wrapper(parsed) = serde_json::from_str("\"2024-01-02T03:04:05.5+05:45\"").unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 5 * 3600 + 45 * 60);
        assert_eq!(parsed.timestamp_subsec_millis(), 500);

        assert!(serde_json::from_str::<Wrapper>("\"yesterday\"").is_err());
    }

    #[derive(serde::Serialize, serde::Deserialize)]
    struct Wrapper(#[serde(with = "super")] DateTime<FixedOffset>);
}
