//! Release record type
//!
//! A release record is the uniform shape every API response is normalized
//! into. Records are built fresh per fetch and only live for one render.

use super::SupportDuration;
use crate::error::RecordError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A single product release with its support window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseRecord {
    /// Display label (e.g., "24.04 LTS (Noble Numbat)")
    pub version: String,
    /// Release date
    pub release: NaiveDate,
    /// End of standard support
    pub end_of_support: NaiveDate,
    /// End of extended support (ESM), if the release has any
    pub end_of_extended_support: Option<NaiveDate>,
    /// Whether this is a long term support release
    pub lts: bool,
}

impl ReleaseRecord {
    /// Creates a release record, enforcing the lifecycle ordering.
    ///
    /// A missing standard support end defaults to `today` (or the release
    /// date when that is later). An extended support end that precedes the
    /// standard end is discarded rather than failing the record.
    pub fn new(
        version: impl Into<String>,
        release: NaiveDate,
        end_of_support: Option<NaiveDate>,
        end_of_extended_support: Option<NaiveDate>,
        lts: bool,
        today: NaiveDate,
    ) -> Result<Self, RecordError> {
        let version = version.into();
        let end_of_support = end_of_support.unwrap_or_else(|| today.max(release));

        if end_of_support < release {
            return Err(RecordError::SupportBeforeRelease {
                version,
                release,
                end_of_support,
            });
        }

        let end_of_extended_support = match end_of_extended_support {
            Some(eoes) if eoes < end_of_support => {
                tracing::debug!(
                    version = %version,
                    %eoes,
                    %end_of_support,
                    "dropping extended support that ends before standard support"
                );
                None
            }
            other => other,
        };

        Ok(Self {
            version,
            release,
            end_of_support,
            end_of_extended_support,
            lts,
        })
    }

    /// Returns true if standard or extended support is still running after `today`
    pub fn is_supported_on(&self, today: NaiveDate) -> bool {
        self.end_of_support > today
            || self
                .end_of_extended_support
                .is_some_and(|eoes| eoes > today)
    }

    /// Returns true if this release has an extended support window
    pub fn has_extended_support(&self) -> bool {
        self.end_of_extended_support.is_some()
    }

    /// Latest date this release is covered by any kind of support
    pub fn last_supported_day(&self) -> NaiveDate {
        self.end_of_extended_support.unwrap_or(self.end_of_support)
    }

    /// Duration of standard support
    pub fn standard_duration(&self) -> SupportDuration {
        SupportDuration::between(Some(self.release), Some(self.end_of_support))
    }

    /// Duration of extended support (zero when there is none)
    pub fn extended_duration(&self) -> SupportDuration {
        SupportDuration::between(Some(self.end_of_support), self.end_of_extended_support)
    }

    /// Newest-first ordering: release date descending, then label descending
    pub fn newest_first(a: &Self, b: &Self) -> Ordering {
        b.release
            .cmp(&a.release)
            .then_with(|| b.version.cmp(&a.version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2025, 6, 1)
    }

    #[test]
    fn test_new_keeps_valid_dates() {
        let record = ReleaseRecord::new(
            "24.04 LTS",
            date(2024, 4, 25),
            Some(date(2029, 5, 31)),
            Some(date(2034, 4, 25)),
            true,
            today(),
        )
        .unwrap();
        assert_eq!(record.end_of_support, date(2029, 5, 31));
        assert_eq!(record.end_of_extended_support, Some(date(2034, 4, 25)));
        assert!(record.lts);
    }

    #[test]
    fn test_missing_end_of_support_defaults_to_today() {
        let record =
            ReleaseRecord::new("rolling", date(2024, 1, 1), None, None, false, today()).unwrap();
        assert_eq!(record.end_of_support, today());
    }

    #[test]
    fn test_missing_end_of_support_never_precedes_release() {
        let record =
            ReleaseRecord::new("26.04", date(2026, 4, 23), None, None, true, today()).unwrap();
        assert_eq!(record.end_of_support, date(2026, 4, 23));
    }

    #[test]
    fn test_support_before_release_is_rejected() {
        let err = ReleaseRecord::new(
            "broken",
            date(2024, 4, 25),
            Some(date(2020, 1, 1)),
            None,
            false,
            today(),
        )
        .unwrap_err();
        assert!(matches!(err, RecordError::SupportBeforeRelease { .. }));
    }

    #[test]
    fn test_extended_before_standard_is_dropped() {
        let record = ReleaseRecord::new(
            "odd",
            date(2020, 1, 1),
            Some(date(2025, 1, 1)),
            Some(date(2024, 1, 1)),
            true,
            today(),
        )
        .unwrap();
        assert!(!record.has_extended_support());
    }

    #[test]
    fn test_is_supported_on() {
        let standard = ReleaseRecord::new(
            "standard",
            date(2024, 1, 1),
            Some(date(2026, 1, 1)),
            None,
            false,
            today(),
        )
        .unwrap();
        assert!(standard.is_supported_on(today()));
        assert!(!standard.is_supported_on(date(2026, 1, 1)));

        let extended_only = ReleaseRecord::new(
            "esm",
            date(2018, 4, 26),
            Some(date(2023, 5, 31)),
            Some(date(2028, 4, 1)),
            true,
            today(),
        )
        .unwrap();
        assert!(extended_only.is_supported_on(today()));
        assert_eq!(extended_only.last_supported_day(), date(2028, 4, 1));
    }

    #[test]
    fn test_newest_first() {
        let older =
            ReleaseRecord::new("a", date(2020, 4, 23), None, None, false, today()).unwrap();
        let newer =
            ReleaseRecord::new("b", date(2024, 4, 25), None, None, false, today()).unwrap();
        let mut records = vec![older.clone(), newer.clone()];
        records.sort_by(ReleaseRecord::newest_first);
        assert_eq!(records, vec![newer, older]);
    }

    #[test]
    fn test_durations() {
        let record = ReleaseRecord::new(
            "22.04",
            date(2022, 4, 21),
            Some(date(2027, 4, 21)),
            None,
            true,
            today(),
        )
        .unwrap();
        assert_eq!(record.standard_duration().years, 5);
        assert_eq!(record.extended_duration(), SupportDuration::default());
    }
}
