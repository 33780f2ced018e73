//! Built-in static release datasets
//!
//! Used when the lifecycle API cannot be reached. Only products listed here
//! have a static dataset; everything else falls back to an empty list.

use crate::domain::ReleaseRecord;
use chrono::NaiveDate;

type Ymd = (i32, u32, u32);

/// A static release entry: label, release, end of support, end of ESM, LTS
struct StaticRelease {
    version: &'static str,
    release: Ymd,
    end_of_support: Ymd,
    end_of_extended_support: Option<Ymd>,
    lts: bool,
}

const UBUNTU: &[StaticRelease] = &[
    StaticRelease {
        version: "22.04 LTS (Jammy Jellyfish)",
        release: (2022, 4, 21),
        end_of_support: (2027, 4, 21),
        end_of_extended_support: Some((2032, 4, 21)),
        lts: true,
    },
    StaticRelease {
        version: "20.04 LTS (Focal Fossa)",
        release: (2020, 4, 23),
        end_of_support: (2025, 4, 23),
        end_of_extended_support: Some((2030, 4, 23)),
        lts: true,
    },
    StaticRelease {
        version: "23.10 (Mantic Minotaur)",
        release: (2023, 10, 12),
        end_of_support: (2024, 7, 12),
        end_of_extended_support: None,
        lts: false,
    },
    StaticRelease {
        version: "24.04 LTS (Noble Numbat)",
        release: (2024, 4, 25),
        end_of_support: (2029, 4, 25),
        end_of_extended_support: Some((2034, 4, 25)),
        lts: true,
    },
];

fn dataset(product: &str) -> Option<&'static [StaticRelease]> {
    match product.to_ascii_lowercase().as_str() {
        "ubuntu" => Some(UBUNTU),
        _ => None,
    }
}

fn to_date((y, m, d): Ymd) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

/// Unfiltered static releases for a product, if a dataset exists
pub fn static_releases(product: &str, today: NaiveDate) -> Option<Vec<ReleaseRecord>> {
    let entries = dataset(product)?;

    Some(
        entries
            .iter()
            .filter_map(|entry| {
                ReleaseRecord::new(
                    entry.version,
                    to_date(entry.release)?,
                    to_date(entry.end_of_support),
                    entry.end_of_extended_support.and_then(to_date),
                    entry.lts,
                    today,
                )
                .ok()
            })
            .collect(),
    )
}
