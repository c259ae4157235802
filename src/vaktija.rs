//! The daily prayer schedule: decoding, slot queries and derived instants.
//!
//! A [`Vaktija`] is one day's worth of data for one location: six prayer
//! times in their fixed daily order, a hijri/gregorian date label pair
//! carried verbatim, and the location name. It is decoded once from the
//! raw JSON (fetched or cached), is immutable afterwards, and answers the
//! two questions the CLI asks — which slot is next, which is current —
//! plus the two derived night instants (midpoint and last third).

use serde::Deserialize;

use crate::error::VaktijaError;
use crate::temporal::TimeOfDay;

/// Number of daily prayer slots. The slot indices 0..5 are, in order:
/// Zora (dawn), Izlazak sunca (sunrise), Podne (noon), Ikindija
/// (afternoon), Akšam (sunset), Jacija (night).
pub const VAKAT_COUNT: usize = 6;

/// Display names for each slot, in daily order.
pub const VAKAT_NAMES: [&str; VAKAT_COUNT] = [
    "Zora",
    "Izlazak sunca",
    "Podne",
    "Ikindija",
    "Akšam",
    "Jacija",
];

const DAWN: usize = 0;
const SUNSET: usize = 4;

/// One day's prayer schedule for one location.
#[derive(Debug, Clone)]
pub struct Vaktija {
    /// Location name as the API spells it (e.g. "Sarajevo").
    pub location: String,
    /// Hijri date label, carried verbatim and never parsed.
    pub date_hijri: String,
    /// Gregorian date label, carried verbatim and never parsed.
    pub date_gregorian: String,
    /// The six prayer times in fixed daily order. The raw data is assumed
    /// non-decreasing through Akšam; Jacija logically extends until the
    /// next day's Zora.
    pub vakats: [TimeOfDay; VAKAT_COUNT],
}

/// The fixed document shape served by api.vaktija.ba. Unknown keys (the
/// API also sends an `id`, among others) are ignored; missing keys or
/// wrong types fail the decode.
#[derive(Deserialize)]
struct RawVaktija {
    lokacija: String,
    datum: Vec<String>,
    vakat: Vec<String>,
}

impl Vaktija {
    /// Decode a raw API document.
    ///
    /// Fails with [`VaktijaError::MalformedDocument`] if the JSON is
    /// invalid, a key is missing, or either array has the wrong length,
    /// and with [`VaktijaError::InvalidTimeFormat`] if one of the six
    /// time strings is malformed. Never partially succeeds.
    pub fn from_json(json: &str) -> Result<Vaktija, VaktijaError> {
        let raw: RawVaktija = serde_json::from_str(json)
            .map_err(|e| VaktijaError::MalformedDocument(e.to_string()))?;

        let [date_hijri, date_gregorian]: [String; 2] =
            raw.datum.try_into().map_err(|v: Vec<String>| {
                VaktijaError::MalformedDocument(format!(
                    "expected 2 date labels in \"datum\", got {}",
                    v.len()
                ))
            })?;

        if raw.vakat.len() != VAKAT_COUNT {
            return Err(VaktijaError::MalformedDocument(format!(
                "expected {} prayer times in \"vakat\", got {}",
                VAKAT_COUNT,
                raw.vakat.len()
            )));
        }

        let mut vakats = [TimeOfDay::new(0, 0); VAKAT_COUNT];
        for (slot, s) in vakats.iter_mut().zip(&raw.vakat) {
            *slot = s.parse()?;
        }

        Ok(Vaktija {
            location: raw.lokacija,
            date_hijri,
            date_gregorian,
            vakats,
        })
    }

    /// Index of the next prayer slot relative to `now`.
    ///
    /// Policy (one of two divergent rules in the lineage; this is the
    /// richer one, adopted here and tested at every boundary): scan the
    /// slots in daily order and return the first whose time is at or
    /// after `now`. If that match is slot 0 and `now` is strictly earlier
    /// than it, the pre-dawn hours still belong to the previous day's
    /// Jacija, so return 5 instead — but `now` exactly at the Zora time
    /// returns 0. If no slot matches, `now` is at or past the Jacija
    /// time and Jacija runs until the next dawn, so return 5.
    pub fn next_vakat(&self, now: TimeOfDay) -> usize {
        for (i, &vakat) in self.vakats.iter().enumerate() {
            if now <= vakat {
                if i == DAWN && now < vakat {
                    return VAKAT_COUNT - 1;
                }
                return i;
            }
        }

        VAKAT_COUNT - 1
    }

    /// Index of the prayer slot `now` falls within: one before the next
    /// slot, with a non-negative wrap at the day boundary.
    pub fn current_vakat(&self, now: TimeOfDay) -> usize {
        (self.next_vakat(now) + VAKAT_COUNT - 1) % VAKAT_COUNT
    }

    /// The span of the night: Akšam to the next day's Zora.
    fn night_span(&self) -> TimeOfDay {
        self.vakats[DAWN].wrapping_sub(self.vakats[SUNSET])
    }

    /// The midpoint of the night, half the night span back from Zora.
    /// Recomputed on demand, never stored.
    pub fn midnight(&self) -> TimeOfDay {
        self.vakats[DAWN]
            .wrapping_sub(self.night_span().div(2).whole_minutes())
    }

    /// The start of the last third of the night, one third of the night
    /// span back from Zora.
    pub fn last_third(&self) -> TimeOfDay {
        self.vakats[DAWN]
            .wrapping_sub(self.night_span().div(3).whole_minutes())
    }
}
