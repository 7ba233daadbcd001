//! Shared keyword volume distribution.

use crate::domain::entities::KeywordVolume;

/// Splits a total monthly volume across an ordered keyword list.
///
/// The first three keywords take 35%, 25% and 20% of the total; every
/// keyword from index 3 onward takes an even share of the remaining 20%.
/// Each share is rounded independently, and whatever positive remainder is
/// left after rounding is added to the first keyword, so the outputs always
/// sum back to `total_volume`.
///
/// With fewer than four keywords the fixed percentages cover less than the
/// whole total; the remainder step absorbs the gap. That behavior is load
/// bearing and kept as is.
pub fn distribute_volumes(keywords: &[String], total_volume: u64) -> Vec<KeywordVolume> {
    let mut volumes = Vec::with_capacity(keywords.len());
    let mut remaining = total_volume as i64;

    for (index, keyword) in keywords.iter().enumerate() {
        let percentage = match index {
            0 => 0.35,
            1 => 0.25,
            2 => 0.20,
            _ => 0.20 / (keywords.len() - 3) as f64,
        };

        let volume = (total_volume as f64 * percentage).round() as u64;
        remaining -= volume as i64;

        volumes.push(KeywordVolume {
            keyword: keyword.clone(),
            volume,
        });
    }

    if remaining > 0 {
        if let Some(first) = volumes.first_mut() {
            first.volume += remaining as u64;
        }
    }

    volumes
}
