//! Distance ranking of provider records against the current device fix.

use crate::geo::{distance_km, format_distance};
use crate::provider::{Distance, ProviderRecord, RankedProvider};
use crate::LocationReading;

/// Attach distances and produce a distance-ascending ordering.
///
/// With no fix, the output is the input in its original order with no
/// annotations; that is the designed fallback, not an error. With a fix,
/// records carrying a usable coordinate are annotated and stably sorted
/// ascending by distance (equal distances keep feed order, there is no
/// secondary key); records without one follow in feed order as an
/// unannotated tail, visible but excluded from distance math.
///
/// The output is always a permutation of the input. The function is pure
/// and idempotent: identical inputs produce identical output, and nothing
/// is retained between calls. Callers re-run it in full whenever either
/// input changes.
#[must_use]
pub fn rank_by_distance(
    providers: &[ProviderRecord],
    location: Option<&LocationReading>,
) -> Vec<RankedProvider> {
    let Some(reading) = location else {
        return providers
            .iter()
            .map(|provider| RankedProvider {
                provider: provider.clone(),
                distance: None,
            })
            .collect();
    };

    let mut annotated: Vec<(f64, &ProviderRecord)> = Vec::with_capacity(providers.len());
    let mut tail: Vec<&ProviderRecord> = Vec::new();
    for provider in providers {
        match provider.coordinate {
            Some(coordinate) => annotated.push((distance_km(reading.coordinate, coordinate), provider)),
            None => tail.push(provider),
        }
    }

    // Vec::sort_by is stable, so equal distances keep their feed order.
    annotated.sort_by(|a, b| a.0.total_cmp(&b.0));

    annotated
        .into_iter()
        .map(|(km, provider)| RankedProvider {
            provider: provider.clone(),
            distance: Some(Distance {
                km,
                label: format_distance(km),
            }),
        })
        .chain(tail.into_iter().map(|provider| RankedProvider {
            provider: provider.clone(),
            distance: None,
        }))
        .collect()
}
