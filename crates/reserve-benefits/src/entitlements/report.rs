use serde::Serialize;

use super::domain::PayoutBucket;
use super::evaluation::{EntitlementRecord, EvaluationResult};

/// Display grouping of an evaluation by subtotal bucket, used by the CLI
/// renderer and anyone presenting the result as three payout tables.
#[derive(Debug, Clone, Serialize)]
pub struct BucketSection {
    pub bucket: PayoutBucket,
    pub bucket_label: &'static str,
    pub subtotal: f64,
    pub records: Vec<EntitlementRecord>,
}

/// Partition the result into the three bucket tables, preserving record
/// order. Empty buckets are omitted.
pub fn bucket_sections(result: &EvaluationResult) -> Vec<BucketSection> {
    PayoutBucket::ordered()
        .into_iter()
        .filter_map(|bucket| {
            let records: Vec<EntitlementRecord> =
                result.bucket_records(bucket).cloned().collect();
            if records.is_empty() {
                return None;
            }
            Some(BucketSection {
                bucket,
                bucket_label: bucket.label(),
                subtotal: result.totals.for_bucket(bucket),
                records,
            })
        })
        .collect()
}
