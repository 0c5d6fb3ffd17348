//! Coarse terrain-altitude lookup over half-degree buckets.

use std::collections::HashMap;

use crate::angle::Dms;

/// Key of one altitude bucket: `((lat degree, lat minutes), (long degree,
/// long minutes))` with minutes quantized to 0 or 30.
pub type BucketKey = ((i16, u8), (i16, u8));

/// Sparse map from half-degree buckets to the highest known terrain
/// altitude inside each bucket, in whatever unit the source table uses.
///
/// Charts are allowed to ship no altitude data at all; an empty index is
/// valid and answers every lookup with `None`.
#[derive(Debug, Clone, Default)]
pub struct AltitudeIndex {
    buckets: HashMap<BucketKey, i32>,
}

impl AltitudeIndex {
    /// Wrap a loaded bucket table.
    pub fn new(buckets: HashMap<BucketKey, i32>) -> Self {
        Self { buckets }
    }

    /// An index without data.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The number of buckets with a known altitude.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether the index holds no buckets at all.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// The highest known terrain altitude around the given point.
    ///
    /// Each axis is quantized onto its half-degree bucket independently:
    /// minutes up to and including 30 snap down to 0, larger minutes snap
    /// to 30, and seconds are dropped. `None` means the bucket is absent,
    /// which is normal for a sparse or missing table.
    pub fn altitude_at(&self, lat: Dms, long: Dms) -> Option<i32> {
        self.buckets
            .get(&(bucket_axis(lat), bucket_axis(long)))
            .copied()
    }
}

/// One axis of a bucket key.
fn bucket_axis(angle: Dms) -> (i16, u8) {
    let minutes = if angle.minutes() <= 30 { 0 } else { 30 };
    (angle.degrees(), minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> AltitudeIndex {
        AltitudeIndex::new(HashMap::from([
            (((44, 0), (39, 0)), 500),
            (((44, 30), (39, 30)), 1200),
        ]))
    }

    fn dms(deg: i16, min: u8, sec: f64) -> Dms {
        Dms::new(deg, min, sec).unwrap()
    }

    #[test]
    fn direct_bucket_hit() {
        assert_eq!(
            index().altitude_at(dms(44, 0, 0.0), dms(39, 0, 0.0)),
            Some(500)
        );
    }

    #[test]
    fn minutes_quantize_per_axis() {
        // lat 10' snaps to 0, long 40' snaps to 30: that bucket is absent
        assert_eq!(index().altitude_at(dms(44, 10, 0.0), dms(39, 40, 0.0)), None);
    }

    #[test]
    fn upper_half_snaps_to_thirty() {
        assert_eq!(
            index().altitude_at(dms(44, 45, 0.0), dms(39, 31, 0.0)),
            Some(1200)
        );
    }

    #[test]
    fn thirty_minutes_snap_down_to_zero() {
        assert_eq!(
            index().altitude_at(dms(44, 30, 0.0), dms(39, 30, 0.0)),
            Some(500)
        );
    }

    #[test]
    fn quantization_is_idempotent() {
        let quantized = bucket_axis(dms(44, 30, 0.0));
        assert_eq!(quantized, bucket_axis(dms(quantized.0, quantized.1, 0.0)));

        let quantized = bucket_axis(dms(44, 0, 0.0));
        assert_eq!(quantized, bucket_axis(dms(quantized.0, quantized.1, 0.0)));
    }

    #[test]
    fn seconds_are_dropped() {
        assert_eq!(
            index().altitude_at(dms(44, 0, 59.9), dms(39, 0, 59.9)),
            Some(500)
        );
    }

    #[test]
    fn empty_index_knows_nothing() {
        let empty = AltitudeIndex::empty();
        assert!(empty.is_empty());
        assert_eq!(empty.altitude_at(dms(44, 0, 0.0), dms(39, 0, 0.0)), None);
    }
}
