//! Distances between feature vectors.
//!
//! Both metrics are integer-only so equal inputs always rank equally and
//! tie-breaking in the corpus is reproducible. Vectors are compared column
//! by column against the schema; columns beyond the shorter input are
//! ignored (length agreement is checked by the corpus before any scan).

use crate::features::FeatureSchema;

/// Number of categorical columns (token, rule, index) on which `a` and `b`
/// disagree.
pub fn l0_distance(schema: &FeatureSchema, a: &[i32], b: &[i32]) -> u32 {
    let mut count = 0;
    for ((meta, x), y) in schema.columns().iter().zip(a).zip(b) {
        if meta.kind.is_categorical() && x != y {
            count += 1;
        }
    }
    count
}

/// Sum of mismatch costs over token and rule columns on which `a` and `b`
/// disagree.
///
/// This is the metric nearest-neighbor search ranks by.
#[inline]
pub fn weighted_l0_distance(schema: &FeatureSchema, a: &[i32], b: &[i32]) -> u32 {
    let mut count = 0;
    for ((meta, x), y) in schema.columns().iter().zip(a).zip(b) {
        if meta.kind.is_weighted() && x != y {
            count += meta.mismatch_cost;
        }
    }
    count
}
