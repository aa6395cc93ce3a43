//! JSON equivalence oracle
//!
//! Decides pass/fail for response-body assertions. Both predicates are
//! read-only; the caller records the verdict into its result record.

use serde_json::Value;

/// Whether `wanted` (JSON text) and `got` (raw response bytes) parse to
/// structurally equal JSON documents.
///
/// Object key order is immaterial, array order is significant, and scalar
/// comparison is exact. A parse failure on either side makes the pair
/// non-equivalent; it never panics.
pub fn json_equivalent(wanted: &str, got: &[u8]) -> bool {
    let wanted: Value = match serde_json::from_str(wanted) {
        Ok(v) => v,
        Err(_) => return false,
    };
    let got: Value = match serde_json::from_slice(got) {
        Ok(v) => v,
        Err(_) => return false,
    };
    wanted == got
}

/// Whether `wanted` is the empty string and `got` has zero length.
///
/// Used for endpoints whose success response carries no body, e.g. 204.
pub fn both_empty(wanted: &str, got: &[u8]) -> bool {
    wanted.is_empty() && got.is_empty()
}
