//! Byte buffer helpers shared by the codec and the providers.

/// Concatenate two buffers: `a` immediately followed by `b`.
///
/// The result is exactly `a.len() + b.len()` bytes long.
#[must_use]
pub fn combine(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(a.len().saturating_add(b.len()));
    out.extend_from_slice(a);
    out.extend_from_slice(b);
    out
}

/// Constant-time byte comparison.
///
/// Returns `true` iff both slices have equal length and identical contents.
/// Uses bitwise OR accumulation so the running time does not depend on the
/// position of the first differing byte.
///
/// The early return on length mismatch is acceptable: digest lengths are
/// fixed per algorithm and public.
#[must_use]
pub fn compare_bytes(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    std::hint::black_box(diff) == 0
}
