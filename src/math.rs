//! Small integer-only helpers used by the bucket-size policy.
//!
//! The original source this crate is modeled after derives bucket
//! capacities from `sqrt`/`log2` over floats. Since every bucket capacity in
//! this crate is constrained to be a power of two, all of that reduces to
//! integer bit operations and no floating point (and therefore no `libm`
//! shim for `no_std`) is needed anywhere in the core.

/// Returns `floor(log2(n))` for `n >= 1`.
///
/// # Panics
///
/// Panics if `n == 0`.
pub(crate) fn ilog2(n: usize) -> u32 {
    assert!(n > 0, "ilog2 of zero");
    usize::BITS - 1 - n.leading_zeros()
}

/// Returns `floor(sqrt(n))` using integer-only Newton's method.
pub(crate) fn isqrt(n: usize) -> usize {
    if n < 2 {
        return n;
    }
    let mut x = n;
    let mut y = (x + 1) / 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}
