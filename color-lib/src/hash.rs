/// Folds the characters of `name` into a `u64` and scrambles the result.
///
/// The fold alone (`h * 31 + c`) leaves short names clustered, e.g. "a" and
/// "b" differ by one, so the murmur3 finalizer spreads them over the whole
/// range before any reduction takes place.
pub fn name_hash(name: &str) -> u64 {
    let folded = name
        .chars()
        .fold(0u64, |h, c| h.wrapping_mul(31).wrapping_add(c as u64));
    avalanche(folded)
}

// fmix64 from MurmurHash3.
fn avalanche(mut h: u64) -> u64 {
    h ^= h >> 33;
    h = h.wrapping_mul(0xff51_afd7_ed55_8ccd);
    h ^= h >> 33;
    h = h.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    h ^= h >> 33;
    h
}
