//! Hashing primitives.

/// [`BuildHasher`][std::hash::BuildHasher] for a fast, non-cryptographic hash that is optimized for quality.
///
/// The hash is reasonably suitable for hash tables keyed by arbitrary text, where some degree of collision resistance
/// matters as much as raw speed.
///
/// Currently, [`foldhash`][foldhash] is used as the underlying implementation.
///
/// [foldhash]: http://github.com/orlp/foldhash
pub type FastBuildHasher = foldhash::quality::RandomState;
