//! DoS prevention constants.
//!
//! These limits keep pathological messages (thousands of repeated
//! delimiters, self-referencing emoji aliases) from degrading toward
//! quadratic time or looping forever.

/// Maximum number of replacements a non-partitioning pass applies per run.
///
/// Each replacement splices the buffer, so an unbounded count on input like
/// `&gt;` repeated thousands of times would be quadratic. Occurrences past
/// the budget are left as literal text.
pub const MAX_PASS_REPLACEMENTS: usize = 100;

/// Maximum number of `alias:` hops followed when resolving an emoji.
pub const MAX_EMOJI_ALIAS_DEPTH: usize = 16;
