/// Number formatting helpers.
///
/// This module turns `f64` values into text the way the language prints them.
/// Two formats exist: the compact general format used by `write`, and the
/// shortest round-trip format used when a number is concatenated with a
/// string.
pub mod num;
