/// Range predicates.
///
/// Checks whether an integer, float or bigint lies inside the inclusive range
/// of an integer width, and reports which bound it crosses when it does not.
pub mod range;
/// String round-trip validation.
///
/// A string is accepted only if it is exactly the canonical rendering of the
/// value it parses to. Everything else is classified by what is wrong with
/// it: emptiness, whitespace, signs, leading zeros or general malformation.
pub mod string;
/// Float-to-integer validation.
///
/// Decides whether truncating a float to an integer width lost anything, and
/// if it did, whether the float was out of range, fractional or imprecise.
pub mod float;
