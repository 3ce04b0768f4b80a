/// Numeric conversion helpers.
///
/// This module provides the bit-level building blocks shared by the guards,
/// the coercers and the 64-bit operator engine: safe-integer checks, exact
/// float-to-integer conversion, native truncation rules (`ToInt32`,
/// `ToUint32`, `asIntN(64)`, `asUintN(64)`) and the canonical float
/// rendering used for round-trip validation.
pub mod num;
