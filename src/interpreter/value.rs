/// The runtime value union and its conversions, inspection forms and kind
/// strings.
pub mod core;
/// Transient write handles produced while evaluating assignments.
pub mod lvalue;
