/// Narrows a 64-bit integer literal to the 32-bit width values carry at
/// runtime.
///
/// Literals are scanned as 64-bit decimals and stored as 32-bit integers.
/// Values outside the 32-bit range are truncated to their low 32 bits rather
/// than rejected; this is a documented limitation of the literal pipeline.
///
/// ## Parameters
/// - `value`: The scanned 64-bit literal value.
///
/// ## Returns
/// The low 32 bits of `value`, reinterpreted as `i32`.
///
/// ## Example
/// ```
/// use fog::util::num::narrow_int_literal;
///
/// assert_eq!(narrow_int_literal(42), 42);
/// assert_eq!(narrow_int_literal(-7), -7);
///
/// // Out-of-range literals keep only their low 32 bits.
/// assert_eq!(narrow_int_literal(4_294_967_296), 0);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn narrow_int_literal(value: i64) -> i32 {
    value as i32
}

/// Widens a 32-bit integer to a 32-bit float for mixed arithmetic.
///
/// Large magnitudes lose precision, matching the usual semantics of an
/// integer-to-float cast.
///
/// ## Example
/// ```
/// use fog::util::num::int_to_float;
///
/// assert_eq!(int_to_float(3), 3.0);
/// assert_eq!(int_to_float(-12), -12.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn int_to_float(value: i32) -> f32 {
    value as f32
}
