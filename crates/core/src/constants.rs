/// Decimal precision for return calculations, applied before any
/// presentation-layer rounding.
pub const DECIMAL_PRECISION: u32 = 8;
