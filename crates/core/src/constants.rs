/// Reference currency used to derive cross rates when no direct or inverse rate is stored.
pub const DEFAULT_ANCHOR_CURRENCY: &str = "USD";

/// Length of a currency code inside a concatenated pair such as `USDEUR`.
pub const CURRENCY_CODE_LENGTH: usize = 3;
