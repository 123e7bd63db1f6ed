/// Currency codes the entry form offers by default — the set the
/// conversion backend ships rates for. Submitting another code is not
/// blocked client-side; the backend is the authority on what converts.
pub const SUPPORTED_CURRENCIES: [&str; 6] = ["USD", "EUR", "GBP", "JPY", "CAD", "AUD"];

/// Normalize a currency code for submission: trim and uppercase,
/// matching how the backend normalizes codes on its side.
#[must_use]
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}
