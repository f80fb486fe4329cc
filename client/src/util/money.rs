//! VND price formatting.

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

const GROUP_SEPARATOR: char = '.';
const CURRENCY_SUFFIX: char = 'đ';

/// Format whole dong with `.` grouping and a trailing `đ`, e.g. `200.000đ`.
#[must_use]
pub fn format_vnd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + CURRENCY_SUFFIX.len_utf8());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out.push(CURRENCY_SUFFIX);
    out
}

/// `price × quantity`, saturating at `u64::MAX`.
#[must_use]
pub fn line_total(price: u64, quantity: u32) -> u64 {
    price.saturating_mul(u64::from(quantity))
}
