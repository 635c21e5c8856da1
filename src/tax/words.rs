//! Amount in words for the legal line of an invoice, in the Indian numbering system

use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive};

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const CRORE: u64 = 10_000_000;
const LAKH: u64 = 100_000;
const THOUSAND: u64 = 1_000;

/// Words for 0-99. Zero is the empty string.
fn two_digit_words(n: u64) -> String {
    match n {
        0..=19 => ONES[n as usize].to_string(),
        _ => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                ones => format!("{} {}", tens, ONES[ones as usize]),
            }
        }
    }
}

/// Words for 0-999. Zero is the empty string.
fn three_digit_words(n: u64) -> String {
    let hundreds = n / 100;
    let rest = two_digit_words(n % 100);
    match (hundreds, rest.is_empty()) {
        (0, _) => rest,
        (h, true) => format!("{} Hundred", ONES[h as usize]),
        (h, false) => format!("{} Hundred {}", ONES[h as usize], rest),
    }
}

/// Words for any whole number using crore, lakh and thousand groups.
/// Zero is the empty string.
fn indian_number_words(n: u64) -> String {
    let crores = n / CRORE;
    let lakhs = (n % CRORE) / LAKH;
    let thousands = (n % LAKH) / THOUSAND;
    let remainder = n % THOUSAND;

    let mut parts: Vec<String> = Vec::new();
    if crores > 0 {
        // 100 crore and above keeps counting in crores
        parts.push(format!("{} Crore", indian_number_words(crores)));
    }
    if lakhs > 0 {
        parts.push(format!("{} Lakh", two_digit_words(lakhs)));
    }
    if thousands > 0 {
        parts.push(format!("{} Thousand", two_digit_words(thousands)));
    }
    if remainder > 0 {
        parts.push(three_digit_words(remainder));
    }

    parts.join(" ").split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Spell a rupee amount in Indian-English words for an invoice.
///
/// The amount is rounded to paise first (half away from zero). Zero is
/// `"Zero Only"`, one rupee is singular, paise follow as `"and <n> Paise"`, and
/// the text always ends with `"Only"`.
///
/// ```
/// use bigdecimal::BigDecimal;
/// use gst_invoice_core::amount_in_words;
/// use std::str::FromStr;
///
/// assert_eq!(amount_in_words(&BigDecimal::from(1)), "One Rupee Only");
/// assert_eq!(
///     amount_in_words(&BigDecimal::from_str("100.50").unwrap()),
///     "One Hundred Rupees and Fifty Paise Only"
/// );
/// ```
pub fn amount_in_words(amount: &BigDecimal) -> String {
    let rounded = amount.with_scale_round(2, RoundingMode::HalfUp);
    if rounded == BigDecimal::from(0) {
        return "Zero Only".to_string();
    }

    let negative = rounded < BigDecimal::from(0);
    let total_paise = (rounded.abs() * BigDecimal::from(100))
        .to_u64()
        .unwrap_or(u64::MAX);
    let rupees = total_paise / 100;
    let paise = total_paise % 100;

    let mut words = String::new();
    if negative {
        words.push_str("Minus ");
    }

    if rupees > 0 {
        words.push_str(&indian_number_words(rupees));
        words.push_str(if rupees == 1 { " Rupee" } else { " Rupees" });
        if paise > 0 {
            words.push_str(" and ");
        }
    }
    if paise > 0 {
        words.push_str(&two_digit_words(paise));
        words.push_str(" Paise");
    }

    words.push_str(" Only");
    words
}

/// [`amount_in_words`] for a raw floating-point amount.
///
/// Non-finite input (an upstream parsing failure) gives `"Zero Only"` instead
/// of leaking into invoice text.
pub fn amount_in_words_f64(amount: f64) -> String {
    match crate::utils::display::decimal_from_f64(amount) {
        Some(decimal) => amount_in_words(&decimal),
        None => "Zero Only".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn words(value: &str) -> String {
        amount_in_words(&BigDecimal::from_str(value).unwrap())
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(words("0"), "Zero Only");
        assert_eq!(words("1"), "One Rupee Only");
        assert_eq!(words("2"), "Two Rupees Only");
        assert_eq!(words("99"), "Ninety Nine Rupees Only");
        assert_eq!(words("100"), "One Hundred Rupees Only");
        assert_eq!(words("999"), "Nine Hundred Ninety Nine Rupees Only");
        assert_eq!(words("1000"), "One Thousand Rupees Only");
        assert_eq!(words("100000"), "One Lakh Rupees Only");
        assert_eq!(words("10000000"), "One Crore Rupees Only");
    }

    #[test]
    fn test_teens_and_tens() {
        assert_eq!(words("11"), "Eleven Rupees Only");
        assert_eq!(words("19"), "Nineteen Rupees Only");
        assert_eq!(words("20"), "Twenty Rupees Only");
        assert_eq!(words("21"), "Twenty One Rupees Only");
        assert_eq!(words("110"), "One Hundred Ten Rupees Only");
        assert_eq!(words("1015"), "One Thousand Fifteen Rupees Only");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(
            words("12345678"),
            "One Crore Twenty Three Lakh Forty Five Thousand Six Hundred Seventy Eight Rupees Only"
        );
        assert_eq!(words("531"), "Five Hundred Thirty One Rupees Only");
        assert_eq!(words("200005"), "Two Lakh Five Rupees Only");
        assert_eq!(words("10000000000"), "One Thousand Crore Rupees Only");
    }

    #[test]
    fn test_paise() {
        assert_eq!(words("100.50"), "One Hundred Rupees and Fifty Paise Only");
        assert_eq!(words("1.01"), "One Rupee and One Paise Only");
        assert_eq!(words("0.75"), "Seventy Five Paise Only");
        assert_eq!(words("10.999"), "Eleven Rupees Only");
        assert_eq!(words("10.005"), "Ten Rupees and One Paise Only");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(words("-5"), "Minus Five Rupees Only");
    }

    #[test]
    fn test_f64_variant() {
        assert_eq!(amount_in_words_f64(100.5), "One Hundred Rupees and Fifty Paise Only");
        assert_eq!(amount_in_words_f64(f64::NAN), "Zero Only");
        assert_eq!(amount_in_words_f64(f64::INFINITY), "Zero Only");
    }
}
