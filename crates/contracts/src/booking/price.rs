/// Fallback base price, in whole dollars, for labels no number can be
/// read from.
pub const FALLBACK_PRICE: u32 = 49;

/// Best-effort parse of a free-text price label into a base price:
/// "Starting at $199" reads as 199.
///
/// Takes the first contiguous run of decimal digits. Labels with no
/// digits (or a run too large for `u32`) fall back to
/// [`FALLBACK_PRICE`] and log a warning; the caller never sees an
/// error because the labels are marketing copy, not data.
pub fn extract_price(label: &str) -> u32 {
    let digits: String = label
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    match digits.parse::<u32>() {
        Ok(value) => value,
        Err(_) => {
            log::warn!(
                "no usable price in label '{}', falling back to ${}",
                label,
                FALLBACK_PRICE
            );
            FALLBACK_PRICE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_first_digit_run() {
        assert_eq!(extract_price("Starting at $199"), 199);
        assert_eq!(extract_price("$49 per session"), 49);
        assert_eq!(extract_price("From 12 to 15 dollars"), 12);
    }

    #[test]
    fn falls_back_without_digits() {
        assert_eq!(extract_price("no digits here"), FALLBACK_PRICE);
        assert_eq!(extract_price(""), FALLBACK_PRICE);
    }

    #[test]
    fn falls_back_on_overflow() {
        assert_eq!(extract_price("$99999999999999999999"), FALLBACK_PRICE);
    }
}
