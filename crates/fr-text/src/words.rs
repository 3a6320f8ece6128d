//! French number-to-words conversion
//!
//! French counting keeps remnants of a vigesimal system: 70-79 and 90-99
//! have no dedicated tens word and are composed from the previous tens word
//! plus a teens suffix ("soixante-onze", "quatre-vingt-dix"). The tables and
//! branches below reproduce those rules exactly.

/// French unit names (0-9), index 0 unused in composition
const UNITS: [&str; 10] = [
    "", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf",
];

/// French tens names for each tens digit
///
/// Index 7 repeats "soixante" and index 9 repeats "quatre-vingt": those tiers
/// are rendered by composing the previous tens word with a teens suffix.
const TENS: [&str; 10] = [
    "",
    "",
    "vingt",
    "trente",
    "quarante",
    "cinquante",
    "soixante",
    "soixante",
    "quatre-vingt",
    "quatre-vingt",
];

/// French teen names (10-19), irregular lexical forms
const TEENS: [&str; 10] = [
    "dix",
    "onze",
    "douze",
    "treize",
    "quatorze",
    "quinze",
    "seize",
    "dix-sept",
    "dix-huit",
    "dix-neuf",
];

/// Convert a number in 0..1000 to French words (lowercase)
///
/// Returns an empty string for 0; callers handle the zero word themselves.
fn convert_hundreds(n: u64) -> String {
    let mut result = String::new();

    let hundreds = n / 100;
    let remainder = n % 100;

    if hundreds > 0 {
        if hundreds == 1 {
            result.push_str("cent");
        } else {
            result.push_str(UNITS[hundreds as usize]);
            result.push_str(" cent");
        }
        // "cents" only when an exact multiple above one hundred
        if hundreds > 1 && remainder == 0 {
            result.push('s');
        }
        if remainder > 0 {
            result.push(' ');
        }
    }

    if (10..20).contains(&remainder) {
        result.push_str(TEENS[(remainder - 10) as usize]);
    } else {
        let tens = remainder / 10;
        let units = remainder % 10;

        if tens == 7 || tens == 9 {
            // Composed tiers: soixante-dix..., quatre-vingt-dix...
            result.push_str(TENS[tens as usize]);
            if units > 0 {
                result.push('-');
                result.push_str(TEENS[units as usize]);
            } else {
                result.push_str("-dix");
            }
        } else {
            if tens > 0 {
                result.push_str(TENS[tens as usize]);
                // "quatre-vingts" pluralizes when nothing follows
                if tens == 8 && units == 0 {
                    result.push('s');
                }
            }

            if units > 0 {
                if tens > 0 {
                    result.push('-');
                }

                // Conjunctive joiner before a final "un" for tens 2..=6
                if units == 1 && (2..=6).contains(&tens) {
                    result.push_str("et-un");
                } else {
                    result.push_str(UNITS[units as usize]);
                }
            }
        }
    }

    result
}

/// Convert a non-negative integer to French words (lowercase)
///
/// "mille" is never pluralized and drops the leading "un"; "million" is
/// pluralized when the count exceeds one.
///
/// # Examples
/// ```
/// use fr_text::format_number_words;
/// assert_eq!(format_number_words(71), "soixante-onze");
/// assert_eq!(format_number_words(1000), "mille");
/// assert_eq!(format_number_words(2000000), "deux millions");
/// ```
pub fn format_number_words(n: u64) -> String {
    if n == 0 {
        return "zéro".to_string();
    }
    if n == 1 {
        return "un".to_string();
    }

    if n < 1000 {
        return convert_hundreds(n);
    }

    if n < 1_000_000 {
        let thousands = n / 1000;
        let remainder = n % 1000;

        let mut result = if thousands == 1 {
            "mille".to_string()
        } else {
            format!("{} mille", convert_hundreds(thousands))
        };

        if remainder > 0 {
            result.push(' ');
            result.push_str(&convert_hundreds(remainder));
        }

        return result;
    }

    let millions = n / 1_000_000;
    let remainder = n % 1_000_000;

    // The millions count recurses: it can itself exceed 999
    // ("deux mille cinq cents millions")
    let mut result = if millions == 1 {
        "un million".to_string()
    } else {
        format!("{} millions", format_number_words(millions))
    };

    if remainder >= 1000 {
        let thousands = remainder / 1000;
        let last = remainder % 1000;

        if thousands == 1 {
            result.push_str(" mille");
        } else {
            result.push(' ');
            result.push_str(&convert_hundreds(thousands));
            result.push_str(" mille");
        }

        if last > 0 {
            result.push(' ');
            result.push_str(&convert_hundreds(last));
        }
    } else if remainder > 0 {
        result.push(' ');
        result.push_str(&convert_hundreds(remainder));
    }

    result
}

/// Convert a currency amount to French words, capitalized
///
/// The amount is split into integer major units and a centimes remainder
/// rounded to the nearest hundredth. A nonzero centimes part is appended with
/// "et" and the centime noun pluralized when the count differs from one.
/// Only the first character is uppercased.
///
/// # Examples
/// ```
/// use fr_text::format_amount_words;
/// assert_eq!(format_amount_words(0.0), "Zéro");
/// assert_eq!(format_amount_words(10.50), "Dix et cinquante centimes");
/// assert_eq!(format_amount_words(10.01), "Dix et un centime");
/// ```
pub fn format_amount_words(amount: f64) -> String {
    let amount = amount.max(0.0);
    let major = amount.floor() as u64;
    let centimes = ((amount - amount.floor()) * 100.0).round() as u64;

    let mut result = format_number_words(major);

    if centimes > 0 {
        result.push_str(" et ");
        if centimes == 1 {
            result.push_str("un centime");
        } else {
            result.push_str(&convert_hundreds(centimes));
            result.push_str(" centimes");
        }
    }

    capitalize_first(&result)
}

/// Uppercase only the first character of a string
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
