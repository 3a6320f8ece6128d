//! French text formatting for cheque rendering
//!
//! This crate provides:
//! - French number-to-words conversion (vingt-et-un, soixante-dix, quatre-vingts...)
//! - Currency amount wording with a centimes clause
//! - Amount display formatting (thousands grouping, fixed two decimals)
//! - French date formatting (dd/mm/yyyy)
//!
//! # Example
//!
//! ```
//! use fr_text::{format_amount_words, format_amount};
//!
//! assert_eq!(format_amount_words(12500.50), "Douze mille cinq cents et cinquante centimes");
//! assert_eq!(format_amount(12500.5), "12,500.50");
//! ```

mod formatter;
mod words;

pub use formatter::{
    format_amount, format_amount_lenient, format_french_date, parse_amount, parse_french_date,
};
pub use words::{format_amount_words, format_number_words};

use thiserror::Error;

/// Errors that can occur during French text processing
#[derive(Debug, Error)]
pub enum FrTextError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// Result type for French text operations
pub type Result<T> = std::result::Result<T, FrTextError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_words() {
        assert_eq!(format_number_words(0), "zéro");
        assert_eq!(format_number_words(1), "un");
        assert_eq!(format_number_words(21), "vingt-et-un");
        assert_eq!(format_number_words(80), "quatre-vingts");
        assert_eq!(format_number_words(100), "cent");
    }

    #[test]
    fn test_format_amount_words() {
        assert_eq!(format_amount_words(0.0), "Zéro");
        assert_eq!(format_amount_words(1.0), "Un");
        assert_eq!(
            format_amount_words(100.50),
            "Cent et cinquante centimes"
        );
    }
}
