//! Indonesian cardinal numbers.

use crate::error::{EjaanError, Result};
use crate::numeral::renderer::NumeralRenderer;

/// Largest number [`IndonesianNumerals`] can spell out.
pub const MAX_NUMERAL: u64 = 999_999_999_999_999;

const UNITS: [&str; 10] = [
    "nol", "satu", "dua", "tiga", "empat", "lima", "enam", "tujuh", "delapan", "sembilan",
];

const SCALES: [(u64, &str); 3] = [
    (1_000_000_000_000, "triliun"),
    (1_000_000_000, "miliar"),
    (1_000_000, "juta"),
];

/// Renderer for locale `id`, from `nol` up to [`MAX_NUMERAL`].
///
/// ```
/// use ejaan::numeral::{IndonesianNumerals, NumeralRenderer};
///
/// let words = IndonesianNumerals.to_words(2_115, "id").unwrap();
/// assert_eq!(words, "dua ribu seratus lima belas");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct IndonesianNumerals;

impl IndonesianNumerals {
    /// Spell out `n` without locale or range checks beyond the scale table.
    pub fn spell(n: u64) -> String {
        if n == 0 {
            return UNITS[0].to_string();
        }

        let mut words: Vec<String> = Vec::new();
        let mut rest = n;

        for (scale, label) in SCALES {
            if rest >= scale {
                words.push(format!("{} {label}", below_thousand(rest / scale)));
                rest %= scale;
            }
        }

        if rest >= 1_000 {
            let thousands = rest / 1_000;
            if thousands == 1 {
                words.push("seribu".to_string());
            } else {
                words.push(format!("{} ribu", below_thousand(thousands)));
            }
            rest %= 1_000;
        }

        if rest > 0 {
            words.push(below_thousand(rest));
        }

        words.join(" ")
    }
}

/// 1..=999.
fn below_thousand(n: u64) -> String {
    let hundreds = n / 100;
    let rest = n % 100;

    let mut parts: Vec<String> = Vec::new();
    match hundreds {
        0 => {}
        1 => parts.push("seratus".to_string()),
        h => parts.push(format!("{} ratus", UNITS[h as usize])),
    }

    match rest {
        0 => {}
        1..=9 => parts.push(UNITS[rest as usize].to_string()),
        10 => parts.push("sepuluh".to_string()),
        11 => parts.push("sebelas".to_string()),
        12..=19 => parts.push(format!("{} belas", UNITS[(rest - 10) as usize])),
        _ => {
            parts.push(format!("{} puluh", UNITS[(rest / 10) as usize]));
            if rest % 10 > 0 {
                parts.push(UNITS[(rest % 10) as usize].to_string());
            }
        }
    }

    parts.join(" ")
}

impl NumeralRenderer for IndonesianNumerals {
    fn to_words(&self, n: u64, locale: &str) -> Result<String> {
        if !locale.eq_ignore_ascii_case("id") {
            return Err(EjaanError::numeral(format!(
                "Unsupported locale {locale:?}"
            )));
        }
        if n > MAX_NUMERAL {
            return Err(EjaanError::numeral(format!(
                "{n} is beyond the largest supported numeral {MAX_NUMERAL}"
            )));
        }
        Ok(Self::spell(n))
    }

    fn name(&self) -> &'static str {
        "indonesian"
    }
}
