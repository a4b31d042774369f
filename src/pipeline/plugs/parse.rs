// sugar-env: environment variable access with composable plugs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Lenient text decoders behind the numeric and base64 plugs.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

const LENIENT: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_decode_padding_mode(DecodePaddingMode::Indifferent)
    .with_decode_allow_trailing_bits(true);

const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

fn leading_digits(bytes: &[u8], from: usize) -> usize {
    bytes
        .get(from..)
        .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
}

/// Parses the leading base-10 integer of `s`, ignoring trailing garbage.
///
/// `"123.4"` gives 123, `"  -7px"` gives -7. Returns `None` only when
/// there is no digit prefix; values outside `i64` saturate.
#[must_use]
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let negative = s.starts_with('-');
    let sign_len = usize::from(matches!(s.as_bytes().first(), Some(b'+' | b'-')));
    let digits = leading_digits(s.as_bytes(), sign_len);
    if digits == 0 {
        return None;
    }
    Some(
        s[..sign_len + digits]
            .parse()
            .unwrap_or(if negative { i64::MIN } else { i64::MAX }),
    )
}

/// Parses the longest decimal literal prefix of `s`.
///
/// Accepts an optional sign, `Infinity`, a fraction and an exponent:
/// `"45.4abc"` gives 45.4, `"1e3"` gives 1000, `".5"` gives 0.5.
#[must_use]
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let negative = bytes.first() == Some(&b'-');
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    if s[end..].starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = leading_digits(bytes, end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = leading_digits(bytes, end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_digits = leading_digits(bytes, exp_start);
        if exp_digits > 0 {
            end = exp_start + exp_digits;
        }
    }

    s[..end].parse().ok()
}

/// Decodes base64 (standard or URL-safe alphabet, padding optional,
/// whitespace ignored) into text. Invalid UTF-8 becomes U+FFFD.
#[must_use]
pub fn decode_base64(s: &str) -> Option<String> {
    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    let engine = if compact.contains(['-', '_']) {
        &URL_SAFE_LENIENT
    } else {
        &STANDARD_LENIENT
    };
    engine
        .decode(compact.as_bytes())
        .ok()
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
}
