// src/common/numeric.rs

use rust_decimal::Decimal;
use std::str::FromStr;

/// Converte um texto em valor monetário sem nunca falhar.
///
/// Aceita sinal opcional e usa o maior prefixo numérico válido
/// (`"300abc"` vira 300). Texto sem dígitos vira zero.
pub fn parse_amount(raw: &str) -> Decimal {
    try_parse_amount(raw).unwrap_or(Decimal::ZERO)
}

/// Igual a [`parse_amount`], mas texto sem prefixo numérico vira `None`.
pub fn try_parse_amount(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    for (i, c) in unsigned.char_indices() {
        match c {
            '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }

    if !seen_digit {
        tracing::warn!("Valor numérico inválido '{}' ignorado", raw);
        return None;
    }

    let prefix = unsigned[..end].trim_end_matches('.');
    match Decimal::from_str(prefix) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Valor numérico inválido '{}' ignorado: {}", raw, e);
            None
        }
    }
}

/// Campo opcional lido como zero quando ausente.
pub fn or_zero(value: Option<Decimal>) -> Decimal {
    value.unwrap_or(Decimal::ZERO)
}

/// Formata no padrão brasileiro: `R$ 1.234,56`.
pub fn format_brl(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let digits = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{}R$ {},{}", sign, grouped, frac_part)
}

// Deserializador tolerante para campos de valor vindos do front ou de planilhas:
// número, texto numérico, null ou lixo. Lixo e null viram `None` (lido como zero).
pub mod lenient_decimal {
    use rust_decimal::Decimal;
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Text(String),
        Number(Decimal),
        Other(IgnoredAny),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<RawAmount>::deserialize(deserializer)?;
        Ok(match raw {
            Some(RawAmount::Text(text)) if text.trim().is_empty() => None,
            Some(RawAmount::Text(text)) => super::try_parse_amount(&text),
            Some(RawAmount::Number(value)) => Some(value),
            Some(RawAmount::Other(_)) | None => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_amount("1000"), Decimal::new(1000, 0));
        assert_eq!(parse_amount(" 250.75 "), Decimal::new(25075, 2));
        assert_eq!(parse_amount("-10.5"), Decimal::new(-105, 1));
        assert_eq!(parse_amount("+7"), Decimal::new(7, 0));
    }

    #[test]
    fn uses_longest_numeric_prefix() {
        assert_eq!(parse_amount("300abc"), Decimal::new(300, 0));
        assert_eq!(parse_amount("12.5.9"), Decimal::new(125, 1));
        assert_eq!(parse_amount("42."), Decimal::new(42, 0));
    }

    #[test]
    fn garbage_becomes_zero() {
        assert_eq!(parse_amount(""), Decimal::ZERO);
        assert_eq!(parse_amount("abc"), Decimal::ZERO);
        assert_eq!(parse_amount("-"), Decimal::ZERO);
        assert_eq!(parse_amount("R$ 100"), Decimal::ZERO);
    }

    #[test]
    fn text_without_digits_is_absent() {
        assert_eq!(try_parse_amount("abc"), None);
        assert_eq!(try_parse_amount(""), None);
        assert_eq!(try_parse_amount("-"), None);
        assert_eq!(try_parse_amount("12abc"), Some(Decimal::new(12, 0)));
    }

    #[test]
    fn formats_brazilian_currency() {
        assert_eq!(format_brl(Decimal::new(123456, 2)), "R$ 1.234,56");
        assert_eq!(format_brl(Decimal::new(1000000, 0)), "R$ 1.000.000,00");
        assert_eq!(format_brl(Decimal::ZERO), "R$ 0,00");
        assert_eq!(format_brl(Decimal::new(-5005, 1)), "-R$ 500,50");
        assert_eq!(format_brl(Decimal::new(999, 0)), "R$ 999,00");
    }

    #[derive(serde::Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
        amount: Option<Decimal>,
    }

    fn amount_of(json: &str) -> Option<Decimal> {
        serde_json::from_str::<Row>(json).unwrap().amount
    }

    #[test]
    fn lenient_deserializer_accepts_messy_input() {
        assert_eq!(amount_of(r#"{"amount": 150}"#), Some(Decimal::new(150, 0)));
        assert_eq!(amount_of(r#"{"amount": "99.90"}"#), Some(Decimal::new(9990, 2)));
        assert_eq!(amount_of(r#"{"amount": "abc"}"#), None);
        assert_eq!(amount_of(r#"{"amount": "300abc"}"#), Some(Decimal::new(300, 0)));
        assert_eq!(amount_of(r#"{"amount": ""}"#), None);
        assert_eq!(amount_of(r#"{"amount": null}"#), None);
        assert_eq!(amount_of(r#"{"amount": true}"#), None);
        assert_eq!(amount_of(r#"{}"#), None);
    }
}
