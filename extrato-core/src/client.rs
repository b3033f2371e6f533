//! Client name extraction from invoice descriptions.
//!
//! Asaas invoice rows read like
//! `Cobrança recebida fatura nr. 98765 John Smith`; the payer name is the
//! free text after the invoice number.

use regex::Regex;
use std::sync::OnceLock;

fn invoice_client_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"fatura nr\.\s+\d+\s+(.*)$").unwrap())
}

/// Extract the client name from a movement description, when present.
/// Most movements have no identifiable client; `None` is the normal case.
pub fn extract_client(description: &str) -> Option<String> {
    invoice_client_re()
        .captures(description)
        .map(|caps| caps[1].trim().to_string())
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_name_after_invoice_number() {
        assert_eq!(
            extract_client("Cobrança recebida fatura nr. 98765 John Smith"),
            Some("John Smith".to_string())
        );
    }

    #[test]
    fn test_trims_trailing_whitespace() {
        assert_eq!(
            extract_client("Cobrança recebida fatura nr. 4 Maria da Silva   "),
            Some("Maria da Silva".to_string())
        );
    }

    #[test]
    fn test_no_invoice_phrase_yields_none() {
        assert_eq!(extract_client("Transferência via Pix"), None);
        assert_eq!(extract_client("Taxa de cartão de crédito"), None);
    }

    #[test]
    fn test_invoice_without_trailing_name_yields_none() {
        assert_eq!(extract_client("Cobrança recebida fatura nr. 98765  "), None);
    }
}
