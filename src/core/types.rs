use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::FacturenError;

/// The top-level document: one building's cost-allocation ledger for a
/// billing period.
///
/// Every field except `language` and `ledgers` is optional — absent display
/// strings render as empty text, absent amounts render as zero. Dates are
/// opaque pre-formatted display strings; the pipeline does no date
/// parsing or arithmetic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildingInvoice {
    /// Building name, shown bold at the top of the issuer block.
    #[serde(default)]
    pub name: Option<String>,
    /// Company registration number.
    #[serde(default)]
    pub company_number: Option<String>,
    /// First address line.
    #[serde(default)]
    pub address_line_1: Option<String>,
    /// Second address line.
    #[serde(default)]
    pub address_line_2: Option<String>,
    /// Billing period start, pre-formatted.
    #[serde(default)]
    pub date_start: Option<String>,
    /// Billing period end, pre-formatted.
    #[serde(default)]
    pub date_end: Option<String>,
    /// Export date shown in the document header, pre-formatted.
    #[serde(default)]
    pub export_date: Option<String>,
    /// Grand total across all ledgers — supplied, never recomputed.
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub sum_total_amount: Option<Decimal>,
    /// Grand VAT total across all ledgers — supplied, never recomputed.
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub sum_vat_amount: Option<Decimal>,
    /// Document language; selects the label set. A payload without a
    /// `language` field gets Dutch, the language of the legacy document.
    #[serde(default)]
    pub language: Language,
    /// General-ledger accounts, in the order they must appear.
    #[serde(default)]
    pub ledgers: Vec<Ledger>,
}

/// One general-ledger account and its cost allocations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    /// Account code (e.g. "6000").
    #[serde(default)]
    pub code: Option<String>,
    /// Account name.
    #[serde(default)]
    pub name: Option<String>,
    /// Account total — supplied by the caller, never derived from the
    /// allocations below.
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub total: Option<Decimal>,
    /// Account VAT total — supplied, never derived.
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub total_vat: Option<Decimal>,
    /// Invoice lines allocated to this account, in input order.
    #[serde(default)]
    pub cost_allocations: Vec<Allocation>,
}

/// One invoice line allocated to a ledger.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Allocation {
    /// Supplier invoice date, pre-formatted.
    #[serde(default)]
    pub invoice_date: Option<String>,
    /// Supplier invoice number.
    #[serde(default)]
    pub invoice_number: Option<String>,
    /// Supplier name.
    #[serde(default)]
    pub supplier_name: Option<String>,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional cost-sharing category. `None` and `""` both mean
    /// "no distribution key" and group together.
    #[serde(default)]
    pub distribution_key_name: Option<String>,
    /// VAT amount for this line.
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub vat_amount: Option<Decimal>,
    /// Gross amount for this line.
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub total: Option<Decimal>,
}

/// Supported document languages.
///
/// The set is closed: serde rejects any other code at the deserialization
/// boundary, so an unknown language can never silently produce a document
/// with blank labels. Dutch is the default — an absent `language` field
/// renders the document the legacy pipeline always produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    En,
    #[default]
    Nl,
    Fr,
    De,
}

impl Language {
    /// Two-letter uppercase code as used on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Nl => "NL",
            Self::Fr => "FR",
            Self::De => "DE",
        }
    }

    /// Parse from a two-letter code.
    pub fn from_code(code: &str) -> Result<Self, FacturenError> {
        match code {
            "EN" => Ok(Self::En),
            "NL" => Ok(Self::Nl),
            "FR" => Ok(Self::Fr),
            "DE" => Ok(Self::De),
            other => Err(FacturenError::UnknownLanguage(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_code_roundtrip() {
        for lang in [Language::En, Language::Nl, Language::Fr, Language::De] {
            assert_eq!(Language::from_code(lang.code()).unwrap(), lang);
        }
    }

    #[test]
    fn unknown_language_rejected() {
        let err = Language::from_code("ES").unwrap_err();
        assert_eq!(err.to_string(), "unknown language code 'ES'");
    }

    #[test]
    fn lowercase_not_accepted() {
        assert!(Language::from_code("nl").is_err());
    }
}
