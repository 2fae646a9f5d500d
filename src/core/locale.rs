//! Static label table for the supported document languages.

use super::types::Language;

/// The label set for one language.
///
/// Immutable; built into the binary, looked up once per document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    /// Column header: invoice date.
    pub date: &'static str,
    /// Column header: line description.
    pub description: &'static str,
    /// Column header: supplier.
    pub contact_supplier: &'static str,
    /// Column header and grand-total row label.
    pub invoice_total_short: &'static str,
    /// Footer caption before the current page number.
    pub page: &'static str,
    /// Footer caption between page number and page count.
    pub of: &'static str,
    /// Column header: invoice number.
    pub invoice_number_short: &'static str,
    /// Column header: VAT.
    pub vat_percentage: &'static str,
    /// Group label for allocations without a distribution key.
    pub empty_distribution: &'static str,
}

static EN: Labels = Labels {
    date: "Date",
    description: "Description",
    contact_supplier: "Supplier",
    invoice_total_short: "Total",
    page: "Page",
    of: "of",
    invoice_number_short: "Invoice no.",
    vat_percentage: "VAT",
    empty_distribution: "No distribution key",
};

static NL: Labels = Labels {
    date: "Datum",
    description: "Omschrijving",
    contact_supplier: "Leverancier",
    invoice_total_short: "Totaal",
    page: "Pagina",
    of: "van",
    invoice_number_short: "Factuurnr.",
    vat_percentage: "BTW",
    empty_distribution: "Geen verdeelsleutel",
};

static FR: Labels = Labels {
    date: "Date",
    description: "Description",
    contact_supplier: "Fournisseur",
    invoice_total_short: "Total",
    page: "Page",
    of: "de",
    invoice_number_short: "N° de facture",
    vat_percentage: "TVA",
    empty_distribution: "Sans clé de répartition",
};

static DE: Labels = Labels {
    date: "Datum",
    description: "Beschreibung",
    contact_supplier: "Lieferant",
    invoice_total_short: "Gesamt",
    page: "Seite",
    of: "von",
    invoice_number_short: "Rechnungsnr.",
    vat_percentage: "MwSt.",
    empty_distribution: "Kein Verteilerschlüssel",
};

/// Resolve the label set for a language.
///
/// Total — [`Language`] is a closed enum, so every code that survives
/// deserialization has an entry here.
pub fn labels_for(language: Language) -> &'static Labels {
    match language {
        Language::En => &EN,
        Language::Nl => &NL,
        Language::Fr => &FR,
        Language::De => &DE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(l: &Labels) -> [&'static str; 9] {
        [
            l.date,
            l.description,
            l.contact_supplier,
            l.invoice_total_short,
            l.page,
            l.of,
            l.invoice_number_short,
            l.vat_percentage,
            l.empty_distribution,
        ]
    }

    #[test]
    fn every_language_has_all_labels() {
        for lang in [Language::En, Language::Nl, Language::Fr, Language::De] {
            for field in fields(labels_for(lang)) {
                assert!(!field.is_empty(), "empty label for {lang:?}");
            }
        }
    }

    #[test]
    fn english_footer_captions() {
        let labels = labels_for(Language::En);
        assert_eq!(labels.page, "Page");
        assert_eq!(labels.of, "of");
        assert_eq!(labels.empty_distribution, "No distribution key");
    }

    #[test]
    fn dutch_matches_legacy_document() {
        let labels = labels_for(Language::Nl);
        assert_eq!(labels.date, "Datum");
        assert_eq!(labels.invoice_number_short, "Factuurnr.");
        assert_eq!(labels.vat_percentage, "BTW");
        assert_eq!(labels.page, "Pagina");
        assert_eq!(labels.of, "van");
    }
}
