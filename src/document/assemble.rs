//! The invoice assembler: building record in, complete document model out.

use crate::core::{BuildingInvoice, format_amount, labels_for};

use super::rows::{CURRENCY, Row, compose_ledger};

/// Fixed document title. The legacy document carries this Dutch title in
/// every language; it is not part of the label table.
pub const DOCUMENT_TITLE: &str = "Facturenlijst - grootboekrekening";

/// The fully assembled, display-ready invoice document.
///
/// Everything a view needs, nothing it has to compute: all amounts are
/// formatted, all labels resolved, all rows in final order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDocument {
    /// Issuer block, top left: name (bold), registration number, two
    /// address lines.
    pub issuer: IssuerBlock,
    /// Document title, top center.
    pub title: &'static str,
    /// Billing period under the title: `"start - end"`.
    pub period: String,
    /// Export date, top right.
    pub export_date: String,
    /// Localized column header labels.
    pub columns: ColumnLabels,
    /// Content rows of all ledgers, concatenated in input order.
    pub rows: Vec<Row>,
    /// Label of the grand-total footer row.
    pub total_label: String,
    /// Formatted grand VAT total, currency glyph included.
    pub grand_total_vat: String,
    /// Formatted grand total, currency glyph included.
    pub grand_total: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssuerBlock {
    pub name: String,
    pub company_number: String,
    pub address_line_1: String,
    pub address_line_2: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLabels {
    pub date: String,
    pub invoice_number: String,
    pub supplier: String,
    pub description: String,
    pub vat: String,
    pub total: String,
}

/// The assembler's result: the document model plus the two caption strings
/// the external renderer splices into its running per-page footer. The
/// captions travel beside the document because the footer is applied per
/// physical page, outside the document body.
#[derive(Debug, Clone)]
pub struct AssembledInvoice {
    pub document: InvoiceDocument,
    pub page_caption: String,
    pub of_caption: String,
}

fn display(text: &Option<String>) -> String {
    text.clone().unwrap_or_default()
}

/// Assemble the complete document model for one building.
///
/// Ledger sections appear in input order — no sorting, no filtering. Absent
/// display strings render empty, absent amounts render as `0,00`; assembly
/// itself never fails.
pub fn assemble(building: &BuildingInvoice) -> AssembledInvoice {
    let labels = labels_for(building.language);

    let mut rows = Vec::new();
    for ledger in &building.ledgers {
        rows.extend(compose_ledger(ledger, labels.empty_distribution));
    }

    let document = InvoiceDocument {
        issuer: IssuerBlock {
            name: display(&building.name),
            company_number: display(&building.company_number),
            address_line_1: display(&building.address_line_1),
            address_line_2: display(&building.address_line_2),
        },
        title: DOCUMENT_TITLE,
        period: format!(
            "{} - {}",
            building.date_start.as_deref().unwrap_or_default(),
            building.date_end.as_deref().unwrap_or_default()
        ),
        export_date: display(&building.export_date),
        columns: ColumnLabels {
            date: labels.date.to_string(),
            invoice_number: labels.invoice_number_short.to_string(),
            supplier: labels.contact_supplier.to_string(),
            description: labels.description.to_string(),
            vat: labels.vat_percentage.to_string(),
            total: labels.invoice_total_short.to_string(),
        },
        rows,
        total_label: labels.invoice_total_short.to_string(),
        grand_total_vat: format!("{CURRENCY}{}", format_amount(building.sum_vat_amount)),
        grand_total: format!("{CURRENCY}{}", format_amount(building.sum_total_amount)),
    };

    AssembledInvoice {
        document,
        page_caption: labels.page.to_string(),
        of_caption: labels.of.to_string(),
    }
}
