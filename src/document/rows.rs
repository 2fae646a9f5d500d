//! The ledger section composer: one ledger in, a flat row sequence out.

use crate::core::{Ledger, format_amount, group_allocations};

/// Currency glyph prefixed to every formatted amount cell.
pub const CURRENCY: &str = "€";

/// One row of the invoice content block.
///
/// Amount cells carry display-ready strings (currency glyph included); the
/// view layer only decides how a row variant looks, never what it says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// Full-width bold account header: `code - name`.
    LedgerHeader { title: String },
    /// Full-width distribution-key label.
    GroupLabel { label: String },
    /// One invoice line.
    Allocation {
        date: String,
        invoice_number: String,
        supplier: String,
        description: String,
        vat: String,
        total: String,
    },
    /// Account totals, visually separated by a top border. Taken from the
    /// ledger record as supplied — never recomputed from the lines above.
    LedgerTotal { vat: String, total: String },
}

fn money(amount: Option<rust_decimal::Decimal>) -> String {
    format!("{CURRENCY}{}", format_amount(amount))
}

fn display(text: &Option<String>) -> String {
    text.clone().unwrap_or_default()
}

/// Compose the row sequence for one ledger.
///
/// Order: one header row, then per distribution-key group a label row
/// (`empty_group_label` for the sentinel group) followed by that group's
/// allocation rows, then one total row. For N allocations in G groups the
/// result has exactly `2 + G + N` rows.
pub fn compose_ledger(ledger: &Ledger, empty_group_label: &str) -> Vec<Row> {
    let groups = group_allocations(&ledger.cost_allocations);

    let mut rows = Vec::with_capacity(2 + groups.len() + ledger.cost_allocations.len());
    rows.push(Row::LedgerHeader {
        title: format!(
            "{} - {}",
            ledger.code.as_deref().unwrap_or_default(),
            ledger.name.as_deref().unwrap_or_default()
        ),
    });

    for group in groups {
        rows.push(Row::GroupLabel {
            label: group.key.unwrap_or(empty_group_label).to_string(),
        });
        for allocation in group.items {
            rows.push(Row::Allocation {
                date: display(&allocation.invoice_date),
                invoice_number: display(&allocation.invoice_number),
                supplier: display(&allocation.supplier_name),
                description: display(&allocation.description),
                vat: money(allocation.vat_amount),
                total: money(allocation.total),
            });
        }
    }

    rows.push(Row::LedgerTotal {
        vat: money(ledger.total_vat),
        total: money(ledger.total),
    });
    rows
}
