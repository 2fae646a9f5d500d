//! HTML view of the assembled document.
//!
//! Serializes an [`InvoiceDocument`] into the fixed markup skeleton the
//! downstream PDF renderer expects. Layout constants (column widths, fonts,
//! borders) live here and only here; swapping this module out leaves the
//! assembly pipeline untouched.

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use std::io::Cursor;

use crate::core::FacturenError;

use super::assemble::{ColumnLabels, InvoiceDocument, IssuerBlock};
use super::rows::Row;

type HtmlResult = Result<(), FacturenError>;

fn html_io(e: std::io::Error) -> FacturenError {
    FacturenError::Markup(format!("HTML write error: {e}"))
}

/// Thin wrapper over a [`quick_xml::Writer`] producing indented HTML with
/// entity-escaped text content.
struct HtmlWriter {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl HtmlWriter {
    fn new() -> Self {
        Self {
            writer: Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2),
        }
    }

    fn into_string(self) -> Result<String, FacturenError> {
        let buf = self.writer.into_inner().into_inner();
        String::from_utf8(buf).map_err(|e| FacturenError::Markup(format!("UTF-8 error: {e}")))
    }

    fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> HtmlResult {
        let mut elem = BytesStart::new(name);
        for (k, v) in attrs {
            elem.push_attribute((*k, *v));
        }
        self.writer
            .write_event(Event::Start(elem))
            .map_err(html_io)
    }

    fn end(&mut self, name: &str) -> HtmlResult {
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(html_io)
    }

    fn text(&mut self, text: &str) -> HtmlResult {
        self.writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(html_io)
    }

    fn text_element(&mut self, name: &str, attrs: &[(&str, &str)], text: &str) -> HtmlResult {
        self.start(name, attrs)?;
        self.text(text)?;
        self.end(name)
    }
}

const STYLE_SHEET: &str = "\
    @import url(https://fonts.googleapis.com/css?family=Inter);\n\
    @import url(https://fonts.googleapis.com/css?family=IBM Plex Mono);\n\
    @page { margin: 15px; }\n\
    body { font-family: 'Inter'; }";

const PAGE_FRAME: &str = "margin: 10px; width: 595px; height: 842px";

const COLUMN_LAYOUT: &str = "display: flex; display: -webkit-flex; flex-direction: column; \
     height: 100%; width: 100%; line-height: 16px; word-wrap: break-word; font-size: 11px; \
     font-family: Inter; justify-content: space-between; -ms-flex-pack: justify";

const TABLE_STYLE: &str = "width: 100%; margin-top: 16px; border: 0; border-spacing: 0px 8px; \
     line-height: 16px; word-wrap: break-word; font-size: 11px; font-family: Inter";

const HEADER_CELL: &str =
    "border-bottom: 1px solid rgba(0, 0, 0, 0.1); padding-right: 8px; font-weight: bold";
const HEADER_CELL_VAT: &str = "border-bottom: 1px solid rgba(0, 0, 0, 0.1); width: 72px; \
     padding-right: 8px; font-weight: bold";
const HEADER_CELL_TOTAL: &str = "border-bottom: 1px solid rgba(0, 0, 0, 0.1); width: 72px; \
     padding-left: 4px; font-weight: bold";

const TOTAL_CELL: &str =
    "border-top: 1px solid rgba(0, 0, 0, 0.1); padding-right: 8px; font-weight: bold";
const TOTAL_CELL_VAT: &str = "border-top: 1px solid rgba(0, 0, 0, 0.1); width: 72px; \
     padding-right: 8px; font-weight: bold";
const TOTAL_CELL_TOTAL: &str = "border-top: 1px solid rgba(0, 0, 0, 0.1); width: 72px; \
     padding-left: 4px; font-weight: bold";

// Amount columns render in a monospace face so digits line up.
const AMOUNT_CELL_VAT: &str = "width: 72px; vertical-align: top; padding-right: 8px; \
     line-height: 10px; font-family: 'IBM Plex Mono'";
const AMOUNT_CELL_TOTAL: &str = "width: 72px; vertical-align: top; padding-left: 4px; \
     line-height: 10px; font-family: 'IBM Plex Mono'";

/// Serialize the document model into a self-contained HTML string.
pub fn to_html(document: &InvoiceDocument) -> Result<String, FacturenError> {
    let mut w = HtmlWriter::new();

    w.start("html", &[])?;
    w.text_element("style", &[], STYLE_SHEET)?;
    w.start(
        "body",
        &[(
            "style",
            "display: flex; justify-content: center; align-items: center",
        )],
    )?;
    w.start("div", &[("style", PAGE_FRAME), ("class", "invoice")])?;
    w.start("div", &[("style", COLUMN_LAYOUT)])?;

    // Upper section: header band + content table.
    w.start("div", &[])?;
    write_header_band(&mut w, document)?;
    w.start("div", &[])?;
    w.start("table", &[("style", TABLE_STYLE)])?;
    write_column_header(&mut w, &document.columns)?;
    for row in &document.rows {
        write_row(&mut w, row)?;
    }
    w.end("table")?;
    w.end("div")?;
    w.end("div")?;

    // Lower section: grand-total table, pushed to the page bottom by the
    // space-between column layout.
    w.start("div", &[])?;
    w.start("table", &[("style", TABLE_STYLE)])?;
    w.start("tr", &[])?;
    w.text_element("td", &[("style", TOTAL_CELL), ("align", "left")], &document.total_label)?;
    w.text_element(
        "td",
        &[("style", TOTAL_CELL_VAT), ("align", "right")],
        &document.grand_total_vat,
    )?;
    w.text_element(
        "td",
        &[("style", TOTAL_CELL_TOTAL), ("align", "right")],
        &document.grand_total,
    )?;
    w.end("tr")?;
    w.end("table")?;
    w.end("div")?;

    w.end("div")?;
    w.end("div")?;
    w.end("body")?;
    w.end("html")?;

    w.into_string()
}

fn write_header_band(w: &mut HtmlWriter, document: &InvoiceDocument) -> HtmlResult {
    let IssuerBlock {
        name,
        company_number,
        address_line_1,
        address_line_2,
    } = &document.issuer;

    w.start("div", &[("style", "display: -webkit-box; display: -webkit-flex")])?;

    w.start("div", &[("style", "width: 33%"), ("align", "left")])?;
    w.text_element("p", &[("style", "font-weight: bold; margin: 4px 0")], name)?;
    w.text_element("p", &[("style", "margin: 4px 0")], company_number)?;
    w.text_element("p", &[("style", "margin: 4px 0")], address_line_1)?;
    w.text_element("p", &[("style", "margin: 4px 0")], address_line_2)?;
    w.end("div")?;

    w.start("div", &[("style", "width: 33%"), ("align", "center")])?;
    w.text_element("p", &[("style", "font-weight: bold; margin: 4px 0")], document.title)?;
    w.text_element("p", &[("style", "margin: 4px 0")], &document.period)?;
    w.end("div")?;

    w.start("div", &[("style", "width: 33%"), ("align", "right")])?;
    w.text_element(
        "p",
        &[("style", "font-weight: bold; margin: 4px 0")],
        &document.export_date,
    )?;
    w.end("div")?;

    w.end("div")
}

fn write_column_header(w: &mut HtmlWriter, columns: &ColumnLabels) -> HtmlResult {
    w.start("tr", &[])?;
    w.text_element("td", &[("style", HEADER_CELL), ("align", "left")], &columns.date)?;
    w.text_element(
        "td",
        &[("style", HEADER_CELL), ("align", "left")],
        &columns.invoice_number,
    )?;
    w.text_element("td", &[("style", HEADER_CELL), ("align", "left")], &columns.supplier)?;
    w.text_element(
        "td",
        &[("style", HEADER_CELL), ("align", "left")],
        &columns.description,
    )?;
    w.text_element("td", &[("style", HEADER_CELL_VAT), ("align", "right")], &columns.vat)?;
    w.text_element(
        "td",
        &[("style", HEADER_CELL_TOTAL), ("align", "right")],
        &columns.total,
    )?;
    w.end("tr")
}

fn write_row(w: &mut HtmlWriter, row: &Row) -> HtmlResult {
    w.start("tr", &[])?;
    match row {
        Row::LedgerHeader { title } => {
            w.text_element(
                "td",
                &[("colspan", "6"), ("style", "font-weight: bold")],
                title,
            )?;
        }
        Row::GroupLabel { label } => {
            w.text_element(
                "td",
                &[("colspan", "6"), ("style", "font-style: italic")],
                label,
            )?;
        }
        Row::Allocation {
            date,
            invoice_number,
            supplier,
            description,
            vat,
            total,
        } => {
            let text_cell = |width: &str| {
                format!("width: {width}px; vertical-align: top; word-wrap: break-word; line-height: 10px")
            };
            w.text_element("td", &[("style", &text_cell("80")), ("align", "left")], date)?;
            w.text_element(
                "td",
                &[("style", &text_cell("76")), ("align", "left")],
                invoice_number,
            )?;
            w.text_element("td", &[("style", &text_cell("76")), ("align", "left")], supplier)?;
            w.text_element(
                "td",
                &[("style", &text_cell("140")), ("align", "left")],
                description,
            )?;
            w.text_element("td", &[("style", AMOUNT_CELL_VAT), ("align", "right")], vat)?;
            w.text_element("td", &[("style", AMOUNT_CELL_TOTAL), ("align", "right")], total)?;
        }
        Row::LedgerTotal { vat, total } => {
            // Four pad cells keep the totals under their columns.
            for _ in 0..4 {
                w.text_element("td", &[("style", "border-top: 1px solid rgba(0, 0, 0, 0.1)")], "")?;
            }
            w.text_element("td", &[("style", TOTAL_CELL_VAT), ("align", "right")], vat)?;
            w.text_element("td", &[("style", TOTAL_CELL_TOTAL), ("align", "right")], total)?;
        }
    }
    w.end("tr")
}
