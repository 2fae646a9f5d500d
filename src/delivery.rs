//! The document delivery contract.
//!
//! Everything the request gateway and the downstream PDF renderer exchange
//! with this crate: the inbound JSON envelope, the rendering directives, and
//! [`generate`], the one call that turns a building record into a rendered
//! document.

use serde::{Deserialize, Serialize};

use crate::core::{BuildingInvoice, FacturenError};
use crate::document::{assemble, to_html};

/// Content type of the final response the gateway sends to the caller.
pub const CONTENT_TYPE: &str = "application/pdf";

/// Attachment filename for the `Content-Disposition` response header.
pub const ATTACHMENT_FILENAME: &str = "invoice.pdf";

/// The inbound request body: one building record under a single field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateInvoiceRequest {
    pub building: BuildingInvoice,
}

/// Parse the JSON request envelope.
///
/// This is the fail-fast boundary for malformed input: structural problems,
/// non-numeric amount fields, and unknown language codes all surface here as
/// a descriptive [`FacturenError::Malformed`] instead of propagating a
/// corrupted partial document.
pub fn parse_request(body: &str) -> Result<GenerateInvoiceRequest, FacturenError> {
    serde_json::from_str(body).map_err(|e| FacturenError::Malformed(e.to_string()))
}

/// Fixed instructions for the external renderer.
///
/// Literal constants, never derived from invoice data. Margins are in the
/// renderer's default pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RenderDirectives {
    /// Physical page format.
    pub page_format: &'static str,
    /// Top margin.
    pub margin_top: u32,
    /// Bottom margin.
    pub margin_bottom: u32,
    /// Rendering scale factor.
    pub scale: f32,
    /// Whether the renderer repeats its footer template on every page.
    pub display_footer: bool,
}

impl Default for RenderDirectives {
    fn default() -> Self {
        Self {
            page_format: "A5",
            margin_top: 25,
            margin_bottom: 25,
            scale: 1.0,
            display_footer: true,
        }
    }
}

/// The complete payload handed to the external renderer.
///
/// `page_caption` and `of_caption` go into the renderer's running footer
/// template ("Page N of M"); the current page number and total page count
/// are the renderer's to compute — pagination is decided downstream.
#[derive(Debug, Clone)]
pub struct RenderedInvoice {
    /// Self-contained HTML document.
    pub html: String,
    /// Localized caption before the page number.
    pub page_caption: String,
    /// Localized caption between page number and page count.
    pub of_caption: String,
    /// Page setup for the renderer.
    pub directives: RenderDirectives,
}

/// Run the full pipeline for one building record.
pub fn generate(building: &BuildingInvoice) -> Result<RenderedInvoice, FacturenError> {
    let assembled = assemble(building);
    let html = to_html(&assembled.document)?;
    Ok(RenderedInvoice {
        html,
        page_caption: assembled.page_caption,
        of_caption: assembled.of_caption,
        directives: RenderDirectives::default(),
    })
}
