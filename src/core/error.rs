use thiserror::Error;

/// Errors that can occur while parsing or rendering an invoice.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FacturenError {
    /// The inbound payload could not be deserialized into the invoice model.
    #[error("malformed invoice payload: {0}")]
    Malformed(String),

    /// A language code outside the supported set {EN, NL, FR, DE}.
    #[error("unknown language code '{0}'")]
    UnknownLanguage(String),

    /// Markup generation error.
    #[error("markup error: {0}")]
    Markup(String),
}
