//! Document assembly: typed row model, assembler, and the HTML view.
//!
//! The assembly step builds a typed [`InvoiceDocument`] from the input
//! model; serialization into markup is a separate, swappable step in
//! [`to_html`]. The hard logic — grouping, formatting, ordering — never
//! touches markup.

mod assemble;
mod html;
mod rows;

pub use assemble::*;
pub use html::*;
pub use rows::*;
