//! # facturen
//!
//! Invoice document assembly for building cost-allocation ledgers.
//!
//! Takes one [`BuildingInvoice`] — a building's general-ledger accounts with
//! their cost allocations for a billing period — and produces a fully
//! composed, localized HTML invoice document plus the footer captions and
//! rendering directives an external PDF renderer needs.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Amounts render in the Dutch convention (`1.200,50`); the exact fraction
//! digits of the input are preserved, see [`core::format_amount`].
//!
//! ## Quick Start
//!
//! ```rust
//! use facturen::core::*;
//! use facturen::delivery;
//! use rust_decimal_macros::dec;
//!
//! let building = BuildingInvoice {
//!     name: Some("VvE De Linden".into()),
//!     language: Language::Nl,
//!     sum_total_amount: Some(dec!(1200)),
//!     sum_vat_amount: Some(dec!(200)),
//!     ledgers: vec![Ledger {
//!         code: Some("6000".into()),
//!         name: Some("Schoonmaak".into()),
//!         total: Some(dec!(1200)),
//!         total_vat: Some(dec!(200)),
//!         cost_allocations: vec![],
//!     }],
//!     ..Default::default()
//! };
//!
//! let rendered = delivery::generate(&building).unwrap();
//! assert_eq!(rendered.page_caption, "Pagina");
//! assert!(rendered.html.contains("6000 - Schoonmaak"));
//! ```
//!
//! The pipeline is pure and synchronous: no I/O, no shared state, one input
//! record in, one [`delivery::RenderedInvoice`] out. Pagination, font
//! embedding, and the running page footer belong to the downstream renderer.

pub mod core;
pub mod delivery;
pub mod document;

// Re-export core types at crate root for convenience
pub use crate::core::*;
