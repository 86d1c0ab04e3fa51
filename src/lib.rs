//! Extract account statements from OFX (Open Financial Exchange) bank
//! statement downloads.
//!
//! ```rust,ignore
//! use ofx_statement_rs::ExtractorBuilder;
//!
//! let statements = ExtractorBuilder::new()
//!     .content(&file_content)
//!     .extract();
//! ```

mod builder;
mod types;

pub mod errors;
pub mod ofx;

pub use builder::ExtractorBuilder;
pub use ofx::{OfxExtractor, PostingDate};
pub use types::{Statement, Transaction};
