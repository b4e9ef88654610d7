//! JSON-to-Markdown section builders and the document assembler.

pub mod aftermarket;
pub mod document;
pub mod payments;
pub mod services;
pub mod text;
pub mod transportation;

pub use aftermarket::build_aftermarket_section;
pub use document::{build_document, render_markdown};
pub use payments::build_payments_and_amenities_section;
pub use services::build_services_section;
pub use transportation::build_transportation_section;
