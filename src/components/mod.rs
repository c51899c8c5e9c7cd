// =============================================================================
// Folio Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Editable Text
// 2. Footer
// =============================================================================

pub mod editable;
pub mod footer;

pub use editable::EditableText;
pub use footer::Footer;
