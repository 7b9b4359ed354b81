//! Document assembly from an outline.
//!
//! The assembler walks an [`Outline`] once, in order, calling the block
//! builders for each entry. It holds nothing but the document under
//! construction.
//!
//! # Example
//!
//! ```
//! use reportforge::assemble::{assemble, Entry, Outline};
//! use reportforge::model::StyleSheet;
//!
//! let outline = Outline::new(vec![
//!     Entry::heading("Summary"),
//!     Entry::paragraph("One paragraph."),
//!     Entry::bullets(["first", "second"]),
//! ]);
//! let doc = assemble(&outline, StyleSheet::default()).unwrap();
//! assert_eq!(doc.block_count(), 4);
//! ```

mod assembler;
mod outline;
mod report;

pub use assembler::{assemble, expand_details, COUNTER_PLACEHOLDER, ITEM_PLACEHOLDER};
pub use outline::{DetailGroup, Entry, Expansion, Outline};
pub use report::capstone_report;
