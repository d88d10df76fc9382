//! Grouped attribute alignment for registry XML formatters.
//!
//! The baseline [`regalign::SimpleAlignment`] assumes every sibling carries
//! roughly the same attributes. Registry `<enum>` tags do not: one carries
//! `value`, the next `offset`/`dir`/`extends`, a third `bitpos`/`extends`,
//! and all of them `name` and `comment`. This crate aligns such batches by
//! piping each element's attributes through a configured sequence of items:
//!
//! * [`AttributeGroup`] — a fixed run of columns in declared order;
//! * [`GroupChoice`] — mutually-exclusive alternative groups sharing one
//!   slot, sized to the widest alternative so later columns never move;
//! * [`Trailer`] — the mandatory final catch-all, laid out like the simple
//!   finder.
//!
//! [`GroupedAttributeAlignment`] validates the sequence and implements the
//! [`regalign::AlignmentFinder`] protocol: scan a batch once, then render
//! from the immutable state.
//!
//! ```rust
//! use regalign::{AlignmentFinder, Element};
//! use regalign_grouped::{AttributeGroup, GroupedAttributeAlignment};
//!
//! let finder = GroupedAttributeAlignment::new(vec![
//!     AttributeGroup::new(["value"])
//!         .or(["offset", "dir", "extends"])
//!         .or(["bitpos", "extends"])
//!         .into(),
//! ])?;
//!
//! let batch = vec![
//!     Element::new("enum").attr("value", "0").attr("name", "XR_SUCCESS"),
//!     Element::new("enum")
//!         .attr("offset", "1")
//!         .attr("extends", "XrResult")
//!         .attr("name", "XR_ERROR_X"),
//! ];
//! let state = finder.find_alignment(&batch)?;
//! for element in &batch {
//!     let names: Vec<&str> = element.attribute_names().collect();
//!     let alignments = state.determine_alignment(&names)?;
//!     // hand `alignments` to the writer
//!     assert!(!alignments.is_empty());
//! }
//! # Ok::<(), regalign::AlignmentError>(())
//! ```
//!
//! Sequence configuration is plain data (serde-derived), so a formatter's
//! per-tag policy can live in a config file as well as in code.

pub mod choice;
pub mod group;
pub mod grouped;
pub mod sequence;
pub mod trailer;

pub use choice::GroupChoice;
pub use group::AttributeGroup;
pub use grouped::GroupedAttributeAlignment;
pub use sequence::SequenceItem;
pub use trailer::Trailer;
