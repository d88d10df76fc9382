//! Column alignment for attribute-heavy registry XML.
//!
//! Specification registries (OpenXR, Vulkan) keep long runs of sibling
//! elements whose attributes should line up in vertical columns:
//!
//! ```xml
//! <enum value="1"   name="XR_FIRST"  comment="first"/>
//! <enum value="100" name="XR_SECOND" comment="second"/>
//! ```
//!
//! This crate is the XML-free core of that formatting: given one parent's
//! direct children as [`Element`] batches, an [`AlignmentFinder`] scans the
//! batch and returns an immutable [`AlignmentState`] from which a writer asks,
//! per element, for [`AttributeAlignment`] padding instructions. The engine
//! never parses or writes XML itself.
//!
//! Two phases, two kinds of type:
//!
//! * scan — `find_alignment(batch)` accumulates widths in private mutable
//!   scanners and freezes them;
//! * render — the frozen state answers `determine_alignment` queries in any
//!   order, repeatedly, and is `Send + Sync`.
//!
//! [`SimpleAlignment`] is the baseline finder: one canonical column order
//! taken from the densest element. The companion `regalign-grouped` crate
//! adds mutually-exclusive column groups for tags like `<enum>`, which uses
//! either `value`, or `offset`/`dir`/`extends`, or `bitpos`/`extends`.

pub mod alignment;
pub mod element;
pub mod error;
pub mod finder;
pub mod simple;
pub mod width;

pub use alignment::{element_padding_width, AttributeAlignment, ElementAlignment};
pub use element::Element;
pub use error::AlignmentError;
pub use finder::{AlignmentFinder, AlignmentState};
pub use simple::SimpleAlignment;
pub use width::{display_width, push_spaces};
