//! The two-phase alignment protocol.
//!
//! A finder is policy: constructed once per tag-handling rule and reused
//! across many batches. Each [`AlignmentFinder::find_alignment`] call scans
//! one batch of sibling elements with fresh mutable accumulators and freezes
//! them into an immutable [`AlignmentState`], which then answers per-element
//! rendering queries in any order, repeatedly, from any thread.

use crate::alignment::AttributeAlignment;
use crate::element::Element;
use crate::error::AlignmentError;

/// Computes alignment state for batches of sibling elements.
pub trait AlignmentFinder {
    /// Scan one batch and return its immutable alignment state.
    fn find_alignment(&self, elements: &[Element]) -> Result<Box<dyn AlignmentState>, AlignmentError>;
}

/// The immutable result of scanning one batch.
pub trait AlignmentState: Send + Sync {
    /// Padding instructions for one element of the scanned batch, given its
    /// attribute names in source order.
    ///
    /// Entries either carry an attribute (write it, then pad) or are
    /// padding-only (write blanks). An element missing an aligned attribute
    /// still receives its entry, so the writer substitutes blanks and later
    /// columns stay put.
    fn determine_alignment(
        &self,
        attribute_names: &[&str],
    ) -> Result<Vec<AttributeAlignment>, AlignmentError>;

    /// Spaces to append after this element's tag name so that tag names of
    /// the batch occupy one column.
    fn element_padding_width(&self, element: &Element) -> usize;
}
