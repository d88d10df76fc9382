//! The baseline alignment finder.

use std::collections::{HashMap, HashSet};

use crate::alignment::{AttributeAlignment, ElementAlignment};
use crate::element::Element;
use crate::error::AlignmentError;
use crate::finder::{AlignmentFinder, AlignmentState};

/// Simplest alignment: the attributes of the element with the most attributes
/// are aligned, in that element's order; any leftovers are not aligned.
///
/// # Example
///
/// ```rust
/// use regalign::{AlignmentFinder, Element, SimpleAlignment};
///
/// let batch = vec![
///     Element::new("enum").attr("value", "1").attr("name", "A"),
///     Element::new("enum").attr("value", "100").attr("name", "LONGER"),
/// ];
/// let state = SimpleAlignment::new().find_alignment(&batch).unwrap();
/// let alignments = state.determine_alignment(&["value", "name"]).unwrap();
/// assert_eq!(alignments[0].align_width(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimpleAlignment {
    extra_width: HashMap<String, usize>,
}

impl SimpleAlignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Widen the named column beyond the observed maximum. Naming the last
    /// canonical column here also keeps it aligned instead of the default
    /// trailing-space suppression.
    pub fn extra_width(mut self, name: impl Into<String>, width: usize) -> Self {
        self.extra_width.insert(name.into(), width);
        self
    }

    pub fn with_extra_width(extra_width: HashMap<String, usize>) -> Self {
        Self { extra_width }
    }
}

impl AlignmentFinder for SimpleAlignment {
    fn find_alignment(&self, elements: &[Element]) -> Result<Box<dyn AlignmentState>, AlignmentError> {
        Ok(Box::new(State {
            alignment: ElementAlignment::find(elements, &self.extra_width),
        }))
    }
}

struct State {
    alignment: ElementAlignment,
}

impl AlignmentState for State {
    fn determine_alignment(
        &self,
        attribute_names: &[&str],
    ) -> Result<Vec<AttributeAlignment>, AlignmentError> {
        let name_set: HashSet<&str> = attribute_names.iter().copied().collect();
        // Keep aligned columns even when absent, so the blanks they render
        // hold later columns in place; unaligned entries only render when the
        // element actually has them.
        Ok(self
            .alignment
            .attribute_alignments()
            .iter()
            .filter(|a| a.should_align() || name_set.contains(a.name()))
            .cloned()
            .collect())
    }

    fn element_padding_width(&self, element: &Element) -> usize {
        self.alignment.element_padding_width(element)
    }
}
