//! The grouped alignment orchestrator.

use std::collections::HashSet;

use regalign::{
    display_width, element_padding_width, AlignmentError, AlignmentFinder, AlignmentState,
    AttributeAlignment, Element, ElementAlignment,
};

use crate::sequence::{AttrWidth, ItemAligner, ItemScanner, SequenceItem};
use crate::trailer::Trailer;

/// An alignment finder for tags whose attributes fall into alternating
/// groups, composed from a validated sequence of [`SequenceItem`]s ending in
/// exactly one trailer.
///
/// # Example
///
/// ```rust
/// use regalign::{AlignmentFinder, Element};
/// use regalign_grouped::{AttributeGroup, GroupedAttributeAlignment};
///
/// let finder = GroupedAttributeAlignment::new(vec![
///     AttributeGroup::new(["value"])
///         .or(["offset", "dir", "extends"])
///         .or(["bitpos", "extends"])
///         .into(),
/// ])
/// .unwrap();
///
/// let batch = vec![
///     Element::new("enum").attr("value", "7").attr("name", "XR_A"),
///     Element::new("enum")
///         .attr("offset", "1")
///         .attr("extends", "XrResult")
///         .attr("name", "XR_B"),
/// ];
/// let state = finder.find_alignment(&batch).unwrap();
/// assert_eq!(state.element_padding_width(&batch[0]), 0);
/// ```
#[derive(Clone, Debug)]
pub struct GroupedAttributeAlignment {
    items: Vec<SequenceItem>,
}

impl GroupedAttributeAlignment {
    /// Validate and normalize the sequence: it must be non-empty, and a
    /// trailer may only stand last. A missing trailer is appended.
    pub fn new(items: Vec<SequenceItem>) -> Result<Self, AlignmentError> {
        if items.is_empty() {
            return Err(AlignmentError::Configuration(
                "need at least one sequence item".into(),
            ));
        }
        let mut items = items;
        if !items.last().is_some_and(SequenceItem::is_trailer) {
            items.push(Trailer::new().into());
        }
        if items[..items.len() - 1].iter().any(SequenceItem::is_trailer) {
            return Err(AlignmentError::Configuration(
                "a trailer is only valid as the final sequence item".into(),
            ));
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[SequenceItem] {
        &self.items
    }
}

impl AlignmentFinder for GroupedAttributeAlignment {
    fn find_alignment(&self, elements: &[Element]) -> Result<Box<dyn AlignmentState>, AlignmentError> {
        let mut scanners: Vec<ItemScanner> =
            self.items.iter().map(SequenceItem::create_scanner).collect();

        for element in elements {
            let mut remaining: Vec<AttrWidth> = element
                .attributes()
                .iter()
                .map(|(name, value)| AttrWidth {
                    name: name.clone(),
                    width: display_width(value),
                })
                .collect();
            for scanner in &mut scanners {
                remaining = scanner.scan(remaining);
            }
            if let Some(leftover) = remaining.first() {
                return Err(AlignmentError::DataInconsistency(format!(
                    "attribute '{}' on <{}> was not consumed by any sequence item",
                    leftover.name,
                    element.name()
                )));
            }
        }

        Ok(Box::new(State {
            name_width: ElementAlignment::max_name_width(elements),
            aligners: scanners.into_iter().map(ItemScanner::finish).collect(),
        }))
    }
}

/// Frozen scan result; immutable and shareable across rendering threads.
struct State {
    name_width: usize,
    aligners: Vec<ItemAligner>,
}

impl State {
    /// Replace a repeated live attribute with equivalent blank space.
    ///
    /// Two alternatives of a choice may share a name (`extends` for Vulkan
    /// enums), and a later item can nominally re-report it; only the first
    /// occurrence may render live or columns would reparse wrong.
    fn collapse_duplicates(collected: Vec<AttributeAlignment>) -> Vec<AttributeAlignment> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut result = Vec::with_capacity(collected.len());
        for entry in collected {
            if !entry.is_padding_only() && !seen.insert(entry.name().to_string()) {
                let width = if entry.should_align() {
                    entry.full_width()
                } else {
                    0
                };
                result.push(AttributeAlignment::padding_only(width));
            } else {
                result.push(entry);
            }
        }
        result
    }
}

impl AlignmentState for State {
    fn determine_alignment(
        &self,
        attribute_names: &[&str],
    ) -> Result<Vec<AttributeAlignment>, AlignmentError> {
        let mut remaining: Vec<&str> = attribute_names.to_vec();
        let mut collected = Vec::new();
        for aligner in &self.aligners {
            remaining = aligner.take(remaining, &mut collected);
        }
        if let Some(name) = remaining.first() {
            return Err(AlignmentError::DataInconsistency(format!(
                "attribute '{name}' was not seen when this batch was scanned"
            )));
        }

        let result = Self::collapse_duplicates(collected);
        debug_assert!(
            {
                let mut live = HashSet::new();
                result
                    .iter()
                    .filter(|a| !a.is_padding_only())
                    .all(|a| live.insert(a.name()))
            },
            "duplicate live attribute after collapsing"
        );
        Ok(result)
    }

    fn element_padding_width(&self, element: &Element) -> usize {
        element_padding_width(self.name_width, element)
    }
}
