//! Sequence items and the scan/render plumbing shared between them.
//!
//! An alignment sequence is an ordered list of items, each of which consumes
//! the attributes it recognizes and forwards the rest to the next item. The
//! item kinds form a closed sum, [`SequenceItem`], so there is exactly one
//! "consume attributes, report leftovers" operation per phase: scanners
//! ([`ItemScanner`]) accumulate widths element by element, and their frozen
//! counterparts ([`ItemAligner`]) emit padding entries at render time.

use std::collections::HashSet;

use regalign::AttributeAlignment;
use serde::{Deserialize, Serialize};

use crate::choice::{ChoiceAligner, ChoiceScanner, GroupChoice};
use crate::group::{AttributeGroup, GroupScanner};
use crate::trailer::{Trailer, TrailerScanner};

/// An attribute name paired with the display width of its value, as observed
/// on one element during the scan phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct AttrWidth {
    pub name: String,
    pub width: usize,
}

/// One item of an alignment sequence: a fixed group of columns, a choice
/// between alternative groups, or the mandatory catch-all trailer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceItem {
    Group(AttributeGroup),
    Choice(GroupChoice),
    Trailer(Trailer),
}

impl SequenceItem {
    pub fn is_trailer(&self) -> bool {
        matches!(self, SequenceItem::Trailer(_))
    }

    pub(crate) fn create_scanner(&self) -> ItemScanner {
        match self {
            SequenceItem::Group(group) => ItemScanner::Group(GroupScanner::new(group.clone())),
            SequenceItem::Choice(choice) => ItemScanner::Choice(ChoiceScanner::new(choice.clone())),
            SequenceItem::Trailer(_) => ItemScanner::Trailer(TrailerScanner::new()),
        }
    }
}

impl From<AttributeGroup> for SequenceItem {
    fn from(group: AttributeGroup) -> Self {
        SequenceItem::Group(group)
    }
}

impl From<GroupChoice> for SequenceItem {
    fn from(choice: GroupChoice) -> Self {
        SequenceItem::Choice(choice)
    }
}

impl From<Trailer> for SequenceItem {
    fn from(trailer: Trailer) -> Self {
        SequenceItem::Trailer(trailer)
    }
}

/// Mutable scan-phase state for one sequence item. Not shareable across
/// threads scanning the same batch; consumed by [`ItemScanner::finish`].
pub(crate) enum ItemScanner {
    Group(GroupScanner),
    Choice(ChoiceScanner),
    Trailer(TrailerScanner),
}

impl ItemScanner {
    /// Consume this item's share of one element's remaining attributes,
    /// returning what it did not claim, in order.
    pub fn scan(&mut self, attrs: Vec<AttrWidth>) -> Vec<AttrWidth> {
        match self {
            ItemScanner::Group(scanner) => scanner.scan(attrs),
            ItemScanner::Choice(scanner) => scanner.scan(attrs),
            ItemScanner::Trailer(scanner) => scanner.scan(attrs),
        }
    }

    /// Freeze accumulated widths into the render-phase aligner.
    pub fn finish(self) -> ItemAligner {
        match self {
            ItemScanner::Group(scanner) => ItemAligner::Base(scanner.finish()),
            ItemScanner::Choice(scanner) => ItemAligner::Choice(scanner.finish()),
            ItemScanner::Trailer(scanner) => ItemAligner::Base(scanner.finish()),
        }
    }
}

/// Immutable render-phase counterpart of a sequence item.
pub(crate) enum ItemAligner {
    Base(BaseAligner),
    Choice(ChoiceAligner),
}

impl ItemAligner {
    /// Emit this item's padding entries for one element, given the names not
    /// yet claimed by earlier items; returns the names it did not claim.
    pub fn take<'a>(
        &self,
        names: Vec<&'a str>,
        out: &mut Vec<AttributeAlignment>,
    ) -> Vec<&'a str> {
        match self {
            ItemAligner::Base(aligner) => aligner.take(names, out),
            ItemAligner::Choice(aligner) => aligner.take(names, out),
        }
    }
}

/// Render-side worker shared by groups and trailers: emits a fixed entry list
/// for every element and forwards the names it does not know.
///
/// Emitting entries even for absent attributes is what keeps later columns in
/// place; the writer substitutes blanks for them.
pub(crate) struct BaseAligner {
    alignments: Vec<AttributeAlignment>,
    known: HashSet<String>,
    full_width: usize,
}

impl BaseAligner {
    pub fn new(alignments: Vec<AttributeAlignment>) -> Self {
        let known = alignments
            .iter()
            .filter(|a| !a.is_padding_only())
            .map(|a| a.name().to_string())
            .collect();
        let full_width = alignments
            .iter()
            .filter(|a| a.should_align())
            .map(AttributeAlignment::full_width)
            .sum();
        Self {
            alignments,
            known,
            full_width,
        }
    }

    /// Total width this item occupies when rendered, counting only aligned
    /// entries (unaligned ones reserve nothing when absent).
    pub fn full_width(&self) -> usize {
        self.full_width
    }

    pub fn take<'a>(
        &self,
        names: Vec<&'a str>,
        out: &mut Vec<AttributeAlignment>,
    ) -> Vec<&'a str> {
        out.extend(self.alignments.iter().cloned());
        names
            .into_iter()
            .filter(|name| !self.known.contains(*name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_aligner_full_width_sums_aligned_entries() {
        let aligner = BaseAligner::new(vec![
            AttributeAlignment::new("offset", 2), // 6 + 4 + 2
            AttributeAlignment::unaligned("dir"), // reserves nothing
            AttributeAlignment::padding_only(3),
        ]);
        assert_eq!(aligner.full_width(), 12 + 3);
    }

    #[test]
    fn base_aligner_forwards_unknown_names() {
        let aligner = BaseAligner::new(vec![AttributeAlignment::new("value", 2)]);
        let mut out = Vec::new();
        let rest = aligner.take(vec!["value", "name"], &mut out);
        assert_eq!(rest, vec!["name"]);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn sequence_item_conversions() {
        let item: SequenceItem = AttributeGroup::new(["value"]).into();
        assert!(!item.is_trailer());
        let item: SequenceItem = Trailer::new().into();
        assert!(item.is_trailer());
    }
}
