//! Mutually-exclusive alternatives sharing one column slot.

use regalign::AttributeAlignment;
use serde::{Deserialize, Serialize};

use crate::group::{AttributeGroup, GroupScanner};
use crate::sequence::{AttrWidth, BaseAligner};

/// A choice between attribute groups of which exactly one applies per
/// element, e.g. an `<enum>` carries either `value`, or
/// `offset`/`dir`/`extends`, or `bitpos`/`extends`.
///
/// All alternatives share one slot: every rendered element reserves the width
/// of the widest alternative, so the columns after the slot line up no matter
/// which alternative fired. Alternatives are conceptually disjoint, but
/// overlapping names are tolerated; the orchestrator collapses any duplicate
/// a later item re-reports.
///
/// # Example
///
/// ```rust
/// use regalign_grouped::AttributeGroup;
///
/// let choice = AttributeGroup::new(["value"])
///     .or(["offset", "dir", "extends"])
///     .or(["bitpos", "extends"]);
/// assert_eq!(choice.alternatives().len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupChoice {
    alternatives: Vec<AttributeGroup>,
}

impl GroupChoice {
    pub fn new<I: IntoIterator<Item = AttributeGroup>>(alternatives: I) -> Self {
        Self {
            alternatives: alternatives.into_iter().collect(),
        }
    }

    /// Add one more alternative.
    pub fn or<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alternatives.push(AttributeGroup::new(names));
        self
    }

    pub fn alternatives(&self) -> &[AttributeGroup] {
        &self.alternatives
    }

    /// Index of the alternative claiming the most of `names`. Earlier
    /// alternatives win ties, which keeps selection deterministic and the
    /// output byte-reproducible. `None` when nothing overlaps: the element
    /// does not participate in this slot at all.
    pub(crate) fn best_match<'a, I>(&self, names: I) -> Option<usize>
    where
        I: Iterator<Item = &'a str> + Clone,
    {
        let mut best: Option<(usize, usize)> = None;
        for (index, alternative) in self.alternatives.iter().enumerate() {
            let count = alternative.count_handled(names.clone());
            if count > 0 && best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((index, count));
            }
        }
        best.map(|(index, _)| index)
    }
}

/// Scan-phase state: one nested scanner per alternative, with per-element
/// delegation to the best-matching one. Alternatives an element did not
/// select are untouched for that element.
pub(crate) struct ChoiceScanner {
    choice: GroupChoice,
    scanners: Vec<GroupScanner>,
}

impl ChoiceScanner {
    pub fn new(choice: GroupChoice) -> Self {
        let scanners = choice
            .alternatives()
            .iter()
            .cloned()
            .map(GroupScanner::new)
            .collect();
        Self { choice, scanners }
    }

    pub fn scan(&mut self, attrs: Vec<AttrWidth>) -> Vec<AttrWidth> {
        match self.choice.best_match(attrs.iter().map(|a| a.name.as_str())) {
            Some(index) => self.scanners[index].scan(attrs),
            None => attrs,
        }
    }

    pub fn finish(self) -> ChoiceAligner {
        let aligners: Vec<BaseAligner> = self.scanners.into_iter().map(GroupScanner::finish).collect();
        // every element reserves the widest alternative's width
        let full_width = aligners.iter().map(BaseAligner::full_width).max().unwrap_or(0);
        ChoiceAligner {
            choice: self.choice,
            aligners,
            full_width,
        }
    }
}

/// Render-phase state: delegates to the best-matching alternative and tops
/// the slot up to its full width with a padding-only entry.
pub(crate) struct ChoiceAligner {
    choice: GroupChoice,
    aligners: Vec<BaseAligner>,
    full_width: usize,
}

impl ChoiceAligner {
    pub fn take<'a>(
        &self,
        names: Vec<&'a str>,
        out: &mut Vec<AttributeAlignment>,
    ) -> Vec<&'a str> {
        let Some(index) = self.choice.best_match(names.iter().copied()) else {
            return names;
        };
        let aligner = &self.aligners[index];
        let rest = aligner.take(names, out);
        let shortfall = self.full_width - aligner.full_width();
        if shortfall > 0 {
            out.push(AttributeAlignment::padding_only(shortfall));
        }
        rest
    }
}
