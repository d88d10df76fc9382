//! A fixed, ordered set of attribute names aligned as one unit.

use std::collections::HashMap;

use regalign::AttributeAlignment;
use serde::{Deserialize, Serialize};

use crate::choice::GroupChoice;
use crate::sequence::{AttrWidth, BaseAligner};

/// A group of attributes that co-occur and are aligned (or replaced by
/// placeholder blanks) as a unit, in declared order.
///
/// Usually combined with others in a [`GroupChoice`]; on its own it is a
/// plain run of columns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeGroup {
    names: Vec<String>,
    #[serde(default)]
    extra_space: usize,
}

impl AttributeGroup {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            extra_space: 0,
        }
    }

    /// Widen every column of this group by `extra_space` beyond the maximum
    /// observed value width. A never-observed name still gets `extra_space`
    /// blanks reserved.
    pub fn with_extra_space(mut self, extra_space: usize) -> Self {
        self.extra_space = extra_space;
        self
    }

    /// Start a [`GroupChoice`] with this group and one alternative.
    pub fn or<I, S>(self, names: I) -> GroupChoice
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        GroupChoice::new([self, AttributeGroup::new(names)])
    }

    /// The attribute names in declared order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn extra_space(&self) -> usize {
        self.extra_space
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        // groups hold a handful of names; a scan beats set upkeep
        self.names.iter().any(|n| n == name)
    }

    /// How many of `names` this group would claim.
    pub(crate) fn count_handled<'a>(&self, names: impl Iterator<Item = &'a str>) -> usize {
        names.filter(|name| self.contains(name)).count()
    }
}

/// Scan-phase accumulator for one [`AttributeGroup`].
pub(crate) struct GroupScanner {
    group: AttributeGroup,
    observed: HashMap<String, usize>,
}

impl GroupScanner {
    pub fn new(group: AttributeGroup) -> Self {
        Self {
            group,
            observed: HashMap::new(),
        }
    }

    /// Claim this group's names from one element, accumulating the maximum
    /// value width per name; everything else is forwarded in order.
    pub fn scan(&mut self, attrs: Vec<AttrWidth>) -> Vec<AttrWidth> {
        let mut rest = Vec::with_capacity(attrs.len());
        for attr in attrs {
            if self.group.contains(&attr.name) {
                let entry = self.observed.entry(attr.name).or_insert(0);
                *entry = (*entry).max(attr.width);
            } else {
                rest.push(attr);
            }
        }
        rest
    }

    /// One entry per declared name, in declared order: maximum observed width
    /// (0 if never seen) plus `extra_space`. Without `extra_space` a
    /// never-observed name ends up at width 0, which reserves no space.
    pub fn finish(self) -> BaseAligner {
        let alignments = self
            .group
            .names()
            .iter()
            .map(|name| {
                let observed = self.observed.get(name).copied().unwrap_or(0);
                AttributeAlignment::new(name, observed + self.group.extra_space)
            })
            .collect();
        BaseAligner::new(alignments)
    }
}
