//! The sequence-terminal catch-all.

use std::collections::{HashMap, HashSet};

use regalign::AttributeAlignment;
use serde::{Deserialize, Serialize};

use crate::sequence::{AttrWidth, BaseAligner};

/// Consumes every attribute unclaimed by earlier sequence items.
///
/// Every sequence ends in exactly one trailer;
/// [`crate::GroupedAttributeAlignment::new`] appends this default one when
/// the caller leaves it out. The leftovers are laid out like
/// [`regalign::SimpleAlignment`]: the element with the most leftovers defines
/// the column order, and anything outside that order renders unpadded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trailer;

impl Trailer {
    pub fn new() -> Self {
        Self
    }
}

/// Scan-phase state: records every element's leftover ordering and the
/// maximum width per name.
pub(crate) struct TrailerScanner {
    name_orders: Vec<Vec<String>>,
    observed: HashMap<String, usize>,
    observed_order: Vec<String>,
}

impl TrailerScanner {
    pub fn new() -> Self {
        Self {
            name_orders: Vec::new(),
            observed: HashMap::new(),
            observed_order: Vec::new(),
        }
    }

    /// Takes everything; nothing survives a trailer.
    pub fn scan(&mut self, attrs: Vec<AttrWidth>) -> Vec<AttrWidth> {
        let mut order = Vec::with_capacity(attrs.len());
        for attr in attrs {
            if !self.observed.contains_key(&attr.name) {
                self.observed_order.push(attr.name.clone());
            }
            let entry = self.observed.entry(attr.name.clone()).or_insert(0);
            *entry = (*entry).max(attr.width);
            order.push(attr.name);
        }
        self.name_orders.push(order);
        Vec::new()
    }

    /// The longest recorded ordering becomes canonical (ties go to the
    /// earliest element); names outside it append as unaligned entries in
    /// first-observed order.
    pub fn finish(self) -> BaseAligner {
        let mut canonical: &[String] = &[];
        for order in &self.name_orders {
            if order.len() > canonical.len() {
                canonical = order;
            }
        }

        let canonical_set: HashSet<&String> = canonical.iter().collect();
        let mut alignments: Vec<AttributeAlignment> = canonical
            .iter()
            .map(|name| {
                AttributeAlignment::new(name, self.observed.get(name).copied().unwrap_or(0))
            })
            .collect();
        for name in &self.observed_order {
            if !canonical_set.contains(name) {
                alignments.push(AttributeAlignment::unaligned(name));
            }
        }
        BaseAligner::new(alignments)
    }
}
