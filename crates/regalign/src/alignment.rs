//! Per-column padding instructions.
//!
//! [`AttributeAlignment`] describes one column of attribute output: which
//! attribute occupies it and how wide its value portion is. A batch scan
//! produces these; a writer consumes them by emitting the literal attribute
//! followed by [`AttributeAlignment::append_padding`].

use std::collections::HashMap;
use std::fmt;

use crate::element::Element;
use crate::width::{display_width, push_spaces};

/// An attribute name and the value width it is padded to.
///
/// An `align_width` of 0 means "do not align": the attribute is written as-is
/// with no padding, and absent occurrences reserve no space. An empty name
/// marks a padding-only entry that contributes blank characters and nothing
/// else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeAlignment {
    name: String,
    align_width: usize,
}

impl AttributeAlignment {
    pub fn new(name: impl Into<String>, align_width: usize) -> Self {
        Self {
            name: name.into(),
            align_width,
        }
    }

    /// An entry that renders the attribute without any padding.
    pub fn unaligned(name: impl Into<String>) -> Self {
        Self::new(name, 0)
    }

    /// An entry with no attribute at all, contributing `width` blanks.
    pub fn padding_only(width: usize) -> Self {
        Self::new("", width)
    }

    /// Same name, marked as unaligned.
    pub fn replace_with_unaligned(&self) -> Self {
        Self::unaligned(self.name.clone())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn align_width(&self) -> usize {
        self.align_width
    }

    /// Whether this entry pads at all.
    pub fn should_align(&self) -> bool {
        self.align_width > 0
    }

    pub fn is_padding_only(&self) -> bool {
        self.name.is_empty()
    }

    /// The space reserved for the whole attribute: name, equals sign, quotes,
    /// value width, and the separating space before it. This is what an
    /// element missing the attribute substitutes with blanks.
    pub fn full_width(&self) -> usize {
        if self.is_padding_only() {
            self.align_width
        } else {
            // name=""<space>, plus the value width
            display_width(&self.name) + 4 + self.align_width
        }
    }

    /// Append the padding this entry calls for.
    ///
    /// `value` is the attribute's value on the current element, or `None`
    /// when the element does not carry the attribute. The caller writes the
    /// literal ` name="value"` itself before calling this with `Some`.
    pub fn append_padding(&self, value: Option<&str>, out: &mut String) {
        if !self.should_align() {
            return;
        }
        if self.is_padding_only() {
            push_spaces(out, self.align_width);
            return;
        }
        match value {
            None => push_spaces(out, self.full_width()),
            Some(v) => {
                let width = display_width(v);
                if width < self.align_width {
                    push_spaces(out, self.align_width - width);
                }
            }
        }
    }
}

impl fmt::Display for AttributeAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_padding_only() {
            write!(f, "Padding({})", self.align_width)
        } else if self.should_align() {
            write!(f, "Alignment({} [{}])", self.name, self.align_width)
        } else {
            write!(f, "Unaligned({})", self.name)
        }
    }
}

/// Alignment for an entire element: tag name column plus attribute columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementAlignment {
    name_width: usize,
    attribute_alignments: Vec<AttributeAlignment>,
}

impl ElementAlignment {
    /// The widest tag name in a batch.
    pub fn max_name_width(elements: &[Element]) -> usize {
        elements
            .iter()
            .map(|el| display_width(el.name()))
            .max()
            .unwrap_or(0)
    }

    /// Compute alignment for a batch of elements.
    ///
    /// The element with the most attributes defines the canonical column
    /// order (ties go to the earliest such element). Each canonical column is
    /// as wide as the longest value observed for that attribute anywhere in
    /// the batch, plus any `extra_width` override. The last canonical column
    /// is left unaligned unless `extra_width` names it, which avoids a run of
    /// spaces before the closing tag. Attribute names observed in the batch
    /// but missing from the canonical order are appended as unaligned
    /// entries, in first-observed order, so they still render unpadded.
    pub fn find(elements: &[Element], extra_width: &HashMap<String, usize>) -> Self {
        let name_width = Self::max_name_width(elements);

        let mut max_widths: HashMap<&str, usize> = HashMap::new();
        let mut observed_order: Vec<&str> = Vec::new();
        for el in elements {
            for (name, value) in el.attributes() {
                let entry = max_widths.entry(name.as_str()).or_insert_with(|| {
                    observed_order.push(name.as_str());
                    0
                });
                *entry = (*entry).max(display_width(value));
            }
        }

        let mut densest: Option<&Element> = None;
        for el in elements {
            if densest.map_or(true, |d| el.attribute_count() > d.attribute_count()) {
                densest = Some(el);
            }
        }

        let canonical: Vec<&str> = densest.map_or_else(Vec::new, |el| el.attribute_names().collect());

        let mut alignments: Vec<AttributeAlignment> = canonical
            .iter()
            .map(|name| {
                let width = max_widths.get(name).copied().unwrap_or(0)
                    + extra_width.get(*name).copied().unwrap_or(0);
                AttributeAlignment::new(*name, width)
            })
            .collect();

        if let Some(last) = alignments.last_mut() {
            if !extra_width.contains_key(last.name()) {
                *last = last.replace_with_unaligned();
            }
        }

        for name in &observed_order {
            if !canonical.contains(name) {
                alignments.push(AttributeAlignment::unaligned(*name));
            }
        }

        Self {
            name_width,
            attribute_alignments: alignments,
        }
    }

    pub fn name_width(&self) -> usize {
        self.name_width
    }

    pub fn attribute_alignments(&self) -> &[AttributeAlignment] {
        &self.attribute_alignments
    }

    /// Spaces to append after this element's tag name so tag names of the
    /// batch occupy one column.
    pub fn element_padding_width(&self, element: &Element) -> usize {
        element_padding_width(self.name_width, element)
    }
}

/// Padding needed after `element`'s tag name to reach `name_width`.
pub fn element_padding_width(name_width: usize, element: &Element) -> usize {
    name_width.saturating_sub(display_width(element.name()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_width_reserves_name_and_delimiters() {
        // `extends=""` is 10 characters, plus the separating space and value
        let a = AttributeAlignment::new("extends", 5);
        assert_eq!(a.full_width(), 7 + 4 + 5);
    }

    #[test]
    fn padding_only_full_width_is_its_width() {
        let a = AttributeAlignment::padding_only(9);
        assert_eq!(a.full_width(), 9);
        assert!(a.is_padding_only());
        assert!(a.should_align());
    }

    #[test]
    fn append_padding_noop_when_unaligned() {
        let a = AttributeAlignment::unaligned("name");
        let mut out = String::new();
        a.append_padding(Some("anything"), &mut out);
        a.append_padding(None, &mut out);
        assert_eq!(out, "");
    }

    #[test]
    fn append_padding_pads_short_values() {
        let a = AttributeAlignment::new("value", 4);
        let mut out = String::new();
        a.append_padding(Some("7"), &mut out);
        assert_eq!(out, "   ");
    }

    #[test]
    fn append_padding_ignores_overlong_values() {
        let a = AttributeAlignment::new("value", 2);
        let mut out = String::new();
        a.append_padding(Some("123456"), &mut out);
        assert_eq!(out, "");
    }

    #[test]
    fn append_padding_substitutes_missing_attribute() {
        let a = AttributeAlignment::new("dir", 1);
        let mut out = String::new();
        a.append_padding(None, &mut out);
        // dir="" is 6 chars, + 1 value + 1 separator
        assert_eq!(out.len(), 8);
        assert!(out.chars().all(|c| c == ' '));
    }

    #[test]
    fn find_uses_densest_element_order() {
        let batch = vec![
            Element::new("enum").attr("a", "1").attr("b", "22"),
            Element::new("enum").attr("a", "333"),
        ];
        let alignment = ElementAlignment::find(&batch, &HashMap::new());
        let entries = alignment.attribute_alignments();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], AttributeAlignment::new("a", 3));
        // last canonical column is never aligned by default
        assert_eq!(entries[1], AttributeAlignment::unaligned("b"));
    }

    #[test]
    fn find_appends_leftovers_unaligned() {
        let batch = vec![
            Element::new("enum").attr("a", "1").attr("b", "2"),
            Element::new("enum").attr("a", "1").attr("comment", "long text"),
        ];
        let alignment = ElementAlignment::find(&batch, &HashMap::new());
        let entries = alignment.attribute_alignments();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[2], AttributeAlignment::unaligned("comment"));
    }

    #[test]
    fn extra_width_keeps_last_column_aligned() {
        let extra: HashMap<String, usize> = [("b".to_string(), 2)].into();
        let batch = vec![Element::new("enum").attr("a", "1").attr("b", "22")];
        let alignment = ElementAlignment::find(&batch, &extra);
        let entries = alignment.attribute_alignments();
        assert_eq!(entries[1], AttributeAlignment::new("b", 4));
    }

    #[test]
    fn ties_for_densest_go_to_first_element() {
        let batch = vec![
            Element::new("enum").attr("x", "1").attr("y", "2"),
            Element::new("enum").attr("y", "2").attr("x", "1"),
        ];
        let alignment = ElementAlignment::find(&batch, &HashMap::new());
        assert_eq!(alignment.attribute_alignments()[0].name(), "x");
    }

    #[test]
    fn name_width_is_batch_maximum() {
        let batch = vec![Element::new("enum"), Element::new("unused")];
        let alignment = ElementAlignment::find(&batch, &HashMap::new());
        assert_eq!(alignment.name_width(), 6);
        assert_eq!(alignment.element_padding_width(&batch[0]), 2);
        assert_eq!(alignment.element_padding_width(&batch[1]), 0);
    }

    #[test]
    fn empty_batch_produces_empty_alignment() {
        let alignment = ElementAlignment::find(&[], &HashMap::new());
        assert_eq!(alignment.name_width(), 0);
        assert!(alignment.attribute_alignments().is_empty());
    }
}
