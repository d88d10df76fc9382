//! The input model for alignment finders.

/// One sibling element as presented to the alignment engine: a tag name plus
/// an ordered list of unique (attribute name, value) pairs.
///
/// The engine knows nothing about XML syntax. Callers convert their document
/// model into `Element` values before batching one parent's direct children.
///
/// # Example
///
/// ```rust
/// use regalign::Element;
///
/// let el = Element::new("enum")
///     .attr("value", "42")
///     .attr("name", "XR_MAX_THING");
/// assert_eq!(el.value("value"), Some("42"));
/// assert_eq!(el.attribute_count(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    /// Append an attribute, keeping source order. A repeated name replaces
    /// the earlier value in place rather than adding a duplicate.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Non-consuming variant of [`Element::attr`].
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// The tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The (name, value) pairs in source order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Attribute names in source order.
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|(n, _)| n.as_str())
    }

    /// Value of the named attribute, if present.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }
}
