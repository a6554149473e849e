/// A handle to one displayable UTC instant.
pub trait TimestampElement {
    /// Raw value of the element's timestamp attribute, if it has one.
    fn utc_instant(&self) -> Option<&str>;

    /// Replace the element's display text.
    fn set_text(&mut self, text: &str);
}

/// A collection of timestamp elements that can be rewritten in place.
pub trait TimestampDocument {
    /// Calls `visitor` once for every timestamp element, in document order.
    fn visit_timestamps(&mut self, visitor: &mut dyn FnMut(&mut dyn TimestampElement));
}
