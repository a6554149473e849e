use crate::domain::timestamp::{TimestampDocument, TimestampElement};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryElement {
    pub utc_instant: Option<String>,
    pub text: String,
}

impl MemoryElement {
    #[must_use]
    pub fn new(utc_instant: impl Into<String>) -> Self {
        Self {
            utc_instant: Some(utc_instant.into()),
            text: String::new(),
        }
    }

    #[must_use]
    pub fn without_timestamp() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

impl TimestampElement for MemoryElement {
    fn utc_instant(&self) -> Option<&str> {
        self.utc_instant.as_deref()
    }

    fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
    }
}

/// Timestamp elements held in a plain list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryDocument {
    elements: Vec<MemoryElement>,
}

impl InMemoryDocument {
    #[must_use]
    pub const fn new(elements: Vec<MemoryElement>) -> Self {
        Self { elements }
    }

    #[must_use]
    pub fn elements(&self) -> &[MemoryElement] {
        &self.elements
    }

    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.elements.iter().map(|e| e.text.as_str()).collect()
    }
}

impl FromIterator<MemoryElement> for InMemoryDocument {
    fn from_iter<I: IntoIterator<Item = MemoryElement>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl TimestampDocument for InMemoryDocument {
    fn visit_timestamps(&mut self, visitor: &mut dyn FnMut(&mut dyn TimestampElement)) {
        for element in &mut self.elements {
            visitor(element);
        }
    }
}
