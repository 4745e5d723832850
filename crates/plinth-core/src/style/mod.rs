//! Style resolution: ordered class composition.
//!
//! Every component builds its class string the same way: base tokens, then
//! the variant, then the size, then state and orientation tokens, then the
//! caller's custom classes. The concatenation goes through [`merge_classes`]
//! so later tokens override earlier ones that set the same property.

mod merge;

pub use merge::{merge_classes, merge_tokens};

/// Resolve the class tokens for one element.
///
/// Append order is fixed: `base`, `variant`, `size`, each entry of `states`,
/// then `custom`. The result is deterministic for equal inputs.
///
/// ```
/// use plinth_core::style::resolve;
///
/// let tokens = resolve("px-4 py-2 font-medium", "text-blue-600", "px-6", &["opacity-50"], "");
/// assert_eq!(tokens, vec!["py-2", "font-medium", "text-blue-600", "px-6", "opacity-50"]);
/// ```
pub fn resolve(
    base: &str,
    variant: &str,
    size: &str,
    states: &[&str],
    custom: &str,
) -> Vec<String> {
    ClassList::new()
        .push(base)
        .push(variant)
        .push(size)
        .extend(states.iter().copied())
        .push(custom)
        .tokens()
}

/// Ordered builder for class strings.
///
/// Parts are kept as pushed and only merged when [`ClassList::build`] or
/// [`ClassList::tokens`] is called.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    parts: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a part (may contain several space-separated tokens)
    pub fn push(mut self, part: impl AsRef<str>) -> Self {
        let part = part.as_ref().trim();
        if !part.is_empty() {
            self.parts.push(part.to_string());
        }
        self
    }

    /// Append a part only when `condition` holds
    pub fn push_if(self, condition: bool, part: impl AsRef<str>) -> Self {
        if condition {
            self.push(part)
        } else {
            self
        }
    }

    /// Append an optional part
    pub fn push_opt<S: AsRef<str>>(self, part: Option<S>) -> Self {
        match part {
            Some(p) => self.push(p),
            None => self,
        }
    }

    /// Append several parts in order
    pub fn extend<I, S>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for part in parts {
            self = self.push(part);
        }
        self
    }

    /// The merged tokens
    pub fn tokens(&self) -> Vec<String> {
        merge_tokens(&self.parts)
    }

    /// The merged class string
    pub fn build(&self) -> String {
        merge_classes(&self.parts)
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
