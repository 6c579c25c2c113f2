//! Populate trees and their query-string encoding.
//!
//! DESIGN
//! ======
//! The CMS only returns relations and media that the request asks for. A
//! [`Populate`] is an ordered tree describing those selections; it flattens
//! to bracketed query pairs the way `qs.stringify` does:
//!
//! ```text
//! populate[hero][populate][cta]=true
//! populate[hero][populate][image][fields][0]=url
//! populate[blocks][on][layout.header-section]=true
//! ```
//!
//! Entry order is preserved so generated URLs are stable across renders.

/// Root key all selections hang off.
const ROOT: &str = "populate";

/// What to include for one relation or component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// `key=true`: include the relation with its default fields.
    All,
    /// `key[populate]=true`: include the relation and all of its relations.
    Deep,
    /// `key[fields][i]=…`: include only the listed scalar fields.
    Fields(Vec<String>),
    /// `key[populate][…]`: include the relation with nested selections.
    Nested(Populate),
    /// `key[on][component]…`: dynamic zone, one fragment per component.
    On(Populate),
}

/// An ordered set of relation selections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Populate {
    entries: Vec<(String, Selection)>,
}

impl Populate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn all(self, key: &str) -> Self {
        self.with(key, Selection::All)
    }

    #[must_use]
    pub fn deep(self, key: &str) -> Self {
        self.with(key, Selection::Deep)
    }

    #[must_use]
    pub fn fields(self, key: &str, fields: &[&str]) -> Self {
        let fields = fields.iter().map(|f| (*f).to_owned()).collect();
        self.with(key, Selection::Fields(fields))
    }

    #[must_use]
    pub fn nested(self, key: &str, inner: Populate) -> Self {
        self.with(key, Selection::Nested(inner))
    }

    /// Select a dynamic zone; `fragments` is keyed by component discriminator.
    #[must_use]
    pub fn on(self, key: &str, fragments: Populate) -> Self {
        self.with(key, Selection::On(fragments))
    }

    #[must_use]
    pub fn with(mut self, key: &str, selection: Selection) -> Self {
        self.entries.push((key.to_owned(), selection));
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flatten into unencoded `(key, value)` query pairs under `populate`.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        self.flatten_into(ROOT, &mut out);
        out
    }

    fn flatten_into(&self, prefix: &str, out: &mut Vec<(String, String)>) {
        for (key, selection) in &self.entries {
            let base = format!("{prefix}[{key}]");
            match selection {
                Selection::All => out.push((base, "true".to_owned())),
                Selection::Deep => out.push((format!("{base}[populate]"), "true".to_owned())),
                Selection::Fields(fields) => {
                    for (i, field) in fields.iter().enumerate() {
                        out.push((format!("{base}[fields][{i}]"), field.clone()));
                    }
                }
                Selection::Nested(inner) => inner.flatten_into(&format!("{base}[populate]"), out),
                Selection::On(fragments) => fragments.flatten_into(&format!("{base}[on]"), out),
            }
        }
    }
}

#[cfg(test)]
#[path = "populate_test.rs"]
mod tests;
