//! Keyed collections of callables that may carry plain data alongside
//!
//! A namespace mirrors a module of exported action creators or reducers: most
//! entries are callables, some are metadata. Consumers keep the callables and
//! skip everything else.

use indexmap::IndexMap;

/// One entry of a [`Namespace`]
#[derive(Debug, Clone)]
pub enum Member<F> {
    Callable(F),
    Value(serde_json::Value),
}

impl<F> Member<F> {
    pub fn as_callable(&self) -> Option<&F> {
        match self {
            Member::Callable(f) => Some(f),
            Member::Value(_) => None,
        }
    }
}

/// Insertion-ordered mapping from name to [`Member`]
#[derive(Debug, Clone)]
pub struct Namespace<F> {
    members: IndexMap<String, Member<F>>,
}

impl<F> Default for Namespace<F> {
    fn default() -> Self {
        Self {
            members: IndexMap::new(),
        }
    }
}

impl<F> Namespace<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a callable under `key`, replacing any previous entry
    pub fn callable(mut self, key: impl Into<String>, f: F) -> Self {
        self.members.insert(key.into(), Member::Callable(f));
        self
    }

    /// Add a non-callable entry under `key`, replacing any previous entry
    pub fn value(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.members.insert(key.into(), Member::Value(value.into()));
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, member: Member<F>) -> Option<Member<F>> {
        self.members.insert(key.into(), member)
    }

    pub fn get(&self, key: &str) -> Option<&Member<F>> {
        self.members.get(key)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// All entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Member<F>)> {
        self.members.iter().map(|(k, m)| (k.as_str(), m))
    }

    /// Only the callable entries, in insertion order
    pub fn callables(&self) -> impl Iterator<Item = (&str, &F)> {
        self.iter()
            .filter_map(|(k, m)| m.as_callable().map(|f| (k, f)))
    }

    /// Build a namespace of plain values from a JSON object
    pub fn from_json_object(object: serde_json::Map<String, serde_json::Value>) -> Self {
        Self {
            members: object
                .into_iter()
                .map(|(k, v)| (k, Member::Value(v)))
                .collect(),
        }
    }
}

impl<F> FromIterator<(String, Member<F>)> for Namespace<F> {
    fn from_iter<I: IntoIterator<Item = (String, Member<F>)>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}
