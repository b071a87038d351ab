use crate::object::Object;
use indexmap::IndexMap;

/// Name bindings for one scope. A block's scope borrows the scope it is
/// nested in, so lookups walk outward while new bindings stay local.
#[derive(Default, Debug)]
pub struct Environment<'a> {
    store: IndexMap<String, Object>,
    outer: Option<&'a Environment<'a>>,
}

impl<'a> Environment<'a> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn extend(outer: &'a Environment<'a>) -> Self {
        Environment {
            store: IndexMap::new(),
            outer: Some(outer),
        }
    }

    pub fn set(&mut self, key: &str, value: Object) {
        self.store.insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<Object> {
        match self.store.get(key) {
            Some(value) => Some(value.clone()),
            None => self.outer.and_then(|outer| outer.get(key)),
        }
    }

    /// Number of bindings held by this scope alone.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
