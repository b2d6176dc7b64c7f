//! Minimal service lookup used to resolve deferred alias references.

use std::{
    any::{Any, TypeId},
    collections::HashMap,
};

/// Anything that can hand out shared services by type.
pub trait Container {
    fn service(&self, id: TypeId) -> Option<&(dyn Any + Send + Sync)>;

    /// Typed lookup on top of [`service`](Self::service).
    fn get<T: Any>(&self) -> Option<&T>
    where
        Self: Sized,
    {
        self.service(TypeId::of::<T>())?.downcast_ref::<T>()
    }
}

/// Type-keyed service map, one instance per type.
#[derive(Default)]
pub struct SimpleContainer {
    services: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl SimpleContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with<T: Any + Send + Sync>(mut self, service: T) -> Self {
        self.insert(service);
        self
    }

    /// Register `service`, returning `true` if it replaced one of the same type.
    pub fn insert<T: Any + Send + Sync>(&mut self, service: T) -> bool {
        self.services.insert(TypeId::of::<T>(), Box::new(service)).is_some()
    }
}

impl Container for SimpleContainer {
    fn service(&self, id: TypeId) -> Option<&(dyn Any + Send + Sync)> {
        self.services.get(&id).map(|boxed| boxed.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aliases::Aliases;

    #[test]
    fn typed_lookup() {
        let container = SimpleContainer::new().with(Aliases::from_iter([("@app", "/app")]));
        let aliases = container.get::<Aliases>().expect("aliases registered");
        assert_eq!(aliases.get("@app").unwrap(), "/app");
        assert!(container.get::<String>().is_none());
    }

    #[test]
    fn insert_replaces_same_type() {
        let mut container = SimpleContainer::new();
        assert!(!container.insert(1u32));
        assert!(container.insert(2u32));
        assert_eq!(container.get::<u32>(), Some(&2));
    }
}
