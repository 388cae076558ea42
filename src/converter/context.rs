//! Per-run service registry shared by all passes.

use rustc_hash::FxHashMap;
use std::any::{Any, TypeId};
use std::rc::Rc;

/// Mutable registry mapping a service type to its single instance.
///
/// Created once per generation run and passed by reference to every phase.
/// Registration happens strictly during the single-threaded setup phase; all
/// later phases only read, so services use interior mutability for any state
/// they accumulate. A lookup miss is a valid, handled state, not an error.
#[derive(Default)]
pub struct ConverterContext {
    services: FxHashMap<TypeId, Rc<dyn Any>>,
}

impl ConverterContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a service instance. Last registration for a type wins.
    pub fn register_service<S: Any>(&mut self, service: Rc<S>) {
        self.services.insert(TypeId::of::<S>(), service);
    }

    /// Look up a service by type. Absence is valid.
    pub fn lookup_service<S: Any>(&self) -> Option<Rc<S>> {
        self.services
            .get(&TypeId::of::<S>())
            .cloned()
            .and_then(|service| service.downcast::<S>().ok())
    }
}
