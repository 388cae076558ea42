//! Namespace classification lookup for converters.

use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::config::NamespaceStrategy;
use crate::converter::context::ConverterContext;
use crate::converter::plugin::ConverterPlugin;
use crate::structure::namespace::NamespaceInfo;
use crate::syntax::NodeId;

pub struct NamespaceInfoService {
    by_node: FxHashMap<NodeId, NamespaceStrategy>,
}

impl NamespaceInfoService {
    pub fn new(info: &[NamespaceInfo]) -> Self {
        Self {
            by_node: info.iter().map(|entry| (entry.node, entry.strategy)).collect(),
        }
    }

    /// Resolved strategy for a namespace declaration node.
    pub fn strategy_of(&self, node: NodeId) -> NamespaceStrategy {
        self.by_node.get(&node).copied().unwrap_or_default()
    }
}

pub struct NamespaceInfoPlugin {
    service: Rc<NamespaceInfoService>,
}

impl NamespaceInfoPlugin {
    pub fn new(info: &[NamespaceInfo]) -> Self {
        Self {
            service: Rc::new(NamespaceInfoService::new(info)),
        }
    }
}

impl ConverterPlugin for NamespaceInfoPlugin {
    fn setup(&self, context: &mut ConverterContext) {
        context.register_service(self.service.clone());
    }
}
