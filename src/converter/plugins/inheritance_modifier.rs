//! Inheritance-modifier resolution (e.g. `override` markers).

use std::rc::Rc;

use super::parameters::Signature;
use crate::converter::context::ConverterContext;
use crate::converter::plugin::ConverterPlugin;
use crate::syntax::NodeRef;

/// One modifier strategy. Receives the concrete signature when resolving for
/// a generated overload, `None` when resolving for a whole declaration.
pub type InheritanceModifier =
    Box<dyn Fn(NodeRef<'_>, Option<&Signature>, &ConverterContext) -> Option<String>>;

#[derive(Default)]
pub struct InheritanceModifierService {
    modifiers: Vec<InheritanceModifier>,
}

impl InheritanceModifierService {
    pub fn new(modifiers: Vec<InheritanceModifier>) -> Self {
        Self { modifiers }
    }

    /// First non-`None` strategy result wins.
    pub fn resolve(
        &self,
        node: NodeRef<'_>,
        signature: Option<&Signature>,
        context: &ConverterContext,
    ) -> Option<String> {
        self.modifiers
            .iter()
            .find_map(|modifier| modifier(node, signature, context))
    }
}

pub struct InheritanceModifierPlugin {
    service: Rc<InheritanceModifierService>,
}

impl InheritanceModifierPlugin {
    pub fn new(modifiers: Vec<InheritanceModifier>) -> Self {
        Self {
            service: Rc::new(InheritanceModifierService::new(modifiers)),
        }
    }
}

impl ConverterPlugin for InheritanceModifierPlugin {
    fn setup(&self, context: &mut ConverterContext) {
        context.register_service(self.service.clone());
    }
}
