//! Configuration access for other plugins.

use std::rc::Rc;

use crate::config::Configuration;
use crate::converter::context::ConverterContext;
use crate::converter::plugin::ConverterPlugin;
use crate::error::GenerateError;

pub struct ConfigurationService {
    pub configuration: Configuration,
}

/// Registers [`ConfigurationService`] during setup.
pub struct ConfigurationPlugin {
    service: Rc<ConfigurationService>,
}

impl ConfigurationPlugin {
    pub fn new(configuration: Configuration) -> Self {
        Self {
            service: Rc::new(ConfigurationService { configuration }),
        }
    }
}

impl ConverterPlugin for ConfigurationPlugin {
    fn setup(&self, context: &mut ConverterContext) {
        context.register_service(self.service.clone());
    }
}

/// Look up the configuration service, failing the run when absent.
///
/// Generation-phase plugins that resolve output placement cannot work without
/// configuration, so absence is a fatal configuration error there.
pub fn require_configuration(
    context: &ConverterContext,
) -> Result<Rc<ConfigurationService>, GenerateError> {
    context
        .lookup_service::<ConfigurationService>()
        .ok_or(GenerateError::MissingService("ConfigurationService"))
}
