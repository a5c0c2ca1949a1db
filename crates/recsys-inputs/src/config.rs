use burn::config::Config;

use crate::{InputsError, InputsMeta, Schema};

/// Configuration to create the [state](InputsMeta) of an input module using the
/// [init function](InputsConfig::init).
#[derive(Config, Debug)]
pub struct InputsConfig {
    /// Size of the embedding produced by the module.
    pub length: usize,
    /// Names of the batch fields the module reads, in order.
    pub schema: Option<Vec<String>>,
}

impl InputsConfig {
    /// Initializes a new [InputsMeta].
    ///
    /// # Errors
    ///
    /// Any [InputsError] raised by [Schema::new] when a schema is configured.
    pub fn init(&self) -> Result<InputsMeta, InputsError> {
        let mut meta = InputsMeta::new(self.length);

        if let Some(inputs) = &self.schema {
            meta.set_schema(Schema::new(inputs.iter().cloned())?);
        }

        log::debug!("Initialized inputs with length {}", self.length);

        Ok(meta)
    }
}
