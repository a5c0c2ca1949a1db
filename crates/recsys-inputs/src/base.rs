use burn::module::{Content, DisplaySettings, Ignored, Module, ModuleDisplay};
use burn::tensor::backend::Backend;

use crate::{InputsError, Schema};

/// The contract shared by every input module.
///
/// An input module reads one or more named fields of a batch and produces an embedding of
/// [length](Inputs::length) features. Implementors keep that state in an [InputsMeta] and
/// expose it through [meta](Inputs::meta).
pub trait Inputs<B: Backend>: Module<B> {
    /// Shared state of the input module.
    fn meta(&self) -> &InputsMeta;

    /// Size of the embedding produced by the module.
    fn length(&self) -> usize {
        self.meta().length()
    }

    /// Batch fields read by the module, if bound.
    fn schema(&self) -> Option<&Schema> {
        self.meta().schema()
    }
}

/// State every input module carries besides its parameters.
///
/// Should be created with [InputsConfig](crate::InputsConfig) or [InputsMeta::new].
#[derive(Module, Clone, Debug)]
#[module(custom_display)]
pub struct InputsMeta {
    length: usize,
    schema: Ignored<Option<Schema>>,
}

impl ModuleDisplay for InputsMeta {
    fn custom_settings(&self) -> Option<DisplaySettings> {
        DisplaySettings::new()
            .with_new_line_after_attribute(false)
            .optional()
    }

    fn custom_content(&self, content: Content) -> Option<Content> {
        let schema = match self.schema() {
            Some(schema) => schema.to_string(),
            None => "None".to_string(),
        };

        content
            .add("length", &self.length)
            .add("schema", &schema)
            .optional()
    }
}

impl InputsMeta {
    /// Creates the state of a module producing `length` features, not yet bound to any field.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            schema: Ignored(None),
        }
    }

    /// Binds the module to the given schema.
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.set_schema(schema);
        self
    }

    /// Binds the module to the given schema.
    ///
    /// Returns the schema it replaces when that schema reads different fields.
    pub fn set_schema(&mut self, schema: Schema) -> Option<Schema> {
        log::debug!("Binding input schema {schema}");

        match self.schema.0.replace(schema) {
            Some(previous) if Some(&previous) != self.schema.0.as_ref() => {
                log::warn!("Replaced input schema {previous}");
                Some(previous)
            }
            _ => None,
        }
    }

    /// Binds the module to the given field names.
    ///
    /// On error, the current schema is kept. See [set_schema](InputsMeta::set_schema) for the
    /// returned value.
    pub fn set_inputs<I, S>(&mut self, inputs: I) -> Result<Option<Schema>, InputsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let schema = Schema::new(inputs)?;

        Ok(self.set_schema(schema))
    }

    /// Size of the produced embedding.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Fields the module reads, if bound.
    pub fn schema(&self) -> Option<&Schema> {
        self.schema.0.as_ref()
    }
}
