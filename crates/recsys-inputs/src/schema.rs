use std::collections::{HashMap, HashSet};

use crate::InputsError;

/// The ordered names of the batch fields an input module reads.
///
/// A schema always holds at least one name, and every name is non-blank and unique.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schema {
    inputs: Vec<String>,
}

impl Schema {
    /// Creates a schema from a list of field names, keeping their order.
    ///
    /// # Errors
    ///
    /// * [InputsError::EmptySchema] if `inputs` yields no name.
    /// * [InputsError::EmptyField] if a name is blank.
    /// * [InputsError::DuplicateField] if a name appears twice.
    pub fn new<I, S>(inputs: I) -> Result<Self, InputsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let inputs: Vec<String> = inputs.into_iter().map(Into::into).collect();

        if inputs.is_empty() {
            return Err(InputsError::EmptySchema);
        }

        let mut seen = HashSet::with_capacity(inputs.len());
        for (index, name) in inputs.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(InputsError::EmptyField { index });
            }
            if !seen.insert(name.as_str()) {
                return Err(InputsError::DuplicateField(name.clone()));
            }
        }

        Ok(Self { inputs })
    }

    /// Creates a schema reading a single field.
    pub fn single(name: impl Into<String>) -> Result<Self, InputsError> {
        Self::new([name.into()])
    }

    /// Field names, in order.
    pub fn names(&self) -> &[String] {
        &self.inputs
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Always false: a schema holds at least one field.
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Whether the schema reads the given field.
    pub fn contains(&self, name: &str) -> bool {
        self.inputs.iter().any(|input| input == name)
    }

    /// Iterates over the field names.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.inputs.iter().map(String::as_str)
    }

    /// Picks the batch entries this schema reads, in schema order.
    ///
    /// Entries of the batch that are not part of the schema are ignored.
    ///
    /// # Errors
    ///
    /// [InputsError::MissingField] with the first schema field absent from the batch.
    pub fn select<'a, T>(
        &self,
        batch: &'a HashMap<String, T>,
    ) -> Result<Vec<&'a T>, InputsError> {
        self.inputs
            .iter()
            .map(|name| {
                log::trace!("Selecting field {name}");
                batch
                    .get(name)
                    .ok_or_else(|| InputsError::MissingField(name.clone()))
            })
            .collect()
    }
}

impl core::fmt::Display for Schema {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{}]", self.inputs.join(", "))
    }
}
