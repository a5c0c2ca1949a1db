/// Errors raised while binding input modules to batch fields.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InputsError {
    /// A schema was built from an empty list of field names.
    #[error("Schema error: at least one input field is required")]
    EmptySchema,

    /// A field name is empty or only whitespace.
    #[error("Schema error: field name at position {index} is empty")]
    EmptyField {
        /// Position of the offending name in the list.
        index: usize,
    },

    /// The same field name appears more than once.
    #[error("Schema error: duplicate field `{0}`")]
    DuplicateField(String),

    /// A batch has no entry for a field the schema requires.
    #[error("Batch error: missing field `{0}`")]
    MissingField(String),
}
