//! Type mapping from API reference annotations to the intermediate representation
//!
//! Maps Planning Center's abstract type annotations to our `FieldType` IR.

use pco_poco_generator_common::FieldType;

/// Maps upstream type annotation names to `FieldType`
pub struct TypeMapper;

impl TypeMapper {
    /// Map a type annotation string to `FieldType`
    ///
    /// Total and deterministic: unknown annotations degrade to
    /// [`FieldType::Json`] rather than erroring, since the mapping exists
    /// for best-effort code generation, not schema validation.
    ///
    /// # Examples
    /// ```
    /// use pco_poco_generator_reference::TypeMapper;
    /// use pco_poco_generator_common::FieldType;
    ///
    /// assert_eq!(TypeMapper::map_type("string"), FieldType::String);
    /// assert_eq!(TypeMapper::map_type("integer"), FieldType::Integer);
    /// assert_eq!(TypeMapper::map_type("date_time"), FieldType::DateTime);
    /// ```
    pub fn map_type(annotation: &str) -> FieldType {
        match annotation {
            "string" | "primary_key" | "currency_abbreviation" => FieldType::String,
            "date_time" => FieldType::DateTime,
            "integer" => FieldType::Integer,
            "boolean" => FieldType::Boolean,
            "float" => FieldType::Float,
            "array" => FieldType::List(Box::new(FieldType::Json)),
            "date" => FieldType::Date,
            _ => FieldType::Json,
        }
    }
}
