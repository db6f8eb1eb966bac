//! Model fields.

use serde::{Deserialize, Serialize};

/// What a field's `type` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// A built-in scalar (`String`, `Int`, ...).
    Scalar,
    /// A relation to another model.
    Object,
    /// A schema enumeration.
    Enum,
    /// An unsupported column type.
    Unsupported,
}

/// Built-in scalar types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    String,
    Boolean,
    Int,
    BigInt,
    Float,
    Decimal,
    DateTime,
    Json,
    Bytes,
}

impl ScalarType {
    /// Parse a scalar type name as it appears in the datamodel.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "String" => Some(Self::String),
            "Boolean" => Some(Self::Boolean),
            "Int" => Some(Self::Int),
            "BigInt" => Some(Self::BigInt),
            "Float" => Some(Self::Float),
            "Decimal" => Some(Self::Decimal),
            "DateTime" => Some(Self::DateTime),
            "Json" => Some(Self::Json),
            "Bytes" => Some(Self::Bytes),
            _ => None,
        }
    }
}

/// A single field on a model.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
    /// Scalar name, enum name or related model name depending on `kind`.
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub is_list: bool,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub is_unique: bool,
    #[serde(default)]
    pub is_id: bool,
    #[serde(default)]
    pub is_read_only: bool,
    #[serde(default)]
    pub has_default_value: bool,
    #[serde(default)]
    pub is_updated_at: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_name: Option<String>,
    /// Scalar fields on this model that back the relation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relation_from_fields: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl Field {
    /// Whether this field is a relation to another model.
    pub fn is_relation(&self) -> bool {
        self.kind == FieldKind::Object
    }

    /// Whether this field holds an enum value.
    pub fn is_enum(&self) -> bool {
        self.kind == FieldKind::Enum
    }

    /// The scalar type, if this is a known scalar field.
    pub fn scalar_type(&self) -> Option<ScalarType> {
        match self.kind {
            FieldKind::Scalar => ScalarType::from_name(&self.type_name),
            _ => None,
        }
    }

    /// Whether the database fills this field in on insert.
    pub fn is_generated(&self) -> bool {
        (self.is_id && self.has_default_value) || self.is_updated_at
    }
}
