//! Schema field types to TypeScript types.

use nestdto_ir::{Field, FieldKind, ScalarType};

/// Module the Prisma client types are imported from.
pub const PRISMA_CLIENT: &str = "@prisma/client";

/// Maps schema scalars to TypeScript type expressions.
pub struct TypeScriptTypeMapper;

impl TypeScriptTypeMapper {
    pub fn map_scalar(&self, scalar: ScalarType) -> &'static str {
        match scalar {
            ScalarType::String => "string",
            ScalarType::Boolean => "boolean",
            ScalarType::Int | ScalarType::Float => "number",
            ScalarType::BigInt => "bigint",
            ScalarType::DateTime => "Date",
            ScalarType::Json => "Prisma.JsonValue",
            ScalarType::Decimal => "Prisma.Decimal",
            ScalarType::Bytes => "Buffer",
        }
    }

    /// Whether the scalar's TypeScript type lives in the `Prisma` namespace.
    pub fn needs_prisma_namespace(&self, scalar: ScalarType) -> bool {
        matches!(scalar, ScalarType::Json | ScalarType::Decimal)
    }

    /// Type of a scalar or enum field, `[]` appended for lists.
    ///
    /// Relation fields are typed by the caller, which knows the target class.
    pub fn map_field(&self, field: &Field) -> String {
        let base = match field.kind {
            FieldKind::Enum => field.type_name.clone(),
            _ => field
                .scalar_type()
                .map(|s| self.map_scalar(s).to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        };
        list_of(base, field.is_list)
    }
}

/// Append `[]` when `is_list`.
pub fn list_of(ty: String, is_list: bool) -> String {
    if is_list { format!("{}[]", ty) } else { ty }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(kind: FieldKind, ty: &str, is_list: bool) -> Field {
        let json = format!(
            r#"{{"name":"f","kind":"{}","type":"{}","isList":{}}}"#,
            match kind {
                FieldKind::Scalar => "scalar",
                FieldKind::Enum => "enum",
                FieldKind::Object => "object",
                FieldKind::Unsupported => "unsupported",
            },
            ty,
            is_list
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_scalar_types() {
        let mapper = TypeScriptTypeMapper;
        assert_eq!(mapper.map_scalar(ScalarType::String), "string");
        assert_eq!(mapper.map_scalar(ScalarType::Boolean), "boolean");
        assert_eq!(mapper.map_scalar(ScalarType::Int), "number");
        assert_eq!(mapper.map_scalar(ScalarType::Float), "number");
        assert_eq!(mapper.map_scalar(ScalarType::BigInt), "bigint");
        assert_eq!(mapper.map_scalar(ScalarType::DateTime), "Date");
        assert_eq!(mapper.map_scalar(ScalarType::Json), "Prisma.JsonValue");
        assert_eq!(mapper.map_scalar(ScalarType::Decimal), "Prisma.Decimal");
        assert_eq!(mapper.map_scalar(ScalarType::Bytes), "Buffer");
    }

    #[test]
    fn test_prisma_namespace() {
        let mapper = TypeScriptTypeMapper;
        assert!(mapper.needs_prisma_namespace(ScalarType::Json));
        assert!(mapper.needs_prisma_namespace(ScalarType::Decimal));
        assert!(!mapper.needs_prisma_namespace(ScalarType::DateTime));
    }

    #[test]
    fn test_field_types() {
        let mapper = TypeScriptTypeMapper;
        assert_eq!(mapper.map_field(&field(FieldKind::Scalar, "String", true)), "string[]");
        assert_eq!(mapper.map_field(&field(FieldKind::Enum, "Role", false)), "Role");
        assert_eq!(
            mapper.map_field(&field(FieldKind::Unsupported, "polygon", false)),
            "unknown"
        );
    }
}
