//! Models and enumerations.

use serde::{Deserialize, Serialize};

use crate::Field;

/// Root of the normalized data model.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Schema {
    #[serde(default)]
    pub models: Vec<Model>,
    #[serde(default)]
    pub enums: Vec<Enum>,
}

impl Schema {
    /// Find a model by name.
    pub fn model(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|m| m.name == name)
    }

    /// Check if an enum with the given name exists.
    pub fn has_enum(&self, name: &str) -> bool {
        self.enums.iter().any(|e| e.name == name)
    }
}

/// An entity with named, typed fields.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_name: Option<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl Model {
    /// Find a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields that relate to other models.
    pub fn relation_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.is_relation())
    }

    /// Fields usable to identify a single record (ids and unique fields).
    pub fn identifying_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.is_id || f.is_unique)
    }

    /// Check if a scalar field backs one of this model's relations.
    pub fn is_foreign_key(&self, name: &str) -> bool {
        self.relation_fields()
            .any(|r| r.relation_from_fields.iter().any(|f| f == name))
    }
}

/// A schema enumeration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Enum {
    pub name: String,
    #[serde(default)]
    pub values: Vec<EnumValue>,
}

/// A single enumeration value.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOG: &str = r#"{
        "models": [
            {
                "name": "User",
                "fields": [
                    {"name": "id", "kind": "scalar", "type": "Int", "isId": true, "isRequired": true, "hasDefaultValue": true},
                    {"name": "email", "kind": "scalar", "type": "String", "isRequired": true, "isUnique": true},
                    {"name": "posts", "kind": "object", "type": "Post", "isList": true, "relationName": "PostToUser"}
                ]
            },
            {
                "name": "Post",
                "fields": [
                    {"name": "id", "kind": "scalar", "type": "Int", "isId": true, "isRequired": true},
                    {"name": "authorId", "kind": "scalar", "type": "Int", "isRequired": true},
                    {"name": "author", "kind": "object", "type": "User", "isRequired": true, "relationName": "PostToUser", "relationFromFields": ["authorId"]}
                ]
            }
        ],
        "enums": [
            {"name": "Role", "values": [{"name": "ADMIN"}, {"name": "USER"}]}
        ]
    }"#;

    fn blog() -> Schema {
        serde_json::from_str(BLOG).unwrap()
    }

    #[test]
    fn test_deserialize_schema() {
        let schema = blog();
        assert_eq!(schema.models.len(), 2);
        assert!(schema.has_enum("Role"));
        assert!(!schema.has_enum("Status"));
    }

    #[test]
    fn test_model_lookup() {
        let schema = blog();
        let user = schema.model("User").unwrap();
        assert_eq!(user.relation_fields().count(), 1);
        assert_eq!(
            user.identifying_fields().map(|f| f.name.as_str()).collect::<Vec<_>>(),
            vec!["id", "email"]
        );
        assert!(schema.model("Comment").is_none());
    }

    #[test]
    fn test_foreign_keys() {
        let schema = blog();
        let post = schema.model("Post").unwrap();
        assert!(post.is_foreign_key("authorId"));
        assert!(!post.is_foreign_key("id"));
    }

    #[test]
    fn test_empty_document() {
        let schema: Schema = serde_json::from_str("{}").unwrap();
        assert!(schema.models.is_empty());
        assert!(schema.enums.is_empty());
    }
}
