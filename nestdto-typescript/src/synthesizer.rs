//! NestJS DTO synthesizer.

use std::collections::HashSet;

use eyre::{Result, bail};
use nestdto_codegen::{DtoSynthesizer, SynthesisRequest};
use nestdto_core::{FileSpec, GeneratedFile};
use nestdto_ir::Schema;
use tracing::debug;

use crate::files::{
    ConnectDtoFile, CreateDtoFile, EXTENSION, EntityFile, ModelScope, UpdateDtoFile,
};

/// Generates NestJS-style DTO and entity classes for every model.
///
/// Per model, in order: connect, create and update DTOs (skipped when
/// `entitiesOnly` is set) followed by the entity.
#[derive(Debug, Default, Clone, Copy)]
pub struct NestDtoSynthesizer;

impl NestDtoSynthesizer {
    pub fn new() -> Self {
        Self
    }
}

impl DtoSynthesizer for NestDtoSynthesizer {
    fn name(&self) -> &'static str {
        "nestjs"
    }

    fn file_extension(&self) -> &'static str {
        EXTENSION
    }

    fn synthesize(&self, request: SynthesisRequest<'_>) -> Result<Vec<FileSpec>> {
        let SynthesisRequest { options, schema } = request;
        check_schema(schema)?;

        let base = options.output.as_path();
        let mut files = Vec::new();

        for model in &schema.models {
            let scope = ModelScope::new(options, schema, model);
            let before = files.len();

            if !options.entities_only {
                files.push(ConnectDtoFile::new(scope).to_spec(base));
                files.push(CreateDtoFile::new(scope).to_spec(base));
                files.push(UpdateDtoFile::new(scope).to_spec(base));
            }
            files.push(EntityFile::new(scope).to_spec(base));

            debug!(model = %model.name, files = files.len() - before, "rendered model");
        }

        Ok(files)
    }
}

/// Reject schemas whose files would collide or whose relations dangle.
fn check_schema(schema: &Schema) -> Result<()> {
    let mut seen = HashSet::new();
    for model in &schema.models {
        if !seen.insert(model.name.as_str()) {
            bail!("model '{}' is defined more than once", model.name);
        }
    }

    for model in &schema.models {
        for field in model.relation_fields() {
            if schema.model(&field.type_name).is_none() {
                bail!(
                    "field '{}.{}' references unknown model '{}'",
                    model.name,
                    field.name,
                    field.type_name
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use nestdto_config::{GenerationOptions, RawOptions};

    use super::*;

    const BLOG: &str = r#"{
        "models": [
            {
                "name": "User",
                "fields": [
                    {"name": "id", "kind": "scalar", "type": "Int", "isId": true, "isRequired": true, "hasDefaultValue": true},
                    {"name": "email", "kind": "scalar", "type": "String", "isRequired": true, "isUnique": true},
                    {"name": "name", "kind": "scalar", "type": "String"},
                    {"name": "role", "kind": "enum", "type": "Role", "isRequired": true, "hasDefaultValue": true},
                    {"name": "posts", "kind": "object", "type": "Post", "isList": true, "isRequired": true, "relationName": "PostToUser"}
                ]
            },
            {
                "name": "Post",
                "fields": [
                    {"name": "id", "kind": "scalar", "type": "Int", "isId": true, "isRequired": true, "hasDefaultValue": true},
                    {"name": "title", "kind": "scalar", "type": "String", "isRequired": true},
                    {"name": "authorId", "kind": "scalar", "type": "Int", "isRequired": true},
                    {"name": "author", "kind": "object", "type": "User", "isRequired": true, "relationName": "PostToUser", "relationFromFields": ["authorId"]}
                ]
            }
        ],
        "enums": [{"name": "Role", "values": [{"name": "ADMIN"}, {"name": "USER"}]}]
    }"#;

    fn schema(json: &str) -> Schema {
        serde_json::from_str(json).unwrap()
    }

    fn options(pairs: &[(&str, &str)]) -> GenerationOptions {
        let raw: RawOptions = pairs.iter().copied().collect();
        GenerationOptions::normalize(&raw, "out").unwrap()
    }

    fn synthesize(pairs: &[(&str, &str)]) -> Vec<FileSpec> {
        let options = options(pairs);
        let schema = schema(BLOG);
        NestDtoSynthesizer::new()
            .synthesize(SynthesisRequest {
                options: &options,
                schema: &schema,
            })
            .unwrap()
    }

    fn paths(files: &[FileSpec]) -> Vec<PathBuf> {
        files.iter().map(|f| f.path().to_path_buf()).collect()
    }

    fn content<'a>(files: &'a [FileSpec], path: &str) -> &'a str {
        files
            .iter()
            .find(|f| f.path() == Path::new(path))
            .map(|f| f.content())
            .unwrap_or_else(|| panic!("{path} was not generated"))
    }

    #[test]
    fn test_flat_layout_order() {
        let files = synthesize(&[]);
        assert_eq!(
            paths(&files),
            [
                "out/connectUser.dto.ts",
                "out/createUser.dto.ts",
                "out/updateUser.dto.ts",
                "out/user.entity.ts",
                "out/connectPost.dto.ts",
                "out/createPost.dto.ts",
                "out/updatePost.dto.ts",
                "out/post.entity.ts",
            ]
            .map(PathBuf::from)
        );
    }

    #[test]
    fn test_entities_only() {
        let files = synthesize(&[("entitiesOnly", "true")]);
        assert_eq!(
            paths(&files),
            ["out/user.entity.ts", "out/post.entity.ts"].map(PathBuf::from)
        );
    }

    #[test]
    fn test_resource_layout_paths_and_imports() {
        let files = synthesize(&[
            ("outputToNestJsResourceStructure", "true"),
            ("fileNamingStyle", "kebab"),
        ]);

        assert!(paths(&files).contains(&PathBuf::from("out/post/dto/create-post.dto.ts")));
        assert!(paths(&files).contains(&PathBuf::from("out/post/entities/post.entity.ts")));
        assert!(
            content(&files, "out/post/dto/create-post.dto.ts")
                .contains("import { ConnectUserDto } from '../../user/dto/connect-user.dto';")
        );
        assert!(
            content(&files, "out/user/entities/user.entity.ts")
                .contains("import { Post } from '../../post/entities/post.entity';")
        );
    }

    #[test]
    fn test_create_dto_excludes_generated_and_foreign_keys() {
        let files = synthesize(&[]);
        let create = content(&files, "out/createPost.dto.ts");

        assert!(create.contains("  title: string;\n"));
        assert!(create.contains("  author: CreatePostAuthorRelationInputDto;\n"));
        assert!(!create.contains("authorId"));
        assert!(!create.contains("  id"));
    }

    #[test]
    fn test_update_dto_is_all_optional() {
        let files = synthesize(&[]);
        let update = content(&files, "out/updateUser.dto.ts");

        assert!(update.contains("  email?: string;\n"));
        assert!(update.contains("  name?: string | null;\n"));
        assert!(update.contains("  posts?: UpdateUserPostsRelationInputDto;\n"));
    }

    #[test]
    fn test_unexported_relation_modifiers() {
        let files = synthesize(&[("exportRelationModifierClasses", "false")]);
        let create = content(&files, "out/createUser.dto.ts");

        assert!(create.contains("\nclass CreateUserPostsRelationInputDto {"));
        assert!(create.contains("export class CreateUserDto {"));
    }

    #[test]
    fn test_custom_affixes() {
        let files = synthesize(&[
            ("connectDtoPrefix", "Find"),
            ("dtoSuffix", "Input"),
            ("entitySuffix", "Entity"),
        ]);

        assert!(content(&files, "out/connectUser.dto.ts").contains("export class FindUserInput {"));
        assert!(content(&files, "out/createPost.dto.ts").contains("connect: FindUserInput;"));
        assert!(content(&files, "out/post.entity.ts").contains("export class PostEntity {"));
        assert!(content(&files, "out/post.entity.ts").contains("author?: UserEntity;"));
    }

    #[test]
    fn test_unknown_relation_target() {
        let options = options(&[]);
        let schema = schema(
            r#"{"models": [{"name": "Post", "fields": [
                {"name": "author", "kind": "object", "type": "Ghost", "isRequired": true}
            ]}]}"#,
        );

        let err = NestDtoSynthesizer::new()
            .synthesize(SynthesisRequest {
                options: &options,
                schema: &schema,
            })
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "field 'Post.author' references unknown model 'Ghost'"
        );
    }

    #[test]
    fn test_duplicate_model() {
        let options = options(&[]);
        let schema = schema(r#"{"models": [{"name": "User"}, {"name": "User"}]}"#);

        let err = NestDtoSynthesizer::new()
            .synthesize(SynthesisRequest {
                options: &options,
                schema: &schema,
            })
            .unwrap_err();
        assert!(err.to_string().contains("defined more than once"));
    }

    #[test]
    fn test_empty_schema() {
        let options = options(&[]);
        let files = NestDtoSynthesizer::new()
            .synthesize(SynthesisRequest {
                options: &options,
                schema: &Schema::default(),
            })
            .unwrap();
        assert!(files.is_empty());
    }
}
