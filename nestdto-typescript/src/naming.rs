//! Class and file naming for generated DTOs.

use nestdto_config::GenerationOptions;
use nestdto_core::to_pascal_case;

/// The three input DTOs generated per model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DtoKind {
    Connect,
    Create,
    Update,
}

impl DtoKind {
    pub const ALL: [DtoKind; 3] = [DtoKind::Connect, DtoKind::Create, DtoKind::Update];

    /// Leading word of the DTO's file name.
    pub fn verb(self) -> &'static str {
        match self {
            DtoKind::Connect => "connect",
            DtoKind::Create => "create",
            DtoKind::Update => "update",
        }
    }

    fn prefix(self, options: &GenerationOptions) -> &str {
        match self {
            DtoKind::Connect => &options.connect_dto_prefix,
            DtoKind::Create => &options.create_dto_prefix,
            DtoKind::Update => &options.update_dto_prefix,
        }
    }
}

/// Derives class names and file base names from the generation options.
#[derive(Debug, Clone, Copy)]
pub struct Naming<'a> {
    options: &'a GenerationOptions,
}

impl<'a> Naming<'a> {
    pub fn new(options: &'a GenerationOptions) -> Self {
        Self { options }
    }

    /// `<prefix><Model><dtoSuffix>`
    pub fn dto_class(&self, kind: DtoKind, model: &str) -> String {
        format!("{}{}{}", kind.prefix(self.options), model, self.options.dto_suffix)
    }

    /// `<entityPrefix><Model><entitySuffix>`
    pub fn entity_class(&self, model: &str) -> String {
        format!(
            "{}{}{}",
            self.options.entity_prefix, model, self.options.entity_suffix
        )
    }

    /// Helper class wrapping `connect` for a relation field of a create or
    /// update DTO, e.g. `CreateUserPostsRelationInputDto`.
    pub fn relation_input_class(&self, kind: DtoKind, model: &str, field: &str) -> String {
        format!(
            "{}{}{}RelationInputDto",
            to_pascal_case(kind.verb()),
            model,
            to_pascal_case(field)
        )
    }

    /// Module name of a DTO file, without extension (`create-user-profile.dto`).
    pub fn dto_module(&self, kind: DtoKind, model: &str) -> String {
        let base = self
            .options
            .file_naming_style
            .apply(&format!("{} {}", kind.verb(), model));
        format!("{}.dto", base)
    }

    /// Module name of an entity file, without extension (`user-profile.entity`).
    pub fn entity_module(&self, model: &str) -> String {
        format!("{}.entity", self.model_dir(model))
    }

    /// Directory name for a model in the resource layout.
    pub fn model_dir(&self, model: &str) -> String {
        self.options.file_naming_style.apply(model)
    }
}
