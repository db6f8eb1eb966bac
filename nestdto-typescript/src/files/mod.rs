//! TypeScript file generators, one per generated module kind.

mod connect_dto;
mod create_dto;
mod entity;
mod update_dto;

use std::path::{Path, PathBuf};

use nestdto_config::GenerationOptions;
use nestdto_ir::{Field, Model, Schema};

pub use connect_dto::ConnectDtoFile;
pub use create_dto::CreateDtoFile;
pub use entity::EntityFile;
pub use update_dto::UpdateDtoFile;

use crate::{
    ast::{Class, Import, ImportCollector, Property},
    layout::{Layout, import_specifier},
    naming::{DtoKind, Naming},
    type_mapper::{PRISMA_CLIENT, TypeScriptTypeMapper, list_of},
};

/// Extension of every generated module.
pub const EXTENSION: &str = "ts";

/// The model a file is generated for, with the run's options and schema.
#[derive(Debug, Clone, Copy)]
pub struct ModelScope<'a> {
    pub options: &'a GenerationOptions,
    pub schema: &'a Schema,
    pub model: &'a Model,
}

impl<'a> ModelScope<'a> {
    pub fn new(options: &'a GenerationOptions, schema: &'a Schema, model: &'a Model) -> Self {
        Self {
            options,
            schema,
            model,
        }
    }

    pub fn naming(&self) -> Naming<'a> {
        Naming::new(self.options)
    }

    pub fn layout(&self) -> Layout<'a> {
        Layout::new(self.options)
    }

    fn dto_path(&self, base: &Path, kind: DtoKind) -> PathBuf {
        let name = &self.model.name;
        base.join(self.layout().dto_dir(name)).join(format!(
            "{}.{}",
            self.naming().dto_module(kind, name),
            EXTENSION
        ))
    }
}

/// Imports needed by one file, resolved relative to the file's directory.
struct FileImports<'a> {
    scope: ModelScope<'a>,
    dir: PathBuf,
    collector: ImportCollector,
}

impl<'a> FileImports<'a> {
    fn new(scope: ModelScope<'a>, dir: PathBuf) -> Self {
        Self {
            scope,
            dir,
            collector: ImportCollector::new(),
        }
    }

    /// TypeScript type of a scalar or enum field.
    fn field_type(&mut self, field: &Field) -> String {
        let mapper = TypeScriptTypeMapper;
        if field.is_enum() {
            self.collector.add(PRISMA_CLIENT, &field.type_name);
        }
        if field
            .scalar_type()
            .is_some_and(|s| mapper.needs_prisma_namespace(s))
        {
            self.collector.add(PRISMA_CLIENT, "Prisma");
        }
        mapper.map_field(field)
    }

    /// Entity class of a related model.
    fn entity(&mut self, model: &str) -> String {
        let naming = self.scope.naming();
        let class = naming.entity_class(model);
        if model != self.scope.model.name {
            let specifier = import_specifier(
                &self.dir,
                &self.scope.layout().entity_dir(model),
                &naming.entity_module(model),
            );
            self.collector.add(&specifier, &class);
        }
        class
    }

    /// Connect DTO class of a related model.
    fn connect_dto(&mut self, model: &str) -> String {
        let naming = self.scope.naming();
        let class = naming.dto_class(DtoKind::Connect, model);
        let specifier = import_specifier(
            &self.dir,
            &self.scope.layout().dto_dir(model),
            &naming.dto_module(DtoKind::Connect, model),
        );
        self.collector.add(&specifier, &class);
        class
    }

    fn into_imports(self) -> Vec<Import> {
        self.collector.into_imports()
    }
}

/// Scalar and enum fields a client may set when creating or updating a
/// record. Generated ids, `@updatedAt` columns, read-only fields and foreign
/// keys backing a relation are excluded.
fn writable_fields(model: &Model) -> impl Iterator<Item = &Field> {
    model.fields.iter().filter(move |f| {
        (f.scalar_type().is_some() || f.is_enum())
            && !f.is_generated()
            && !f.is_read_only
            && !model.is_foreign_key(&f.name)
    })
}

/// Helper class wrapping `connect` for one relation field, and the DTO
/// property referencing it. The caller decides whether the property is
/// optional.
fn relation_input(imports: &mut FileImports<'_>, kind: DtoKind, field: &Field) -> (Class, Property) {
    let scope = imports.scope;
    let class_name = scope
        .naming()
        .relation_input_class(kind, &scope.model.name, &field.name);
    let connect = list_of(imports.connect_dto(&field.type_name), field.is_list);

    let class = Class::new(&class_name)
        .exported(scope.options.export_relation_modifier_classes)
        .property(Property::new("connect", connect));
    let property = Property::new(&field.name, class_name).doc(field.documentation.as_deref());

    (class, property)
}
