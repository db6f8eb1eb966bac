use std::path::{Path, PathBuf};

use nestdto_core::GeneratedFile;
use nestdto_ir::Field;

use super::{FileImports, ModelScope, relation_input, writable_fields};
use crate::{
    ast::{Class, Property},
    code_file::CodeFile,
    naming::DtoKind,
};

/// DTO for creating a record.
///
/// Columns with a default or that accept null may be omitted. A relation is
/// mandatory only when this model holds its required foreign key.
pub struct CreateDtoFile<'a> {
    scope: ModelScope<'a>,
}

impl<'a> CreateDtoFile<'a> {
    pub fn new(scope: ModelScope<'a>) -> Self {
        Self { scope }
    }

    pub fn class_name(&self) -> String {
        self.scope
            .naming()
            .dto_class(DtoKind::Create, &self.scope.model.name)
    }
}

fn scalar_property(field: &Field, imports: &mut FileImports<'_>) -> Property {
    let property =
        Property::new(&field.name, imports.field_type(field)).doc(field.documentation.as_deref());
    let property = if !field.is_required || field.has_default_value {
        property.optional()
    } else {
        property
    };
    if field.is_required || field.is_list {
        property
    } else {
        property.nullable()
    }
}

fn owns_required_relation(field: &Field) -> bool {
    field.is_required && !field.is_list && !field.relation_from_fields.is_empty()
}

impl GeneratedFile for CreateDtoFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        self.scope.dto_path(base, DtoKind::Create)
    }

    fn render(&self) -> String {
        let model = self.scope.model;
        let mut imports = FileImports::new(self.scope, self.scope.layout().dto_dir(&model.name));

        let mut properties: Vec<_> = writable_fields(model)
            .map(|f| scalar_property(f, &mut imports))
            .collect();

        let mut helpers = Vec::new();
        for field in model.relation_fields() {
            let (helper, property) = relation_input(&mut imports, DtoKind::Create, field);
            helpers.push(helper);
            properties.push(if owns_required_relation(field) {
                property
            } else {
                property.optional()
            });
        }

        CodeFile::new()
            .imports(imports.into_imports())
            .add_all(helpers)
            .add(Class::new(self.class_name()).properties(properties))
            .render()
    }
}
