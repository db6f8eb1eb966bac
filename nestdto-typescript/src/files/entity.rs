use std::path::{Path, PathBuf};

use nestdto_core::GeneratedFile;
use nestdto_ir::Field;

use super::{EXTENSION, FileImports, ModelScope};
use crate::{
    ast::{Class, Property},
    code_file::CodeFile,
    type_mapper::list_of,
};

/// Class mirroring a full database record.
///
/// Scalars are present on every record, so only nullable columns are
/// optional. Relations are optional because they are only loaded on request.
pub struct EntityFile<'a> {
    scope: ModelScope<'a>,
}

impl<'a> EntityFile<'a> {
    pub fn new(scope: ModelScope<'a>) -> Self {
        Self { scope }
    }

    pub fn class_name(&self) -> String {
        self.scope.naming().entity_class(&self.scope.model.name)
    }

    fn property(&self, field: &Field, imports: &mut FileImports<'_>) -> Property {
        let property = if field.is_relation() {
            let ty = list_of(imports.entity(&field.type_name), field.is_list);
            Property::new(&field.name, ty).optional()
        } else {
            let property = Property::new(&field.name, imports.field_type(field));
            if field.is_required || field.is_list {
                property
            } else {
                property.optional().nullable()
            }
        };
        property.doc(field.documentation.as_deref())
    }
}

impl GeneratedFile for EntityFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        let name = &self.scope.model.name;
        base.join(self.scope.layout().entity_dir(name)).join(format!(
            "{}.{}",
            self.scope.naming().entity_module(name),
            EXTENSION
        ))
    }

    fn render(&self) -> String {
        let model = self.scope.model;
        let mut imports =
            FileImports::new(self.scope, self.scope.layout().entity_dir(&model.name));

        let properties: Vec<_> = model
            .fields
            .iter()
            .map(|f| self.property(f, &mut imports))
            .collect();

        CodeFile::new()
            .imports(imports.into_imports())
            .add(
                Class::new(self.class_name())
                    .doc(model.documentation.as_deref())
                    .properties(properties),
            )
            .render()
    }
}
