use std::path::{Path, PathBuf};

use nestdto_core::GeneratedFile;

use super::{FileImports, ModelScope, relation_input, writable_fields};
use crate::{
    ast::{Class, Property},
    code_file::CodeFile,
    naming::DtoKind,
};

/// DTO for a partial update: the create DTO's fields, all optional.
pub struct UpdateDtoFile<'a> {
    scope: ModelScope<'a>,
}

impl<'a> UpdateDtoFile<'a> {
    pub fn new(scope: ModelScope<'a>) -> Self {
        Self { scope }
    }

    pub fn class_name(&self) -> String {
        self.scope
            .naming()
            .dto_class(DtoKind::Update, &self.scope.model.name)
    }
}

impl GeneratedFile for UpdateDtoFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        self.scope.dto_path(base, DtoKind::Update)
    }

    fn render(&self) -> String {
        let model = self.scope.model;
        let mut imports = FileImports::new(self.scope, self.scope.layout().dto_dir(&model.name));

        let mut properties: Vec<Property> = writable_fields(model)
            .map(|f| {
                let property = Property::new(&f.name, imports.field_type(f))
                    .optional()
                    .doc(f.documentation.as_deref());
                if f.is_required || f.is_list {
                    property
                } else {
                    property.nullable()
                }
            })
            .collect();

        let mut helpers = Vec::new();
        for field in model.relation_fields() {
            let (helper, property) = relation_input(&mut imports, DtoKind::Update, field);
            helpers.push(helper);
            properties.push(property.optional());
        }

        CodeFile::new()
            .imports(imports.into_imports())
            .add_all(helpers)
            .add(Class::new(self.class_name()).properties(properties))
            .render()
    }
}
