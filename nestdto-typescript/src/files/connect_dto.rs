use std::path::{Path, PathBuf};

use nestdto_core::GeneratedFile;

use super::{FileImports, ModelScope};
use crate::{
    ast::{Class, Property},
    code_file::CodeFile,
    naming::DtoKind,
};

/// DTO identifying a single existing record, by id or any unique field.
///
/// Every property is optional: callers pass whichever identifier they have.
pub struct ConnectDtoFile<'a> {
    scope: ModelScope<'a>,
}

impl<'a> ConnectDtoFile<'a> {
    pub fn new(scope: ModelScope<'a>) -> Self {
        Self { scope }
    }

    pub fn class_name(&self) -> String {
        self.scope
            .naming()
            .dto_class(DtoKind::Connect, &self.scope.model.name)
    }
}

impl GeneratedFile for ConnectDtoFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        self.scope.dto_path(base, DtoKind::Connect)
    }

    fn render(&self) -> String {
        let model = self.scope.model;
        let mut imports = FileImports::new(self.scope, self.scope.layout().dto_dir(&model.name));

        let properties: Vec<_> = model
            .identifying_fields()
            .filter(|f| f.scalar_type().is_some() || f.is_enum())
            .map(|f| {
                Property::new(&f.name, imports.field_type(f))
                    .optional()
                    .doc(f.documentation.as_deref())
            })
            .collect();

        CodeFile::new()
            .imports(imports.into_imports())
            .add(Class::new(self.class_name()).properties(properties))
            .render()
    }
}
