//! Check command report data structures.

use std::path::PathBuf;

use nestdto_config::GenerationOptions;

use super::output::{Output, Report};

/// Report data from option validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Option keys that are not recognized.
    pub unknown_keys: Vec<String>,
    /// Number of models in the schema.
    pub models: usize,
    /// Number of enums in the schema.
    pub enums: usize,
    /// The normalized options.
    pub options: GenerationOptions,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for key in &self.unknown_keys {
            out.warning(&format!("unknown generator option '{}' is ignored", key));
        }
        if !self.unknown_keys.is_empty() {
            out.newline();
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.key_value("Schema", &format!("{} models, {} enums", self.models, self.enums));
        out.newline();

        let o = &self.options;
        let prettier_config = o
            .prettier_config
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(search from working directory)".to_string());

        out.section("Options");
        out.key_value_indented("output", &o.output.display().to_string());
        out.key_value_indented("fileNamingStyle", o.file_naming_style.as_str());
        out.key_value_indented("connectDtoPrefix", &o.connect_dto_prefix);
        out.key_value_indented("createDtoPrefix", &o.create_dto_prefix);
        out.key_value_indented("updateDtoPrefix", &o.update_dto_prefix);
        out.key_value_indented("dtoSuffix", &o.dto_suffix);
        out.key_value_indented("entityPrefix", &o.entity_prefix);
        out.key_value_indented("entitySuffix", &o.entity_suffix);
        out.key_value_indented(
            "exportRelationModifierClasses",
            &o.export_relation_modifier_classes.to_string(),
        );
        out.key_value_indented(
            "outputToNestJsResourceStructure",
            &o.output_to_nestjs_resource_structure.to_string(),
        );
        out.key_value_indented("entitiesOnly", &o.entities_only.to_string());
        out.key_value_indented("usePrettier", &o.use_prettier.to_string());
        out.key_value_indented("prettierConfig", &prettier_config);
        out.key_value_indented("reExport", &o.re_export.to_string());
    }
}
