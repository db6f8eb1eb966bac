//! Typed generation options.

use std::path::PathBuf;

use crate::{Error, NamingStyle, RawOptions, Result};

/// Recognized option keys.
pub mod keys {
    pub const CONNECT_DTO_PREFIX: &str = "connectDtoPrefix";
    pub const CREATE_DTO_PREFIX: &str = "createDtoPrefix";
    pub const UPDATE_DTO_PREFIX: &str = "updateDtoPrefix";
    pub const DTO_SUFFIX: &str = "dtoSuffix";
    pub const ENTITY_PREFIX: &str = "entityPrefix";
    pub const ENTITY_SUFFIX: &str = "entitySuffix";
    pub const FILE_NAMING_STYLE: &str = "fileNamingStyle";
    pub const PRETTIER_CONFIG: &str = "prettierConfig";
    pub const EXPORT_RELATION_MODIFIER_CLASSES: &str = "exportRelationModifierClasses";
    pub const OUTPUT_TO_NESTJS_RESOURCE_STRUCTURE: &str = "outputToNestJsResourceStructure";
    pub const ENTITIES_ONLY: &str = "entitiesOnly";
    pub const USE_PRETTIER: &str = "usePrettier";
    pub const RE_EXPORT: &str = "reExport";

    /// Every generation option.
    pub const ALL: &[&str] = &[
        CONNECT_DTO_PREFIX,
        CREATE_DTO_PREFIX,
        UPDATE_DTO_PREFIX,
        DTO_SUFFIX,
        ENTITY_PREFIX,
        ENTITY_SUFFIX,
        FILE_NAMING_STYLE,
        PRETTIER_CONFIG,
        EXPORT_RELATION_MODIFIER_CLASSES,
        OUTPUT_TO_NESTJS_RESOURCE_STRUCTURE,
        ENTITIES_ONLY,
        USE_PRETTIER,
        RE_EXPORT,
    ];

    /// Keys the config file uses for things other than generation options.
    pub const RESERVED: &[&str] = &["output", "schema"];
}

/// Coerce textual booleans.
///
/// Only the exact strings `"true"` and `"false"` are recognized; anything else
/// (including a missing value) yields `default`.
pub fn parse_bool(input: Option<&str>, default: bool) -> bool {
    match input {
        Some("true") => true,
        Some("false") => false,
        _ => default,
    }
}

/// Resolve the configured output location.
///
/// `env("VAR")` reads the location from an environment variable, anything
/// else is taken as a literal path.
pub fn resolve_output(output: &str) -> Result<PathBuf> {
    let output = output.trim();
    if output.is_empty() {
        return Err(Box::new(Error::MissingOutput));
    }

    let env_var = output
        .strip_prefix("env(")
        .and_then(|rest| rest.strip_suffix(')'))
        .map(|inner| inner.trim().trim_matches('"'));

    match env_var {
        Some(var) => std::env::var(var)
            .map(PathBuf::from)
            .map_err(|_| Box::new(Error::MissingEnv { var: var.to_string() })),
        None => Ok(PathBuf::from(output)),
    }
}

/// Normalized, validated generation options.
///
/// Built once per run by [`GenerationOptions::normalize`] and read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Root directory for generated files.
    pub output: PathBuf,
    pub connect_dto_prefix: String,
    pub create_dto_prefix: String,
    pub update_dto_prefix: String,
    pub dto_suffix: String,
    pub entity_prefix: String,
    pub entity_suffix: String,
    pub file_naming_style: NamingStyle,
    /// Where to look for formatter configuration; `None` searches from the working directory.
    ///
    /// A prettier config file is used directly. Any other file or directory
    /// is the starting point of prettier's upward search.
    pub prettier_config: Option<PathBuf>,
    pub export_relation_modifier_classes: bool,
    pub output_to_nestjs_resource_structure: bool,
    pub entities_only: bool,
    pub use_prettier: bool,
    pub re_export: bool,
}

impl GenerationOptions {
    /// Apply defaults, coerce booleans and validate enumerated choices.
    ///
    /// # Errors
    ///
    /// Fails when `fileNamingStyle` is not one of the supported styles or the
    /// output location cannot be resolved. No other value can fail.
    pub fn normalize(raw: &RawOptions, output: &str) -> Result<Self> {
        let file_naming_style = match raw.get(keys::FILE_NAMING_STYLE) {
            Some(style) => style.parse()?,
            None => NamingStyle::default(),
        };

        let text = |key: &str, default: &str| raw.get(key).unwrap_or(default).to_string();
        let flag = |key: &str, default: bool| parse_bool(raw.get(key), default);

        let prettier_config = raw
            .get(keys::PRETTIER_CONFIG)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            output: resolve_output(output)?,
            connect_dto_prefix: text(keys::CONNECT_DTO_PREFIX, "Connect"),
            create_dto_prefix: text(keys::CREATE_DTO_PREFIX, "Create"),
            update_dto_prefix: text(keys::UPDATE_DTO_PREFIX, "Update"),
            dto_suffix: text(keys::DTO_SUFFIX, "Dto"),
            entity_prefix: text(keys::ENTITY_PREFIX, ""),
            entity_suffix: text(keys::ENTITY_SUFFIX, ""),
            file_naming_style,
            prettier_config,
            export_relation_modifier_classes: flag(keys::EXPORT_RELATION_MODIFIER_CLASSES, true),
            // opt-in: flipping this default changes existing output
            output_to_nestjs_resource_structure: flag(
                keys::OUTPUT_TO_NESTJS_RESOURCE_STRUCTURE,
                false,
            ),
            entities_only: flag(keys::ENTITIES_ONLY, false),
            use_prettier: flag(keys::USE_PRETTIER, true),
            // opt-in for the same reason
            re_export: flag(keys::RE_EXPORT, false),
        })
    }
}
