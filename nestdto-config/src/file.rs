use std::path::{Path, PathBuf};

use nestdto_core::toml_value_to_string;
use nestdto_ir::Schema;
use serde::Deserialize;

use crate::{Error, GenerationOptions, RawOptions, Result};

/// Default config file name.
pub const CONFIG_FILE: &str = "nestdto.toml";

#[derive(Debug, Default, Deserialize)]
struct ConfigDocument {
    #[serde(default)]
    generator: toml::Table,
}

/// Represents a nestdto.toml file with both raw content and extracted options.
///
/// ```toml
/// [generator]
/// output = "../src/generated/nestjs-dto"
/// schema = "schema.json"
/// fileNamingStyle = "kebab"
/// reExport = true
/// ```
#[derive(Debug)]
pub struct ConfigFile {
    path: PathBuf,
    content: String,
    output: Option<String>,
    schema: Option<PathBuf>,
    options: RawOptions,
}

impl ConfigFile {
    /// Open and parse a config file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let filename = path.display().to_string();
        let mut file = Self::from_str_with_filename(&content, &filename)?;
        file.path = path;
        Ok(file)
    }

    /// Parse config content, using `filename` for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let doc: ConfigDocument =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;

        let output = doc.generator.get("output").map(toml_value_to_string);
        let schema = doc
            .generator
            .get("schema")
            .map(toml_value_to_string)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            path: PathBuf::from(filename),
            content: content.to_string(),
            output,
            schema,
            options: RawOptions::from_toml_table(&doc.generator),
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Configured output location, as written.
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Configured schema path, relative to the config file's directory.
    pub fn schema_path(&self) -> Option<PathBuf> {
        let schema = self.schema.as_ref()?;
        let base = self.path.parent().unwrap_or_else(|| Path::new(""));
        Some(base.join(schema))
    }

    /// Raw options from the [generator] table.
    pub fn raw_options(&self) -> &RawOptions {
        &self.options
    }

    /// Output location as written, `output_override` taking precedence.
    pub fn output_or<'a>(&'a self, output_override: Option<&'a str>) -> Result<&'a str> {
        output_override
            .or(self.output())
            .ok_or_else(|| Box::new(Error::MissingOutput))
    }

    /// Normalize the options, letting `output_override` replace the configured output.
    pub fn options(&self, output_override: Option<&str>) -> Result<GenerationOptions> {
        GenerationOptions::normalize(&self.options, self.output_or(output_override)?)
    }

    /// Load the schema, letting `schema_override` replace the configured path.
    pub fn load_schema(&self, schema_override: Option<&Path>) -> Result<Schema> {
        match schema_override {
            Some(path) => load_schema(path),
            None => load_schema(self.schema_path().ok_or_else(|| Box::new(Error::MissingSchema))?),
        }
    }
}

/// Load a normalized schema from a JSON file.
pub fn load_schema(path: impl AsRef<Path>) -> Result<Schema> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_schema(&content, &path.display().to_string())
}

/// Parse a normalized schema from JSON text.
pub fn parse_schema(content: &str, filename: &str) -> Result<Schema> {
    serde_json::from_str(content).map_err(|e| Error::schema_parse(e, content, filename))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::NamingStyle;

    #[test]
    fn test_parse_generator_table() {
        let file = ConfigFile::from_str_with_filename(
            r#"
            [generator]
            output = "../src/generated"
            schema = "schema.json"
            fileNamingStyle = "kebab"
            reExport = true
            "#,
            "nestdto.toml",
        )
        .unwrap();

        assert_eq!(file.output(), Some("../src/generated"));
        assert_eq!(file.schema_path(), Some(PathBuf::from("schema.json")));
        assert_eq!(file.raw_options().get("reExport"), Some("true"));

        let opts = file.options(None).unwrap();
        assert_eq!(opts.file_naming_style, NamingStyle::Kebab);
        assert!(opts.re_export);
    }

    #[test]
    fn test_output_override() {
        let file = ConfigFile::from_str_with_filename(
            "[generator]\noutput = \"a\"\n",
            "nestdto.toml",
        )
        .unwrap();

        let opts = file.options(Some("b")).unwrap();
        assert_eq!(opts.output, PathBuf::from("b"));
    }

    #[test]
    fn test_missing_output() {
        let file = ConfigFile::from_str_with_filename("[generator]\n", "nestdto.toml").unwrap();
        let err = file.options(None).unwrap_err();
        assert!(matches!(*err, Error::MissingOutput));
    }

    #[test]
    fn test_empty_document() {
        let file = ConfigFile::from_str_with_filename("", "nestdto.toml").unwrap();
        assert!(file.raw_options().is_empty());
        assert!(file.schema_path().is_none());
    }

    #[test]
    fn test_parse_error() {
        let err = ConfigFile::from_str_with_filename("[generator\n", "nestdto.toml").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_open_resolves_schema_relative_to_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "[generator]\noutput = \"out\"\nschema = \"prisma/schema.json\"\n",
        )
        .unwrap();

        let file = ConfigFile::open(&path).unwrap();
        assert_eq!(file.path(), path.as_path());
        assert_eq!(
            file.schema_path(),
            Some(temp.path().join("prisma/schema.json"))
        );
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = ConfigFile::open(temp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_missing_schema() {
        let file = ConfigFile::from_str_with_filename("[generator]\n", "nestdto.toml").unwrap();
        let err = file.load_schema(None).unwrap_err();
        assert!(matches!(*err, Error::MissingSchema));
    }

    #[test]
    fn test_schema_override() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("other.json");
        fs::write(&path, r#"{"models":[{"name":"Tag"}]}"#).unwrap();

        let file = ConfigFile::from_str_with_filename(
            "[generator]\nschema = \"missing.json\"\n",
            "nestdto.toml",
        )
        .unwrap();
        let schema = file.load_schema(Some(path.as_path())).unwrap();
        assert_eq!(schema.models[0].name, "Tag");
    }

    #[test]
    fn test_load_schema() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("schema.json");
        fs::write(
            &path,
            r#"{"models":[{"name":"UserProfile","fields":[]}],"enums":[]}"#,
        )
        .unwrap();

        let schema = load_schema(&path).unwrap();
        assert_eq!(schema.models[0].name, "UserProfile");
    }

    #[test]
    fn test_parse_schema_error() {
        let err = parse_schema("{\"models\": [}", "schema.json").unwrap_err();
        assert!(matches!(*err, Error::SchemaParse { .. }));
    }
}
