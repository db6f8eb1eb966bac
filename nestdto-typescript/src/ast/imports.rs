//! TypeScript import builder.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use nestdto_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for TypeScript import statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    from: String,
    named: Vec<String>,
    type_only: bool,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Make this a type-only import (`import type { ... }`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    /// Module specifier this import reads from.
    pub fn from(&self) -> &str {
        &self.from
    }

    fn statement(&self) -> String {
        let type_kw = if self.type_only { "type " } else { "" };
        if self.named.is_empty() {
            format!("import '{}';", self.from)
        } else {
            format!(
                "import {}{{ {} }} from '{}';",
                type_kw,
                self.named.join(", "),
                self.from
            )
        }
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.statement())]
    }
}

/// Collects imported symbols per module, deduplicated.
///
/// Modules keep insertion order; symbols within a module are sorted so the
/// rendered statement does not depend on field order.
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    imports: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a module.
    pub fn add(&mut self, module: &str, symbol: &str) {
        self.imports
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Check if a specific symbol is imported from a module.
    pub fn has_symbol(&self, module: &str, symbol: &str) -> bool {
        self.imports
            .get(module)
            .is_some_and(|symbols| symbols.contains(symbol))
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// One import statement per module: packages first, then relative paths.
    pub fn into_imports(self) -> Vec<Import> {
        let (packages, relative): (Vec<_>, Vec<_>) = self
            .imports
            .into_iter()
            .partition(|(module, _)| !module.starts_with('.'));

        packages
            .into_iter()
            .chain(relative)
            .map(|(module, symbols)| {
                symbols
                    .into_iter()
                    .fold(Import::new(module), |import, symbol| import.named(symbol))
            })
            .collect()
    }
}
