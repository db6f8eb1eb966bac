//! TypeScript class builder.

use nestdto_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A property declared on a TypeScript class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub ty: String,
    pub optional: bool,
    pub nullable: bool,
    pub doc: Option<String>,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
            nullable: false,
            doc: None,
        }
    }

    /// Mark the property as optional (`name?: T`).
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Allow `null` (`name: T | null`).
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn doc(mut self, doc: Option<impl Into<String>>) -> Self {
        self.doc = doc.map(|d| single_line(&d.into()));
        self
    }

    fn declaration(&self) -> String {
        let optional = if self.optional { "?" } else { "" };
        let null = if self.nullable { " | null" } else { "" };
        format!("{}{}: {}{};", self.name, optional, self.ty, null)
    }
}

// JSDoc fragments render on one line
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Builder for TypeScript classes holding only properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    name: String,
    doc: Option<String>,
    properties: Vec<Property>,
    exported: bool,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            properties: Vec::new(),
            exported: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attach a JSDoc comment to the class.
    pub fn doc(mut self, doc: Option<impl Into<String>>) -> Self {
        self.doc = doc.map(|d| single_line(&d.into()));
        self
    }

    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn properties(mut self, properties: impl IntoIterator<Item = Property>) -> Self {
        self.properties.extend(properties);
        self
    }

    /// Control whether the class is exported. Classes are exported by default.
    pub fn exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }

    /// Build the class as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let mut fragments: Vec<CodeFragment> =
            self.doc.iter().map(|d| CodeFragment::jsdoc(d.as_str())).collect();

        if self.properties.is_empty() {
            fragments.push(CodeFragment::Line(format!(
                "{}class {} {{}}",
                export, self.name
            )));
            return fragments;
        }

        let body = self
            .properties
            .iter()
            .flat_map(|p| {
                p.doc
                    .iter()
                    .map(|d| CodeFragment::jsdoc(d.as_str()))
                    .chain(std::iter::once(CodeFragment::Line(p.declaration())))
            })
            .collect();

        fragments.push(CodeFragment::block(
            format!("{}class {} {{", export, self.name),
            body,
            "}",
        ));
        fragments
    }
}
