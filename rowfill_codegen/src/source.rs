//! Record source inspection over labelled parsed files.

use std::fs;
use std::path::Path;

use log::debug;
use syn::{Item, ItemStruct};

use crate::error::InspectError;
use crate::shape::RecordShape;

/// A set of pre-parsed sources, each under a caller-chosen label.
///
/// Declaration lookup is a pure function over the set: file-system
/// traversal order never decides which declaration wins.
#[derive(Debug, Default)]
pub struct SourceSet {
    sources: Vec<(String, syn::File)>,
}

impl SourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `text` and adds it under `label`.
    pub fn add_str(&mut self, label: &str, text: &str) -> Result<(), InspectError> {
        let file = syn::parse_file(text)?;
        self.sources.push((label.to_owned(), file));
        Ok(())
    }

    /// Reads and parses the file at `path`, labelled with its display
    /// path.
    pub fn add_path<P: AsRef<Path>>(&mut self, path: P) -> Result<(), InspectError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        self.add_str(&path.display().to_string(), &text)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Finds the named struct across every source and returns its shape
    /// in declaration order, non-public fields included.
    ///
    /// The name resolving to anything but a named-field struct is fatal,
    /// and so is the name resolving in more than one source: lookup never
    /// silently prefers one declaration over another.
    pub fn find_record(&self, name: &str) -> Result<RecordShape, InspectError> {
        let mut matches: Vec<(&str, &ItemStruct)> = Vec::new();
        for (label, file) in &self.sources {
            let mut found = Vec::new();
            collect_structs(&file.items, name, &mut found)?;
            matches.extend(found.into_iter().map(|item| (label.as_str(), item)));
        }

        match matches.as_slice() {
            [] => Err(InspectError::StructNotFound(name.to_owned())),
            [(label, item)] => {
                debug!("found struct {name} in {label}");
                RecordShape::from_item(item)
                    .ok_or_else(|| InspectError::NotAStruct(name.to_owned()))
            }
            many => Err(InspectError::Ambiguous {
                name: name.to_owned(),
                sources: many.iter().map(|(label, _)| (*label).to_owned()).collect(),
            }),
        }
    }
}

/// Walks items, recursing into inline modules. A non-struct item with the
/// target name fails the whole lookup.
fn collect_structs<'a>(
    items: &'a [Item],
    name: &str,
    found: &mut Vec<&'a ItemStruct>,
) -> Result<(), InspectError> {
    for item in items {
        match item {
            Item::Struct(item) if item.ident == name => found.push(item),
            Item::Enum(item) if item.ident == name => {
                return Err(InspectError::NotAStruct(name.to_owned()));
            }
            Item::Union(item) if item.ident == name => {
                return Err(InspectError::NotAStruct(name.to_owned()));
            }
            Item::Type(item) if item.ident == name => {
                return Err(InspectError::NotAStruct(name.to_owned()));
            }
            Item::Mod(module) => {
                if let Some((_, items)) = &module.content {
                    collect_structs(items, name, found)?;
                }
            }
            _ => {}
        }
    }
    Ok(())
}
