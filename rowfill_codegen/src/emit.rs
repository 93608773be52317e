//! Conversion-function emission.
//!
//! Emission builds a syntax tree with `quote` and renders it through
//! `prettyplease`, so there is no text templating to escape or inject
//! into. The logical contract stays the same: targets, imports and pairs
//! in, formatted program text out.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use heck::{ToSnakeCase, ToUpperCamelCase};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::error::{EmitError, InspectError};
use crate::matcher::Pair;

const GENERATED_HEADER: &str = "// Code generated by rowfill-gen. Do not edit.";

/// A `module::path::Type` generation target.
#[derive(Debug, Clone)]
pub struct Target {
    path: syn::Path,
    segments: Vec<String>,
}

impl Target {
    /// Short type name, the final path segment.
    pub fn name(&self) -> &str {
        self.segments.last().expect("targets keep two segments minimum")
    }

    /// Final module segment, the one the type is declared in.
    fn parent(&self) -> &str {
        &self.segments[self.segments.len() - 2]
    }
}

impl PartialEq for Target {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
    }
}

impl Eq for Target {}

impl FromStr for Target {
    type Err = InspectError;

    /// Parses `module::path::Type`: a plain path of at least two
    /// segments, no generic arguments.
    fn from_str(s: &str) -> Result<Self, InspectError> {
        let invalid = || InspectError::InvalidTarget(s.to_owned());
        let path: syn::Path = syn::parse_str(s).map_err(|_| invalid())?;
        if path.segments.len() < 2 {
            return Err(invalid());
        }
        let mut segments = Vec::with_capacity(path.segments.len());
        for segment in &path.segments {
            if !matches!(segment.arguments, syn::PathArguments::None) {
                return Err(invalid());
            }
            segments.push(segment.ident.to_string());
        }
        Ok(Self { path, segments })
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("::"))
    }
}

/// Collision-free display names for the two targets.
///
/// When both share a short type name, each is prefixed with the
/// UpperCamelCase form of its final module segment, so the generated file
/// never declares two identifiers with the same name.
fn display_names(dest: &Target, src: &Target) -> (String, String) {
    if dest.name() != src.name() {
        return (dest.name().to_owned(), src.name().to_owned());
    }
    (
        format!("{}{}", dest.parent().to_upper_camel_case(), dest.name()),
        format!("{}{}", src.parent().to_upper_camel_case(), src.name()),
    )
}

/// Renders the conversion function and writes it to `sink`.
///
/// Each import is emitted as a `use` declaration, aliased when it is one
/// of the two targets and a display-name collision forced a rename. If
/// the built tree does not re-parse for formatting, the unformatted token
/// text is still written and [`EmitError::Format`] is returned so the
/// caller can salvage it.
pub fn generate<W: Write>(
    sink: &mut W,
    dest: &Target,
    src: &Target,
    imports: &[Target],
    pairs: &[Pair],
) -> Result<(), EmitError> {
    let (dest_display, src_display) = display_names(dest, src);

    let uses = imports.iter().map(|import| {
        let path = &import.path;
        let display = if import == dest {
            &dest_display
        } else if import == src {
            &src_display
        } else {
            return quote! { use #path; };
        };
        if display == import.name() {
            quote! { use #path; }
        } else {
            let alias = format_ident!("{display}");
            quote! { use #path as #alias; }
        }
    });

    let dest_ident = format_ident!("{dest_display}");
    let src_ident = format_ident!("{src_display}");
    let fn_ident = format_ident!(
        "fill_{}_from_{}",
        dest_display.to_snake_case(),
        src_display.to_snake_case()
    );
    let assignments = pairs.iter().map(|pair| {
        let dest_field = format_ident!("{}", pair.dest);
        let src_field = format_ident!("{}", pair.src);
        quote! { dest.#dest_field = src.#src_field.clone(); }
    });

    let tokens: TokenStream = quote! {
        #(#uses)*

        pub fn #fn_ident(dest: &mut #dest_ident, src: &#src_ident) {
            #(#assignments)*
        }
    };

    writeln!(sink, "{GENERATED_HEADER}")?;
    match syn::parse2::<syn::File>(tokens.clone()) {
        Ok(file) => {
            sink.write_all(prettyplease::unparse(&file).as_bytes())?;
            Ok(())
        }
        Err(source) => {
            let raw = tokens.to_string();
            writeln!(sink, "{raw}")?;
            Err(EmitError::Format { raw, source })
        }
    }
}
