//! The allowed-column restriction registry
//!
//! One registry instance is constructed per schema build and passed by
//! reference into the declaration phase; there is no static state, so
//! concurrent schema builds (e.g. in tests) each get their own. After the
//! build completes the registry is read-only and may be shared across
//! requests.

use crate::error::{Result, SchemaError};
use sift_core::{validate_column, Identifier};
use std::collections::HashMap;

/// Where the restricted column set comes from
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnSet {
    /// Explicit allow-list, validated and carried by the generated shape
    AllowList(Vec<Identifier>),
    /// Reference to a previously declared column enumeration
    EnumRef(String),
}

/// A narrowed condition shape produced for one field declaration
///
/// Identical to the generic shape except that `column` is typed as the
/// restricted set rather than an open string.
#[derive(Debug, Clone, PartialEq)]
pub struct RestrictedShape {
    /// Name of the generated shape, stored by the declaration layer for
    /// decode time
    pub name: String,
    /// Name of the generic shape this one narrows
    pub base: String,
    /// Name of the column enumeration backing `column` (generated for
    /// allow-lists, the referenced name for enum refs)
    pub column_enum: String,
    /// The restricted column set
    pub columns: ColumnSet,
}

/// Generates and caches restricted condition shapes, one per distinct
/// field declaration
#[derive(Debug, Default)]
pub struct RestrictionRegistry {
    shapes: HashMap<String, RestrictedShape>,
}

impl RestrictionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the restricted shape for `declaration`, narrowing
    /// `base_shape` to either `allow_list` or the enumeration named by
    /// `enum_ref` (mutually exclusive)
    ///
    /// Idempotent: repeating the same declaration with the same inputs
    /// returns the cached shape name. The same declaration with different
    /// inputs is a build error.
    pub fn restrict(
        &mut self,
        base_shape: &str,
        declaration: &str,
        allow_list: Option<Vec<String>>,
        enum_ref: Option<String>,
    ) -> Result<String> {
        let columns = match (allow_list, enum_ref) {
            (Some(_), Some(_)) => {
                return Err(SchemaError::ConflictingRestriction(declaration.to_string()))
            }
            (None, None) => {
                return Err(SchemaError::MissingRestriction(declaration.to_string()))
            }
            (Some(columns), None) => {
                if columns.is_empty() {
                    return Err(SchemaError::EmptyAllowList(declaration.to_string()));
                }
                let validated = columns
                    .iter()
                    .map(|raw| {
                        validate_column(raw).map_err(|_| SchemaError::InvalidColumn {
                            declaration: declaration.to_string(),
                            column: raw.clone(),
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                ColumnSet::AllowList(validated)
            }
            (None, Some(enum_name)) => ColumnSet::EnumRef(enum_name),
        };

        let column_enum = match &columns {
            ColumnSet::AllowList(_) => format!("{}Column", pascal_case(declaration)),
            ColumnSet::EnumRef(name) => name.clone(),
        };
        let shape = RestrictedShape {
            name: format!("{}{}", pascal_case(declaration), base_shape),
            base: base_shape.to_string(),
            column_enum,
            columns,
        };

        if let Some(existing) = self.shapes.get(declaration) {
            if *existing == shape {
                log::debug!("restriction cache hit for declaration {declaration}");
                return Ok(existing.name.clone());
            }
            return Err(SchemaError::ConflictingDeclaration(declaration.to_string()));
        }

        let name = shape.name.clone();
        self.shapes.insert(declaration.to_string(), shape);
        Ok(name)
    }

    /// Look up the shape generated for a declaration
    pub fn shape(&self, declaration: &str) -> Option<&RestrictedShape> {
        self.shapes.get(declaration)
    }

    /// Number of distinct declarations generated so far
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// `people_filter` / `people-filter` / `people.filter` -> `PeopleFilter`
fn pascal_case(input: &str) -> String {
    input
        .split(['_', '-', '.'])
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}
