//! The two-level case-type taxonomy managed from the admin screens.
//!
//! Base types are fixed (Judicial, Administrative); subtypes are created at
//! runtime and receive generated ids of the form `JU-001` / `AD-001`.

use serde::{Deserialize, Serialize};

use crate::{Error, Result, case::CaseBaseType};

/// A named subcategory of a base type, e.g. "Civil" under Judicial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtype {
  /// Generated display id, e.g. `JU-001`. Monotonically increasing per
  /// base type; never reused.
  pub id:   String,
  pub name: String,
}

/// One base type together with the subtypes defined under it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseTypeDefinition {
  pub base_type:   CaseBaseType,
  pub description: String,
  pub subtypes:    Vec<Subtype>,
}

/// The full taxonomy: exactly one definition per base type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseTypeCatalog {
  definitions: Vec<CaseTypeDefinition>,
}

impl Default for CaseTypeCatalog {
  fn default() -> Self { Self::new() }
}

impl CaseTypeCatalog {
  /// The empty catalog: both base types present, no subtypes yet.
  pub fn new() -> Self {
    let definitions = CaseBaseType::ALL
      .into_iter()
      .map(|base_type| CaseTypeDefinition {
        base_type,
        description: String::new(),
        subtypes: Vec::new(),
      })
      .collect();
    Self { definitions }
  }

  /// Rebuild a catalog from loaded definitions. Missing base types are
  /// filled in empty; duplicates keep the first occurrence.
  pub fn from_definitions(definitions: Vec<CaseTypeDefinition>) -> Self {
    let mut catalog = Self::new();
    for def in definitions {
      let slot = catalog.definition_mut(def.base_type);
      if slot.subtypes.is_empty() && slot.description.is_empty() {
        *slot = def;
      }
    }
    catalog
  }

  pub fn definitions(&self) -> &[CaseTypeDefinition] { &self.definitions }

  pub fn definition(&self, base_type: CaseBaseType) -> &CaseTypeDefinition {
    self
      .definitions
      .iter()
      .find(|d| d.base_type == base_type)
      .expect("catalog always holds every base type")
  }

  fn definition_mut(
    &mut self,
    base_type: CaseBaseType,
  ) -> &mut CaseTypeDefinition {
    self
      .definitions
      .iter_mut()
      .find(|d| d.base_type == base_type)
      .expect("catalog always holds every base type")
  }

  /// The subtype options offered for a base-type selection. With no base
  /// type selected ("all"), the union across base types is offered.
  pub fn subtype_options(
    &self,
    base_type: Option<CaseBaseType>,
  ) -> Vec<&Subtype> {
    match base_type {
      Some(base) => self.definition(base).subtypes.iter().collect(),
      None => self.definitions.iter().flat_map(|d| &d.subtypes).collect(),
    }
  }

  pub fn is_valid_subtype(&self, base_type: CaseBaseType, name: &str) -> bool {
    self
      .definition(base_type)
      .subtypes
      .iter()
      .any(|s| s.name == name)
  }

  /// Reconcile a subtype selection after the base-type selection changed.
  ///
  /// A selection that is no longer among the valid options is cleared to
  /// `None` ("all"), never silently kept.
  pub fn reconcile_subtype(
    &self,
    base_type: Option<CaseBaseType>,
    selected: Option<&str>,
  ) -> Option<String> {
    let name = selected?;
    self
      .subtype_options(base_type)
      .iter()
      .find(|s| s.name == name)
      .map(|s| s.name.clone())
  }

  /// The id the next subtype created under `base_type` will receive:
  /// `{PREFIX}-{seq:03}` where seq is one past the highest existing
  /// sequence number for that prefix (1 if none exist).
  pub fn next_subtype_id(&self, base_type: CaseBaseType) -> String {
    let prefix = base_type.subtype_prefix();
    let next = self
      .definition(base_type)
      .subtypes
      .iter()
      .filter_map(|s| s.id.strip_prefix(prefix)?.strip_prefix('-'))
      .filter_map(|seq| seq.parse::<u32>().ok())
      .max()
      .unwrap_or(0)
      + 1;
    format!("{prefix}-{next:03}")
  }

  /// Define a new subtype under `base_type` and return it.
  pub fn add_subtype(
    &mut self,
    base_type: CaseBaseType,
    name: String,
  ) -> Result<Subtype> {
    if self.is_valid_subtype(base_type, &name) {
      return Err(Error::SubtypeExists { base_type, name });
    }
    let subtype = Subtype { id: self.next_subtype_id(base_type), name };
    self
      .definition_mut(base_type)
      .subtypes
      .push(subtype.clone());
    Ok(subtype)
  }
}
