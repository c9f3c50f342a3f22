//! Linked text-element groups.
//!
//! Elements are partitioned into named groups whose typographic fields
//! (font, color, outline, outline width) are kept identical; content and
//! placement stay per-element. The group table is configuration data -
//! the defaults pair up the two number elements and the two name elements,
//! but callers may install any table.
//!
//! Membership is answered through an index rebuilt once per table change
//! rather than by scanning the table on every edit.

use std::collections::HashMap;
use teamkit_core::ids;

/// Group table: group name to member element ids.
pub type GroupTable = HashMap<String, Vec<String>>;

/// The default table: front/back numbers linked, front/back names linked.
pub fn default_group_table() -> GroupTable {
    let mut table = GroupTable::new();
    table.insert(
        "numbers".to_string(),
        vec![ids::FRONT_NUMBER.to_string(), ids::BACK_NUMBER.to_string()],
    );
    table.insert(
        "names".to_string(),
        vec![ids::FRONT_NAME.to_string(), ids::BACK_NAME.to_string()],
    );
    table
}

/// Bidirectional view of a group table.
#[derive(Debug, Clone, Default)]
pub struct GroupIndex {
    table: GroupTable,
    by_element: HashMap<String, String>,
}

impl GroupIndex {
    /// Builds the index for a table. An element listed in several groups
    /// belongs to the last table entry that names it; tables are expected
    /// to be disjoint.
    pub fn build(table: GroupTable) -> Self {
        let mut by_element = HashMap::new();
        for (name, members) in &table {
            for id in members {
                by_element.insert(id.clone(), name.clone());
            }
        }
        Self { table, by_element }
    }

    /// The group an element belongs to, if any.
    pub fn group_of(&self, element_id: &str) -> Option<&str> {
        self.by_element.get(element_id).map(|s| s.as_str())
    }

    /// Member ids of a group. Empty for unknown groups.
    pub fn members(&self, group: &str) -> &[String] {
        self.table.get(group).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// The ids a field edit on `element_id` must be written to: every
    /// member of its group when it has one, otherwise just the element.
    pub fn propagation_targets(&self, element_id: &str) -> Vec<String> {
        match self.group_of(element_id) {
            Some(group) => self.members(group).to_vec(),
            None => vec![element_id.to_string()],
        }
    }
}
