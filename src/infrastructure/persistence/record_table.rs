use crate::application::ports::RecordStoreError;

pub const DEFAULT_TABLE: &str = "song_scripts";
pub const DEFAULT_CONTENT_COLUMN: &str = "content";
pub const DEFAULT_UPDATED_AT_COLUMN: &str = "updated_at";

/// Names of the externally owned table and columns the service writes to.
///
/// Records are always matched on an `id` column. Names are restricted to
/// plain identifiers (optionally `schema.table`) because they are spliced
/// into SQL and REST paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordTable {
    table: String,
    content_column: String,
    updated_at_column: Option<String>,
}

impl RecordTable {
    pub fn new(
        table: &str,
        content_column: &str,
        updated_at_column: Option<&str>,
    ) -> Result<Self, RecordStoreError> {
        let table = table.trim();
        if table.is_empty() || !table.split('.').all(is_identifier) || table.split('.').count() > 2
        {
            return Err(RecordStoreError::InvalidConfiguration(format!(
                "invalid table name '{table}'"
            )));
        }

        let content_column = content_column.trim();
        if !is_identifier(content_column) {
            return Err(RecordStoreError::InvalidConfiguration(format!(
                "invalid content column '{content_column}'"
            )));
        }

        let updated_at_column = match updated_at_column.map(str::trim) {
            None | Some("") => None,
            Some(column) if is_identifier(column) => Some(column.to_string()),
            Some(column) => {
                return Err(RecordStoreError::InvalidConfiguration(format!(
                    "invalid updated_at column '{column}'"
                )));
            }
        };

        Ok(Self {
            table: table.to_string(),
            content_column: content_column.to_string(),
            updated_at_column,
        })
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn content_column(&self) -> &str {
        &self.content_column
    }

    pub fn updated_at_column(&self) -> Option<&str> {
        self.updated_at_column.as_deref()
    }
}

impl Default for RecordTable {
    fn default() -> Self {
        Self {
            table: DEFAULT_TABLE.to_string(),
            content_column: DEFAULT_CONTENT_COLUMN.to_string(),
            updated_at_column: Some(DEFAULT_UPDATED_AT_COLUMN.to_string()),
        }
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
