//! Field layout definitions parsed from a Stata dictionary.

use serde::{Deserialize, Serialize};

/// Storage type of a dictionary variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarType {
    Byte,
    Int,
    Long,
    Float,
    Double,
    /// Fixed-length string with its declared length (e.g. `str12`).
    Str(usize),
}

impl VarType {
    /// Parse a dictionary type token (`byte`, `long`, `str12`, ...).
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "byte" => Some(VarType::Byte),
            "int" => Some(VarType::Int),
            "long" => Some(VarType::Long),
            "float" => Some(VarType::Float),
            "double" => Some(VarType::Double),
            _ => token
                .strip_prefix("str")
                .and_then(|len| len.parse::<usize>().ok())
                .map(VarType::Str),
        }
    }

    /// Whether values of this type carry an integer payload.
    pub fn is_integer(&self) -> bool {
        matches!(self, VarType::Byte | VarType::Int | VarType::Long)
    }

    /// Whether values of this type are numeric at all.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, VarType::Str(_))
    }
}

/// Layout of a single fixed-width field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Variable name.
    pub name: String,
    /// 1-based column where the field starts, from `_column(N)`.
    pub start: usize,
    /// Width in characters.
    pub width: usize,
    /// Storage type.
    pub var_type: VarType,
    /// Display format string (e.g. `%12s`).
    pub format: String,
    /// Human-readable label from the dictionary.
    pub description: String,
}

/// An ordered set of field layouts for one fixed-width file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dictionary {
    /// Fields in file order.
    pub fields: Vec<FieldSpec>,
}

impl Dictionary {
    /// Create a dictionary from parsed fields.
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// Get a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// All field names in file order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Number of fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Minimum line width implied by the layout.
    pub fn line_width(&self) -> usize {
        self.fields
            .last()
            .map(|f| f.start - 1 + f.width)
            .unwrap_or(0)
    }
}
