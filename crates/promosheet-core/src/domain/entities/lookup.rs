//! Read-only lookup tables joined into promo rows.

use std::collections::HashMap;

use indexmap::IndexMap;

/// Color and description of one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorVariant {
    pub color: String,
    pub description: String,
}

/// Style code -> variant code -> color variant.
///
/// Both levels keep insertion order, so "the first variant of a style" is
/// the first one loaded for it. Re-inserting a known variant code replaces
/// its value but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorTable {
    styles: IndexMap<String, IndexMap<String, ColorVariant>>,
}

impl ColorTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        style_code: impl Into<String>,
        variant_code: impl Into<String>,
        variant: ColorVariant,
    ) {
        self.styles
            .entry(style_code.into())
            .or_default()
            .insert(variant_code.into(), variant);
    }

    /// Variants of a style, in load order.
    pub fn variants(&self, style_code: &str) -> Option<&IndexMap<String, ColorVariant>> {
        self.styles.get(style_code)
    }

    /// Number of styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// Rows keyed by their first field; the rest of the row is opaque payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuxiliaryTable {
    rows: HashMap<String, Vec<String>>,
}

impl AuxiliaryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a full row. The first field becomes the key; an empty row is
    /// ignored. A repeated key replaces the earlier payload.
    pub fn insert_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut fields = row.into_iter().map(Into::into);
        if let Some(key) = fields.next() {
            self.rows.insert(key, fields.collect());
        }
    }

    /// Payload (fields after the key) for a key.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.rows.get(key).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
