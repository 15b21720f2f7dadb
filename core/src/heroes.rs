use crate::error::Result;
use crate::html::{HtmlDocument, LABEL_SELECTOR, VALUE_SELECTOR};

/// Infobox label/value pairs of one hero page. Not part of the index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroRecord {
    pub fields: Vec<(String, String)>,
}

impl HeroRecord {
    /// Sets `label`, keeping the position of an earlier occurrence.
    pub fn insert(&mut self, label: String, value: String) {
        match self.fields.iter_mut().find(|(l, _)| *l == label) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((label, value)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields.iter().find(|(l, _)| l == label).map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Pairs labels with values positionally; surplus labels or values are dropped. Text is kept as extracted.
pub fn hero_record<D: HtmlDocument + ?Sized>(doc: &D) -> Result<HeroRecord> {
    let labels = doc.select_text(LABEL_SELECTOR)?;
    let values = doc.select_text(VALUE_SELECTOR)?;
    let mut record = HeroRecord::default();
    for (label, value) in labels.into_iter().zip(values) {
        record.insert(label, value);
    }
    Ok(record)
}
