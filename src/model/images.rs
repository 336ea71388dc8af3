use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Gallery images keyed `image_1`, `image_2`, ... in document order.
///
/// Serializes as a JSON object; like [`super::JourneyMap`], field order
/// follows insertion order, so the backing store is a `Vec` rather than a
/// `HashMap` (which would scramble `image_10` before `image_2` anyway).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageGallery {
    entries: Vec<(String, String)>,
}

impl ImageGallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn insert(&mut self, name: String, url: String) {
        self.entries.push((name, url));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, url)| (name.as_str(), url.as_str()))
    }
}

impl Serialize for ImageGallery {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, url) in &self.entries {
            map.serialize_entry(name, url)?;
        }
        map.end()
    }
}
