use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

/// Entries of a catalog JSON object, in document order.
///
/// A plain map would silently drop repeated keys and lose ordering, both of
/// which the catalog needs to see.
pub(crate) struct CatalogEntries(pub(crate) Vec<(String, Vec<String>)>);

impl<'de> Deserialize<'de> for CatalogEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = CatalogEntries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping mood names to lists of dishes")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((mood, dishes)) = map.next_entry::<String, Vec<String>>()? {
                    entries.push((mood, dishes));
                }
                Ok(CatalogEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}
