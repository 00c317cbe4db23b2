//! Serde adapters shared by the stat-block types.

/// `Option<T>` as either `T` or an empty object, never `null`.
pub(crate) mod empty_object {
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(value) => value.serialize(serializer),
            None => serializer.serialize_map(Some(0))?.end(),
        }
    }

    #[derive(Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Empty {}

    #[allow(dead_code)]
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr<T> {
        Present(T),
        Empty(Empty),
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Ok(match Repr::deserialize(deserializer)? {
            Repr::Present(value) => Some(value),
            Repr::Empty(_) => None,
        })
    }
}
