//! Serde adapters so scenarios read naturally in YAML: durations as whole
//! seconds, file content as text, object ids as hex.
//!
//! Values these formats cannot hold exactly are refused on serialization.

pub mod secs {
    use std::time::Duration;
    use serde::ser::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn whole_secs<E: Error>(value: &Duration) -> Result<u64, E> {
        if value.subsec_nanos() != 0 {
            return Err(E::custom(format!("duration {:?} is not a whole number of seconds", value)));
        }
        Ok(value.as_secs())
    }

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(whole_secs::<S::Error>(value)?)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }

    pub mod option {
        use std::time::Duration;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error> {
            match value {
                Some(d) => serializer.serialize_some(&super::whole_secs::<S::Error>(d)?),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Duration>, D::Error> {
            Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_secs))
        }
    }
}

pub mod text_bytes {
    use serde::ser::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        let text = std::str::from_utf8(value)
            .map_err(|e| S::Error::custom(format!("file content is not valid UTF-8: {}", e)))?;
        serializer.serialize_str(text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        String::deserialize(deserializer).map(String::into_bytes)
    }
}

pub mod oid_hex {
    use git2::Oid;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Oid, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Oid, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Oid::from_str(&hex).map_err(D::Error::custom)
    }
}
