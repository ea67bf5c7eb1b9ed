use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

use super::models::Mod;

/// Deserialize a field that may be `null`, using the type's default instead
pub fn null_as_default<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Deserialize<'de> + Default,
    D: Deserializer<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize a list of mods given either as acronyms (`["HD", "DT"]`) or as
/// mod objects (`[{"acronym": "HD"}]`). Older score formats use the former.
pub fn mod_list<'de, D>(deserializer: D) -> Result<Vec<Mod>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AcronymOrMod {
        Acronym(String),
        Mod(Mod),
    }

    struct ModList;

    impl<'de> Visitor<'de> for ModList {
        type Value = Vec<Mod>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("array of mod acronyms or mod objects")
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut mods = Vec::new();
            while let Some(item) = seq.next_element::<AcronymOrMod>()? {
                mods.push(match item {
                    AcronymOrMod::Acronym(acronym) => Mod {
                        acronym,
                        settings: None,
                    },
                    AcronymOrMod::Mod(m) => m,
                });
            }
            Ok(mods)
        }
    }

    deserializer.deserialize_any(ModList)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json;

    #[derive(Debug, Deserialize)]
    struct Container {
        #[serde(default, deserialize_with = "null_as_default")]
        tags: Vec<String>,
        #[serde(default, deserialize_with = "mod_list")]
        mods: Vec<Mod>,
    }

    #[test]
    fn test_null_list() {
        let container: Container = serde_json::from_str(r#"{"tags": null}"#).unwrap();
        assert!(container.tags.is_empty());
        assert!(container.mods.is_empty());
    }

    #[test]
    fn test_mod_acronyms() {
        let container: Container = serde_json::from_str(r#"{"mods": ["HD", "DT"]}"#).unwrap();
        let acronyms: Vec<_> = container.mods.iter().map(|m| m.acronym.as_str()).collect();
        assert_eq!(acronyms, vec!["HD", "DT"]);
    }

    #[test]
    fn test_mod_objects() {
        let json = r#"{"mods": [{"acronym": "DT", "settings": {"speed_change": 1.25}}, "HR"]}"#;
        let container: Container = serde_json::from_str(json).unwrap();
        assert_eq!(container.mods.len(), 2);
        assert_eq!(container.mods[0].acronym, "DT");
        assert!(container.mods[0].settings.is_some());
        assert_eq!(container.mods[1].acronym, "HR");
    }
}
