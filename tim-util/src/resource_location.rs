use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Visitor};

const VANILLA_NAMESPACE: &str = "minecraft";

/// A namespaced identifier such as `minecraft:sharpness`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceLocation {
    pub namespace: String,
    pub path: String,
}

impl ResourceLocation {
    pub fn vanilla(path: &str) -> Self {
        Self {
            namespace: VANILLA_NAMESPACE.to_string(),
            path: path.to_string(),
        }
    }

    pub fn is_vanilla(&self) -> bool {
        self.namespace == VANILLA_NAMESPACE
    }
}

impl std::fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

/// Parses `namespace:path`; a bare `path` falls back to the vanilla namespace.
impl FromStr for ResourceLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (namespace, path) = s.split_once(':').unwrap_or((VANILLA_NAMESPACE, s));
        let valid = |part: &str, extra: &[char]| {
            part.chars().all(|c| {
                c.is_ascii_lowercase() || c.is_ascii_digit() || "_-.".contains(c) || extra.contains(&c)
            })
        };
        if namespace.is_empty() || path.is_empty() {
            return Err(format!("Empty resource location part in {s:?}"));
        }
        if !valid(namespace, &[]) || !valid(path, &['/']) {
            return Err(format!("Invalid character in resource location {s:?}"));
        }
        Ok(Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        })
    }
}

impl Serialize for ResourceLocation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ResourceLocation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ResourceLocationVisitor;

        impl Visitor<'_> for ResourceLocationVisitor {
            type Value = ResourceLocation;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a valid resource location (namespace:path)")
            }

            fn visit_str<E>(self, resource_location: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                resource_location.parse().map_err(E::custom)
            }
        }
        deserializer.deserialize_str(ResourceLocationVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::ResourceLocation;

    #[test]
    fn parse_namespaced_and_bare() {
        let sharpness: ResourceLocation = "minecraft:sharpness".parse().unwrap();
        assert_eq!(sharpness, ResourceLocation::vanilla("sharpness"));
        assert_eq!(
            "diamond_sword".parse::<ResourceLocation>().unwrap(),
            ResourceLocation::vanilla("diamond_sword")
        );

        let custom: ResourceLocation = "tim:rabbit_bane".parse().unwrap();
        assert!(!custom.is_vanilla());
        assert_eq!(custom.to_string(), "tim:rabbit_bane");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("Minecraft:Sharpness".parse::<ResourceLocation>().is_err());
        assert!("minecraft:".parse::<ResourceLocation>().is_err());
        assert!(":path".parse::<ResourceLocation>().is_err());
    }

    #[test]
    fn serde_as_string() {
        let json = serde_json::to_string(&ResourceLocation::vanilla("mending")).unwrap();
        assert_eq!(json, "\"minecraft:mending\"");
        let back: ResourceLocation = serde_json::from_str(&json).unwrap();
        assert_eq!(back.path, "mending");
    }
}
