use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Describes who holds a permission when nobody set it explicitly
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PermissionDefault {
    /// Permission is not granted by default
    Deny,
    /// Permission is granted by default
    Allow,
    /// Permission is granted by default to operators of at least this level
    Op(PermissionLvl),
}

/// A permission node a plugin registered, e.g. `enchanter.enchant`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Permission {
    pub node: String,
    pub description: String,
    pub default: PermissionDefault,
}

impl Permission {
    pub fn new(node: &str, description: &str, default: PermissionDefault) -> Self {
        Self {
            node: node.to_string(),
            description: description.to_string(),
            default,
        }
    }
}

/// Every permission known to the server
#[derive(Default)]
pub struct PermissionRegistry {
    permissions: HashMap<String, Permission>,
}

impl PermissionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_permission(&mut self, permission: Permission) -> Result<(), String> {
        if self.permissions.contains_key(&permission.node) {
            return Err(format!(
                "Permission {} is already registered",
                permission.node
            ));
        }
        self.permissions.insert(permission.node.clone(), permission);
        Ok(())
    }

    pub fn get_permission(&self, node: &str) -> Option<&Permission> {
        self.permissions.get(node)
    }
}

/// Permissions explicitly granted to or revoked from one player
#[derive(Default, Clone, Debug, Serialize, Deserialize)]
pub struct PermissionAttachment {
    permissions: HashMap<String, bool>,
}

impl PermissionAttachment {
    pub fn set_permission(&mut self, node: &str, value: bool) {
        self.permissions.insert(node.to_string(), value);
    }

    pub fn unset_permission(&mut self, node: &str) {
        self.permissions.remove(node);
    }

    /// Looks the node up, then its wildcard parents from the most specific one
    /// (`a.b.*`, `a.*`, `*`).
    pub fn resolve(&self, node: &str) -> Option<bool> {
        if let Some(value) = self.permissions.get(node) {
            return Some(*value);
        }
        let mut prefix = node;
        while let Some((parent, _)) = prefix.rsplit_once('.') {
            if let Some(value) = self.permissions.get(&format!("{parent}.*")) {
                return Some(*value);
            }
            prefix = parent;
        }
        self.permissions.get("*").copied()
    }
}

#[derive(Default)]
pub struct PermissionManager {
    pub registry: Arc<RwLock<PermissionRegistry>>,
    pub attachments: HashMap<uuid::Uuid, PermissionAttachment>,
}

impl PermissionManager {
    pub fn new(registry: Arc<RwLock<PermissionRegistry>>) -> Self {
        Self {
            registry,
            attachments: HashMap::new(),
        }
    }

    pub fn get_attachment(&mut self, player_id: uuid::Uuid) -> &mut PermissionAttachment {
        self.attachments.entry(player_id).or_default()
    }

    pub fn remove_attachment(&mut self, player_id: &uuid::Uuid) {
        self.attachments.remove(player_id);
    }

    /// Explicit grants win, then the registered default. Unregistered nodes are denied.
    pub async fn has_permission(
        &self,
        player_id: &uuid::Uuid,
        permission_node: &str,
        player_op_level: PermissionLvl,
    ) -> bool {
        if let Some(value) = self
            .attachments
            .get(player_id)
            .and_then(|attachment| attachment.resolve(permission_node))
        {
            return value;
        }

        let registry = self.registry.read().await;
        match registry.get_permission(permission_node).map(|p| &p.default) {
            Some(PermissionDefault::Allow) => true,
            Some(PermissionDefault::Op(required_level)) => player_op_level >= *required_level,
            Some(PermissionDefault::Deny) | None => false,
        }
    }
}

/// Represents the player's operator level
///
/// - `Zero`: `normal`: Player can use basic commands.
/// - `One`: `moderator`: Player can bypass spawn protection.
/// - `Two`: `gamemaster`: Player can use more commands.
/// - `Three`: `admin`: Player can use commands related to multiplayer management.
/// - `Four`: `owner`: Player can use all of the commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PermissionLvl {
    #[default]
    Zero = 0,
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
}

impl PartialOrd for PermissionLvl {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PermissionLvl {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (*self as u8).cmp(&(*other as u8))
    }
}

impl TryFrom<u8> for PermissionLvl {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Zero),
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            _ => Err(format!("Invalid value for OpLevel: {value}")),
        }
    }
}

impl Serialize for PermissionLvl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(*self as u8)
    }
}

impl<'de> Deserialize<'de> for PermissionLvl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Self::try_from(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn manager_with(permission: Permission) -> PermissionManager {
        let registry = Arc::new(RwLock::new(PermissionRegistry::new()));
        registry
            .write()
            .await
            .register_permission(permission)
            .unwrap();
        PermissionManager::new(registry)
    }

    #[test]
    fn test_duplicate_registration() {
        let mut registry = PermissionRegistry::new();
        let permission = Permission::new("enchanter.enchant", "", PermissionDefault::Allow);
        assert!(registry.register_permission(permission.clone()).is_ok());
        assert!(registry.register_permission(permission).is_err());
    }

    #[tokio::test]
    async fn test_op_default() {
        let manager = manager_with(Permission::new(
            "enchanter.enchant",
            "",
            PermissionDefault::Op(PermissionLvl::Two),
        ))
        .await;
        let id = uuid::Uuid::new_v4();

        assert!(
            !manager
                .has_permission(&id, "enchanter.enchant", PermissionLvl::One)
                .await
        );
        assert!(
            manager
                .has_permission(&id, "enchanter.enchant", PermissionLvl::Two)
                .await
        );
        assert!(
            !manager
                .has_permission(&id, "enchanter.unknown", PermissionLvl::Four)
                .await
        );
    }

    #[tokio::test]
    async fn test_explicit_and_wildcard_grants() {
        let mut manager = manager_with(Permission::new(
            "enchanter.enchant",
            "",
            PermissionDefault::Deny,
        ))
        .await;
        let id = uuid::Uuid::new_v4();

        manager.get_attachment(id).set_permission("enchanter.*", true);
        assert!(
            manager
                .has_permission(&id, "enchanter.enchant", PermissionLvl::Zero)
                .await
        );

        manager
            .get_attachment(id)
            .set_permission("enchanter.enchant", false);
        assert!(
            !manager
                .has_permission(&id, "enchanter.enchant", PermissionLvl::Four)
                .await
        );

        manager
            .get_attachment(id)
            .unset_permission("enchanter.enchant");
        assert!(
            manager
                .has_permission(&id, "enchanter.enchant", PermissionLvl::Zero)
                .await
        );

        manager.remove_attachment(&id);
        assert!(
            !manager
                .has_permission(&id, "enchanter.enchant", PermissionLvl::Four)
                .await
        );
    }

    #[test]
    fn test_level_deserialize() {
        let lvl: PermissionLvl = serde_json::from_str("1").unwrap();
        assert_eq!(lvl, PermissionLvl::One);
        assert!(serde_json::from_str::<PermissionLvl>("5").is_err());
    }
}
