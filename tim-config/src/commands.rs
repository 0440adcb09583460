use serde::{Deserialize, Serialize};
use tim_util::{PermissionLvl, permission::PermissionDefault};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct EnchantCommandConfig {
    /// Node guarding both `enchant` and `enchant all`.
    pub permission: String,
    pub permission_default: PermissionDefault,
}

impl Default for EnchantCommandConfig {
    fn default() -> Self {
        Self {
            permission: "enchanter.enchant".to_string(),
            permission_default: PermissionDefault::Op(PermissionLvl::Two),
        }
    }
}
