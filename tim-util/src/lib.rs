pub mod permission;
pub mod resource_location;
pub mod text;

pub use permission::PermissionLvl;
pub use resource_location::ResourceLocation;
