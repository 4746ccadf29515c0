pub use super::api_usage::Entity as ApiUsage;
pub use super::api_user::Entity as ApiUser;
