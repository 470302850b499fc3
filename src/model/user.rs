use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a registered account. The password is never serialized.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
}

/// Response of `/auth/me`; `name` is the username.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MeDto {
    pub id: i32,
    pub email: String,
    pub name: String,
}
