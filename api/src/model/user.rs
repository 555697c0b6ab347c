use garde::Validate;
use kernel::model::{
    id::UserId,
    user::{event::CreateUser, User},
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[garde(email)]
    email: String,
    #[garde(length(min = 1))]
    password: String,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(value: CreateUserRequest) -> Self {
        let CreateUserRequest { email, password } = value;
        Self { email, password }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersResponse {
    pub items: Vec<UserResponse>,
}

impl From<Vec<User>> for UsersResponse {
    fn from(value: Vec<User>) -> Self {
        Self {
            items: value.into_iter().map(UserResponse::from).collect(),
        }
    }
}

// パスワードはレスポンスに含めない
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: UserId,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User { id, email, .. } = value;
        Self { user_id: id, email }
    }
}
