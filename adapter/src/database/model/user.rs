use kernel::model::{id::UserId, user::User};

#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub user_id: UserId,
    pub email: String,
    pub password: String,
}

impl From<UserRow> for User {
    fn from(value: UserRow) -> Self {
        let UserRow {
            user_id,
            email,
            password,
        } = value;
        User {
            id: user_id,
            email,
            password,
        }
    }
}
