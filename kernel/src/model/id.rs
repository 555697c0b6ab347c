use serde::{Deserialize, Serialize};

// ID は外部に対して不透明な文字列として扱う。
// 新規発行時は UUID v4 の文字列表現を用いる。
macro_rules! define_id {
    ($id_type:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $id_type(String);

        impl $id_type {
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $id_type {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<String> for $id_type {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $id_type {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl std::fmt::Display for $id_type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

define_id!(UserId);
define_id!(WebinarId);
