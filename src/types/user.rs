use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct RUserRegister {
    pub name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize)]
pub struct RLogin {
    pub name: String,
    pub email: String,
}
