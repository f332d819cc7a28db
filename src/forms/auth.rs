use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
/// Credentials submitted to the login endpoint.
pub struct LoginForm {
    #[validate(email)]
    pub email: String,
}
