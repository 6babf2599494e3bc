use email_address::EmailAddress;

/// The single administrator allowed into the dashboard.
#[derive(Debug, Clone)]
pub struct AdminAccount {
    email: String,
    password_hash: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdminAccountError {
    #[error("Admin email is not a valid address")]
    InvalidEmail,

    #[error("Admin password hash is empty")]
    EmptyPasswordHash,
}

impl AdminAccount {
    pub fn new(email: &str, password_hash: &str) -> Result<Self, AdminAccountError> {
        let email = email.trim();
        if !EmailAddress::is_valid(email) {
            return Err(AdminAccountError::InvalidEmail);
        }

        let password_hash = password_hash.trim();
        if password_hash.is_empty() {
            return Err(AdminAccountError::EmptyPasswordHash);
        }

        Ok(Self {
            email: email.to_lowercase(),
            password_hash: password_hash.to_string(),
        })
    }

    /// Lowercased login email.
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }
}
