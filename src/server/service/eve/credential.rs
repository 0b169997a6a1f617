//! Credentials of privileged principals.
//!
//! Member-level ESI calls need an access token of the corporation's CEO. The cache service
//! only reads credentials through [`CredentialProvider`], issuing and refreshing tokens
//! happens elsewhere.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{credential::CredentialRepository, eve::corporation::CorporationRepository},
    error::Error,
    model::api::{CredentialIssue, CredentialReport, CredentialStatus},
    service::eve::corporation::CorporationService,
};

/// A principal's credential as reported by a [`CredentialProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub character_id: i64,
    pub access_token: String,
    pub valid: bool,
    pub expires_at: Option<NaiveDateTime>,
    pub last_login_at: Option<NaiveDateTime>,
    pub name: Option<String>,
    pub corporation_id: Option<i64>,
}

impl Credential {
    /// A credential can be used for ESI calls when it is flagged valid and carries a token.
    pub fn is_usable(&self) -> bool {
        self.valid && !self.access_token.is_empty()
    }
}

/// Source of principal credentials.
///
/// # Returns
/// - `Ok(Some(Credential))` - The principal has a credential, valid or not
/// - `Ok(None)` - The provider has no credential for the principal
/// - `Err(Error)` - The provider could not be reached
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn get_credential(&self, character_id: i64) -> Result<Option<Credential>, Error>;
}

/// [`CredentialProvider`] reading the `eve_character_credential` table.
#[derive(Clone)]
pub struct DatabaseCredentialProvider {
    db: DatabaseConnection,
}

impl DatabaseCredentialProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CredentialProvider for DatabaseCredentialProvider {
    async fn get_credential(&self, character_id: i64) -> Result<Option<Credential>, Error> {
        let credential_repo = CredentialRepository::new(&self.db);

        let credential = credential_repo
            .get_by_character_id(character_id)
            .await?
            .map(|model| Credential {
                character_id: model.character_id,
                access_token: model.access_token,
                valid: model.valid,
                expires_at: model.expires_at,
                last_login_at: model.last_login_at,
                name: Some(model.name),
                corporation_id: model.corporation_id,
            });

        Ok(credential)
    }
}

impl CorporationService {
    /// Checks the credential of every privileged principal.
    ///
    /// Principals are the CEOs of cached corporations with an enabled corporation setting.
    /// Nothing is modified, the report lists missing and invalid credentials so they can be
    /// renewed.
    ///
    /// # Returns
    /// - `Ok(CredentialReport)` - Counts and details, empty when there are no principals
    /// - `Err(Error)` - Principals could not be listed or the credential provider failed
    pub async fn validate_credentials(&self) -> Result<CredentialReport, Error> {
        let corporation_repo = CorporationRepository::new(&self.db);
        let principal_ids = corporation_repo.get_privileged_principal_ids().await?;

        let mut report = CredentialReport::default();
        if principal_ids.is_empty() {
            tracing::info!("No privileged principals to validate");
            return Ok(report);
        }

        for character_id in principal_ids {
            match self.credentials.get_credential(character_id).await? {
                None => {
                    tracing::warn!(character_id = %character_id, "Privileged principal has no credential");

                    report.missing += 1;
                    report.issues.push(CredentialIssue {
                        character_id,
                        status: CredentialStatus::Missing,
                        name: None,
                        corporation_id: None,
                        expires_at: None,
                        last_login_at: None,
                    });
                }
                Some(credential) if !credential.valid => {
                    tracing::warn!(
                        character_id = %character_id,
                        expires_at = ?credential.expires_at,
                        "Privileged principal has an invalid credential"
                    );

                    report.invalid += 1;
                    report.issues.push(CredentialIssue {
                        character_id,
                        status: CredentialStatus::Invalid,
                        name: credential.name,
                        corporation_id: credential.corporation_id,
                        expires_at: credential.expires_at,
                        last_login_at: credential.last_login_at,
                    });
                }
                Some(_) => report.valid += 1,
            }
        }

        tracing::info!(
            valid = report.valid,
            invalid = report.invalid,
            missing = report.missing,
            "Credential validation complete"
        );

        Ok(report)
    }
}
