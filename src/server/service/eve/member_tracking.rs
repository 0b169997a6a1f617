//! Member-level corporation data behind the CEO authorization gate.

use crate::server::{
    data::eve::{corporation::CorporationRepository, member_tracking::MemberTrackingRepository},
    error::{entity::EntityError, Error},
    model::{
        api::MemberTrackingDto,
        eve::{member_ids_from_payload, member_tracking_from_payload},
    },
    service::eve::{corporation::CorporationService, location::LocationResolver},
};

impl CorporationService {
    /// Fetches a corporation's member tracking with location names resolved.
    ///
    /// The snapshot is written to the cache on a best effort basis, a failed write is logged
    /// and the fetched entries still returned.
    ///
    /// # Arguments
    /// - `corporation_id` - Corporation to fetch member tracking for
    /// - `claimed_principal_id` - Character the caller acts as, must be the recorded CEO
    ///
    /// # Returns
    /// - `Ok(Vec<MemberTrackingDto>)` - Every entry, unknown locations have no name
    /// - `Err(EntityError::CorporationNotFound)` - The corporation is not cached
    /// - `Err(EntityError::AuthorizationMismatch)` - The claimed principal is not the CEO
    /// - `Err(EntityError::MissingCredential)` - The CEO has no credential
    /// - `Err(EntityError::InvalidCredential)` - The CEO's credential is unusable
    /// - `Err(Error::EsiError)` - The ESI fetch or payload conversion failed
    pub async fn get_member_tracking(
        &self,
        corporation_id: i64,
        claimed_principal_id: i64,
    ) -> Result<Vec<MemberTrackingDto>, Error> {
        let access_token = self
            .authorize_principal(corporation_id, claimed_principal_id)
            .await?;

        let payload = self
            .source
            .fetch_member_tracking(corporation_id, &access_token)
            .await?;
        let entries = member_tracking_from_payload(&payload)?;

        let mut resolver = LocationResolver::new(&self.db);
        let mut members = Vec::with_capacity(entries.len());
        for entry in &entries {
            let location_name = match entry.location_id {
                Some(location_id) => resolver.resolve(location_id).await,
                None => None,
            };

            members.push(MemberTrackingDto::new(entry.clone(), location_name));
        }

        let tracking_repo = MemberTrackingRepository::new(&self.db);
        if let Err(e) = tracking_repo
            .replace_for_corporation(corporation_id, &entries)
            .await
        {
            tracing::warn!(
                corporation_id = %corporation_id,
                error = %e,
                "Failed to persist member tracking"
            );
        }

        Ok(members)
    }

    /// Fetches the character IDs of a corporation's members.
    ///
    /// Guarded like [`Self::get_member_tracking`].
    pub async fn get_members(
        &self,
        corporation_id: i64,
        claimed_principal_id: i64,
    ) -> Result<Vec<i64>, Error> {
        let access_token = self
            .authorize_principal(corporation_id, claimed_principal_id)
            .await?;

        let payload = self
            .source
            .fetch_members(corporation_id, &access_token)
            .await?;

        Ok(member_ids_from_payload(&payload)?)
    }

    /// Checks that the claimed principal is the corporation's recorded CEO and returns the
    /// CEO's access token.
    async fn authorize_principal(
        &self,
        corporation_id: i64,
        claimed_principal_id: i64,
    ) -> Result<String, Error> {
        let corporation_repo = CorporationRepository::new(&self.db);
        let corporation = corporation_repo
            .get_by_corporation_id(corporation_id)
            .await?
            .ok_or(EntityError::CorporationNotFound(corporation_id))?;

        if corporation.ceo_id != Some(claimed_principal_id) {
            return Err(EntityError::AuthorizationMismatch {
                corporation_id,
                claimed_id: claimed_principal_id,
                recorded_id: corporation.ceo_id,
            }
            .into());
        }

        let credential = self
            .credentials
            .get_credential(claimed_principal_id)
            .await?
            .ok_or(EntityError::MissingCredential(claimed_principal_id))?;

        if !credential.is_usable() {
            return Err(EntityError::InvalidCredential(claimed_principal_id).into());
        }

        Ok(credential.access_token)
    }
}
