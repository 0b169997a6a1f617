use chrono::{SubsecRound, Utc};
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    TransactionSession, TransactionTrait,
};

use crate::server::model::eve::MemberTrackingEntry;

/// Rows per `INSERT` statement, keeps the bound parameter count below backend limits
const INSERT_BATCH_SIZE: usize = 500;

pub struct MemberTrackingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberTrackingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get the stored member tracking of a corporation ordered by character ID
    pub async fn get_by_corporation_id(
        &self,
        corporation_id: i64,
    ) -> Result<Vec<entity::eve_corporation_member_tracking::Model>, DbErr> {
        entity::prelude::EveCorporationMemberTracking::find()
            .filter(
                entity::eve_corporation_member_tracking::Column::CorporationId.eq(corporation_id),
            )
            .order_by_asc(entity::eve_corporation_member_tracking::Column::CharacterId)
            .all(self.db)
            .await
    }
}

impl<'a, C: ConnectionTrait + TransactionTrait> MemberTrackingRepository<'a, C> {
    /// Replace the member tracking of a corporation with the provided entries
    ///
    /// Existing rows for the corporation are deleted and the new entries inserted within
    /// one transaction, readers never observe a partial snapshot. An empty `entries` clears
    /// the corporation's member tracking.
    ///
    /// # Returns
    /// Number of rows inserted
    pub async fn replace_for_corporation(
        &self,
        corporation_id: i64,
        entries: &[MemberTrackingEntry],
    ) -> Result<usize, DbErr> {
        let now = Utc::now().naive_utc().trunc_subsecs(6);
        let txn = self.db.begin().await?;

        entity::prelude::EveCorporationMemberTracking::delete_many()
            .filter(
                entity::eve_corporation_member_tracking::Column::CorporationId.eq(corporation_id),
            )
            .exec(&txn)
            .await?;

        for batch in entries.chunks(INSERT_BATCH_SIZE) {
            let rows = batch
                .iter()
                .map(|entry| entity::eve_corporation_member_tracking::ActiveModel {
                    corporation_id: ActiveValue::Set(corporation_id),
                    character_id: ActiveValue::Set(entry.character_id),
                    base_id: ActiveValue::Set(entry.base_id),
                    location_id: ActiveValue::Set(entry.location_id),
                    logon_date: ActiveValue::Set(entry.logon_date),
                    logoff_date: ActiveValue::Set(entry.logoff_date),
                    ship_type_id: ActiveValue::Set(entry.ship_type_id),
                    start_date: ActiveValue::Set(entry.start_date),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                });

            entity::prelude::EveCorporationMemberTracking::insert_many(rows)
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;

        Ok(entries.len())
    }
}
