use std::cmp::Reverse;

use chrono::{Duration, NaiveDateTime, SubsecRound, Utc};
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func, LikeExpr, Query, SimpleExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbBackend, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::{
    data::eve::search::{escape_like, text_score, SearchPlan, SearchStrategy, LIKE_ESCAPE},
    model::eve::CorporationInfo,
};

pub struct CorporationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CorporationRepository<'a, C> {
    /// Creates a new instance of [`CorporationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get a live (not soft-deleted) corporation by its EVE Online corporation ID
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Corporation is cached
    /// - `Ok(None)` - Corporation is not cached or only exists as a soft-deleted row
    pub async fn get_by_corporation_id(
        &self,
        corporation_id: i64,
    ) -> Result<Option<entity::eve_corporation::Model>, DbErr> {
        Self::live()
            .filter(entity::eve_corporation::Column::CorporationId.eq(corporation_id))
            .one(self.db)
            .await
    }

    /// Insert or update a corporation keyed by its EVE Online corporation ID
    ///
    /// Only live rows are matched. A corporation whose only row is soft-deleted gets a new
    /// live row instead of resurrecting the deleted one, leaving two rows with the same
    /// corporation ID.
    ///
    /// `updated_at` strictly increases with every upsert of the same row.
    pub async fn upsert(
        &self,
        corporation: CorporationInfo,
    ) -> Result<entity::eve_corporation::Model, DbErr> {
        let now = Utc::now().naive_utc().trunc_subsecs(6);

        match self
            .get_by_corporation_id(corporation.corporation_id)
            .await?
        {
            Some(existing) => {
                let updated_at = next_updated_at(existing.updated_at, now);

                let mut corporation_am = existing.into_active_model();
                apply_info(&mut corporation_am, corporation);
                corporation_am.updated_at = ActiveValue::Set(updated_at);

                corporation_am.update(self.db).await
            }
            None => {
                let mut corporation_am = entity::eve_corporation::ActiveModel {
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    deleted_at: ActiveValue::Set(None),
                    ..Default::default()
                };
                apply_info(&mut corporation_am, corporation);

                corporation_am.insert(self.db).await
            }
        }
    }

    /// Get the corporation IDs of all live corporations
    ///
    /// Only the ID column is selected.
    pub async fn get_all_corporation_ids(&self) -> Result<Vec<i64>, DbErr> {
        entity::prelude::EveCorporation::find()
            .select_only()
            .column(entity::eve_corporation::Column::CorporationId)
            .filter(entity::eve_corporation::Column::DeletedAt.is_null())
            .order_by_asc(entity::eve_corporation::Column::CorporationId)
            .into_tuple::<i64>()
            .all(self.db)
            .await
    }

    /// Search live corporations by name or ticker following the provided plan
    ///
    /// On Postgres the full text strategy uses `to_tsvector`/`ts_rank`, other backends rank
    /// by the number of matched terms.
    pub async fn search_by_name(
        &self,
        plan: &SearchPlan,
    ) -> Result<Vec<entity::eve_corporation::Model>, DbErr> {
        match &plan.strategy {
            SearchStrategy::Prefix { pattern } | SearchStrategy::Substring { pattern } => {
                Self::live()
                    .filter(name_or_ticker_like(pattern))
                    .order_by_desc(entity::eve_corporation::Column::MemberCount)
                    .order_by_asc(entity::eve_corporation::Column::CorporationId)
                    .limit(plan.limit)
                    .all(self.db)
                    .await
            }
            SearchStrategy::FullText { query, terms } => {
                if self.db.get_database_backend() == DbBackend::Postgres {
                    self.full_text_search_postgres(query, plan.limit).await
                } else {
                    self.full_text_search_terms(terms, plan.limit).await
                }
            }
        }
    }

    /// Get the CEO IDs of live corporations with an enabled corporation setting
    ///
    /// # Returns
    /// Distinct CEO IDs in ascending order, empty when no settings exist or none are enabled
    pub async fn get_privileged_principal_ids(&self) -> Result<Vec<i64>, DbErr> {
        let enabled_corporations = Query::select()
            .column(entity::eve_corporation_setting::Column::CorporationId)
            .from(entity::prelude::EveCorporationSetting)
            .and_where(entity::eve_corporation_setting::Column::Enabled.eq(true))
            .to_owned();

        let ceo_ids: Vec<Option<i64>> = entity::prelude::EveCorporation::find()
            .select_only()
            .column(entity::eve_corporation::Column::CeoId)
            .filter(entity::eve_corporation::Column::DeletedAt.is_null())
            .filter(entity::eve_corporation::Column::CeoId.is_not_null())
            .filter(
                entity::eve_corporation::Column::CorporationId.in_subquery(enabled_corporations),
            )
            .distinct()
            .order_by_asc(entity::eve_corporation::Column::CeoId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(ceo_ids.into_iter().flatten().collect())
    }

    fn live() -> Select<entity::prelude::EveCorporation> {
        entity::prelude::EveCorporation::find()
            .filter(entity::eve_corporation::Column::DeletedAt.is_null())
    }

    async fn full_text_search_postgres(
        &self,
        query: &str,
        limit: u64,
    ) -> Result<Vec<entity::eve_corporation::Model>, DbErr> {
        Self::full_text_query_postgres(query, limit).all(self.db).await
    }

    /// Live corporations matching `to_tsvector` of name and ticker, ranked by `ts_rank`
    fn full_text_query_postgres(
        query: &str,
        limit: u64,
    ) -> Select<entity::prelude::EveCorporation> {
        static DOCUMENT: &str = "to_tsvector('simple', name || ' ' || ticker)";

        Self::live()
            .filter(Expr::cust_with_values(
                format!("{} @@ plainto_tsquery('simple', $1)", DOCUMENT),
                [query.to_string()],
            ))
            .order_by_desc(Expr::cust_with_values(
                format!("ts_rank({}, plainto_tsquery('simple', $1))", DOCUMENT),
                [query.to_string()],
            ))
            .order_by_desc(entity::eve_corporation::Column::MemberCount)
            .limit(limit)
    }

    /// Term-count ranking used where Postgres full text search is unavailable
    ///
    /// Every candidate matching any term is loaded and ranked in memory. This suits the
    /// SQLite test databases and small caches, production deployments run on Postgres.
    async fn full_text_search_terms(
        &self,
        terms: &[String],
        limit: u64,
    ) -> Result<Vec<entity::eve_corporation::Model>, DbErr> {
        let mut any_term = Condition::any();
        for term in terms {
            any_term = any_term.add(name_or_ticker_like(&format!("%{}%", escape_like(term))));
        }

        let mut candidates = Self::live().filter(any_term).all(self.db).await?;

        candidates.sort_by_key(|corporation| {
            (
                Reverse(text_score(terms, &corporation.name, &corporation.ticker)),
                Reverse(corporation.member_count),
                corporation.corporation_id,
            )
        });
        candidates.truncate(limit as usize);

        Ok(candidates)
    }
}

fn apply_info(corporation_am: &mut entity::eve_corporation::ActiveModel, info: CorporationInfo) {
    corporation_am.corporation_id = ActiveValue::Set(info.corporation_id);
    corporation_am.name = ActiveValue::Set(info.name);
    corporation_am.ticker = ActiveValue::Set(info.ticker);
    corporation_am.description = ActiveValue::Set(info.description);
    corporation_am.alliance_id = ActiveValue::Set(info.alliance_id);
    corporation_am.faction_id = ActiveValue::Set(info.faction_id);
    corporation_am.ceo_id = ActiveValue::Set(info.ceo_id);
    corporation_am.creator_id = ActiveValue::Set(info.creator_id);
    corporation_am.date_founded = ActiveValue::Set(info.date_founded);
    corporation_am.member_count = ActiveValue::Set(info.member_count);
    corporation_am.shares = ActiveValue::Set(info.shares);
    corporation_am.tax_rate = ActiveValue::Set(info.tax_rate);
    corporation_am.home_station_id = ActiveValue::Set(info.home_station_id);
    corporation_am.url = ActiveValue::Set(info.url);
    corporation_am.war_eligible = ActiveValue::Set(info.war_eligible);
}

/// `now`, or one microsecond past the previous value if the clock has not advanced
fn next_updated_at(previous: NaiveDateTime, now: NaiveDateTime) -> NaiveDateTime {
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}

fn name_or_ticker_like(pattern: &str) -> Condition {
    Condition::any()
        .add(lower_like(entity::eve_corporation::Column::Name, pattern))
        .add(lower_like(entity::eve_corporation::Column::Ticker, pattern))
}

fn lower_like(column: entity::eve_corporation::Column, pattern: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(column)))
        .like(LikeExpr::new(pattern).escape(LIKE_ESCAPE))
}
