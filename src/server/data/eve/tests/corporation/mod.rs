use cache_test_utils::prelude::*;

use crate::server::{
    data::eve::{corporation::CorporationRepository, search::SearchPlan},
    model::eve::CorporationInfo,
};

mod get_by_corporation_id;
mod get_privileged_principal_ids;
mod search_by_name;

fn mock_corporation_info(corporation_id: i64) -> CorporationInfo {
    CorporationInfo::from_payload(
        corporation_id,
        &factory::mock_corporation(None, factory::MOCK_CEO_ID),
    )
    .unwrap()
}
