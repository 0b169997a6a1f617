use cache_test_utils::prelude::*;

use crate::server::{
    data::eve::member_tracking::MemberTrackingRepository, model::eve::MemberTrackingEntry,
};

mod get_by_corporation_id;
mod replace_for_corporation;

fn mock_entries(character_ids: &[i64]) -> Vec<MemberTrackingEntry> {
    character_ids
        .iter()
        .map(|character_id| {
            MemberTrackingEntry::from_payload(&factory::mock_member_tracking_entry(
                *character_id,
                60003760,
            ))
            .unwrap()
        })
        .collect()
}
