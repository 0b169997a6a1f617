use cache_test_utils::{
    constant::{TEST_STATION_ID, TEST_STRUCTURE_ID},
    prelude::*,
};

use crate::server::data::eve::{station::StationRepository, structure::StructureRepository};

/// Expect the station when it exists in the static dataset
#[tokio::test]
async fn finds_station() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SdeStation)
        .with_mock_station(TEST_STATION_ID, "Jita IV - Moon 4 - Caldari Navy Assembly Plant")
        .build()
        .await?;

    let station_repo = StationRepository::new(&test.db);
    let station = station_repo.get_by_station_id(TEST_STATION_ID).await?;

    assert_eq!(
        station.map(|station| station.name),
        Some("Jita IV - Moon 4 - Caldari Navy Assembly Plant".to_string())
    );

    Ok(())
}

/// Expect None for a station missing from the static dataset
#[tokio::test]
async fn returns_none_for_unknown_station() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::SdeStation)?;

    let station_repo = StationRepository::new(&test.db);
    let station = station_repo.get_by_station_id(TEST_STATION_ID).await?;

    assert!(station.is_none());

    Ok(())
}

/// Expect the structure when it is cached
#[tokio::test]
async fn finds_structure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EveStructure)
        .with_mock_structure(TEST_STRUCTURE_ID, "1DQ1-A - Imperial Palace")
        .build()
        .await?;

    let structure_repo = StructureRepository::new(&test.db);
    let structure = structure_repo.get_by_structure_id(TEST_STRUCTURE_ID).await?;

    assert_eq!(
        structure.map(|structure| structure.name),
        Some("1DQ1-A - Imperial Palace".to_string())
    );

    Ok(())
}

/// Expect None for an unknown structure
#[tokio::test]
async fn returns_none_for_unknown_structure() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::EveStructure)?;

    let structure_repo = StructureRepository::new(&test.db);
    let structure = structure_repo.get_by_structure_id(TEST_STRUCTURE_ID).await?;

    assert!(structure.is_none());

    Ok(())
}
