use super::*;

async fn setup_search() -> Result<TestSetup, TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::EveCorporation)?;
    test.eve()
        .insert_named_corporation(98000001, "Autumn Industries", "AUTI", 5)
        .await?;
    test.eve()
        .insert_named_corporation(98000002, "The Order of Autumn", "F4LL.", 21)
        .await?;
    test.eve()
        .insert_named_corporation(98000003, "Goonswarm Federation", "CONDI", 1000)
        .await?;
    test.eve()
        .insert_named_corporation(98000004, "Aurora Borealis", "AUBO", 50)
        .await?;
    test.eve().insert_deleted_corporation(98000005).await?;

    Ok(test)
}

fn ids(corporations: &[entity::eve_corporation::Model]) -> Vec<i64> {
    corporations
        .iter()
        .map(|corporation| corporation.corporation_id)
        .collect()
}

/// Expect a case-insensitive prefix match on name or ticker for short queries
#[tokio::test]
async fn short_query_matches_prefix() -> Result<(), TestError> {
    let test = setup_search().await?;

    let plan = SearchPlan::for_query("Au").unwrap();
    let corporation_repo = CorporationRepository::new(&test.db);
    let result = corporation_repo.search_by_name(&plan).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    // Ordered by member count descending
    assert_eq!(ids(&result.unwrap()), vec![98000004, 98000001]);

    Ok(())
}

/// Expect a substring match for single word queries of three or more characters
#[tokio::test]
async fn single_word_matches_substring() -> Result<(), TestError> {
    let test = setup_search().await?;

    let plan = SearchPlan::for_query("autumn").unwrap();
    let corporation_repo = CorporationRepository::new(&test.db);
    let found = corporation_repo.search_by_name(&plan).await?;

    assert_eq!(ids(&found), vec![98000002, 98000001]);

    Ok(())
}

/// Expect the ticker to be matched as well as the name
#[tokio::test]
async fn matches_ticker() -> Result<(), TestError> {
    let test = setup_search().await?;

    let plan = SearchPlan::for_query("condi").unwrap();
    let corporation_repo = CorporationRepository::new(&test.db);
    let found = corporation_repo.search_by_name(&plan).await?;

    assert_eq!(ids(&found), vec![98000003]);

    Ok(())
}

/// Expect multi-word queries to rank corporations matching more terms first
#[tokio::test]
async fn multi_word_ranks_by_text_score() -> Result<(), TestError> {
    let test = setup_search().await?;

    let plan = SearchPlan::for_query("order autumn").unwrap();
    let corporation_repo = CorporationRepository::new(&test.db);
    let found = corporation_repo.search_by_name(&plan).await?;

    assert_eq!(ids(&found), vec![98000002, 98000001]);

    Ok(())
}

/// Expect soft-deleted corporations to never be returned
#[tokio::test]
async fn excludes_soft_deleted_corporations() -> Result<(), TestError> {
    let test = setup_search().await?;

    let plan = SearchPlan::for_query("deleted").unwrap();
    let corporation_repo = CorporationRepository::new(&test.db);
    let found = corporation_repo.search_by_name(&plan).await?;

    assert!(found.is_empty());

    Ok(())
}

/// Expect LIKE wildcards in the query to match literally
#[tokio::test]
async fn wildcards_match_literally() -> Result<(), TestError> {
    let test = setup_search().await?;

    let plan = SearchPlan::for_query("%").unwrap();
    let corporation_repo = CorporationRepository::new(&test.db);
    let found = corporation_repo.search_by_name(&plan).await?;

    assert!(found.is_empty());

    Ok(())
}

/// Expect the prefix strategy to return at most 20 corporations
#[tokio::test]
async fn prefix_results_are_limited() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::EveCorporation)?;
    for i in 0..25 {
        test.eve()
            .insert_named_corporation(98100000 + i, &format!("Zeta {}", i), "ZETA", i)
            .await?;
    }

    let plan = SearchPlan::for_query("ze").unwrap();
    let corporation_repo = CorporationRepository::new(&test.db);
    let found = corporation_repo.search_by_name(&plan).await?;

    assert_eq!(found.len(), 20);
    assert_eq!(found[0].corporation_id, 98100024);

    Ok(())
}
