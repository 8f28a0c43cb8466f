use user_backend::request::StakeFilter;

use crate::{init, mock, WALLET_ADDRESS, WALLET_TYPE};

#[tokio::test]
async fn test_stakes_by_user_id_without_filter() -> Result<(), user_backend::Error> {
    let (server, api) = init().await?;

    let res = api
        .get_stakes_by_user_id(mock::USER_ID, StakeFilter::default())
        .await?;
    assert_eq!(res.data.len(), 3);

    let requests = server.requests().await;
    assert_eq!(requests[0].query.len(), 2);
    assert_eq!(requests[0].query["query"], "get-stakes-by-user-id");
    assert!(!requests[0].query.contains_key("stake-type"));
    assert!(!requests[0].query.contains_key("limit"));
    Ok(())
}

#[tokio::test]
async fn test_stakes_by_user_address_with_filter() -> Result<(), user_backend::Error> {
    let (server, api) = init().await?;

    let filter = StakeFilter::default().with_stake_type("BLU").with_limit(1);
    let res = api
        .get_stakes_by_user_address(WALLET_ADDRESS, WALLET_TYPE, filter)
        .await?;
    assert_eq!(res.data.len(), 1);
    assert_eq!(res.data[0].stake_type, "BLU");
    assert_eq!(res.data[0].id, "s1");

    let requests = server.requests().await;
    assert_eq!(requests[0].query["query"], "get-stakes-by-user-address");
    assert_eq!(requests[0].query["stake-type"], "BLU");
    assert_eq!(requests[0].query["limit"], "1");
    Ok(())
}
