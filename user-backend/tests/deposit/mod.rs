use crate::{init, mock, WALLET_ADDRESS, WALLET_TYPE};

#[tokio::test]
async fn test_deposits_by_user_id() -> Result<(), user_backend::Error> {
    let (server, api) = init().await?;

    let res = api.get_deposits_by_user_id(mock::USER_ID).await?;
    assert_eq!(res.data.len(), 1);
    assert_eq!(res.data[0].userid, mock::USER_ID);
    assert_eq!(res.data[0].amount, "100000000000000000000");

    let requests = server.requests().await;
    assert_eq!(requests[0].query["query"], "get-deposits-by-user-id");
    assert_eq!(requests[0].query["user-id"], mock::USER_ID);
    Ok(())
}

#[tokio::test]
async fn test_deposits_by_user_address() -> Result<(), user_backend::Error> {
    let (server, api) = init().await?;

    let res = api
        .get_deposits_by_user_address(WALLET_ADDRESS, WALLET_TYPE)
        .await?;
    assert_eq!(res.data[0].wallet_address, WALLET_ADDRESS);

    let requests = server.requests().await;
    assert_eq!(requests[0].query["query"], "get-deposits-by-user-address");
    assert_eq!(requests[0].query["wallet-address"], WALLET_ADDRESS);
    assert_eq!(requests[0].query["wallet-type"], WALLET_TYPE);
    Ok(())
}

#[tokio::test]
async fn test_deposits_for_unknown_user() -> Result<(), user_backend::Error> {
    let (_server, api) = init().await?;

    let err = api.get_deposits_by_user_id("nobody").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    Ok(())
}
