pub mod endpoint {
    /// Single entry point; the operation is selected by the `query` parameter.
    pub const USER: &str = "user";
}

pub mod query {
    pub const GET_USER_BY_ID: &str = "get-user-by-id";
    pub const GET_USER_BY_ADDRESS: &str = "get-user-by-address";

    pub const GET_DEPOSITS_BY_USER_ID: &str = "get-deposits-by-user-id";
    pub const GET_DEPOSITS_BY_USER_ADDRESS: &str = "get-deposits-by-user-address";

    pub const GET_STAKES_BY_USER_ID: &str = "get-stakes-by-user-id";
    pub const GET_STAKES_BY_USER_ADDRESS: &str = "get-stakes-by-user-address";
}

/// Locally running service.
pub const BASE_URL: &str = "http://localhost:8080/api";
