pub mod api;
pub mod consts;
pub mod error;
pub mod request;
pub mod response;
pub mod response_vo;

pub use api::UserApi;
pub use error::{BackendError, Error};
pub use response::{ApiErrorBody, ApiResponse};
pub use response_vo::{deposit::Deposit, stake::Stake, user::User};
