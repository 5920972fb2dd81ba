//! HTTP response layer
//!
//! Response builders shared by the endpoint handlers and the router,
//! decoupled from business logic.

pub mod response;

pub use response::{
    build_404_response, build_405_response, build_500_response, build_empty_response,
    build_json_response, build_raw_json_response,
};
