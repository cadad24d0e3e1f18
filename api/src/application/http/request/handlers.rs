pub mod create_demo_request;
pub mod create_quote_request;
pub mod create_request;
pub mod get_request;
pub mod list_requests;
pub mod update_request;
