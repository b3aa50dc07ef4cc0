//! REST API endpoint implementations.
//!
//! Each function issues exactly one request; there is no retry layer.

mod arrays;
mod auth;
mod disks;
mod request;
mod shelves;

pub use arrays::get_array_info;
pub use auth::login;
pub use disks::get_disk_details;
pub use request::{AUTH_TOKEN_HEADER, parse_json, send_request};
pub use shelves::{get_shelf_details, list_shelves};
