//! Page components, one per route.

pub mod asset_detail;
pub mod assets;
pub mod dashboard;
pub mod login;
pub mod logout;
