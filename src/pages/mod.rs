pub mod catalog;
pub mod dashboard;
pub mod delivery;
pub mod login;
pub mod master_data;
pub mod signup;
