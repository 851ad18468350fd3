pub mod catalog;
pub mod dashboard;
pub mod db;
pub mod events;
pub mod model;
pub mod nav;
pub mod profile;
pub mod rules;
