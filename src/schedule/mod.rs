pub mod builder;
pub mod calendar;
pub mod coerce;
pub mod extract;
pub mod layout;
pub mod normalize;
pub mod repository;
pub mod schema;
pub mod search;
pub mod sheet;
