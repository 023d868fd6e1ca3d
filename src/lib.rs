pub mod api;
pub mod cache;
pub mod chart;
pub mod cli;
pub mod dump;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod schema;
pub mod serve;
pub mod source;
