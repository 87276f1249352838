pub mod content;
pub mod db;
pub mod domain;
pub mod jamo;
pub mod quiz;
