pub mod command;
pub mod controller;
pub mod domain;
pub mod dto;
pub mod factory;
pub mod registry;
