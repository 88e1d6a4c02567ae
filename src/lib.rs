pub mod core {
    pub mod command;
    pub mod controller;
    pub mod domain;
    pub mod library;
    pub mod repository;
    pub mod validation;
}

pub mod utils {
    pub mod date;
    pub mod logging;
}

pub mod books {
    pub mod catalog;
    pub mod domain;
    pub mod dto;
}

pub mod admin;
pub mod catalog;
pub mod checkout;
pub mod customers;
pub mod server;
