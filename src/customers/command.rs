pub mod add_customer_cmd;
pub mod get_customer_cmd;
