pub mod reset_system_cmd;
