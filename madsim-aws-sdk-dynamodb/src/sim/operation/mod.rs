pub mod create_table;
pub mod describe_table;
pub mod update_table;
