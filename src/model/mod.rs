pub mod record;
pub mod row;
pub mod settings;
