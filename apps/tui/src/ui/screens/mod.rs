pub mod form;
pub mod help;
pub mod submissions;
