pub mod brand;
pub mod migrate;
pub mod settings;
pub mod token;
