pub mod completion_client;
pub mod generation_service;
pub mod prompt_builder;
pub mod sanitizer;
pub mod schema_validator;
pub mod unwrapper;
