pub mod markdown_parser;
pub mod markdown_service;
pub mod slide_factory;
pub mod syntax_highlighting;

#[cfg(test)]
mod markdown_service_test;
