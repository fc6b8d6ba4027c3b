/// Application layer - Use cases, DTOs, read models and factories
///
/// This layer orchestrates the domain services and reaches infrastructure
/// only through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;
