/// Application layer - Use cases, DTOs, translation and read models
///
/// This layer orchestrates the grid domain and reaches infrastructure
/// only through ports.
pub mod dto;
pub mod read_models;
pub mod translation;
pub mod use_cases;
