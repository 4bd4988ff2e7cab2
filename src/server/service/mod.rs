//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Enforcing booking, commenting and ownership rules
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! Every operation that acts on behalf of a caller first checks that the caller
//! exists, so an unknown `X-Sharer-User-Id` is reported as not found.

pub mod booking;
pub mod item;
pub mod request;
pub mod user;

#[cfg(test)]
mod test;
