/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `todos`: Todo CRUD and by-category listing
/// - `users`: User CRUD and credential login

pub mod health;
pub mod todos;
pub mod users;
