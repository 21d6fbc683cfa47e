//! Request and response bodies

pub mod auth_dto;
pub mod user_dto;

pub use auth_dto::{AuthResponse, LoginRequest, RefreshTokenRequest, RegisterRequest};
pub use user_dto::{CountResponse, UpdateProfileRequest, UserResponse};
