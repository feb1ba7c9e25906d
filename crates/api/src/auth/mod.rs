//! Bearer-token handling. Tokens are HS256 JWTs signed with `JWT_SECRET`.

pub mod jwt;
