//! Request-level plumbing shared by every controller: the authentication guard,
//! cookie handling and extractors with application-formatted rejections.

pub mod auth;
pub mod cookie;
pub mod extract;

#[cfg(test)]
mod test;
