mod announcement;
mod auth;
mod chapter;
mod comment;
mod fan_art;
mod fan_fiction;
mod tag;
mod team_member;
