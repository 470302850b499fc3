pub use super::announcement::Entity as Announcement;
pub use super::blacklisted_token::Entity as BlacklistedToken;
pub use super::blog_post::Entity as BlogPost;
pub use super::chapter::Entity as Chapter;
pub use super::comment::Entity as Comment;
pub use super::event::Entity as Event;
pub use super::event_tag::Entity as EventTag;
pub use super::fan_art::Entity as FanArt;
pub use super::fan_fiction::Entity as FanFiction;
pub use super::fan_fiction_tag::Entity as FanFictionTag;
pub use super::seasonal_report::Entity as SeasonalReport;
pub use super::tag::Entity as Tag;
pub use super::team_member::Entity as TeamMember;
pub use super::user::Entity as User;
