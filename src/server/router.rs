use std::sync::Arc;

use axum::Router;
use tower_cookies::CookieManagerLayer;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        announcement, auth, blog_post, chapter, comment, event, fan_art, fan_fiction,
        seasonal_report, tag, team_member,
    },
    error::AppError,
    state::AppState,
};

/// Seconds after which one more signup is allowed for an address.
const SIGNUP_REPLENISH_SECONDS: u64 = 12;
/// Signups an address may make back to back.
const SIGNUP_BURST: u32 = 5;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Anime Society API",
        description = "Club content, community writing and cookie-based authentication"
    ),
    tags(
        (name = "auth", description = "Registration and cookie JWT session"),
        (name = "team-member", description = "Club roster"),
        (name = "announcement", description = "Club announcements"),
        (name = "tag", description = "Tags shared by events and fan-fiction"),
        (name = "event", description = "Club events"),
        (name = "fan-art", description = "Fan art gallery"),
        (name = "seasonal-report", description = "Seasonal anime reports"),
        (name = "blog-post", description = "Member blog posts"),
        (name = "fan-fiction", description = "Fan-fiction and search"),
        (name = "chapter", description = "Fan-fiction chapters"),
        (name = "comment", description = "Comments on posts, fan-fiction and chapters")
    )
)]
pub struct ApiDoc;

/// Builds the API router with OpenAPI docs served at `/api/docs`.
///
/// Signup is rate limited per client address, taken from forwarding headers or
/// the peer address.
///
/// # Returns
/// - `Ok(Router)` - Router with state applied
/// - `Err(AppError::InternalError)` - Rate limiter configuration rejected
pub fn router(state: AppState) -> Result<Router, AppError> {
    let governor_config = GovernorConfigBuilder::default()
        .per_second(SIGNUP_REPLENISH_SECONDS)
        .burst_size(SIGNUP_BURST)
        .key_extractor(SmartIpKeyExtractor)
        .finish()
        .ok_or_else(|| AppError::InternalError("Invalid signup rate limit".to_string()))?;

    let signup = OpenApiRouter::new()
        .routes(routes!(auth::register))
        .layer(GovernorLayer::new(Arc::new(governor_config)));

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(signup)
        .routes(routes!(auth::login))
        .routes(routes!(auth::refresh))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::me))
        .routes(routes!(
            team_member::get_team_members,
            team_member::create_team_member
        ))
        .routes(routes!(
            team_member::get_team_member,
            team_member::update_team_member,
            team_member::delete_team_member
        ))
        .routes(routes!(
            announcement::get_announcements,
            announcement::create_announcement
        ))
        .routes(routes!(
            announcement::get_announcement,
            announcement::update_announcement,
            announcement::delete_announcement
        ))
        .routes(routes!(tag::get_tags, tag::create_tag))
        .routes(routes!(tag::get_tag, tag::update_tag, tag::delete_tag))
        .routes(routes!(event::get_events, event::create_event))
        .routes(routes!(event::get_event, event::update_event, event::delete_event))
        .routes(routes!(fan_art::get_fan_art_entries, fan_art::create_fan_art))
        .routes(routes!(
            fan_art::get_fan_art,
            fan_art::update_fan_art,
            fan_art::delete_fan_art
        ))
        .routes(routes!(
            seasonal_report::get_seasonal_reports,
            seasonal_report::create_seasonal_report
        ))
        .routes(routes!(
            seasonal_report::get_seasonal_report,
            seasonal_report::update_seasonal_report,
            seasonal_report::delete_seasonal_report
        ))
        .routes(routes!(blog_post::get_blog_posts, blog_post::create_blog_post))
        .routes(routes!(
            blog_post::get_blog_post,
            blog_post::update_blog_post,
            blog_post::delete_blog_post
        ))
        .routes(routes!(
            fan_fiction::get_fan_fictions,
            fan_fiction::create_fan_fiction
        ))
        .routes(routes!(
            fan_fiction::get_fan_fiction,
            fan_fiction::update_fan_fiction,
            fan_fiction::delete_fan_fiction
        ))
        .routes(routes!(chapter::get_chapters, chapter::create_chapter))
        .routes(routes!(
            chapter::get_chapter,
            chapter::update_chapter,
            chapter::delete_chapter
        ))
        .routes(routes!(comment::get_comments, comment::create_comment))
        .routes(routes!(
            comment::get_comment,
            comment::update_comment,
            comment::delete_comment
        ))
        .split_for_parts();

    let router = router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(CookieManagerLayer::new())
        .with_state(state);

    Ok(router)
}
