use crate::server::{
    error::AppError, model::team_member::CreateTeamMemberParam,
    service::team_member::TeamMemberService,
};
use entity::prelude::*;
use test_utils::builder::TestBuilder;

mod create;

fn create_param(name: &str, institute_email: Option<&str>) -> CreateTeamMemberParam {
    CreateTeamMemberParam {
        name: name.to_string(),
        role: "Treasurer".to_string(),
        tenure: "2024-2025".to_string(),
        image_url: None,
        institute_email: institute_email.map(str::to_string),
        instagram_url: None,
        linkedin_url: None,
        is_active: true,
    }
}
