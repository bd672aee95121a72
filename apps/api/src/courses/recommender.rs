//! Course Recommender: per skill, a short list of tutorial videos plus curated courses.

use serde::Serialize;
use tracing::warn;

use crate::courses::catalog::curated_courses;
use crate::courses::CourseLink;
use crate::errors::SourceStatus;
use crate::video_client::VideoSearch;

/// Only the first few skills get recommendations.
pub const MAX_SKILLS: usize = 5;
pub const VIDEOS_PER_SKILL: u32 = 3;

#[derive(Debug, Clone, Serialize)]
pub struct CourseEntry {
    pub skill: String,
    pub youtube: Vec<CourseLink>,
    pub curated: Vec<CourseLink>,
    /// Whether the video lookup succeeded; an outage leaves `youtube` empty.
    pub youtube_status: SourceStatus,
}

/// Builds recommendations for the first `MAX_SKILLS` skills, in input order.
/// Video search failures are recorded per entry and never abort the batch.
pub async fn recommend_courses(videos: &dyn VideoSearch, skills: &[String]) -> Vec<CourseEntry> {
    let mut entries = Vec::with_capacity(skills.len().min(MAX_SKILLS));
    for skill in skills.iter().take(MAX_SKILLS) {
        let lookup = videos
            .search_videos(&format!("{skill} tutorial complete course"), VIDEOS_PER_SKILL)
            .await;
        let youtube_status = SourceStatus::of(&lookup);
        let youtube = match lookup {
            Ok(hits) => hits
                .into_iter()
                .map(|hit| CourseLink {
                    title: hit.title,
                    url: format!("https://www.youtube.com/watch?v={}", hit.video_id),
                    platform: "YouTube".to_string(),
                })
                .collect(),
            Err(e) => {
                warn!("Error fetching YouTube courses for {skill}: {e}");
                Vec::new()
            }
        };

        entries.push(CourseEntry {
            skill: skill.clone(),
            youtube,
            curated: curated_courses(skill),
            youtube_status,
        });
    }
    entries
}
