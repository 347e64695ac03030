//! The generator seam behind the chat widget.
//!
//! `StaticResumeGenerator` is the shipped implementation: it returns the
//! same fixture resume for every request, side-effect free. The widget
//! carries the generator as `Arc<dyn ResumeGenerator>` so a real backend
//! can replace the stub without touching the submit path.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::resume::{JobDescription, Resume, UserExperience};

/// Produces a resume for a job description and prior experience.
///
/// The trait is async and fallible for the sake of real backends; the
/// static implementation never suspends and never fails.
#[async_trait]
pub trait ResumeGenerator: Send + Sync {
    async fn generate(
        &self,
        job: &JobDescription,
        experience: &[UserExperience],
    ) -> Result<Resume, AppError>;
}

/// Stub generator: ignores its inputs and returns `fixed_resume()`.
pub struct StaticResumeGenerator;

#[async_trait]
impl ResumeGenerator for StaticResumeGenerator {
    async fn generate(
        &self,
        _job: &JobDescription,
        _experience: &[UserExperience],
    ) -> Result<Resume, AppError> {
        Ok(fixed_resume())
    }
}

/// The one resume the static generator ever produces.
fn fixed_resume() -> Resume {
    Resume {
        name: "John Doe".to_string(),
        email: "johndoe@example.com".to_string(),
        phone: "123-456-7890".to_string(),
        experience: vec![
            UserExperience {
                position: "Software Developer".to_string(),
                company: "ABC Corp".to_string(),
                start_date: "Jan 2018".to_string(),
                end_date: "Present".to_string(),
                description: "Developed web applications using React and Node.js".to_string(),
            },
            UserExperience {
                position: "Junior Software Developer".to_string(),
                company: "XYZ Corp".to_string(),
                start_date: "Sep 2016".to_string(),
                end_date: "Jan 2018".to_string(),
                description: "Worked on a team developing a mobile app using React Native"
                    .to_string(),
            },
        ],
        education: vec!["Bachelor of Science in Computer Science".to_string()],
        skills: vec![
            "React".to_string(),
            "Node.js".to_string(),
            "JavaScript".to_string(),
            "TypeScript".to_string(),
        ],
        achievements: vec![
            "Won second place in a hackathon".to_string(),
            "Published an article in a tech blog".to_string(),
        ],
        certifications: vec!["AWS Certified Developer".to_string()],
        languages: vec!["English".to_string(), "Spanish".to_string()],
    }
}
