//! Request parsing: turns the raw input line into a typed generate request.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::resume::{JobDescription, UserExperience};

/// The JSON shape the widget accepts from the input line.
///
/// `userExperience` may be omitted and defaults to empty: the static
/// generator ignores it. `jobDescription` is required because its title
/// feeds the reply template.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub job_description: JobDescription,
    #[serde(default)]
    pub user_experience: Vec<UserExperience>,
}

/// Parses a raw input line as a `GenerateRequest`.
///
/// Malformed JSON and shape mismatches come back as `Validation`; the
/// widget surfaces them as an assistant reply rather than propagating.
pub fn parse_request(raw: &str) -> Result<GenerateRequest, AppError> {
    serde_json::from_str(raw).map_err(|e| AppError::Validation(e.to_string()))
}

/// The worked example shown by the `:example` surface command.
pub fn example_request() -> GenerateRequest {
    GenerateRequest {
        job_description: JobDescription {
            title: "Software Developer".to_string(),
            description: "Develops and maintains software applications".to_string(),
        },
        user_experience: vec![
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
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = r#"{
        "jobDescription": {
            "title": "Software Developer",
            "description": "Develops and maintains software applications"
        },
        "userExperience": [{
            "position": "Software Developer",
            "company": "ABC Corp",
            "startDate": "Jan 2018",
            "endDate": "Present",
            "description": "Developed web applications using React and Node.js"
        }]
    }"#;

    #[test]
    fn test_parses_well_formed_request() {
        let request = parse_request(WELL_FORMED).unwrap();
        assert_eq!(request.job_description.title, "Software Developer");
        assert_eq!(request.user_experience.len(), 1);
        assert_eq!(request.user_experience[0].company, "ABC Corp");
    }

    #[test]
    fn test_missing_user_experience_defaults_to_empty() {
        let request = parse_request(
            r#"{"jobDescription": {"title": "Engineer", "description": "Builds things"}}"#,
        )
        .unwrap();
        assert!(request.user_experience.is_empty());
    }

    #[test]
    fn test_missing_job_description_is_rejected() {
        let err = parse_request(r#"{"userExperience": []}"#).unwrap_err();
        match err {
            AppError::Validation(msg) => {
                assert!(msg.contains("jobDescription"), "message was: {msg}")
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_non_json_input_is_rejected() {
        let err = parse_request("please write me a resume").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_snake_case_keys_are_not_accepted() {
        // The wire shape is camelCase; snake_case keys look like unknown
        // fields and leave jobDescription missing.
        let result = parse_request(
            r#"{"job_description": {"title": "Engineer", "description": "Builds"}}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let request = parse_request(
            r#"{
                "jobDescription": {"title": "Engineer", "description": "Builds"},
                "userExperience": [],
                "extra": 42
            }"#,
        )
        .unwrap();
        assert_eq!(request.job_description.title, "Engineer");
    }

    #[test]
    fn test_non_string_title_is_rejected() {
        let result =
            parse_request(r#"{"jobDescription": {"title": 5, "description": "Builds"}}"#);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_example_request_matches_placeholder_content() {
        let example = example_request();
        assert_eq!(example.job_description.title, "Software Developer");
        assert_eq!(example.user_experience.len(), 2);
        assert_eq!(example.user_experience[1].company, "XYZ Corp");
        // The example must itself parse, since users are told to copy it.
        let json = serde_json::to_string(&example).unwrap();
        assert!(parse_request(&json).is_ok());
    }
}
