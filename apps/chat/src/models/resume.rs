#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// User-supplied title/description pair describing a target role.
/// Only the title feeds back into the assistant reply; the description
/// is accepted for real generator backends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDescription {
    pub title: String,
    pub description: String,
}

/// One prior employment record supplied by the user. The static
/// generator ignores these; they are carried for real backends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserExperience {
    pub position: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

/// The resume shape produced by generation.
///
/// The assistant reply embeds this struct as compact JSON, so the
/// declaration order here is the serialized field order and part of the
/// observable output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub experience: Vec<UserExperience>,
    pub education: Vec<String>,
    pub skills: Vec<String>,
    pub achievements: Vec<String>,
    pub certifications: Vec<String>,
    pub languages: Vec<String>,
}
