use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bio: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub contact: Contact,
    #[serde(rename = "skillsets", default, deserialize_with = "null_as_empty")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub education: Education,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub experience: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub awards: Vec<String>,
    #[serde(
        rename = "licenses_and_certifications",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub certifications: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub publications: Vec<Publication>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub links: Links,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Contact {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub mobile_no: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Education {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub undergraduate: Degree,
    #[serde(default)]
    pub postgraduate: Option<Degree>,
    #[serde(default)]
    pub doctorate: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Degree {
    #[serde(rename = "bsc_degree", default)]
    pub degree: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub cgpa: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Links {
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub resume_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Publication {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
}

impl Record {
    pub fn ug_degree(&self) -> &str {
        self.education.undergraduate.degree.as_deref().unwrap_or("")
    }

    pub fn ug_cgpa(&self) -> f64 {
        self.education.undergraduate.cgpa.unwrap_or(0.0)
    }

    /// Postgraduate education counts only when it names a degree.
    pub fn postgraduate(&self) -> Option<&Degree> {
        self.education
            .postgraduate
            .as_ref()
            .filter(|pg| pg.degree.as_deref().is_some_and(|d| !d.is_empty()))
    }

    pub fn has_postgraduate(&self) -> bool {
        self.postgraduate().is_some()
    }

    pub fn pg_cgpa(&self) -> f64 {
        self.education
            .postgraduate
            .as_ref()
            .and_then(|pg| pg.cgpa)
            .unwrap_or(0.0)
    }

    pub fn experience_count(&self) -> usize {
        self.experience.len()
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Some exports carry grades as strings; anything non-numeric reads as absent.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(value)) if value.is_finite() => Some(value),
        Some(Raw::Text(text)) => text.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    })
}
