use std::fmt::Write;

use crate::models::{Degree, Record};

const CARD_SKILLS: usize = 3;
const IMAGE_PLACEHOLDER: &str = "image_link";

pub fn avatar_url(record: &Record) -> String {
    match record.links.image_url.as_deref() {
        Some(url) if !url.is_empty() && url != IMAGE_PLACEHOLDER => url.to_string(),
        _ => format!(
            "https://ui-avatars.com/api/?name={}&background=random&color=fff",
            urlencoding::encode(&record.name)
        ),
    }
}

pub fn format_cards(matches: &[&Record], total: usize) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "Showing {} of {} candidates", matches.len(), total);

    if matches.is_empty() {
        let _ = writeln!(output, "No candidates match the current filters.");
        return output;
    }

    for record in matches {
        let domain = match record.ug_degree() {
            "" => "General",
            degree => degree,
        };
        let _ = writeln!(output);
        let _ = writeln!(output, "[{}] {} ({})", record.id, record.name, domain);
        let _ = writeln!(output, "    {}", record.contact.email);
        if !record.bio.is_empty() {
            let _ = writeln!(output, "    {}", record.bio);
        }

        let mut tags: Vec<String> = record
            .skills
            .iter()
            .take(CARD_SKILLS)
            .map(|skill| format!("[{skill}]"))
            .collect();
        if record.skills.len() > CARD_SKILLS {
            tags.push(format!("+{}", record.skills.len() - CARD_SKILLS));
        }
        if !tags.is_empty() {
            let _ = writeln!(output, "    {}", tags.join(" "));
        }
    }

    output
}

fn format_degree(label: &str, degree: Option<&Degree>) -> String {
    match degree {
        Some(Degree {
            degree: Some(name),
            cgpa,
        }) if !name.is_empty() => match cgpa {
            Some(cgpa) => format!("{label}: {name} ({cgpa})"),
            None => format!("{label}: {name}"),
        },
        _ => format!("{label}: -"),
    }
}

fn write_section(output: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(output);
    let _ = writeln!(output, "## {title}");
    for item in items {
        let _ = writeln!(output, "- {item}");
    }
}

pub fn format_detail(record: &Record) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# {}", record.name);
    let _ = writeln!(output, "{}", record.contact.email);
    if !record.contact.mobile_no.is_empty() {
        let _ = writeln!(output, "{}", record.contact.mobile_no);
    }
    let _ = writeln!(output, "Photo: {}", avatar_url(record));

    let links = [
        ("GitHub", record.links.github.as_deref()),
        ("LinkedIn", record.links.linkedin.as_deref()),
        ("Resume", record.links.resume_link.as_deref()),
    ];
    for (label, url) in links {
        if let Some(url) = url.filter(|u| !u.is_empty()) {
            let _ = writeln!(output, "{label}: {url}");
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(
        output,
        "{}",
        format_degree("Undergraduate", Some(&record.education.undergraduate))
    );
    let _ = writeln!(
        output,
        "{}",
        format_degree("Postgraduate", record.education.postgraduate.as_ref())
    );
    let _ = writeln!(
        output,
        "Doctorate: {}",
        record
            .education
            .doctorate
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or("-")
    );

    if !record.bio.is_empty() {
        let _ = writeln!(output);
        let _ = writeln!(output, "\"{}\"", record.bio);
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Domains / Expertise");
    let _ = writeln!(output, "{}", record.skills.join(", "));

    write_section(&mut output, "Awards", &record.awards);
    write_section(
        &mut output,
        "Licenses & Certifications",
        &record.certifications,
    );

    if !record.publications.is_empty() {
        let _ = writeln!(output);
        let _ = writeln!(output, "## Publications");
        for publication in &record.publications {
            let _ = writeln!(output, "- {} <{}>", publication.title, publication.url);
        }
    }

    write_section(&mut output, "Experience", &record.experience);

    output
}

pub fn format_selection(selected: &[String]) -> String {
    if selected.is_empty() {
        return "Selected skills: none".to_string();
    }
    let capsules: Vec<String> = selected.iter().map(|s| format!("[{s} x]")).collect();
    format!("Selected skills: {}", capsules.join(" "))
}

pub fn format_suggestions(suggestions: &[&str]) -> String {
    let mut output = String::new();
    if suggestions.is_empty() {
        let _ = writeln!(output, "No matching skills.");
        return output;
    }
    for (index, skill) in suggestions.iter().enumerate() {
        let _ = writeln!(output, "{:>3}. {}", index + 1, skill);
    }
    output
}
