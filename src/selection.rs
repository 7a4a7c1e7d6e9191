/// Skills chosen as filters, in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSelection {
    skills: Vec<String>,
}

impl SkillSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `skill` unless it is already selected. Returns whether it was added.
    pub fn add(&mut self, skill: &str) -> bool {
        if self.contains(skill) {
            return false;
        }
        self.skills.push(skill.to_string());
        true
    }

    pub fn remove(&mut self, skill: &str) -> bool {
        match self.skills.iter().position(|s| s == skill) {
            Some(index) => {
                self.skills.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.skills.clear();
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }

    pub fn to_display_list(&self) -> &[String] {
        &self.skills
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SkillSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Self::new();
        for skill in iter {
            selection.add(skill.as_ref());
        }
        selection
    }
}
