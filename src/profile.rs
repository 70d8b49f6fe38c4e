// Student profile record and the form draft it is built from

/// One text field of the intake form, in on-screen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    Location,
    Age,
    StudentId,
    Email,
    Housing,
    Food,
    Major,
    PhysicalCapabilities,
    Advisor,
}

impl ProfileField {
    pub const ALL: [ProfileField; 10] = [
        Self::Name,
        Self::Location,
        Self::Age,
        Self::StudentId,
        Self::Email,
        Self::Housing,
        Self::Food,
        Self::Major,
        Self::PhysicalCapabilities,
        Self::Advisor,
    ];

    pub fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Location => 1,
            Self::Age => 2,
            Self::StudentId => 3,
            Self::Email => 4,
            Self::Housing => 5,
            Self::Food => 6,
            Self::Major => 7,
            Self::PhysicalCapabilities => 8,
            Self::Advisor => 9,
        }
    }

    /// Hint shown inside an empty input.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Location => "Location",
            Self::Age => "Age",
            Self::StudentId => "Student ID",
            Self::Email => "SJSU Email",
            Self::Housing => "Housing Situation",
            Self::Food => "Are you experiencing food insecurity?",
            Self::Major => "Major",
            Self::PhysicalCapabilities => "Do you have any physical incapabilities?",
            Self::Advisor => "Advisor",
        }
    }

    /// Prefix used on the profile summary, or `None` for fields the summary omits.
    ///
    /// The two yes/no questions are echoed as the full question followed by the answer.
    pub fn summary_label(self) -> Option<&'static str> {
        match self {
            Self::Name => Some("Name: "),
            Self::Location => Some("Location: "),
            Self::Age => Some("Age: "),
            Self::StudentId => Some("Student ID: "),
            Self::Email => None,
            Self::Housing => Some("Housing: "),
            Self::Food => Some("Are you experiencing food insecurity? "),
            Self::Major => Some("Major: "),
            Self::PhysicalCapabilities => Some("Do you have any physical incapabilities? "),
            Self::Advisor => Some("Advisor: "),
        }
    }
}

/// A submitted profile. Built once from a [`ProfileDraft`] and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub location: String,
    pub age: String,
    pub student_id: String,
    pub email: String,
    pub housing_situation: String,
    pub food: String,
    pub major: String,
    pub physical_capabilities: String,
    pub advisor: String,
}

impl Profile {
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Location => &self.location,
            ProfileField::Age => &self.age,
            ProfileField::StudentId => &self.student_id,
            ProfileField::Email => &self.email,
            ProfileField::Housing => &self.housing_situation,
            ProfileField::Food => &self.food,
            ProfileField::Major => &self.major,
            ProfileField::PhysicalCapabilities => &self.physical_capabilities,
            ProfileField::Advisor => &self.advisor,
        }
    }

    /// Lines shown on the summary screen, in display order.
    pub fn summary_lines(&self) -> Vec<String> {
        ProfileField::ALL
            .iter()
            .filter_map(|field| {
                field
                    .summary_label()
                    .map(|label| format!("{}{}", label, self.get(*field)))
            })
            .collect()
    }
}

/// Editable values for every form field. Starts empty; nothing is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    values: [String; 10],
}

impl ProfileDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: ProfileField) -> &str {
        &self.values[field.index()]
    }

    pub fn value_mut(&mut self, field: ProfileField) -> &mut String {
        &mut self.values[field.index()]
    }

    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// True when no field holds any text.
    pub fn is_blank(&self) -> bool {
        self.values.iter().all(String::is_empty)
    }

    /// Freeze the current values into a profile, verbatim.
    pub fn submit(&self) -> Profile {
        let v = |field: ProfileField| self.value(field).to_string();
        Profile {
            name: v(ProfileField::Name),
            location: v(ProfileField::Location),
            age: v(ProfileField::Age),
            student_id: v(ProfileField::StudentId),
            email: v(ProfileField::Email),
            housing_situation: v(ProfileField::Housing),
            food: v(ProfileField::Food),
            major: v(ProfileField::Major),
            physical_capabilities: v(ProfileField::PhysicalCapabilities),
            advisor: v(ProfileField::Advisor),
        }
    }
}
