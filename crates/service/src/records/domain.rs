use models::{errors::ModelError, grade, student};

/// Raw values as submitted by the create/edit forms.
#[derive(Debug, Clone, Default)]
pub struct RecordInput {
    pub name: String,
    pub subject: String,
    pub score: String,
}

/// A student name, subject and score that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidRecord {
    pub name: String,
    pub subject: String,
    pub score: f64,
}

/// Knobs for the rules that differ between create and update.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationPolicy {
    /// Update always rejects a blank subject; create only does when set.
    pub require_subject_on_create: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedRecord {
    pub student_id: i32,
    pub grade_id: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Grade rows touched; zero when the student never had a grade.
    pub grade_rows: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub grades_removed: u64,
    pub student_removed: bool,
}

impl RecordInput {
    pub fn new(name: impl Into<String>, subject: impl Into<String>, score: impl Into<String>) -> Self {
        Self { name: name.into(), subject: subject.into(), score: score.into() }
    }

    /// Checks in order: name, subject (only if the policy asks), score.
    pub fn validate_for_create(self, policy: ValidationPolicy) -> Result<ValidRecord, ModelError> {
        student::validate_name(&self.name)?;
        if policy.require_subject_on_create {
            grade::validate_subject(&self.subject)?;
        }
        let score = grade::parse_score(&self.score)?;
        Ok(ValidRecord { name: self.name, subject: self.subject, score })
    }

    /// Checks in order: name, subject, score.
    pub fn validate_for_update(self) -> Result<ValidRecord, ModelError> {
        student::validate_name(&self.name)?;
        grade::validate_subject(&self.subject)?;
        let score = grade::parse_score(&self.score)?;
        Ok(ValidRecord { name: self.name, subject: self.subject, score })
    }
}
