use async_trait::async_trait;
use models::record::StudentRecord;

use super::domain::{CreatedRecord, DeleteOutcome, UpdateOutcome, ValidRecord};
use crate::errors::ServiceError;

/// Persistence for student records. Implementations must apply each
/// multi-statement change atomically.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<StudentRecord>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<StudentRecord>, ServiceError>;
    async fn create(&self, record: &ValidRecord) -> Result<CreatedRecord, ServiceError>;
    async fn update(&self, id: i32, record: &ValidRecord) -> Result<UpdateOutcome, ServiceError>;
    async fn delete(&self, id: i32) -> Result<DeleteOutcome, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    struct State {
        next_student_id: i32,
        next_grade_id: i32,
        students: BTreeMap<i32, String>,
        grades: BTreeMap<i32, (i32, String, f64)>, // key: grade id -> (student id, subject, score)
        writes: usize,
    }

    #[derive(Default)]
    pub struct MockRecordRepository {
        state: Mutex<State>,
    }

    impl MockRecordRepository {
        fn state(&self) -> Result<MutexGuard<'_, State>, ServiceError> {
            self.state.lock().map_err(|_| ServiceError::Db("mock repository lock poisoned".into()))
        }

        /// Number of create/update/delete calls that reached storage.
        pub fn writes(&self) -> usize {
            self.state.lock().map(|s| s.writes).unwrap_or_default()
        }

        /// Add a student with no grade row.
        pub fn insert_student_only(&self, name: &str) -> Result<i32, ServiceError> {
            let mut st = self.state()?;
            st.next_student_id += 1;
            let id = st.next_student_id;
            st.students.insert(id, name.to_string());
            Ok(id)
        }

        fn rows(st: &State) -> Vec<StudentRecord> {
            let mut out = Vec::new();
            for (&id, name) in &st.students {
                let mut owned = st.grades.values().filter(|(sid, _, _)| *sid == id).peekable();
                if owned.peek().is_none() {
                    out.push(StudentRecord { id, name: name.clone(), subject: None, score: None });
                }
                for (_, subject, score) in owned {
                    out.push(StudentRecord { id, name: name.clone(), subject: Some(subject.clone()), score: Some(*score) });
                }
            }
            out
        }
    }

    #[async_trait]
    impl RecordRepository for MockRecordRepository {
        async fn list(&self) -> Result<Vec<StudentRecord>, ServiceError> {
            let st = self.state()?;
            Ok(Self::rows(&st))
        }

        async fn get(&self, id: i32) -> Result<Option<StudentRecord>, ServiceError> {
            let st = self.state()?;
            Ok(Self::rows(&st).into_iter().find(|r| r.id == id))
        }

        async fn create(&self, record: &ValidRecord) -> Result<CreatedRecord, ServiceError> {
            let mut st = self.state()?;
            st.writes += 1;
            st.next_student_id += 1;
            st.next_grade_id += 1;
            let (student_id, grade_id) = (st.next_student_id, st.next_grade_id);
            st.students.insert(student_id, record.name.clone());
            st.grades.insert(grade_id, (student_id, record.subject.clone(), record.score));
            Ok(CreatedRecord { student_id, grade_id })
        }

        async fn update(&self, id: i32, record: &ValidRecord) -> Result<UpdateOutcome, ServiceError> {
            let mut st = self.state()?;
            st.writes += 1;
            match st.students.get_mut(&id) {
                Some(name) => *name = record.name.clone(),
                None => return Err(ServiceError::not_found("student")),
            }
            let mut grade_rows = 0;
            for (sid, subject, score) in st.grades.values_mut() {
                if *sid == id {
                    *subject = record.subject.clone();
                    *score = record.score;
                    grade_rows += 1;
                }
            }
            Ok(UpdateOutcome { grade_rows })
        }

        async fn delete(&self, id: i32) -> Result<DeleteOutcome, ServiceError> {
            let mut st = self.state()?;
            st.writes += 1;
            let before = st.grades.len();
            st.grades.retain(|_, (sid, _, _)| *sid != id);
            let grades_removed = (before - st.grades.len()) as u64;
            let student_removed = st.students.remove(&id).is_some();
            Ok(DeleteOutcome { grades_removed, student_removed })
        }
    }
}
