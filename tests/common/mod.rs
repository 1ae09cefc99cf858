#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use degree_predictor::{AnswerSet, Model, PipelineError, Scaler};
use ndarray::Array2;

/// A fully answered survey for one respondent.
pub fn complete_answers() -> AnswerSet {
    AnswerSet::new()
        .with("AgeAtEnrollment", "21 - 23 years")
        .with("Gender", "Female")
        .with("SyllabusMedium", "Local Government Syllabus (Sri Lankan : English)")
        .with(
            "OLevelCoreModulePass",
            "Yes, I achieved a minimum 'C' pass in all three subjects",
        )
        .with("ALStream", "Mathematics Stream")
        .with("ALevelCoreModulePass", "Yes")
        .with("ALEnglishOrCourse", "Yes, I studied A-Level English")
        .with(
            "PriorHigherEdu",
            "Foundation Program / Diploma related to Information Technology",
        )
        .with("GraduationYear", 2023i64)
        .with("SecondYearAvg", "61% - 70%")
        .with("InternshipCompleted", "Yes, I completed the recommended internship")
        .with("SatisfactionRating", "4")
        .with("StressAnxietyLevel", "3")
        .with("PhysicalHealth", "5")
        .with("ChronicIllness", "No")
        .with("ParentsEmployment", "One parent/guardian is employed")
        .with("ParentsEducation", "Completed A-Level")
        .with("ParentsCohabitation", "Both parents/guardians live together")
        .with("HouseholdIncome", "LKR 100,000 - 300,000")
        .with("AccommodationType", "Living with parents/guardians")
        .with("TransportMode", vec!["Public bus / train"])
        .with("TravelTime", "30 minutes to 1 hour")
        .with("EmployedDuringDegree", "No, I was not employed")
        .with("LeisureHoursPerWeek", "05 – 10 hours")
        .with("DailyScreenTime", "5 – 7 hours")
}

/// Scaler that counts calls and optionally fails.
#[derive(Debug, Default, Clone)]
pub struct CountingScaler {
    pub calls: Arc<AtomicUsize>,
    pub fail: bool,
}

impl Scaler for CountingScaler {
    fn transform(&self, features: &Array2<f32>) -> Result<Array2<f32>, PipelineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(PipelineError::Scaler("scaler exploded".into()));
        }
        Ok(features.clone())
    }
}

/// Model that returns a fixed code, records the last input and counts calls.
#[derive(Debug, Clone)]
pub struct FixedModel {
    pub code: i64,
    pub calls: Arc<AtomicUsize>,
    pub last_input: Arc<std::sync::Mutex<Option<Array2<f32>>>>,
}

impl FixedModel {
    pub fn returning(code: i64) -> Self {
        Self {
            code,
            calls: Arc::new(AtomicUsize::new(0)),
            last_input: Arc::new(std::sync::Mutex::new(None)),
        }
    }
}

impl Model for FixedModel {
    fn predict(&self, features: &Array2<f32>) -> Result<i64, PipelineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_input.lock().unwrap() = Some(features.clone());
        Ok(self.code)
    }

    fn input_width(&self) -> Option<usize> {
        Some(53)
    }
}

/// Model whose inference always fails.
#[derive(Debug)]
pub struct BrokenModel;

impl Model for BrokenModel {
    fn predict(&self, _features: &Array2<f32>) -> Result<i64, PipelineError> {
        Err(PipelineError::Model("Got invalid dimensions for input".into()))
    }
}
