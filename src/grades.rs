//! Grade computation over the fixed five-subject syllabus.

use std::fmt;

use crate::errors::{CoreError, CoreResult};

/// Subjects evaluated by a grade report, in display order.
pub const SUBJECTS: [&str; 5] = [
    "Mathematics",
    "Physics",
    "Chemistry",
    "English",
    "Computer Science",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_average(average: f64) -> Self {
        if average >= 90.0 {
            Grade::A
        } else if average >= 80.0 {
            Grade::B
        } else if average >= 70.0 {
            Grade::C
        } else if average >= 60.0 {
            Grade::D
        } else {
            Grade::F
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Grade::A => "Excellent",
            Grade::B => "Good",
            Grade::C => "Average",
            Grade::D => "Below Average",
            Grade::F => "Fail",
        }
    }

    /// Mark band covered by this grade, for rendering the scale.
    pub fn band(&self) -> &'static str {
        match self {
            Grade::A => "90-100",
            Grade::B => "80-89",
            Grade::C => "70-79",
            Grade::D => "60-69",
            Grade::F => "0-59",
        }
    }

    pub const SCALE: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::F];
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(letter)
    }
}

/// Evaluated result for one student across [`SUBJECTS`].
#[derive(Debug, Clone, PartialEq)]
pub struct GradeReport {
    pub student: String,
    pub marks: [f64; SUBJECTS.len()],
    pub total: f64,
    pub average: f64,
    pub grade: Grade,
}

impl GradeReport {
    pub fn new(student: impl Into<String>, marks: [f64; SUBJECTS.len()]) -> CoreResult<Self> {
        let student = student.into();
        if student.trim().is_empty() {
            return Err(CoreError::Validation(
                "Student name must not be empty".into(),
            ));
        }
        for (subject, mark) in SUBJECTS.iter().zip(marks) {
            if !mark.is_finite() || !(0.0..=100.0).contains(&mark) {
                return Err(CoreError::Validation(format!(
                    "{} marks must be between 0 and 100",
                    subject
                )));
            }
        }
        let total: f64 = marks.iter().sum();
        let average = total / marks.len() as f64;
        Ok(Self {
            student,
            marks,
            total,
            average,
            grade: Grade::from_average(average),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_boundaries() {
        assert_eq!(Grade::from_average(100.0), Grade::A);
        assert_eq!(Grade::from_average(90.0), Grade::A);
        assert_eq!(Grade::from_average(89.9), Grade::B);
        assert_eq!(Grade::from_average(80.0), Grade::B);
        assert_eq!(Grade::from_average(70.0), Grade::C);
        assert_eq!(Grade::from_average(60.0), Grade::D);
        assert_eq!(Grade::from_average(59.0), Grade::F);
        assert_eq!(Grade::from_average(0.0), Grade::F);
    }

    #[test]
    fn report_computes_total_average_and_grade() {
        let report =
            GradeReport::new("Jamie", [90.0, 85.0, 95.0, 80.0, 100.0]).expect("valid marks");
        assert_eq!(report.total, 450.0);
        assert_eq!(report.average, 90.0);
        assert_eq!(report.grade, Grade::A);
        assert_eq!(report.grade.description(), "Excellent");
    }

    #[test]
    fn out_of_range_marks_are_rejected() {
        for bad in [-1.0, 100.5, f64::NAN] {
            let result = GradeReport::new("Jamie", [bad, 50.0, 50.0, 50.0, 50.0]);
            assert!(matches!(result, Err(CoreError::Validation(_))));
        }
    }

    #[test]
    fn blank_student_name_is_rejected() {
        assert!(matches!(
            GradeReport::new("  ", [50.0; 5]),
            Err(CoreError::Validation(_))
        ));
    }
}
