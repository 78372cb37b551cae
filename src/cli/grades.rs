//! Menu flow for the student grade tool.

use super::{another_operation, farewell, output, prompt::Prompter};
use crate::config::Profile;
use crate::errors::CoreResult;
use crate::grades::{Grade, GradeReport, SUBJECTS};

const TOOL_NAME: &str = "Student Grade System";

const MENU: [&str; 3] = [
    "Calculate Grade for a Student",
    "View Grading Scale",
    "Exit",
];

pub fn run(profile: &Profile, prompter: &Prompter) -> CoreResult<()> {
    println!("{}", profile.header("STUDENT GRADE SYSTEM"));
    output::info("Welcome to the Student Grade System!");

    loop {
        let Some(choice) = prompter.menu("Grade System Options", &MENU)? else {
            break;
        };
        match choice {
            0 => calculate(profile, prompter)?,
            1 => show_scale(),
            _ => break,
        }
        if !another_operation(prompter)? {
            break;
        }
    }
    farewell(profile, TOOL_NAME);
    Ok(())
}

fn calculate(profile: &Profile, prompter: &Prompter) -> CoreResult<()> {
    let Some(student) = prompter.nonempty_text("Enter student name")? else {
        return Ok(());
    };

    output::info("Enter marks for the following subjects (0-100):");
    let mut marks = [0.0; SUBJECTS.len()];
    for (slot, subject) in marks.iter_mut().zip(SUBJECTS) {
        let Some(mark) = prompter.number_in_range(subject, 0.0, 100.0)? else {
            return Ok(());
        };
        *slot = mark;
    }

    match GradeReport::new(student, marks) {
        Ok(report) => render_report(&report, profile),
        Err(err) => output::error(err),
    }
    Ok(())
}

fn render_report(report: &GradeReport, profile: &Profile) {
    output::section("GRADE REPORT");
    output::info(format!("Student Name: {}", report.student));
    output::info(format!("Evaluated by: {}", profile.name));
    output::separator();

    output::info("Subject-wise Marks:");
    for (subject, mark) in SUBJECTS.iter().zip(report.marks) {
        output::info(format!("{:<20} {:>6.1}", subject, mark));
    }
    output::separator();
    output::info(format!("Total Marks: {:.1} / 500", report.total));
    output::info(format!("Average: {:.2}%", report.average));
    output::success(format!(
        "Grade: {} ({})",
        report.grade,
        report.grade.description()
    ));
    output::separator();
}

fn show_scale() {
    output::section("Grading Scale");
    for grade in Grade::SCALE {
        output::info(format!(
            "{}: {:<7} ({})",
            grade,
            grade.band(),
            grade.description()
        ));
    }
    output::separator();
}
