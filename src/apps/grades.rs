//! Student marks
//!
//! A tutor enters a mark for each student; the app converts marks to
//! grades and reports mean/min/max and the grade profile.

use std::fmt;
use std::io::Write;

use crate::apps::App;
use crate::console::{Console, LineSource};
use crate::errors::{AppError, Result};

pub const LOWEST_MARK: u32 = 0;
pub const LOWEST_GRADE_D: u32 = 40;
pub const LOWEST_GRADE_C: u32 = 50;
pub const LOWEST_GRADE_B: u32 = 60;
pub const LOWEST_GRADE_A: u32 = 70;
pub const HIGHEST_MARK: u32 = 100;

/// Degree classification for a mark
///
/// | Grade | Marks    | Classification         |
/// |-------|----------|------------------------|
/// | A     | 70 - 100 | First Class            |
/// | B     | 60 - 69  | Upper Second           |
/// | C     | 50 - 59  | Lower Second           |
/// | D     | 40 - 49  | Third Class            |
/// | F     | 0 - 39   | Fail                   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grade {
    F,
    D,
    C,
    B,
    A,
}

impl Grade {
    /// Lowest grade first
    pub const ALL: [Grade; 5] = [Grade::F, Grade::D, Grade::C, Grade::B, Grade::A];

    pub fn from_mark(mark: u32) -> Result<Self> {
        if mark > HIGHEST_MARK {
            Err(AppError::MarkOutOfRange { mark })
        } else if mark >= LOWEST_GRADE_A {
            Ok(Grade::A)
        } else if mark >= LOWEST_GRADE_B {
            Ok(Grade::B)
        } else if mark >= LOWEST_GRADE_C {
            Ok(Grade::C)
        } else if mark >= LOWEST_GRADE_D {
            Ok(Grade::D)
        } else {
            Ok(Grade::F)
        }
    }

    pub fn lowest_mark(&self) -> u32 {
        match self {
            Grade::F => LOWEST_MARK,
            Grade::D => LOWEST_GRADE_D,
            Grade::C => LOWEST_GRADE_C,
            Grade::B => LOWEST_GRADE_B,
            Grade::A => LOWEST_GRADE_A,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Grade::F => "Fail",
            Grade::D => "III",
            Grade::C => "II-2",
            Grade::B => "II-1",
            Grade::A => "1st",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Grade::F => "Referred",
            Grade::D => "BSc(Hons) Third Class",
            Grade::C => "BSc(Hons) Lower Second",
            Grade::B => "BSc(Hons) Upper Second",
            Grade::A => "BSc(Hons) First Class",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::F => "F",
            Grade::D => "D",
            Grade::C => "C",
            Grade::B => "B",
            Grade::A => "A",
        };
        f.write_str(letter)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub mean: f64,
    pub minimum: u32,
    pub maximum: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeCount {
    pub grade: Grade,
    pub count: usize,
    /// Whole percent of all students, rounded down
    pub percentage: usize,
}

/// Count and percentage of students per grade, lowest grade first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeProfile {
    pub counts: Vec<GradeCount>,
}

impl GradeProfile {
    pub fn count(&self, grade: Grade) -> usize {
        self.counts
            .iter()
            .find(|c| c.grade == grade)
            .map(|c| c.count)
            .unwrap_or(0)
    }
}

const MENU: [&str; 5] = [
    "Input Marks",
    "Output Marks",
    "Output Stats",
    "Output Grade Profile",
    "Exit",
];

/// Marks for a fixed list of students
#[derive(Debug, Clone)]
pub struct StudentGrades {
    students: Vec<String>,
    marks: Vec<u32>,
}

impl StudentGrades {
    /// Every student starts with a mark of zero
    pub fn new(students: Vec<String>) -> Self {
        let marks = vec![LOWEST_MARK; students.len()];
        StudentGrades { students, marks }
    }

    pub fn students(&self) -> &[String] {
        &self.students
    }

    pub fn marks(&self) -> &[u32] {
        &self.marks
    }

    /// Replace all marks; the count must match the students and each mark must be 0-100
    pub fn set_marks(&mut self, marks: &[u32]) -> Result<()> {
        if marks.len() != self.students.len() {
            return Err(AppError::MarkCount {
                expected: self.students.len(),
                got: marks.len(),
            });
        }
        if let Some(&mark) = marks.iter().find(|&&m| m > HIGHEST_MARK) {
            return Err(AppError::MarkOutOfRange { mark });
        }
        self.marks.copy_from_slice(marks);
        Ok(())
    }

    pub fn set_mark(&mut self, index: usize, mark: u32) -> Result<()> {
        Grade::from_mark(mark)?;
        let students = self.students.len();
        let slot = self
            .marks
            .get_mut(index)
            .ok_or(AppError::StudentIndex { index, students })?;
        *slot = mark;
        Ok(())
    }

    pub fn calculate_stats(&self) -> Result<Stats> {
        let minimum = *self.marks.iter().min().ok_or(AppError::NoStudents)?;
        let maximum = *self.marks.iter().max().ok_or(AppError::NoStudents)?;
        let total: u32 = self.marks.iter().sum();
        let mean = total as f64 / self.marks.len() as f64;

        Ok(Stats {
            mean,
            minimum,
            maximum,
        })
    }

    pub fn grade_profile(&self) -> Result<GradeProfile> {
        if self.marks.is_empty() {
            return Err(AppError::NoStudents);
        }

        let mut tally = vec![0usize; Grade::ALL.len()];
        for &mark in &self.marks {
            let grade = Grade::from_mark(mark)?;
            tally[grade as usize] += 1;
        }

        let total = self.marks.len();
        let counts = Grade::ALL
            .iter()
            .zip(tally)
            .map(|(&grade, count)| GradeCount {
                grade,
                count,
                percentage: count * 100 / total,
            })
            .collect();

        Ok(GradeProfile { counts })
    }

    fn input_marks<S: LineSource, W: Write>(&mut self, console: &mut Console<S, W>) -> Result<()> {
        console.say("\n\tPlease enter a mark for each student.")?;

        for index in 0..self.students.len() {
            let prompt = format!("\n\tMark for {} > ", self.students[index]);
            let mark = console.input_integer_in_range(&prompt, LOWEST_MARK as i64, HIGHEST_MARK as i64)?;
            self.set_mark(index, mark as u32)?;
        }

        tracing::info!(students = self.students.len(), "marks entered");
        Ok(())
    }

    fn output_marks<S: LineSource, W: Write>(&self, console: &mut Console<S, W>) -> Result<()> {
        console.say("\n\tName\t\tMark\tGrade\n")?;
        for (student, &mark) in self.students.iter().zip(&self.marks) {
            let grade = Grade::from_mark(mark)?;
            console.say(format!("\t{:<12}\t{}\t{}", student, mark, grade))?;
        }
        Ok(())
    }

    fn output_stats<S: LineSource, W: Write>(&self, console: &mut Console<S, W>) -> Result<()> {
        let stats = self.calculate_stats()?;

        console.say("\n\tStatistics\n")?;
        console.say(format!("\tMean Mark = {:.1}", stats.mean))?;
        console.say(format!("\tMinimum Mark = {}", stats.minimum))?;
        console.say(format!("\tMaximum Mark = {}", stats.maximum))
    }

    fn output_grade_profile<S: LineSource, W: Write>(&self, console: &mut Console<S, W>) -> Result<()> {
        let profile = self.grade_profile()?;

        console.blank()?;
        for entry in profile.counts.iter().rev() {
            console.say(format!(
                "\tGrade {} ({})\t{}%\tCount {}",
                entry.grade,
                entry.grade.name(),
                entry.percentage,
                entry.count
            ))?;
        }
        console.blank()
    }
}

impl Default for StudentGrades {
    fn default() -> Self {
        Self::new(
            crate::config::DEFAULT_STUDENTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }
}

impl App for StudentGrades {
    fn run<S: LineSource, W: Write>(&mut self, console: &mut Console<S, W>) -> Result<()> {
        console.output_heading("Student Marks Application")?;

        loop {
            console.say("\n\tOption Selection")?;
            match console.select_choice(&MENU)? {
                1 => self.input_marks(console)?,
                2 => self.output_marks(console)?,
                3 => self.output_stats(console)?,
                4 => self.output_grade_profile(console)?,
                _ => return Ok(()),
            }
        }
    }
}
