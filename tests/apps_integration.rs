//! Integration tests - interactive apps
//!
//! Each test scripts the user's answers and checks what the app printed
//! and the state it left behind.

use coursework::apps::{App, AppKind, BmiCalculator, DistanceConverter, Game, SocialNetwork, StudentGrades};
use coursework::console::{Console, ScriptedInput};
use coursework::launcher::Launcher;
use coursework::{AppError, Config};
use rand::rngs::StdRng;
use rand::SeedableRng;

type TestConsole = Console<ScriptedInput, Vec<u8>>;

fn console(lines: &[&str]) -> TestConsole {
    Console::new(ScriptedInput::new(lines.iter().copied()), Vec::new())
}

fn printed(console: &TestConsole) -> String {
    String::from_utf8_lossy(console.output()).to_string()
}

// Distance converter

#[test]
fn test_distance_rejects_same_unit_and_repeats() {
    let mut console = console(&[
        "1", "1", // miles -> miles is rejected
        "2", "3", "y", // -> feet, 3 miles, go again
        "3", "1", "1609.34", "n", // metres -> miles
    ]);

    DistanceConverter::new().run(&mut console).unwrap();

    let out = printed(&console);
    assert!(out.contains("The To unit cannot be the same as the From unit"));
    assert!(out.contains("3 Miles = 15840.00 Feet"));
    assert!(out.contains("1609.34 Metres = 1.00 Miles"));
    assert_eq!(console.source().remaining(), 0);
}

#[test]
fn test_distance_rejects_negative_and_text() {
    let mut console = console(&["2", "3", "far", "-5", "10", "n"]);

    DistanceConverter::new().run(&mut console).unwrap();

    let out = printed(&console);
    assert!(out.contains("Invalid number."));
    assert!(out.contains("The distance cannot be negative."));
    assert!(out.contains("10 Feet = 3.05 Metres"));
}

#[test]
fn test_distance_stops_when_input_closes() {
    let mut console = console(&["1"]);
    let err = DistanceConverter::new().run(&mut console).unwrap_err();
    assert!(matches!(err, AppError::InputClosed));
}

// BMI calculator

#[test]
fn test_bmi_metric() {
    let mut console = console(&["2", "70", "175", "n"]);

    BmiCalculator::new().run(&mut console).unwrap();

    let out = printed(&console);
    assert!(out.contains("Your BMI is 22.9. You are Normal."));
    assert!(out.contains("23.0 or over"));
    assert!(out.contains("27.5 or over"));
}

#[test]
fn test_bmi_imperial() {
    // 15st 0lb over 5ft 6in
    let mut console = console(&["1", "15", "0", "5", "6", "n"]);

    BmiCalculator::new().run(&mut console).unwrap();

    assert!(printed(&console).contains("Your BMI is 33.9. You are Obese Class I."));
}

#[test]
fn test_bmi_range_and_zero_height() {
    let mut console = console(&[
        "2", "200", "70", "0", // kg out of range, then zero height
        "70", "175", "n",
    ]);

    BmiCalculator::new().run(&mut console).unwrap();

    let out = printed(&console);
    assert!(out.contains("The number must be in the range 0-150"));
    assert!(out.contains("height must be greater than zero"));
    assert!(out.contains("You are Normal."));
}

// Student marks

#[test]
fn test_grades_full_session() {
    let students = vec!["Ann".to_string(), "Bob".to_string(), "Cy".to_string()];
    let mut grades = StudentGrades::new(students);
    let mut console = console(&[
        "1", "75", "101", "45", "30", // input marks, 101 rejected
        "2", // output marks
        "3", // stats
        "4", // grade profile
        "5", // exit
    ]);

    grades.run(&mut console).unwrap();

    assert_eq!(grades.marks(), &[75, 45, 30]);

    let out = printed(&console);
    assert!(out.contains("The number must be in the range 0-100"));
    assert!(out.contains("Mean Mark = 50.0"));
    assert!(out.contains("Minimum Mark = 30"));
    assert!(out.contains("Maximum Mark = 75"));
    assert!(out.contains("Grade A (1st)\t33%\tCount 1"));
    assert!(out.contains("Grade B (II-1)\t0%\tCount 0"));
    assert!(out.contains("Grade F (Fail)\t33%\tCount 1"));
}

#[test]
fn test_grades_stats_before_input() {
    let mut grades = StudentGrades::default();
    let mut console = console(&["3", "5"]);

    grades.run(&mut console).unwrap();

    let out = printed(&console);
    assert!(out.contains("Mean Mark = 0.0"));
    assert!(out.contains("Maximum Mark = 0"));
}

// Social network

#[test]
fn test_social_feed_session() {
    let mut app = SocialNetwork::new();
    let mut console = console(&[
        "1", "Ada", "Hello", // message post -> id 1
        "2", "Bob", "cat.jpg", "My cat", // photo post -> id 2
        "8", "1", // like
        "8", "1", // like
        "9", "2", // unlike stays at zero
        "7", "1", "Nice!", // comment
        "3", "2", // remove photo
        "3", "9", // remove missing
        "5", "ada", // by author
        "6", "", // by date, today
        "6", "01/01/2000", "2000-01-01", // bad date, then a day with no posts
        "4",  // all posts
        "10", // quit
    ]);

    app.run(&mut console).unwrap();

    let feed = app.feed();
    assert_eq!(feed.len(), 1);
    let post = feed.find(1).unwrap();
    assert_eq!(post.likes, 2);
    assert_eq!(post.comments, vec!["Nice!".to_string()]);
    assert!(feed.find(2).is_err());

    let out = printed(&console);
    assert!(out.contains("Post 1 now has 2 like(s)."));
    assert!(out.contains("Post 2 now has 0 like(s)."));
    assert!(out.contains("Post 2 has been removed."));
    assert!(out.contains("Post 9 does not exist"));
    assert!(out.contains("Invalid date. Use the format YYYY-MM-DD."));
    assert!(out.contains("No posts to display."));
    assert!(out.contains("Message:  Hello"));
    assert!(out.contains("  - Nice!"));
}

#[test]
fn test_social_requires_author() {
    let mut app = SocialNetwork::new();
    let mut console = console(&["1", "", "Ada", "Hi", "10"]);

    app.run(&mut console).unwrap();

    assert!(printed(&console).contains("The author's name cannot be empty."));
    assert_eq!(app.feed().posts()[0].author, "Ada");
}

#[test]
fn test_social_comment_on_missing_post() {
    let mut app = SocialNetwork::new();
    let mut console = console(&["7", "3", "10"]);

    app.run(&mut console).unwrap();

    assert!(printed(&console).contains("Post 3 does not exist"));
    assert_eq!(console.source().remaining(), 0);
}

// Rock paper scissors

#[test]
fn test_rps_plays_configured_rounds() {
    let mut game = Game::with_rng(3, StdRng::seed_from_u64(42));
    let mut console = console(&["1", "4", "2", "3", "n"]);

    game.run(&mut console).unwrap();

    let out = printed(&console);
    assert!(out.contains("Round 1 of 3"));
    assert!(out.contains("Round 3 of 3"));
    assert!(!out.contains("Round 4 of 3"));
    assert!(out.contains("The number must be in the range 1-3"));
    assert!(out.contains("Final score"));
}

// Launcher

#[test]
fn test_launcher_runs_several_apps() {
    let console = console(&[
        "2", "2", "70", "175", "n", // BMI
        "3", "5", // grades, straight back out
        "6", // quit
    ]);
    let mut launcher = Launcher::new(console, Config::default());

    launcher.run().unwrap();

    assert_eq!(launcher.launched(), 2);
    let out = printed(launcher.console());
    assert!(out.contains("Body Mass Index Calculator"));
    assert!(out.contains("Student Marks Application"));
    assert!(out.contains("Goodbye"));
}

#[test]
fn test_launcher_input_closed_inside_app() {
    let console = console(&["4", "1", "Ada"]);
    let mut launcher = Launcher::new(console, Config::default());

    assert!(launcher.run().is_ok());
    assert_eq!(launcher.launched(), 1);
}

#[test]
fn test_launcher_uses_configured_students() {
    let mut config = Config::default();
    config.grades.students = vec!["Zed".to_string()];
    config.display.author = Some("Ada".to_string());

    let console = console(&["3", "1", "64", "2", "5", "6"]).with_author(config.display.author.clone());
    let mut launcher = Launcher::new(console, config);

    launcher.run().unwrap();

    let prompts = launcher.console().source().prompts();
    assert!(prompts.iter().any(|p| p.contains("Mark for Zed")));

    let out = printed(launcher.console());
    assert!(out.contains("Zed"));
    assert!(out.contains("64"));
    assert!(out.contains("By Ada"));
}

#[test]
fn test_app_kind_launch_matches_menu_label() {
    for kind in AppKind::ALL {
        let mut console = console(&[]);
        let err = kind.launch(&Config::default(), &mut console).unwrap_err();
        assert!(err.is_end_of_input());
    }
}
