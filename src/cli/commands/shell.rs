//! Interactive grade-tracking session
//!
//! Courses and grades live in memory for the lifetime of the session; there
//! is no persistence between runs. Input validation happens here at the
//! boundary so the store only ever sees well-formed requests it can still
//! reject on its own terms.

use std::io::{self, BufRead, Write};

use gradebook::core::engine::GradeStore;
use gradebook::core::report;
use gradebook::debug;

const HELP: &str = "\
Commands:
  add-course <name> <credits>   Track a new course (credits 1-6)
  add-grade <name> <grade>      Record a grade percentage (0-100)
  what-if <name> <grade>        Project a grade without recording it
  remove <name>                 Stop tracking a course
  list                          List tracked courses
  gpa                           Show the current GPA
  report                        Show the full grade report
  clear                         Remove all courses and grades
  help                          Show this help
  quit                          End the session";

/// Whether the session should keep reading commands
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Continue,
    Quit,
}

/// Run the interactive session until quit or end of input
pub fn run(store: &mut dyn GradeStore) {
    println!("gradebook interactive session - type 'help' for commands");

    let stdin = io::stdin();
    loop {
        print!("gradebook> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break, // end of input
            Ok(_) => {}
        }

        if dispatch(store, line.trim()) == Outcome::Quit {
            break;
        }
    }

    println!("Goodbye!");
}

/// Execute one command line against the store
fn dispatch(store: &mut dyn GradeStore, line: &str) -> Outcome {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&command, args)) = tokens.split_first() else {
        return Outcome::Continue;
    };
    debug!("shell command: {command} ({} args)", args.len());

    match command {
        "add-course" => add_course(store, args),
        "add-grade" => add_grade(store, args),
        "what-if" => what_if(store, args),
        "remove" => remove_course(store, args),
        "list" => list_courses(store),
        "gpa" => println!("GPA: {:.2}", store.gpa()),
        "report" => print!("{}", report::render(store)),
        "clear" => {
            store.clear_all();
            println!("✓ All courses removed");
        }
        "help" => println!("{HELP}"),
        "quit" | "exit" => return Outcome::Quit,
        other => eprintln!("Unknown command '{other}'; type 'help' for commands"),
    }
    Outcome::Continue
}

/// Split `args` into a multi-word name and a trailing value token
fn name_and_value<'a>(args: &[&'a str]) -> Option<(String, &'a str)> {
    let (&value, name_tokens) = args.split_last()?;
    if name_tokens.is_empty() {
        return None;
    }
    Some((name_tokens.join(" "), value))
}

fn add_course(store: &mut dyn GradeStore, args: &[&str]) {
    let Some((name, credits_token)) = name_and_value(args) else {
        eprintln!("Usage: add-course <name> <credits>");
        return;
    };
    let Ok(credits) = credits_token.parse::<u32>() else {
        eprintln!("Credits must be a whole number, got '{credits_token}'");
        return;
    };
    match store.add_course(&name, credits) {
        Ok(()) => println!("✓ Added '{name}' ({credits} credits)"),
        Err(e) => eprintln!("✗ {e}"),
    }
}

fn add_grade(store: &mut dyn GradeStore, args: &[&str]) {
    let Some((name, grade_token)) = name_and_value(args) else {
        eprintln!("Usage: add-grade <name> <grade>");
        return;
    };
    let Ok(grade) = grade_token.parse::<f64>() else {
        eprintln!("Grade must be a number, got '{grade_token}'");
        return;
    };
    match store.add_grade(&name, grade) {
        Ok(()) => println!(
            "✓ Recorded {grade} for '{name}' (average now {:.2})",
            store.course_average(&name)
        ),
        Err(e) => eprintln!("✗ {e}"),
    }
}

fn what_if(store: &mut dyn GradeStore, args: &[&str]) {
    let Some((name, grade_token)) = name_and_value(args) else {
        eprintln!("Usage: what-if <name> <grade>");
        return;
    };
    let Ok(grade) = grade_token.parse::<f64>() else {
        eprintln!("Grade must be a number, got '{grade_token}'");
        return;
    };
    match store.what_if_grade(&name, grade) {
        Ok(projection) => {
            println!("If '{name}' received a {grade}:");
            println!(
                "  Course average: {:.2}% -> {:.2}% ({})",
                store.course_average(&name),
                projection.course_average,
                projection.letter
            );
            println!("  GPA: {:.2} -> {:.2}", store.gpa(), projection.gpa);
        }
        Err(e) => eprintln!("✗ {e}"),
    }
}

fn remove_course(store: &mut dyn GradeStore, args: &[&str]) {
    if args.is_empty() {
        eprintln!("Usage: remove <name>");
        return;
    }
    let name = args.join(" ");

    if !store.course_names().contains(&name) {
        // remove is idempotent but there is no point asking about nothing
        println!("Course '{name}' is not tracked");
        return;
    }

    print!("Remove '{name}' and all its grades? (y/N): ");
    io::stdout().flush().ok();
    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    if response.trim().eq_ignore_ascii_case("y") || response.trim().eq_ignore_ascii_case("yes") {
        store.remove_course(&name);
        println!("✓ Removed '{name}'");
    } else {
        println!("Removal cancelled");
    }
}

fn list_courses(store: &dyn GradeStore) {
    let names = store.course_names();
    if names.is_empty() {
        println!("No courses tracked yet");
        return;
    }
    for name in names {
        let credits = store.course_credits(&name);
        let unit = if credits == 1 { "credit" } else { "credits" };
        println!("  {name} ({credits} {unit})");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradebook::core::engine::FallbackStore;

    #[test]
    fn name_and_value_joins_multiword_names() {
        assert_eq!(
            name_and_value(&["Computer", "Science", "101", "3"]),
            Some(("Computer Science 101".to_string(), "3"))
        );
        assert_eq!(name_and_value(&["Math", "4"]), Some(("Math".to_string(), "4")));
        assert_eq!(name_and_value(&["4"]), None);
        assert_eq!(name_and_value(&[]), None);
    }

    #[test]
    fn dispatch_mutates_the_store() {
        let mut store = FallbackStore::new();
        assert_eq!(dispatch(&mut store, "add-course Linear Algebra 4"), Outcome::Continue);
        assert_eq!(dispatch(&mut store, "add-grade Linear Algebra 95"), Outcome::Continue);

        assert_eq!(store.course_names(), vec!["Linear Algebra"]);
        assert_eq!(store.course_credits("Linear Algebra"), 4);
        assert!((store.course_average("Linear Algebra") - 95.0).abs() < 1e-9);
    }

    #[test]
    fn dispatch_quits_on_quit() {
        let mut store = FallbackStore::new();
        assert_eq!(dispatch(&mut store, "quit"), Outcome::Quit);
        assert_eq!(dispatch(&mut store, "exit"), Outcome::Quit);
        assert_eq!(dispatch(&mut store, ""), Outcome::Continue);
    }

    #[test]
    fn bad_input_leaves_store_unchanged() {
        let mut store = FallbackStore::new();
        dispatch(&mut store, "add-course 3");
        dispatch(&mut store, "add-course Math seven");
        dispatch(&mut store, "add-grade Math 90");

        assert!(store.course_names().is_empty());
    }
}
