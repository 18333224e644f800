// session.rs

use cli_calculator::menu::{render_menu, SELECTION_PROMPT};
use cli_calculator::repl::{GOODBYE, PAUSE_PROMPT, WELCOME};
use cli_calculator::{CalculatorSession, LineSource, Repl, SessionConfig};
use std::collections::VecDeque;
use std::io;

/// Feeds canned answers and remembers every prompt it was asked.
struct Script {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl Script {
    fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|s| s.to_string()).collect(),
            prompts: Vec::new(),
        }
    }
}

impl LineSource for Script {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }
}

struct Outcome {
    prompts: Vec<String>,
    output: String,
    session: CalculatorSession,
    unread: usize,
}

impl Outcome {
    fn number_prompts(&self) -> usize {
        self.prompts
            .iter()
            .filter(|p| p.starts_with("Enter number"))
            .count()
    }
}

fn run_with(answers: &[&str], config: SessionConfig) -> Outcome {
    let mut repl = Repl::new(Script::new(answers), Vec::new(), config);
    repl.run().unwrap();
    let (script, out, session) = repl.into_parts();
    Outcome {
        prompts: script.prompts,
        output: String::from_utf8(out).unwrap(),
        session,
        unread: script.answers.len(),
    }
}

fn run(answers: &[&str]) -> Outcome {
    run_with(answers, SessionConfig::default())
}

#[test]
fn exit_terminates_immediately() {
    let outcome = run(&["0", "1", "2", "3"]);
    assert_eq!(outcome.prompts, vec![SELECTION_PROMPT.to_string()]);
    assert_eq!(outcome.unread, 3);
    assert_eq!(
        outcome.output,
        format!("{}\n{}\n{}\n", WELCOME, render_menu(), GOODBYE)
    );
    assert!(!outcome.session.running);
}

#[test]
fn end_of_input_ends_the_session() {
    let outcome = run(&[]);
    assert!(outcome.output.ends_with("Goodbye!\n"));

    let outcome = run(&["1", "5"]);
    assert_eq!(outcome.number_prompts(), 2);
    assert!(outcome.session.history.is_empty());
}

#[test]
fn each_operation_prompts_for_its_arity() {
    let cases = [("1", 2), ("2", 2), ("3", 2), ("4", 2), ("5", 2), ("6", 1), ("7", 1)];
    for (code, arity) in cases {
        let mut answers = vec![code];
        answers.extend(std::iter::repeat("2").take(arity));
        answers.push("0");
        let outcome = run(&answers);
        assert_eq!(outcome.number_prompts(), arity, "code {}", code);
        assert_eq!(outcome.prompts[1], "Enter number 1: ");
        assert_eq!(outcome.session.history.len(), 1, "code {}", code);
        assert_eq!(outcome.unread, 0);
    }
}

#[test]
fn history_lists_calculations_in_order() {
    let outcome = run(&["1", "1", "2", "2", "5", "3", "8", "0"]);
    assert_eq!(outcome.session.history.all(), ["1 + 2 = 3", "5 - 3 = 2"]);
    assert!(outcome
        .output
        .contains("All operations performed so far:\n\t1 + 2 = 3\n\t5 - 3 = 2\n"));
}

#[test]
fn feedback_line_matches_history_entry() {
    let outcome = run(&["5", "2", "-3", "0"]);
    assert_eq!(outcome.session.history.all(), ["pow(2, -3) = 0.125"]);
    assert!(outcome.output.contains("\n\npow(2, -3) = 0.125\n"));
}

#[test]
fn roots_in_a_session() {
    let outcome = run(&["6", "9", "7", "-27", "0"]);
    assert_eq!(outcome.session.history.len(), 2);
    assert_eq!(outcome.session.history.all()[0], "sqrt(9) = 3");
    assert_eq!(outcome.session.history.all()[1], "cbrt(-27) = -3");
    assert!(outcome.output.contains("\n\ncbrt(-27) = -3\n"));
}

#[test]
fn empty_history_message() {
    let outcome = run(&["8", "0"]);
    assert!(outcome.output.contains("\nNo operations performed yet.\n"));
    assert!(!outcome.output.contains("All operations performed so far:"));
}

#[test]
fn divide_by_zero_leaves_history_untouched() {
    let outcome = run(&["4", "5", "0", "8", "0"]);
    assert!(outcome.session.history.is_empty());
    assert!(outcome
        .output
        .contains("Error executing operation:\n\tdivision by zero\n"));
    assert!(outcome.output.contains("No operations performed yet."));
}

#[test]
fn negative_square_root_is_reported() {
    let outcome = run(&["6", "-4", "0"]);
    assert!(outcome.session.history.is_empty());
    assert!(outcome
        .output
        .contains("cannot compute square root of negative number -4"));
}

#[test]
fn fractional_power_of_negative_base_is_reported() {
    let outcome = run(&["5", "-8", "0.5", "0"]);
    assert!(outcome.session.history.is_empty());
    assert!(outcome.output.contains("pow(-8, 0.5) is not a real number"));
}

#[test]
fn power_overflow_is_reported_and_not_recorded() {
    let outcome = run(&["5", "10", "400", "8", "0"]);
    assert!(outcome.session.history.is_empty());
    assert!(outcome.output.contains(
        "Error executing operation:\n\tpow(10, 400) is too large to represent\n"
    ));
    assert!(!outcome.output.contains("= inf"));
    assert!(outcome.output.contains("No operations performed yet."));
}

#[test]
fn unknown_selection_consumes_only_the_selection() {
    let outcome = run(&["9", "0"]);
    assert_eq!(
        outcome.prompts,
        vec![SELECTION_PROMPT.to_string(), SELECTION_PROMPT.to_string()]
    );
    assert!(outcome
        .output
        .contains("'9' is not a valid option, please try again.\n"));
    assert_eq!(outcome.output.matches("0. Exit").count(), 2);
}

#[test]
fn invalid_number_aborts_and_pauses() {
    let outcome = run(&["1", "abc", "", "0"]);
    assert_eq!(outcome.number_prompts(), 1);
    assert!(outcome.prompts.contains(&PAUSE_PROMPT.to_string()));
    assert!(outcome
        .output
        .contains("\n\nError:\n\tinvalid number 'abc' for argument 1\n"));
    assert!(outcome.session.history.is_empty());
    assert_eq!(outcome.unread, 0);
}

#[test]
fn invalid_second_number_discards_the_first() {
    let config = SessionConfig {
        pause_on_invalid_number: false,
    };
    let outcome = run_with(&["3", "4", "x", "0"], config);
    assert_eq!(outcome.number_prompts(), 2);
    assert!(!outcome.prompts.contains(&PAUSE_PROMPT.to_string()));
    assert!(outcome.output.contains("invalid number 'x' for argument 2"));
    assert!(outcome.session.history.is_empty());
}

#[test]
fn history_counts_only_successes_across_many_errors() {
    let config = SessionConfig {
        pause_on_invalid_number: false,
    };
    let outcome = run_with(
        &[
            "1", "1", "1", // ok
            "42", // unknown
            "4", "1", "0", // domain error
            "2", "nope", // parse error
            "6", "-1", // domain error
            "3", "2", "3", // ok
            "8", // history
            "", // unknown
            "1", "1", "1", // ok, duplicate entry
            "0",
        ],
        config,
    );
    assert_eq!(
        outcome.session.history.all(),
        ["1 + 1 = 2", "2 * 3 = 6", "1 + 1 = 2"]
    );
    assert_eq!(outcome.unread, 0);
}
