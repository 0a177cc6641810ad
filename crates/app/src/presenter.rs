use std::io::Write as _;
use std::time::Duration;

use colored::Colorize;
use quiz_core::model::Question;
use services::QuizPresenter;

/// Renders quiz progress to the terminal.
pub struct TerminalPresenter;

impl QuizPresenter for TerminalPresenter {
    fn show_question(&mut self, number: usize, total: usize, question: &Question) {
        println!();
        println!("{}", format!("Question {number} of {total}").bold());
        println!("{}", question.text());
        for option in question.options() {
            println!("{option}");
        }
        print!("Your answer (A/B/C/D): ");
        let _ = std::io::stdout().flush();
    }

    fn show_remaining(&mut self, remaining: Duration) {
        println!("Time remaining: {:.1} seconds", remaining.as_secs_f64());
    }

    fn time_up_between_questions(&mut self) {
        println!();
        println!("{}", "Time's up! The quiz has ended.".red());
    }

    fn time_up_waiting(&mut self) {
        println!();
        println!("{}", "Time's up while waiting for your answer!".red());
    }
}
