//! Interactive shell: the main menu and the quiz flow.

use std::io::Write as _;

use colored::Colorize;
use services::{AnswerSource, AppServices, InputError, LEADERBOARD_SIZE, QuizError};

use crate::console::Console;
use crate::presenter::TerminalPresenter;

pub struct Shell {
    pub(crate) services: AppServices,
    pub(crate) console: Console,
}

impl Shell {
    #[must_use]
    pub fn new(services: AppServices, console: Console) -> Self {
        Self { services, console }
    }

    /// Runs the menu loop until the user exits.
    ///
    /// # Errors
    ///
    /// Returns `InputError` if stdin closes while a prompt is waiting.
    pub async fn run(&mut self) -> Result<(), InputError> {
        println!("{}", "Welcome to the Rust Quiz!".bold());

        loop {
            println!();
            println!("Main Menu:");
            println!("1. User Login");
            println!("2. Admin Mode");
            println!("3. View Leaderboard");
            println!("4. Exit");

            match self.read_menu_choice("Choose an option: ", 1, 4).await? {
                1 => self.login_flow().await?,
                2 => self.admin_flow().await?,
                3 => self.show_leaderboard().await,
                _ => {
                    println!("Thank you for using the quiz app!");
                    return Ok(());
                }
            }
        }
    }

    /// Prompts until a number within `[min, max]` arrives. Anything else
    /// re-prompts in place.
    pub(crate) async fn read_menu_choice(
        &mut self,
        prompt: &str,
        min: u32,
        max: u32,
    ) -> Result<u32, InputError> {
        print!("{prompt}");
        let _ = std::io::stdout().flush();
        loop {
            let line = self.console.read_line().await?;
            match line.trim().parse::<u32>() {
                Ok(n) if (min..=max).contains(&n) => return Ok(n),
                _ => {
                    print!("Invalid input. Please enter a number between {min} and {max}: ");
                    let _ = std::io::stdout().flush();
                }
            }
        }
    }

    pub(crate) async fn prompt_line(&mut self, prompt: &str) -> Result<String, InputError> {
        print!("{prompt}");
        let _ = std::io::stdout().flush();
        self.console.read_line().await
    }

    async fn login_flow(&mut self) -> Result<(), InputError> {
        println!();
        println!("User Login:");
        let raw = self.prompt_line("Enter username: ").await?;

        let quiz = self.services.quiz_loop();
        let login = match quiz.login(&raw).await {
            Ok(login) => login,
            Err(QuizError::AlreadyAttempted) => {
                println!(
                    "You have already attempted the quiz. Only one attempt allowed per user."
                );
                return Ok(());
            }
            Err(QuizError::Username(_)) => {
                println!("Username must not be empty.");
                return Ok(());
            }
            Err(err) => {
                println!("Error accessing user database: {err}");
                return Ok(());
            }
        };
        if login.newly_registered {
            println!("New user registered!");
        }

        println!();
        println!(
            "You have {} seconds to complete the quiz!",
            quiz.duration().num_seconds()
        );

        let mut presenter = TerminalPresenter;
        match quiz
            .run_quiz(login.username, &mut self.console, &mut presenter)
            .await
        {
            Ok(outcome) => {
                println!();
                println!("Quiz finished!");
                println!("Score: {}/{}", outcome.score, outcome.total_presented);
                println!("Time taken: {} seconds", outcome.elapsed_secs);
            }
            Err(QuizError::EmptyBank) => println!("No questions found."),
            Err(QuizError::Input(err)) => return Err(err),
            Err(err) => println!("Error running quiz: {err}"),
        }

        // An answer typed after the deadline must not leak into the menu.
        self.console.discard_pending();
        println!();
        println!("Press Enter to return to main menu...");
        self.console.read_line().await?;
        self.console.discard_pending();
        Ok(())
    }

    async fn show_leaderboard(&mut self) {
        match self.services.leaderboard().top().await {
            Ok(entries) if entries.is_empty() => println!("No quiz results yet."),
            Ok(entries) => {
                println!();
                println!("Leaderboard (Top {LEADERBOARD_SIZE}):");
                for (i, record) in entries.iter().enumerate() {
                    println!("{}. {}", i + 1, record);
                }
            }
            Err(err) => println!("Error reading leaderboard: {err}"),
        }
    }
}
