//! Admin submenu: password gate and question/history maintenance.

use services::{AdminError, InputError};

use crate::shell::Shell;

impl Shell {
    pub(crate) async fn admin_flow(&mut self) -> Result<(), InputError> {
        println!();
        let password = self.prompt_line("Enter admin password: ").await?;
        let admin = self.services.admin();
        if !admin.verify_password(&password) {
            println!("Invalid password!");
            return Ok(());
        }

        loop {
            println!();
            println!("Admin Menu:");
            println!("1. Add Question");
            println!("2. View All Questions");
            println!("3. View All Results");
            println!("4. Back to Main Menu");

            match self.read_menu_choice("Choose an option: ", 1, 4).await? {
                1 => self.add_question_flow().await?,
                2 => self.list_questions().await,
                3 => self.list_results().await,
                _ => return Ok(()),
            }
        }
    }

    async fn add_question_flow(&mut self) -> Result<(), InputError> {
        println!();
        println!("Add New Question:");
        let text = self.prompt_line("Enter question text: ").await?;
        let a = self.prompt_line("Enter option A: ").await?;
        let b = self.prompt_line("Enter option B: ").await?;
        let c = self.prompt_line("Enter option C: ").await?;
        let d = self.prompt_line("Enter option D: ").await?;
        let correct = self.prompt_line("Enter correct option (A/B/C/D): ").await?;

        match self
            .services
            .admin()
            .add_question(&text, [a, b, c, d], &correct)
            .await
        {
            Ok(()) => println!("Question added successfully!"),
            Err(AdminError::InvalidCorrectOption) => {
                println!("Invalid option! Must be A, B, C, or D");
            }
            Err(err) => println!("Error adding question: {err}"),
        }
        Ok(())
    }

    async fn list_questions(&mut self) {
        match self.services.admin().list_questions().await {
            Ok(questions) if questions.is_empty() => println!("No questions found."),
            Ok(questions) => {
                println!();
                println!("All Questions:");
                for (i, question) in questions.iter().enumerate() {
                    println!();
                    println!("Q{}: {}", i + 1, question.text());
                    for option in question.options() {
                        println!("{option}");
                    }
                    println!("Correct answer: {}", question.correct());
                }
            }
            Err(err) => println!("Error reading questions: {err}"),
        }
    }

    async fn list_results(&mut self) {
        match self.services.admin().list_results().await {
            Ok(records) => {
                println!();
                println!("All Quiz Results:");
                for record in records {
                    println!("{record}");
                }
            }
            Err(err) => println!("Error reading results: {err}"),
        }
    }
}
