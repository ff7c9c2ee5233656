//! Terminal front-end — stdin/stdout loop driving the stage controller.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::config::AppConfig;
use crate::error::{QuizError, Result};
use crate::generator::{GeneratorConfig, MessageGenerator};
use crate::llm::LlmProvider;
use crate::quiz::{PreferenceCollector, StepOutcome};
use crate::stage::{Stage, StageController};
use crate::tree::{Anchor, TreeScene};

/// The interactive app: owns the controller and the generator, reads lines
/// from stdin, and prints each screen.
pub struct App {
    controller: StageController,
    generator: MessageGenerator,
}

impl App {
    pub fn new(llm: Arc<dyn LlmProvider>, config: &AppConfig) -> Self {
        let generator_config = GeneratorConfig {
            request_timeout: config.request_timeout,
            ..Default::default()
        };
        Self {
            controller: StageController::new(config.growing_floor),
            generator: MessageGenerator::new(llm, generator_config),
        }
    }

    /// Run until the user quits or stdin closes.
    pub async fn run(&mut self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            match self.controller.stage() {
                Stage::Start => {
                    if !self.start_screen(&mut lines).await? {
                        return Ok(());
                    }
                }
                Stage::Quiz => {
                    if !self.quiz_screen(&mut lines).await? {
                        return Ok(());
                    }
                }
                Stage::Growing => self.growing_screen().await?,
                Stage::Tree => {
                    if !self.tree_screen(&mut lines).await? {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Returns false when the user quit or stdin closed.
    async fn start_screen(&mut self, lines: &mut Lines<BufReader<Stdin>>) -> Result<bool> {
        println!();
        println!("      Secret Santa's Magical Tree");
        println!();
        println!("Discover the messages Santa left just for you.");
        println!("Answer a few questions to see your tree bloom.");
        println!();
        eprint!("Press Enter to begin (or type 'quit'): ");

        match lines.next_line().await? {
            Some(line) if line.trim() == "quit" => Ok(false),
            Some(_) => {
                self.controller.begin()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn quiz_screen(&mut self, lines: &mut Lines<BufReader<Stdin>>) -> Result<bool> {
        let mut collector = PreferenceCollector::new();

        while let Some(question) = collector.current_question() {
            println!();
            println!("{}", question.prompt);
            println!("  ({})", question.placeholder);
            eprint!(
                "Journey Step {} of {} > ",
                collector.step() + 1,
                collector.total()
            );

            let Some(line) = lines.next_line().await? else {
                return Ok(false);
            };

            match collector.answer(&line) {
                Ok(StepOutcome::Advanced(_)) => {}
                Ok(StepOutcome::Complete(prefs)) => {
                    self.controller.complete_quiz(prefs)?;
                    return Ok(true);
                }
                Err(QuizError::EmptyAnswer) => {
                    eprintln!("A blank answer won't grow a tree. Try again.");
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(true)
    }

    async fn growing_screen(&mut self) -> Result<()> {
        println!();
        println!("Consulting the magic list...");
        println!("Polishing your ornaments...");
        self.controller.grow(&self.generator).await?;
        Ok(())
    }

    async fn tree_screen(&mut self, lines: &mut Lines<BufReader<Stdin>>) -> Result<bool> {
        // Tree is only reachable with both present; the controller enforces it.
        let (Some(prefs), Some(bundle)) =
            (self.controller.preferences(), self.controller.bundle())
        else {
            tracing::error!("Tree stage without record and bundle");
            self.controller.reset()?;
            return Ok(true);
        };
        let scene = TreeScene::new(prefs, bundle);

        println!();
        println!("        Your Festive Gift");
        println!();
        print!("{}", scene.render());
        println!();
        println!("Enter 1-5 to peek at an ornament, 's' for the star,");
        println!("'reset' to grow another memory, 'quit' to leave.");

        loop {
            eprint!("> ");
            let Some(line) = lines.next_line().await? else {
                return Ok(false);
            };
            let command = line.trim();
            match command {
                "quit" => return Ok(false),
                "reset" => {
                    self.controller.reset()?;
                    return Ok(true);
                }
                "s" => {
                    if let Some(message) = scene.reveal(Anchor::Star) {
                        println!("  ★ {message}");
                    }
                }
                _ => match command.parse::<usize>() {
                    Ok(n @ 1..=5) => {
                        if let Some(message) = scene.reveal(Anchor::Ornament(n - 1)) {
                            println!("  {n}. {message}");
                        }
                    }
                    _ => eprintln!("Try 1-5, 's', 'reset', or 'quit'."),
                },
            }
        }
    }
}
