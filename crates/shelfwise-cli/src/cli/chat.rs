//! Interactive chat loop for the retail insight assistant.
//!
//! Reads prompts, feeds them through the conversation manager, and
//! renders replies. Slash commands map the quick actions onto canned
//! prompts that ride the identical send path as typed input.

use console::style;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};

use shelfwise_core::assistant::quick_actions::{self, QuickAction, QUICK_ACTIONS};
use shelfwise_core::assistant::{ConversationManager, OfflineProvider, SendOutcome};
use shelfwise_types::chat::MessageRole;

use crate::state::AppState;

/// Slash commands available in the chat loop.
#[derive(Debug, PartialEq)]
enum ChatCommand {
    /// Show available commands.
    Help,
    /// Print the transcript so far.
    History,
    /// Exit the chat session.
    Exit,
    /// Send a quick-action canned prompt.
    Quick(&'static QuickAction),
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    let name = trimmed.strip_prefix('/')?.to_lowercase();

    match name.as_str() {
        "help" | "h" | "?" => Some(ChatCommand::Help),
        "history" => Some(ChatCommand::History),
        "exit" | "quit" | "q" => Some(ChatCommand::Exit),
        other => match quick_actions::find(other) {
            Some(action) => Some(ChatCommand::Quick(action)),
            None => Some(ChatCommand::Unknown(format!("/{other}"))),
        },
    }
}

fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!("  {}      Show this help message", style("/help").cyan());
    println!("  {}   Print the conversation so far", style("/history").cyan());
    println!("  {}      End the chat session", style("/exit").cyan());
    println!();
    println!("  {}", style("Quick actions:").bold());
    println!();
    for action in QUICK_ACTIONS {
        println!(
            "  {}  {} - {}",
            style(format!("/{:<10}", action.command)).cyan(),
            action.title,
            style(action.description).dim()
        );
    }
    println!();
}

fn print_message(role: MessageRole, content: &str) {
    let label = match role {
        MessageRole::User => style("you").cyan().bold(),
        MessageRole::Assistant => style("assistant").magenta().bold(),
    };
    println!();
    println!("  {label}");
    for line in content.lines() {
        println!("  {line}");
    }
}

/// Run the interactive chat loop.
pub async fn run_chat(state: &AppState) -> anyhow::Result<()> {
    let provider = OfflineProvider::from_config(&state.config);
    let manager = ConversationManager::new(provider);

    println!();
    println!(
        "  {} {}",
        style("Shelfwise assistant").magenta().bold(),
        style("(offline demo mode)").dim()
    );
    println!(
        "  Type a question, use {} for quick actions, {} to leave.",
        style("/help").cyan(),
        style("/exit").cyan()
    );

    // Seeded greeting
    let session = manager.snapshot().await;
    let greeting = &session.transcript()[0];
    print_message(greeting.role, &greeting.content);

    loop {
        println!();
        let input: String = Input::new()
            .with_prompt(style("you").cyan().to_string())
            .allow_empty(true)
            .interact_text()?;

        let prompt = match parse(&input) {
            Some(ChatCommand::Help) => {
                print_help();
                continue;
            }
            Some(ChatCommand::History) => {
                let session = manager.snapshot().await;
                for message in session.transcript() {
                    print_message(message.role, &message.content);
                }
                continue;
            }
            Some(ChatCommand::Exit) => break,
            Some(ChatCommand::Quick(action)) => {
                println!("  {}", style(action.prompt).dim());
                action.prompt.to_string()
            }
            Some(ChatCommand::Unknown(cmd)) => {
                println!(
                    "  {} Unknown command {}. Try {}.",
                    style("!").yellow().bold(),
                    style(cmd).cyan(),
                    style("/help").cyan()
                );
                continue;
            }
            None => input,
        };

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("static template"),
        );
        spinner.set_message("thinking...");
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));

        let outcome = manager.send(&prompt).await;
        spinner.finish_and_clear();

        match outcome {
            Ok(SendOutcome::Replied(message)) => {
                print_message(message.role, &message.content);
            }
            Ok(SendOutcome::IgnoredEmpty) => {}
            Ok(SendOutcome::IgnoredBusy) => {
                println!(
                    "  {} A request is still in flight; try again in a moment.",
                    style("!").yellow().bold()
                );
            }
            Err(err) => {
                // Non-fatal: the session is idle again, retry is just
                // another prompt.
                println!(
                    "  {} Failed to get a response: {err}",
                    style("!").yellow().bold()
                );
            }
        }
    }

    println!();
    println!("  {} Chat ended.", style("✓").green().bold());
    Ok(())
}
