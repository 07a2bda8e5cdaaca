use crate::client::CliClient;
use crate::commands::TYPEWRITER_DELAY_MS;
use crate::error::Result;
use crate::form::{ChatbotForm, FormState};
use crate::utils::typewriter::typewriter;
use std::io::{self, Write};
use tokio::io::{AsyncBufReadExt, BufReader};

const SAMPLE_COMMAND: &str = ":sample";

#[derive(Debug, PartialEq, Eq)]
enum ChatLine<'a> {
    Exit,
    Sample,
    Scenario(&'a str),
}

fn parse_chat_line(line: &str) -> ChatLine<'_> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
        ChatLine::Exit
    } else if line == SAMPLE_COMMAND {
        ChatLine::Sample
    } else {
        ChatLine::Scenario(line)
    }
}

pub async fn handle(cli_client: &CliClient) -> Result<()> {
    println!("Tell me what you are going through (or 'exit' to quit, '{SAMPLE_COMMAND}' for an example):");

    let mut form = ChatbotForm::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let input = match lines.next_line().await {
            Ok(Some(input)) => input,
            Ok(None) => break,
            Err(_) => {
                println!("Failed to read input. Try again.");
                continue;
            }
        };

        match parse_chat_line(&input) {
            ChatLine::Exit => {
                println!("Take care.");
                break;
            }
            ChatLine::Sample => {
                form.load_sample();
                println!("{}", form.input());
            }
            ChatLine::Scenario(text) => form.set_input(text),
        }
        if !form.can_submit() {
            continue;
        }

        println!("{}", FormState::Loading);
        match form.submit(cli_client).await {
            FormState::Success(response) => {
                typewriter(response, TYPEWRITER_DELAY_MS).await?;
                println!();
            }
            state => println!("{state}"),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exit_words() {
        assert_eq!(parse_chat_line("exit\n"), ChatLine::Exit);
        assert_eq!(parse_chat_line("  QUIT "), ChatLine::Exit);
    }

    #[test]
    fn test_parse_sample_command() {
        assert_eq!(parse_chat_line(":sample"), ChatLine::Sample);
    }

    #[test]
    fn test_parse_scenario_is_trimmed() {
        assert_eq!(
            parse_chat_line("  I miss my friends back home \r\n"),
            ChatLine::Scenario("I miss my friends back home")
        );
        assert_eq!(parse_chat_line("   "), ChatLine::Scenario(""));
    }
}
