use crate::client::CliClient;
use crate::commands::TYPEWRITER_DELAY_MS;
use crate::error::{ErrorCli, Result};
use crate::form::{ChatbotForm, FormState};
use crate::utils::typewriter::typewriter;

pub async fn handle(cli_client: &CliClient, text: Option<String>, sample: bool) -> Result<()> {
    let mut form = ChatbotForm::new();
    if sample {
        form.load_sample();
        println!("Scenario: {}", form.input());
    } else {
        form.set_input(text.unwrap_or_default());
    }

    if !form.can_submit() {
        return Err(ErrorCli::EmptyScenario);
    }

    println!("{}", FormState::Loading);
    match form.submit(cli_client).await {
        FormState::Success(response) => {
            typewriter(response, TYPEWRITER_DELAY_MS).await?;
            println!();
            Ok(())
        }
        FormState::Error(message) => Err(ErrorCli::Generation(message.clone())),
        FormState::Idle | FormState::Loading => Ok(()),
    }
}
