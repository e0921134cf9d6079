use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::ai::chat::{Chat, Transcript};
use crate::core::{AppConfig, ChatFeature};
use crate::openai::{Message, Role};

pub async fn run() -> Result<()> {
    let config = AppConfig::default();

    // Same fail-closed startup as the server: without a credential
    // and a corpus there is no chat session at all
    let (api_key, corpus) = match ChatFeature::init(&config) {
        ChatFeature::Ready { api_key, corpus } => (api_key, corpus),
        ChatFeature::Disabled(reason) => {
            eprintln!("{}", reason);
            return Ok(());
        }
    };

    let chat = Chat::new(
        &config.openai_api_hostname,
        &api_key,
        &config.openai_model,
        &corpus,
    );
    let mut transcript = Transcript::new();

    let mut rl = DefaultEditor::new().expect("Editor failed");

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                let reply = match chat.next_msg(&transcript, &line).await {
                    Ok(reply) => reply,
                    // A failed turn is shown and recorded like any
                    // other reply; the session stays usable
                    Err(err) => format!("Sorry, I encountered an error: {}", err),
                };
                println!("{}", reply);
                transcript.push(Message::new(Role::User, &line));
                transcript.push(Message::new(Role::Assistant, &reply));
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
