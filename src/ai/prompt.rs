//! Reusable prompts using Handlebars for templating. Handlebars adds
//! additional security controls since it can't do much out of the box
//! without registering your own helpers, which is ideal for templates
//! that wrap untrusted conversation text.

use std::fmt;

use handlebars::Handlebars;

#[derive(Debug)]
pub enum Prompt {
    LegalAssistant,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl From<Prompt> for String {
    fn from(item: Prompt) -> String {
        format!("{:?}", item)
    }
}

// Triple braces so the legal text is embedded verbatim, without HTML
// escaping.
const LEGAL_ASSISTANT_PROMPT: &str = r"You are a helpful AI assistant that provides information about legal rights in The Gambia.
Use the following legal information to answer questions about Gambian rights and laws.
Always be accurate and cite relevant articles or sections when possible.

Legal Information:
{{{corpus}}}

Instructions:
- Answer questions about rights and laws in The Gambia
- Be clear and easy to understand
- Cite relevant constitutional articles or legal provisions
- If you don't know something, say so
- Focus on helping citizens understand their rights
";

pub fn templates<'a>() -> Handlebars<'a> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry
        .register_template_string(&Prompt::LegalAssistant.to_string(), LEGAL_ASSISTANT_PROMPT)
        .expect("Failed to register template");
    registry
}
