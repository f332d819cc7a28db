//! Outreach email drafts for a single lead.

use std::future::Future;

use crate::domain::lead::Lead;

pub mod gemini;

pub use gemini::{DraftError, GeminiDrafter};

pub const EMPTY_REPLY_MESSAGE: &str = "Could not generate email.";
pub const FAILURE_MESSAGE: &str = "Error generating draft. Please try again later.";

/// Produces an email draft for a lead.
///
/// Drafting never fails from the caller's point of view: implementations fall
/// back to canned text and log whatever went wrong.
pub trait EmailDrafter {
    fn draft(&self, lead: &Lead) -> impl Future<Output = String> + Send;
}

fn company_or_default(lead: &Lead) -> &str {
    lead.company.as_deref().unwrap_or("your company")
}

/// Prompt sent to the text-generation model.
pub fn outreach_prompt(lead: &Lead) -> String {
    format!(
        "You are a professional sales representative.\n\
         Write a personalized, concise, and professional outreach email to a potential client.\n\
         \n\
         Lead Details:\n\
         Name: {name}\n\
         Company: {company}\n\
         Source of interest: {source}\n\
         Current Status: {status}\n\
         \n\
         The email should be friendly but business-focused. Ask for a brief call next week.\n\
         Do not include placeholders. Output only the email subject and body.",
        name = lead.name,
        company = company_or_default(lead),
        source = lead.source,
        status = lead.status,
    )
}

/// Canned draft used when no model is configured.
pub fn fallback_draft(lead: &Lead) -> String {
    let company = company_or_default(lead);
    format!(
        "Subject: Partnership Opportunity - {company}\n\n\
         Hi {first_name},\n\n\
         I noticed you're interested in our services via {source}. \
         I'd love to chat about how we can help {company}.\n\n\
         (Note: configure gemini_api_key to generate real AI responses)",
        first_name = lead.first_name(),
        source = lead.source,
    )
}
