//! Prompt construction for the driver and swarm agents

use crate::types::DriverOptions;

/// System prompt for the candidate generation model
pub const DRIVER_SYSTEM_PROMPT: &str = "You are a domain name brainstorming expert. \
You invent short, brandable, easy-to-spell domain names that match a business's \
identity. You always answer with a single JSON object and nothing else.";

/// System prompt for the evaluation model
pub const SWARM_SYSTEM_PROMPT: &str = "You are a domain name quality reviewer. \
You judge candidate domains for pronounceability, memorability, brand fit and \
email friendliness, scoring each between 0 and 1. You always answer with a \
single JSON object and nothing else.";

/// Build the user prompt for one generation batch
pub fn format_driver_prompt(options: &DriverOptions) -> String {
    let mut prompt = format!(
        "Generate {} domain name candidates for this business (batch {} of {}).\n\n\
         Business: {}\n\
         Vibe: {}\n\
         Preferred TLDs: {}\n",
        options.count(),
        options.batch_num,
        options.max_batches(),
        options.business_name,
        options.vibe,
        options.tld_preferences.join(", "),
    );

    if let Some(idea) = &options.domain_idea {
        prompt.push_str(&format!("Starting idea from the client: {}\n", idea));
    }

    if let Some(keywords) = &options.keywords {
        prompt.push_str(&format!("Keywords to draw from: {}\n", keywords));
    }

    if let Some(previous) = &options.previous_results {
        prompt.push_str(&format!(
            "\nAlready tried (do not repeat any of these):\n{}\n",
            previous.tried_summary
        ));
    }

    prompt.push_str(
        "\nReturn ONLY a JSON object with this format:\n\
         {\"domains\": [\"example.com\", \"another.io\"]}\n\n\
         Every entry must be a bare domain name, lowercase, no protocol, no paths.",
    );

    prompt
}

/// Build the user prompt for one evaluation chunk
pub fn format_swarm_prompt(domains: &[String], vibe: &str, business_name: &str) -> String {
    format!(
        "Evaluate these candidate domains for the business \"{}\" (vibe: {}):\n\n\
         {}\n\n\
         Return ONLY a JSON object with this format:\n\
         {{\"evaluations\": [{{\n\
         \"domain\": \"example.com\",\n\
         \"score\": 0.85,\n\
         \"worth_checking\": true,\n\
         \"pronounceable\": true,\n\
         \"memorable\": true,\n\
         \"brand_fit\": true,\n\
         \"email_friendly\": true,\n\
         \"flags\": [],\n\
         \"notes\": \"short justification\"\n\
         }}]}}\n\n\
         Include one entry for every listed domain.",
        business_name,
        vibe,
        domains.join("\n"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PreviousResults;

    #[test]
    fn test_driver_prompt_mentions_batch_and_business() {
        let options = DriverOptions {
            business_name: "Acme Coffee".to_string(),
            tld_preferences: vec!["com".to_string(), "io".to_string()],
            vibe: "cozy".to_string(),
            batch_num: 2,
            count: Some(10),
            ..Default::default()
        };

        let prompt = format_driver_prompt(&options);
        assert!(prompt.contains("Acme Coffee"));
        assert!(prompt.contains("batch 2 of 6"));
        assert!(prompt.contains("Generate 10 domain"));
        assert!(prompt.contains("com, io"));
        assert!(prompt.contains("\"domains\""));
    }

    #[test]
    fn test_driver_prompt_includes_previous_summary() {
        let options = DriverOptions {
            business_name: "Acme".to_string(),
            previous_results: Some(PreviousResults {
                tried_summary: "acme.com, acmecoffee.io".to_string(),
            }),
            ..Default::default()
        };

        let prompt = format_driver_prompt(&options);
        assert!(prompt.contains("acme.com, acmecoffee.io"));
        assert!(prompt.contains("do not repeat"));
    }

    #[test]
    fn test_swarm_prompt_lists_every_domain() {
        let domains = vec!["alpha.com".to_string(), "beta.io".to_string()];
        let prompt = format_swarm_prompt(&domains, "modern", "Acme");

        assert!(prompt.contains("alpha.com"));
        assert!(prompt.contains("beta.io"));
        assert!(prompt.contains("Acme"));
        assert!(prompt.contains("\"evaluations\""));
    }
}
