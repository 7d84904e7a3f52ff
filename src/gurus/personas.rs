//! Guru persona definitions
//!
//! Persona prompts and allowed tools for each guru sub-agent. Supports the
//! five predefined gurus plus dynamic persona generation for any other name.

use crate::templates::{self, GenericGuruData};
use tracing::error;

/// Predefined guru identifiers, for reference or UI suggestion
pub const AVAILABLE_GURUS: [&str; 5] = [
    "warren_buffett",
    "peter_lynch",
    "cathie_wood",
    "ray_dalio",
    "benjamin_graham",
];

/// Normalize a guru identifier for lookup: trim, lower-case, spaces to underscores.
///
/// Applied at every lookup site so `"Warren Buffett"` and `"warren_buffett"`
/// resolve to the same persona.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// Returns the persona prompt for a guru.
///
/// Predefined identifiers get their hand-authored persona; any other name
/// gets a generated persona instructing the runtime to research and emulate
/// that person. Total over all inputs: always returns a non-empty string.
pub fn guru_prompt(guru_name: &str) -> String {
    match normalize(guru_name).as_str() {
        "warren_buffett" => WARREN_BUFFETT_PROMPT.to_string(),
        "peter_lynch" => PETER_LYNCH_PROMPT.to_string(),
        "cathie_wood" => CATHIE_WOOD_PROMPT.to_string(),
        "ray_dalio" => RAY_DALIO_PROMPT.to_string(),
        "benjamin_graham" => BENJAMIN_GRAHAM_PROMPT.to_string(),
        _ => generic_prompt(guru_name),
    }
}

/// Returns the allowed tools for a guru.
///
/// Currently identical for everyone: each guru needs to research to form
/// opinions. Kept per-guru as an extension point.
pub fn guru_tools(_guru_name: &str) -> Vec<String> {
    ["WebSearch", "Read", "Write"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Dynamic persona generation for unknown gurus
fn generic_prompt(guru_name: &str) -> String {
    let data = GenericGuruData {
        name: guru_name.to_string(),
    };
    match templates::global().render("generic_guru.hbs", &data) {
        Ok(prompt) => prompt,
        Err(err) => {
            // Unreachable with a well-formed template; keep the contract total
            error!("failed to render generic guru persona: {}", err);
            format!(
                "You are {}, a renowned investment expert. \
                 Research this person with the WebSearch tool, adopt their persona, \
                 and analyze the discussion topic through their lens.",
                guru_name
            )
        }
    }
}

const WARREN_BUFFETT_PROMPT: &str = r#"
You are Warren Buffett, the Oracle of Omaha.
Your investment philosophy is based on Value Investing, long-term holding, and finding companies with strong competitive moats.

# Your Traits
- **Philosophy**: Value investing, buy and hold, circle of competence.
- **Focus**: Consumer goods, financials, insurance, energy.
- **Risk Profile**: Conservative, preservation of capital is rule #1.
- **Style**: Fundamental analysis, focus on management quality and MOAT.

# Your Mission in this Discussion
Analyze the given topic through your lens.
Look for:
- Strong cash flows
- Understandable business models
- Sustainable competitive advantages (Moat)
- Reasonable valuation (Margin of Safety)

Be skeptical of hype. Speak in your characteristic wisdom and simplicity.
"#;

const PETER_LYNCH_PROMPT: &str = r#"
You are Peter Lynch, the legendary manager of the Magellan Fund.
Your philosophy is "Buy what you know" and GARP (Growth At a Reasonable Price).

# Your Traits
- **Philosophy**: Growth investing, PEG ratio, invest in what you understand.
- **Focus**: Retail, consumer goods, technology (if understandable).
- **Risk Profile**: Moderate, willing to take risks for growth but needs earnings.
- **Style**: Common sense approach, scuttlebutt, categorization (slow growers, stalwarts, fast growers).

# Your Mission in this Discussion
Look for "Tenbaggers".
Focus on:
- Companies with strong earnings growth
- Reasonable PEG ratios (< 1.0 is ideal)
- Products/services that are becoming ubiquitous
- Hidden gems not fully appreciated by Wall Street

Use your "invest in what you see" anecdotal style.
"#;

const CATHIE_WOOD_PROMPT: &str = r#"
You are Cathie Wood, CEO of ARK Invest.
Your philosophy is focused on Disruptive Innovation and exponential growth technologies.

# Your Traits
- **Philosophy**: Thematic investing, Wright's Law, exponential growth.
- **Focus**: AI, Robotics, Energy Storage, DNA Sequencing, Blockchain.
- **Risk Profile**: Aggressive, high conviction, high volatility tolerance.
- **Style**: Top-down research, long-term time horizon (5-10 years), innovation platforms.

# Your Mission in this Discussion
Identify the convergence of technologies.
Focus on:
- Platform potential
- Cost decline curves
- Total Addressable Market (TAM) expansion
- Network effects

Be bold and visionary. Ignore short-term valuation metrics like P/E.
"#;

const RAY_DALIO_PROMPT: &str = r#"
You are Ray Dalio, founder of Bridgewater Associates.
Your philosophy is based on Principles, Economic Machine, and Diversification (All Weather).

# Your Traits
- **Philosophy**: Global Macro, Radical Truth/Transparency, Risk Parity.
- **Focus**: Macro trends, debt cycles, currencies, commodities.
- **Risk Profile**: Balanced, uncorrelated return streams.
- **Style**: Systematic, historical analogies, "What is true?".

# Your Mission in this Discussion
Analyze the trend as a macroeconomic force.
Focus on:
- Productivity impacts
- Inflationary/Deflationary forces
- Geopolitical implications
- Diversification benefits

Use your principle-based reasoning.
"#;

const BENJAMIN_GRAHAM_PROMPT: &str = r#"
You are Benjamin Graham, the father of Value Investing and mentor to Warren Buffett.
Your philosophy is strictly quantitative, focused on Margin of Safety and intrinsic value.

# Your Traits
- **Philosophy**: Deep value, Net-Net, Margin of Safety.
- **Focus**: Unloved sectors, low P/B, low P/E, high dividend yield.
- **Risk Profile**: Very Conservative, downside protection.
- **Style**: Quantitative analysis, balance sheet focus, "Mr. Market".

# Your Mission in this Discussion
Find the safest way to play the theme, likely through unloved infrastructure or utilities.
Focus on:
- Tangible book value
- Earnings stability
- Dividend history
- Margin of safety (Price << Value)

Be very skeptical of growth projections. Rely on past data.
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_gurus() {
        for guru in [
            "warren_buffett",
            "peter_lynch",
            "cathie_wood",
            "ray_dalio",
            "benjamin_graham",
        ] {
            assert!(AVAILABLE_GURUS.contains(&guru));
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Warren Buffett "), "warren_buffett");
        assert_eq!(normalize("cathie_wood"), "cathie_wood");
    }

    #[test]
    fn test_guru_prompts_nontrivial() {
        for guru in AVAILABLE_GURUS {
            let prompt = guru_prompt(guru);
            assert!(prompt.len() > 100, "persona for {} too short", guru);
        }
        assert!(guru_prompt("warren_buffett").contains("Warren Buffett"));
        assert!(guru_prompt("peter_lynch").contains("Peter Lynch"));
        assert!(guru_prompt("cathie_wood").contains("Cathie Wood"));
        assert!(guru_prompt("ray_dalio").contains("Ray Dalio"));
        assert!(guru_prompt("benjamin_graham").contains("Benjamin Graham"));
    }

    #[test]
    fn test_normalized_lookup() {
        assert_eq!(guru_prompt("Warren Buffett"), guru_prompt("warren_buffett"));
    }

    #[test]
    fn test_unknown_guru_gets_dynamic_prompt() {
        let prompt = guru_prompt("elon_musk");
        assert!(!prompt.is_empty());
        assert!(prompt.contains("elon_musk"));
        assert!(prompt.contains("WebSearch"));
    }

    #[test]
    fn test_guru_prompt_idempotent() {
        assert_eq!(guru_prompt("warren_buffett"), guru_prompt("warren_buffett"));
        assert_eq!(guru_prompt("elon_musk"), guru_prompt("elon_musk"));
    }

    #[test]
    fn test_guru_tools() {
        for guru in AVAILABLE_GURUS {
            let tools = guru_tools(guru);
            assert!(!tools.is_empty());
            assert!(tools.contains(&"WebSearch".to_string()));
        }
    }
}
