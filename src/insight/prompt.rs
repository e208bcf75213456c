//! Prompt template for the prose summary

use crate::format::{monthly_hours_saved, thousands};
use crate::model::{CalculationInputs, CalculationResults, RoiDays, NOT_APPLICABLE};

fn break_even_days(roi_days: RoiDays) -> String {
    match roi_days {
        RoiDays::Days(d) => format!("{}", d.ceil() as u64),
        RoiDays::NotApplicable => NOT_APPLICABLE.to_string(),
    }
}

/// Interpolate the numbers into the fixed consultant prompt
pub fn build_prompt(inputs: &CalculationInputs, results: &CalculationResults) -> String {
    let days = break_even_days(results.roi_days);

    format!(
        "You are a witty Legal Operations Consultant who hates inefficiency.

Context:
A commercial attorney (Solo/Small Firm) is currently drowning in manual document drafting.
- Manual Process: {manual} hours/doc (Painful).
- Automated Process: {auto} minutes/doc (Magic).
- Volume: {volume} docs/month.
- Rate: ${rate}/hr.
- Setup: ${setup}.
- Savings: ${savings} & {hours} hours.
- Break-even: {days} days.

Task:
Write a 3-paragraph summary that is professional but has personality (smart, punchy, slightly humorous).

1. The Reality Check: Validate the misery of spending {manual} hours on a standard doc. Mention that the investment pays for itself in just {days} days (a \"no-brainer\").
2. The Freedom: Explain what saving ~{monthly_hours} hours/month actually feels like (sanity restored).
3. The \"Roller Skate\" Factor: Suggest one serious business move (like landing a whale client) AND one completely fun/unexpected hobby (like roller derby, learning the banjo, competitive napping, or attending clown college) they can finally pursue with the recovered time.

Tone: Witty, sharp, peer-to-peer, but mathematically sound. Keep it under 150 words. Do not use markdown headers.",
        manual = inputs.hours_per_doc_manual,
        auto = inputs.minutes_per_doc_auto,
        volume = inputs.monthly_volume,
        rate = inputs.hourly_rate,
        setup = thousands(inputs.setup_cost),
        savings = thousands(results.annual_savings),
        hours = thousands(results.hours_saved_annually),
        days = days,
        monthly_hours = monthly_hours_saved(results),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::compute;

    #[test]
    fn test_prompt_interpolates_numbers() {
        let inputs = CalculationInputs::default();
        let prompt = build_prompt(&inputs, &compute(&inputs));

        assert!(prompt.contains("- Manual Process: 2.5 hours/doc (Painful)."));
        assert!(prompt.contains("- Automated Process: 15 minutes/doc (Magic)."));
        assert!(prompt.contains("- Volume: 8 docs/month."));
        assert!(prompt.contains("- Rate: $450/hr."));
        assert!(prompt.contains("- Setup: $2,000."));
        assert!(prompt.contains("- Savings: $97,200 & 216 hours."));
        assert!(prompt.contains("- Break-even: 6 days."));
        assert!(prompt.contains("saving ~18 hours/month"));
    }

    #[test]
    fn test_prompt_with_no_payback() {
        let inputs = CalculationInputs {
            hours_per_doc_manual: 0.5,
            minutes_per_doc_auto: 60.0,
            ..Default::default()
        };
        let prompt = build_prompt(&inputs, &compute(&inputs));
        assert!(prompt.contains("- Break-even: N/A days."));
        assert!(prompt.contains("& -48 hours."));
    }
}
