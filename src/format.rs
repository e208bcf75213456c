//! Display formatting for cards, chart labels and copy
//!
//! Formatting never feeds back into the model; it only renders its numbers.

use crate::model::{CalculationInputs, CalculationResults, InputField, RoiDays, NOT_APPLICABLE};
use crate::projection::BreakEvenPoint;

/// Hobbies suggested for the recovered time
pub const FUN_ACTIVITIES: [&str; 10] = [
    "mastering roller derby",
    "learning the banjo",
    "competitive dog grooming",
    "becoming a pizza snob",
    "training for a marathon",
    "perfecting your sourdough",
    "learning to juggle",
    "taking 3-hour naps",
    "watching every 80s movie",
    "writing a bad novel",
];

pub fn pick_fun_activity(rng: &mut fastrand::Rng) -> &'static str {
    FUN_ACTIVITIES[rng.usize(..FUN_ACTIVITIES.len())]
}

/// Insert `,` every three digits of an unsigned digit string
fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Grouped number with up to three fraction digits: `97,200`, `2.5`, `1,234.568`
pub fn thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rendered = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if value < 0.0 && (int_part != "0" || !frac.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Whole-dollar USD amount: `$97,200`, `-$2,000`
pub fn currency(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    if rounded < 0.0 {
        format!("-${}", group_digits(&digits))
    } else {
        format!("${}", group_digits(&digits))
    }
}

/// Y-axis tick in thousands: `$2k`, `$12.5k`
pub fn axis_thousands(value: f64) -> String {
    format!("${}k", value / 1000.0)
}

/// X-axis tick: `Start`, `Mo 3`
pub fn month_tick(month: u32) -> String {
    if month == 0 {
        "Start".to_string()
    } else {
        format!("Mo {}", month)
    }
}

/// Break-even marker caption: `Month 0.2`
pub fn break_even_label(point: &BreakEvenPoint) -> String {
    format!("Month {:.1}", point.month)
}

/// Card value for the payback figure: ceiling of the days, or `N/A`
pub fn roi_days_display(roi_days: RoiDays) -> String {
    match roi_days {
        RoiDays::Days(d) => format!("{}", d.ceil() as u64),
        RoiDays::NotApplicable => NOT_APPLICABLE.to_string(),
    }
}

/// Sentence under the payback card
pub fn payback_message(setup_cost: f64, roi_days: RoiDays) -> String {
    match roi_days {
        RoiDays::Days(d) if d > 0.0 => format!(
            "Your ${} investment pays for itself in {} days. The rest is pure profit (or fun).",
            thousands(setup_cost),
            d.ceil() as u64
        ),
        RoiDays::Days(_) => "No setup cost to recover. It's pure profit (or fun) from day one.".to_string(),
        RoiDays::NotApplicable => "Savings are currently negative. Are you charging enough?".to_string(),
    }
}

/// Hours recovered in a typical month, rounded
pub fn monthly_hours_saved(results: &CalculationResults) -> i64 {
    (results.hours_saved_annually / 12.0).round() as i64
}

/// Slider readout, e.g. `$450`, `2.5 hrs`, `15 min`
pub fn input_display(inputs: &CalculationInputs, field: InputField) -> String {
    let (prefix, unit) = field.affixes();
    format!("{}{}{}", prefix, thousands(inputs.get(field)), unit)
}

/// Plain-text rendering of the three summary cards
pub fn summary_cards(inputs: &CalculationInputs, results: &CalculationResults, fun_activity: &str) -> Vec<(String, String, String)> {
    vec![
        (
            "Opportunity Cost Recovered".to_string(),
            format!("${}", thousands(results.opportunity_cost)),
            "That's a lot of roller skates.".to_string(),
        ),
        (
            "Hours Saved Annually".to_string(),
            format!("{} hrs", thousands(results.hours_saved_annually.round())),
            format!("Enough time to start {}!", fun_activity),
        ),
        (
            "The \"No-Brainer\" Stat".to_string(),
            format!("{} Working Days", roi_days_display(results.roi_days)),
            payback_message(inputs.setup_cost, results.roi_days),
        ),
    ]
}
