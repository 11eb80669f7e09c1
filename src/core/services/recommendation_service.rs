//! Fixed, ordered advice rules evaluated over [`DerivedMetrics`].
//!
//! Each rule is an independent pure function. All rules run on every call and
//! the output keeps rule order, so identical inputs always give identical lists.

use crate::config::RuleThresholds;
use crate::currency::{format_amount, format_number, format_percent};
use crate::domain::{
    Displayable, DerivedMetrics, ExpenseRecord, Language, LocalizedText, Percentage,
    Recommendation, RecommendationKind, Severity, UserProfile,
};

/// Inputs visible to every rule.
pub struct RuleContext<'a> {
    pub metrics: &'a DerivedMetrics,
    pub thresholds: &'a RuleThresholds,
}

pub type Rule = fn(&RuleContext<'_>) -> Option<Recommendation>;

/// Evaluation order of the rules; output follows the same order.
pub const RULES: [Rule; 5] = [
    overspend_rule,
    savings_rate_rule,
    category_concentration_rule,
    near_goal_rule,
    emergency_fund_rule,
];

pub struct RecommendationService;

impl RecommendationService {
    /// Generates recommendations with the default thresholds.
    pub fn generate(
        profile: &UserProfile,
        expenses: &[ExpenseRecord],
        metrics: &DerivedMetrics,
    ) -> Vec<Recommendation> {
        Self::generate_with(profile, expenses, metrics, &RuleThresholds::default())
    }

    pub fn generate_with(
        profile: &UserProfile,
        expenses: &[ExpenseRecord],
        metrics: &DerivedMetrics,
        thresholds: &RuleThresholds,
    ) -> Vec<Recommendation> {
        let ctx = RuleContext {
            metrics,
            thresholds,
        };
        let recommendations: Vec<Recommendation> =
            RULES.iter().filter_map(|rule| rule(&ctx)).collect();
        tracing::debug!(
            income_range = %profile.income_range,
            expenses = expenses.len(),
            fired = recommendations.len(),
            "generated recommendations"
        );
        recommendations
    }
}

/// Expenses above income.
pub fn overspend_rule(ctx: &RuleContext<'_>) -> Option<Recommendation> {
    let metrics = ctx.metrics;
    if metrics.total_expenses <= metrics.income {
        return None;
    }
    let total = format_amount(metrics.total_expenses);
    let income = format_amount(metrics.income);
    Some(Recommendation::new(
        RecommendationKind::Overspend,
        Severity::Alert,
        LocalizedText::new(
            "Reduce Discretionary Spending",
            "విచక్షణ ఖర్చును తగ్గించండి",
        ),
        LocalizedText::new(
            format!(
                "Your expenses ({total}) exceed your income ({income}). Review and cut non-essential spending."
            ),
            format!(
                "మీ ఖర్చులు ({total}) మీ ఆదాయం ({income}) కంటే ఎక్కువగా ఉన్నాయి. అనవసరమైన ఖర్చులను తగ్గించండి."
            ),
        ),
    ))
}

/// Always fires exactly once: praise at or above the target rate, a warning otherwise.
pub fn savings_rate_rule(ctx: &RuleContext<'_>) -> Option<Recommendation> {
    let target = ctx.thresholds.target_savings_rate;
    let target_label = format_number(target);
    let recommendation = match ctx.metrics.savings_rate {
        Percentage::Defined(rate) if rate >= target => {
            let rate = format_percent(rate);
            Recommendation::new(
                RecommendationKind::HealthySavingsRate,
                Severity::Success,
                LocalizedText::new("Great Savings Rate!", "గొప్ప పొదుపు రేటు!"),
                LocalizedText::new(
                    format!(
                        "You're saving {rate}% of your income - that's excellent! Keep up this healthy financial habit."
                    ),
                    format!(
                        "మీరు మీ ఆదాయంలో {rate}% పొదుపు చేస్తున్నారు - ఇది అద్భుతం! ఈ ఆరోగ్యకరమైన ఆర్థిక అలవాటును కొనసాగించండి."
                    ),
                ),
            )
        }
        Percentage::Defined(rate) => {
            let rate = format_percent(rate);
            low_savings_rate(LocalizedText::new(
                format!(
                    "You're saving only {rate}% of your income. Aim for at least {target_label}%. Set up automatic transfers to a savings account."
                ),
                format!(
                    "మీరు మీ ఆదాయంలో కేవలం {rate}% మాత్రమే పొదుపు చేస్తున్నారు. కనీసం {target_label}% లక్ష్యంగా పెట్టుకోండి. పొదుపు ఖాతాకు ఆటోమేటిక్ బదిలీలు సెటప్ చేయండి."
                ),
            ))
        }
        Percentage::Undefined => low_savings_rate(LocalizedText::new(
            format!(
                "Your savings rate can't be calculated until your income is above zero. Aim for at least {target_label}%. Set up automatic transfers to a savings account."
            ),
            format!(
                "ఆదాయం సున్నా కంటే ఎక్కువగా ఉన్నప్పుడే మీ పొదుపు రేటును లెక్కించగలము. కనీసం {target_label}% లక్ష్యంగా పెట్టుకోండి. పొదుపు ఖాతాకు ఆటోమేటిక్ బదిలీలు సెటప్ చేయండి."
            ),
        )),
    };
    Some(recommendation)
}

fn low_savings_rate(description: LocalizedText) -> Recommendation {
    Recommendation::new(
        RecommendationKind::LowSavingsRate,
        Severity::Warning,
        LocalizedText::new("Automate Your Savings", "మీ పొదుపును ఆటోమేట్ చేయండి"),
        description,
    )
}

/// The highest-spending category takes more than the allowed share of income.
pub fn category_concentration_rule(ctx: &RuleContext<'_>) -> Option<Recommendation> {
    let metrics = ctx.metrics;
    let (category, total) = metrics.category_totals.highest()?;
    if total <= metrics.income * ctx.thresholds.category_share_limit {
        return None;
    }
    let name_en = category.display_label(Language::En);
    let name_te = category.display_label(Language::Te);
    let amount = format_amount(total);
    let description = match metrics.share_of_income(total) {
        Percentage::Defined(share) => {
            let share = format_percent(share);
            LocalizedText::new(
                format!(
                    "You're spending {amount} on {name_en} ({share}% of income). Consider ways to reduce this."
                ),
                format!(
                    "మీరు {name_te}పై {amount} ఖర్చు చేస్తున్నారు (ఆదాయంలో {share}%). దీన్ని తగ్గించే మార్గాలను పరిశీలించండి."
                ),
            )
        }
        Percentage::Undefined => LocalizedText::new(
            format!("You're spending {amount} on {name_en}. Consider ways to reduce this."),
            format!(
                "మీరు {name_te}పై {amount} ఖర్చు చేస్తున్నారు. దీన్ని తగ్గించే మార్గాలను పరిశీలించండి."
            ),
        ),
    };
    Some(
        Recommendation::new(
            RecommendationKind::CategoryConcentration,
            Severity::Warning,
            LocalizedText::new(
                format!("Review Your {name_en} Budget"),
                format!("మీ {name_te} బడ్జెట్‌ను సమీక్షించండి"),
            ),
            description,
        )
        .about(category.clone()),
    )
}

/// Savings within the last stretch before the goal: `[fraction × goal, goal)`.
pub fn near_goal_rule(ctx: &RuleContext<'_>) -> Option<Recommendation> {
    let metrics = ctx.metrics;
    let goal = metrics.savings_goal;
    let savings = metrics.current_savings;
    if savings < goal * ctx.thresholds.near_goal_fraction || savings >= goal {
        return None;
    }
    let Percentage::Defined(progress) = Percentage::of(savings, goal) else {
        return None;
    };
    let progress = format_percent(progress);
    Some(Recommendation::new(
        RecommendationKind::NearGoal,
        Severity::Success,
        LocalizedText::new("Almost at Your Goal!", "దాదాపు మీ లక్ష్యం వద్ద!"),
        LocalizedText::new(
            format!("You're {progress}% toward your savings goal. Just a little more to go!"),
            format!(
                "మీరు మీ పొదుపు లక్ష్యంలో {progress}% వరకు వచ్చారు. ఇంకా కొంచెం మాత్రమే!"
            ),
        ),
    ))
}

/// A reasonable savings rate but less than the emergency buffer in the bank.
pub fn emergency_fund_rule(ctx: &RuleContext<'_>) -> Option<Recommendation> {
    let metrics = ctx.metrics;
    let thresholds = ctx.thresholds;
    if !metrics
        .savings_rate
        .is_at_least(thresholds.emergency_fund_min_rate)
    {
        return None;
    }
    if metrics.current_savings >= metrics.income * thresholds.emergency_fund_months {
        return None;
    }
    Some(Recommendation::new(
        RecommendationKind::EmergencyFund,
        Severity::Warning,
        LocalizedText::new("Build an Emergency Fund", "అత్యవసర నిధిని నిర్మించండి"),
        LocalizedText::new(
            "Aim to save 3-6 months of expenses for emergencies. You're on the right track with your savings!",
            "అత్యవసర పరిస్థితుల కోసం 3-6 నెలల ఖర్చులను పొదుపు చేయడం లక్ష్యంగా పెట్టుకోండి. మీ పొదుపుతో మీరు సరైన మార్గంలో ఉన్నారు!",
        ),
    ))
}
